//!
//! Output format for report data.
//!

///
/// Output format for report data.
///
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    /// Fixed-width text table.
    Table,
    /// Markdown table with an alignment separator row.
    Markdown,
    /// Pretty-printed JSON with report metadata.
    Json,
    /// CSV format.
    Csv,
    /// Excel spreadsheet format.
    Xlsx,
    /// Chart datasets as JSON, one per metric.
    Graph,
}

impl std::str::FromStr for OutputFormat {
    type Err = anyhow::Error;

    fn from_str(string: &str) -> Result<Self, Self::Err> {
        match string.to_lowercase().as_str() {
            "table" => Ok(Self::Table),
            "markdown" => Ok(Self::Markdown),
            "json" => Ok(Self::Json),
            "csv" => Ok(Self::Csv),
            "xlsx" => Ok(Self::Xlsx),
            "graph" => Ok(Self::Graph),
            string => anyhow::bail!(
                "Unknown output format `{string}`. Supported formats: {}",
                vec![
                    Self::Table,
                    Self::Markdown,
                    Self::Json,
                    Self::Csv,
                    Self::Xlsx,
                    Self::Graph,
                ]
                .into_iter()
                .map(|element| element.to_string())
                .collect::<Vec<String>>()
                .join(", ")
            ),
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Table => write!(f, "table"),
            OutputFormat::Markdown => write!(f, "markdown"),
            OutputFormat::Json => write!(f, "json"),
            OutputFormat::Csv => write!(f, "csv"),
            OutputFormat::Xlsx => write!(f, "xlsx"),
            OutputFormat::Graph => write!(f, "graph"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::OutputFormat;

    #[test]
    fn parses_known_formats() {
        assert_eq!("table".parse::<OutputFormat>().ok(), Some(OutputFormat::Table));
        assert_eq!("JSON".parse::<OutputFormat>().ok(), Some(OutputFormat::Json));
        assert_eq!("xlsx".parse::<OutputFormat>().ok(), Some(OutputFormat::Xlsx));
    }

    #[test]
    fn rejects_unknown_formats_naming_the_supported_ones() {
        let error = "html".parse::<OutputFormat>().expect_err("Always invalid");
        assert!(error.to_string().contains("table, markdown, json, csv, xlsx, graph"));
    }
}
