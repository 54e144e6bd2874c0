//!
//! Serializing report data to CSV.
//!

use std::fmt::Write;

use crate::model::relative::RelativeResultSet;

///
/// Serialize the report to CSV in the following format:
/// "framework", "rps", "rps relative", "memory", "memory relative", "time", "time relative", "file", "file relative", "type"
///
#[derive(Default)]
pub struct Csv {
    /// The CSV string.
    pub content: String,
}

impl Csv {
    ///
    /// Estimate the length of a CSV line based on the expected maximum lengths of each field.
    ///
    fn estimate_csv_line_length() -> usize {
        let number_fields = 8;
        let number_field_estimated_max_length = 12;
        let framework_name_estimated_max = 24;
        let type_estimated_max = 16;
        framework_name_estimated_max
            + type_estimated_max
            + number_fields * number_field_estimated_max_length
    }

    ///
    /// Estimate the size of the CSV file based on the number of entries and the estimated line length.
    ///
    fn estimate_csv_size(results: &RelativeResultSet) -> usize {
        (results.len() + 1) * Self::estimate_csv_line_length()
    }
}

impl From<&RelativeResultSet> for Csv {
    fn from(results: &RelativeResultSet) -> Csv {
        let mut content = String::with_capacity(Self::estimate_csv_size(results));
        content.push_str(
            r#""framework", "rps", "rps relative", "memory", "memory relative", "time", "time relative", "file", "file relative", "type""#,
        );
        content.push('\n');

        for (name, entry) in results.entries.iter() {
            let record = &entry.record;
            writeln!(
                &mut content,
                r#""{}", {:.2}, {:.1}, {:.2}, {:.1}, {:.2}, {:.1}, {}, {:.1}, "{}""#,
                name,
                record.rps,
                entry.rps_relative.unwrap_or_default(),
                record.memory,
                entry.memory_relative.unwrap_or_default(),
                record.time,
                entry.time_relative.unwrap_or_default(),
                record.file,
                entry.file_relative.unwrap_or_default(),
                record.kind,
            )
            .expect("Always valid");
        }

        Self { content }
    }
}

#[cfg(test)]
mod tests {
    use super::Csv;
    use crate::analysis::recalc_relative_all;
    use crate::model::record::Record;
    use crate::model::relative::RelativeResultSet;
    use crate::model::result_set::ResultSet;

    #[test]
    fn one_line_per_entry_plus_header() {
        let mut set = ResultSet::new();
        set.insert(
            "flight".to_owned(),
            Record {
                rps: 5000.0,
                memory: 1.2,
                time: 0.42,
                file: 3,
                kind: "micro".to_owned(),
            },
        );
        set.insert(
            "siler-4".to_owned(),
            Record {
                rps: 4500.0,
                memory: 1.5,
                time: 0.56,
                file: 5,
                kind: "router".to_owned(),
            },
        );
        let mut set = RelativeResultSet::from(set);
        recalc_relative_all(&mut set);

        let csv = Csv::from(&set);
        assert_eq!(csv.content.lines().count(), 3);
        assert!(csv.content.lines().nth(1).expect("Always exists").starts_with(r#""flight", 5000.00, 1.0"#));
    }
}
