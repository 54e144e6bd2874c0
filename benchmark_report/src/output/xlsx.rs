//!
//! Serializing report data to an Excel spreadsheet.
//!

use crate::model::relative::RelativeResultSet;

///
/// XLSX output format for report data.
///
pub struct Xlsx {
    /// Worksheet with one row per framework.
    pub worksheet: rust_xlsxwriter::Worksheet,
}

impl Xlsx {
    /// The column headers, matching the CSV column set.
    const COLUMN_HEADERS: [&'static str; 10] = [
        "framework",
        "rps",
        "rps relative",
        "memory",
        "memory relative",
        "time",
        "time relative",
        "file",
        "file relative",
        "type",
    ];

    ///
    /// Creates a new worksheet with the caption and column headers.
    ///
    pub fn new() -> anyhow::Result<Self> {
        let mut worksheet = rust_xlsxwriter::Worksheet::new();
        worksheet.set_name("Results")?;

        worksheet.write_with_format(0, 0, "Results", &Self::worksheet_caption_format())?;
        worksheet.set_column_width(0, 30)?;

        for (column_index, header) in Self::COLUMN_HEADERS.into_iter().enumerate() {
            let column_index = column_index as u16;
            if column_index > 0 {
                worksheet.set_column_width(column_index, 14)?;
            }
            worksheet.write_with_format(1, column_index, header, &Self::column_header_format())?;
        }

        Ok(Self { worksheet })
    }

    ///
    /// Returns the final workbook with the results worksheet.
    ///
    pub fn finalize(mut self) -> rust_xlsxwriter::Workbook {
        self.worksheet.autofit_to_max_width(100);

        let mut workbook = rust_xlsxwriter::Workbook::new();
        workbook.push_worksheet(self.worksheet);
        workbook
    }

    ///
    /// Returns the eponymous cell format.
    ///
    fn worksheet_caption_format() -> rust_xlsxwriter::Format {
        let format = rust_xlsxwriter::Format::new();
        let format = format.set_bold();
        let format = format.set_font_size(24);
        let format = format.set_font_color("#FFFFFF");
        let format = format.set_background_color("#4C6EF5");
        let format = format.set_align(rust_xlsxwriter::FormatAlign::Left);
        let format = format.set_align(rust_xlsxwriter::FormatAlign::VerticalCenter);
        let format = format.set_border(rust_xlsxwriter::FormatBorder::None);
        format
    }

    ///
    /// Returns the eponymous cell format.
    ///
    fn column_header_format() -> rust_xlsxwriter::Format {
        let format = rust_xlsxwriter::Format::new();
        let format = format.set_bold();
        let format = format.set_font_size(14);
        let format = format.set_font_color("#1E1E1E");
        let format = format.set_background_color("#EEF3FF");
        let format = format.set_align(rust_xlsxwriter::FormatAlign::Center);
        let format = format.set_align(rust_xlsxwriter::FormatAlign::Top);
        let format = format.set_border(rust_xlsxwriter::FormatBorder::None);
        format
    }

    ///
    /// Returns the eponymous cell format.
    ///
    fn row_header_format() -> rust_xlsxwriter::Format {
        let format = rust_xlsxwriter::Format::new();
        let format = format.set_font_size(12);
        let format = format.set_font_color("#1E1E1E");
        let format = format.set_background_color("#DDE6FF");
        let format = format.set_align(rust_xlsxwriter::FormatAlign::Left);
        let format = format.set_border(rust_xlsxwriter::FormatBorder::None);
        format
    }

    ///
    /// Returns the eponymous cell format.
    ///
    fn value_format() -> rust_xlsxwriter::Format {
        let format = rust_xlsxwriter::Format::new();
        let format = format.set_font_size(12);
        let format = format.set_font_color("#000000");
        let format = format.set_background_color("#FFFFFF");
        let format = format.set_align(rust_xlsxwriter::FormatAlign::Right);
        let format = format.set_border(rust_xlsxwriter::FormatBorder::None);
        format
    }
}

impl TryFrom<&RelativeResultSet> for Xlsx {
    type Error = anyhow::Error;

    fn try_from(results: &RelativeResultSet) -> Result<Self, Self::Error> {
        let mut xlsx = Self::new()?;

        for (row_offset, (name, entry)) in results.entries.iter().enumerate() {
            let row_index = (row_offset + 2) as u32;
            xlsx.worksheet.write_with_format(
                row_index,
                0,
                name.as_str(),
                &Self::row_header_format(),
            )?;

            let values = [
                entry.record.rps,
                entry.rps_relative.unwrap_or_default(),
                entry.record.memory,
                entry.memory_relative.unwrap_or_default(),
                entry.record.time,
                entry.time_relative.unwrap_or_default(),
                entry.record.file as f64,
                entry.file_relative.unwrap_or_default(),
            ];
            for (column_offset, value) in values.into_iter().enumerate() {
                xlsx.worksheet.write_with_format(
                    row_index,
                    (column_offset + 1) as u16,
                    value,
                    &Self::value_format(),
                )?;
            }

            xlsx.worksheet.write_with_format(
                row_index,
                9,
                entry.record.kind.as_str(),
                &Self::value_format(),
            )?;
        }

        Ok(xlsx)
    }
}
