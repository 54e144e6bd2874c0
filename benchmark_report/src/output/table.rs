//!
//! Rendering result sets as fixed-width tables.
//!

use std::fmt::Write;

use crate::model::relative::RelativeRecord;
use crate::model::relative::RelativeResultSet;

/// The table header row.
pub const HEADER: &str =
    "|framework          |requests per second|relative|peak memory|relative|files|          type|";
/// The markdown alignment row following the header.
pub const SEPARATOR: &str =
    "|-------------------|------------------:|-------:|----------:|-------:|----:|-------------:|";

///
/// Renders a result set as a fixed-width table.
///
/// Columns: framework name, requests per second, its relative value,
/// peak memory, its relative value, file count, and the classification
/// tag. Metrics are formatted to two decimal places with thousands
/// separators, relative ratios to one decimal place.
///
pub struct Table<'a> {
    /// The result set to render.
    set: &'a RelativeResultSet,
}

impl<'a> Table<'a> {
    ///
    /// A shortcut constructor.
    ///
    pub fn new(set: &'a RelativeResultSet) -> Self {
        Self { set }
    }

    ///
    /// Renders the plain text table: one header line when requested,
    /// then one line per framework.
    ///
    pub fn render(&self, header: bool) -> String {
        let mut table = String::with_capacity((self.set.len() + 1) * (HEADER.len() + 1));
        if header {
            table.push_str(HEADER);
            table.push('\n');
        }
        for (name, entry) in self.set.entries.iter() {
            Self::write_row(&mut table, name.as_str(), entry);
        }
        table
    }

    ///
    /// Renders the markdown table: the header, the alignment separator,
    /// then one line per framework.
    ///
    pub fn render_markdown(&self) -> String {
        let mut table = String::with_capacity((self.set.len() + 2) * (HEADER.len() + 1));
        table.push_str(HEADER);
        table.push('\n');
        table.push_str(SEPARATOR);
        table.push('\n');
        for (name, entry) in self.set.entries.iter() {
            Self::write_row(&mut table, name.as_str(), entry);
        }
        table
    }

    ///
    /// Writes a single framework row.
    ///
    fn write_row(table: &mut String, name: &str, entry: &RelativeRecord) {
        writeln!(
            table,
            "|{:<19}|{:>19}|{:>8}|{:>11}|{:>8}|{:>5}|{:>14}|",
            name,
            format_number(entry.record.rps, 2),
            format_number(entry.rps_relative.unwrap_or_default(), 1),
            format_number(entry.record.memory, 2),
            format_number(entry.memory_relative.unwrap_or_default(), 1),
            entry.record.file,
            entry.record.kind,
        )
        .expect("Always valid");
    }
}

///
/// Formats a number to the given number of decimal places, grouping
/// integer digits with thousands separators.
///
pub(crate) fn format_number(value: f64, decimals: usize) -> String {
    let formatted = format!("{value:.decimals$}");
    let (integer, fraction) = match formatted.split_once('.') {
        Some((integer, fraction)) => (integer, Some(fraction)),
        None => (formatted.as_str(), None),
    };

    let mut grouped = String::with_capacity(integer.len() + integer.len() / 3);
    for (index, digit) in integer.chars().enumerate() {
        if index > 0 && (integer.len() - index) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    match fraction {
        Some(fraction) => format!("{grouped}.{fraction}"),
        None => grouped,
    }
}
