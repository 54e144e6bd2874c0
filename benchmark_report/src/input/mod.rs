//!
//! Benchmark log input.
//!

pub mod error;

use std::path::Path;

use regex::Regex;

use crate::model::record::Record;
use crate::model::result_set::ResultSet;

use self::error::Error;

///
/// A benchmark log parsed into a result set.
///
/// The log is line-oriented, one framework per line:
///
/// ```text
/// flight rps=5000 memory=1.2 file=3 type=micro
/// siler-4 rps=4500 memory=1.5 file=5 type=router
/// ```
///
/// Blank lines and lines starting with `#` are skipped. Unknown keys are
/// ignored. Omitted measurements default to zero. A repeated framework
/// name overwrites the earlier record, keeping its position.
///
#[derive(Debug)]
pub struct LogReport {
    /// The per-framework measurements in log order.
    pub results: ResultSet,
}

impl LogReport {
    ///
    /// Parses the log text into a result set.
    ///
    pub fn parse(text: &str) -> Result<Self, Error> {
        let pair_regex = Regex::new(r"^([a-z_][a-z0-9_]*)=(\S+)$").expect("Always valid");

        let mut results = ResultSet::new();
        for (line_index, line) in text.lines().enumerate() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            let line_number = line_index + 1;

            let mut tokens = line.split_whitespace();
            let name = tokens.next().expect("Always exists");

            let mut record = Record::default();
            let mut recognized = 0usize;
            for token in tokens {
                let captures = pair_regex
                    .captures(token)
                    .ok_or_else(|| Error::InvalidLine {
                        line: line_number,
                        text: line.to_owned(),
                    })?;
                let key = captures.get(1).expect("Always exists").as_str();
                let value = captures.get(2).expect("Always exists").as_str();
                match key {
                    "rps" => record.rps = Self::parse_number(line_number, key, value)?,
                    "memory" => record.memory = Self::parse_number(line_number, key, value)?,
                    "time" => record.time = Self::parse_number(line_number, key, value)?,
                    "file" => {
                        record.file = value.parse().map_err(|_| Error::InvalidValue {
                            line: line_number,
                            key: key.to_owned(),
                            value: value.to_owned(),
                        })?
                    }
                    "type" => record.kind = value.to_owned(),
                    _ => continue,
                }
                recognized += 1;
            }
            if recognized == 0 {
                return Err(Error::InvalidLine {
                    line: line_number,
                    text: line.to_owned(),
                });
            }

            results.insert(name.to_owned(), record);
        }

        if results.is_empty() {
            return Err(Error::NoEntries);
        }
        Ok(Self { results })
    }

    ///
    /// Parses a measurement value, rejecting anything but a finite
    /// non-negative number.
    ///
    fn parse_number(line: usize, key: &str, value: &str) -> Result<f64, Error> {
        match value.parse::<f64>() {
            Ok(number) if number.is_finite() && number >= 0.0 => Ok(number),
            _ => Err(Error::InvalidValue {
                line,
                key: key.to_owned(),
                value: value.to_owned(),
            }),
        }
    }
}

impl TryFrom<&Path> for LogReport {
    type Error = Error;

    fn try_from(path: &Path) -> Result<Self, Self::Error> {
        let text = std::fs::read_to_string(path).map_err(|error| Error::Reading {
            error,
            path: path.to_path_buf(),
        })?;
        Self::parse(text.as_str())
    }
}
