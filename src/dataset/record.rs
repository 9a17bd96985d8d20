use std::num::NonZeroUsize;

use crate::{LogRegErr, Result};

/// A single line of a delimited data file, split into its raw fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    line: usize,
    fields: Vec<String>,
}

impl Record {
    /// Returns the raw fields of this record.
    pub fn fields(&self) -> &[String] {
        &self.fields
    }

    /// Converts every field of this record to a number.
    ///
    /// # Returns
    /// The values in field order, or a `Parse` error pointing at the first field that is not
    /// a finite number. `NaN`, `inf` and literals overflowing `f32` are all rejected.
    pub fn values(&self) -> Result<Vec<f32>> {
        self.fields
            .iter()
            .enumerate()
            .map(|(i, field)| match field.parse::<f32>() {
                Ok(v) if v.is_finite() => Ok(v),
                _ => Err(LogRegErr::Parse {
                    line: self.line,
                    column: i + 1,
                    field: field.clone(),
                }),
            })
            .collect()
    }
}

/// Splits lines into records with a fixed amount of fields.
#[derive(Debug, Clone, Copy)]
pub struct RecordParser {
    delimiter: char,
    fields: NonZeroUsize,
}

impl RecordParser {
    /// Creates a new `RecordParser`.
    ///
    /// # Arguments
    /// * `delimiter` - The character separating fields.
    /// * `fields` - The exact amount of fields every line must have.
    pub fn new(delimiter: char, fields: NonZeroUsize) -> Self {
        Self { delimiter, fields }
    }

    /// Parses a line into a `Record`.
    ///
    /// # Arguments
    /// * `line` - The 1-based line number, used for error reporting.
    /// * `text` - The contents of the line, without the line terminator.
    ///
    /// # Returns
    /// The record, or a `FieldCount` error if the line doesn't match the schema.
    pub fn parse(&self, line: usize, text: &str) -> Result<Record> {
        let fields: Vec<String> = text
            .split(self.delimiter)
            .map(|field| field.trim().to_string())
            .collect();

        if fields.len() != self.fields.get() {
            return Err(LogRegErr::FieldCount {
                line,
                got: fields.len(),
                expected: self.fields.get(),
            });
        }

        Ok(Record { line, fields })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parser(fields: usize) -> RecordParser {
        RecordParser::new(',', NonZeroUsize::new(fields).unwrap())
    }

    #[test]
    fn splits_and_trims_fields() {
        let record = parser(3).parse(1, " 1.5, 2 ,3").unwrap();
        assert_eq!(record.fields(), ["1.5", "2", "3"]);
        assert_eq!(record.values().unwrap(), vec![1.5, 2.0, 3.0]);
    }

    #[test]
    fn wrong_field_count_fails() {
        let err = parser(3).parse(7, "1,2").unwrap_err();
        assert!(matches!(
            err,
            LogRegErr::FieldCount {
                line: 7,
                got: 2,
                expected: 3
            }
        ));
    }

    #[test]
    fn invalid_number_reports_its_position() {
        let record = parser(3).parse(4, "1,x9,3").unwrap();
        let err = record.values().unwrap_err();
        assert!(matches!(
            err,
            LogRegErr::Parse { line: 4, column: 2, ref field } if field == "x9"
        ));
    }

    #[test]
    fn non_finite_values_are_rejected() {
        let parser = parser(2);

        for (text, column) in [("NaN,1", 1), ("1,inf", 2), ("1e40,0", 1), ("0,-inf", 2)] {
            let err = parser.parse(3, text).unwrap().values().unwrap_err();
            assert!(matches!(err, LogRegErr::Parse { line: 3, column: c, .. } if c == column));
        }
    }

    #[test]
    fn empty_field_is_not_a_number() {
        let record = parser(2).parse(1, "1,").unwrap();
        assert!(record.values().is_err());
    }
}
