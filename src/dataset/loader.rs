use std::{
    fs::File,
    io::{self, BufRead, BufReader},
    num::NonZeroUsize,
    path::Path,
};

use log::info;
use ndarray::{Array1, Array2};

use super::{Dataset, RecordParser};
use crate::{LogRegErr, Result};

/// Loads delimited text files into a `Dataset`.
///
/// Every line holds `features` numeric fields followed by the label.
#[derive(Debug, Clone, Copy)]
pub struct DatasetLoader {
    parser: RecordParser,
    features: NonZeroUsize,
}

impl DatasetLoader {
    /// Creates a new `DatasetLoader`.
    ///
    /// # Arguments
    /// * `features` - The amount of feature columns per line, the label comes after them.
    /// * `delimiter` - The field separator.
    pub fn new(features: NonZeroUsize, delimiter: char) -> Self {
        let fields = features.saturating_add(1);

        Self {
            parser: RecordParser::new(delimiter, fields),
            features,
        }
    }

    /// Loads the dataset stored at `path`.
    ///
    /// # Errors
    /// `Io` if the file can't be opened or read, `FieldCount` or `Parse` on a malformed
    /// line and `EmptyDataset` if the file has no records.
    pub fn load<P: AsRef<Path>>(&self, path: P) -> Result<Dataset> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|e| LogRegErr::io(path, e))?;
        let dataset = self.read(BufReader::new(file), path)?;

        info!(
            "loaded {} rows with {} features from {}",
            dataset.len(),
            dataset.features(),
            path.display()
        );

        Ok(dataset)
    }

    /// Reads a dataset from any buffered source in a single pass.
    ///
    /// # Arguments
    /// * `reader` - The source of lines.
    /// * `origin` - Where the lines come from, only used for error reporting.
    pub fn read<R: BufRead>(&self, reader: R, origin: &Path) -> Result<Dataset> {
        let features = self.features.get();
        let mut xs = Vec::new();
        let mut ys = Vec::new();

        for (i, line) in reader.lines().enumerate() {
            let line = line.map_err(|e| LogRegErr::io(origin, e))?;
            if line.trim().is_empty() {
                continue;
            }

            let record = self.parser.parse(i + 1, &line)?;
            let mut values = record.values()?;
            let label = values.pop().ok_or(LogRegErr::EmptyDataset)?;

            xs.extend_from_slice(&values);
            ys.push(label);
        }

        if ys.is_empty() {
            return Err(LogRegErr::EmptyDataset);
        }

        let rows = ys.len();
        let x = Array2::from_shape_vec((rows, features), xs).map_err(|_| {
            LogRegErr::SizeMismatch {
                a: "feature buffer",
                b: "rows",
                got: rows,
                expected: features,
            }
        })?;

        Dataset::new(x, Array1::from_vec(ys))
    }
}

/// Counts the non-blank lines of a source.
pub fn count_rows<R: BufRead>(reader: R) -> io::Result<usize> {
    let mut rows = 0;

    for line in reader.lines() {
        if !line?.trim().is_empty() {
            rows += 1;
        }
    }

    Ok(rows)
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use ndarray::array;

    use super::*;

    fn loader(features: usize) -> DatasetLoader {
        DatasetLoader::new(NonZeroUsize::new(features).unwrap(), ',')
    }

    fn read(features: usize, text: &str) -> Result<Dataset> {
        loader(features).read(Cursor::new(text), Path::new("inline"))
    }

    #[test]
    fn splits_features_from_labels() {
        let ds = read(2, "0,0,0\n0,1,0\n1,0,1\n1,1,1\n").unwrap();

        assert_eq!(ds.x(), &array![[0., 0.], [0., 1.], [1., 0.], [1., 1.]]);
        assert_eq!(ds.y(), &array![0., 0., 1., 1.]);
    }

    #[test]
    fn skips_blank_lines_and_crlf() {
        let ds = read(1, "2,1\r\n\n3,0\r\n\n").unwrap();
        assert_eq!(ds.len(), 2);
        assert_eq!(ds.y(), &array![1., 0.]);
    }

    #[test]
    fn malformed_line_aborts_the_load() {
        let err = read(2, "0,0,0\n0,1\n").unwrap_err();
        assert!(matches!(err, LogRegErr::FieldCount { line: 2, .. }));

        let err = read(2, "0,0,0\n0,abc,1\n").unwrap_err();
        assert!(matches!(err, LogRegErr::Parse { line: 2, column: 2, .. }));
    }

    #[test]
    fn non_finite_fields_abort_the_load() {
        let err = read(2, "0,0,0\n1e40,1,1\n").unwrap_err();
        assert!(matches!(err, LogRegErr::Parse { line: 2, column: 1, .. }));

        let err = read(2, "0,1,NaN\n").unwrap_err();
        assert!(matches!(err, LogRegErr::Parse { line: 1, column: 3, .. }));
    }

    #[test]
    fn empty_source_fails() {
        let err = read(2, "\n\n").unwrap_err();
        assert!(matches!(err, LogRegErr::EmptyDataset));
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let err = loader(2)
            .load("/definitely/not/here/train.csv")
            .unwrap_err();
        assert!(matches!(err, LogRegErr::Io { .. }));
    }

    #[test]
    fn counts_rows() {
        let rows = count_rows(Cursor::new("1,2\n3,4\n\n5,6")).unwrap();
        assert_eq!(rows, 3);
    }
}
