use std::{
    error::Error,
    fmt::{self, Display},
    io,
    path::PathBuf,
};

/// The result type used in the entire crate.
pub type Result<T> = std::result::Result<T, LogRegErr>;

/// The crate's error type. Every variant is fatal for a training run.
#[derive(Debug)]
pub enum LogRegErr {
    /// A field could not be converted to a number.
    Parse {
        line: usize,
        column: usize,
        field: String,
    },
    /// A line does not have the amount of fields the schema expects.
    FieldCount {
        line: usize,
        got: usize,
        expected: usize,
    },
    /// The source did not contain a single record.
    EmptyDataset,
    /// The data can't be rescaled into `[0, 1]`.
    Normalization(String),
    SizeMismatch {
        a: &'static str,
        b: &'static str,
        got: usize,
        expected: usize,
    },
    InvalidConfig(String),
    Io {
        path: PathBuf,
        source: io::Error,
    },
}

impl LogRegErr {
    /// Wraps an `io::Error` together with the path it happened on.
    pub fn io<P: Into<PathBuf>>(path: P, source: io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

impl Display for LogRegErr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LogRegErr::Parse {
                line,
                column,
                field,
            } => write!(
                f,
                "line {line}, column {column}: '{field}' is not a valid number"
            ),
            LogRegErr::FieldCount {
                line,
                got,
                expected,
            } => write!(f, "line {line}: got {got} fields, expected {expected}"),
            LogRegErr::EmptyDataset => write!(f, "the dataset has no rows"),
            LogRegErr::Normalization(msg) => write!(f, "can't normalize dataset: {msg}"),
            LogRegErr::SizeMismatch {
                a,
                b,
                got,
                expected,
            } => write!(
                f,
                "There's a size mismatch between {a} and {b}, got {got} and expected {expected}"
            ),
            LogRegErr::InvalidConfig(msg) => write!(f, "invalid config: {msg}"),
            LogRegErr::Io { path, source } => write!(f, "{}: {source}", path.display()),
        }
    }
}

impl Error for LogRegErr {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            LogRegErr::Io { source, .. } => Some(source),
            _ => None,
        }
    }
}
