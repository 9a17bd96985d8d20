use std::{
    fs::{self, File},
    io::{BufWriter, Write},
    path::{Path, PathBuf},
};

use log::info;
use ndarray::{Array1, ArrayView1};

use crate::{LogRegErr, Result, normalization::Bounds, training::CostHistory};

pub const WEIGHTS_FILE: &str = "weights.csv";
pub const BOUNDS_FILE: &str = "normalize.csv";
pub const COST_HISTORY_FILE: &str = "cost_history.csv";

/// Persists the results of a training run as flat files inside a directory.
#[derive(Debug, Clone)]
pub struct ArtifactWriter {
    dir: PathBuf,
}

impl ArtifactWriter {
    /// Creates a new `ArtifactWriter` writing into `dir`.
    pub fn new<P: Into<PathBuf>>(dir: P) -> Self {
        Self { dir: dir.into() }
    }

    pub fn weights_path(&self) -> PathBuf {
        self.dir.join(WEIGHTS_FILE)
    }

    pub fn bounds_path(&self) -> PathBuf {
        self.dir.join(BOUNDS_FILE)
    }

    pub fn cost_history_path(&self) -> PathBuf {
        self.dir.join(COST_HISTORY_FILE)
    }

    /// Writes the weights, the normalization bounds and the cost history, in that order.
    ///
    /// Stops at the first failure, files written before it are left in place.
    pub fn save(&self, w: ArrayView1<f32>, bounds: &Bounds, history: &CostHistory) -> Result<()> {
        fs::create_dir_all(&self.dir).map_err(|e| LogRegErr::io(&self.dir, e))?;

        self.write_weights(w)?;
        self.write_bounds(bounds)?;
        self.write_cost_history(history)?;

        info!("artifacts written to {}", self.dir.display());
        Ok(())
    }

    /// Writes the weights as a single comma separated line.
    pub fn write_weights(&self, w: ArrayView1<f32>) -> Result<()> {
        let line = w.iter().map(f32::to_string).collect::<Vec<_>>().join(",");
        write_file(&self.weights_path(), |out| write!(out, "{line}"))
    }

    /// Writes the bounds as `max,<value>` and `min,<value>` lines.
    pub fn write_bounds(&self, bounds: &Bounds) -> Result<()> {
        write_file(&self.bounds_path(), |out| {
            writeln!(out, "max,{}", bounds.max())?;
            writeln!(out, "min,{}", bounds.min())
        })
    }

    /// Writes one `<iteration>,<accuracy>` line per iteration.
    pub fn write_cost_history(&self, history: &CostHistory) -> Result<()> {
        write_file(&self.cost_history_path(), |out| {
            for (i, cost) in history.iter().enumerate() {
                writeln!(out, "{i},{cost}")?;
            }
            Ok(())
        })
    }
}

fn write_file<F>(path: &Path, body: F) -> Result<()>
where
    F: FnOnce(&mut BufWriter<File>) -> std::io::Result<()>,
{
    let file = File::create(path).map_err(|e| LogRegErr::io(path, e))?;
    let mut out = BufWriter::new(file);

    body(&mut out)
        .and_then(|_| out.flush())
        .map_err(|e| LogRegErr::io(path, e))
}

fn parse_value(path: &Path, line: usize, column: usize, field: &str) -> Result<f32> {
    field.trim().parse().map_err(|_| LogRegErr::Parse {
        line,
        column,
        field: format!("{}: {field}", path.display()),
    })
}

/// Reads back a weights file written by `ArtifactWriter::write_weights`.
pub fn read_weights<P: AsRef<Path>>(path: P) -> Result<Array1<f32>> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|e| LogRegErr::io(path, e))?;

    let weights = content
        .trim()
        .split(',')
        .enumerate()
        .map(|(i, field)| parse_value(path, 1, i + 1, field))
        .collect::<Result<Vec<_>>>()?;

    Ok(Array1::from_vec(weights))
}

/// Reads back a bounds file written by `ArtifactWriter::write_bounds`, so that datasets
/// scored later on are rescaled exactly like the training data was.
pub fn read_bounds<P: AsRef<Path>>(path: P) -> Result<Bounds> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|e| LogRegErr::io(path, e))?;

    let mut max = None;
    let mut min = None;

    for (i, line) in content.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }

        let Some((key, value)) = line.split_once(',') else {
            return Err(LogRegErr::FieldCount {
                line: i + 1,
                got: 1,
                expected: 2,
            });
        };

        let value = parse_value(path, i + 1, 2, value)?;
        match key.trim() {
            "max" => max = Some(value),
            "min" => min = Some(value),
            other => {
                return Err(LogRegErr::Parse {
                    line: i + 1,
                    column: 1,
                    field: other.to_string(),
                });
            }
        }
    }

    match (max, min) {
        (Some(max), Some(min)) => Bounds::new(max, min),
        _ => Err(LogRegErr::Normalization(format!(
            "{} is missing the max or min entry",
            path.display()
        ))),
    }
}
