use std::fs::File;
use std::io::{BufRead, BufReader, Read};
use std::path::Path;

use crate::error::{Error, Result, StreamRole};
use crate::{Series, Vector};

/// Paired `x`/`y` samples. Index `i` of `x` belongs with index `i` of `y`.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Dataset {
    x: Series,
    y: Series,
}

impl Dataset {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_series(x: Series, y: Series) -> Result<Self> {
        if x.len() != y.len() {
            return Err(Error::LengthMismatch {
                x: x.len(),
                y: y.len(),
            });
        }

        Ok(Self { x, y })
    }

    pub fn push(&mut self, x: i32, y: i32) {
        self.x.append(x);
        self.y.append(y);
    }

    pub fn x(&self) -> &Series {
        &self.x
    }

    pub fn y(&self) -> &Series {
        &self.y
    }

    pub fn n_samples(&self) -> usize {
        self.x.len()
    }

    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }

    /// Both series widened to `f64`, in that order.
    pub fn to_vectors(&self) -> (Vector, Vector) {
        (self.x.to_vector(), self.y.to_vector())
    }

    /// Reads whitespace separated `x y` integer pairs.
    ///
    /// Reading stops at the first token that is not an `i32` (including one
    /// that is not valid UTF-8); pairs read before it are kept. A trailing
    /// unpaired value is dropped.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        let reader = BufReader::new(reader);
        let mut data = Self::new();
        let mut pending: Option<i32> = None;

        'lines: for (line_no, line) in reader.split(b'\n').enumerate() {
            let line = line?;
            for token in byte_tokens(&line) {
                let parsed = std::str::from_utf8(token)
                    .ok()
                    .and_then(|t| t.parse::<i32>().ok());
                let Some(value) = parsed else {
                    log::debug!(
                        "stopped reading pairs at line {}: {:?} is not an integer",
                        line_no + 1,
                        String::from_utf8_lossy(token)
                    );
                    break 'lines;
                };
                match pending.take() {
                    Some(x) => data.push(x, value),
                    None => pending = Some(value),
                }
            }
        }

        if let Some(x) = pending {
            log::debug!("dropping unpaired trailing value {x}");
        }

        Ok(data)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|e| Error::open(StreamRole::Input, path, e))?;
        Self::from_reader(file)
    }
}

/// Whitespace separated tokens of a raw line, without requiring UTF-8.
pub(crate) fn byte_tokens(line: &[u8]) -> impl Iterator<Item = &[u8]> {
    <[u8]>::split(line, |b| b.is_ascii_whitespace()).filter(|token| !token.is_empty())
}
