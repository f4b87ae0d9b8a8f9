use std::fmt;
use std::fs::File;
use std::io::{BufRead, BufReader, Read};
use std::path::{Path, PathBuf};

use crate::dataset::byte_tokens;
use crate::error::{Error, Result, StreamRole};
use crate::linear_model::Parameters;

pub const DEFAULT_LEARNING_RATE: f64 = 0.00001;
pub const DEFAULT_ITERATIONS: usize = 100_000;
pub const DEFAULT_LOG_EVERY: usize = 100;

/// Where progress records are written.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum OutputTarget {
    #[default]
    Stdout,
    File(PathBuf),
}

impl OutputTarget {
    /// `stdout` and `-` are reserved for standard output; a file with one
    /// of those names is reached through a path such as `./stdout`.
    fn parse(value: &str) -> Self {
        match value {
            "stdout" | "-" => Self::Stdout,
            path => Self::File(PathBuf::from(path)),
        }
    }
}

impl fmt::Display for OutputTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Stdout => write!(f, "stdout"),
            Self::File(path) => write!(f, "{}", path.display()),
        }
    }
}

/// Hyperparameters for one training run. Built before training, never
/// changed while it runs.
#[derive(Clone, Debug, PartialEq)]
pub struct TrainingConfig {
    pub initial_w: f64,
    pub initial_b: f64,
    pub learning_rate: f64,
    /// Last iteration index; `iterations + 1` updates are performed.
    pub iterations: usize,
    pub log_every: usize,
    pub output: OutputTarget,
}

impl Default for TrainingConfig {
    fn default() -> Self {
        Self {
            initial_w: 0.0,
            initial_b: 0.0,
            learning_rate: DEFAULT_LEARNING_RATE,
            iterations: DEFAULT_ITERATIONS,
            log_every: DEFAULT_LOG_EVERY,
            output: OutputTarget::Stdout,
        }
    }
}

impl TrainingConfig {
    pub fn with_weight(mut self, w: f64) -> Self {
        self.initial_w = w;
        self
    }

    pub fn with_bias(mut self, b: f64) -> Self {
        self.initial_b = b;
        self
    }

    pub fn with_learning_rate(mut self, learning_rate: f64) -> Self {
        self.learning_rate = learning_rate;
        self
    }

    pub fn with_iterations(mut self, iterations: usize) -> Self {
        self.iterations = iterations;
        self
    }

    pub fn with_log_every(mut self, log_every: usize) -> Self {
        self.log_every = log_every;
        self
    }

    pub fn with_output(mut self, output: OutputTarget) -> Self {
        self.output = output;
        self
    }

    pub fn initial_parameters(&self) -> Parameters {
        Parameters::new(self.initial_w, self.initial_b)
    }

    pub fn validate(&self) -> Result<()> {
        if !self.learning_rate.is_finite() || self.learning_rate <= 0.0 {
            return Err(Error::InvalidConfig(format!(
                "alpha must be a positive finite number, got {}",
                self.learning_rate
            )));
        }
        if self.log_every == 0 {
            return Err(Error::InvalidConfig("log-every must be at least 1".to_string()));
        }
        if !self.initial_w.is_finite() || !self.initial_b.is_finite() {
            return Err(Error::InvalidConfig(format!(
                "initial parameters must be finite, got w={} b={}",
                self.initial_w, self.initial_b
            )));
        }
        Ok(())
    }

    /// Defaults overlaid with a settings stream.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        Self::default().overlay(reader)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|e| Error::open(StreamRole::Settings, path, e))?;
        Self::from_reader(file)
    }

    /// Applies `key value` pairs from `reader` on top of `self`.
    ///
    /// Tokens are whitespace separated and read pairwise, so line breaks do
    /// not matter. Later keys overwrite earlier ones. Unknown keys and
    /// unparsable values, including ones that are not valid UTF-8, are
    /// logged and skipped.
    pub fn overlay<R: Read>(mut self, reader: R) -> Result<Self> {
        let reader = BufReader::new(reader);
        let mut key: Option<String> = None;

        for line in reader.split(b'\n') {
            let line = line?;
            for token in byte_tokens(&line) {
                let token = String::from_utf8_lossy(token);
                match key.take() {
                    Some(k) => self.apply(&k, &token),
                    None => key = Some(token.into_owned()),
                }
            }
        }

        if let Some(k) = key {
            log::warn!("setting {k:?} has no value, ignored");
        }

        Ok(self)
    }

    fn apply(&mut self, key: &str, value: &str) {
        let applied = match key {
            "w" => parse_float(value).map(|v| self.initial_w = v),
            "b" => parse_float(value).map(|v| self.initial_b = v),
            "alpha" => parse_float(value).map(|v| self.learning_rate = v),
            "iterations" => parse_count(value).map(|v| self.iterations = v),
            "log-every" => parse_count(value).map(|v| self.log_every = v),
            "output" => {
                self.output = OutputTarget::parse(value);
                Some(())
            }
            _ => {
                log::warn!("Unknown key: {key}");
                return;
            }
        };

        if applied.is_none() {
            log::warn!("invalid value {value:?} for {key}, keeping previous setting");
        }
    }
}

impl fmt::Display for TrainingConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "w={} b={} alpha={} iterations={} log-every={} output={}",
            self.initial_w,
            self.initial_b,
            self.learning_rate,
            self.iterations,
            self.log_every,
            self.output
        )
    }
}

fn parse_float(value: &str) -> Option<f64> {
    value.parse::<f64>().ok()
}

/// Non-negative count. Decimal text is truncated toward zero.
fn parse_count(value: &str) -> Option<usize> {
    if let Ok(count) = value.parse::<usize>() {
        return Some(count);
    }

    let v = value.parse::<f64>().ok()?;
    if v.is_finite() && v >= 0.0 && v < usize::MAX as f64 {
        Some(v.trunc() as usize)
    } else {
        None
    }
}
