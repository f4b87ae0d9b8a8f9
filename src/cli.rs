//! Command surface: `gradfit <input-target pairs file> [settings file]`.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

use crate::config::{OutputTarget, TrainingConfig};
use crate::dataset::Dataset;
use crate::error::{Error, Result, StreamRole};
use crate::linear_model::{Parameters, train_with};
use crate::metrics;

/// Paths named on the command line.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Invocation {
    pub input: PathBuf,
    pub settings: Option<PathBuf>,
}

impl Invocation {
    /// Expects the program name followed by one or two paths.
    pub fn from_args(args: &[String]) -> Result<Self> {
        let program = args.first().cloned().unwrap_or_else(|| "gradfit".to_string());

        match args {
            [_, input] => Ok(Self {
                input: PathBuf::from(input),
                settings: None,
            }),
            [_, input, settings] => Ok(Self {
                input: PathBuf::from(input),
                settings: Some(PathBuf::from(settings)),
            }),
            _ => Err(Error::Usage { program }),
        }
    }
}

pub fn usage(program: &str) -> String {
    format!(
        "Usage: {program} <input-target pairs file> [initial settings file]

<input-target pairs file> example (input-target.txt):
1 2
2 3
3 4
123 432
10 1
-10 37

<initial settings file> example (settings.txt):
w 0.0
b 0.0
alpha 0.00001
iterations 100000
output stdout
log-every 100

Settings:
  w           initial weight
  b           initial bias
  alpha       learning rate
  iterations  last iteration to run, counted from 0 (1000 runs 0..=1000, 1001 steps)
  log-every   iterations between progress lines (100 logs 0, 100, 200, ...)
  output      file receiving progress lines; unset, `stdout` or `-` writes to
              standard output (both names are reserved, use ./stdout for a file)

The settings file is optional; unspecified settings take the values shown
above. Settings may appear in any order, and a file such as

log-every 1000
w 100

is also valid. Both files hold whitespace separated `value value` pairs.
"
    )
}

fn open_output(target: &OutputTarget) -> Result<Box<dyn Write>> {
    match target {
        OutputTarget::Stdout => Ok(Box::new(BufWriter::new(io::stdout().lock()))),
        OutputTarget::File(path) => {
            let file = File::create(path).map_err(|e| Error::open(StreamRole::Output, path, e))?;
            Ok(Box::new(BufWriter::new(file)))
        }
    }
}

/// Reads the inputs, trains, and writes progress lines to the configured output.
///
/// The output target is only opened once the inputs are known to be usable,
/// so a failed run leaves no output file behind.
pub fn run(invocation: &Invocation) -> Result<Parameters> {
    let data = Dataset::load(&invocation.input)?;
    log::info!(
        "read {} samples from {}",
        data.n_samples(),
        invocation.input.display()
    );

    let config = match &invocation.settings {
        Some(path) => TrainingConfig::load(path)?,
        None => TrainingConfig::default(),
    };
    log::info!("training with {config}");

    // train_with checks these too, but only after the output file would
    // already have been created.
    config.validate()?;
    if data.is_empty() {
        return Err(Error::DegenerateInput);
    }

    let mut out = open_output(&config.output)?;
    let params = train_with(&data, &config, |record| {
        writeln!(out, "{record}")?;
        Ok(())
    })?;
    out.flush()?;

    log::info!(
        "final parameters w={} b={} (mse {:.6}, r2 {:.6})",
        params.w,
        params.b,
        metrics::mean_squared_error(&data, &params)?,
        metrics::r2_score(&data, &params)?
    );

    Ok(params)
}
