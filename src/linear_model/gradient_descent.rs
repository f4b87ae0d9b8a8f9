use std::fmt;

use super::gradient::{Parameters, gradient_dense};
use crate::config::TrainingConfig;
use crate::dataset::Dataset;
use crate::error::{Error, Result};

/// Parameters as they stood when iteration `iteration` began.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ProgressRecord {
    pub iteration: usize,
    pub params: Parameters,
}

impl fmt::Display for ProgressRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "iteration: {}, w: {:.6}, b: {:.6}",
            self.iteration, self.params.w, self.params.b
        )
    }
}

/// Runs batch gradient descent and hands every logged record to `on_record`.
///
/// Iterations run from `0` to `config.iterations` inclusive. A record is
/// emitted for each iteration divisible by `config.log_every`, carrying the
/// parameters before that iteration's update. There is no early stopping.
pub fn train_with<F>(
    data: &Dataset,
    config: &TrainingConfig,
    mut on_record: F,
) -> Result<Parameters>
where
    F: FnMut(&ProgressRecord) -> Result<()>,
{
    config.validate()?;
    if data.is_empty() {
        return Err(Error::DegenerateInput);
    }

    let (x, y) = data.to_vectors();
    let mut params = config.initial_parameters();

    for iteration in 0..=config.iterations {
        let grad = gradient_dense(x.view(), y.view(), &params);

        if iteration % config.log_every == 0 {
            on_record(&ProgressRecord { iteration, params })?;
        }

        params = params.step(&grad, config.learning_rate);
    }

    Ok(params)
}

/// Like [`train_with`] but collects the progress records.
pub fn train(
    data: &Dataset,
    config: &TrainingConfig,
) -> Result<(Parameters, Vec<ProgressRecord>)> {
    let mut records = Vec::new();
    let params = train_with(data, config, |record| {
        records.push(*record);
        Ok(())
    })?;

    Ok((params, records))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::linear_model::gradient;

    fn line_data() -> Dataset {
        let mut data = Dataset::new();
        data.push(1, 2);
        data.push(2, 3);
        data.push(3, 4);
        data
    }

    fn config(iterations: usize, log_every: usize) -> TrainingConfig {
        TrainingConfig::default()
            .with_learning_rate(0.1)
            .with_iterations(iterations)
            .with_log_every(log_every)
    }

    #[test]
    fn test_single_iteration_logs_initial_parameters() {
        let (params, records) = train(&line_data(), &config(0, 1)).unwrap();

        assert_eq!(records.len(), 1);
        assert_eq!(records[0].to_string(), "iteration: 0, w: 0.000000, b: 0.000000");

        // the single step is still applied to the returned parameters
        let grad = gradient(line_data().x(), line_data().y(), &Parameters::default()).unwrap();
        assert!((params.w - (-0.1 * grad.dw)).abs() < 1e-12);
        assert!((params.b - (-0.1 * grad.db)).abs() < 1e-12);
    }

    #[test]
    fn test_record_count_is_inclusive() {
        let (_, records) = train(&line_data(), &config(25, 1)).unwrap();

        assert_eq!(records.len(), 26);
        for (i, record) in records.iter().enumerate() {
            assert_eq!(record.iteration, i);
        }
    }

    #[test]
    fn test_log_every_skips_iterations() {
        let (_, records) = train(&line_data(), &config(250, 100)).unwrap();
        let iterations: Vec<usize> = records.iter().map(|r| r.iteration).collect();

        assert_eq!(iterations, vec![0, 100, 200]);
    }

    #[test]
    fn test_records_are_pre_update_snapshots() {
        let data = line_data();
        let cfg = config(5, 1);
        let (final_params, records) = train(&data, &cfg).unwrap();

        assert_eq!(records[0].params, cfg.initial_parameters());
        for pair in records.windows(2) {
            let grad = gradient(data.x(), data.y(), &pair[0].params).unwrap();
            assert_eq!(pair[1].params, pair[0].params.step(&grad, cfg.learning_rate));
        }

        let last = records[records.len() - 1].params;
        let grad = gradient(data.x(), data.y(), &last).unwrap();
        assert_eq!(final_params, last.step(&grad, cfg.learning_rate));
    }

    #[test]
    fn test_initial_parameters_are_respected() {
        let cfg = config(3, 2).with_weight(100.0).with_bias(-2.5);
        let (_, records) = train(&line_data(), &cfg).unwrap();

        assert_eq!(records[0].params, Parameters::new(100.0, -2.5));
        assert_eq!(records[1].iteration, 2);
    }

    #[test]
    fn test_converges_towards_line() {
        let cfg = config(5000, 1000);
        let (params, _) = train(&line_data(), &cfg).unwrap();

        assert!((params.w - 1.0).abs() < 1e-3);
        assert!((params.b - 1.0).abs() < 1e-3);
    }

    #[test]
    fn test_runs_are_deterministic() {
        let mut data = line_data();
        data.push(123, 432);
        data.push(-10, 37);
        let cfg = TrainingConfig::default().with_iterations(2000).with_log_every(7);

        let render = |records: Vec<ProgressRecord>| {
            records.iter().map(|r| format!("{r}\n")).collect::<String>()
        };
        let (_, first) = train(&data, &cfg).unwrap();
        let (_, second) = train(&data, &cfg).unwrap();

        assert_eq!(render(first), render(second));
    }

    #[test]
    fn test_huge_iteration_count_reaches_validation() {
        for iterations in [usize::MAX, 1usize << 62] {
            let result = train(&Dataset::new(), &config(iterations, 1));
            assert!(matches!(result, Err(Error::DegenerateInput)));
        }

        // a failing sink ends an otherwise endless run after one record
        let mut seen = Vec::new();
        let result = train_with(&line_data(), &config(usize::MAX, 1), |record| {
            seen.push(record.iteration);
            Err(Error::Io(std::io::Error::other("stop")))
        });

        assert!(result.is_err());
        assert_eq!(seen, vec![0]);
    }

    #[test]
    fn test_empty_dataset_is_degenerate() {
        let mut calls = 0;
        let result = train_with(&Dataset::new(), &config(10, 1), |_| {
            calls += 1;
            Ok(())
        });

        assert!(matches!(result, Err(Error::DegenerateInput)));
        assert_eq!(calls, 0);
    }

    #[test]
    fn test_record_error_stops_training() {
        let mut calls = 0;
        let result = train_with(&line_data(), &config(10, 1), |_| {
            calls += 1;
            Err(Error::Io(std::io::Error::other("closed")))
        });

        assert!(matches!(result, Err(Error::Io(_))));
        assert_eq!(calls, 1);
    }

    #[test]
    fn test_negative_values_format() {
        let record = ProgressRecord {
            iteration: 42,
            params: Parameters::new(-1.5, 0.0000004),
        };
        assert_eq!(record.to_string(), "iteration: 42, w: -1.500000, b: 0.000000");
    }

    #[test]
    fn test_non_finite_values_format() {
        let record = ProgressRecord {
            iteration: 7,
            params: Parameters::new(f64::NAN, f64::NEG_INFINITY),
        };
        assert_eq!(record.to_string(), "iteration: 7, w: NaN, b: -inf");
    }
}
