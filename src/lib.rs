//! Univariate linear regression fitted by batch gradient descent.
//!
//! A line `y = w * x + b` is fitted to integer `(x, y)` pairs by repeatedly
//! stepping the parameters against the mean-squared-error gradient.
//!
//! ```rust
//! use gradfit::{Dataset, TrainingConfig, train};
//!
//! let mut data = Dataset::new();
//! data.push(1, 2);
//! data.push(2, 3);
//! data.push(3, 4);
//!
//! let config = TrainingConfig::default()
//!     .with_learning_rate(0.1)
//!     .with_iterations(10)
//!     .with_log_every(5);
//! let (params, records) = train(&data, &config).unwrap();
//!
//! assert_eq!(records.len(), 3);
//! assert!(params.w > 0.0);
//! ```

pub use ndarray::{Array1, ArrayView1};

pub mod cli;
pub mod config;
pub mod dataset;
pub mod error;
pub mod linear_model;
pub mod metrics;
pub mod series;

pub use config::{OutputTarget, TrainingConfig};
pub use dataset::Dataset;
pub use error::{Error, Result};
pub use linear_model::{Gradient, Parameters, ProgressRecord, gradient, train, train_with};
pub use series::Series;

pub type Vector = Array1<f64>;
