//! Gradient descent for a one-variable line.
//!
//! - [`gradient`]: mean-squared-error gradient at given [`Parameters`]
//! - [`train`] / [`train_with`]: the fixed-length descent loop
//!
//! # Examples
//!
//! ```rust
//! use gradfit::{Parameters, Series, gradient};
//!
//! let x = Series::from(vec![1, 2, 3]);
//! let y = Series::from(vec![2, 3, 4]);
//!
//! let grad = gradient(&x, &y, &Parameters::new(1.0, 1.0)).unwrap();
//! assert_eq!(grad.dw, 0.0);
//! assert_eq!(grad.db, 0.0);
//! ```

mod gradient;
mod gradient_descent;

pub use gradient::{Gradient, Parameters, gradient};
pub use gradient_descent::{ProgressRecord, train, train_with};
