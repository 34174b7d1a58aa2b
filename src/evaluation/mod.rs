//! Route cost and summary statistics used to compare schedules.
//!
//! - [`RouteEvaluator`] — closed-loop distance of a truck's route
//! - [`mean`] / [`std_dev`] — population mean and standard deviation

mod evaluator;
mod statistics;

pub use evaluator::RouteEvaluator;
pub use statistics::{mean, std_dev};
