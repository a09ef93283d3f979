//! Validation aliases and helpers.
//!
//! Validation accumulates ALL errors instead of stopping at the first one, so
//! a user fixing a config file or a set of flags sees every problem at once.
//!
//! # Example
//!
//! ```rust
//! use copilot_roi::effects::{combine_validations, validation_failure, validation_success};
//! use copilot_roi::errors::ConfigIssue;
//! use stillwater::Validation;
//!
//! let validations = vec![
//!     validation_success(()),
//!     validation_failure(ConfigIssue::new("display.hours_per_fte", "must be positive")),
//!     validation_failure(ConfigIssue::new("ranges.hourly_wage.step", "must be positive")),
//! ];
//!
//! match combine_validations(validations) {
//!     Validation::Failure(errors) => assert_eq!(errors.into_vec().len(), 2),
//!     Validation::Success(_) => unreachable!(),
//! }
//! ```

use crate::errors::{ConfigIssue, InputError, ROIError, ROIResult};
use stillwater::{NonEmptyVec, Validation};

pub type InputValidation<T> = Validation<T, NonEmptyVec<InputError>>;

pub type ConfigValidation<T> = Validation<T, NonEmptyVec<ConfigIssue>>;

pub fn validation_success<T, E>(value: T) -> Validation<T, NonEmptyVec<E>> {
    Validation::Success(value)
}

pub fn validation_failure<T, E>(error: E) -> Validation<T, NonEmptyVec<E>> {
    Validation::Failure(NonEmptyVec::new(error, Vec::new()))
}

/// Success when `errors` is empty, otherwise a failure carrying all of them.
pub fn validation_from_errors<E>(errors: Vec<E>) -> Validation<(), NonEmptyVec<E>> {
    match non_empty(errors) {
        Some(errors) => Validation::Failure(errors),
        None => Validation::Success(()),
    }
}

/// Combine multiple validations, accumulating all errors.
pub fn combine_validations<T, E>(
    validations: Vec<Validation<T, NonEmptyVec<E>>>,
) -> Validation<Vec<T>, NonEmptyVec<E>> {
    let mut successes = Vec::new();
    let mut failures = Vec::new();

    for v in validations {
        match v {
            Validation::Success(value) => successes.push(value),
            Validation::Failure(errors) => failures.extend(errors.into_vec()),
        }
    }

    match non_empty(failures) {
        Some(errors) => Validation::Failure(errors),
        None => Validation::Success(successes),
    }
}

fn non_empty<E>(items: Vec<E>) -> Option<NonEmptyVec<E>> {
    let mut items = items.into_iter();
    let head = items.next()?;
    Some(NonEmptyVec::new(head, items.collect()))
}

/// Convert an input validation into a `Result`.
pub fn run_input_validation<T>(validation: InputValidation<T>) -> ROIResult<T> {
    match validation {
        Validation::Success(value) => Ok(value),
        Validation::Failure(errors) => Err(ROIError::InvalidInputs(errors.into_vec())),
    }
}

/// Convert a config validation into a `Result`.
pub fn run_config_validation<T>(validation: ConfigValidation<T>) -> ROIResult<T> {
    match validation {
        Validation::Success(value) => Ok(value),
        Validation::Failure(errors) => Err(ROIError::InvalidConfig(errors.into_vec())),
    }
}
