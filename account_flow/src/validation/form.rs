//! Per-form error flags and aggregate validation.

use std::{collections::HashMap, fmt::Debug, hash::Hash};

use crate::config::ValidationMode;

/// A form with a fixed, ordered set of fields
pub trait Form {
    type Field: Copy + Eq + Hash + Debug + 'static;

    /// Fields in validation order
    const FIELDS: &'static [Self::Field];

    /// Whether the current value of `field` is acceptable
    fn is_field_valid(&self, field: Self::Field) -> bool;
}

/// Error flag per field; unset fields read as `false`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldErrors<F: Eq + Hash> {
    flags: HashMap<F, bool>,
}

impl<F: Copy + Eq + Hash> FieldErrors<F> {
    pub fn new() -> Self {
        Self {
            flags: HashMap::new(),
        }
    }

    pub fn get(&self, field: F) -> bool {
        self.flags.get(&field).copied().unwrap_or(false)
    }

    pub fn set(&mut self, field: F, errored: bool) {
        self.flags.insert(field, errored);
    }

    /// Back to the initial all-clear state
    pub fn reset(&mut self) {
        self.flags.clear();
    }

    pub fn any(&self) -> bool {
        self.flags.values().any(|errored| *errored)
    }

    /// Errored fields, in no particular order
    pub fn errored(&self) -> impl Iterator<Item = F> + '_ {
        self.flags
            .iter()
            .filter(|(_, errored)| **errored)
            .map(|(field, _)| *field)
    }
}

impl<F: Copy + Eq + Hash> Default for FieldErrors<F> {
    fn default() -> Self {
        Self::new()
    }
}

/// Walk the fields in order, stopping at the first invalid one
///
/// Passing fields visited before it are cleared; fields after it keep
/// whatever flag they had.
pub fn validate_first_failure<T: Form>(
    form: &T,
    errors: &mut FieldErrors<T::Field>,
) -> Result<(), T::Field> {
    for &field in T::FIELDS {
        if !form.is_field_valid(field) {
            errors.set(field, true);
            return Err(field);
        }
        errors.set(field, false);
    }
    Ok(())
}

/// Flag every field and return the invalid ones in order
pub fn validate_all<T: Form>(
    form: &T,
    errors: &mut FieldErrors<T::Field>,
) -> Result<(), Vec<T::Field>> {
    let failed: Vec<_> = T::FIELDS
        .iter()
        .copied()
        .filter(|&field| {
            let valid = form.is_field_valid(field);
            errors.set(field, !valid);
            !valid
        })
        .collect();

    if failed.is_empty() { Ok(()) } else { Err(failed) }
}

/// Validate according to `mode`, returning the invalid fields
pub fn validate<T: Form>(
    form: &T,
    errors: &mut FieldErrors<T::Field>,
    mode: ValidationMode,
) -> Result<(), Vec<T::Field>> {
    match mode {
        ValidationMode::FirstFailure => validate_first_failure(form, errors).map_err(|f| vec![f]),
        ValidationMode::FullReport => validate_all(form, errors),
    }
}
