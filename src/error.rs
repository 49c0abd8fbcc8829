//! Error types for the energetics engine
//!
//! Every failure is a property of the input: nothing here is transient and
//! nothing is retried.

use thiserror::Error;

use crate::animal::AnimalCategory;

/// Result type alias using EnergeticsError
pub type Result<T> = std::result::Result<T, EnergeticsError>;

#[derive(Debug, Error)]
pub enum EnergeticsError {
    /// Non-positive or non-finite measurement, length, mass or individual count.
    #[error("invalid {field}: {value} ({reason})")]
    InvalidMeasurement {
        field: &'static str,
        value: f64,
        reason: &'static str,
    },

    #[error("unsupported metabolic strategy '{0}' (expected endothermic or ectothermic)")]
    UnsupportedStrategy(String),

    #[error("unsupported animal category '{0}' (expected mammal, bird, insect or frog)")]
    UnsupportedCategory(String),

    #[error("unsupported measurement kind '{0}' (expected mass or length)")]
    UnsupportedMeasurementKind(String),

    #[error("body temperature {0} K is not above absolute zero")]
    InvalidTemperature(f64),

    #[error("statistics requested over zero groups")]
    EmptyInput,

    /// A failure inside one group of a multi-group calculation. The category
    /// is absent when the category tag itself could not be read.
    #[error("group {index}{}: {source}", category_suffix(.category))]
    Group {
        index: usize,
        category: Option<AnimalCategory>,
        #[source]
        source: Box<EnergeticsError>,
    },

    #[error("scenario error: {0}")]
    Scenario(String),

    #[error("failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

impl EnergeticsError {
    pub(crate) fn non_positive(field: &'static str, value: f64) -> Self {
        let reason = if value.is_finite() {
            "must be greater than zero"
        } else {
            "must be a finite number"
        };
        EnergeticsError::InvalidMeasurement {
            field,
            value,
            reason,
        }
    }

    /// Strips any group wrapper and returns the error that caused it.
    pub fn root_cause(&self) -> &EnergeticsError {
        match self {
            EnergeticsError::Group { source, .. } => source.root_cause(),
            other => other,
        }
    }
}

fn category_suffix(category: &Option<AnimalCategory>) -> String {
    match category {
        Some(c) => format!(" ({})", c),
        None => String::new(),
    }
}

/// Rejects zero, negative and non-finite values.
pub(crate) fn ensure_positive(field: &'static str, value: f64) -> Result<f64> {
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(EnergeticsError::non_positive(field, value))
    }
}
