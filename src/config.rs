//! Calculator configuration

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::animal::EnvironmentContext;
use crate::constants::{DEFAULT_AMBIENT_TEMP_C, DEFAULT_REPORT_PRECISION};

/// Defaults applied when a calculation request leaves them out.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnergeticsConfig {
    /// Ambient temperature (°C) used when no scenario or flag sets one
    pub ambient_temperature_c: f64,
    /// Decimal places in printed energies
    pub precision: usize,
    /// Colour report headings
    pub color: bool,
}

impl Default for EnergeticsConfig {
    fn default() -> Self {
        Self {
            ambient_temperature_c: DEFAULT_AMBIENT_TEMP_C,
            precision: DEFAULT_REPORT_PRECISION,
            color: true,
        }
    }
}

impl EnergeticsConfig {
    /// Load configuration from a `.env` file and the process environment
    pub fn load() -> Self {
        let _ = dotenvy::dotenv();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup.
    ///
    /// Unparseable values are logged and ignored.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut cfg = Self::default();

        if let Some(val) = lookup("ENERGETICS_AMBIENT_TEMP_C") {
            match val.trim().parse::<f64>() {
                Ok(v) if v.is_finite() => cfg.ambient_temperature_c = v,
                _ => warn!(value = %val, "ignoring ENERGETICS_AMBIENT_TEMP_C"),
            }
        }
        if let Some(val) = lookup("ENERGETICS_PRECISION") {
            match val.trim().parse::<usize>() {
                Ok(v) => cfg.precision = v,
                Err(_) => warn!(value = %val, "ignoring ENERGETICS_PRECISION"),
            }
        }
        if let Some(val) = lookup("ENERGETICS_COLOR") {
            match val.trim().to_ascii_lowercase().as_str() {
                "1" | "true" | "yes" | "on" => cfg.color = true,
                "0" | "false" | "no" | "off" => cfg.color = false,
                _ => warn!(value = %val, "ignoring ENERGETICS_COLOR"),
            }
        }

        cfg
    }

    pub fn environment(&self) -> EnvironmentContext {
        EnvironmentContext::new(self.ambient_temperature_c)
    }
}
