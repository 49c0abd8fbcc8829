//! Body temperature and the Arrhenius temperature weighting of metabolic rates.

use crate::animal::MetabolicStrategy;
use crate::constants::{
    ACTIVATION_ENERGY_EV, BOLTZMANN_EV_PER_K, ECTOTHERM_BODY_TEMP_OFFSET_K,
    ENDOTHERM_BODY_TEMP_K,
};
use crate::error::{EnergeticsError, Result};

/// Body temperature of an individual in Kelvin.
///
/// Endotherms hold a constant 310 K whatever the ambient temperature.
/// Ectotherms track the ambient temperature using the model's own
/// 274.15 K offset, which is one degree above the Celsius/Kelvin offset.
pub fn body_temperature_k(strategy: MetabolicStrategy, ambient_temp_c: f64) -> f64 {
    match strategy {
        MetabolicStrategy::Endothermic => ENDOTHERM_BODY_TEMP_K,
        MetabolicStrategy::Ectothermic => ambient_temp_c + ECTOTHERM_BODY_TEMP_OFFSET_K,
    }
}

/// Arrhenius weighting `exp(-Ea / (kB * T))`.
///
/// # Arguments
/// - `temp_k`: Body temperature in Kelvin, must be above absolute zero
///
/// # Returns
/// The dimensionless Boltzmann factor
pub fn boltzmann_factor(temp_k: f64) -> Result<f64> {
    if !temp_k.is_finite() || temp_k <= 0.0 {
        return Err(EnergeticsError::InvalidTemperature(temp_k));
    }
    Ok((-ACTIVATION_ENERGY_EV / (BOLTZMANN_EV_PER_K * temp_k)).exp())
}
