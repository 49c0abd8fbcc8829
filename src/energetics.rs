//! Daily metabolic energy expenditure of animal groups.
//!
//! Individual rates follow a two-regime (field and basal) mixture, each regime
//! a power law in body mass weighted by the Arrhenius factor of the body
//! temperature. Rates are in kJ/day.

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::animal::{AnimalCategory, AnimalGroup, EnvironmentContext, MeasurementKind, MetabolicStrategy};
use crate::constants::{
    GRAMS_PER_KG, INSECT_LOG_MASS_INTERCEPT, INSECT_LOG_MASS_SLOPE, KG_PER_MG, MM_PER_CM,
};
use crate::error::{EnergeticsError, Result, ensure_positive};
use crate::math_utils;
use crate::metabolic_profile::get_profile;
use crate::temp_utils::{body_temperature_k, boltzmann_factor};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GroupEnergyResult {
    pub category: AnimalCategory,
    pub individual_count: u64,
    pub mass_kg: f64,
    pub rate_kj_per_day: f64,
    pub total_energy_kj_per_day: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PopulationSummary {
    pub group_count: usize,
    pub total_energy_kj_per_day: f64,
    pub mean: f64,
    pub median: f64,
    pub standard_deviation: f64,
}

/// Metabolic rate of one individual in kJ/day.
///
/// # Arguments
/// - `mass_kg`: Body mass in kilograms
/// - `strategy`: Endotherms use a fixed 310 K body temperature and ignore `ambient_temp_c`
/// - `ambient_temp_c`: Ambient temperature in °C
pub fn metabolic_rate(mass_kg: f64, strategy: MetabolicStrategy, ambient_temp_c: f64) -> Result<f64> {
    ensure_positive("mass", mass_kg)?;
    let profile = get_profile(strategy)
        .ok_or_else(|| EnergeticsError::UnsupportedStrategy(strategy.to_string()))?;

    let temp_k = body_temperature_k(strategy, ambient_temp_c);
    let factor = boltzmann_factor(temp_k)?;
    let mass_g = mass_kg * GRAMS_PER_KG;

    let rate = profile.rate_at(mass_g, factor);
    debug!(mass_kg, %strategy, temp_k, rate, "metabolic rate");
    Ok(rate)
}

/// Estimated insect body mass (kg) from body length (cm).
///
/// Log-log regression of mass in mg on length in mm.
pub fn length_to_mass(length_cm: f64) -> Result<f64> {
    ensure_positive("length", length_cm)?;

    let length_mm = length_cm * MM_PER_CM;
    let log_mass_mg = INSECT_LOG_MASS_INTERCEPT + INSECT_LOG_MASS_SLOPE * length_mm.log10();
    let mass_kg = 10_f64.powf(log_mass_mg) * KG_PER_MG;
    if !(mass_kg.is_finite() && mass_kg > 0.0) {
        return Err(EnergeticsError::InvalidMeasurement {
            field: "length",
            value: length_cm,
            reason: "outside the range the length-mass regression can represent",
        });
    }

    trace!(length_cm, mass_kg, "length to mass");
    Ok(mass_kg)
}

/// Body mass (kg) of one individual of the group.
pub fn resolve_mass(group: &AnimalGroup) -> Result<f64> {
    match group.measurement_kind {
        MeasurementKind::MassKg => ensure_positive("mass", group.measurement),
        MeasurementKind::LengthCm => length_to_mass(group.measurement),
    }
}

/// Total daily energy of a group in kJ/day.
pub fn group_energy(group: &AnimalGroup, ambient_temp_c: f64) -> Result<f64> {
    Ok(group_result(group, &EnvironmentContext::new(ambient_temp_c))?.total_energy_kj_per_day)
}

/// Full per-group record: resolved mass, individual rate and group total.
pub fn group_result(group: &AnimalGroup, env: &EnvironmentContext) -> Result<GroupEnergyResult> {
    ensure_positive("measurement", group.measurement)?;
    if group.individual_count == 0 {
        return Err(EnergeticsError::non_positive("individual count", 0.0));
    }

    let mass_kg = resolve_mass(group)?;
    let rate = metabolic_rate(mass_kg, group.metabolic_strategy, env.ambient_temperature_c)?;

    Ok(GroupEnergyResult {
        category: group.category,
        individual_count: group.individual_count,
        mass_kg,
        rate_kj_per_day: rate,
        total_energy_kj_per_day: rate * group.individual_count as f64,
    })
}

/// Evaluates every group in order.
///
/// A failure is tagged with the group's position and category.
pub fn calculate_groups(
    groups: &[AnimalGroup],
    env: &EnvironmentContext,
) -> Result<Vec<GroupEnergyResult>> {
    groups
        .iter()
        .enumerate()
        .map(|(index, group)| {
            group_result(group, env).map_err(|source| EnergeticsError::Group {
                index,
                category: Some(group.category),
                source: Box::new(source),
            })
        })
        .collect()
}

/// Sum of group totals; zero when there are no groups.
pub fn total_energy(results: &[GroupEnergyResult]) -> f64 {
    results.iter().map(|r| r.total_energy_kj_per_day).sum()
}

/// Total, mean, median and population standard deviation of group totals.
pub fn aggregate_statistics(results: &[GroupEnergyResult]) -> Result<PopulationSummary> {
    let totals: Vec<f64> = results.iter().map(|r| r.total_energy_kj_per_day).collect();

    let mean = math_utils::mean(&totals).ok_or(EnergeticsError::EmptyInput)?;
    let median = math_utils::median(&totals).ok_or(EnergeticsError::EmptyInput)?;
    let standard_deviation =
        math_utils::population_std_dev(&totals).ok_or(EnergeticsError::EmptyInput)?;

    Ok(PopulationSummary {
        group_count: totals.len(),
        total_energy_kj_per_day: totals.iter().sum(),
        mean,
        median,
        standard_deviation,
    })
}
