pub mod animal;
pub mod config;
pub mod constants;
pub mod energetics;
pub mod error;
pub mod math_utils;
pub mod metabolic_profile;
pub mod report;
pub mod scenario;
pub mod temp_utils;

pub use animal::{AnimalCategory, AnimalGroup, EnvironmentContext, MeasurementKind, MetabolicStrategy};
pub use energetics::{
    GroupEnergyResult, PopulationSummary, aggregate_statistics, calculate_groups, group_energy,
    length_to_mass, metabolic_rate,
};
pub use error::{EnergeticsError, Result};
