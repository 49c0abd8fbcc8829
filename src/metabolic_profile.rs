// src/metabolic_profile.rs - Normalisation constants and exponents per metabolic strategy

use once_cell::sync::Lazy;
use std::collections::HashMap;

use crate::animal::MetabolicStrategy;
use crate::constants::{
    BASAL_EXPONENT, BASAL_NORMALIZATION, ECTOTHERM_FIELD_EXPONENT, ECTOTHERM_FIELD_NORMALIZATION,
    ENDOTHERM_FIELD_EXPONENT, ENDOTHERM_FIELD_NORMALIZATION, FIELD_MIXTURE_WEIGHT,
};

/// Power law `normalization * mass_g ^ exponent` for one metabolic regime.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RegimeScaling {
    pub normalization: f64,
    pub exponent: f64,
}

impl RegimeScaling {
    pub fn at_mass(&self, mass_g: f64) -> f64 {
        self.normalization * mass_g.powf(self.exponent)
    }
}

#[derive(Debug, Clone)]
pub struct MetabolicProfile {
    pub kind: MetabolicStrategy,
    pub basal: RegimeScaling,
    pub field: RegimeScaling,
    /// Weight of the field regime in the mixture; the basal regime gets the rest.
    pub field_weight: f64,
}

impl MetabolicProfile {
    /// Mixture of the field and basal regimes for one individual, before the
    /// temperature weighting is applied.
    pub fn mass_term(&self, mass_g: f64) -> f64 {
        self.field_weight * self.field.at_mass(mass_g)
            + (1.0 - self.field_weight) * self.basal.at_mass(mass_g)
    }

    /// Metabolic rate of one individual given the Arrhenius factor of its body temperature.
    pub fn rate_at(&self, mass_g: f64, boltzmann_factor: f64) -> f64 {
        self.mass_term(mass_g) * boltzmann_factor
    }
}

pub static METABOLIC_PROFILES: Lazy<HashMap<MetabolicStrategy, MetabolicProfile>> =
    Lazy::new(|| {
        use MetabolicStrategy::*;
        let mut m = HashMap::new();

        m.insert(Endothermic, MetabolicProfile {
            kind: Endothermic,
            basal: RegimeScaling {
                normalization: BASAL_NORMALIZATION,
                exponent: BASAL_EXPONENT,
            },
            field: RegimeScaling {
                normalization: ENDOTHERM_FIELD_NORMALIZATION,
                exponent: ENDOTHERM_FIELD_EXPONENT,
            },
            field_weight: FIELD_MIXTURE_WEIGHT,
        });

        m.insert(Ectothermic, MetabolicProfile {
            kind: Ectothermic,
            basal: RegimeScaling {
                normalization: BASAL_NORMALIZATION,
                exponent: BASAL_EXPONENT,
            },
            field: RegimeScaling {
                normalization: ECTOTHERM_FIELD_NORMALIZATION,
                exponent: ECTOTHERM_FIELD_EXPONENT,
            },
            field_weight: FIELD_MIXTURE_WEIGHT,
        });

        m
    });

pub fn get_profile(kind: MetabolicStrategy) -> Option<&'static MetabolicProfile> {
    METABOLIC_PROFILES.get(&kind)
}
