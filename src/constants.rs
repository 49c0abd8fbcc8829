// Empirical constants of the metabolic model.

// Physical constants
pub const BOLTZMANN_EV_PER_K: f64 = 8.617333262145e-5; // eV/K
pub const ACTIVATION_ENERGY_EV: f64 = 0.69; // aggregate activation energy of metabolic reactions

// Fraction of the day spent in the active (field) regime
pub const FIELD_MIXTURE_WEIGHT: f64 = 0.5;

// Unit conversions
pub const GRAMS_PER_KG: f64 = 1000.0;
pub const MM_PER_CM: f64 = 10.0;
pub const KG_PER_MG: f64 = 1e-6;

// Body temperature model
pub const ENDOTHERM_BODY_TEMP_K: f64 = 310.0;
pub const ECTOTHERM_BODY_TEMP_OFFSET_K: f64 = 274.15; // added to ambient °C

// Basal regime, shared by both strategies
pub const BASAL_NORMALIZATION: f64 = 4.19e10;
pub const BASAL_EXPONENT: f64 = 0.69;

// Field regime
pub const ENDOTHERM_FIELD_NORMALIZATION: f64 = 9.08e11;
pub const ENDOTHERM_FIELD_EXPONENT: f64 = 0.70;
pub const ECTOTHERM_FIELD_NORMALIZATION: f64 = 1.49e11;
pub const ECTOTHERM_FIELD_EXPONENT: f64 = 0.88;

// Insect length-mass regression, Sohlström et al. 2018 (log10 mg ~ log10 mm)
pub const INSECT_LOG_MASS_INTERCEPT: f64 = -0.792;
pub const INSECT_LOG_MASS_SLOPE: f64 = 2.181;

// default calculator settings:
pub const DEFAULT_AMBIENT_TEMP_C: f64 = 25.0;
pub const DEFAULT_REPORT_PRECISION: usize = 2;
