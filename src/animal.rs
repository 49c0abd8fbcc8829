// src/animal.rs - Input records for an energetics calculation

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::constants::DEFAULT_AMBIENT_TEMP_C;
use crate::error::{EnergeticsError, Result, ensure_positive};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", try_from = "String")]
pub enum AnimalCategory {
    Mammal,
    Bird,
    Insect,
    Frog,
}

impl AnimalCategory {
    pub const ALL: [AnimalCategory; 4] = [
        AnimalCategory::Mammal,
        AnimalCategory::Bird,
        AnimalCategory::Insect,
        AnimalCategory::Frog,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            AnimalCategory::Mammal => "mammal",
            AnimalCategory::Bird => "bird",
            AnimalCategory::Insect => "insect",
            AnimalCategory::Frog => "frog",
        }
    }

    /// Display label used in reports.
    pub fn label(&self) -> &'static str {
        match self {
            AnimalCategory::Mammal => "Mammals",
            AnimalCategory::Bird => "Birds",
            AnimalCategory::Insect => "Insects",
            AnimalCategory::Frog => "Frogs",
        }
    }

    /// Whether body length is an accepted measurement for this category.
    pub fn accepts_length(&self) -> bool {
        matches!(self, AnimalCategory::Insect)
    }
}

impl fmt::Display for AnimalCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for AnimalCategory {
    type Err = EnergeticsError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "mammal" | "mammals" => Ok(AnimalCategory::Mammal),
            "bird" | "birds" => Ok(AnimalCategory::Bird),
            "insect" | "insects" => Ok(AnimalCategory::Insect),
            "frog" | "frogs" => Ok(AnimalCategory::Frog),
            _ => Err(EnergeticsError::UnsupportedCategory(s.to_string())),
        }
    }
}

impl TryFrom<String> for AnimalCategory {
    type Error = EnergeticsError;

    fn try_from(s: String) -> Result<Self> {
        s.parse()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", try_from = "String")]
pub enum MetabolicStrategy {
    Endothermic,
    Ectothermic,
}

impl MetabolicStrategy {
    pub fn as_str(&self) -> &'static str {
        match self {
            MetabolicStrategy::Endothermic => "endothermic",
            MetabolicStrategy::Ectothermic => "ectothermic",
        }
    }
}

impl fmt::Display for MetabolicStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MetabolicStrategy {
    type Err = EnergeticsError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "endothermic" => Ok(MetabolicStrategy::Endothermic),
            "ectothermic" => Ok(MetabolicStrategy::Ectothermic),
            _ => Err(EnergeticsError::UnsupportedStrategy(s.to_string())),
        }
    }
}

impl TryFrom<String> for MetabolicStrategy {
    type Error = EnergeticsError;

    fn try_from(s: String) -> Result<Self> {
        s.parse()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", try_from = "String")]
pub enum MeasurementKind {
    MassKg,
    LengthCm,
}

impl MeasurementKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            MeasurementKind::MassKg => "mass_kg",
            MeasurementKind::LengthCm => "length_cm",
        }
    }
}

impl FromStr for MeasurementKind {
    type Err = EnergeticsError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "mass" | "kg" | "mass_kg" => Ok(MeasurementKind::MassKg),
            "length" | "cm" | "length_cm" => Ok(MeasurementKind::LengthCm),
            _ => Err(EnergeticsError::UnsupportedMeasurementKind(s.to_string())),
        }
    }
}

impl TryFrom<String> for MeasurementKind {
    type Error = EnergeticsError;

    fn try_from(s: String) -> Result<Self> {
        s.parse()
    }
}

/// One homogeneous group of animals.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnimalGroup {
    pub category: AnimalCategory,
    pub measurement: f64,
    pub measurement_kind: MeasurementKind,
    pub individual_count: u64,
    pub metabolic_strategy: MetabolicStrategy,
}

impl AnimalGroup {
    pub fn by_mass(
        category: AnimalCategory,
        mass_kg: f64,
        individual_count: u64,
        metabolic_strategy: MetabolicStrategy,
    ) -> Self {
        Self {
            category,
            measurement: mass_kg,
            measurement_kind: MeasurementKind::MassKg,
            individual_count,
            metabolic_strategy,
        }
    }

    pub fn by_length(
        category: AnimalCategory,
        length_cm: f64,
        individual_count: u64,
        metabolic_strategy: MetabolicStrategy,
    ) -> Self {
        Self {
            category,
            measurement: length_cm,
            measurement_kind: MeasurementKind::LengthCm,
            individual_count,
            metabolic_strategy,
        }
    }

    /// Checks the record invariants: positive measurement and count, and a
    /// length measurement only for insects.
    pub fn validate(&self) -> Result<()> {
        ensure_positive("measurement", self.measurement)?;
        if self.individual_count == 0 {
            return Err(EnergeticsError::non_positive("individual count", 0.0));
        }
        if self.measurement_kind == MeasurementKind::LengthCm && !self.category.accepts_length() {
            return Err(EnergeticsError::InvalidMeasurement {
                field: "measurement kind",
                value: self.measurement,
                reason: "length measurements are only defined for insects",
            });
        }
        Ok(())
    }
}

/// Parses the compact `category:kind:value:count:strategy` form,
/// e.g. `mammal:mass:0.02:100:endothermic`.
impl FromStr for AnimalGroup {
    type Err = EnergeticsError;

    fn from_str(s: &str) -> Result<Self> {
        let parts: Vec<&str> = s.split(':').collect();
        if parts.len() != 5 {
            return Err(EnergeticsError::Scenario(format!(
                "group '{}' must look like category:kind:value:count:strategy",
                s
            )));
        }

        let category: AnimalCategory = parts[0].parse()?;
        let measurement_kind: MeasurementKind = parts[1].parse()?;
        let measurement: f64 = parts[2].trim().parse().map_err(|_| {
            EnergeticsError::Scenario(format!("measurement '{}' is not a number", parts[2]))
        })?;
        let individual_count: u64 = parts[3].trim().parse().map_err(|_| {
            EnergeticsError::Scenario(format!(
                "individual count '{}' is not a whole number",
                parts[3]
            ))
        })?;
        let metabolic_strategy: MetabolicStrategy = parts[4].parse()?;

        Ok(Self {
            category,
            measurement,
            measurement_kind,
            individual_count,
            metabolic_strategy,
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EnvironmentContext {
    pub ambient_temperature_c: f64,
}

impl EnvironmentContext {
    pub fn new(ambient_temperature_c: f64) -> Self {
        Self {
            ambient_temperature_c,
        }
    }
}

impl Default for EnvironmentContext {
    fn default() -> Self {
        Self::new(DEFAULT_AMBIENT_TEMP_C)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_parsing_accepts_singular_and_plural() {
        for category in AnimalCategory::ALL {
            assert_eq!(category.as_str().parse::<AnimalCategory>().unwrap(), category);
            assert_eq!(category.label().parse::<AnimalCategory>().unwrap(), category);
        }
        assert!(matches!(
            "fish".parse::<AnimalCategory>(),
            Err(EnergeticsError::UnsupportedCategory(_))
        ));
    }

    #[test]
    fn test_unknown_strategy_is_rejected() {
        assert_eq!(
            "Endothermic".parse::<MetabolicStrategy>().unwrap(),
            MetabolicStrategy::Endothermic
        );
        match "hibernating".parse::<MetabolicStrategy>() {
            Err(EnergeticsError::UnsupportedStrategy(tag)) => assert_eq!(tag, "hibernating"),
            other => panic!("expected UnsupportedStrategy, got {:?}", other),
        }
    }

    #[test]
    fn test_group_from_compact_form() {
        let group: AnimalGroup = "insect:length:1.0:5000:ectothermic".parse().unwrap();
        assert_eq!(group.category, AnimalCategory::Insect);
        assert_eq!(group.measurement_kind, MeasurementKind::LengthCm);
        assert_eq!(group.measurement, 1.0);
        assert_eq!(group.individual_count, 5000);
        assert_eq!(group.metabolic_strategy, MetabolicStrategy::Ectothermic);

        assert!("mammal:mass:0.02:100".parse::<AnimalGroup>().is_err());
        assert!("mammal:mass:heavy:100:endothermic".parse::<AnimalGroup>().is_err());
        assert!("mammal:mass:0.02:-3:endothermic".parse::<AnimalGroup>().is_err());
    }

    #[test]
    fn test_validate() {
        let ok = AnimalGroup::by_mass(AnimalCategory::Bird, 0.03, 12, MetabolicStrategy::Endothermic);
        assert!(ok.validate().is_ok());

        let zero_count = AnimalGroup { individual_count: 0, ..ok.clone() };
        assert!(zero_count.validate().is_err());

        let zero_mass = AnimalGroup { measurement: 0.0, ..ok.clone() };
        assert!(zero_mass.validate().is_err());

        let bird_by_length =
            AnimalGroup::by_length(AnimalCategory::Bird, 12.0, 3, MetabolicStrategy::Endothermic);
        assert!(bird_by_length.validate().is_err());

        let insect_by_length =
            AnimalGroup::by_length(AnimalCategory::Insect, 1.2, 3, MetabolicStrategy::Ectothermic);
        assert!(insect_by_length.validate().is_ok());
    }

    #[test]
    fn test_serde_names() {
        let json = r#"{
            "category": "frogs",
            "measurement": 0.01,
            "measurement_kind": "mass_kg",
            "individual_count": 40,
            "metabolic_strategy": "ectothermic"
        }"#;
        let group: AnimalGroup = serde_json::from_str(json).unwrap();
        assert_eq!(group.category, AnimalCategory::Frog);

        let labelled: AnimalGroup = serde_json::from_str(
            &json.replace("frogs", "Frogs").replace("ectothermic", "Ectothermic"),
        )
        .unwrap();
        assert_eq!(labelled, group);

        let hibernating = json.replace("ectothermic", "hibernating");
        let err = serde_json::from_str::<AnimalGroup>(&hibernating).unwrap_err();
        assert!(err.to_string().contains("unsupported metabolic strategy 'hibernating'"));

        let back = serde_json::to_value(&group).unwrap();
        assert_eq!(back["category"], "frog");
        assert_eq!(back["measurement_kind"], MeasurementKind::MassKg.as_str());
    }

    #[test]
    fn test_default_environment_is_25c() {
        assert_eq!(EnvironmentContext::default().ambient_temperature_c, 25.0);
    }
}
