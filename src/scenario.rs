use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tracing::debug;

use crate::animal::{
    AnimalCategory, AnimalGroup, EnvironmentContext, MeasurementKind, MetabolicStrategy,
};
use crate::error::{EnergeticsError, Result};

/// A calculation request: the groups to evaluate and, optionally, the
/// environment they live in.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Scenario {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub environment: Option<EnvironmentContext>,
    pub groups: Vec<AnimalGroup>,
}

/// Scenario file as written on disk. Tags stay strings until each group is
/// parsed, so a bad tag is reported against the group that carries it.
#[derive(Debug, Deserialize)]
struct ScenarioFile {
    #[serde(default)]
    environment: Option<EnvironmentContext>,
    #[serde(default)]
    groups: Vec<GroupRecord>,
}

#[derive(Debug, Deserialize)]
struct GroupRecord {
    category: String,
    measurement: f64,
    measurement_kind: String,
    individual_count: i64,
    metabolic_strategy: String,
}

impl GroupRecord {
    fn to_group(&self) -> Result<AnimalGroup> {
        let category: AnimalCategory = self.category.parse()?;
        let measurement_kind: MeasurementKind = self.measurement_kind.parse()?;
        let metabolic_strategy: MetabolicStrategy = self.metabolic_strategy.parse()?;
        let individual_count = u64::try_from(self.individual_count).map_err(|_| {
            EnergeticsError::non_positive("individual count", self.individual_count as f64)
        })?;

        let group = AnimalGroup {
            category,
            measurement: self.measurement,
            measurement_kind,
            individual_count,
            metabolic_strategy,
        };
        group.validate()?;
        Ok(group)
    }
}

impl Scenario {
    /// Parse a scenario from a JSON string and validate every group
    pub fn from_json_str(json_str: &str) -> Result<Self> {
        let file: ScenarioFile = serde_json::from_str(json_str)
            .map_err(|e| EnergeticsError::Scenario(format!("failed to parse JSON: {}", e)))?;

        let groups = file
            .groups
            .iter()
            .enumerate()
            .map(|(index, record)| {
                record.to_group().map_err(|source| EnergeticsError::Group {
                    index,
                    category: record.category.parse().ok(),
                    source: Box::new(source),
                })
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self {
            environment: file.environment,
            groups,
        })
    }

    /// Load a scenario from a JSON file
    pub fn load_json<P: AsRef<Path>>(file_path: P) -> Result<Self> {
        let path = file_path.as_ref();
        let json_str = fs::read_to_string(path).map_err(|source| EnergeticsError::Io {
            path: path.display().to_string(),
            source,
        })?;

        let scenario = Self::from_json_str(&json_str)?;
        debug!(path = %path.display(), groups = scenario.groups.len(), "loaded scenario");
        Ok(scenario)
    }

    pub fn validate(&self) -> Result<()> {
        for (index, group) in self.groups.iter().enumerate() {
            group.validate().map_err(|source| EnergeticsError::Group {
                index,
                category: Some(group.category),
                source: Box::new(source),
            })?;
        }
        Ok(())
    }

    /// The scenario's environment, or `fallback` when it names none.
    pub fn environment_or(&self, fallback: EnvironmentContext) -> EnvironmentContext {
        self.environment.unwrap_or(fallback)
    }

    /// One group of each category, for documentation and the CLI.
    pub fn example() -> Self {
        Self {
            environment: Some(EnvironmentContext::default()),
            groups: vec![
                AnimalGroup::by_mass(AnimalCategory::Mammal, 0.02, 100, MetabolicStrategy::Endothermic),
                AnimalGroup::by_mass(AnimalCategory::Bird, 0.015, 40, MetabolicStrategy::Endothermic),
                AnimalGroup::by_length(AnimalCategory::Insect, 1.0, 5000, MetabolicStrategy::Ectothermic),
                AnimalGroup::by_mass(AnimalCategory::Frog, 0.008, 60, MetabolicStrategy::Ectothermic),
            ],
        }
    }

    pub fn to_json_pretty(&self) -> Result<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| EnergeticsError::Scenario(format!("failed to serialize: {}", e)))
    }
}
