// End-to-end checks of the energetics engine against hand-evaluated formulas.

use approx::assert_relative_eq;
use forest_energetics::assert_deviation;
use forest_energetics::energetics::total_energy;
use forest_energetics::scenario::Scenario;
use forest_energetics::{
    AnimalCategory, AnimalGroup, EnergeticsError, EnvironmentContext, MetabolicStrategy,
    aggregate_statistics, calculate_groups, group_energy, length_to_mass, metabolic_rate,
};
use more_asserts::assert_gt;
use std::fs;

const SIGMA: f64 = 0.5;
const EA: f64 = 0.69;
const KB: f64 = 8.617333262145e-5;

fn reference_rate(mass_kg: f64, strategy: MetabolicStrategy, ambient_c: f64) -> f64 {
    let (i_field, b_field, temp_k) = match strategy {
        MetabolicStrategy::Endothermic => (9.08e11, 0.70, 310.0),
        MetabolicStrategy::Ectothermic => (1.49e11, 0.88, ambient_c + 274.15),
    };
    let (i_basal, b_basal) = (4.19e10, 0.69);
    let mass_g = mass_kg * 1000.0;
    let arrhenius = (-EA / (KB * temp_k)).exp();

    SIGMA * i_field * arrhenius * mass_g.powf(b_field)
        + (1.0 - SIGMA) * i_basal * arrhenius * mass_g.powf(b_basal)
}

#[test]
fn test_small_mammal_colony() {
    let group = AnimalGroup::by_mass(AnimalCategory::Mammal, 0.02, 100, MetabolicStrategy::Endothermic);

    let per_individual = reference_rate(0.02, MetabolicStrategy::Endothermic, 25.0);
    let total = group_energy(&group, 25.0).unwrap();

    assert_relative_eq!(total, per_individual * 100.0, max_relative = 1e-12);
    assert_gt!(total, 0.0);
}

#[test]
fn test_insect_swarm_by_length() {
    // 10 mm -> 10^1.389 mg, roughly 24.49 mg
    let mass_kg = length_to_mass(1.0).unwrap();
    assert_deviation!(mass_kg, 2.449e-5, 0.01, "1 cm insect should weigh about 24.49 mg");

    let group = AnimalGroup::by_length(AnimalCategory::Insect, 1.0, 1, MetabolicStrategy::Ectothermic);
    let energy = group_energy(&group, 25.0).unwrap();

    let expected = reference_rate(mass_kg, MetabolicStrategy::Ectothermic, 25.0);
    assert_relative_eq!(energy, expected, max_relative = 1e-12);
    assert_relative_eq!(
        metabolic_rate(mass_kg, MetabolicStrategy::Ectothermic, 25.0).unwrap(),
        expected,
        max_relative = 1e-12
    );
}

#[test]
fn test_invalid_inputs_for_every_category() {
    for category in AnimalCategory::ALL {
        for strategy in [MetabolicStrategy::Endothermic, MetabolicStrategy::Ectothermic] {
            let zero_measurement = AnimalGroup::by_mass(category, 0.0, 10, strategy);
            let zero_count = AnimalGroup::by_mass(category, 0.5, 0, strategy);

            for group in [zero_measurement, zero_count] {
                assert!(matches!(
                    group_energy(&group, 25.0),
                    Err(EnergeticsError::InvalidMeasurement { .. })
                ));
            }
        }
    }
}

#[test]
fn test_hibernating_is_unsupported() {
    assert!(matches!(
        "hibernating".parse::<MetabolicStrategy>(),
        Err(EnergeticsError::UnsupportedStrategy(_))
    ));
    assert!(matches!(
        "bird:mass:0.02:3:hibernating".parse::<AnimalGroup>(),
        Err(EnergeticsError::UnsupportedStrategy(_))
    ));
}

#[test]
fn test_empty_statistics() {
    let results = calculate_groups(&[], &EnvironmentContext::default()).unwrap();
    assert!(results.is_empty());
    assert!(matches!(aggregate_statistics(&results), Err(EnergeticsError::EmptyInput)));
}

#[test]
fn test_scenario_file_to_summary() {
    let path = std::env::temp_dir().join(format!("forest_energetics_{}.json", std::process::id()));
    fs::write(&path, Scenario::example().to_json_pretty().unwrap()).unwrap();

    let scenario = Scenario::load_json(&path).unwrap();
    fs::remove_file(&path).ok();

    let env = scenario.environment_or(EnvironmentContext::new(0.0));
    let results = calculate_groups(&scenario.groups, &env).unwrap();
    let summary = aggregate_statistics(&results).unwrap();

    assert_eq!(summary.group_count, 4);
    assert_relative_eq!(summary.total_energy_kj_per_day, total_energy(&results), max_relative = 1e-12);
    assert_relative_eq!(summary.mean, summary.total_energy_kj_per_day / 4.0, max_relative = 1e-12);

    // the body temperature of the ectotherms follows the scenario's 25 °C
    let cold = calculate_groups(&scenario.groups, &EnvironmentContext::new(5.0)).unwrap();
    for (warm, cold) in results.iter().zip(&cold) {
        if warm.category == AnimalCategory::Insect || warm.category == AnimalCategory::Frog {
            assert_gt!(warm.total_energy_kj_per_day, cold.total_energy_kj_per_day);
        } else {
            assert_deviation!(warm.total_energy_kj_per_day, cold.total_energy_kj_per_day, 1e-9);
        }
    }

    let mut totals: Vec<f64> = results.iter().map(|r| r.total_energy_kj_per_day).collect();
    totals.sort_by(|a, b| a.total_cmp(b));
    assert_relative_eq!(summary.median, (totals[1] + totals[2]) / 2.0, max_relative = 1e-12);
}
