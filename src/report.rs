//! Plain-text rendering of calculation results.

use colored::Colorize;
use std::fmt::Write;

use crate::energetics::{GroupEnergyResult, PopulationSummary, total_energy};

#[derive(Debug, Clone, Copy)]
pub struct ReportStyle {
    pub precision: usize,
    pub color: bool,
}

impl ReportStyle {
    pub fn plain(precision: usize) -> Self {
        Self {
            precision,
            color: false,
        }
    }

    fn heading(&self, text: &str) -> String {
        if self.color {
            text.bold().green().to_string()
        } else {
            text.to_string()
        }
    }
}

/// Total energy followed by one line per group.
pub fn render_results(results: &[GroupEnergyResult], style: ReportStyle) -> String {
    let p = style.precision;
    let mut out = String::new();

    let _ = writeln!(
        out,
        "{} {:.p$} kJ/day",
        style.heading("Total Energy:"),
        total_energy(results)
    );
    let _ = writeln!(out, "{}", style.heading("Specific Group Energies:"));
    for r in results {
        let _ = writeln!(
            out,
            "{}: {:.p$} kJ/day ({} x {:.3e} kg at {:.p$} kJ/day each)",
            r.category, r.total_energy_kj_per_day, r.individual_count, r.mass_kg, r.rate_kj_per_day
        );
    }
    out
}

pub fn render_summary(summary: &PopulationSummary, style: ReportStyle) -> String {
    let p = style.precision;
    let mut out = String::new();

    let _ = writeln!(out, "{} {:.p$}", style.heading("Mean Energy:"), summary.mean);
    let _ = writeln!(out, "{} {:.p$}", style.heading("Median Energy:"), summary.median);
    let _ = writeln!(out, "{} {:.p$}", style.heading("Std Dev:"), summary.standard_deviation);
    out
}
