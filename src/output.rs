//! Human and machine readable search reports.

use std::fmt::{Display, Formatter};

use serde::Serialize;

use crate::{Algorithm, SearchResult};

/// Output format of the search reports
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[cfg_attr(feature = "cli", clap(rename_all = "snake_case"))]
pub enum OutputFormat {
    /// One block of text per algorithm
    #[default]
    Text,
    /// RON list of reports
    Ron,
}

/// Outcome of one algorithm on one sequence
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchReport {
    /// The algorithm that produced the result
    pub algorithm: Algorithm,
    /// What it found
    pub result: SearchResult,
}

impl SearchReport {
    /// Wraps `result` with the algorithm that produced it
    pub fn new(algorithm: Algorithm, result: SearchResult) -> Self {
        Self { algorithm, result }
    }
}

impl Display for SearchReport {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        let positions = if self.result.occurrences.is_empty() {
            String::from("-")
        } else {
            self.result
                .occurrences
                .iter()
                .map(usize::to_string)
                .collect::<Vec<_>>()
                .join(", ")
        };
        writeln!(f, "{}:", self.algorithm)?;
        writeln!(f, "  occurrences: {}", self.result.count())?;
        writeln!(f, "  positions: {positions}")?;
        writeln!(f, "  comparisons: {}", self.result.comparisons)?;
        if let Some(truncated) = &self.result.truncated {
            writeln!(f, "  truncated: {truncated}")?;
        }
        Ok(())
    }
}

/// Renders `reports` in `format`
pub fn render_reports(reports: &[SearchReport], format: OutputFormat) -> Result<String, ron::Error> {
    match format {
        OutputFormat::Text => Ok(reports
            .iter()
            .map(SearchReport::to_string)
            .collect::<Vec<_>>()
            .join("\n")),
        OutputFormat::Ron => {
            let mut ron = ron::ser::to_string_pretty(reports, ron::ser::PrettyConfig::default())?;
            ron.push('\n');
            Ok(ron)
        }
    }
}
