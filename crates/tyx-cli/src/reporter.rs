use anyhow::{Context, Result};
use colored::Colorize;
use serde::Serialize;
use tyx_solver::{SuiteReport, SuiteSummary, TypeInterner};

/// Whole-run JSON document.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RunSummary {
    pub passed: usize,
    pub total: usize,
    pub suites: Vec<SuiteSummary>,
}

impl RunSummary {
    pub fn new(interner: &TypeInterner, reports: &[SuiteReport]) -> Self {
        let suites: Vec<SuiteSummary> = reports
            .iter()
            .map(|report| report.summarize(interner))
            .collect();
        RunSummary {
            passed: suites.iter().map(|suite| suite.passed).sum(),
            total: suites.iter().map(|suite| suite.total).sum(),
            suites,
        }
    }
}

pub struct Reporter<'a> {
    interner: &'a TypeInterner,
    color: bool,
}

impl<'a> Reporter<'a> {
    pub fn new(interner: &'a TypeInterner, color: bool) -> Self {
        Reporter { interner, color }
    }

    /// One status line per suite, mismatches indented under failing suites,
    /// then a totals line.
    pub fn render_text(&self, reports: &[SuiteReport]) -> String {
        let mut out = String::new();
        let mut failed_suites = 0;
        let mut passed = 0;
        let mut total = 0;
        for suite in reports {
            let report = &suite.report;
            passed += report.passed;
            total += report.total();
            if !report.is_success() {
                failed_suites += 1;
            }
            out.push_str(&format!(
                "{} {} ({}/{})\n",
                self.format_status(report.is_success()),
                suite.name,
                report.passed,
                report.total()
            ));
            for mismatch in &report.failed {
                out.push_str("  ");
                out.push_str(&mismatch.render(self.interner));
                out.push('\n');
            }
        }
        let totals = format!(
            "suites: {} passed, {} failed; assertions: {}/{} passed",
            reports.len() - failed_suites,
            failed_suites,
            passed,
            total
        );
        if self.color {
            out.push_str(&totals.bold().to_string());
        } else {
            out.push_str(&totals);
        }
        out.push('\n');
        out
    }

    pub fn render_json(&self, reports: &[SuiteReport]) -> Result<String> {
        let summary = RunSummary::new(self.interner, reports);
        serde_json::to_string_pretty(&summary).context("failed to serialize report")
    }

    fn format_status(&self, success: bool) -> String {
        let label = if success { "PASS" } else { "FAIL" };
        if !self.color {
            return label.to_string();
        }
        if success {
            label.green().bold().to_string()
        } else {
            label.red().bold().to_string()
        }
    }
}
