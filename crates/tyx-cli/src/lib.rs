//! Library side of the `tyx` binary: argument parsing, `tyx.json` loading,
//! suite selection and report rendering.

pub mod args;
pub mod config;
pub mod reporter;
pub mod tracing_config;

use anyhow::{Result, anyhow};
use std::path::Path;
use tracing::info;
use tyx_challenges::all_suites;
use tyx_solver::{Suite, SuiteReport, TypeInterner, Verifier};

use crate::args::{CliArgs, OutputFormat};
use crate::config::{Settings, resolve_config};
use crate::reporter::Reporter;

/// Rendered output of one invocation and whether every assertion held.
#[derive(Debug)]
pub struct Outcome {
    pub output: String,
    pub success: bool,
}

pub fn run(args: &CliArgs, cwd: &Path, is_terminal: bool) -> Result<Outcome> {
    let config = resolve_config(args, cwd)?;
    let settings = Settings::resolve(args, config.as_ref(), is_terminal);

    let interner = TypeInterner::new();
    let suites = all_suites(&interner);
    if args.list {
        return Ok(Outcome {
            output: list_suites(&suites),
            success: true,
        });
    }

    let selected = select_suites(suites, &settings.suites)?;
    let verifier = Verifier::new(&interner);
    let reports: Vec<SuiteReport> = selected
        .iter()
        .map(|suite| verifier.run_suite(suite))
        .collect();
    let success = reports.iter().all(|suite| suite.report.is_success());
    info!(suites = reports.len(), success, "run finished");

    let reporter = Reporter::new(&interner, settings.color);
    let output = match settings.format {
        OutputFormat::Text => reporter.render_text(&reports),
        OutputFormat::Json => {
            let mut json = reporter.render_json(&reports)?;
            json.push('\n');
            json
        }
    };
    Ok(Outcome { output, success })
}

fn list_suites(suites: &[Suite]) -> String {
    suites
        .iter()
        .map(|suite| format!("{} ({} assertions)\n", suite.name, suite.len()))
        .collect()
}

/// Suites in the order named; an empty selection means all of them.
fn select_suites(suites: Vec<Suite>, names: &[String]) -> Result<Vec<Suite>> {
    if names.is_empty() {
        return Ok(suites);
    }
    names
        .iter()
        .map(|name| {
            suites
                .iter()
                .find(|suite| &suite.name == name)
                .cloned()
                .ok_or_else(|| {
                    anyhow!("unknown suite `{name}` (run `tyx --list` to see available suites)")
                })
        })
        .collect()
}

#[cfg(test)]
#[path = "../tests/args_tests.rs"]
mod args_tests;
#[cfg(test)]
#[path = "../tests/config_tests.rs"]
mod config_tests;
#[cfg(test)]
#[path = "../tests/reporter_tests.rs"]
mod reporter_tests;
#[cfg(test)]
#[path = "../tests/run_tests.rs"]
mod run_tests;
