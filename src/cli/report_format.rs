// Copyright 2024-2026 deploy-intent Contributors
// SPDX-License-Identifier: Apache-2.0

//! Formatting helpers for validation reports.

use crate::validation::ValidationReport;

/// One line per finding, warnings first, then a summary line.
pub fn format_report(report: &ValidationReport) -> Vec<String> {
    let mut lines = Vec::with_capacity(report.warnings.len() + report.errors.len() + 1);
    for warning in &report.warnings {
        lines.push(format!("warning: {}", warning));
    }
    for error in &report.errors {
        lines.push(format!("error: {}", error));
    }
    lines.push(summary(report));
    lines
}

fn summary(report: &ValidationReport) -> String {
    if report.is_valid() {
        format!("intent is valid ({})", plural(report.warnings.len(), "warning"))
    } else {
        format!(
            "intent is invalid ({}, {})",
            plural(report.errors.len(), "error"),
            plural(report.warnings.len(), "warning")
        )
    }
}

fn plural(count: usize, noun: &str) -> String {
    if count == 1 {
        format!("1 {}", noun)
    } else {
        format!("{} {}s", count, noun)
    }
}

/// Print to stdout.
pub fn print_report(report: &ValidationReport) {
    for line in format_report(report) {
        println!("{}", line);
    }
}

/// Print to stderr, keeping stdout free for the resolved intent.
pub fn eprint_report(report: &ValidationReport) {
    for line in format_report(report) {
        eprintln!("{}", line);
    }
}
