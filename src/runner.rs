//! End-to-end runs: enumerate candidates, patch each one, print the report.

use crate::config::{ApiKeyConfig, CorsConfig};
use crate::error::PatchResult;
use crate::patch::{apply_to_file, ApiKeyPatch, CorsPatch};
use crate::report::{Entry, Outcome, Report};
use crate::target::{discover_entries, known_targets};
use std::io::Write;
use std::path::Path;
use tracing::info;

/// Hint printed after the CORS run
pub const DEPLOY_HINT: &str = "Next step: Run './scripts/deploy-all-functions.sh' to deploy";

/// Inject the API-key header into the fixed client sources under `root`
pub fn add_apikey_headers(
    root: &Path,
    config: &ApiKeyConfig,
    out: &mut impl Write,
) -> PatchResult<Report> {
    let patch = ApiKeyPatch::new(config.clone())?;
    let mut report = Report::new();

    writeln!(out, "🔄 Adding apikey headers to fetch requests...")?;
    writeln!(out)?;

    for candidate in known_targets(root, &config.targets) {
        let outcome = apply_to_file(&patch, &candidate.path)?;
        let entry = report.record(candidate.label, outcome);
        writeln!(out, "{}", apikey_status_line(entry))?;
    }

    writeln!(out)?;
    writeln!(out, "📊 Updated {} files", report.updated())?;

    info!(
        "apikey run finished: {} processed, {} updated, {} skipped, {} not found",
        report.processed(),
        report.updated(),
        report.skipped(),
        report.not_found()
    );
    Ok(report)
}

/// Rewrite the CORS constant in every edge function entry file under `root`
pub fn update_all_cors(
    root: &Path,
    config: &CorsConfig,
    out: &mut impl Write,
) -> PatchResult<Report> {
    let patch = CorsPatch::new(config)?;
    let mut report = Report::new();

    writeln!(out, "🔄 Updating CORS headers in all Edge Functions...")?;
    writeln!(out)?;

    for candidate in discover_entries(root, config)? {
        let outcome = apply_to_file(&patch, &candidate.path)?;
        let entry = report.record(candidate.label, outcome);
        writeln!(out, "{}", cors_status_line(entry))?;
    }

    writeln!(out)?;
    writeln!(out, "📊 Summary:")?;
    writeln!(out, "   ✅ Updated: {} functions", report.updated())?;
    writeln!(out, "   ⚠️  Skipped: {} functions", report.skipped())?;
    writeln!(out)?;
    writeln!(out, "{}", DEPLOY_HINT)?;

    info!(
        "cors run finished: {} processed, {} updated, {} skipped",
        report.processed(),
        report.updated(),
        report.skipped()
    );
    Ok(report)
}

fn apikey_status_line(entry: &Entry) -> String {
    match entry.outcome {
        Outcome::Updated => format!("✅ Updated: {}", entry.label),
        Outcome::AlreadyCompliant | Outcome::NoMatch => format!(
            "⏭️  Skipped: {} (already has apikey or no matches)",
            entry.label
        ),
        Outcome::NotFound => format!("⚠️  Not found: {}", entry.label),
    }
}

fn cors_status_line(entry: &Entry) -> String {
    match entry.outcome {
        Outcome::Updated => format!("✅ Updated: {}", entry.label),
        Outcome::AlreadyCompliant => format!("⏭️  Skipped: {} (already up to date)", entry.label),
        Outcome::NoMatch => format!("⚠️  Skipped: {} (no corsHeaders found)", entry.label),
        Outcome::NotFound => format!("⚠️  Not found: {}", entry.label),
    }
}
