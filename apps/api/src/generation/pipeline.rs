//! Report Generation — orchestrates the full career-report pipeline.
//!
//! Flow: validate interests → steer → discover_roles → enrich → Report.
//!
//! Only validation can fail. Generation trouble degrades individual fields to
//! empty strings; the caller always receives a complete, aligned report.

use tracing::{info, warn};

use crate::errors::AppError;
use crate::generation::enrichment::enrich;
use crate::generation::roles::discover_roles;
use crate::llm_client::prompts::INTEREST_STEERING;
use crate::llm_client::GenerationClient;
use crate::models::report::Report;

/// Minimum interest length in characters, after trimming.
pub const MIN_INTEREST_CHARS: usize = 3;
pub const INTERESTS_TOO_SHORT: &str = "Please enter a bit more detail (min 3 chars).";

/// Trims `raw` and rejects anything shorter than `MIN_INTEREST_CHARS`.
pub fn validate_interests(raw: Option<&str>) -> Result<String, AppError> {
    let interests = raw.unwrap_or_default().trim();
    if interests.chars().count() < MIN_INTEREST_CHARS {
        return Err(AppError::Validation(INTERESTS_TOO_SHORT.to_string()));
    }
    Ok(interests.to_string())
}

/// Runs the full pipeline for one inbound request.
///
/// Steps:
/// 1. validate_interests() → rejected before any generation call
/// 2. append the steering sentence
/// 3. discover_roles() → exactly five roles (1 generation call)
/// 4. enrich() → Report (25 generation calls, bounded by `max_concurrency`)
pub async fn generate_report(
    llm: &GenerationClient,
    raw_interests: Option<&str>,
    max_concurrency: usize,
) -> Result<Report, AppError> {
    let interests = validate_interests(raw_interests)?;
    let steered = format!("{interests} {INTEREST_STEERING}");

    let roles = discover_roles(llm, &steered).await;
    let report = enrich(llm, roles, max_concurrency).await;
    if !report.is_aligned() {
        warn!("Report fields are not index-aligned with {} roles", report.roles.len());
    }

    info!(
        "Generated report for {} roles ({} chars of interests)",
        report.roles.len(),
        interests.chars().count()
    );
    Ok(report)
}
