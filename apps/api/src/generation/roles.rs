//! Role Discovery — turns free-text interests into exactly five role names.

use std::collections::HashSet;

use tracing::{info, warn};

use crate::extract::{clean_text, extract_list};
use crate::generation::prompts::roles_prompt;
use crate::llm_client::GenerationClient;

pub const ROLE_COUNT: usize = 5;
/// Character ceiling applied to interests before prompting.
pub const MAX_INTEREST_CHARS: usize = 600;
pub const FILLER_ROLE: &str = "General Technologist";
const ROLES_MAX_TOKENS: u32 = 128;

/// Normalizes and truncates interest text to `MAX_INTEREST_CHARS` characters.
pub fn prepare_interests(interests: &str) -> String {
    clean_text(interests)
        .chars()
        .take(MAX_INTEREST_CHARS)
        .collect()
}

/// Keeps the first occurrence of each role, drops empties, caps at
/// `ROLE_COUNT` and pads with `FILLER_ROLE`.
pub fn finalize_roles(candidates: Vec<String>) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut roles: Vec<String> = candidates
        .into_iter()
        .map(|role| role.trim().to_string())
        .filter(|role| !role.is_empty() && seen.insert(role.clone()))
        .take(ROLE_COUNT)
        .collect();

    if roles.len() < ROLE_COUNT {
        warn!(
            "Only {} unique roles recovered, padding with '{}'",
            roles.len(),
            FILLER_ROLE
        );
        roles.resize(ROLE_COUNT, FILLER_ROLE.to_string());
    }

    roles
}

/// Discovers exactly `ROLE_COUNT` role names for `interests` with one
/// generation call. Never fails: an empty response yields all filler roles.
pub async fn discover_roles(llm: &GenerationClient, interests: &str) -> Vec<String> {
    let prompt = roles_prompt(&prepare_interests(interests));
    let raw = llm.generate(&prompt, Some(ROLES_MAX_TOKENS)).await;
    let roles = finalize_roles(extract_list(&raw, Some(ROLE_COUNT)));
    info!("Discovered roles: {:?}", roles);
    roles
}
