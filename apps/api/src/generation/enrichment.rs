//! Enrichment Pipeline — fans each role out across the five report dimensions.
//!
//! Flow: roles → per-dimension prompts → dispatch (bounded, index-preserving)
//!       → GenerationClient → dimension parser → index-aligned `Report`.
//!
//! Dimensions are independent and run concurrently with each other.

use std::convert::Infallible;

use futures::future::join_all;
use tracing::info;

use crate::extract::normalize::clean_text;
use crate::extract::{extract_list, extract_pairs, extract_range};
use crate::generation::dispatch::dispatch;
use crate::generation::prompts::{
    colleges_prompt, courses_prompt, description_prompt, resources_prompt, salary_prompt,
};
use crate::llm_client::GenerationClient;
use crate::models::report::Report;

const LIST_CAP: usize = 5;
const COLLEGE_CAP: usize = 3;
const ITEM_SEPARATOR: &str = ", ";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dimension {
    Description,
    Courses,
    Colleges,
    Salary,
    Resources,
}

impl Dimension {
    pub const ALL: [Dimension; 5] = [
        Dimension::Description,
        Dimension::Courses,
        Dimension::Colleges,
        Dimension::Salary,
        Dimension::Resources,
    ];

    pub fn prompt(self, role: &str) -> String {
        match self {
            Dimension::Description => description_prompt(role),
            Dimension::Courses => courses_prompt(role),
            Dimension::Colleges => colleges_prompt(role),
            Dimension::Salary => salary_prompt(role),
            Dimension::Resources => resources_prompt(role),
        }
    }

    pub fn max_output_tokens(self) -> u32 {
        match self {
            Dimension::Description | Dimension::Courses | Dimension::Colleges => 160,
            Dimension::Salary => 60,
            Dimension::Resources => 200,
        }
    }

    /// Turns a raw response into the report field for this dimension.
    pub fn parse(self, raw: &str) -> String {
        match self {
            Dimension::Description => clean_text(raw),
            Dimension::Courses | Dimension::Resources => {
                extract_list(raw, Some(LIST_CAP)).join(ITEM_SEPARATOR)
            }
            Dimension::Colleges => extract_pairs(raw, Some(COLLEGE_CAP)).join(ITEM_SEPARATOR),
            Dimension::Salary => extract_range(raw),
        }
    }
}

/// Runs one dimension for every role. Output is index-aligned with `roles`.
pub async fn enrich_dimension(
    llm: &GenerationClient,
    dimension: Dimension,
    roles: &[String],
    max_concurrency: usize,
) -> Vec<String> {
    let llm = llm.clone();
    let results = dispatch(roles.to_vec(), max_concurrency, move |_, role: String| {
        let llm = llm.clone();
        async move {
            let raw = llm
                .generate(&dimension.prompt(&role), Some(dimension.max_output_tokens()))
                .await;
            Ok::<_, Infallible>(dimension.parse(&raw))
        }
    })
    .await;

    info!("Enriched {:?} for {} roles", dimension, results.len());
    results
}

/// Builds the full report for `roles`: one dispatch batch per entry of
/// `Dimension::ALL`, all batches in flight together.
pub async fn enrich(llm: &GenerationClient, roles: Vec<String>, max_concurrency: usize) -> Report {
    let batches = Dimension::ALL
        .map(|dimension| enrich_dimension(llm, dimension, &roles, max_concurrency));
    let mut columns = join_all(batches).await.into_iter().map(leaves);
    let mut next_column = || columns.next().unwrap_or_default();

    // Column order follows Dimension::ALL
    Report {
        descriptions: next_column(),
        courses: next_column(),
        colleges: next_column(),
        salaries: next_column(),
        resources: next_column(),
        roles: leaves(roles),
    }
}

/// Final normalization pass over every leaf string.
fn leaves(values: Vec<String>) -> Vec<String> {
    values.iter().map(|v| clean_text(v)).collect()
}
