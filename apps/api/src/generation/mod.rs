// Career report generation.
// Implements: role discovery, bounded dispatch, per-dimension enrichment, report assembly.
// All generation calls go through llm_client — no direct service calls here.

pub mod dispatch;
pub mod enrichment;
pub mod handlers;
pub mod pipeline;
pub mod prompts;
pub mod roles;
