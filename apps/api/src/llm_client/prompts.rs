// Shared prompt fragments.
// Each pipeline stage defines its own prompts alongside it; this file holds the
// formatting instructions the extractors depend on.

/// Asks for the `*` bullet shape that `extract_list` parses first.
pub const STAR_BULLETS: &str = "as a bulleted list using '*'";

/// Suppresses the headings and commentary the model tends to add.
pub const NO_EXTRA_TEXT: &str = "No titles, no extra text.";

/// Steering sentence appended to user interests before role discovery.
pub const INTEREST_STEERING: &str = "Exclude any headers like top 5 job roles and explanations.";
