// Prompt builders for role discovery and the enrichment dimensions.
// Reuses the shared formatting fragments from llm_client::prompts.

use crate::llm_client::prompts::{NO_EXTRA_TEXT, STAR_BULLETS};

/// Example list shown to the model so it copies the bullet shape.
const ROLE_EXAMPLE: &str =
    "* Software Engineer\n* Data Analyst\n* UX Designer\n* Robotics Engineer\n* Technical Writer";

pub fn roles_prompt(interests: &str) -> String {
    format!(
        "{interests}\n\n\
        Return EXACTLY 5 job roles {STAR_BULLETS}. \
        No headings, no extra text, no numbers. Example:\n{ROLE_EXAMPLE}"
    )
}

pub fn description_prompt(role: &str) -> String {
    format!(
        "Explain what a {role} does in 2–3 plain sentences for a middle schooler. \
        No headings, no lists, <= 280 characters."
    )
}

pub fn courses_prompt(role: &str) -> String {
    format!(
        "List the top 5 college courses for becoming a {role} {STAR_BULLETS}. \
        Only the course names. {NO_EXTRA_TEXT}"
    )
}

pub fn colleges_prompt(role: &str) -> String {
    format!(
        "Give the top 3 schools for {role} and the relevant undergrad degree. \
        Return {STAR_BULLETS} where each line is 'College | Degree'. \
        No headings, no numbers."
    )
}

pub fn salary_prompt(role: &str) -> String {
    format!(
        "Give a single US base salary range for an entry-level {role}. \
        Return only the range like '$70,000–$110,000'. No words, no bullets."
    )
}

pub fn resources_prompt(role: &str) -> String {
    format!(
        "List the top 5 free learning resources (sites or courses) for becoming a {role}. \
        Return {STAR_BULLETS}, each item a concise name (optionally with URL). \
        No titles, no descriptions beyond the name."
    )
}
