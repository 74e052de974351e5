use serde::{Deserialize, Serialize};

/// Career-exploration report: parallel sequences, index `i` describes
/// `roles[i]` in every field. Serialized with the public wire keys.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Report {
    #[serde(rename = "jobroles")]
    pub roles: Vec<String>,
    #[serde(rename = "JD")]
    pub descriptions: Vec<String>,
    pub courses: Vec<String>,
    pub colleges: Vec<String>,
    #[serde(rename = "salary")]
    pub salaries: Vec<String>,
    #[serde(rename = "onlineRes")]
    pub resources: Vec<String>,
}

/// Per-role view of a `Report`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EnrichmentRecord {
    pub role: String,
    pub description: String,
    /// Comma-joined course names.
    pub courses: String,
    /// Comma-joined "institution | degree" pairs.
    pub colleges: String,
    pub salary_range: String,
    /// Comma-joined resource names.
    pub online_resources: String,
}

impl Report {
    /// True when every sequence has the same length as `roles`.
    pub fn is_aligned(&self) -> bool {
        let n = self.roles.len();
        [
            &self.descriptions,
            &self.courses,
            &self.colleges,
            &self.salaries,
            &self.resources,
        ]
        .iter()
        .all(|field| field.len() == n)
    }

    pub fn records(&self) -> Vec<EnrichmentRecord> {
        let field = |values: &[String], i: usize| values.get(i).cloned().unwrap_or_default();
        self.roles
            .iter()
            .enumerate()
            .map(|(i, role)| EnrichmentRecord {
                role: role.clone(),
                description: field(&self.descriptions, i),
                courses: field(&self.courses, i),
                colleges: field(&self.colleges, i),
                salary_range: field(&self.salaries, i),
                online_resources: field(&self.resources, i),
            })
            .collect()
    }
}
