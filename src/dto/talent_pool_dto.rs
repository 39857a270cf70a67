use serde::{Deserialize, Deserializer, Serialize};

use crate::models::candidate::Candidate;

fn blank_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<String>::deserialize(deserializer)?;
    Ok(value.filter(|v| !v.trim().is_empty()))
}

fn blank_number_as_none<'de, D>(deserializer: D) -> Result<Option<u32>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<String>::deserialize(deserializer)? {
        Some(raw) if !raw.trim().is_empty() => raw
            .trim()
            .parse()
            .map(Some)
            .map_err(serde::de::Error::custom),
        _ => Ok(None),
    }
}

/// Talent-pool filters. Every field is optional and an empty value means
/// "not set".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CandidateFilter {
    #[serde(default, deserialize_with = "blank_as_none")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "blank_as_none")]
    pub job: Option<String>,
    #[serde(default, deserialize_with = "blank_as_none")]
    pub sex: Option<String>,
    #[serde(default, deserialize_with = "blank_as_none")]
    pub education: Option<String>,
    #[serde(default, deserialize_with = "blank_number_as_none")]
    pub min_age: Option<u32>,
    #[serde(default, deserialize_with = "blank_number_as_none")]
    pub max_age: Option<u32>,
}

#[derive(Debug, Clone, Serialize)]
pub struct FilterOptions {
    pub jobs: Vec<String>,
    pub sexes: Vec<&'static str>,
    pub education_levels: Vec<&'static str>,
}

#[derive(Debug, Clone, Serialize)]
pub struct TalentPoolResponse {
    pub total: usize,
    pub matched: usize,
    pub active_filters: usize,
    pub options: FilterOptions,
    pub candidates: Vec<Candidate>,
}
