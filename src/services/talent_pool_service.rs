use std::collections::BTreeSet;

use tracing::{info, instrument};

use crate::dto::talent_pool_dto::{CandidateFilter, FilterOptions, TalentPoolResponse};
use crate::error::Result;
use crate::models::candidate::Candidate;
use crate::services::aggregation_service::AggregationService;
use crate::table_store::RowQuery;

pub const SEX_OPTIONS: [&str; 3] = ["Masculino", "Feminino", "Outro"];

pub const EDUCATION_OPTIONS: [&str; 9] = [
    "Ensino fundamental incompleto",
    "Ensino fundamental completo",
    "Ensino médio incompleto",
    "Ensino médio completo",
    "Superior incompleto",
    "Superior completo",
    "Pós-graduação",
    "Mestrado",
    "Doutorado",
];

impl CandidateFilter {
    pub fn matches(&self, candidate: &Candidate) -> bool {
        let name = self.name.as_deref().map_or(true, |term| {
            candidate
                .name
                .to_lowercase()
                .contains(&term.to_lowercase())
        });
        let job = self
            .job
            .as_deref()
            .map_or(true, |title| candidate.jobs.iter().any(|j| j.value == title));
        let sex = self
            .sex
            .as_deref()
            .map_or(true, |sex| candidate.sex.as_deref() == Some(sex));
        let education = self
            .education
            .as_deref()
            .map_or(true, |level| candidate.education.as_deref() == Some(level));

        name && job && sex && education && self.age_matches(candidate.age)
    }

    /// Candidates without a known age are never filtered out by age.
    fn age_matches(&self, age: Option<u32>) -> bool {
        match age {
            None | Some(0) => true,
            Some(age) => {
                self.min_age.map_or(true, |min| age >= min)
                    && self.max_age.map_or(true, |max| age <= max)
            }
        }
    }

    pub fn active_count(&self) -> usize {
        [
            self.name.is_some(),
            self.job.is_some(),
            self.sex.is_some(),
            self.education.is_some(),
            self.min_age.is_some(),
            self.max_age.is_some(),
        ]
        .iter()
        .filter(|&&set| set)
        .count()
    }
}

/// Distinct job values across all candidates, sorted.
pub fn job_options(candidates: &[Candidate]) -> Vec<String> {
    candidates
        .iter()
        .flat_map(|c| c.jobs.iter().map(|j| j.value.clone()))
        .filter(|value| !value.is_empty())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

pub fn search(candidates: Vec<Candidate>, filter: &CandidateFilter) -> TalentPoolResponse {
    let options = FilterOptions {
        jobs: job_options(&candidates),
        sexes: SEX_OPTIONS.to_vec(),
        education_levels: EDUCATION_OPTIONS.to_vec(),
    };
    let total = candidates.len();
    let matched: Vec<Candidate> = candidates
        .into_iter()
        .filter(|c| filter.matches(c))
        .collect();

    TalentPoolResponse {
        total,
        matched: matched.len(),
        active_filters: filter.active_count(),
        options,
        candidates: matched,
    }
}

#[derive(Clone)]
pub struct TalentPoolService {
    aggregation: AggregationService,
}

impl TalentPoolService {
    pub fn new(aggregation: AggregationService) -> Self {
        Self { aggregation }
    }

    /// Every candidate the user owns, from both tables.
    pub async fn load(&self, user_id: i64) -> Result<Vec<Candidate>> {
        let query = RowQuery::new().filter_contains("usuario", user_id);
        self.aggregation.load_candidates(user_id, &query).await
    }

    #[instrument(skip(self, filter))]
    pub async fn search(&self, user_id: i64, filter: &CandidateFilter) -> Result<TalentPoolResponse> {
        let candidates = self.load(user_id).await?;
        let response = search(candidates, filter);
        info!(
            total = response.total,
            matched = response.matched,
            "talent pool searched"
        );
        Ok(response)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::candidate::{CandidateSource, CandidateStatus};
    use crate::models::LinkRef;

    fn candidate(id: i64, name: &str, age: Option<u32>, sex: &str, job: &str) -> Candidate {
        Candidate {
            id,
            source: CandidateSource::Regular,
            name: name.to_string(),
            age,
            sex: Some(sex.to_string()),
            education: Some("Superior completo".to_string()),
            jobs: vec![LinkRef::new(id, job)],
            users: vec![LinkRef::new(7, "Rita")],
            status: CandidateStatus::Screening,
            score: None,
            email: None,
            phone: None,
            summary: None,
        }
    }

    fn pool() -> Vec<Candidate> {
        vec![
            candidate(1, "Ana Souza", Some(25), "Feminino", "Backend"),
            candidate(2, "Bruno Lima", Some(41), "Masculino", "Frontend"),
            candidate(3, "Carla Dias", None, "Feminino", "Backend"),
        ]
    }

    #[test]
    fn name_filter_is_case_insensitive() {
        let filter = CandidateFilter {
            name: Some("SOUZA".into()),
            ..Default::default()
        };
        let result = search(pool(), &filter);
        assert_eq!(result.matched, 1);
        assert_eq!(result.candidates[0].id, 1);
        assert_eq!(result.active_filters, 1);
    }

    #[test]
    fn age_range_lets_unknown_ages_through() {
        let filter = CandidateFilter {
            min_age: Some(30),
            max_age: Some(50),
            ..Default::default()
        };
        let ids: Vec<i64> = search(pool(), &filter).candidates.iter().map(|c| c.id).collect();
        assert_eq!(ids, vec![2, 3]);
    }

    #[test]
    fn combined_filters_and_clearing() {
        let filter = CandidateFilter {
            sex: Some("Feminino".into()),
            job: Some("Backend".into()),
            ..Default::default()
        };
        let narrowed = search(pool(), &filter);
        assert_eq!(narrowed.matched, 2);
        assert_eq!(narrowed.total, 3);

        let cleared = search(pool(), &CandidateFilter::default());
        assert_eq!(cleared.matched, cleared.total);
        assert_eq!(cleared.active_filters, 0);
    }

    #[test]
    fn job_options_are_distinct_and_sorted() {
        assert_eq!(job_options(&pool()), vec!["Backend", "Frontend"]);
    }
}
