use serde::{Deserialize, Serialize};

use crate::models::{LinkRef, Owned};

/// Which remote table a candidate came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CandidateSource {
    Regular,
    Chat,
}

impl std::str::FromStr for CandidateSource {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "regular" => Ok(CandidateSource::Regular),
            "chat" => Ok(CandidateSource::Chat),
            other => Err(format!("Unknown candidate source '{}'", other)),
        }
    }
}

/// Stage of a candidate in the hiring pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CandidateStatus {
    #[default]
    Screening,
    Interview,
    Approved,
    Rejected,
}

impl CandidateStatus {
    /// Pipeline order, which is also the kanban column order.
    pub const ALL: [CandidateStatus; 4] = [
        CandidateStatus::Screening,
        CandidateStatus::Interview,
        CandidateStatus::Approved,
        CandidateStatus::Rejected,
    ];

    /// Value stored in the table store's `status` select.
    pub fn stored_value(self) -> &'static str {
        match self {
            CandidateStatus::Screening => "Triagem",
            CandidateStatus::Interview => "Entrevista",
            CandidateStatus::Approved => "Aprovado",
            CandidateStatus::Rejected => "Reprovado",
        }
    }

    /// Unknown values read as `Screening`.
    pub fn from_stored(value: &str) -> Self {
        match value.trim() {
            "Entrevista" => CandidateStatus::Interview,
            "Aprovado" => CandidateStatus::Approved,
            "Reprovado" => CandidateStatus::Rejected,
            _ => CandidateStatus::Screening,
        }
    }
}

/// Canonical candidate, whichever table it was read from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Candidate {
    pub id: i64,
    pub source: CandidateSource,
    pub name: String,
    pub age: Option<u32>,
    pub sex: Option<String>,
    pub education: Option<String>,
    pub jobs: Vec<LinkRef>,
    pub users: Vec<LinkRef>,
    pub status: CandidateStatus,
    pub score: Option<f64>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub summary: Option<String>,
}

impl Owned for Candidate {
    fn owners(&self) -> &[LinkRef] {
        &self.users
    }
}

impl Candidate {
    /// Whether this candidate applied to the given job. Chat-channel
    /// candidates only carry the job title (under link id 0), so those are
    /// matched by title instead.
    pub fn applied_to(&self, job_id: i64, job_title: &str) -> bool {
        self.jobs.iter().any(|job| {
            job.id == job_id || (job.id == LinkRef::SYNTHETIC_ID && job.value == job_title)
        })
    }
}
