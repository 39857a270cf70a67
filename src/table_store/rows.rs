//! Row shapes as the table store returns them, and the adapters that turn
//! each shape into the crate's canonical models.
//!
//! Column names are the store's own (Portuguese) field names. The regular
//! candidates table is strictly typed; the chat-channel table is filled by an
//! automated intake and stores several fields as free text, so its row type
//! accepts either form.

use serde::{Deserialize, Deserializer, Serialize};

use crate::models::candidate::{Candidate, CandidateSource, CandidateStatus};
use crate::models::job::JobPosting;
use crate::models::schedule::ScheduledEvent;
use crate::models::user::UserProfile;
use crate::models::LinkRef;
use crate::utils::time::from_rfc3339;

fn string_or_empty<'de, D>(deserializer: D) -> std::result::Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

fn links_or_empty<'de, D>(deserializer: D) -> std::result::Result<Vec<LinkRef>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Vec<LinkRef>>::deserialize(deserializer)?.unwrap_or_default())
}

fn non_empty(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

#[derive(Debug, Clone, Deserialize)]
pub struct SelectOption {
    pub id: i64,
    #[serde(default, deserialize_with = "string_or_empty")]
    pub value: String,
    #[serde(default)]
    pub color: Option<String>,
}

/// Single-select cell: an option object, or plain text in the chat table.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum SelectValue {
    Option(SelectOption),
    Text(String),
}

impl SelectValue {
    pub fn into_value(self) -> Option<String> {
        let raw = match self {
            SelectValue::Option(option) => option.value,
            SelectValue::Text(text) => text,
        };
        non_empty(Some(raw))
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum AgeValue {
    Int(i64),
    Float(f64),
    Text(String),
}

impl AgeValue {
    pub fn years(&self) -> Option<u32> {
        match self {
            AgeValue::Int(n) => u32::try_from(*n).ok(),
            AgeValue::Float(f) if f.is_finite() && *f >= 0.0 => Some(f.trunc() as u32),
            AgeValue::Float(_) => None,
            AgeValue::Text(text) => text.trim().parse::<u32>().ok(),
        }
    }
}

/// Number cell; decimal columns come back as strings.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum NumberValue {
    Number(f64),
    Text(String),
}

impl NumberValue {
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            NumberValue::Number(n) => Some(*n),
            NumberValue::Text(text) => text.trim().parse().ok(),
        }
    }
}

/// The chat table's `vaga` column: a proper link list, or the job title as
/// plain text.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum JobField {
    Links(Vec<LinkRef>),
    Text(String),
}

impl JobField {
    pub fn into_links(self) -> Vec<LinkRef> {
        match self {
            JobField::Links(links) => links,
            JobField::Text(title) => {
                let title = title.trim();
                if title.is_empty() {
                    Vec::new()
                } else {
                    vec![LinkRef::synthetic(title)]
                }
            }
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct UserRow {
    pub id: i64,
    #[serde(default, deserialize_with = "string_or_empty")]
    pub nome: String,
    #[serde(rename = "Email", default, deserialize_with = "string_or_empty")]
    pub email: String,
    #[serde(default, deserialize_with = "string_or_empty")]
    pub empresa: String,
    #[serde(default, deserialize_with = "string_or_empty")]
    pub telefone: String,
    #[serde(default)]
    pub senha_hash: Option<String>,
    #[serde(default)]
    pub avatar_url: Option<String>,
}

impl UserRow {
    pub fn password_hash(&self) -> Option<&str> {
        self.senha_hash
            .as_deref()
            .map(str::trim)
            .filter(|hash| !hash.is_empty())
    }
}

impl From<UserRow> for UserProfile {
    fn from(row: UserRow) -> Self {
        Self {
            id: row.id,
            name: row.nome,
            email: row.email,
            company: row.empresa,
            phone: row.telefone,
            avatar_url: non_empty(row.avatar_url),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct NewUserRow<'a> {
    pub nome: &'a str,
    pub empresa: &'a str,
    pub telefone: &'a str,
    #[serde(rename = "Email")]
    pub email: &'a str,
    pub senha_hash: &'a str,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct UserRowUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nome: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub empresa: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub telefone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avatar_url: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct JobRow {
    pub id: i64,
    #[serde(default, deserialize_with = "string_or_empty")]
    pub titulo: String,
    #[serde(default, deserialize_with = "string_or_empty")]
    pub descricao: String,
    #[serde(default, deserialize_with = "string_or_empty")]
    pub requisitos_obrigatorios: String,
    #[serde(default, deserialize_with = "string_or_empty")]
    pub requisitos_desejaveis: String,
    #[serde(default, deserialize_with = "links_or_empty")]
    pub usuario: Vec<LinkRef>,
}

impl From<JobRow> for JobPosting {
    fn from(row: JobRow) -> Self {
        Self {
            id: row.id,
            title: row.titulo,
            description: row.descricao,
            required_skills: row.requisitos_obrigatorios,
            desired_skills: row.requisitos_desejaveis,
            users: row.usuario,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct NewJobRow<'a> {
    pub titulo: &'a str,
    pub descricao: &'a str,
    pub requisitos_obrigatorios: &'a str,
    pub requisitos_desejaveis: &'a str,
    pub usuario: Vec<i64>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RegularCandidateRow {
    pub id: i64,
    #[serde(default, deserialize_with = "string_or_empty")]
    pub nome: String,
    #[serde(default)]
    pub idade: Option<AgeValue>,
    #[serde(default)]
    pub sexo: Option<SelectValue>,
    #[serde(default)]
    pub escolaridade: Option<SelectValue>,
    #[serde(default, deserialize_with = "links_or_empty")]
    pub vaga: Vec<LinkRef>,
    #[serde(default, deserialize_with = "links_or_empty")]
    pub usuario: Vec<LinkRef>,
    #[serde(default)]
    pub status: Option<SelectValue>,
    #[serde(default)]
    pub score: Option<NumberValue>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub telefone: Option<String>,
    #[serde(default)]
    pub resumo: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ChatCandidateRow {
    pub id: i64,
    #[serde(default, deserialize_with = "string_or_empty")]
    pub nome: String,
    #[serde(default)]
    pub idade: Option<AgeValue>,
    #[serde(default)]
    pub sexo: Option<SelectValue>,
    #[serde(default)]
    pub escolaridade: Option<SelectValue>,
    #[serde(default)]
    pub vaga: Option<JobField>,
    #[serde(default, deserialize_with = "links_or_empty")]
    pub usuario: Vec<LinkRef>,
    #[serde(default)]
    pub status: Option<SelectValue>,
    #[serde(default)]
    pub score: Option<NumberValue>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub telefone: Option<String>,
    #[serde(default)]
    pub resumo: Option<String>,
}

/// Body of a status change on either candidates table. Select columns accept
/// the option's text value.
#[derive(Debug, Clone, Serialize)]
pub struct CandidateStatusUpdate<'a> {
    pub status: &'a str,
}

fn status_of(value: Option<SelectValue>) -> CandidateStatus {
    value
        .and_then(SelectValue::into_value)
        .map(|v| CandidateStatus::from_stored(&v))
        .unwrap_or_default()
}

pub fn regular_candidate(row: RegularCandidateRow) -> Candidate {
    Candidate {
        id: row.id,
        source: CandidateSource::Regular,
        name: row.nome,
        age: row.idade.as_ref().and_then(AgeValue::years),
        sex: row.sexo.and_then(SelectValue::into_value),
        education: row.escolaridade.and_then(SelectValue::into_value),
        jobs: row.vaga,
        users: row.usuario,
        status: status_of(row.status),
        score: row.score.as_ref().and_then(NumberValue::as_f64),
        email: non_empty(row.email),
        phone: non_empty(row.telefone),
        summary: non_empty(row.resumo),
    }
}

pub fn chat_candidate(row: ChatCandidateRow) -> Candidate {
    Candidate {
        id: row.id,
        source: CandidateSource::Chat,
        name: row.nome,
        age: row.idade.as_ref().and_then(AgeValue::years),
        sex: row.sexo.and_then(SelectValue::into_value),
        education: row.escolaridade.and_then(SelectValue::into_value),
        jobs: row.vaga.map(JobField::into_links).unwrap_or_default(),
        users: row.usuario,
        status: status_of(row.status),
        score: row.score.as_ref().and_then(NumberValue::as_f64),
        email: non_empty(row.email),
        phone: non_empty(row.telefone),
        summary: non_empty(row.resumo),
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct ScheduleRow {
    pub id: i64,
    #[serde(rename = "Título", default, deserialize_with = "string_or_empty")]
    pub titulo: String,
    #[serde(rename = "Início", default)]
    pub inicio: Option<String>,
    #[serde(rename = "Fim", default)]
    pub fim: Option<String>,
    #[serde(rename = "Detalhes", default, deserialize_with = "string_or_empty")]
    pub detalhes: String,
    #[serde(rename = "Candidato", default, deserialize_with = "links_or_empty")]
    pub candidato: Vec<LinkRef>,
    #[serde(rename = "Vaga", default, deserialize_with = "links_or_empty")]
    pub vaga: Vec<LinkRef>,
}

impl From<ScheduleRow> for ScheduledEvent {
    fn from(row: ScheduleRow) -> Self {
        Self {
            id: row.id,
            title: row.titulo,
            start: row.inicio.as_deref().and_then(|s| from_rfc3339(s).ok()),
            end: row.fim.as_deref().and_then(|s| from_rfc3339(s).ok()),
            details: row.detalhes,
            candidate: row.candidato.into_iter().next(),
            job: row.vaga.into_iter().next(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct NewScheduleRow<'a> {
    #[serde(rename = "Título")]
    pub titulo: &'a str,
    #[serde(rename = "Início")]
    pub inicio: String,
    #[serde(rename = "Fim")]
    pub fim: String,
    #[serde(rename = "Detalhes")]
    pub detalhes: &'a str,
    #[serde(rename = "Candidato")]
    pub candidato: Vec<i64>,
    #[serde(rename = "Vaga")]
    pub vaga: Vec<i64>,
}
