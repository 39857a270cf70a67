use crate::error::{Error, Result};
use dotenvy::dotenv;
use std::env;
use std::path::PathBuf;
use std::sync::OnceLock;

const DEFAULT_SERVER_ADDRESS: &str = "127.0.0.1:3001";
const DEFAULT_GOOGLE_OAUTH_URL: &str = "https://n8n.focoserv.com.br/rest/oauth2-credential/callback";

/// Numeric identifiers of the remote tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TableIds {
    pub jobs: u32,
    pub candidates: u32,
    pub users: u32,
    pub chat_candidates: u32,
    pub schedule: u32,
}

impl Default for TableIds {
    fn default() -> Self {
        Self {
            jobs: 709,
            candidates: 710,
            users: 711,
            chat_candidates: 712,
            schedule: 713,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub server_address: String,
    pub table_store_url: String,
    pub table_store_token: String,
    pub tables: TableIds,
    pub jwt_secret: String,
    pub session_ttl_hours: i64,
    pub session_dir: Option<PathBuf>,
    pub resume_webhook_url: String,
    pub schedule_webhook_url: String,
    pub google_oauth_url: String,
    pub public_rps: u32,
    pub http_timeout_secs: u64,
}

pub static CONFIG: OnceLock<Config> = OnceLock::new();

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenv().ok();

        let defaults = TableIds::default();
        Ok(Self {
            server_address: get_env_or("SERVER_ADDRESS", DEFAULT_SERVER_ADDRESS),
            table_store_url: get_env("TABLE_STORE_URL")?,
            table_store_token: get_env("TABLE_STORE_TOKEN")?,
            tables: TableIds {
                jobs: get_env_parse_or("JOBS_TABLE_ID", defaults.jobs)?,
                candidates: get_env_parse_or("CANDIDATES_TABLE_ID", defaults.candidates)?,
                users: get_env_parse_or("USERS_TABLE_ID", defaults.users)?,
                chat_candidates: get_env_parse_or(
                    "CHAT_CANDIDATES_TABLE_ID",
                    defaults.chat_candidates,
                )?,
                schedule: get_env_parse_or("SCHEDULE_TABLE_ID", defaults.schedule)?,
            },
            jwt_secret: get_env("JWT_SECRET")?,
            session_ttl_hours: get_env_parse_or("SESSION_TTL_HOURS", 168)?,
            session_dir: env::var("SESSION_DIR")
                .ok()
                .filter(|dir| !dir.trim().is_empty())
                .map(PathBuf::from),
            resume_webhook_url: get_env("RESUME_WEBHOOK_URL")?,
            schedule_webhook_url: get_env("SCHEDULE_WEBHOOK_URL")?,
            google_oauth_url: get_env_or("GOOGLE_OAUTH_URL", DEFAULT_GOOGLE_OAUTH_URL),
            public_rps: get_env_parse_or("PUBLIC_RPS", 20)?,
            http_timeout_secs: get_env_parse_or("HTTP_TIMEOUT_SECS", 60)?,
        })
    }
}

fn get_env(name: &str) -> Result<String> {
    env::var(name).map_err(|_| Error::Config(format!("Missing environment variable: {}", name)))
}

fn get_env_or(name: &str, default: &str) -> String {
    env::var(name).unwrap_or_else(|_| default.to_string())
}

fn get_env_parse_or<T>(name: &str, default: T) -> Result<T>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    match env::var(name) {
        Ok(raw) => raw
            .parse()
            .map_err(|e| Error::Config(format!("Invalid value for {}: {}", name, e))),
        Err(_) => Ok(default),
    }
}

pub fn init_config() -> Result<()> {
    let config = Config::from_env()?;
    CONFIG
        .set(config)
        .map_err(|_| Error::Config("Configuration has already been initialized".to_string()))?;
    Ok(())
}

pub fn get_config() -> Result<&'static Config> {
    CONFIG
        .get()
        .ok_or_else(|| Error::Config("Configuration has not been initialized".to_string()))
}
