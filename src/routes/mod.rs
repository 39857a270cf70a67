pub mod auth;
pub mod candidates;
pub mod dashboard;
pub mod health;
pub mod jobs;
pub mod navigation;
pub mod schedule;
pub mod settings;
pub mod talent_pool;
