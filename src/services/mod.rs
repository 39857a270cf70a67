pub mod aggregation_service;
pub mod auth_service;
pub mod candidate_service;
pub mod export_service;
pub mod job_service;
pub mod schedule_service;
pub mod talent_pool_service;
pub mod webhook_service;
