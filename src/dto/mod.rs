pub mod auth_dto;
pub mod dashboard_dto;
pub mod job_dto;
pub mod navigation_dto;
pub mod results_dto;
pub mod schedule_dto;
pub mod settings_dto;
pub mod talent_pool_dto;
