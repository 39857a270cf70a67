use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct CalendarConnectionResponse {
    pub connected: bool,
    pub authorize_url: String,
}
