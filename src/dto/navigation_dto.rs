use serde::{Deserialize, Serialize};

use crate::models::navigation::{NavigationItem, PageKey};
use crate::models::user::UserProfile;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct NavigationQuery {
    pub page: Option<PageKey>,
}

#[derive(Debug, Clone, Serialize)]
pub struct NavigationResponse {
    pub page: PageKey,
    pub authenticated: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub profile: Option<UserProfile>,
    /// Empty while signed out; the auth screens have no sidebar.
    pub menu: Vec<NavigationItem>,
}
