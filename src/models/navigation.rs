use serde::{Deserialize, Serialize};

/// Screens of the recruiter application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PageKey {
    Login,
    Signup,
    Dashboard,
    NewScreening,
    Results,
    Settings,
    Database,
    Agenda,
}

impl PageKey {
    pub fn requires_auth(self) -> bool {
        !matches!(self, PageKey::Login | PageKey::Signup)
    }

    /// Page actually shown for a requested page.
    ///
    /// Signed-out users only reach the login and sign-up screens; signed-in
    /// users asking for either are sent to the dashboard.
    pub fn resolve(requested: Option<PageKey>, authenticated: bool) -> PageKey {
        match (requested, authenticated) {
            (Some(PageKey::Signup), false) => PageKey::Signup,
            (_, false) => PageKey::Login,
            (Some(page), true) if page.requires_auth() => page,
            (_, true) => PageKey::Dashboard,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NavigationItem {
    pub key: PageKey,
    pub label: &'static str,
    pub icon: &'static str,
    pub active: bool,
}

const MENU: [(PageKey, &str, &str); 6] = [
    (PageKey::Dashboard, "Dashboard", "LayoutDashboard"),
    (PageKey::NewScreening, "New Screening", "PlusCircle"),
    (PageKey::Results, "Results", "BarChart3"),
    (PageKey::Database, "Talent Pool", "Database"),
    (PageKey::Agenda, "Agenda", "Calendar"),
    (PageKey::Settings, "Settings", "Settings"),
];

/// Sidebar menu with the current page marked active.
pub fn menu(current: PageKey) -> Vec<NavigationItem> {
    MENU.iter()
        .map(|&(key, label, icon)| NavigationItem {
            key,
            label,
            icon,
            active: key == current,
        })
        .collect()
}
