use axum::{
    extract::{Query, State},
    http::HeaderMap,
    response::{IntoResponse, Json},
};

use crate::{
    dto::navigation_dto::{NavigationQuery, NavigationResponse},
    middleware::auth::resolve_session,
    models::navigation::{menu, PageKey},
    AppState,
};

#[utoipa::path(
    get,
    path = "/api/navigation",
    params(
        ("page" = Option<String>, Query, description = "Requested page key")
    ),
    responses(
        (status = 200, description = "Resolved page and sidebar menu", body = Json<NavigationResponse>)
    )
)]
#[axum::debug_handler]
pub async fn navigation(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(query): Query<NavigationQuery>,
) -> impl IntoResponse {
    let active = resolve_session(&state, &headers);
    let authenticated = active.is_some();
    let page = PageKey::resolve(query.page, authenticated);

    Json(NavigationResponse {
        page,
        authenticated,
        profile: active.map(|a| a.session.profile),
        menu: if authenticated { menu(page) } else { Vec::new() },
    })
}
