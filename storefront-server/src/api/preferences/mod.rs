//! Visitor preferences
//!
//! | Path | Method | Meaning |
//! |------|--------|---------|
//! | /api/preferences/theme | GET | theme from the `theme` cookie, `light` if absent |
//! | /api/preferences/theme | PUT | store the theme in the cookie for a year |

use axum::extract::rejection::JsonRejection;
use axum::response::IntoResponse;
use axum::{Json, Router, routing::get};
use http::HeaderMap;
use http::header::SET_COOKIE;
use serde::{Deserialize, Serialize};
use shared::models::{THEME_COOKIE, THEME_COOKIE_MAX_AGE_SECS, Theme};

use crate::api::{ApiResponse, AppError, AppResult};
use crate::core::ServerState;
use crate::utils::cookie::{find_cookie, set_cookie_value};

pub fn router() -> Router<ServerState> {
    Router::new().route("/api/preferences/theme", get(get_theme).put(set_theme))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThemePreference {
    pub theme: Theme,
}

/// Theme carried by the request; unknown values fall back to the default
pub fn theme_from_headers(headers: &HeaderMap) -> Theme {
    find_cookie(headers, THEME_COOKIE)
        .and_then(|value| value.parse().ok())
        .unwrap_or_default()
}

/// GET /api/preferences/theme
pub async fn get_theme(headers: HeaderMap) -> ApiResponse<ThemePreference> {
    ApiResponse::success(ThemePreference {
        theme: theme_from_headers(&headers),
    })
}

/// PUT /api/preferences/theme
pub async fn set_theme(
    body: Result<Json<ThemePreference>, JsonRejection>,
) -> AppResult<impl IntoResponse> {
    let Json(preference) = body.map_err(|e| AppError::validation(e.body_text()))?;
    let cookie = set_cookie_value(
        THEME_COOKIE,
        preference.theme.as_str(),
        THEME_COOKIE_MAX_AGE_SECS,
    );
    tracing::debug!(theme = %preference.theme, "Theme preference stored");
    Ok(([(SET_COOKIE, cookie)], ApiResponse::success(preference)))
}
