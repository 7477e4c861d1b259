//! Session cookie construction.

use salvo::http::cookie::{Cookie, SameSite, time::Duration};

use souk_app::auth::SESSION_TTL_SECONDS;

/// Cookie carrying the dashboard session token.
pub(crate) const SESSION_COOKIE: &str = "admin_token";

/// Cookie that hands `token` to the browser for the lifetime of the session.
pub(super) fn session_cookie(token: String, secure: bool) -> Cookie<'static> {
    Cookie::build((SESSION_COOKIE, token))
        .http_only(true)
        .secure(secure)
        .same_site(SameSite::Lax)
        .path("/")
        .max_age(Duration::seconds(SESSION_TTL_SECONDS))
        .build()
}

/// Cookie that makes the browser drop the session token.
pub(super) fn expired_session_cookie(secure: bool) -> Cookie<'static> {
    Cookie::build((SESSION_COOKIE, ""))
        .http_only(true)
        .secure(secure)
        .same_site(SameSite::Lax)
        .path("/")
        .max_age(Duration::ZERO)
        .build()
}
