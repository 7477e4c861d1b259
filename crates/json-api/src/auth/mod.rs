//! Dashboard authentication

mod cookies;
pub(crate) mod gate;
pub(crate) mod login;
pub(crate) mod logout;

pub(crate) use cookies::SESSION_COOKIE;

/// Where the gate sends visitors without a valid session.
pub(crate) const LOGIN_PATH: &str = "/dashboard/login";
