//! Auth Config

use clap::Args;

/// Dashboard authentication settings.
#[derive(Debug, Args)]
pub struct AuthConfig {
    /// Password that unlocks the dashboard
    #[arg(long, env = "ADMIN_PASSWORD", hide_env_values = true)]
    pub admin_password: String,

    /// Mark the session cookie `Secure`. Disable only for plain-HTTP development.
    #[arg(
        long,
        env = "COOKIE_SECURE",
        default_value_t = true,
        action = clap::ArgAction::Set
    )]
    pub cookie_secure: bool,
}
