use clap::Args;
use souk_app::{
    auth::{AdminPassword, AuthService, PgAuthService},
    database::{self, Db},
};

#[derive(Debug, Args)]
pub(crate) struct PurgeSessionsArgs {
    /// PostgreSQL connection string
    #[arg(long, env = "DATABASE_URL", hide_env_values = true)]
    database_url: String,
}

pub(crate) async fn run(args: PurgeSessionsArgs) -> Result<(), String> {
    let pool = database::connect(&args.database_url)
        .await
        .map_err(|error| format!("failed to connect to database: {error}"))?;

    // Purging never checks the password.
    let service = PgAuthService::new(Db::new(pool), AdminPassword::new(""));

    let purged = service
        .purge_sessions()
        .await
        .map_err(|error| format!("failed to purge sessions: {error}"))?;

    println!("purged {purged} sessions");

    Ok(())
}
