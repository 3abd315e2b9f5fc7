// Create an admin account from the command line.
//
// Admin registration is blocked at the HTTP layer; this binary and the
// SETUP_TOKEN bootstrap endpoint are the only ways to mint one.

use anyhow::{Context, Result};
use clap::Parser;
use server_core::domains::users::actions::register_user;
use server_core::domains::users::models::user::UserRole;
use server_core::Config;
use sqlx::postgres::PgPoolOptions;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "create_admin", about = "Create an admin account")]
struct Args {
    /// Email address for the new admin
    #[arg(long)]
    email: String,

    /// Password (8-72 characters)
    #[arg(long)]
    password: String,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,sqlx=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let args = Args::parse();
    let config = Config::from_env().context("Failed to load configuration")?;

    let pool = PgPoolOptions::new()
        .max_connections(2)
        .connect(&config.database_url)
        .await
        .context("Failed to connect to database")?;

    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .context("Failed to run migrations")?;

    let user = register_user(&args.email, &args.password, UserRole::Admin, true, &pool)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to create admin: {e}"))?;

    println!("Created admin {} ({})", user.email, user.id);
    Ok(())
}
