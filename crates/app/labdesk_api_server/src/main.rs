//! Labdesk API server binary.

use clap::Parser;
use sqlx::postgres::PgPoolOptions;
use tracing::info;

/// CLI arguments for the API server.
#[derive(Parser, Debug)]
#[command(name = "labdesk_api_server", about = "Labdesk API server")]
struct Args {
    /// Port to listen on.
    #[arg(long, env = "PORT", default_value_t = 5000)]
    port: u16,

    /// PostgreSQL connection URL for the experiment store.
    #[arg(
        long,
        env = "DATABASE_URL",
        default_value = "postgres://localhost:5432/labdesk"
    )]
    database_url: String,

    /// Maximum number of database connections in the pool.
    #[arg(long, default_value_t = 5)]
    max_connections: u32,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,labdesk_api=debug,labdesk_core=debug".parse().unwrap()),
        )
        .init();

    let args = Args::parse();

    info!(database_url = %args.database_url, port = args.port, "starting labdesk_api_server");

    let pool = PgPoolOptions::new()
        .max_connections(args.max_connections)
        .acquire_timeout(std::time::Duration::from_secs(30))
        .connect(&args.database_url)
        .await?;

    info!("running database migrations");
    labdesk_api::migrate(&pool).await?;

    let config = labdesk_api::config::ApiConfig {
        bind_addr: format!("0.0.0.0:{}", args.port),
        pg_connection_url: args.database_url,
    };

    let state = labdesk_api::AppState {
        pool,
        config: config.clone(),
    };

    let app = labdesk_api::router(state);

    let listener = tokio::net::TcpListener::bind(&config.bind_addr).await?;
    info!(addr = %listener.local_addr()?, "REST API listening");

    axum::serve(listener, app).await?;

    Ok(())
}
