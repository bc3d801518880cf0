//! Local PostgreSQL lifecycle for development and tests.
//!
//! Spawns `initdb`, `pg_ctl`, and `pg_isready` to manage a throwaway local
//! instance. Production deployments point `DATABASE_URL` at an already
//! running server and never touch this module.

use std::net::TcpListener;
use std::path::PathBuf;
use std::time::Duration;

use sqlx::postgres::PgPool;
use thiserror::Error;
use tokio::process::Command;
use tokio::time::sleep;
use tracing::info;

/// Database name used by locally managed instances.
const LOCAL_DATABASE: &str = "labdesk";

/// Maximum time to wait for PostgreSQL to accept connections.
const READY_TIMEOUT: Duration = Duration::from_secs(30);

/// Poll interval while waiting for readiness.
const READY_POLL: Duration = Duration::from_millis(200);

/// Errors from managing the local PostgreSQL instance.
#[derive(Debug, Error)]
pub enum LocalDbError {
    #[error("PostgreSQL command failed: {0}")]
    Command(String),

    #[error("SQL error: {0}")]
    Sql(#[from] sqlx::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("pg_config not found on PATH")]
    PgConfigNotFound,

    #[error("PostgreSQL not ready after {0:?}")]
    ReadyTimeout(Duration),
}

/// Result type for local database operations.
pub type Result<T> = std::result::Result<T, LocalDbError>;

/// Manages a local PostgreSQL instance.
///
/// Data persists across restarts unless the instance is ephemeral.
pub struct LocalDbManager {
    bin_dir: PathBuf,
    data_dir: PathBuf,
    port: u16,
    started: bool,
    /// Holds the tempdir for ephemeral instances (dropped = cleaned up).
    _tempdir: Option<tempfile::TempDir>,
}

impl LocalDbManager {
    /// Creates a manager for `data_dir`, discovering PG binaries via
    /// `pg_config --bindir` on PATH.
    pub async fn new(data_dir: PathBuf) -> Result<Self> {
        let output = Command::new("pg_config")
            .arg("--bindir")
            .output()
            .await
            .map_err(|_| LocalDbError::PgConfigNotFound)?;

        if !output.status.success() {
            return Err(LocalDbError::PgConfigNotFound);
        }

        let bin_dir = String::from_utf8_lossy(&output.stdout).trim().to_string();

        Ok(Self {
            bin_dir: PathBuf::from(bin_dir),
            data_dir,
            port: 0,
            started: false,
            _tempdir: None,
        })
    }

    /// Creates a manager with ephemeral (temporary) storage for testing.
    ///
    /// Data is cleaned up when the manager is dropped.
    pub async fn ephemeral() -> Result<Self> {
        let tempdir = tempfile::tempdir()?;
        let mut mgr = Self::new(tempdir.path().join("pgdata")).await?;
        mgr._tempdir = Some(tempdir);
        Ok(mgr)
    }

    /// Initializes the data directory. Skips if already initialized, so it
    /// is safe to call on every start.
    pub async fn setup(&mut self) -> Result<()> {
        if self.data_dir.join("PG_VERSION").exists() {
            info!("data directory already initialized, skipping initdb");
            return Ok(());
        }

        info!(data_dir = %self.data_dir.display(), "initializing PostgreSQL data directory");
        let output = Command::new(self.bin_dir.join("initdb"))
            .arg("-D")
            .arg(&self.data_dir)
            .arg("--no-locale")
            .arg("--encoding=UTF8")
            .output()
            .await?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(LocalDbError::Command(format!("initdb failed: {stderr}")));
        }

        Ok(())
    }

    /// Starts the server and ensures the application database exists.
    pub async fn start(&mut self) -> Result<()> {
        if self.port == 0 {
            self.port = find_free_port()?;
        }

        info!(port = self.port, "starting PostgreSQL");

        let port_opt = format!(
            "-p {} -k {} -h localhost",
            self.port,
            self.data_dir.display()
        );
        let output = Command::new(self.bin_dir.join("pg_ctl"))
            .arg("-D")
            .arg(&self.data_dir)
            .arg("-o")
            .arg(&port_opt)
            .arg("-l")
            .arg(self.data_dir.join("postgresql.log"))
            .arg("start")
            .output()
            .await?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(LocalDbError::Command(format!("pg_ctl start failed: {stderr}")));
        }

        self.wait_for_ready().await?;
        self.started = true;

        self.create_database_if_missing().await?;

        info!(url = %self.connection_url(), "local database ready");
        Ok(())
    }

    /// Stops the server gracefully. No-op if it was never started.
    pub async fn stop(&mut self) -> Result<()> {
        if !self.started {
            return Ok(());
        }

        let output = Command::new(self.bin_dir.join("pg_ctl"))
            .arg("-D")
            .arg(&self.data_dir)
            .arg("-m")
            .arg("fast")
            .arg("stop")
            .output()
            .await?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(LocalDbError::Command(format!("pg_ctl stop failed: {stderr}")));
        }

        self.started = false;
        info!("PostgreSQL stopped");
        Ok(())
    }

    /// Connection URL for the application database.
    pub fn connection_url(&self) -> String {
        format!("postgresql://localhost:{}/{}", self.port, LOCAL_DATABASE)
    }

    /// Port the server is listening on (0 if not yet assigned).
    pub fn port(&self) -> u16 {
        self.port
    }

    /// Whether the server has been started.
    pub fn is_started(&self) -> bool {
        self.started
    }

    /// Poll `pg_isready` until the server accepts connections.
    async fn wait_for_ready(&self) -> Result<()> {
        let pg_isready = self.bin_dir.join("pg_isready");
        let deadline = tokio::time::Instant::now() + READY_TIMEOUT;

        loop {
            let output = Command::new(&pg_isready)
                .arg("-p")
                .arg(self.port.to_string())
                .arg("-h")
                .arg("localhost")
                .output()
                .await?;

            if output.status.success() {
                return Ok(());
            }

            if tokio::time::Instant::now() >= deadline {
                return Err(LocalDbError::ReadyTimeout(READY_TIMEOUT));
            }

            sleep(READY_POLL).await;
        }
    }

    /// Create the application database if it doesn't exist.
    async fn create_database_if_missing(&self) -> Result<()> {
        // Connect to the maintenance database to check/create ours.
        let maintenance_url = format!("postgresql://localhost:{}/postgres", self.port);
        let pool = PgPool::connect(&maintenance_url).await?;

        let exists: bool =
            sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM pg_database WHERE datname = $1)")
                .bind(LOCAL_DATABASE)
                .fetch_one(&pool)
                .await?;

        if !exists {
            info!(database = LOCAL_DATABASE, "creating database");
            // CREATE DATABASE cannot use bind parameters.
            let sql = format!("CREATE DATABASE \"{LOCAL_DATABASE}\"");
            sqlx::query(&sql).execute(&pool).await?;
        }

        pool.close().await;
        Ok(())
    }
}

/// Find a free ephemeral port by binding to port 0.
fn find_free_port() -> Result<u16> {
    let listener = TcpListener::bind("127.0.0.1:0")?;
    Ok(listener.local_addr()?.port())
}

/// Default data directory for a persistent local instance.
///
/// Platform paths:
/// - macOS: `~/Library/Application Support/labdesk/pgdata`
/// - Linux: `~/.local/share/labdesk/pgdata`
/// - Windows: `%APPDATA%\labdesk\pgdata`
pub fn default_data_dir() -> Option<PathBuf> {
    dirs::data_dir().map(|d| d.join("labdesk").join("pgdata"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_data_dir_is_some() {
        let dir = default_data_dir();
        assert!(dir.is_some());
        let dir = dir.unwrap();
        assert!(dir.ends_with("labdesk/pgdata") || dir.ends_with("labdesk\\pgdata"));
    }

    #[test]
    fn find_free_port_returns_nonzero() {
        let port = find_free_port().expect("free port");
        assert_ne!(0, port);
    }
}
