//! Application state for the amenity API

use anyhow::{Context, Result};
use compliance_engine::ComplianceEngine;
use sqlx::sqlite::{SqlitePool, SqlitePoolOptions};

pub struct AppState {
    pub db: SqlitePool,
    pub engine: ComplianceEngine,
}

impl AppState {
    pub async fn connect(database_url: &str) -> Result<Self> {
        tracing::info!("Connecting to database: {}", database_url);

        let pool = SqlitePoolOptions::new()
            .max_connections(5)
            .connect(database_url)
            .await
            .with_context(|| format!("failed to open {}", database_url))?;

        Self::with_pool(pool).await
    }

    /// State over an existing pool; migrations run first
    pub async fn with_pool(pool: SqlitePool) -> Result<Self> {
        run_migrations(&pool).await?;
        Ok(Self {
            db: pool,
            engine: ComplianceEngine::standard(),
        })
    }
}

async fn run_migrations(pool: &SqlitePool) -> Result<()> {
    tracing::info!("Running database migrations...");

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS stations (
            station_code TEXT PRIMARY KEY COLLATE NOCASE,
            station_name TEXT NOT NULL,
            categorisation TEXT NOT NULL DEFAULT '',
            zone TEXT NOT NULL DEFAULT '',
            division TEXT NOT NULL DEFAULT '',
            section TEXT NOT NULL DEFAULT '',
            earnings_range TEXT NOT NULL DEFAULT '',
            passenger_range TEXT NOT NULL DEFAULT '',
            passenger_footfall INTEGER,
            platform_type TEXT NOT NULL DEFAULT '',
            number_of_platforms INTEGER
        )
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS station_amenities (
            station_code TEXT PRIMARY KEY COLLATE NOCASE,
            fields_json TEXT NOT NULL DEFAULT '{}',
            updated_at TEXT NOT NULL
        )
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS works (
            project_id TEXT PRIMARY KEY,
            pending_with TEXT NOT NULL DEFAULT '',
            year_of_sanction INTEGER,
            date_of_sanction TEXT NOT NULL DEFAULT '',
            short_name_of_work TEXT NOT NULL DEFAULT '',
            block_section TEXT NOT NULL DEFAULT '',
            station TEXT NOT NULL DEFAULT '',
            allocation TEXT NOT NULL DEFAULT '',
            cost REAL NOT NULL DEFAULT 0,
            expenditure_to_date REAL NOT NULL DEFAULT 0,
            financial_progress_percent REAL NOT NULL DEFAULT 0,
            if_umbrella TEXT NOT NULL DEFAULT '',
            parent_work TEXT NOT NULL DEFAULT '',
            section TEXT NOT NULL DEFAULT '',
            remarks TEXT NOT NULL DEFAULT '',
            latest_remarks_civil TEXT NOT NULL DEFAULT '',
            latest_remarks_electrical TEXT NOT NULL DEFAULT '',
            latest_remarks_s_t TEXT NOT NULL DEFAULT '',
            latest_remarks_civil_as_on TEXT NOT NULL DEFAULT ''
        )
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS remarks (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            date TEXT NOT NULL,
            pending_with TEXT NOT NULL DEFAULT '',
            project_id TEXT NOT NULL,
            department TEXT NOT NULL DEFAULT '',
            remark TEXT NOT NULL
        )
        "#,
    )
    .execute(pool)
    .await?;

    // Index for the per-authority summary
    sqlx::query(
        r#"
        CREATE INDEX IF NOT EXISTS idx_works_pending_with ON works(pending_with)
        "#,
    )
    .execute(pool)
    .await?;

    tracing::info!("Migrations complete");
    Ok(())
}
