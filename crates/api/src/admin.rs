//! Command-line interface for the `hippo-admin` maintenance binary.

use std::time::Duration;

use anyhow::Context;
use clap::{Parser, Subcommand};
use hippo_core::seed::seed_medications;
use hippo_db::repositories::PgMedicationRepository;
use hippo_db::{DbConfig, DbPool};

/// Database maintenance for the hippo medication service.
#[derive(Parser, Debug)]
#[command(name = "hippo-admin")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// PostgreSQL connection string
    #[arg(long, env = "DATABASE_URL")]
    pub database_url: String,

    /// Maximum pool connections
    #[arg(long, env = "DB_MAX_CONNECTIONS", default_value_t = 2)]
    pub max_connections: u32,

    /// Seconds to wait for a connection
    #[arg(long, env = "DB_ACQUIRE_TIMEOUT_SECS", default_value_t = 5)]
    pub acquire_timeout_secs: u64,

    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Create the schema in the database
    Migrate,

    /// Add sample medications to the database
    Seed,

    /// Migrate, then seed
    MigrateSeed,
}

impl Command {
    pub fn migrates(self) -> bool {
        matches!(self, Self::Migrate | Self::MigrateSeed)
    }

    pub fn seeds(self) -> bool {
        matches!(self, Self::Seed | Self::MigrateSeed)
    }
}

impl Cli {
    pub fn db_config(&self) -> DbConfig {
        DbConfig {
            url: self.database_url.clone(),
            max_connections: self.max_connections,
            min_connections: 0,
            acquire_timeout: Duration::from_secs(self.acquire_timeout_secs),
        }
    }
}

/// Execute `command` against `pool`.
pub async fn run(command: Command, pool: &DbPool) -> anyhow::Result<()> {
    if command.migrates() {
        hippo_db::run_migrations(pool)
            .await
            .context("migrating database")?;
        tracing::info!("Database migrations applied");
    }

    if command.seeds() {
        let repo = PgMedicationRepository::new(pool.clone());
        let inserted = seed_medications(&repo)
            .await
            .context("seeding database")?;
        tracing::info!(inserted, "Database seeded");
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    const URL: &str = "postgres://localhost/hippo";

    #[test]
    fn parse_migrate() {
        let cli = Cli::parse_from(["hippo-admin", "--database-url", URL, "migrate"]);
        assert_eq!(cli.command, Command::Migrate);
        assert!(cli.command.migrates());
        assert!(!cli.command.seeds());
    }

    #[test]
    fn parse_migrate_seed_runs_both() {
        let cli = Cli::parse_from(["hippo-admin", "--database-url", URL, "migrate-seed"]);
        assert_eq!(cli.command, Command::MigrateSeed);
        assert!(cli.command.migrates());
        assert!(cli.command.seeds());
    }

    #[test]
    fn parse_seed_with_pool_options() {
        let cli = Cli::parse_from([
            "hippo-admin",
            "--database-url",
            URL,
            "--max-connections",
            "4",
            "--acquire-timeout-secs",
            "9",
            "seed",
        ]);
        assert_eq!(cli.command, Command::Seed);

        let config = cli.db_config();
        assert_eq!(config.url, URL);
        assert_eq!(config.max_connections, 4);
        assert_eq!(config.acquire_timeout, Duration::from_secs(9));
    }

    #[test]
    fn command_is_required() {
        assert!(Cli::try_parse_from(["hippo-admin", "--database-url", URL]).is_err());
    }

    #[test]
    fn unknown_command_is_rejected() {
        assert!(Cli::try_parse_from(["hippo-admin", "--database-url", URL, "drop"]).is_err());
    }
}
