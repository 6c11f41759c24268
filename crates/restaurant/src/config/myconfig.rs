use anyhow::{Context, Result, anyhow};
use chrono::NaiveTime;
use std::{path::PathBuf, time::Duration};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StorageBackend {
    Postgres { database_url: String },
    /// Development backend; only the order sequence can persist, through
    /// an optional snapshot file.
    Memory { sequence_snapshot: Option<PathBuf> },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CorsOrigins {
    Any,
    List(Vec<String>),
}

#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub storage: StorageBackend,
    pub run_migrations: bool,
    pub db_max_conn: u32,
    pub db_min_conn: u32,
    pub storage_timeout: Duration,
    pub daily_reset_at: NaiveTime,
    pub cors_origins: CorsOrigins,
    pub menu_seed_path: Option<PathBuf>,
    pub otel_endpoint: Option<String>,
}

impl Config {
    pub fn init() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let port = match var("PORT") {
            Some(v) => v.parse::<u16>().context("PORT must be a valid u16 integer")?,
            None => 5000,
        };

        let storage = match var("STORAGE_BACKEND").as_deref().unwrap_or("postgres") {
            "postgres" => StorageBackend::Postgres {
                database_url: var("DATABASE_URL")
                    .context("Missing environment variable: DATABASE_URL")?,
            },
            "memory" => StorageBackend::Memory {
                sequence_snapshot: var("SEQUENCE_SNAPSHOT_PATH").map(PathBuf::from),
            },
            other => {
                return Err(anyhow!(
                    "STORAGE_BACKEND must be 'postgres' or 'memory', got '{}'",
                    other
                ));
            }
        };

        let run_migrations = match var("RUN_MIGRATIONS").as_deref() {
            None | Some("true") => true,
            Some("false") => false,
            Some(other) => {
                return Err(anyhow!(
                    "RUN_MIGRATIONS must be 'true' or 'false', got '{}'",
                    other
                ));
            }
        };

        let db_max_conn = match var("DB_MAX_CONNECTION") {
            Some(v) => v
                .parse::<u32>()
                .context("DB_MAX_CONNECTION must be a valid u32 integer")?,
            None => 5,
        };
        let db_min_conn = match var("DB_MIN_CONNECTION") {
            Some(v) => v
                .parse::<u32>()
                .context("DB_MIN_CONNECTION must be a valid u32 integer")?,
            None => 1,
        };
        if db_min_conn > db_max_conn {
            return Err(anyhow!(
                "DB_MIN_CONNECTION ({db_min_conn}) exceeds DB_MAX_CONNECTION ({db_max_conn})"
            ));
        }

        let storage_timeout_ms = match var("STORAGE_TIMEOUT_MS") {
            Some(v) => v
                .parse::<u64>()
                .context("STORAGE_TIMEOUT_MS must be a valid integer")?,
            None => 2000,
        };
        if storage_timeout_ms == 0 {
            return Err(anyhow!("STORAGE_TIMEOUT_MS must be greater than zero"));
        }

        let daily_reset_at = match var("DAILY_RESET_AT") {
            Some(v) => NaiveTime::parse_from_str(v.trim(), "%H:%M")
                .with_context(|| format!("DAILY_RESET_AT must be HH:MM, got '{v}'"))?,
            None => NaiveTime::MIN,
        };

        let cors_origins = parse_cors_origins(var("CORS_ALLOWED_ORIGINS").as_deref());

        Ok(Self {
            port,
            storage,
            run_migrations,
            db_max_conn,
            db_min_conn,
            storage_timeout: Duration::from_millis(storage_timeout_ms),
            daily_reset_at,
            cors_origins,
            menu_seed_path: var("MENU_SEED_PATH").map(PathBuf::from),
            otel_endpoint: var("OTEL_ENDPOINT"),
        })
    }
}

fn parse_cors_origins(raw: Option<&str>) -> CorsOrigins {
    let origins: Vec<String> = raw
        .unwrap_or("*")
        .split(',')
        .map(str::trim)
        .filter(|o| !o.is_empty())
        .map(str::to_string)
        .collect();

    if origins.is_empty() || origins.iter().any(|o| o == "*") {
        CorsOrigins::Any
    } else {
        CorsOrigins::List(origins)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config(vars: &[(&str, &str)]) -> Result<Config> {
        let env: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| env.get(key).cloned())
    }

    #[test]
    fn memory_backend_uses_defaults() {
        let config = config(&[("STORAGE_BACKEND", "memory")]).unwrap();

        assert_eq!(config.port, 5000);
        assert_eq!(
            config.storage,
            StorageBackend::Memory {
                sequence_snapshot: None
            }
        );
        assert_eq!(config.storage_timeout, Duration::from_millis(2000));
        assert_eq!(config.daily_reset_at, NaiveTime::MIN);
        assert_eq!(config.cors_origins, CorsOrigins::Any);
        assert!(config.menu_seed_path.is_none());
    }

    #[test]
    fn memory_backend_takes_a_snapshot_path() {
        let config = config(&[
            ("STORAGE_BACKEND", "memory"),
            ("SEQUENCE_SNAPSHOT_PATH", "/var/lib/restaurant/sequence"),
        ])
        .unwrap();

        assert_eq!(
            config.storage,
            StorageBackend::Memory {
                sequence_snapshot: Some(PathBuf::from("/var/lib/restaurant/sequence"))
            }
        );
    }

    #[test]
    fn postgres_requires_database_url() {
        assert!(config(&[]).is_err());

        let config = config(&[("DATABASE_URL", "postgres://localhost/restaurant")]).unwrap();
        assert!(matches!(config.storage, StorageBackend::Postgres { .. }));
    }

    #[test]
    fn parses_reset_time_and_origins() {
        let config = config(&[
            ("STORAGE_BACKEND", "memory"),
            ("DAILY_RESET_AT", "23:59"),
            ("CORS_ALLOWED_ORIGINS", "http://localhost:3000, https://bistro.example"),
        ])
        .unwrap();

        assert_eq!(
            config.daily_reset_at,
            NaiveTime::from_hms_opt(23, 59, 0).unwrap()
        );
        assert_eq!(
            config.cors_origins,
            CorsOrigins::List(vec![
                "http://localhost:3000".into(),
                "https://bistro.example".into()
            ])
        );
    }

    #[test]
    fn rejects_malformed_values() {
        for vars in [
            vec![("STORAGE_BACKEND", "memory"), ("DAILY_RESET_AT", "midnight")],
            vec![("STORAGE_BACKEND", "memory"), ("PORT", "http")],
            vec![("STORAGE_BACKEND", "sqlite")],
            vec![("STORAGE_BACKEND", "memory"), ("STORAGE_TIMEOUT_MS", "0")],
            vec![("STORAGE_BACKEND", "memory"), ("RUN_MIGRATIONS", "yes")],
        ] {
            assert!(config(&vars).is_err(), "{vars:?}");
        }
    }
}
