use anyhow::Result;
use shared::config::EnvSource;

#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub run_migrations: bool,
    pub port: u16,
    pub db_max_conn: u32,
    pub db_min_conn: u32,
    pub otel_endpoint: String,
}

impl Config {
    pub fn init() -> Result<Self> {
        Self::from_source(&EnvSource::from_env())
    }

    pub fn from_source(env: &EnvSource) -> Result<Self> {
        Ok(Self {
            database_url: env.required("DATABASE_URL")?,
            run_migrations: env.flag("RUN_MIGRATIONS", true)?,
            port: env.parse_required("PORT")?,
            db_max_conn: env.parse_or("DB_MAX_CONNECTION", 5)?,
            db_min_conn: env.parse_or("DB_MIN_CONNECTION", 1)?,
            otel_endpoint: env.or_default("OTEL_ENDPOINT", "http://otel-collector:4317"),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_pool_bounds() {
        let env = EnvSource::from_pairs([
            ("DATABASE_URL", "postgres://localhost/products"),
            ("PORT", "8081"),
            ("DB_MAX_CONNECTION", "20"),
            ("RUN_MIGRATIONS", "0"),
        ]);
        let config = Config::from_source(&env).unwrap();

        assert_eq!(config.port, 8081);
        assert_eq!(config.db_max_conn, 20);
        assert_eq!(config.db_min_conn, 1);
        assert!(!config.run_migrations);
    }

    #[test]
    fn rejects_non_numeric_port() {
        let env = EnvSource::from_pairs([
            ("DATABASE_URL", "postgres://localhost/products"),
            ("PORT", "http"),
        ]);
        assert!(Config::from_source(&env).is_err());
    }
}
