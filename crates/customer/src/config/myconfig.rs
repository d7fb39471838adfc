use anyhow::Result;
use shared::config::{EnvSource, RedisConfig};

#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub run_migrations: bool,
    pub port: u16,
    pub db_max_conn: u32,
    pub db_min_conn: u32,
    pub cache_enabled: bool,
    pub redis: RedisConfig,
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
            cache_enabled: env.flag("CACHE_ENABLED", true)?,
            redis: RedisConfig::from_source(env)?,
            otel_endpoint: env.or_default("OTEL_ENDPOINT", "http://otel-collector:4317"),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cache_is_on_by_default() {
        let env = EnvSource::from_pairs([
            ("DATABASE_URL", "postgres://localhost/customers"),
            ("PORT", "8080"),
            ("REDIS_HOST", "cache"),
        ]);
        let config = Config::from_source(&env).unwrap();

        assert!(config.cache_enabled);
        assert_eq!(config.redis.host, "cache");
        assert_eq!(config.redis.port, 6379);
        assert_eq!(config.redis.password, None);
    }

    #[test]
    fn cache_can_be_disabled() {
        let env = EnvSource::from_pairs([
            ("DATABASE_URL", "postgres://localhost/customers"),
            ("PORT", "8080"),
            ("CACHE_ENABLED", "false"),
        ]);
        assert!(!Config::from_source(&env).unwrap().cache_enabled);
    }

    #[test]
    fn port_is_required() {
        let env = EnvSource::from_pairs([("DATABASE_URL", "postgres://localhost/customers")]);
        assert_eq!(
            Config::from_source(&env).unwrap_err().to_string(),
            "Missing environment variable: PORT"
        );
    }
}
