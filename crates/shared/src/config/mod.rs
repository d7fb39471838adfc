mod database;
mod env;
mod redis;

pub use self::database::{ConnectionManager, ConnectionPool};
pub use self::env::EnvSource;
pub use self::redis::{RedisClient, RedisConfig};
