mod command;
mod query;

pub use self::command::CustomerCommandRepository;
pub use self::query::CustomerQueryRepository;

const COLUMNS: &str = "customer_id, name, surname, email, birthdate, created_at, updated_at";
