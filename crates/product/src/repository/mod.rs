mod command;
mod query;

pub use self::command::ProductCommandRepository;
pub use self::query::ProductQueryRepository;

const COLUMNS: &str = "product_id, name, description, price, quantity, created_at, updated_at";
