mod cache;

pub use self::cache::{CacheTrait, DynCache};
