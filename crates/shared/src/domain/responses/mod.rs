mod api;

pub use self::api::{ApiResponse, Empty, format_elapsed};
