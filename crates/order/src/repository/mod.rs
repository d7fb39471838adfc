pub mod memory;
pub mod order;
