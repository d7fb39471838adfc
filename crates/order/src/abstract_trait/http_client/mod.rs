mod customer;
mod product;

pub use self::customer::{CustomerClientTrait, DynCustomerClient};
pub use self::product::{DynProductClient, ProductClientTrait};
