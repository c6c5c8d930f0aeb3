mod product;

pub use product::{Product, UpdateProduct};
