use crate::models::Product;

static DEFAULT_PRODUCTS: &[(i32, &str)] = &[(1, "IPhone"), (2, "MacBook"), (3, "Headphones")];

/// Records every fresh registry starts with, in insertion order.
pub fn default_products() -> Vec<Product> {
    DEFAULT_PRODUCTS
        .iter()
        .map(|&(id, name)| Product::new(id, name))
        .collect()
}
