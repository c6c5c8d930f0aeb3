use crate::error::{AppError, AppResult};
use crate::models::{Product, UpdateProduct};
use crate::seed;

/// In-memory, insertion-ordered product collection.
///
/// Every mutating method validates first and only then touches the list, so a
/// rejected call leaves the registry exactly as it was. Callers share it
/// behind an `RwLock` and hold the write guard for the whole call.
#[derive(Debug, Default)]
pub struct ProductRegistry {
    products: Vec<Product>,
}

fn not_found(id: i32) -> AppError {
    AppError::NotFound(format!("Product with ID {} not found", id))
}

fn ensure_name(name: &str) -> AppResult<()> {
    if name.trim().is_empty() {
        return Err(AppError::BadRequest(
            "Product name must not be empty".to_string(),
        ));
    }
    Ok(())
}

impl ProductRegistry {
    /// Registry pre-populated with the default catalogue.
    pub fn seeded() -> Self {
        Self {
            products: seed::default_products(),
        }
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn list(&self) -> &[Product] {
        &self.products
    }

    fn position(&self, id: i32) -> Option<usize> {
        self.products.iter().position(|p| p.id == id)
    }

    pub fn get(&self, id: i32) -> AppResult<&Product> {
        self.products
            .iter()
            .find(|p| p.id == id)
            .ok_or_else(|| not_found(id))
    }

    /// Appends `product`. `None` stands for an empty (JSON `null`) payload.
    pub fn create(&mut self, product: Option<Product>) -> AppResult<Product> {
        let product = product.ok_or_else(|| {
            AppError::BadRequest("Product data must not be empty".to_string())
        })?;

        ensure_name(&product.name)?;

        if self.position(product.id).is_some() {
            return Err(AppError::BadRequest(format!(
                "Product with ID {} already exists",
                product.id
            )));
        }

        self.products.push(product.clone());
        Ok(product)
    }

    /// Renames the product in place. The name is stored as supplied; only
    /// the blank check trims it.
    pub fn update(&mut self, id: i32, request: UpdateProduct) -> AppResult<Product> {
        let idx = self.position(id).ok_or_else(|| not_found(id))?;
        ensure_name(&request.name)?;

        let product = &mut self.products[idx];
        product.name = request.name;
        Ok(product.clone())
    }

    pub fn delete(&mut self, id: i32) -> AppResult<Product> {
        let idx = self.position(id).ok_or_else(|| not_found(id))?;
        Ok(self.products.remove(idx))
    }
}
