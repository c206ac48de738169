//! Product management.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::Deserialize;
use tracing::{info, instrument};

use wighub_core::{Product, ProductId};
use wighub_store::KeyValueStore;
use wighub_store::repo::{ProductRepository, next_product_id};

use super::AdminError;
use super::samples::sample_products;

/// Editable product fields.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductInput {
    pub name: String,
    pub category: String,
    pub product_type: String,
    pub price: Decimal,
    pub stock: u32,
    #[serde(default)]
    pub description: String,
    #[serde(default = "default_active")]
    pub active: bool,
    #[serde(default)]
    pub image: Option<String>,
}

const fn default_active() -> bool {
    true
}

impl ProductInput {
    fn validate(&self) -> Result<(), AdminError> {
        if self.name.trim().is_empty() {
            return Err(AdminError::MissingField("name"));
        }
        if self.price < Decimal::ZERO {
            return Err(AdminError::NegativePrice);
        }
        Ok(())
    }

    fn into_product(self, id: ProductId) -> Product {
        Product {
            id,
            name: self.name.trim().to_owned(),
            category: self.category.trim().to_owned(),
            product_type: self.product_type.trim().to_owned(),
            price: self.price,
            stock: self.stock,
            description: self.description,
            active: self.active,
            image: self.image.filter(|url| !url.trim().is_empty()),
        }
    }
}

/// Product management service.
pub struct ProductAdminService<'a> {
    products: ProductRepository<'a>,
}

impl<'a> ProductAdminService<'a> {
    /// Create a new product management service.
    #[must_use]
    pub const fn new(store: &'a dyn KeyValueStore) -> Self {
        Self {
            products: ProductRepository::new(store),
        }
    }

    /// Every product, active or not, in stored order.
    ///
    /// # Errors
    ///
    /// Returns `AdminError::Repository` if the catalog cannot be read.
    pub fn list(&self) -> Result<Vec<Product>, AdminError> {
        Ok(self.products.load()?)
    }

    /// Add a product with the next free ID.
    ///
    /// # Errors
    ///
    /// Returns `AdminError::MissingField` / `AdminError::NegativePrice` for invalid input.
    #[instrument(skip(self, input), fields(name = %input.name))]
    pub fn create(&self, input: ProductInput) -> Result<Product, AdminError> {
        input.validate()?;

        let mut products = self.products.load()?;
        let product = input.into_product(next_product_id(&products));
        products.push(product.clone());
        self.products.save(&products)?;

        info!(product_id = %product.id, "Created product");
        Ok(product)
    }

    /// Replace the editable fields of a product.
    ///
    /// # Errors
    ///
    /// Returns `AdminError::ProductNotFound` if there is no such product.
    #[instrument(skip(self, input))]
    pub fn update(&self, id: ProductId, input: ProductInput) -> Result<Product, AdminError> {
        input.validate()?;

        let mut products = self.products.load()?;
        let slot = products
            .iter_mut()
            .find(|product| product.id == id)
            .ok_or(AdminError::ProductNotFound(id))?;
        *slot = input.into_product(id);
        let product = slot.clone();
        self.products.save(&products)?;

        info!(product_id = %id, "Updated product");
        Ok(product)
    }

    /// Show or hide a product on the storefront.
    ///
    /// # Errors
    ///
    /// Returns `AdminError::ProductNotFound` if there is no such product.
    #[instrument(skip(self))]
    pub fn set_active(&self, id: ProductId, active: bool) -> Result<Product, AdminError> {
        let mut products = self.products.load()?;
        let product = products
            .iter_mut()
            .find(|product| product.id == id)
            .ok_or(AdminError::ProductNotFound(id))?;
        product.active = active;
        let product = product.clone();
        self.products.save(&products)?;
        Ok(product)
    }

    /// Delete a product. Existing orders keep their snapshots.
    ///
    /// # Errors
    ///
    /// Returns `AdminError::ProductNotFound` if there is no such product.
    #[instrument(skip(self))]
    pub fn delete(&self, id: ProductId) -> Result<Product, AdminError> {
        let mut products = self.products.load()?;
        let position = products
            .iter()
            .position(|product| product.id == id)
            .ok_or(AdminError::ProductNotFound(id))?;
        let removed = products.remove(position);
        self.products.save(&products)?;

        info!(product_id = %id, "Deleted product");
        Ok(removed)
    }

    /// Append the sample catalog.
    ///
    /// Samples get IDs `now_millis + index`; samples whose name is already in
    /// the catalog are skipped. Returns the products added.
    ///
    /// # Errors
    ///
    /// Returns `AdminError::Repository` if the catalog cannot be read or written.
    #[instrument(skip(self))]
    pub fn load_samples(&self, now: DateTime<Utc>) -> Result<Vec<Product>, AdminError> {
        let mut products = self.products.load()?;
        let base = now.timestamp_millis();

        let added: Vec<Product> = sample_products()
            .into_iter()
            .zip(0_i64..)
            .filter(|(sample, _)| {
                !products
                    .iter()
                    .any(|product| product.name.eq_ignore_ascii_case(&sample.name))
            })
            .map(|(sample, index)| sample.into_product(ProductId::new(base + index)))
            .collect();

        products.extend(added.iter().cloned());
        self.products.save(&products)?;

        info!(count = added.len(), "Loaded sample products");
        Ok(added)
    }
}
