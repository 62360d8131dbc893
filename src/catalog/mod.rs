use std::path::Path;

use anyhow::Context;
use chrono::{DateTime, Utc};
use serde::{de::DeserializeOwned, Serialize};
use tracing::info;

use crate::error::{AppError, AppResult};
use crate::models::{Brand, BrandFilters, Product, ProductNameFilter, User};

#[cfg(test)]
pub(crate) mod fixtures;

pub const NO_PRODUCTS_FOUND: &str = "No products found";

/// What `GET /brands` answers with: the brand list, or the single product a
/// `product_name` filter resolved to.
#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum BrandListing<'a> {
    Brands(&'a [Brand]),
    Product(&'a Product),
}

// ── Catalog: immutable in-memory store ───────────────────────────────────────

/// Brands, products and users, loaded once at startup and read-only afterwards.
///
/// Lookups are linear scans in file order, so duplicate ids or emails resolve
/// to the first entry.
#[derive(Debug)]
pub struct Catalog {
    brands: Vec<Brand>,
    products: Vec<Product>,
    users: Vec<User>,
    loaded_at: DateTime<Utc>,
}

impl Catalog {
    pub fn new(brands: Vec<Brand>, products: Vec<Product>, users: Vec<User>) -> Self {
        Self {
            brands,
            products,
            users,
            loaded_at: Utc::now(),
        }
    }

    /// Reads `brands.json`, `products.json` and `users.json` from `dir`
    /// concurrently. Any missing or malformed file fails the whole load.
    pub async fn load(dir: &Path) -> anyhow::Result<Self> {
        let brands_path = dir.join("brands.json");
        let products_path = dir.join("products.json");
        let users_path = dir.join("users.json");

        let (brands, products, users) = tokio::try_join!(
            read_collection::<Brand>(&brands_path),
            read_collection::<Product>(&products_path),
            read_collection::<User>(&users_path),
        )?;

        info!(
            brands = brands.len(),
            products = products.len(),
            users = users.len(),
            dir = %dir.display(),
            "Catalog loaded"
        );

        Ok(Self::new(brands, products, users))
    }

    /// Unfiltered brand list, or the first product named exactly
    /// `product_name` when that filter is present. A repeated
    /// `product_name` matches nothing.
    pub fn find_brands(&self, filters: &BrandFilters) -> AppResult<BrandListing<'_>> {
        match filters.product_name() {
            ProductNameFilter::None => Ok(BrandListing::Brands(&self.brands)),
            ProductNameFilter::Exact(name) => self
                .products
                .iter()
                .find(|product| product.name == name)
                .map(BrandListing::Product)
                .ok_or_else(|| AppError::NotFound(NO_PRODUCTS_FOUND.to_string())),
            ProductNameFilter::Repeated => Err(AppError::NotFound(NO_PRODUCTS_FOUND.to_string())),
        }
    }

    pub fn find_products_by_brand(&self, brand_id: &str) -> AppResult<Vec<&Product>> {
        let products: Vec<&Product> = self
            .products
            .iter()
            .filter(|product| product.belongs_to(brand_id))
            .collect();

        if products.is_empty() {
            return Err(AppError::NotFound(NO_PRODUCTS_FOUND.to_string()));
        }
        Ok(products)
    }

    pub fn list_products(&self) -> &[Product] {
        &self.products
    }

    pub fn login(&self, email: &str, password: &str) -> Option<&User> {
        self.users
            .iter()
            .find(|user| user.has_credentials(email, password))
    }

    /// (brands, products, users)
    pub fn sizes(&self) -> (usize, usize, usize) {
        (self.brands.len(), self.products.len(), self.users.len())
    }

    pub fn loaded_at(&self) -> DateTime<Utc> {
        self.loaded_at
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::new(Vec::new(), Vec::new(), Vec::new())
    }
}

async fn read_collection<T: DeserializeOwned>(path: &Path) -> anyhow::Result<Vec<T>> {
    let raw = tokio::fs::read_to_string(path)
        .await
        .with_context(|| format!("failed to read {}", path.display()))?;
    serde_json::from_str(&raw).with_context(|| format!("failed to parse {}", path.display()))
}
