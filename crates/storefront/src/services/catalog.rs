//! Catalog service: product listing, filtering and lookups.

use serde::Deserialize;
use tracing::instrument;

use wighub_core::{Product, ProductId};
use wighub_store::repo::{ProductRepository, or_empty};
use wighub_store::{KeyValueStore, RepositoryError};

/// The catalog as stored, plus the subset shown to customers.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    /// Every product, in stored order
    pub all: Vec<Product>,
    /// Products whose `active` flag is not false
    pub active: Vec<Product>,
}

/// Criteria for narrowing a product list.
///
/// All set criteria must match. Blank strings count as unset.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductFilter {
    /// Case-insensitive substring of name, description or category
    pub search_term: Option<String>,
    /// Exact category
    pub category: Option<String>,
    /// Exact product type
    pub product_type: Option<String>,
}

impl ProductFilter {
    /// Whether `product` satisfies every set criterion.
    #[must_use]
    pub fn matches(&self, product: &Product) -> bool {
        let search_ok = non_blank(self.search_term.as_deref()).is_none_or(|term| {
            let term = term.to_lowercase();
            [&product.name, &product.description, &product.category]
                .iter()
                .any(|field| field.to_lowercase().contains(&term))
        });
        let category_ok =
            non_blank(self.category.as_deref()).is_none_or(|category| product.category == category);
        let type_ok = non_blank(self.product_type.as_deref())
            .is_none_or(|product_type| product.product_type == product_type);

        search_ok && category_ok && type_ok
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|value| !value.is_empty())
}

/// Narrow `products` to those matching `filter`, preserving order.
#[must_use]
pub fn filter(products: &[Product], filter: &ProductFilter) -> Vec<Product> {
    products
        .iter()
        .filter(|product| filter.matches(product))
        .cloned()
        .collect()
}

/// Catalog service.
pub struct CatalogService<'a> {
    products: ProductRepository<'a>,
}

impl<'a> CatalogService<'a> {
    /// Create a new catalog service.
    #[must_use]
    pub const fn new(store: &'a dyn KeyValueStore) -> Self {
        Self {
            products: ProductRepository::new(store),
        }
    }

    /// Load the catalog and its active view.
    ///
    /// An unreadable catalog shows as empty; the problem is logged.
    #[must_use]
    #[instrument(skip(self))]
    pub fn load_products(&self) -> Catalog {
        let all = or_empty(self.products.load(), "products");
        let active = all.iter().filter(|product| product.active).cloned().collect();
        Catalog { all, active }
    }

    /// Replace the stored catalog. IDs are taken as given.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Store` if the write fails.
    pub fn save_products(&self, products: &[Product]) -> Result<(), RepositoryError> {
        self.products.save(products)
    }

    /// Look up a single product, active or not.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError` if the catalog cannot be read.
    pub fn product(&self, id: ProductId) -> Result<Option<Product>, RepositoryError> {
        self.products.get(id)
    }

    /// Active products matching `criteria`.
    #[must_use]
    pub fn search(&self, criteria: &ProductFilter) -> Vec<Product> {
        filter(&self.load_products().active, criteria)
    }

    /// Distinct categories of active products, in first-seen order.
    #[must_use]
    pub fn categories(&self) -> Vec<String> {
        distinct(self.load_products().active.iter().map(|p| p.category.as_str()))
    }

    /// Distinct product types of active products, in first-seen order.
    #[must_use]
    pub fn product_types(&self) -> Vec<String> {
        distinct(self.load_products().active.iter().map(|p| p.product_type.as_str()))
    }
}

fn distinct<'s>(values: impl Iterator<Item = &'s str>) -> Vec<String> {
    let mut seen: Vec<String> = Vec::new();
    for value in values {
        if !value.is_empty() && !seen.iter().any(|existing| existing == value) {
            seen.push(value.to_owned());
        }
    }
    seen
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use rust_decimal::Decimal;
    use wighub_store::{MemoryStore, keys};

    use super::*;

    fn wig(id: i64, name: &str, category: &str, product_type: &str) -> Product {
        Product {
            id: ProductId::new(id),
            name: name.to_owned(),
            category: category.to_owned(),
            product_type: product_type.to_owned(),
            price: Decimal::new(9999, 2),
            stock: 10,
            description: format!("{name} in natural black"),
            active: true,
            image: None,
        }
    }

    fn sample() -> Vec<Product> {
        vec![
            wig(1, "Brazilian Body Wave", "Human Hair", "Lace Front"),
            wig(2, "Silky Straight Bob", "Synthetic", "Full Lace"),
            wig(3, "Deep Wave Closure", "Human Hair", "Closure"),
        ]
    }

    #[test]
    fn test_filter_search_is_case_insensitive() {
        let criteria = ProductFilter {
            search_term: Some("WAVE".to_owned()),
            ..ProductFilter::default()
        };
        let ids: Vec<_> = filter(&sample(), &criteria).iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![ProductId::new(1), ProductId::new(3)]);
    }

    #[test]
    fn test_filter_search_matches_description_and_category() {
        let by_description = ProductFilter {
            search_term: Some("natural".to_owned()),
            ..ProductFilter::default()
        };
        assert_eq!(filter(&sample(), &by_description).len(), 3);

        let by_category = ProductFilter {
            search_term: Some("synthetic".to_owned()),
            ..ProductFilter::default()
        };
        assert_eq!(filter(&sample(), &by_category)[0].id, ProductId::new(2));
    }

    #[test]
    fn test_filter_criteria_combine() {
        let criteria = ProductFilter {
            search_term: Some("wave".to_owned()),
            category: Some("Human Hair".to_owned()),
            product_type: Some("Closure".to_owned()),
        };
        let result = filter(&sample(), &criteria);
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].id, ProductId::new(3));
    }

    #[test]
    fn test_filter_category_is_exact() {
        let criteria = ProductFilter {
            category: Some("human hair".to_owned()),
            ..ProductFilter::default()
        };
        assert!(filter(&sample(), &criteria).is_empty());
    }

    #[test]
    fn test_blank_filter_keeps_everything() {
        let criteria = ProductFilter {
            search_term: Some("  ".to_owned()),
            category: Some(String::new()),
            product_type: None,
        };
        assert_eq!(filter(&sample(), &criteria), sample());
    }

    #[test]
    fn test_load_products_splits_active_view() {
        let store = MemoryStore::new();
        let mut products = sample();
        products[1].active = false;
        let service = CatalogService::new(&store);
        service.save_products(&products).unwrap();

        let catalog = service.load_products();
        assert_eq!(catalog.all.len(), 3);
        assert_eq!(catalog.active.len(), 2);
        assert!(catalog.active.iter().all(|p| p.id != ProductId::new(2)));
    }

    #[test]
    fn test_missing_active_flag_counts_as_active() {
        let store = MemoryStore::new();
        store
            .set(
                keys::PRODUCTS,
                r#"[{"id":5,"name":"Afro Puff","category":"Synthetic","productType":"Clip-in","price":"19.99","stock":3}]"#,
            )
            .unwrap();

        let catalog = CatalogService::new(&store).load_products();
        assert_eq!(catalog.active.len(), 1);
        assert_eq!(catalog.active[0].name, "Afro Puff");
    }

    #[test]
    fn test_corrupt_catalog_loads_empty() {
        let store = MemoryStore::new();
        store.set(keys::PRODUCTS, "not json").unwrap();

        let catalog = CatalogService::new(&store).load_products();
        assert_eq!(catalog, Catalog::default());
    }

    #[test]
    fn test_save_of_loaded_catalog_is_idempotent() {
        let store = MemoryStore::new();
        let service = CatalogService::new(&store);
        service.save_products(&sample()).unwrap();

        let before = store.get(keys::PRODUCTS).unwrap();
        service.save_products(&service.load_products().all).unwrap();
        assert_eq!(store.get(keys::PRODUCTS).unwrap(), before);
    }

    #[test]
    fn test_categories_and_types_are_distinct_in_order() {
        let store = MemoryStore::new();
        let service = CatalogService::new(&store);
        service.save_products(&sample()).unwrap();

        assert_eq!(service.categories(), vec!["Human Hair", "Synthetic"]);
        assert_eq!(
            service.product_types(),
            vec!["Lace Front", "Full Lace", "Closure"]
        );
    }

    #[test]
    fn test_search_excludes_inactive() {
        let store = MemoryStore::new();
        let mut products = sample();
        products[0].active = false;
        let service = CatalogService::new(&store);
        service.save_products(&products).unwrap();

        let criteria = ProductFilter {
            search_term: Some("wave".to_owned()),
            ..ProductFilter::default()
        };
        let result = service.search(&criteria);
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].id, ProductId::new(3));
    }

    #[test]
    fn test_product_lookup() {
        let store = MemoryStore::new();
        let service = CatalogService::new(&store);
        service.save_products(&sample()).unwrap();

        assert_eq!(service.product(ProductId::new(2)).unwrap().unwrap().name, "Silky Straight Bob");
        assert!(service.product(ProductId::new(9)).unwrap().is_none());
    }
}
