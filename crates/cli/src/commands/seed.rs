//! Seed the store with the sample catalog.

use chrono::Utc;
use tracing::info;

use wighub_admin::services::ProductAdminService;
use wighub_store::KeyValueStore;

use super::CommandError;

/// Append the sample wigs to the catalog. Returns how many were added.
///
/// Running it again adds nothing, since samples already present are skipped.
///
/// # Errors
///
/// Returns `CommandError::Admin` if the catalog cannot be read or written.
pub fn sample_catalog(store: &dyn KeyValueStore) -> Result<usize, CommandError> {
    let added = ProductAdminService::new(store).load_samples(Utc::now())?;

    if added.is_empty() {
        info!("Sample catalog already loaded, nothing to do");
    } else {
        for product in &added {
            info!(id = %product.id, name = %product.name, stock = product.stock, "Added");
        }
        info!(count = added.len(), "Sample catalog loaded");
    }
    Ok(added.len())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use wighub_admin::services::sample_products;
    use wighub_store::MemoryStore;

    use super::*;

    #[test]
    fn test_seed_is_repeatable() {
        let store = MemoryStore::new();
        assert_eq!(sample_catalog(&store).unwrap(), sample_products().len());
        assert_eq!(sample_catalog(&store).unwrap(), 0);
    }
}
