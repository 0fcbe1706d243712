use std::sync::Arc;

use crate::modules::catalog::application::domain::entities::{Category, EntityId};
use crate::modules::catalog::application::ports::outgoing::{CatalogQueryError, CategoryQuery};

/// Turns a loosely typed "id or slug" value into a category.
#[derive(Clone)]
pub struct CategoryResolver {
    categories: Arc<dyn CategoryQuery + Send + Sync>,
}

impl CategoryResolver {
    pub fn new(categories: Arc<dyn CategoryQuery + Send + Sync>) -> Self {
        Self { categories }
    }

    /// Identifier lookup first, then slug lookup. Empty input and malformed
    /// identifiers resolve to `None`; only store failures are errors.
    pub async fn resolve(&self, raw: Option<&str>) -> Result<Option<Category>, CatalogQueryError> {
        let raw = match raw.map(str::trim) {
            Some(r) if !r.is_empty() => r,
            _ => return Ok(None),
        };

        if let Some(id) = EntityId::parse(raw) {
            if let Some(category) = self.categories.find_by_id(id).await? {
                return Ok(Some(category));
            }
        }

        self.categories.find_by_slug(raw).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests::support::catalog_test_fixtures::category;
    use crate::tests::support::in_memory_catalog::InMemoryCatalog;

    fn resolver(catalog: &InMemoryCatalog) -> CategoryResolver {
        CategoryResolver::new(Arc::new(catalog.clone()))
    }

    #[tokio::test]
    async fn resolves_by_identifier() {
        let seafood = category("Seafood", "seafood");
        let catalog = InMemoryCatalog::new().with_categories([seafood.clone()]);

        let found = resolver(&catalog)
            .resolve(Some(&seafood.id.to_string()))
            .await
            .unwrap();

        assert_eq!(found, Some(seafood));
        assert_eq!(catalog.calls(), vec!["categories.find_by_id"]);
    }

    #[tokio::test]
    async fn falls_back_to_slug_for_non_identifier_input() {
        let spices = category("Spices", "spices");
        let catalog = InMemoryCatalog::new().with_categories([spices.clone()]);

        let found = resolver(&catalog).resolve(Some(" spices ")).await.unwrap();

        assert_eq!(found, Some(spices));
        assert_eq!(catalog.calls(), vec!["categories.find_by_slug"]);
    }

    #[tokio::test]
    async fn unknown_identifier_still_tries_slug() {
        let catalog = InMemoryCatalog::new().with_categories([category("Art", "art")]);
        let unknown = EntityId::generate().to_string();

        let found = resolver(&catalog).resolve(Some(&unknown)).await.unwrap();

        assert_eq!(found, None);
        assert_eq!(
            catalog.calls(),
            vec!["categories.find_by_id", "categories.find_by_slug"]
        );
    }

    #[tokio::test]
    async fn empty_garbage_and_unknown_slug_are_absent() {
        let catalog = InMemoryCatalog::new().with_categories([category("Art", "art")]);
        let resolver = resolver(&catalog);

        assert_eq!(resolver.resolve(None).await.unwrap(), None);
        assert_eq!(resolver.resolve(Some("")).await.unwrap(), None);
        assert_eq!(resolver.resolve(Some("   ")).await.unwrap(), None);
        assert_eq!(resolver.resolve(Some("not-an-id!!")).await.unwrap(), None);
        assert_eq!(resolver.resolve(Some("pottery")).await.unwrap(), None);

        // blank input never reaches the store
        assert_eq!(catalog.call_count("categories.find_by_id"), 0);
    }

    #[tokio::test]
    async fn store_failure_is_propagated() {
        let catalog = InMemoryCatalog::new().failing("connection reset");

        let result = resolver(&catalog).resolve(Some("seafood")).await;

        assert_eq!(
            result,
            Err(CatalogQueryError::DatabaseError("connection reset".to_string()))
        );
    }
}
