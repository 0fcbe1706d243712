use async_trait::async_trait;

use crate::modules::catalog::application::{
    ports::incoming::use_cases::{CategoryWithCount, ListCategoriesError, ListCategoriesUseCase},
    ports::outgoing::{CategoryQuery, ProductQuery},
};

#[derive(Debug, Clone)]
pub struct ListCategoriesService<C, P>
where
    C: CategoryQuery + Send + Sync,
    P: ProductQuery + Send + Sync,
{
    categories: C,
    products: P,
}

impl<C, P> ListCategoriesService<C, P>
where
    C: CategoryQuery + Send + Sync,
    P: ProductQuery + Send + Sync,
{
    pub fn new(categories: C, products: P) -> Self {
        Self {
            categories,
            products,
        }
    }
}

#[async_trait]
impl<C, P> ListCategoriesUseCase for ListCategoriesService<C, P>
where
    C: CategoryQuery + Send + Sync,
    P: ProductQuery + Send + Sync,
{
    async fn execute(&self) -> Result<Vec<CategoryWithCount>, ListCategoriesError> {
        let categories = self.categories.list_all().await?;
        let counts = self.products.count_by_category().await?;

        Ok(categories
            .into_iter()
            .map(|category| {
                let product_count = counts.get(&category.id).copied().unwrap_or(0);
                CategoryWithCount {
                    category,
                    product_count,
                }
            })
            .collect())
    }
}
