//! Category service: read access to the category index.

use tracing::{info, instrument};

use crate::context::RequestContext;
use crate::domain::models::category::Category;
use crate::error::LedgerResult;
use crate::storage::{CategoryStorage, Connection};

/// Service exposing the category index
#[derive(Clone)]
pub struct CategoryService<C: Connection> {
    category_repository: C::CategoryRepository,
}

impl<C: Connection> CategoryService<C> {
    pub fn new(connection: &C) -> Self {
        let category_repository = connection.create_category_repository();
        Self {
            category_repository,
        }
    }

    /// All categories, ordered by display id
    #[instrument(skip(self, ctx))]
    pub async fn list_categories(&self, ctx: &RequestContext) -> LedgerResult<Vec<Category>> {
        let categories = ctx.run(self.category_repository.list_categories()).await?;
        info!(count = categories.len(), "Listed categories");
        Ok(categories)
    }
}
