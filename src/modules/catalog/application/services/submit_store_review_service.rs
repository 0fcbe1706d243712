use async_trait::async_trait;
use std::sync::Arc;
use tracing::{info, warn};

use crate::modules::catalog::application::ports::{
    incoming::use_cases::{
        SubmitStoreReviewCommand, SubmitStoreReviewError, SubmitStoreReviewUseCase,
    },
    outgoing::{ReviewRepository, ReviewRepositoryError, ReviewUpsert, UpsertOutcome, UserQuery},
};
use crate::shared::clock::Clock;

#[derive(Clone)]
pub struct SubmitStoreReviewService<U, R>
where
    U: UserQuery + Send + Sync,
    R: ReviewRepository + Send + Sync,
{
    users: U,
    repository: R,
    clock: Arc<dyn Clock>,
}

impl<U, R> SubmitStoreReviewService<U, R>
where
    U: UserQuery + Send + Sync,
    R: ReviewRepository + Send + Sync,
{
    pub fn new(users: U, repository: R, clock: Arc<dyn Clock>) -> Self {
        Self {
            users,
            repository,
            clock,
        }
    }
}

#[async_trait]
impl<U, R> SubmitStoreReviewUseCase for SubmitStoreReviewService<U, R>
where
    U: UserQuery + Send + Sync,
    R: ReviewRepository + Send + Sync,
{
    async fn execute(
        &self,
        command: SubmitStoreReviewCommand,
    ) -> Result<UpsertOutcome, SubmitStoreReviewError> {
        if self
            .users
            .find_by_id(command.store_owner_id())
            .await?
            .is_none()
        {
            return Err(SubmitStoreReviewError::StoreNotFound);
        }

        let review = ReviewUpsert {
            store_owner_id: command.store_owner_id(),
            reviewer_id: command.reviewer_id(),
            rating: command.rating(),
            review_text: command.review_text().to_string(),
            submitted_at: self.clock.now(),
        };

        let outcome = match self.repository.upsert(&review).await {
            Ok(outcome) => outcome,
            Err(ReviewRepositoryError::DuplicateReview) => {
                // a concurrent submission inserted first
                warn!(
                    store_owner_id = %review.store_owner_id,
                    reviewer_id = %review.reviewer_id,
                    "Review insert lost a race, updating in place"
                );
                self.repository.update_existing(&review).await?;
                UpsertOutcome::Updated
            }
            Err(e) => return Err(e.into()),
        };

        info!(
            store_owner_id = %review.store_owner_id,
            reviewer_id = %review.reviewer_id,
            outcome = ?outcome,
            "Store review saved"
        );
        Ok(outcome)
    }
}
