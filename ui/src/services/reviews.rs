use payloads::requests::{self, validate_review};
use payloads::{APIClient, Review, ReviewId, SpaceId};

use super::Notify;

fn check_review(
    notify: &impl Notify,
    rating: i16,
    comment: Option<&str>,
) -> bool {
    match validate_review(rating, comment).error_message() {
        Some(message) => {
            notify.error(message);
            false
        }
        None => true,
    }
}

/// Blank comments are sent as no comment at all.
fn normalize_comment(comment: Option<String>) -> Option<String> {
    comment
        .map(|c| c.trim().to_string())
        .filter(|c| !c.is_empty())
}

pub async fn create_review(
    client: &APIClient,
    notify: &impl Notify,
    space_id: SpaceId,
    rating: i16,
    comment: Option<String>,
) -> Option<Review> {
    let comment = normalize_comment(comment);
    if !check_review(notify, rating, comment.as_deref()) {
        return None;
    }

    let details = requests::CreateReview {
        space_id,
        rating,
        comment,
    };
    match client.create_review(&details).await {
        Ok(review) => {
            notify.success("Review published");
            Some(review)
        }
        Err(e) => {
            tracing::warn!(%space_id, "review not created: {e}");
            notify.error(&format!("Could not publish review: {e}"));
            None
        }
    }
}

pub async fn update_review(
    client: &APIClient,
    notify: &impl Notify,
    review_id: ReviewId,
    rating: i16,
    comment: Option<String>,
) -> Option<Review> {
    let comment = normalize_comment(comment);
    if !check_review(notify, rating, comment.as_deref()) {
        return None;
    }

    let details = requests::UpdateReview { rating, comment };
    match client.update_review(&review_id, &details).await {
        Ok(review) => {
            notify.success("Review updated");
            Some(review)
        }
        Err(e) => {
            tracing::warn!(%review_id, "review not updated: {e}");
            notify.error(&format!("Could not update review: {e}"));
            None
        }
    }
}

/// Returns whether the review is gone.
pub async fn delete_review(
    client: &APIClient,
    notify: &impl Notify,
    review_id: ReviewId,
) -> bool {
    match client.delete_review(&review_id).await {
        Ok(()) => {
            notify.success("Review deleted");
            true
        }
        Err(e) => {
            tracing::warn!(%review_id, "review not deleted: {e}");
            notify.error(&format!("Could not delete review: {e}"));
            false
        }
    }
}
