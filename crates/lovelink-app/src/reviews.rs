use chrono::Utc;

use lovelink_db::keys;
use lovelink_types::models::Review;

use crate::{App, AppError, Result};

impl App {
    /// File a review of `target`. Ratings live on a 1–5 scale; anything else
    /// is declined. New reviews go to the front of the feed.
    pub fn submit_review(&self, target: &str, rating: u8, comment: &str) -> Result<Review> {
        if !(1..=5).contains(&rating) {
            return Err(AppError::InvalidRating);
        }

        let review = Review {
            target: target.to_string(),
            rating,
            comment: comment.to_string(),
            submitted_at: Utc::now(),
        };
        let mut reviews: Vec<Review> = self.store.get(keys::REVIEWS, Vec::new())?;
        reviews.insert(0, review.clone());
        self.store.set(keys::REVIEWS, &reviews)?;

        Ok(review)
    }

    /// Newest reviews first, capped at `limit`.
    pub fn recent_reviews(&self, limit: usize) -> Result<Vec<Review>> {
        let mut reviews: Vec<Review> = self.store.get(keys::REVIEWS, Vec::new())?;
        reviews.truncate(limit);
        Ok(reviews)
    }
}
