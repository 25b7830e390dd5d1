//! Item-based collaborative filtering.
//!
//! Ratings are centred on each user's mean so that generous and harsh raters
//! are comparable. Two movies are similar when the same users rate them on
//! the same side of their own average (adjusted cosine similarity).

use std::{collections::HashMap, sync::Arc};

use tracing::instrument;

use crate::{
    data::Catalog,
    error::{AppError, AppResult},
    models::UserId,
};

use super::{top_titles, validate_request, Recommender};

pub struct CollabRecommender {
    catalog: Arc<Catalog>,
    /// Per catalog position: (user slot, centred rating)
    item_ratings: Vec<Vec<(usize, f32)>>,
    /// Per user slot: (catalog position, centred rating)
    user_ratings: Vec<Vec<(usize, f32)>>,
    /// Per catalog position: L2 norm of the centred rating vector
    item_norms: Vec<f32>,
}

impl CollabRecommender {
    pub fn new(catalog: Arc<Catalog>) -> Self {
        let mut user_slots: HashMap<UserId, usize> = HashMap::new();
        let mut raw: Vec<Vec<(usize, f32)>> = Vec::new();
        let mut skipped = 0usize;

        for rating in catalog.ratings() {
            let Some(idx) = catalog.index_of_id(rating.movie_id) else {
                skipped += 1;
                continue;
            };
            let next = user_slots.len();
            let slot = *user_slots.entry(rating.user_id).or_insert(next);
            if slot == raw.len() {
                raw.push(Vec::new());
            }
            raw[slot].push((idx, rating.rating));
        }

        let mut item_ratings = vec![Vec::new(); catalog.len()];
        let user_ratings: Vec<Vec<(usize, f32)>> = raw
            .into_iter()
            .enumerate()
            .map(|(slot, rated)| {
                let mean = rated.iter().map(|(_, r)| r).sum::<f32>() / rated.len() as f32;
                rated
                    .into_iter()
                    .map(|(idx, r)| {
                        let centred = r - mean;
                        item_ratings[idx].push((slot, centred));
                        (idx, centred)
                    })
                    .collect()
            })
            .collect();

        let item_norms = item_ratings
            .iter()
            .map(|ratings: &Vec<(usize, f32)>| ratings.iter().map(|(_, r)| r * r).sum::<f32>().sqrt())
            .collect();

        tracing::info!(
            users = user_ratings.len(),
            rated_movies = item_ratings.iter().filter(|r| !r.is_empty()).count(),
            skipped_ratings = skipped,
            "Built collaborative rating index"
        );

        Self {
            catalog,
            item_ratings,
            user_ratings,
            item_norms,
        }
    }

    /// Adjusted cosine similarity of `liked` to every movie sharing a rater with it
    fn similarities(&self, liked: usize) -> HashMap<usize, f32> {
        let mut dots: HashMap<usize, f32> = HashMap::new();

        for &(user, liked_rating) in &self.item_ratings[liked] {
            for &(other, other_rating) in &self.user_ratings[user] {
                if other != liked {
                    *dots.entry(other).or_insert(0.0) += liked_rating * other_rating;
                }
            }
        }

        let liked_norm = self.item_norms[liked];
        dots.into_iter()
            .filter_map(|(other, dot)| {
                let denom = liked_norm * self.item_norms[other];
                (denom > 0.0).then_some((other, dot / denom))
            })
            .collect()
    }
}

impl Recommender for CollabRecommender {
    fn name(&self) -> &'static str {
        "collaborative_based"
    }

    #[instrument(skip(self), fields(model = self.name()))]
    fn recommend(&self, movie_list: &[String], top_n: usize) -> AppResult<Vec<String>> {
        validate_request(movie_list, top_n)?;
        let liked = self.catalog.resolve_titles(movie_list)?;

        if liked.iter().all(|&idx| self.item_ratings[idx].is_empty()) {
            return Err(AppError::Model(
                "None of the selected movies have been rated".to_string(),
            ));
        }

        let mut totals: HashMap<usize, f32> = HashMap::new();
        for &idx in &liked {
            for (other, similarity) in self.similarities(idx) {
                *totals.entry(other).or_insert(0.0) += similarity;
            }
        }

        let scored: Vec<(usize, f32)> = totals
            .into_iter()
            .filter(|(idx, score)| *score > 0.0 && !liked.contains(idx))
            .collect();

        tracing::debug!(candidates = scored.len(), "Scored collaborative candidates");

        Ok(top_titles(&self.catalog, scored, &liked, top_n))
    }
}
