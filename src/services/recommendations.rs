use std::{sync::Arc, time::Instant};

use crate::{
    error::{AppError, AppResult},
    recommenders::Recommender,
};

/// Generates a top-N recommendation list from three favourite titles
///
/// The model runs on the blocking thread pool; scoring every movie in the
/// catalog is CPU-bound and would otherwise stall the async executor.
pub async fn get_recommendations(
    recommender: Arc<dyn Recommender>,
    movie_list: Vec<String>,
    top_n: usize,
) -> AppResult<Vec<String>> {
    let model = recommender.name();
    let started = Instant::now();

    let result = tokio::task::spawn_blocking(move || recommender.recommend(&movie_list, top_n))
        .await
        .map_err(|e| AppError::Internal(format!("Recommender task failed: {}", e)))?;

    match &result {
        Ok(titles) => tracing::info!(
            model,
            count = titles.len(),
            elapsed_ms = started.elapsed().as_millis() as u64,
            "Recommendations generated"
        ),
        Err(e) => tracing::warn!(model, error = %e, "Recommendation failed"),
    }

    result
}
