//! Content-based filtering.
//!
//! Every movie becomes a TF-IDF weighted bag of descriptive features (its
//! genres and its release decade), normalised to unit length. A candidate's
//! score is the sum of its cosine similarities to the three favourites.

use std::{collections::HashMap, sync::Arc};

use tracing::instrument;

use crate::{data::Catalog, error::AppResult, models::Movie};

use super::{top_titles, validate_request, Recommender};

/// Sparse unit vector as (feature index, weight), sorted by feature index
type FeatureVector = Vec<(usize, f32)>;

pub struct ContentRecommender {
    catalog: Arc<Catalog>,
    vectors: Vec<FeatureVector>,
}

impl ContentRecommender {
    pub fn new(catalog: Arc<Catalog>) -> Self {
        let vectors = build_vectors(catalog.movies());
        tracing::info!(movies = vectors.len(), "Built content feature vectors");
        Self { catalog, vectors }
    }
}

impl Recommender for ContentRecommender {
    fn name(&self) -> &'static str {
        "content_based"
    }

    #[instrument(skip(self), fields(model = self.name()))]
    fn recommend(&self, movie_list: &[String], top_n: usize) -> AppResult<Vec<String>> {
        validate_request(movie_list, top_n)?;
        let liked = self.catalog.resolve_titles(movie_list)?;

        let scored: Vec<(usize, f32)> = self
            .vectors
            .iter()
            .enumerate()
            .filter(|(idx, _)| !liked.contains(idx))
            .map(|(idx, candidate)| {
                let score = liked
                    .iter()
                    .map(|&l| dot(&self.vectors[l], candidate))
                    .sum::<f32>();
                (idx, score)
            })
            .filter(|(_, score)| *score > 0.0)
            .collect();

        tracing::debug!(candidates = scored.len(), "Scored content candidates");

        Ok(top_titles(&self.catalog, scored, &liked, top_n))
    }
}

fn features(movie: &Movie) -> Vec<String> {
    let mut features: Vec<String> = movie
        .genres
        .iter()
        .map(|g| format!("genre:{}", g.to_lowercase()))
        .collect();

    if let Some(decade) = movie.decade() {
        features.push(format!("decade:{}", decade));
    }

    features.sort();
    features.dedup();
    features
}

fn build_vectors(movies: &[Movie]) -> Vec<FeatureVector> {
    let mut vocabulary: HashMap<String, usize> = HashMap::new();
    let mut document_frequency: Vec<usize> = Vec::new();

    let per_movie: Vec<Vec<usize>> = movies
        .iter()
        .map(|movie| {
            features(movie)
                .into_iter()
                .map(|f| {
                    let next = vocabulary.len();
                    let id = *vocabulary.entry(f).or_insert(next);
                    if id == document_frequency.len() {
                        document_frequency.push(0);
                    }
                    document_frequency[id] += 1;
                    id
                })
                .collect()
        })
        .collect();

    let n = movies.len().max(1) as f32;
    let idf: Vec<f32> = document_frequency
        .iter()
        .map(|&df| (n / df as f32).ln() + 1.0)
        .collect();

    per_movie
        .into_iter()
        .map(|ids| {
            let mut vector: FeatureVector = ids.into_iter().map(|id| (id, idf[id])).collect();
            vector.sort_by_key(|(id, _)| *id);
            let norm = vector.iter().map(|(_, w)| w * w).sum::<f32>().sqrt();
            if norm > 0.0 {
                for (_, w) in vector.iter_mut() {
                    *w /= norm;
                }
            }
            vector
        })
        .collect()
}

/// Dot product of two sorted sparse vectors
fn dot(a: &[(usize, f32)], b: &[(usize, f32)]) -> f32 {
    let (mut i, mut j, mut sum) = (0, 0, 0.0);
    while i < a.len() && j < b.len() {
        match a[i].0.cmp(&b[j].0) {
            std::cmp::Ordering::Less => i += 1,
            std::cmp::Ordering::Greater => j += 1,
            std::cmp::Ordering::Equal => {
                sum += a[i].1 * b[j].1;
                i += 1;
                j += 1;
            }
        }
    }
    sum
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AppError;

    fn catalog() -> Arc<Catalog> {
        let movies = vec![
            Movie::from_columns(1, "Toy Story (1995)".to_string(), "Adventure|Animation|Children|Comedy"),
            Movie::from_columns(2, "Heat (1995)".to_string(), "Action|Crime|Thriller"),
            Movie::from_columns(3, "Casino (1995)".to_string(), "Crime|Drama"),
            Movie::from_columns(4, "Aladdin (1992)".to_string(), "Adventure|Animation|Children|Comedy|Musical"),
            Movie::from_columns(5, "Lion King, The (1994)".to_string(), "Adventure|Animation|Children|Drama|Musical"),
            Movie::from_columns(6, "Godfather, The (1972)".to_string(), "Crime|Drama"),
            Movie::from_columns(7, "Alien (1979)".to_string(), "Horror|Sci-Fi"),
            Movie::from_columns(8, "Pocahontas (1995)".to_string(), "Animation|Children|Drama|Musical|Romance"),
        ];
        Arc::new(Catalog::new(movies, Vec::new()))
    }

    fn favourites(titles: [&str; 3]) -> Vec<String> {
        titles.iter().map(|t| t.to_string()).collect()
    }

    #[test]
    fn test_vectors_are_unit_length() {
        let recommender = ContentRecommender::new(catalog());
        for vector in &recommender.vectors {
            let norm = dot(vector, vector);
            assert!((norm - 1.0).abs() < 1e-5);
        }
    }

    #[test]
    fn test_recommends_similar_genres_first() {
        let recommender = ContentRecommender::new(catalog());
        let result = recommender
            .recommend(
                &favourites(["Toy Story (1995)", "Aladdin (1992)", "Heat (1995)"]),
                3,
            )
            .unwrap();

        assert_eq!(result.len(), 3);
        assert_eq!(result[0], "Lion King, The (1994)");
        assert!(!result.contains(&"Toy Story (1995)".to_string()));
        assert!(!result.contains(&"Aladdin (1992)".to_string()));
        assert!(!result.contains(&"Heat (1995)".to_string()));
    }

    #[test]
    fn test_zero_similarity_excluded() {
        let recommender = ContentRecommender::new(catalog());
        let result = recommender
            .recommend(
                &favourites(["Toy Story (1995)", "Aladdin (1992)", "Lion King, The (1994)"]),
                10,
            )
            .unwrap();

        assert!(!result.contains(&"Alien (1979)".to_string()));
        assert!(result.len() <= 5);
    }

    #[test]
    fn test_unknown_title_is_not_found() {
        let recommender = ContentRecommender::new(catalog());
        let result = recommender.recommend(
            &favourites(["Toy Story (1995)", "Missing (2020)", "Heat (1995)"]),
            10,
        );
        assert!(matches!(result, Err(AppError::NotFound(_))));
    }

    #[test]
    fn test_wrong_count_is_invalid() {
        let recommender = ContentRecommender::new(catalog());
        let result = recommender.recommend(&["Heat (1995)".to_string()], 10);
        assert!(matches!(result, Err(AppError::InvalidInput(_))));
    }

    #[test]
    fn test_dot_of_disjoint_vectors_is_zero() {
        assert_eq!(dot(&[(0, 1.0)], &[(1, 1.0)]), 0.0);
    }
}
