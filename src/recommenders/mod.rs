use std::collections::HashSet;

use crate::{
    data::Catalog,
    error::{AppError, AppResult},
};

pub mod collaborative_based;
pub mod content_based;

pub use collaborative_based::CollabRecommender;
pub use content_based::ContentRecommender;

/// Number of favourite movies a recommendation request is built from
pub const FAVOURITES_COUNT: usize = 3;

/// A ranking model turning three favourite titles into a list of suggestions
///
/// Implementations are CPU-bound and synchronous; callers on the async runtime
/// should run them through `spawn_blocking`.
#[cfg_attr(test, mockall::automock)]
pub trait Recommender: Send + Sync {
    /// Short identifier used in logs
    fn name(&self) -> &'static str;

    /// Returns at most `top_n` titles, best first, never echoing an input title
    fn recommend(&self, movie_list: &[String], top_n: usize) -> AppResult<Vec<String>>;
}

/// Checks the shape of a request before any model work is done
pub fn validate_request(movie_list: &[String], top_n: usize) -> AppResult<()> {
    if movie_list.len() != FAVOURITES_COUNT {
        return Err(AppError::InvalidInput(format!(
            "Expected {} movies, got {}",
            FAVOURITES_COUNT,
            movie_list.len()
        )));
    }

    if top_n == 0 {
        return Err(AppError::InvalidInput("top_n must be at least 1".to_string()));
    }

    Ok(())
}

/// Orders scored catalog positions and turns the best `top_n` into titles
///
/// Ties are broken by catalog order. Liked positions, titles equal to a liked
/// title and repeated titles are skipped.
pub(crate) fn top_titles(
    catalog: &Catalog,
    mut scored: Vec<(usize, f32)>,
    liked: &[usize],
    top_n: usize,
) -> Vec<String> {
    scored.sort_by(|a, b| {
        b.1.partial_cmp(&a.1)
            .unwrap_or(std::cmp::Ordering::Equal)
            .then(a.0.cmp(&b.0))
    });

    let movies = catalog.movies();
    let mut seen: HashSet<&str> = liked.iter().map(|&i| movies[i].title.as_str()).collect();
    let mut titles = Vec::with_capacity(top_n);

    for (idx, _) in scored {
        if titles.len() == top_n {
            break;
        }
        if liked.contains(&idx) {
            continue;
        }
        let title = movies[idx].title.as_str();
        if seen.insert(title) {
            titles.push(title.to_string());
        }
    }

    titles
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Movie;

    fn catalog() -> Catalog {
        Catalog::new(
            vec![
                Movie::from_columns(1, "A (2000)".to_string(), "Drama"),
                Movie::from_columns(2, "B (2000)".to_string(), "Drama"),
                Movie::from_columns(3, "C (2000)".to_string(), "Drama"),
                Movie::from_columns(4, "A (2000)".to_string(), "Drama"),
                Movie::from_columns(5, "D (2000)".to_string(), "Drama"),
            ],
            Vec::new(),
        )
    }

    #[test]
    fn test_validate_request() {
        let three = vec!["a".to_string(), "b".to_string(), "c".to_string()];
        assert!(validate_request(&three, 10).is_ok());
        assert!(matches!(
            validate_request(&three[..2], 10),
            Err(AppError::InvalidInput(_))
        ));
        assert!(matches!(
            validate_request(&three, 0),
            Err(AppError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_top_titles_orders_and_breaks_ties_by_position() {
        let catalog = catalog();
        let scored = vec![(4, 0.5), (1, 0.9), (2, 0.5)];
        let titles = top_titles(&catalog, scored, &[0], 10);
        assert_eq!(titles, vec!["B (2000)", "C (2000)", "D (2000)"]);
    }

    #[test]
    fn test_top_titles_skips_liked_title_duplicates() {
        let catalog = catalog();
        let scored = vec![(3, 0.9), (1, 0.8)];
        let titles = top_titles(&catalog, scored, &[0], 10);
        assert_eq!(titles, vec!["B (2000)"]);
    }

    #[test]
    fn test_top_titles_truncates() {
        let catalog = catalog();
        let scored = vec![(1, 0.9), (2, 0.8), (4, 0.7)];
        assert_eq!(top_titles(&catalog, scored, &[0], 2).len(), 2);
    }
}
