use std::{collections::HashMap, path::Path};

use crate::{
    error::{AppError, AppResult},
    models::{Movie, MovieId, Rating},
};

use super::loader;

/// In-memory movie catalog and rating table, immutable after startup
#[derive(Debug, Default)]
pub struct Catalog {
    movies: Vec<Movie>,
    ratings: Vec<Rating>,
    titles: Vec<String>,
    by_title: HashMap<String, usize>,
    by_id: HashMap<MovieId, usize>,
}

impl Catalog {
    pub fn new(movies: Vec<Movie>, ratings: Vec<Rating>) -> Self {
        let mut by_title = HashMap::with_capacity(movies.len());
        let mut by_id = HashMap::with_capacity(movies.len());

        for (idx, movie) in movies.iter().enumerate() {
            by_title.entry(movie.title.clone()).or_insert(idx);
            by_id.entry(movie.id).or_insert(idx);
        }

        let titles = movies.iter().map(|m| m.title.clone()).collect();

        Self {
            movies,
            ratings,
            titles,
            by_title,
            by_id,
        }
    }

    /// Loads `movies.csv` and `ratings.csv`
    pub fn load(movies_path: &Path, ratings_path: &Path) -> AppResult<Self> {
        let movies = loader::load_movies(movies_path)?;
        let ratings = loader::load_ratings(ratings_path)?;
        Ok(Self::new(movies, ratings))
    }

    pub fn movies(&self) -> &[Movie] {
        &self.movies
    }

    pub fn ratings(&self) -> &[Rating] {
        &self.ratings
    }

    /// Titles in catalog order
    pub fn titles(&self) -> &[String] {
        &self.titles
    }

    pub fn len(&self) -> usize {
        self.movies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.movies.is_empty()
    }

    /// Catalog position of a movie id
    pub fn index_of_id(&self, id: MovieId) -> Option<usize> {
        self.by_id.get(&id).copied()
    }

    /// Catalog position of an exact title
    pub fn index_of_title(&self, title: &str) -> Option<usize> {
        self.by_title.get(title).copied()
    }

    /// Resolves titles to catalog positions, failing on the first unknown one
    pub fn resolve_titles(&self, titles: &[String]) -> AppResult<Vec<usize>> {
        titles
            .iter()
            .map(|t| {
                self.index_of_title(t)
                    .ok_or_else(|| AppError::NotFound(format!("Movie not in catalog: {}", t)))
            })
            .collect()
    }

    /// Slice of titles clamped to the catalog; falls back to every title when
    /// the clamped range is empty
    pub fn title_window(&self, start: usize, end: usize) -> &[String] {
        let len = self.titles.len();
        let start = start.min(len);
        let end = end.clamp(start, len);

        if start == end {
            &self.titles
        } else {
            &self.titles[start..end]
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> Catalog {
        let movies = vec![
            Movie::from_columns(1, "Heat (1995)".to_string(), "Action|Crime"),
            Movie::from_columns(2, "Casino (1995)".to_string(), "Crime|Drama"),
            Movie::from_columns(3, "Heat (1995)".to_string(), "Drama"),
            Movie::from_columns(4, "Alien (1979)".to_string(), "Horror|Sci-Fi"),
        ];
        Catalog::new(movies, Vec::new())
    }

    #[test]
    fn test_duplicate_titles_keep_first() {
        let catalog = catalog();
        assert_eq!(catalog.index_of_title("Heat (1995)"), Some(0));
        assert_eq!(catalog.titles().len(), 4);
    }

    #[test]
    fn test_resolve_titles_reports_unknown() {
        let catalog = catalog();
        let err = catalog
            .resolve_titles(&["Casino (1995)".to_string(), "Nope".to_string()])
            .unwrap_err();
        assert!(matches!(err, AppError::NotFound(msg) if msg.contains("Nope")));
    }

    #[test]
    fn test_title_window_clamps() {
        let catalog = catalog();
        assert_eq!(catalog.title_window(1, 3), &catalog.titles()[1..3]);
        assert_eq!(catalog.title_window(2, 100), &catalog.titles()[2..]);
    }

    #[test]
    fn test_title_window_falls_back_when_out_of_range() {
        let catalog = catalog();
        assert_eq!(catalog.title_window(14930, 15200).len(), 4);
        assert_eq!(catalog.title_window(3, 1).len(), 4);
    }
}
