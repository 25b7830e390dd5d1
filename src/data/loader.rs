use std::{fs::File, io::Read, path::Path};

use serde::Deserialize;
use tracing::instrument;

use crate::{
    error::AppResult,
    models::{Movie, MovieId, Rating, UserId},
};

/// Raw row of `movies.csv`
#[derive(Debug, Deserialize)]
struct MovieRow {
    #[serde(rename = "movieId")]
    movie_id: MovieId,
    title: String,
    #[serde(default)]
    genres: String,
}

/// Raw row of `ratings.csv`; the timestamp column is optional and unused
#[derive(Debug, Deserialize)]
struct RatingRow {
    #[serde(rename = "userId")]
    user_id: UserId,
    #[serde(rename = "movieId")]
    movie_id: MovieId,
    rating: f32,
}

/// Loads the ordered list of titles used to populate the movie dropdowns
///
/// Library entry point for callers that only need titles. The server loads
/// the whole catalog through [`load_movies`] and reads the same list from
/// `Catalog::titles`, so both orderings match the file.
#[instrument]
pub fn load_movie_titles(path: &Path) -> AppResult<Vec<String>> {
    let movies = load_movies(path)?;
    Ok(movies.into_iter().map(|m| m.title).collect())
}

/// Loads the full movie catalog in file order
#[instrument]
pub fn load_movies(path: &Path) -> AppResult<Vec<Movie>> {
    let file = File::open(path)?;
    let movies = read_movies(file)?;
    tracing::info!(count = movies.len(), "Loaded movies");
    Ok(movies)
}

/// Loads all user ratings
#[instrument]
pub fn load_ratings(path: &Path) -> AppResult<Vec<Rating>> {
    let file = File::open(path)?;
    let ratings = read_ratings(file)?;
    tracing::info!(count = ratings.len(), "Loaded ratings");
    Ok(ratings)
}

pub fn read_movies<R: Read>(reader: R) -> AppResult<Vec<Movie>> {
    let mut rdr = csv::Reader::from_reader(reader);
    let mut movies = Vec::new();

    for row in rdr.deserialize::<MovieRow>() {
        let row = row?;
        movies.push(Movie::from_columns(row.movie_id, row.title, &row.genres));
    }

    Ok(movies)
}

pub fn read_ratings<R: Read>(reader: R) -> AppResult<Vec<Rating>> {
    let mut rdr = csv::ReaderBuilder::new().flexible(true).from_reader(reader);
    let mut ratings = Vec::new();

    for row in rdr.deserialize::<RatingRow>() {
        let row = row?;
        ratings.push(Rating {
            user_id: row.user_id,
            movie_id: row.movie_id,
            rating: row.rating,
        });
    }

    Ok(ratings)
}
