pub mod catalog;
pub mod loader;

pub use catalog::Catalog;
pub use loader::{load_movie_titles, load_movies, load_ratings};
