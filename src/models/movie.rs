use serde::{Deserialize, Serialize};

/// MovieLens movie identifier
pub type MovieId = u32;

/// MovieLens user identifier
pub type UserId = u32;

/// A catalog entry from `movies.csv`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Movie {
    pub id: MovieId,
    /// Title as it appears in the catalog, release year included (e.g. "Heat (1995)")
    pub title: String,
    pub genres: Vec<String>,
    pub year: Option<i32>,
}

impl Movie {
    /// Builds a movie from the raw `title` and pipe-separated `genres` columns
    pub fn from_columns(id: MovieId, title: String, genres: &str) -> Self {
        let genres = parse_genres(genres);
        let year = parse_year(&title);
        Self {
            id,
            title,
            genres,
            year,
        }
    }

    /// Release decade, e.g. 1990 for 1995
    pub fn decade(&self) -> Option<i32> {
        self.year.map(|y| y - y.rem_euclid(10))
    }
}

/// A single user rating from `ratings.csv`
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct Rating {
    pub user_id: UserId,
    pub movie_id: MovieId,
    pub rating: f32,
}

fn parse_genres(raw: &str) -> Vec<String> {
    if raw.trim() == "(no genres listed)" {
        return Vec::new();
    }

    raw.split('|')
        .map(str::trim)
        .filter(|g| !g.is_empty())
        .map(str::to_string)
        .collect()
}

/// Extracts the year from a trailing "(YYYY)" suffix
fn parse_year(title: &str) -> Option<i32> {
    let trimmed = title.trim_end();
    let inner = trimmed.strip_suffix(')')?;
    let open = inner.rfind('(')?;
    let digits = &inner[open + 1..];
    if digits.len() == 4 && digits.chars().all(|c| c.is_ascii_digit()) {
        digits.parse().ok()
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_columns_parses_genres_and_year() {
        let movie = Movie::from_columns(1, "Toy Story (1995)".to_string(), "Adventure|Animation|Children");
        assert_eq!(movie.genres, vec!["Adventure", "Animation", "Children"]);
        assert_eq!(movie.year, Some(1995));
        assert_eq!(movie.decade(), Some(1990));
    }

    #[test]
    fn test_no_genres_listed() {
        let movie = Movie::from_columns(2, "Unknown (2001)".to_string(), "(no genres listed)");
        assert!(movie.genres.is_empty());
    }

    #[test]
    fn test_year_missing_or_malformed() {
        assert_eq!(parse_year("Babylon 5"), None);
        assert_eq!(parse_year("Something (TV)"), None);
        assert_eq!(parse_year("Paris, je t'aime (2006) "), Some(2006));
    }

    #[test]
    fn test_year_uses_last_parenthesis() {
        assert_eq!(parse_year("City of Lost Children, The (Cité des enfants perdus, La) (1995)"), Some(1995));
    }
}
