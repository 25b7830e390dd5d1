use std::fmt::Display;

use serde::{Deserialize, Serialize};

/// Recommendation algorithm offered on the recommender page
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Algorithm {
    #[default]
    ContentBased,
    CollaborativeBased,
}

impl Algorithm {
    pub const ALL: [Algorithm; 2] = [Algorithm::ContentBased, Algorithm::CollaborativeBased];

    /// Label shown next to the radio button
    pub fn label(&self) -> &'static str {
        match self {
            Algorithm::ContentBased => "Content Based Filtering",
            Algorithm::CollaborativeBased => "Collaborative Based Filtering",
        }
    }

    /// Form value used by the HTML radio buttons
    pub fn form_value(&self) -> &'static str {
        match self {
            Algorithm::ContentBased => "content_based",
            Algorithm::CollaborativeBased => "collaborative_based",
        }
    }
}

impl Display for Algorithm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Request body for `POST /api/v1/recommendations`
#[derive(Debug, Clone, Deserialize)]
pub struct RecommendationRequest {
    pub algorithm: Algorithm,
    pub movie_list: Vec<String>,
    #[serde(default)]
    pub top_n: Option<usize>,
}

/// One ranked entry of a recommendation list
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RankedTitle {
    /// 1-based position
    pub rank: usize,
    pub title: String,
}

/// Response body for `POST /api/v1/recommendations`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RecommendationResponse {
    pub algorithm: Algorithm,
    pub recommendations: Vec<RankedTitle>,
}

impl RecommendationResponse {
    pub fn new(algorithm: Algorithm, titles: Vec<String>) -> Self {
        let recommendations = titles
            .into_iter()
            .enumerate()
            .map(|(i, title)| RankedTitle { rank: i + 1, title })
            .collect();
        Self {
            algorithm,
            recommendations,
        }
    }
}
