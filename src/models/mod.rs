pub mod movie;
pub mod recommendation;

pub use movie::{Movie, MovieId, Rating, UserId};
pub use recommendation::{Algorithm, RankedTitle, RecommendationRequest, RecommendationResponse};
