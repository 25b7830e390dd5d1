use std::{path::PathBuf, sync::Arc};

use crate::config::Config;
use crate::data::Catalog;
use crate::models::Algorithm;
use crate::recommenders::{CollabRecommender, ContentRecommender, Recommender};

/// Shared application state
///
/// Everything here is built once at startup and only read afterwards, so it
/// is shared through `Arc` without locking.
#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<Catalog>,
    pub content: Arc<dyn Recommender>,
    pub collab: Arc<dyn Recommender>,
    /// Default list length for recommendation requests
    pub top_n: usize,
    /// Directory served under `/imgs`
    pub images_dir: PathBuf,
}

impl AppState {
    /// Builds both models over the catalog
    pub fn new(catalog: Arc<Catalog>, config: &Config) -> Self {
        let content = Arc::new(ContentRecommender::new(catalog.clone()));
        let collab = Arc::new(CollabRecommender::new(catalog.clone()));
        Self::with_recommenders(catalog, content, collab, config.top_n)
            .with_images_dir(config.images_dir.clone())
    }

    /// Assembles state from already-built recommenders
    pub fn with_recommenders(
        catalog: Arc<Catalog>,
        content: Arc<dyn Recommender>,
        collab: Arc<dyn Recommender>,
        top_n: usize,
    ) -> Self {
        Self {
            catalog,
            content,
            collab,
            top_n,
            images_dir: Config::default().images_dir,
        }
    }

    pub fn with_images_dir(mut self, images_dir: PathBuf) -> Self {
        self.images_dir = images_dir;
        self
    }

    /// Model backing an algorithm choice
    pub fn recommender(&self, algorithm: Algorithm) -> Arc<dyn Recommender> {
        match algorithm {
            Algorithm::ContentBased => self.content.clone(),
            Algorithm::CollaborativeBased => self.collab.clone(),
        }
    }
}
