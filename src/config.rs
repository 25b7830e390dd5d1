use std::path::PathBuf;

use serde::Deserialize;

/// Application configuration loaded from environment variables
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    /// Server host address
    #[serde(default = "default_host")]
    pub host: String,

    /// Server port
    #[serde(default = "default_port")]
    pub port: u16,

    /// Movie catalog (`movieId,title,genres`)
    #[serde(default = "default_movies_path")]
    pub movies_path: PathBuf,

    /// User ratings (`userId,movieId,rating,timestamp`)
    #[serde(default = "default_ratings_path")]
    pub ratings_path: PathBuf,

    /// Directory served under `/imgs`
    #[serde(default = "default_images_dir")]
    pub images_dir: PathBuf,

    /// Number of recommendations returned when a request doesn't ask for a count
    #[serde(default = "default_top_n")]
    pub top_n: usize,
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    8501
}

fn default_movies_path() -> PathBuf {
    PathBuf::from("resources/data/movies.csv")
}

fn default_ratings_path() -> PathBuf {
    PathBuf::from("resources/data/ratings.csv")
}

fn default_images_dir() -> PathBuf {
    PathBuf::from("resources/imgs")
}

fn default_top_n() -> usize {
    10
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            movies_path: default_movies_path(),
            ratings_path: default_ratings_path(),
            images_dir: default_images_dir(),
            top_n: default_top_n(),
        }
    }
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_vars(std::env::vars())
    }

    /// Load configuration from an explicit set of key/value pairs
    pub fn from_vars<I>(vars: I) -> anyhow::Result<Self>
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let config = envy::from_iter::<_, Config>(vars)
            .map_err(|e| anyhow::anyhow!("Failed to load config: {}", e))?;

        if config.top_n == 0 {
            anyhow::bail!("TOP_N must be greater than zero");
        }

        Ok(config)
    }

    /// Socket address string the server binds to
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vars(pairs: &[(&str, &str)]) -> Vec<(String, String)> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_defaults_when_unset() {
        let config = Config::from_vars(Vec::new()).unwrap();
        assert_eq!(config.port, 8501);
        assert_eq!(config.top_n, 10);
        assert_eq!(config.movies_path, PathBuf::from("resources/data/movies.csv"));
        assert_eq!(config.bind_address(), "127.0.0.1:8501");
    }

    #[test]
    fn test_overrides_from_vars() {
        let config = Config::from_vars(vars(&[
            ("PORT", "9000"),
            ("MOVIES_PATH", "/data/movies.csv"),
            ("TOP_N", "5"),
        ]))
        .unwrap();
        assert_eq!(config.port, 9000);
        assert_eq!(config.movies_path, PathBuf::from("/data/movies.csv"));
        assert_eq!(config.top_n, 5);
    }

    #[test]
    fn test_zero_top_n_rejected() {
        assert!(Config::from_vars(vars(&[("TOP_N", "0")])).is_err());
    }

    #[test]
    fn test_invalid_port_rejected() {
        assert!(Config::from_vars(vars(&[("PORT", "not-a-port")])).is_err());
    }
}
