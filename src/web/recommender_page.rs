use std::fmt::Write;

use serde::Deserialize;

use crate::data::Catalog;
use crate::models::Algorithm;

use super::layout::{html_escape, image};

/// Message shown whenever a model fails, whatever the cause
pub const FAILURE_MESSAGE: &str = "Oops! Looks like this algorithm doesn't work. We'll need to fix it!";

/// Button text shown while a model is running
pub const PROGRESS_MESSAGE: &str = "Crunching the numbers...";

/// Label and catalog range of each favourite-movie dropdown
pub const MOVIE_SELECTS: [(&str, &str, usize, usize); 3] = [
    ("movie_1", "First Option", 14930, 15200),
    ("movie_2", "Second Option", 25055, 25255),
    ("movie_3", "Third Option", 21100, 21200),
];

/// Form posted by the Recommend button
#[derive(Debug, Clone, Deserialize)]
pub struct RecommendForm {
    #[serde(default)]
    pub algorithm: Algorithm,
    pub movie_1: String,
    pub movie_2: String,
    pub movie_3: String,
}

impl RecommendForm {
    pub fn movie_list(&self) -> Vec<String> {
        vec![
            self.movie_1.clone(),
            self.movie_2.clone(),
            self.movie_3.clone(),
        ]
    }

    fn selected(&self, field: &str) -> Option<&str> {
        match field {
            "movie_1" => Some(&self.movie_1),
            "movie_2" => Some(&self.movie_2),
            "movie_3" => Some(&self.movie_3),
            _ => None,
        }
    }
}

/// Result area below the form
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    /// Nothing requested yet
    Idle,
    Recommended(Vec<String>),
    Failed,
}

/// Body of the Recommender System page
pub fn render(catalog: &Catalog, form: Option<&RecommendForm>, outcome: &Outcome) -> String {
    let algorithm = form.map(|f| f.algorithm).unwrap_or_default();
    let mut html = String::new();

    html.push_str("<h1>Movie Recommender Engine</h1>");
    html.push_str("<h3>EXPLORE Data Science Academy Unsupervised Predict</h3>");
    html.push_str(&image("Image_header.png", "Movie Recommender Engine"));

    let _ = write!(
        html,
        "<form method=\"post\" action=\"/recommend\" \
onsubmit=\"this.setAttribute('aria-busy','true');\
this.querySelector('button').textContent='{}'\">",
        PROGRESS_MESSAGE
    );
    html.push_str("<fieldset><legend>Select an algorithm</legend>");
    for option in Algorithm::ALL {
        let checked = if option == algorithm { " checked" } else { "" };
        let _ = write!(
            html,
            "<label><input type=\"radio\" name=\"algorithm\" value=\"{}\"{}> {}</label><br>",
            option.form_value(),
            checked,
            option.label()
        );
    }
    html.push_str("</fieldset>");

    html.push_str("<h3>Enter Your Three Favorite Movies</h3>");
    for (field, label, start, end) in MOVIE_SELECTS {
        let selected = form.and_then(|f| f.selected(field));
        let _ = write!(
            html,
            "<label for=\"{field}\">{label}</label><br><select id=\"{field}\" name=\"{field}\">{}</select><br>",
            options(catalog.title_window(start, end), selected)
        );
    }

    html.push_str("<button type=\"submit\">Recommend</button></form>");

    match outcome {
        Outcome::Idle => {}
        Outcome::Recommended(titles) => {
            html.push_str("<h1>We think you'll like:</h1>");
            for (i, title) in titles.iter().enumerate() {
                let _ = write!(html, "<h3>{}. {}</h3>", i + 1, html_escape(title));
            }
        }
        Outcome::Failed => {
            let _ = write!(html, "<div class=\"error\">{}</div>", html_escape(FAILURE_MESSAGE));
        }
    }

    html
}

fn options(titles: &[String], selected: Option<&str>) -> String {
    let mut html = String::new();
    for title in titles {
        let escaped = html_escape(title);
        let mark = if selected == Some(title.as_str()) { " selected" } else { "" };
        let _ = write!(html, "<option value=\"{escaped}\"{mark}>{escaped}</option>");
    }
    html
}
