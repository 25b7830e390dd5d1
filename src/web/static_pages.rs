//! Fixed-content pages: Solution Overview, Exploratory Data Analysis, About Us.

use super::layout::{figure, image};

const BANNER: &str = "project_blackbox.jpeg";

/// Team members shown on the About Us page, laid out column by column
const TEAM: [[(&str, &str); 2]; 3] = [
    [
        ("Njabulo.jpg", "Njabulo Mkhwanazi (Business Analyst)"),
        ("Josh.jpg", "Joshan Dooki (ML Engineer)"),
    ],
    [
        ("Roger.jpg", "Roger Arendse (Data Scientist)"),
        ("William.jpg", "William Hlatshwayo (Developer)"),
    ],
    [
        ("Gabrielle.jpg", "Gabrielle Peria (Statistician)"),
        ("Wade.jpg", "Wade Jacobs (Security Specialist)"),
    ],
];

pub fn solution_overview() -> String {
    [
        image(BANNER, "Project Blackbox"),
        "<h2>Solutions Overview</h2>".to_string(),
        "<p>In today’s technology driven world, recommender systems are socially and \
economically critical to ensure that individuals can make optimised choices \
surrounding the content they engage with on a daily basis. One application where \
this is especially true is movie recommendations; where intelligent algorithms can \
help viewers find great titles from tens of thousands of options.</p>"
            .to_string(),
        "<p>Recommender Systems are a type of information filtering system as they \
improve the quality of search results and provides items that are more relevant to \
the search item or are related to the search history of the user.</p>"
            .to_string(),
        "<p>Let's view a breakdown of these recommender systems as applied in <strong>Project \
Blackbox</strong> as providing an accurate and robust solutions to this challenge has immense \
economic potential, with consumers of the system being personalised recommendations - \
generating platform affinity for the streaming services which best facilitates their \
audience's viewing.</p>"
            .to_string(),
        image("Recommender_systems.png", "Recommender systems"),
    ]
    .concat()
}

pub fn exploratory_data_analysis() -> String {
    [
        image(BANNER, "Project Blackbox"),
        "<h1>Exploratory Data Analysis</h1>".to_string(),
        "<p>The three major features included in our Recommender System Algorithm:</p>\
<ul><li>Movie Year Release</li><li>Movie Genre</li><li>Movie Director</li></ul>\
<p>Displayed below you can view their respective visualization insights as well \
as a brief explanation thereof</p>"
            .to_string(),
        "<h3>Movie Year Release</h3>".to_string(),
        image("yearly_released_movies_1.png", "Movies released per year"),
        "<p>Most of the movies in our dataset has been released thoughout the 1990s. \
Looking at the graph, the count starts becoming more dense with respect to movies released \
in our current century. This is good. It means the distribution of movies with respect to \
timeline, is relatively even</p>"
            .to_string(),
        "<h3>Movie Genre</h3>".to_string(),
        image("movie_genre_distribution.png", "Movie genre distribution"),
        "<p>Genres play an important role in movie recommender systems. Drama movies are \
maximum in number as compared to Film-Noir and Documentary movies.</p>"
            .to_string(),
        "<h3>Movie Director</h3>".to_string(),
        image("popular_movie_directors.png", "Popular movie directors"),
        "<p>The top 10 directors of movies in our dataset. Directors play an important role \
in narrowing down preferences when it comes to recommender systems. The top 4 directors have \
a dense amount of movies that have been reviewed.</p>"
            .to_string(),
    ]
    .concat()
}

pub fn about_us() -> String {
    let columns: String = TEAM
        .iter()
        .map(|column| {
            let members: String = column
                .iter()
                .map(|(file, caption)| figure(file, caption))
                .collect();
            format!("<div>{}</div>", members)
        })
        .collect();

    format!(
        "<h1>Meet the Data Science Team</h1>{}<div class=\"columns\">{}</div>",
        image(BANNER, "Project Blackbox"),
        columns
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overview_has_heading_and_images() {
        let html = solution_overview();
        assert!(html.contains("<h2>Solutions Overview</h2>"));
        assert!(html.contains("/imgs/project_blackbox.jpeg"));
        assert!(html.contains("/imgs/Recommender_systems.png"));
    }

    #[test]
    fn test_eda_lists_three_features() {
        let html = exploratory_data_analysis();
        for feature in ["Movie Year Release", "Movie Genre", "Movie Director"] {
            assert!(html.contains(&format!("<h3>{}</h3>", feature)));
        }
    }

    #[test]
    fn test_about_us_has_three_columns_of_two() {
        let html = about_us();
        assert_eq!(html.matches("<figure>").count(), 6);
        assert!(html.contains("Wade Jacobs (Security Specialist)"));
        let grid = html.split("<div class=\"columns\">").nth(1).unwrap();
        assert_eq!(grid.matches("<div>").count(), 3);
    }
}
