use axum::{
    extract::{rejection::FormRejection, Path, State},
    http::StatusCode,
    response::Html,
    Extension, Form,
};

use crate::api::AppState;
use crate::middleware::RequestId;
use crate::services::get_recommendations;

use super::layout::{html_escape, render_layout};
use super::recommender_page::{self, Outcome, RecommendForm};
use super::{static_pages, Page};

fn render_page(state: &AppState, page: Page) -> String {
    let content = match page {
        Page::RecommenderSystem => recommender_page::render(&state.catalog, None, &Outcome::Idle),
        Page::SolutionOverview => static_pages::solution_overview(),
        Page::ExploratoryDataAnalysis => static_pages::exploratory_data_analysis(),
        Page::AboutUs => static_pages::about_us(),
    };
    render_layout(page, &content)
}

/// Landing page: the first menu entry
pub async fn index(State(state): State<AppState>) -> Html<String> {
    Html(render_page(&state, Page::default()))
}

/// Menu navigation
pub async fn page(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> Result<Html<String>, (StatusCode, Html<String>)> {
    match Page::from_slug(&slug) {
        Some(page) => Ok(Html(render_page(&state, page))),
        None => {
            let content = format!("<h1>Page not found</h1><p>No page named “{}”.</p>", html_escape(&slug));
            Err((
                StatusCode::NOT_FOUND,
                Html(render_layout(Page::default(), &content)),
            ))
        }
    }
}

/// Recommend button: runs the chosen model and renders the list or the failure notice
///
/// An incomplete form never reaches a model; it gets the same failure notice
/// inside the page with a 422 status.
pub async fn recommend(
    State(state): State<AppState>,
    Extension(request_id): Extension<RequestId>,
    form: Result<Form<RecommendForm>, FormRejection>,
) -> (StatusCode, Html<String>) {
    let form = match form {
        Ok(Form(form)) => form,
        Err(rejection) => {
            tracing::warn!(request_id = %request_id, error = %rejection, "Rejected recommend form");
            let content = recommender_page::render(&state.catalog, None, &Outcome::Failed);
            return (
                StatusCode::UNPROCESSABLE_ENTITY,
                Html(render_layout(Page::RecommenderSystem, &content)),
            );
        }
    };

    tracing::info!(
        request_id = %request_id,
        algorithm = %form.algorithm,
        "Recommend button pressed"
    );

    let outcome = match get_recommendations(
        state.recommender(form.algorithm),
        form.movie_list(),
        state.top_n,
    )
    .await
    {
        Ok(titles) => Outcome::Recommended(titles),
        Err(e) => {
            tracing::error!(request_id = %request_id, error = %e, "Recommender failed");
            Outcome::Failed
        }
    };

    let content = recommender_page::render(&state.catalog, Some(&form), &outcome);
    (StatusCode::OK, Html(render_layout(Page::RecommenderSystem, &content)))
}
