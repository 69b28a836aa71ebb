use axum::{
    extract::State,
    response::{Html, Redirect},
};

use crate::application::http::server::{api_entities::api_error::ApiError, app_state::AppState};

pub async fn index(State(state): State<AppState>) -> Redirect {
    Redirect::to(&format!("{}/home", state.args.server.root_path))
}

pub async fn home(State(state): State<AppState>) -> Result<Html<String>, ApiError> {
    Ok(Html(state.views.ingredients(&[])?))
}
