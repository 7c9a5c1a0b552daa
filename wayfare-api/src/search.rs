use axum::{
    extract::{
        rejection::{FormRejection, QueryRejection},
        Form, Query, State,
    },
    response::{IntoResponse, Redirect, Response},
    routing::get,
    Router,
};
use axum_extra::extract::cookie::CookieJar;
use tracing::debug;
use wayfare_core::validation::{FormErrors, SearchForm};

use crate::error::{or_empty, AppError};
use crate::state::AppState;
use crate::{flash, views};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(index).post(submit_search))
        .route("/flights", get(list_flights_query).post(list_flights_form))
}

async fn index(jar: CookieJar) -> impl IntoResponse {
    let (jar, pending) = flash::take(jar);
    (jar, views::index_page(&SearchForm::default(), &FormErrors::default(), pending))
}

async fn submit_search(form: Result<Form<SearchForm>, FormRejection>) -> Response {
    let form = or_empty(form.map(|Form(form)| form));
    match form.validate() {
        Ok(query) => Redirect::to(&format!("/flights?{}", query.to_query_string())).into_response(),
        Err(errors) => views::index_page(&form, &errors, None).into_response(),
    }
}

async fn list_flights_query(
    State(state): State<AppState>,
    form: Result<Query<SearchForm>, QueryRejection>,
) -> Result<Response, AppError> {
    list_flights(&state, or_empty(form.map(|Query(form)| form))).await
}

async fn list_flights_form(
    State(state): State<AppState>,
    form: Result<Form<SearchForm>, FormRejection>,
) -> Result<Response, AppError> {
    list_flights(&state, or_empty(form.map(|Form(form)| form))).await
}

async fn list_flights(state: &AppState, form: SearchForm) -> Result<Response, AppError> {
    let query = match form.validate() {
        Ok(query) => query,
        // Bad or missing parameters send the visitor back to the search form.
        Err(errors) => return Ok(views::index_page(&form, &errors, None).into_response()),
    };

    debug!("Searching flights {} -> {} on {}", query.from_city, query.to_city, query.date);
    let flights = state.flight_repo.search_flights(&query).await?;

    Ok(views::flights_page(&flights).into_response())
}
