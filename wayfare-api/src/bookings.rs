use axum::{
    extract::{rejection::FormRejection, Form, Path, State},
    response::{IntoResponse, Redirect, Response},
    routing::get,
    Router,
};
use axum_extra::extract::cookie::CookieJar;
use tracing::info;
use wayfare_core::models::Flight;
use wayfare_core::validation::{BookingForm, FormErrors};
use wayfare_core::CoreError;

use crate::error::{or_empty, AppError};
use crate::flash::{self, Flash};
use crate::state::AppState;
use crate::views;

pub fn routes() -> Router<AppState> {
    Router::new().route("/book/{flight_id}", get(show_booking_form).post(submit_booking))
}

/// Flight ids are positive integers written as plain digits; anything else is a 404.
fn parse_flight_id(raw: &str) -> Option<i64> {
    if raw.is_empty() || !raw.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    raw.parse::<i64>().ok().filter(|id| *id > 0)
}

async fn load_flight(state: &AppState, raw_id: &str) -> Result<Flight, AppError> {
    let id = parse_flight_id(raw_id)
        .ok_or_else(|| AppError::NotFound(format!("invalid flight id {:?}", raw_id)))?;

    let flight = state
        .flight_repo
        .get_flight(id)
        .await?
        .ok_or_else(|| CoreError::NotFound(format!("flight {}", id)))?;

    Ok(flight)
}

async fn show_booking_form(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> Result<Response, AppError> {
    let flight = load_flight(&state, &raw_id).await?;
    Ok(views::booking_page(&flight, &BookingForm::default(), &FormErrors::default()).into_response())
}

async fn submit_booking(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
    jar: CookieJar,
    form: Result<Form<BookingForm>, FormRejection>,
) -> Result<Response, AppError> {
    // Unknown flights are a 404 whatever the body looks like.
    let flight = load_flight(&state, &raw_id).await?;
    let form = or_empty(form.map(|Form(form)| form));

    let new_booking = match form.validate(flight.id) {
        Ok(booking) => booking,
        Err(errors) => return Ok(views::booking_page(&flight, &form, &errors).into_response()),
    };

    let booking = state.booking_repo.create_booking(&new_booking).await?;
    info!("Booking {} confirmed for flight {}", booking.id, flight.id);

    let jar = flash::push(jar, Flash::BookingConfirmed);
    Ok((jar, Redirect::to("/")).into_response())
}
