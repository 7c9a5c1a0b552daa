use axum::Router;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::trace::TraceLayer;

pub mod bookings;
pub mod error;
pub mod flash;
pub mod search;
pub mod state;
pub mod views;

pub use state::AppState;

pub fn app(state: AppState) -> Router {
    Router::new()
        .merge(search::routes())
        .merge(bookings::routes())
        .fallback(error::fallback)
        .layer(CatchPanicLayer::custom(error::panic_response))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
