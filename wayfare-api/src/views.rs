//! Server-rendered pages.
//!
//! Each page is a plain function over typed data. Anything that came from a
//! visitor or the database goes through [`escape`] before it is written out.

use axum::response::Html;
use wayfare_core::models::Flight;
use wayfare_core::search::DATE_FORMAT;
use wayfare_core::validation::{BookingForm, FormErrors, SearchForm};

use crate::flash::Flash;

const BOOTSTRAP_CSS: &str = "https://cdn.jsdelivr.net/npm/bootstrap@5.3.0/dist/css/bootstrap.min.css";
const BOOTSTRAP_JS: &str = "https://cdn.jsdelivr.net/npm/bootstrap@5.3.0/dist/js/bootstrap.bundle.min.js";

pub const NO_FLIGHTS_MESSAGE: &str = "No flights available for the requested date.";

pub fn escape(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#x27;"),
            _ => out.push(c),
        }
    }
    out
}

fn page(title: &str, flash: Option<Flash>, content: &str) -> Html<String> {
    let alert = flash
        .map(|f| {
            format!(
                r#"<div class="alert alert-{category} alert-dismissible fade show" role="alert">
      {message}
      <button type="button" class="btn-close" data-bs-dismiss="alert" aria-label="Close"></button>
    </div>"#,
                category = f.category(),
                message = escape(f.message()),
            )
        })
        .unwrap_or_default();

    Html(format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8">
  <meta name="viewport" content="width=device-width, initial-scale=1">
  <title>{title}</title>
  <link href="{BOOTSTRAP_CSS}" rel="stylesheet">
</head>
<body>
  <div class="container mt-4">
    {alert}
    {content}
  </div>
  <script src="{BOOTSTRAP_JS}"></script>
</body>
</html>
"#,
        title = escape(title),
    ))
}

fn input(name: &str, label: &str, kind: &str, value: &str, error: Option<&str>) -> String {
    let (class, feedback) = match error {
        Some(message) => (
            "form-control is-invalid",
            format!(r#"<div class="invalid-feedback">{}</div>"#, escape(message)),
        ),
        None => ("form-control", String::new()),
    };

    format!(
        r#"<div class="mb-3">
      <label class="form-label" for="{name}">{label}</label>
      <input class="{class}" id="{name}" name="{name}" type="{kind}" value="{value}">
      {feedback}
    </div>"#,
        value = escape(value),
    )
}

fn flight_summary(flight: &Flight) -> String {
    format!(
        "{} to {} on {} - {}",
        escape(&flight.from_city),
        escape(&flight.to_city),
        flight.date.format(DATE_FORMAT),
        flight.price_label()
    )
}

pub fn index_page(form: &SearchForm, errors: &FormErrors, flash: Option<Flash>) -> Html<String> {
    let content = format!(
        r#"<h1 class="mb-4">Flight Booking System</h1>
  <form method="POST" action="/" novalidate>
    {from}
    {to}
    {date}
    <div class="mb-3">
      <button type="submit" class="btn btn-primary">Search flights</button>
    </div>
  </form>"#,
        from = input("from_city", "From", "text", &form.from_city, errors.get("from_city")),
        to = input("to_city", "To", "text", &form.to_city, errors.get("to_city")),
        date = input("date", "Date", "date", &form.date, errors.get("date")),
    );

    page("Home", flash, &content)
}

pub fn flights_page(flights: &[Flight]) -> Html<String> {
    let listing = if flights.is_empty() {
        format!("<p>{}</p>", NO_FLIGHTS_MESSAGE)
    } else {
        let items: String = flights
            .iter()
            .map(|flight| {
                format!(
                    r#"
      <li class="list-group-item d-flex justify-content-between align-items-center">
        {summary}
        <a href="/book/{id}" class="btn btn-success">Book now</a>
      </li>"#,
                    summary = flight_summary(flight),
                    id = flight.id,
                )
            })
            .collect();
        format!(r#"<ul class="list-group">{items}
    </ul>"#)
    };

    let content = format!(
        r#"<h1 class="mb-4">Available Flights</h1>
  {listing}
  <a href="/" class="btn btn-link mt-3">New search</a>"#
    );

    page("Available Flights", None, &content)
}

pub fn booking_page(flight: &Flight, form: &BookingForm, errors: &FormErrors) -> Html<String> {
    let content = format!(
        r#"<h1 class="mb-4">Book Flight</h1>
  <div class="mb-3">
    <p>{summary}</p>
  </div>
  <form method="POST" action="/book/{id}" novalidate>
    {name}
    {email}
    <div class="mb-3">
      <button type="submit" class="btn btn-primary">Confirm booking</button>
    </div>
  </form>"#,
        summary = flight_summary(flight),
        id = flight.id,
        name = input("name", "Name", "text", &form.name, errors.get("name")),
        email = input("email", "Email", "email", &form.email, errors.get("email")),
    );

    page("Book Flight", None, &content)
}

pub fn not_found_page() -> Html<String> {
    page(
        "Page Not Found",
        None,
        r#"<h1>404 - Page not found</h1>
  <p>Sorry, the page you are looking for does not exist.</p>
  <a href="/" class="btn btn-primary">Back to home</a>"#,
    )
}

pub fn server_error_page() -> Html<String> {
    page(
        "Server Error",
        None,
        r#"<h1>500 - Server error</h1>
  <p>An unexpected error occurred. Please try again later.</p>
  <a href="/" class="btn btn-primary">Back to home</a>"#,
    )
}
