//! Form validation for the search and booking pages.
//!
//! Every field is required. The booking email must look like an address and
//! the search date must parse as `YYYY-MM-DD`. Values are never rewritten.

use std::collections::BTreeMap;
use std::sync::LazyLock;

use chrono::NaiveDate;
use regex::Regex;
use serde::Deserialize;

use crate::models::NewBooking;
use crate::search::{FlightQuery, DATE_FORMAT};

pub const REQUIRED_MESSAGE: &str = "This field is required.";
pub const EMAIL_MESSAGE: &str = "Invalid email address.";
pub const DATE_MESSAGE: &str = "Not a valid date value.";

static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^[^@\s]+@[A-Za-z0-9](?:[A-Za-z0-9-]*[A-Za-z0-9])?(?:\.[A-Za-z0-9](?:[A-Za-z0-9-]*[A-Za-z0-9])?)+$",
    )
    .expect("email pattern is valid")
});

pub fn is_valid_email(email: &str) -> bool {
    EMAIL_RE.is_match(email)
}

/// Per-field messages, keyed by form field name.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FormErrors(BTreeMap<&'static str, &'static str>);

impl FormErrors {
    pub fn add(&mut self, field: &'static str, message: &'static str) {
        // First failure wins, "required" shadows format errors.
        self.0.entry(field).or_insert(message);
    }

    pub fn get(&self, field: &str) -> Option<&'static str> {
        self.0.get(field).copied()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }
}

/// Whitespace-only counts as missing, but accepted values are kept exactly as submitted.
fn required(errors: &mut FormErrors, field: &'static str, value: &str) -> Option<String> {
    if value.trim().is_empty() {
        errors.add(field, REQUIRED_MESSAGE);
        None
    } else {
        Some(value.to_string())
    }
}

/// Raw search fields as submitted, either from the home page form or the `/flights` query.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct SearchForm {
    pub from_city: String,
    pub to_city: String,
    pub date: String,
}

impl SearchForm {
    pub fn validate(&self) -> Result<FlightQuery, FormErrors> {
        let mut errors = FormErrors::default();

        let from_city = required(&mut errors, "from_city", &self.from_city);
        let to_city = required(&mut errors, "to_city", &self.to_city);
        let date = required(&mut errors, "date", &self.date).and_then(|raw| {
            match NaiveDate::parse_from_str(&raw, DATE_FORMAT) {
                Ok(date) => Some(date),
                Err(_) => {
                    errors.add("date", DATE_MESSAGE);
                    None
                }
            }
        });

        match (from_city, to_city, date) {
            (Some(from_city), Some(to_city), Some(date)) => Ok(FlightQuery {
                from_city,
                to_city,
                date,
            }),
            _ => {
                tracing::debug!("Rejected search form: {:?}", errors);
                Err(errors)
            }
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct BookingForm {
    pub name: String,
    pub email: String,
}

impl BookingForm {
    pub fn validate(&self, flight_id: i64) -> Result<NewBooking, FormErrors> {
        let mut errors = FormErrors::default();

        let name = required(&mut errors, "name", &self.name);
        let email = required(&mut errors, "email", &self.email).filter(|email| {
            let ok = is_valid_email(email);
            if !ok {
                errors.add("email", EMAIL_MESSAGE);
            }
            ok
        });

        match (name, email) {
            (Some(name), Some(email)) => Ok(NewBooking {
                flight_id,
                name,
                email,
            }),
            _ => {
                tracing::debug!("Rejected booking form for flight {}: {:?}", flight_id, errors);
                Err(errors)
            }
        }
    }
}
