use axum_extra::extract::cookie::{Cookie, CookieJar};

pub const FLASH_COOKIE: &str = "wayfare_flash";

/// One-shot notices shown on the next rendered page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flash {
    BookingConfirmed,
}

impl Flash {
    fn code(self) -> &'static str {
        match self {
            Flash::BookingConfirmed => "booking_confirmed",
        }
    }

    fn from_code(code: &str) -> Option<Self> {
        match code {
            "booking_confirmed" => Some(Flash::BookingConfirmed),
            _ => None,
        }
    }

    /// Bootstrap alert category.
    pub fn category(self) -> &'static str {
        match self {
            Flash::BookingConfirmed => "success",
        }
    }

    pub fn message(self) -> &'static str {
        match self {
            Flash::BookingConfirmed => "Booking confirmed successfully!",
        }
    }
}

fn cookie(value: &'static str) -> Cookie<'static> {
    Cookie::build((FLASH_COOKIE, value)).path("/").http_only(true).build()
}

pub fn push(jar: CookieJar, flash: Flash) -> CookieJar {
    jar.add(cookie(flash.code()))
}

/// Reads the pending flash, if any, and clears it.
pub fn take(jar: CookieJar) -> (CookieJar, Option<Flash>) {
    let Some(value) = jar.get(FLASH_COOKIE).map(|c| c.value().to_string()) else {
        return (jar, None);
    };

    (jar.remove(cookie("")), Flash::from_code(&value))
}
