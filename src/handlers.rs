//! Stub request handlers.
//!
//! Each handler acknowledges its endpoint with a fixed body and ignores
//! the request entirely. No parsing, no validation, no state. Returning
//! `&'static str` renders as 200 text/plain.

/// Acknowledge an account signup.
pub async fn signup() -> &'static str {
    "signed up"
}

/// Acknowledge a login.
pub async fn login() -> &'static str {
    "logged in"
}

/// Acknowledge saving a timetable.
pub async fn save() -> &'static str {
    "saved"
}

/// Acknowledge loading a timetable.
pub async fn load() -> &'static str {
    "loaded"
}

/// Acknowledge a class lookup.
pub async fn get_class() -> &'static str {
    "class gotten"
}

/// Acknowledge an optimisation run.
pub async fn optimise() -> &'static str {
    "optimised"
}
