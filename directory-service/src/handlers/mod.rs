pub mod doctors;
pub mod health;
pub mod root;
pub mod specialities;

pub use doctors::add_doctor;
pub use health::{health_check, metrics_endpoint, readiness_check};
pub use root::root;
pub use specialities::{add_speciality, delete_speciality, get_specialities};

use axum::http::{header, HeaderName};

/// Explicit wildcard origin on successful API responses, on top of the CORS layer.
pub(crate) const ALLOW_ANY_ORIGIN: [(HeaderName, &str); 1] =
    [(header::ACCESS_CONTROL_ALLOW_ORIGIN, "*")];
