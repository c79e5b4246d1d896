use serde::Deserialize;

/// `?speciality=<name>` on the add/delete routes.
#[derive(Debug, Deserialize)]
pub struct SpecialityParams {
    pub speciality: String,
}
