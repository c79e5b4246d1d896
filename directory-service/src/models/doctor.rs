use serde::{Deserialize, Serialize};

/// Value of the `id` field written on every doctor record.
///
/// Every doctor shares it; records are told apart by the store-assigned `_id`.
pub const DOCTOR_RECORD_ID: &str = "asone:code:doctors";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Doctor {
    pub id: String,
    pub name: String,
    pub speciality: String,
    pub phone: String,
    pub email: String,
    pub address: String,
    pub city: String,
    pub description: String,
}

impl Doctor {
    pub fn new(
        name: String,
        speciality: String,
        phone: String,
        email: String,
        address: String,
        city: String,
        description: String,
    ) -> Self {
        Self {
            id: DOCTOR_RECORD_ID.to_string(),
            name,
            speciality,
            phone,
            email,
            address,
            city,
            description,
        }
    }
}
