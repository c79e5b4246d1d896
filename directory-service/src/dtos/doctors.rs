use crate::models::Doctor;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DoctorRequest {
    pub name: String,
    pub speciality: String,
    pub phone: String,
    pub email: String,
    pub address: String,
    pub city: String,
    pub description: String,
}

impl From<DoctorRequest> for Doctor {
    fn from(req: DoctorRequest) -> Self {
        Doctor::new(
            req.name,
            req.speciality,
            req.phone,
            req.email,
            req.address,
            req.city,
            req.description,
        )
    }
}
