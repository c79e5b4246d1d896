pub mod doctor;
pub mod speciality;

pub use doctor::{Doctor, DOCTOR_RECORD_ID};
pub use speciality::{
    SpecialityCatalog, SPECIALITIES_DOCUMENT_ID, SPECIALITIES_FIELD, SPECIALITIES_NOT_FOUND,
};
