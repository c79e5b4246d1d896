//! The specialities catalog: one document at a fixed key listing every
//! speciality name.

use mongodb::bson::{doc, Bson, Document};
use service_core::error::AppError;

pub const SPECIALITIES_DOCUMENT_ID: &str = "asone:code:specialite";

/// Field name as stored. The spelling is part of the persisted format.
pub const SPECIALITIES_FIELD: &str = "specialites";

pub const SPECIALITIES_NOT_FOUND: &str = "specialities document not found";

/// Normalized view of the specialities document.
///
/// Fields other than `_id` and [`SPECIALITIES_FIELD`] are carried in `extra`
/// and written back untouched.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SpecialityCatalog {
    specialities: Vec<String>,
    extra: Document,
}

impl SpecialityCatalog {
    pub fn new(specialities: Vec<String>) -> Self {
        Self {
            specialities,
            extra: Document::new(),
        }
    }

    /// Build the catalog from a raw stored document.
    ///
    /// Legacy documents may hold a lone string instead of a list; a missing or
    /// null field reads as an empty list.
    pub fn from_document(mut document: Document) -> Result<Self, AppError> {
        document.remove("_id");

        let specialities = match document.remove(SPECIALITIES_FIELD) {
            None | Some(Bson::Null) => Vec::new(),
            Some(Bson::String(name)) => vec![name],
            Some(Bson::Array(values)) => values
                .into_iter()
                .map(|value| match value {
                    Bson::String(name) => Ok(name),
                    other => Err(AppError::DatabaseError(anyhow::anyhow!(
                        "unexpected {:?} entry in {}",
                        other.element_type(),
                        SPECIALITIES_FIELD
                    ))),
                })
                .collect::<Result<Vec<_>, _>>()?,
            Some(other) => {
                return Err(AppError::DatabaseError(anyhow::anyhow!(
                    "unexpected {:?} value for {}",
                    other.element_type(),
                    SPECIALITIES_FIELD
                )))
            }
        };

        Ok(Self {
            specialities,
            extra: document,
        })
    }

    /// Full document to persist, always with the list form of the field.
    pub fn to_document(&self) -> Document {
        let mut document = doc! { "_id": SPECIALITIES_DOCUMENT_ID };
        for (key, value) in &self.extra {
            document.insert(key.clone(), value.clone());
        }
        document.insert(SPECIALITIES_FIELD, self.specialities.clone());
        document
    }

    pub fn specialities(&self) -> &[String] {
        &self.specialities
    }

    pub fn into_specialities(self) -> Vec<String> {
        self.specialities
    }

    /// Append `name` unless an identical entry exists. Returns whether it was added.
    pub fn add(&mut self, name: &str) -> bool {
        if self.contains(name) {
            return false;
        }
        self.specialities.push(name.to_string());
        true
    }

    /// Drop the first entry equal to `name`. Returns whether one was found.
    pub fn remove(&mut self, name: &str) -> bool {
        match self.specialities.iter().position(|s| s == name) {
            Some(index) => {
                self.specialities.remove(index);
                true
            }
            None => false,
        }
    }

    pub fn contains(&self, name: &str) -> bool {
        self.specialities.iter().any(|s| s == name)
    }
}
