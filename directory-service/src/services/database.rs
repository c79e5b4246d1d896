use crate::models::{Doctor, SpecialityCatalog, SPECIALITIES_DOCUMENT_ID};
use crate::services::store::DirectoryStore;
use async_trait::async_trait;
use mongodb::{
    bson::{doc, Bson, Document},
    Client as MongoClient, Collection, Database,
};
use service_core::error::AppError;

/// MongoDB-backed store. The specialities document and doctor records share
/// one collection.
#[derive(Clone)]
pub struct MongoDb {
    client: MongoClient,
    db: Database,
    collection: String,
}

impl MongoDb {
    pub async fn connect(uri: &str, database: &str, collection: &str) -> Result<Self, AppError> {
        tracing::info!("Connecting to MongoDB");
        let client = MongoClient::with_uri_str(uri).await.map_err(|e| {
            tracing::error!("Failed to connect to MongoDB: {}", e);
            AppError::from(e)
        })?;
        let db = client.database(database);
        tracing::info!(
            database = %database,
            collection = %collection,
            "Successfully connected to MongoDB database"
        );
        Ok(Self {
            client,
            db,
            collection: collection.to_string(),
        })
    }

    /// Raw access, used where the stored shape is not known up front.
    pub fn documents(&self) -> Collection<Document> {
        self.db.collection(&self.collection)
    }

    pub fn doctors(&self) -> Collection<Doctor> {
        self.db.collection(&self.collection)
    }

    pub fn client(&self) -> &MongoClient {
        &self.client
    }
}

#[async_trait]
impl DirectoryStore for MongoDb {
    async fn load_specialities(&self) -> Result<Option<SpecialityCatalog>, AppError> {
        let stored = self
            .documents()
            .find_one(doc! { "_id": SPECIALITIES_DOCUMENT_ID }, None)
            .await
            .map_err(|e| {
                tracing::error!("Failed to read specialities document: {}", e);
                AppError::from(e)
            })?;

        stored.map(SpecialityCatalog::from_document).transpose()
    }

    async fn save_specialities(&self, catalog: &SpecialityCatalog) -> Result<(), AppError> {
        let result = self
            .documents()
            .replace_one(
                doc! { "_id": SPECIALITIES_DOCUMENT_ID },
                catalog.to_document(),
                None,
            )
            .await
            .map_err(|e| {
                tracing::error!("Failed to write specialities document: {}", e);
                AppError::from(e)
            })?;

        // Deleted between our read and this write.
        if result.matched_count == 0 {
            tracing::error!("Specialities document vanished before write-back");
            return Err(AppError::DatabaseError(anyhow::anyhow!(
                "conflict: {} was removed before it could be saved",
                SPECIALITIES_DOCUMENT_ID
            )));
        }

        Ok(())
    }

    async fn insert_doctor(&self, doctor: &Doctor) -> Result<String, AppError> {
        let result = self.doctors().insert_one(doctor, None).await.map_err(|e| {
            tracing::error!("Failed to insert doctor record: {}", e);
            AppError::from(e)
        })?;

        Ok(match result.inserted_id {
            Bson::ObjectId(oid) => oid.to_hex(),
            Bson::String(id) => id,
            other => other.to_string(),
        })
    }

    async fn health_check(&self) -> Result<(), AppError> {
        self.client
            .database("admin")
            .run_command(doc! { "ping": 1 }, None)
            .await
            .map_err(|e| {
                tracing::error!("MongoDB health check failed: {}", e);
                AppError::from(e)
            })?;
        Ok(())
    }
}
