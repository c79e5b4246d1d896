mod common;

use common::TestApp;
use directory_service::models::{SpecialityCatalog, DOCTOR_RECORD_ID, SPECIALITIES_DOCUMENT_ID};
use directory_service::services::DirectoryStore;
use service_core::error::AppError;
use mongodb::bson::doc;
use reqwest::{Client, StatusCode};
use serde_json::json;

#[tokio::test]
#[ignore = "Requires MongoDB at MONGODB_URI (default mongodb://localhost:27017)"]
async fn specialities_round_trip_through_mongodb() {
    let app = TestApp::spawn().await;
    let client = Client::new();

    let missing = client
        .get(format!("{}/get_specialities", app.address))
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(missing.status(), StatusCode::NOT_FOUND);

    app.db
        .documents()
        .insert_one(
            doc! { "_id": SPECIALITIES_DOCUMENT_ID, "specialites": "Cardiology" },
            None,
        )
        .await
        .expect("Failed to seed specialities document");

    let added = client
        .put(format!("{}/add_speciality", app.address))
        .query(&[("speciality", "Neurology")])
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(added.status(), StatusCode::OK);

    let listed: Vec<String> = client
        .get(format!("{}/get_specialities", app.address))
        .send()
        .await
        .expect("Failed to execute request")
        .json()
        .await
        .expect("Failed to parse JSON");
    assert_eq!(listed, ["Cardiology", "Neurology"]);

    let catalog = app
        .db
        .load_specialities()
        .await
        .expect("Failed to load specialities")
        .expect("Specialities document missing");
    assert_eq!(catalog, SpecialityCatalog::new(listed));

    app.cleanup().await;
}

#[tokio::test]
#[ignore = "Requires MongoDB at MONGODB_URI (default mongodb://localhost:27017)"]
async fn doctors_are_inserted_as_new_documents() {
    let app = TestApp::spawn().await;
    let client = Client::new();

    for name in ["Amina Diallo", "Jean Mbaye"] {
        let response = client
            .post(format!("{}/add_doctor", app.address))
            .json(&json!({
                "name": name,
                "speciality": "Cardiology",
                "phone": "+221 77 000 00 00",
                "email": "contact@example.org",
                "address": "12 Rue Carnot",
                "city": "Dakar",
                "description": "Cardiologist"
            }))
            .send()
            .await
            .expect("Failed to execute request");
        assert_eq!(response.status(), StatusCode::OK);
    }

    let count = app
        .db
        .documents()
        .count_documents(doc! { "id": DOCTOR_RECORD_ID }, None)
        .await
        .expect("Failed to count doctors");
    assert_eq!(count, 2);

    app.cleanup().await;
}

#[tokio::test]
#[ignore = "Requires MongoDB at MONGODB_URI (default mongodb://localhost:27017)"]
async fn saving_a_removed_document_is_a_database_error() {
    let app = TestApp::spawn().await;

    let err = app
        .db
        .save_specialities(&SpecialityCatalog::new(vec!["Cardiology".into()]))
        .await
        .expect_err("Save should fail without a stored document");
    assert!(matches!(err, AppError::DatabaseError(_)));

    app.cleanup().await;
}
