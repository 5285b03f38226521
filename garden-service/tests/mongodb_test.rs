//! Runs against a live MongoDB. Set `TEST_MONGODB_URI` and run with `--ignored`.

use garden_service::config::DatabaseConfig;
use garden_service::services::{to_document, DocumentStore, MongoDb};
use garden_service::dtos::ContactInquiry;
use garden_service::startup::Application;
use uuid::Uuid;

mod common;

fn mongodb_uri() -> String {
    std::env::var("TEST_MONGODB_URI").unwrap_or_else(|_| "mongodb://localhost:27017".to_string())
}

#[tokio::test]
#[ignore = "Requires a running MongoDB (TEST_MONGODB_URI)"]
async fn inquiry_round_trips_through_mongodb() {
    let db_name = format!("garden_test_{}", Uuid::new_v4().simple());
    let db = MongoDb::connect(&mongodb_uri(), &db_name)
        .await
        .expect("Failed to connect to MongoDB");
    db.health_check().await.expect("MongoDB not reachable");

    let inquiry = ContactInquiry {
        name: "Ava".to_string(),
        email: "ava@example.com".to_string(),
        message: "Interested in lawn care".to_string(),
        phone: None,
        subject: None,
    };
    let id = db
        .create_document(ContactInquiry::COLLECTION, to_document(&inquiry).unwrap())
        .await
        .expect("Insert failed");
    assert_eq!(id.len(), 24);

    let collections = db.list_collections().await.expect("Listing failed");
    assert!(collections.contains(&ContactInquiry::COLLECTION.to_string()));
    assert_eq!(db.database_name(), Some(db_name.clone()));

    let _ = db.client().database(&db_name).drop(None).await;
}

#[tokio::test]
#[ignore = "Requires a running MongoDB (TEST_MONGODB_URI)"]
async fn application_serves_over_tcp() {
    let db_name = format!("garden_test_{}", Uuid::new_v4().simple());
    let config = common::test_config(DatabaseConfig {
        url: Some(mongodb_uri()),
        name: Some(db_name.clone()),
    });

    let app = Application::build(config)
        .await
        .expect("Failed to build application");
    let port = app.port();
    tokio::spawn(async move {
        app.run_until_stopped().await.ok();
    });

    let address = format!("127.0.0.1:{}", port);
    let mut connected = false;
    for _ in 0..50 {
        if tokio::net::TcpStream::connect(&address).await.is_ok() {
            connected = true;
            break;
        }
        tokio::time::sleep(std::time::Duration::from_millis(50)).await;
    }
    assert!(connected, "server did not start listening");

    let db = MongoDb::connect(&mongodb_uri(), &db_name).await.unwrap();
    let _ = db.client().database(&db_name).drop(None).await;
}
