use async_trait::async_trait;
use mongodb::{
    bson::{doc, oid::ObjectId, Bson, DateTime as BsonDateTime, Document},
    options::ClientOptions,
    Client as MongoClient, Database,
};
use serde::Serialize;
use service_core::error::AppError;
use std::sync::Mutex;
use std::time::Duration;

/// Upper bound on collection names reported by the `/test` diagnostics.
pub const MAX_LISTED_COLLECTIONS: usize = 10;

const DEFAULT_SERVER_SELECTION_TIMEOUT: Duration = Duration::from_secs(5);

/// Gateway to the document store.
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Insert `document` into `collection` and return the generated identifier.
    async fn create_document(&self, collection: &str, document: Document)
        -> Result<String, AppError>;

    /// All collection names in the database.
    async fn collection_names(&self) -> Result<Vec<String>, AppError>;

    async fn health_check(&self) -> Result<(), AppError>;

    fn database_name(&self) -> Option<String>;

    /// Collection names, capped at [`MAX_LISTED_COLLECTIONS`].
    async fn list_collections(&self) -> Result<Vec<String>, AppError> {
        let mut names = self.collection_names().await?;
        names.truncate(MAX_LISTED_COLLECTIONS);
        Ok(names)
    }
}

/// Convert a payload into a plain key/value document.
pub fn to_document<T: Serialize>(payload: &T) -> Result<Document, AppError> {
    mongodb::bson::to_document(payload).map_err(|e| {
        tracing::error!("Failed to convert payload to BSON: {}", e);
        AppError::InternalError(anyhow::anyhow!("Failed to convert payload to BSON: {}", e))
    })
}

/// Stamp `created_at` and `updated_at` on a document about to be inserted.
fn with_timestamps(mut document: Document) -> Document {
    let now = BsonDateTime::now();
    document.insert("created_at", now);
    document.insert("updated_at", now);
    document
}

fn id_to_string(id: Bson) -> String {
    match id {
        Bson::ObjectId(oid) => oid.to_hex(),
        Bson::String(s) => s,
        other => other.to_string(),
    }
}

#[derive(Clone)]
pub struct MongoDb {
    client: MongoClient,
    db: Database,
}

impl MongoDb {
    pub async fn connect(uri: &str, database: &str) -> Result<Self, AppError> {
        tracing::info!(database = %database, "Connecting to MongoDB");
        let mut options = ClientOptions::parse(uri).await.map_err(|e| {
            tracing::error!("Invalid MongoDB connection string: {}", e);
            AppError::DatabaseError(anyhow::anyhow!(e.to_string()))
        })?;
        if options.server_selection_timeout.is_none() {
            options.server_selection_timeout = Some(DEFAULT_SERVER_SELECTION_TIMEOUT);
        }
        options.app_name.get_or_insert_with(|| "garden-service".to_string());

        let client = MongoClient::with_options(options).map_err(|e| {
            tracing::error!("Failed to create MongoDB client: {}", e);
            AppError::DatabaseError(anyhow::anyhow!(e.to_string()))
        })?;
        let db = client.database(database);
        tracing::info!(database = %database, "MongoDB client ready");
        Ok(Self { client, db })
    }

    pub fn client(&self) -> &MongoClient {
        &self.client
    }
}

#[async_trait]
impl DocumentStore for MongoDb {
    async fn create_document(
        &self,
        collection: &str,
        document: Document,
    ) -> Result<String, AppError> {
        let result = self
            .db
            .collection::<Document>(collection)
            .insert_one(with_timestamps(document), None)
            .await
            .map_err(|e| {
                tracing::error!(collection = %collection, "Failed to insert document: {}", e);
                AppError::DatabaseError(anyhow::anyhow!(e.to_string()))
            })?;

        Ok(id_to_string(result.inserted_id))
    }

    async fn collection_names(&self) -> Result<Vec<String>, AppError> {
        self.db.list_collection_names(None).await.map_err(|e| {
            tracing::warn!("Failed to list collections: {}", e);
            AppError::DatabaseError(anyhow::anyhow!(e.to_string()))
        })
    }

    async fn health_check(&self) -> Result<(), AppError> {
        self.client
            .database("admin")
            .run_command(doc! { "ping": 1 }, None)
            .await
            .map_err(|e| {
                tracing::error!("MongoDB health check failed: {}", e);
                AppError::DatabaseError(anyhow::anyhow!(e.to_string()))
            })?;
        Ok(())
    }

    fn database_name(&self) -> Option<String> {
        Some(self.db.name().to_string())
    }
}

/// In-memory store for tests and local runs without MongoDB.
pub struct MockDocumentStore {
    documents: Mutex<Vec<(String, Document)>>,
    seeded_collections: Vec<String>,
    failure: Option<String>,
    name: Option<String>,
}

impl Default for MockDocumentStore {
    fn default() -> Self {
        Self::new()
    }
}

impl MockDocumentStore {
    pub fn new() -> Self {
        Self {
            documents: Mutex::new(Vec::new()),
            seeded_collections: Vec::new(),
            failure: None,
            name: Some("mock_db".to_string()),
        }
    }

    /// A store whose every operation fails with `message`, as an unreachable server would.
    pub fn failing(message: impl Into<String>) -> Self {
        Self {
            failure: Some(message.into()),
            ..Self::new()
        }
    }

    /// Report these collections in addition to those created by inserts.
    pub fn with_collections<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.seeded_collections = names.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_name(mut self, name: Option<&str>) -> Self {
        self.name = name.map(str::to_string);
        self
    }

    /// Documents inserted into `collection`, in insertion order.
    pub fn inserted(&self, collection: &str) -> Vec<Document> {
        self.documents
            .lock()
            .map(|docs| {
                docs.iter()
                    .filter(|(c, _)| c == collection)
                    .map(|(_, d)| d.clone())
                    .collect()
            })
            .unwrap_or_default()
    }

    pub fn insert_count(&self) -> usize {
        self.documents.lock().map(|docs| docs.len()).unwrap_or(0)
    }

    fn check_failure(&self) -> Result<(), AppError> {
        match &self.failure {
            Some(message) => Err(AppError::DatabaseError(anyhow::anyhow!(message.clone()))),
            None => Ok(()),
        }
    }
}

#[async_trait]
impl DocumentStore for MockDocumentStore {
    async fn create_document(
        &self,
        collection: &str,
        document: Document,
    ) -> Result<String, AppError> {
        self.check_failure()?;

        let id = ObjectId::new();
        let mut document = with_timestamps(document);
        document.insert("_id", id);

        self.documents
            .lock()
            .map_err(|e| anyhow::anyhow!("Mock store mutex poisoned: {}", e))?
            .push((collection.to_string(), document));

        Ok(id.to_hex())
    }

    async fn collection_names(&self) -> Result<Vec<String>, AppError> {
        self.check_failure()?;

        let mut names = self.seeded_collections.clone();
        let docs = self
            .documents
            .lock()
            .map_err(|e| anyhow::anyhow!("Mock store mutex poisoned: {}", e))?;
        for (collection, _) in docs.iter() {
            if !names.contains(collection) {
                names.push(collection.clone());
            }
        }
        Ok(names)
    }

    async fn health_check(&self) -> Result<(), AppError> {
        self.check_failure()
    }

    fn database_name(&self) -> Option<String> {
        self.name.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn object_ids_render_as_hex() {
        let oid = ObjectId::new();
        assert_eq!(id_to_string(Bson::ObjectId(oid)), oid.to_hex());
        assert_eq!(id_to_string(Bson::String("abc".to_string())), "abc");
    }

    #[test]
    fn timestamps_are_stamped() {
        let document = with_timestamps(doc! { "name": "Ava" });
        assert!(document.get_datetime("created_at").is_ok());
        assert_eq!(
            document.get_datetime("created_at").ok(),
            document.get_datetime("updated_at").ok()
        );
    }

    #[tokio::test]
    async fn mock_store_records_inserts() {
        let store = MockDocumentStore::new();
        let id = store
            .create_document("contactinquiry", doc! { "name": "Ava" })
            .await
            .unwrap();

        assert_eq!(id.len(), 24);
        let inserted = store.inserted("contactinquiry");
        assert_eq!(inserted.len(), 1);
        assert_eq!(inserted[0].get_str("name").unwrap(), "Ava");
        assert_eq!(inserted[0].get_object_id("_id").unwrap().to_hex(), id);
    }

    #[tokio::test]
    async fn list_collections_is_capped() {
        let store = MockDocumentStore::new()
            .with_collections((0..15).map(|i| format!("collection_{}", i)));

        assert_eq!(store.collection_names().await.unwrap().len(), 15);
        let listed = store.list_collections().await.unwrap();
        assert_eq!(listed.len(), MAX_LISTED_COLLECTIONS);
        assert_eq!(listed[0], "collection_0");
    }

    #[tokio::test]
    async fn failing_store_rejects_everything() {
        let store = MockDocumentStore::failing("connection refused");

        let err = store
            .create_document("contactinquiry", doc! {})
            .await
            .unwrap_err();
        assert_eq!(err.to_string(), "Database error: connection refused");
        assert!(store.list_collections().await.is_err());
        assert!(store.health_check().await.is_err());
        assert_eq!(store.insert_count(), 0);
    }
}
