pub mod database;
pub mod metrics;

pub use database::{to_document, DocumentStore, MockDocumentStore, MongoDb, MAX_LISTED_COLLECTIONS};
pub use metrics::{get_metrics, init_metrics};
