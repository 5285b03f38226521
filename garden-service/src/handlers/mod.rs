pub mod catalog;
pub mod contact;
pub mod diagnostics;
pub mod metrics;
pub mod root;

pub use catalog::{get_services, get_testimonials};
pub use contact::submit_contact;
pub use diagnostics::test_database;
pub use root::read_root;
