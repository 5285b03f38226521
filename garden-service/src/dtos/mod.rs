pub mod catalog;
pub mod contact;
pub mod status;

pub use catalog::{ServiceOffering, ServicesResponse, Testimonial, TestimonialsResponse};
pub use contact::{ContactInquiry, ContactResponse};
pub use status::{DiagnosticsReport, StatusMessage};
pub use service_core::error::ErrorResponse;
