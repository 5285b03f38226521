use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A service the company offers, shown on the website's services section.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ServiceOffering {
    #[schema(example = "Lawn Care")]
    pub title: String,
    pub description: String,
    /// Icon name understood by the frontend.
    #[schema(example = "leaf")]
    pub icon: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Testimonial {
    #[schema(example = "Ava M.")]
    pub name: String,
    pub quote: String,
    /// Star rating from 1 to 5.
    #[schema(example = 5, minimum = 1, maximum = 5)]
    pub rating: u8,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ServicesResponse {
    pub services: Vec<ServiceOffering>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct TestimonialsResponse {
    pub testimonials: Vec<Testimonial>,
}
