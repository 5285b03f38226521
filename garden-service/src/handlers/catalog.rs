use axum::Json;

use crate::dtos::{ServiceOffering, ServicesResponse, Testimonial, TestimonialsResponse};

const SERVICES: [(&str, &str, &str); 4] = [
    (
        "Lawn Care",
        "Mowing, edging, fertilization, and seasonal maintenance.",
        "leaf",
    ),
    (
        "Garden Design",
        "Custom garden planning, planting, and hardscaping.",
        "flower",
    ),
    (
        "Irrigation",
        "Smart irrigation systems and water management.",
        "sprout",
    ),
    (
        "Hedge & Tree Care",
        "Pruning, trimming, and health checks for shrubs and trees.",
        "trees",
    ),
];

const TESTIMONIALS: [(&str, &str, u8); 3] = [
    ("Ava M.", "They transformed our yard into a lush oasis.", 5),
    (
        "Daniel K.",
        "Reliable, professional, and the lawn has never looked better!",
        5,
    ),
    (
        "Priya S.",
        "Designs are stunning and maintenance is hassle-free.",
        5,
    ),
];

pub fn service_offerings() -> Vec<ServiceOffering> {
    SERVICES
        .iter()
        .map(|(title, description, icon)| ServiceOffering {
            title: title.to_string(),
            description: description.to_string(),
            icon: icon.to_string(),
        })
        .collect()
}

pub fn testimonials() -> Vec<Testimonial> {
    TESTIMONIALS
        .iter()
        .map(|(name, quote, rating)| Testimonial {
            name: name.to_string(),
            quote: quote.to_string(),
            rating: *rating,
        })
        .collect()
}

/// List the services offered
#[utoipa::path(
    get,
    path = "/api/services",
    responses(
        (status = 200, description = "Services offered", body = ServicesResponse)
    ),
    tag = "Content"
)]
pub async fn get_services() -> Json<ServicesResponse> {
    Json(ServicesResponse {
        services: service_offerings(),
    })
}

/// List customer testimonials
#[utoipa::path(
    get,
    path = "/api/testimonials",
    responses(
        (status = 200, description = "Customer testimonials", body = TestimonialsResponse)
    ),
    tag = "Content"
)]
pub async fn get_testimonials() -> Json<TestimonialsResponse> {
    Json(TestimonialsResponse {
        testimonials: testimonials(),
    })
}
