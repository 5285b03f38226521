use tower_http::cors::CorsLayer;

/// Fully open CORS: any origin, method and header, with credentials.
///
/// The request's `Origin` and requested headers are mirrored back because browsers
/// reject a literal `*` when credentials are allowed.
pub fn permissive_cors() -> CorsLayer {
    CorsLayer::very_permissive()
}
