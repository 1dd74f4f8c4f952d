//! CORS middleware.

use tower_http::cors::CorsLayer;

/// Permissive CORS for all routes.
///
/// The API is called directly from onboarding web frontends on other
/// origins; any origin, method and header is allowed.
pub fn layer() -> CorsLayer {
    CorsLayer::permissive()
}
