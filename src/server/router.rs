//! HTTP routing and OpenAPI documentation configuration.
//!
//! Every API endpoint is registered here with its OpenAPI specification,
//! and Swagger UI is configured to serve interactive documentation at
//! `/api/docs`.

use axum::Router;
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{controller, model::app::AppState};

/// Builds the application's HTTP router with all API endpoints and Swagger UI documentation.
///
/// Handlers sharing a path are registered in a single `routes!` call so
/// they merge into one method router.
///
/// # Registered Endpoints
/// - `GET /api/profile` - Look up profiles by id, email, activation token, or username
/// - `POST /api/profile` - Create a profile
/// - `PUT /api/profile` - Update the authenticated profile
/// - `DELETE /api/profile` - Delete the authenticated profile
/// - `GET /api/item` - Look up items by id, owner, search term, cost, or all
/// - `POST /api/item` - Create an item owned by the authenticated profile
/// - `PUT /api/item/{id}` - Update an owned item
/// - `DELETE /api/item/{id}` - Delete an owned item
/// - `GET /api/favorite` - Look up favorites by composite key or either component
/// - `POST /api/favorite` - Favorite an item as the authenticated profile
/// - `DELETE /api/favorite` - Unfavorite an item as the authenticated profile
///
/// The OpenAPI specification is served at `/api/docs/openapi.json`.
pub fn routes() -> Router<AppState> {
    #[derive(OpenApi)]
    #[openapi(info(title = "Contempo", description = "Contempo API"), tags(
        (name = controller::profile::PROFILE_TAG, description = "Profile API routes"),
        (name = controller::item::ITEM_TAG, description = "Item API routes"),
        (name = controller::favorite::FAVORITE_TAG, description = "Favorite API routes"),
    ))]
    struct ApiDoc;

    let (routes, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(
            controller::profile::get_profile,
            controller::profile::create_profile,
            controller::profile::update_profile,
            controller::profile::delete_profile
        ))
        .routes(routes!(
            controller::item::get_item,
            controller::item::create_item
        ))
        .routes(routes!(
            controller::item::update_item,
            controller::item::delete_item
        ))
        .routes(routes!(
            controller::favorite::get_favorite,
            controller::favorite::create_favorite,
            controller::favorite::delete_favorite
        ))
        .split_for_parts();

    let routes = routes.merge(SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", api));

    routes
}
