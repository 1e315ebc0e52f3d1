//! OpenAPI document for the HTTP surface, served through Swagger UI.

use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};

use crate::dtos::sale::SalePayload;
use crate::handlers::{root, sale};
use crate::models::sale::{Sale, SaleDetail};

pub const SWAGGER_UI_PATH: &str = "/swagger-ui";
pub const OPENAPI_JSON_PATH: &str = "/api-docs/openapi.json";

#[derive(OpenApi)]
#[openapi(
    info(title = "Point of Sale API", description = "CRUD over sales records"),
    paths(
        root::hello,
        sale::list_sales,
        sale::create_sale,
        sale::get_sale,
        sale::update_sale,
        sale::delete_sale
    ),
    components(schemas(Sale, SaleDetail, SalePayload)),
    modifiers(&BearerSecurity),
    security(("Bearer" = [])),
    tags(
        (name = "sales", description = "Sale records, bearer token required"),
        (name = "info", description = "Service information")
    )
)]
pub struct ApiDoc;

/// Registers the `Bearer` JWT scheme the global security requirement points at.
struct BearerSecurity;

impl Modify for BearerSecurity {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi.components.get_or_insert_with(Default::default);
        components.add_security_scheme(
            "Bearer",
            SecurityScheme::Http(
                HttpBuilder::new()
                    .scheme(HttpAuthScheme::Bearer)
                    .bearer_format("JWT")
                    .description(Some("Paste a token issued for this service"))
                    .build(),
            ),
        );
    }
}
