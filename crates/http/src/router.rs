//! Router builder for the bookshelf HTTP server

use axum::{
    extract::Request,
    http::{HeaderValue, StatusCode},
    routing::get,
    Router,
};
use std::time::Duration;
use tower_http::{
    cors::{Any, CorsLayer},
    request_id::{MakeRequestId, PropagateRequestIdLayer, RequestId, SetRequestIdLayer},
    timeout::TimeoutLayer,
    trace::{DefaultMakeSpan, DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use uuid::{NoContext, Timestamp, Uuid};

use bookshelf_kernel::ModuleRegistry;

/// Prefix every module is mounted under
pub const API_PREFIX: &str = "/api/v1";

/// Full path of a module-relative route, e.g. `("books", "/{id}")` -> `/api/v1/books/{id}`
pub fn api_path(module_name: &str, path: &str) -> String {
    match path {
        "" | "/" => format!("{}/{}", API_PREFIX, module_name),
        _ => format!("{}/{}{}", API_PREFIX, module_name, path),
    }
}

/// Builder for constructing the main HTTP router
///
/// Layers only wrap the routes added before them, so add routes and modules
/// first and middleware last.
pub struct RouterBuilder {
    router: Router,
}

impl RouterBuilder {
    /// Create a new router builder
    pub fn new() -> Self {
        Self {
            router: Router::new(),
        }
    }

    /// Add a route to the router
    pub fn route(mut self, path: &str, route: axum::routing::MethodRouter) -> Self {
        self.router = self.router.route(path, route);
        self
    }

    /// Mount a module's router under `/api/v1/{module_name}`
    pub fn mount_module(mut self, module_name: &str, module_router: Router) -> Self {
        let api_path = api_path(module_name, "");
        self.router = self.router.nest(&api_path, module_router);
        self
    }

    /// Add tracing middleware
    pub fn with_tracing(mut self) -> Self {
        self.router = self.router.layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().include_headers(true))
                .on_request(DefaultOnRequest::new().level(tracing::Level::INFO))
                .on_response(DefaultOnResponse::new().level(tracing::Level::INFO)),
        );
        self
    }

    /// Add CORS middleware
    pub fn with_cors(mut self) -> Self {
        self.router = self.router.layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        );
        self
    }

    /// Add request ID middleware
    ///
    /// Generates an `x-request-id` when the client did not send one and echoes
    /// it back on the response.
    pub fn with_request_id(mut self) -> Self {
        self.router = self
            .router
            .layer(PropagateRequestIdLayer::x_request_id())
            .layer(SetRequestIdLayer::x_request_id(MakeRequestUuidV7));
        self
    }

    /// Add timeout middleware; requests running past `timeout_ms` get a 408
    pub fn with_timeout(mut self, timeout_ms: u64) -> Self {
        self.router = self.router.layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            Duration::from_millis(timeout_ms),
        ));
        self
    }

    /// Add OpenAPI documentation by collecting fragments from all modules
    pub fn with_openapi(mut self, registry: &ModuleRegistry) -> Self {
        let openapi_doc = collect_openapi(registry);

        // Deserialize the merged document into a utoipa OpenApi object
        // so SwaggerUi can serve it
        let openapi_obj: utoipa::openapi::OpenApi =
            match serde_json::from_value(openapi_doc.clone()) {
                Ok(openapi) => openapi,
                Err(err) => {
                    tracing::warn!(error = %err, "merged OpenAPI document is invalid; serving bare document");
                    utoipa::openapi::OpenApiBuilder::new()
                        .info(
                            utoipa::openapi::InfoBuilder::new()
                                .title("Bookshelf API")
                                .version("1.0.0")
                                .build(),
                        )
                        .build()
                }
            };

        // Mount Swagger UI at /swagger-ui with the merged document
        self.router = self.router.merge(
            utoipa_swagger_ui::SwaggerUi::new("/swagger-ui")
                .url("/api-docs/openapi.json", openapi_obj),
        );

        // Also serve the raw JSON document at /docs/openapi.json for external consumers
        self.router = self.router.route(
            "/docs/openapi.json",
            get(move || async move { axum::Json(openapi_doc.clone()) }),
        );

        self
    }

    /// Build the final router
    pub fn build(self) -> Router {
        self.router
    }
}

impl Default for RouterBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Merge the base document with every module's `paths` and `components.schemas`
pub fn collect_openapi(registry: &ModuleRegistry) -> serde_json::Value {
    let mut openapi_doc = serde_json::json!({
        "openapi": "3.1.0",
        "info": {
            "title": "Bookshelf API",
            "version": "1.0.0",
            "description": "Books and authors CRUD API"
        },
        "paths": {},
        "components": {
            "schemas": {}
        }
    });

    // Failure envelope shared by every endpoint
    openapi_doc["components"]["schemas"]["ErrorEnvelope"] = serde_json::json!({
        "type": "object",
        "properties": {
            "is_valid": {
                "type": "boolean",
                "enum": [false]
            },
            "error": {
                "type": "string"
            },
            "object": {
                "type": "null"
            }
        },
        "required": ["is_valid", "error", "object"]
    });

    openapi_doc["paths"]["/healthz"] = serde_json::json!({
        "get": {
            "summary": "Health check",
            "responses": {
                "200": {
                    "description": "OK",
                    "content": {
                        "text/plain": {
                            "schema": {
                                "type": "string"
                            }
                        }
                    }
                }
            }
        }
    });

    for module in registry.modules() {
        let Some(module_doc) = module.openapi() else {
            continue;
        };

        if let Some(paths) = module_doc.get("paths").and_then(|p| p.as_object()) {
            for (path, path_item) in paths {
                openapi_doc["paths"][api_path(module.name(), path)] = path_item.clone();
            }
        }

        if let Some(schemas) = module_doc
            .get("components")
            .and_then(|c| c.get("schemas"))
            .and_then(|s| s.as_object())
        {
            for (schema_name, schema_def) in schemas {
                openapi_doc["components"]["schemas"][schema_name] = schema_def.clone();
            }
        }
    }

    openapi_doc
}

/// Request ID generator producing time-ordered UUIDv7 values
#[derive(Clone, Copy, Default)]
pub struct MakeRequestUuidV7;

impl MakeRequestId for MakeRequestUuidV7 {
    fn make_request_id<B>(&mut self, _request: &Request<B>) -> Option<RequestId> {
        let request_id = Uuid::new_v7(Timestamp::now(NoContext))
            .to_string()
            .parse::<HeaderValue>()
            .ok()?;
        Some(RequestId::new(request_id))
    }
}
