pub mod models;
pub mod routes;

use async_trait::async_trait;
use axum::Router;
use bookshelf_kernel::{InitCtx, Module};
use sea_orm::DatabaseConnection;
use serde_json::json;

use routes::AuthorsState;

/// Authors resource: CRUD over `authors`, each author eager-loading their books
pub struct AuthorsModule {
    state: AuthorsState,
}

impl AuthorsModule {
    pub fn new(db: DatabaseConnection) -> Self {
        Self {
            state: AuthorsState { db },
        }
    }
}

#[async_trait]
impl Module for AuthorsModule {
    fn name(&self) -> &'static str {
        "authors"
    }

    async fn init(&self, ctx: &InitCtx<'_>) -> anyhow::Result<()> {
        tracing::info!(
            module = self.name(),
            environment = ?ctx.settings.environment,
            "authors module initialized"
        );
        Ok(())
    }

    fn routes(&self) -> Router {
        routes::router(self.state.clone())
    }

    fn openapi(&self) -> Option<serde_json::Value> {
        let id_param = json!({
            "name": "id",
            "in": "path",
            "required": true,
            "description": "Author ID",
            "schema": { "type": "integer", "minimum": 0 }
        });
        let error = json!({
            "application/json": {
                "schema": { "$ref": "#/components/schemas/ErrorEnvelope" }
            }
        });
        let author_envelope = json!({
            "application/json": {
                "schema": { "$ref": "#/components/schemas/AuthorEnvelope" }
            }
        });
        let author_input = json!({
            "required": true,
            "content": {
                "application/json": {
                    "schema": { "$ref": "#/components/schemas/AuthorInput" }
                }
            }
        });

        Some(json!({
            "paths": {
                "/": {
                    "get": {
                        "summary": "List authors",
                        "tags": ["Authors"],
                        "responses": {
                            "200": {
                                "description": "Every author with their books",
                                "content": {
                                    "application/json": {
                                        "schema": { "$ref": "#/components/schemas/AuthorListEnvelope" }
                                    }
                                }
                            },
                            "500": { "description": "Store failure", "content": error }
                        }
                    },
                    "post": {
                        "summary": "Create an author",
                        "tags": ["Authors"],
                        "requestBody": author_input,
                        "responses": {
                            "201": { "description": "Created author", "content": author_envelope },
                            "400": { "description": "Invalid input", "content": error },
                            "422": { "description": "Rejected by the store", "content": error }
                        }
                    }
                },
                "/{id}": {
                    "get": {
                        "summary": "Get an author by ID",
                        "tags": ["Authors"],
                        "parameters": [id_param],
                        "responses": {
                            "200": { "description": "Author with their books", "content": author_envelope },
                            "400": { "description": "Invalid ID format", "content": error },
                            "404": { "description": "Author not found", "content": error }
                        }
                    },
                    "put": {
                        "summary": "Rename an author",
                        "tags": ["Authors"],
                        "parameters": [id_param],
                        "requestBody": author_input,
                        "responses": {
                            "200": { "description": "Updated author", "content": author_envelope },
                            "400": { "description": "Invalid input or store failure", "content": error },
                            "404": { "description": "Author not found", "content": error }
                        }
                    },
                    "delete": {
                        "summary": "Delete an author",
                        "tags": ["Authors"],
                        "parameters": [id_param],
                        "responses": {
                            "204": { "description": "No Content" },
                            "400": { "description": "Invalid ID format", "content": error },
                            "404": { "description": "Author not found", "content": error },
                            "422": { "description": "Author still owns books", "content": error }
                        }
                    }
                }
            },
            "components": {
                "schemas": {
                    "Author": {
                        "type": "object",
                        "properties": {
                            "id": { "type": "integer", "description": "Unique identifier for the author" },
                            "name": { "type": "string", "description": "Author's name" },
                            "books": {
                                "type": "array",
                                "items": {
                                    "type": "object",
                                    "properties": {
                                        "id": { "type": "integer" },
                                        "name": { "type": "string" },
                                        "author_id": { "type": "integer" }
                                    }
                                }
                            }
                        },
                        "required": ["id", "name"]
                    },
                    "AuthorEnvelope": {
                        "type": "object",
                        "properties": {
                            "is_valid": { "type": "boolean" },
                            "error": { "type": "string" },
                            "object": { "$ref": "#/components/schemas/Author" }
                        },
                        "required": ["is_valid", "error", "object"]
                    },
                    "AuthorListEnvelope": {
                        "type": "object",
                        "properties": {
                            "is_valid": { "type": "boolean" },
                            "error": { "type": "string" },
                            "object": {
                                "type": "array",
                                "items": { "$ref": "#/components/schemas/Author" }
                            }
                        },
                        "required": ["is_valid", "error", "object"]
                    },
                    "AuthorInput": {
                        "type": "object",
                        "properties": {
                            "name": { "type": "string", "description": "Author's name" }
                        },
                        "required": ["name"]
                    }
                }
            }
        }))
    }

    async fn start(&self, _ctx: &InitCtx<'_>) -> anyhow::Result<()> {
        tracing::info!(module = self.name(), "authors module started");
        Ok(())
    }

    async fn stop(&self) -> anyhow::Result<()> {
        tracing::info!(module = self.name(), "authors module stopped");
        Ok(())
    }
}

/// Create a new instance of the authors module
pub fn create_module(db: DatabaseConnection) -> std::sync::Arc<dyn Module> {
    std::sync::Arc::new(AuthorsModule::new(db))
}
