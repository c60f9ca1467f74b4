pub mod models;
pub mod routes;

use async_trait::async_trait;
use axum::Router;
use bookshelf_kernel::{InitCtx, Module};
use sea_orm::DatabaseConnection;
use serde_json::json;

use routes::BooksState;

/// Books resource: CRUD over `books`, each book eager-loading its author
pub struct BooksModule {
    state: BooksState,
}

impl BooksModule {
    pub fn new(db: DatabaseConnection) -> Self {
        Self {
            state: BooksState { db },
        }
    }
}

#[async_trait]
impl Module for BooksModule {
    fn name(&self) -> &'static str {
        "books"
    }

    async fn init(&self, ctx: &InitCtx<'_>) -> anyhow::Result<()> {
        tracing::info!(
            module = self.name(),
            environment = ?ctx.settings.environment,
            "books module initialized"
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
            "description": "Book ID",
            "schema": { "type": "integer", "minimum": 0 }
        });
        let error = json!({
            "application/json": {
                "schema": { "$ref": "#/components/schemas/ErrorEnvelope" }
            }
        });
        let book_envelope = json!({
            "application/json": {
                "schema": { "$ref": "#/components/schemas/BookEnvelope" }
            }
        });

        Some(json!({
            "paths": {
                "/": {
                    "get": {
                        "summary": "List books",
                        "tags": ["Books"],
                        "responses": {
                            "200": {
                                "description": "Every book with its author",
                                "content": {
                                    "application/json": {
                                        "schema": { "$ref": "#/components/schemas/BookListEnvelope" }
                                    }
                                }
                            },
                            "500": { "description": "Store failure", "content": error }
                        }
                    },
                    "post": {
                        "summary": "Create a book",
                        "tags": ["Books"],
                        "requestBody": {
                            "required": true,
                            "content": {
                                "application/json": {
                                    "schema": { "$ref": "#/components/schemas/CreateBook" }
                                }
                            }
                        },
                        "responses": {
                            "201": { "description": "Created book", "content": book_envelope },
                            "400": { "description": "Invalid input", "content": error },
                            "422": { "description": "Rejected by the store", "content": error }
                        }
                    }
                },
                "/{id}": {
                    "get": {
                        "summary": "Get a book by ID",
                        "tags": ["Books"],
                        "parameters": [id_param],
                        "responses": {
                            "200": { "description": "Book with its author", "content": book_envelope },
                            "400": { "description": "Invalid ID format", "content": error },
                            "404": { "description": "Book not found", "content": error }
                        }
                    },
                    "put": {
                        "summary": "Rename a book",
                        "tags": ["Books"],
                        "parameters": [id_param],
                        "requestBody": {
                            "required": true,
                            "content": {
                                "application/json": {
                                    "schema": { "$ref": "#/components/schemas/UpdateBook" }
                                }
                            }
                        },
                        "responses": {
                            "200": { "description": "Updated book", "content": book_envelope },
                            "400": { "description": "Invalid input or store failure", "content": error },
                            "404": { "description": "Book not found", "content": error }
                        }
                    },
                    "delete": {
                        "summary": "Delete a book",
                        "tags": ["Books"],
                        "parameters": [id_param],
                        "responses": {
                            "204": { "description": "No Content" },
                            "400": { "description": "Invalid ID format", "content": error },
                            "404": { "description": "Book not found", "content": error },
                            "422": { "description": "Rejected by the store", "content": error }
                        }
                    }
                }
            },
            "components": {
                "schemas": {
                    "Book": {
                        "type": "object",
                        "properties": {
                            "id": { "type": "integer", "description": "Unique identifier for the book" },
                            "name": { "type": "string", "description": "Title of the book" },
                            "author_id": { "type": "integer", "description": "Owning author" },
                            "author": {
                                "type": "object",
                                "properties": {
                                    "id": { "type": "integer" },
                                    "name": { "type": "string" }
                                }
                            }
                        },
                        "required": ["id", "name", "author_id"]
                    },
                    "BookEnvelope": {
                        "type": "object",
                        "properties": {
                            "is_valid": { "type": "boolean" },
                            "error": { "type": "string" },
                            "object": { "$ref": "#/components/schemas/Book" }
                        },
                        "required": ["is_valid", "error", "object"]
                    },
                    "BookListEnvelope": {
                        "type": "object",
                        "properties": {
                            "is_valid": { "type": "boolean" },
                            "error": { "type": "string" },
                            "object": {
                                "type": "array",
                                "items": { "$ref": "#/components/schemas/Book" }
                            }
                        },
                        "required": ["is_valid", "error", "object"]
                    },
                    "CreateBook": {
                        "type": "object",
                        "properties": {
                            "name": { "type": "string", "description": "Title of the book" },
                            "author_id": {
                                "description": "Owning author ID as a numeric string or integer",
                                "oneOf": [{ "type": "string" }, { "type": "integer" }]
                            }
                        },
                        "required": ["name", "author_id"]
                    },
                    "UpdateBook": {
                        "type": "object",
                        "properties": {
                            "name": { "type": "string", "description": "New title" }
                        },
                        "required": ["name"]
                    }
                }
            }
        }))
    }

    async fn start(&self, _ctx: &InitCtx<'_>) -> anyhow::Result<()> {
        tracing::info!(module = self.name(), "books module started");
        Ok(())
    }

    async fn stop(&self) -> anyhow::Result<()> {
        tracing::info!(module = self.name(), "books module stopped");
        Ok(())
    }
}

/// Create a new instance of the books module
pub fn create_module(db: DatabaseConnection) -> std::sync::Arc<dyn Module> {
    std::sync::Arc::new(BooksModule::new(db))
}
