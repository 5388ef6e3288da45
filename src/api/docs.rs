//! Interactive API documentation.
//!
//! The OpenAPI document is hand-written next to the routes it describes and
//! rendered by a Swagger UI page loaded from a CDN.

use axum::response::{Html, Json};
use serde_json::{json, Value};

pub const SWAGGER_UI_PATH: &str = "/swagger";
pub const OPENAPI_PATH: &str = "/swagger/v1/swagger.json";

/// `GET /swagger`
pub async fn swagger_ui() -> Html<String> {
    let html = format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <title>Bee API</title>
    <link rel="stylesheet" type="text/css" href="https://unpkg.com/swagger-ui-dist@5.9.0/swagger-ui.css" />
</head>
<body>
    <div id="swagger-ui"></div>
    <script src="https://unpkg.com/swagger-ui-dist@5.9.0/swagger-ui-bundle.js"></script>
    <script>
        window.onload = function() {{
            SwaggerUIBundle({{
                url: '{}',
                dom_id: '#swagger-ui',
                deepLinking: true
            }});
        }};
    </script>
</body>
</html>
"#,
        OPENAPI_PATH
    );
    Html(html)
}

/// `GET /swagger/v1/swagger.json`
pub async fn openapi_document() -> Json<Value> {
    Json(openapi_spec())
}

fn id_parameter() -> Value {
    json!({
        "name": "id",
        "in": "path",
        "required": true,
        "schema": { "type": "integer", "format": "int32" }
    })
}

fn bee_body() -> Value {
    json!({
        "required": true,
        "content": {
            "application/json": { "schema": { "$ref": "#/components/schemas/BeeInput" } }
        }
    })
}

fn bee_response(description: &str) -> Value {
    json!({
        "description": description,
        "content": {
            "application/json": { "schema": { "$ref": "#/components/schemas/Bee" } }
        }
    })
}

pub fn openapi_spec() -> Value {
    json!({
        "openapi": "3.0.3",
        "info": {
            "title": "Bee API",
            "version": env!("CARGO_PKG_VERSION"),
            "description": "In-memory CRUD service for bees."
        },
        "servers": [{ "url": "/", "description": "Current server" }],
        "paths": {
            "/": {
                "get": {
                    "summary": "Greeting",
                    "responses": {
                        "200": {
                            "description": "Static greeting",
                            "content": { "text/plain": { "schema": { "type": "string" } } }
                        }
                    }
                }
            },
            "/bees": {
                "get": {
                    "summary": "List all bees",
                    "responses": {
                        "200": {
                            "description": "Every stored bee, ordered by id",
                            "content": {
                                "application/json": {
                                    "schema": {
                                        "type": "array",
                                        "items": { "$ref": "#/components/schemas/Bee" }
                                    }
                                }
                            }
                        }
                    }
                },
                "post": {
                    "summary": "Create a bee",
                    "requestBody": bee_body(),
                    "responses": {
                        "201": {
                            "description": "Created; Location points at the new bee",
                            "headers": { "Location": { "schema": { "type": "string" } } },
                            "content": {
                                "application/json": { "schema": { "$ref": "#/components/schemas/Bee" } }
                            }
                        }
                    }
                }
            },
            "/bees/{id}": {
                "get": {
                    "summary": "Fetch one bee",
                    "parameters": [id_parameter()],
                    "responses": {
                        "200": bee_response("The bee"),
                        "404": { "description": "No bee with this id" }
                    }
                },
                "put": {
                    "summary": "Rename a bee",
                    "parameters": [id_parameter()],
                    "requestBody": bee_body(),
                    "responses": {
                        "204": { "description": "Renamed" },
                        "404": { "description": "No bee with this id" }
                    }
                },
                "delete": {
                    "summary": "Delete a bee",
                    "parameters": [id_parameter()],
                    "responses": {
                        "200": bee_response("The deleted bee"),
                        "404": { "description": "No bee with this id" }
                    }
                }
            }
        },
        "components": {
            "schemas": {
                "Bee": {
                    "type": "object",
                    "required": ["id", "name"],
                    "properties": {
                        "id": { "type": "integer", "format": "int32" },
                        "name": { "type": "string" }
                    }
                },
                "BeeInput": {
                    "type": "object",
                    "required": ["name"],
                    "properties": {
                        "name": { "type": "string" }
                    }
                }
            }
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn document_lists_every_bee_operation() {
        let spec = openapi_spec();
        let paths = spec["paths"].as_object().unwrap();

        for method in ["get", "post"] {
            assert!(paths["/bees"].get(method).is_some(), "missing {} /bees", method);
        }
        for method in ["get", "put", "delete"] {
            assert!(paths["/bees/{id}"].get(method).is_some(), "missing {} /bees/{{id}}", method);
        }
    }

    #[tokio::test]
    async fn swagger_page_points_at_the_document() {
        let Html(page) = swagger_ui().await;
        assert!(page.contains(OPENAPI_PATH));
    }
}
