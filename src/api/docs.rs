//! Generated API documentation
//!
//! The OpenAPI document is assembled from the handler contract and served
//! next to a Swagger UI page, so the running process documents itself.

use axum::response::Html;
use serde_json::{json, Value};

use crate::api::types::Json;

const SWAGGER_UI_PAGE: &str = r##"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="utf-8"/>
  <title>WHT Teams API</title>
  <link rel="stylesheet" href="https://unpkg.com/swagger-ui-dist@5/swagger-ui.css"/>
</head>
<body>
  <div id="swagger-ui"></div>
  <script src="https://unpkg.com/swagger-ui-dist@5/swagger-ui-bundle.js"></script>
  <script>
    SwaggerUIBundle({
      url: "/docs/openapi.json",
      dom_id: "#swagger-ui"
    });
  </script>
</body>
</html>
"##;

/// GET /docs
pub async fn swagger_ui() -> Html<&'static str> {
    Html(SWAGGER_UI_PAGE)
}

/// GET /docs/openapi.json
pub async fn openapi_json() -> Json<Value> {
    Json(openapi_document())
}

/// Build the OpenAPI 3 document for the service
pub fn openapi_document() -> Value {
    json!({
        "openapi": "3.0.3",
        "info": {
            "title": "WHT Teams API",
            "version": env!("CARGO_PKG_VERSION"),
            "description": "Persons, teams and team membership management.",
            "license": { "name": "MIT" }
        },
        "tags": [
            { "name": "persons", "description": "Person management" },
            { "name": "teams", "description": "Team and membership management" }
        ],
        "paths": {
            "/api/v1/persons": {
                "get": {
                    "tags": ["persons"],
                    "summary": "List all persons",
                    "responses": {
                        "200": body_response("List of persons", "#/components/schemas/PersonList")
                    }
                },
                "post": {
                    "tags": ["persons"],
                    "summary": "Create a person",
                    "requestBody": request_body("#/components/schemas/PersonInput"),
                    "responses": {
                        "201": body_response("Created person", "#/components/schemas/Person"),
                        "400": error_response("Validation failed or email already in use")
                    }
                }
            },
            "/api/v1/persons/{person_id}": {
                "parameters": [path_parameter("person_id")],
                "get": {
                    "tags": ["persons"],
                    "summary": "Fetch a person",
                    "responses": {
                        "200": body_response("The person", "#/components/schemas/Person"),
                        "404": error_response("Person not found")
                    }
                },
                "put": update_person_operation(),
                "patch": update_person_operation(),
                "delete": {
                    "tags": ["persons"],
                    "summary": "Delete a person and its membership links",
                    "responses": {
                        "204": { "description": "Deleted" },
                        "404": error_response("Person not found")
                    }
                }
            },
            "/api/v1/teams": {
                "get": {
                    "tags": ["teams"],
                    "summary": "List all teams with their members",
                    "responses": {
                        "200": body_response("List of teams", "#/components/schemas/TeamList")
                    }
                },
                "post": {
                    "tags": ["teams"],
                    "summary": "Create a team",
                    "requestBody": request_body("#/components/schemas/TeamInput"),
                    "responses": {
                        "201": body_response("Created team", "#/components/schemas/Team"),
                        "400": error_response("Validation failed or name already in use")
                    }
                }
            },
            "/api/v1/teams/{team_id}": {
                "parameters": [path_parameter("team_id")],
                "get": {
                    "tags": ["teams"],
                    "summary": "Fetch a team with its members",
                    "responses": {
                        "200": body_response("The team", "#/components/schemas/Team"),
                        "404": error_response("Team not found")
                    }
                },
                "put": update_team_operation(),
                "patch": update_team_operation(),
                "delete": {
                    "tags": ["teams"],
                    "summary": "Delete a team, discarding its membership links",
                    "responses": {
                        "204": { "description": "Deleted" },
                        "404": error_response("Team not found")
                    }
                }
            },
            "/api/v1/teams/{team_id}/add_member": {
                "parameters": [path_parameter("team_id")],
                "post": {
                    "tags": ["teams"],
                    "summary": "Add a person to the team",
                    "requestBody": request_body("#/components/schemas/TeamMember"),
                    "responses": {
                        "200": body_response("The refreshed team", "#/components/schemas/Team"),
                        "400": error_response("Person is already a member"),
                        "404": error_response("Team or person not found")
                    }
                }
            },
            "/api/v1/teams/{team_id}/remove_member": {
                "parameters": [path_parameter("team_id")],
                "post": {
                    "tags": ["teams"],
                    "summary": "Remove a person from the team",
                    "requestBody": request_body("#/components/schemas/TeamMember"),
                    "responses": {
                        "200": body_response("The refreshed team", "#/components/schemas/Team"),
                        "400": error_response("Person is not a member"),
                        "404": error_response("Team or person not found")
                    }
                }
            }
        },
        "components": {
            "schemas": {
                "Person": {
                    "type": "object",
                    "required": ["id", "first_name", "last_name", "email"],
                    "properties": {
                        "id": { "type": "string" },
                        "first_name": { "type": "string" },
                        "last_name": { "type": "string" },
                        "email": { "type": "string", "format": "email" },
                        "created_at": { "type": "string", "format": "date-time" },
                        "updated_at": { "type": "string", "format": "date-time" }
                    }
                },
                "PersonInput": {
                    "type": "object",
                    "required": ["first_name", "last_name", "email"],
                    "properties": {
                        "first_name": { "type": "string", "maxLength": 50 },
                        "last_name": { "type": "string", "maxLength": 50 },
                        "email": { "type": "string", "format": "email" }
                    }
                },
                "PersonUpdate": {
                    "type": "object",
                    "properties": {
                        "first_name": { "type": "string", "maxLength": 50 },
                        "last_name": { "type": "string", "maxLength": 50 },
                        "email": { "type": "string", "format": "email" }
                    }
                },
                "PersonList": {
                    "type": "object",
                    "properties": {
                        "persons": {
                            "type": "array",
                            "items": { "$ref": "#/components/schemas/Person" }
                        },
                        "total": { "type": "integer" }
                    }
                },
                "Team": {
                    "type": "object",
                    "required": ["id", "name", "members"],
                    "properties": {
                        "id": { "type": "string" },
                        "name": { "type": "string" },
                        "description": { "type": "string", "nullable": true },
                        "members": {
                            "type": "array",
                            "items": { "$ref": "#/components/schemas/Person" },
                            "readOnly": true
                        },
                        "created_at": { "type": "string", "format": "date-time" },
                        "updated_at": { "type": "string", "format": "date-time" }
                    }
                },
                "TeamInput": {
                    "type": "object",
                    "required": ["name"],
                    "properties": {
                        "name": { "type": "string", "minLength": 3, "maxLength": 100 },
                        "description": { "type": "string" }
                    }
                },
                "TeamUpdate": {
                    "type": "object",
                    "properties": {
                        "name": { "type": "string", "minLength": 3, "maxLength": 100 },
                        "description": { "type": "string" }
                    }
                },
                "TeamList": {
                    "type": "object",
                    "properties": {
                        "teams": {
                            "type": "array",
                            "items": { "$ref": "#/components/schemas/Team" }
                        },
                        "total": { "type": "integer" }
                    }
                },
                "TeamMember": {
                    "type": "object",
                    "required": ["person_id"],
                    "properties": {
                        "person_id": { "type": "string" }
                    }
                },
                "Error": {
                    "type": "object",
                    "properties": {
                        "error": {
                            "type": "object",
                            "properties": {
                                "message": { "type": "string" },
                                "type": { "type": "string" },
                                "param": { "type": "string" },
                                "code": { "type": "string" }
                            }
                        }
                    }
                }
            }
        }
    })
}

fn path_parameter(name: &str) -> Value {
    json!({
        "name": name,
        "in": "path",
        "required": true,
        "schema": { "type": "string" }
    })
}

fn request_body(schema_ref: &str) -> Value {
    json!({
        "required": true,
        "content": {
            "application/json": {
                "schema": { "$ref": schema_ref }
            }
        }
    })
}

fn body_response(description: &str, schema_ref: &str) -> Value {
    json!({
        "description": description,
        "content": {
            "application/json": {
                "schema": { "$ref": schema_ref }
            }
        }
    })
}

fn error_response(description: &str) -> Value {
    json!({
        "description": description,
        "content": {
            "application/json": {
                "schema": { "$ref": "#/components/schemas/Error" }
            }
        }
    })
}

fn update_person_operation() -> Value {
    json!({
        "tags": ["persons"],
        "summary": "Update a person",
        "requestBody": request_body("#/components/schemas/PersonUpdate"),
        "responses": {
            "200": body_response("Updated person", "#/components/schemas/Person"),
            "400": error_response("Validation failed or email already in use"),
            "404": error_response("Person not found")
        }
    })
}

fn update_team_operation() -> Value {
    json!({
        "tags": ["teams"],
        "summary": "Update a team",
        "requestBody": request_body("#/components/schemas/TeamUpdate"),
        "responses": {
            "200": body_response("Updated team", "#/components/schemas/Team"),
            "400": error_response("Validation failed or name already in use"),
            "404": error_response("Team not found")
        }
    })
}
