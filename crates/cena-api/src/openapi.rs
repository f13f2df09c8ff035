// SPDX-License-Identifier: Apache-2.0

use cena_core::ERROR_CODES;
use cena_model::{CourseType, MealType, MeasurementType, MeasurementUnit};
use serde_json::{json, Value};

use crate::error_mapping::API_ERROR_SCHEMA_REF;

fn error_response(description: &str) -> Value {
    json!({
      "description": description,
      "content": {"application/json": {"schema": {"$ref": API_ERROR_SCHEMA_REF}}}
    })
}

fn hal_response(description: &str, schema: &str) -> Value {
    json!({
      "description": description,
      "content": {"application/hal+json": {"schema": {"$ref": format!("#/components/schemas/{schema}")}}}
    })
}

fn json_body(schema: &str) -> Value {
    json!({
      "required": true,
      "content": {"application/json": {"schema": {"$ref": format!("#/components/schemas/{schema}")}}}
    })
}

fn path_param(name: &str, description: &str) -> Value {
    json!({"name": name, "in": "path", "required": true, "schema": {"type": "string"}, "description": description})
}

fn query_param(name: &str, required: bool, format: Option<&str>) -> Value {
    let mut schema = json!({"type": "string"});
    if let Some(format) = format {
        schema["format"] = Value::String(format.to_string());
    }
    json!({"name": name, "in": "query", "required": required, "schema": schema})
}

fn enum_schema(values: &[&str]) -> Value {
    json!({"type": "string", "enum": values})
}

#[must_use]
pub fn openapi_v1_spec() -> Value {
    let error_codes: Vec<u32> = ERROR_CODES.iter().map(|c| c.value()).collect();
    let measurement_types: Vec<&str> = MeasurementType::ALL.iter().map(|v| v.as_str()).collect();
    let measurement_units: Vec<&str> = MeasurementUnit::ALL.iter().map(|v| v.as_str()).collect();
    let course_types: Vec<&str> = CourseType::ALL.iter().map(|v| v.as_str()).collect();
    let meal_types: Vec<&str> = MealType::ALL.iter().map(|v| v.as_str()).collect();
    let links = json!({"type": "object", "additionalProperties": true});

    json!({
      "openapi": "3.0.3",
      "info": {
        "title": "Cena API",
        "version": "v1"
      },
      "components": {
        "securitySchemes": {
          "basicAuth": {"type": "http", "scheme": "basic"}
        },
        "schemas": {
          "ApiError": {
            "type": "object",
            "additionalProperties": false,
            "required": ["timestamp", "status", "error", "code", "message", "path", "details"],
            "properties": {
              "code": {"type": "integer", "enum": error_codes},
              "details": {"type": "array", "items": {"type": "string"}},
              "error": {"type": "string"},
              "message": {"type": "string"},
              "path": {"type": "string"},
              "status": {"type": "integer"},
              "timestamp": {"type": "string", "format": "date-time"}
            }
          },
          "CourseType": enum_schema(&course_types),
          "Index": {
            "type": "object",
            "properties": {"_links": links}
          },
          "Ingredient": {
            "type": "object",
            "required": ["id", "name", "measurementTypes"],
            "properties": {
              "_links": links,
              "id": {"type": "string", "format": "uuid"},
              "measurementTypes": {"type": "array", "items": {"$ref": "#/components/schemas/MeasurementType"}},
              "name": {"type": "string"}
            }
          },
          "IngredientCollection": {
            "type": "object",
            "properties": {
              "_embedded": {"type": "object", "properties": {"ingredients": {"type": "array", "items": {"$ref": "#/components/schemas/Ingredient"}}}},
              "_links": links
            }
          },
          "IngredientRequest": {
            "type": "object",
            "required": ["name"],
            "properties": {
              "measurementTypes": {"type": "array", "items": {"$ref": "#/components/schemas/MeasurementType"}},
              "name": {"type": "string", "minLength": 1}
            }
          },
          "MealType": enum_schema(&meal_types),
          "MeasurementType": enum_schema(&measurement_types),
          "MeasurementUnit": enum_schema(&measurement_units),
          "Menu": {
            "type": "object",
            "required": ["id", "date", "mealType", "covers", "mainCourseRecipeIds"],
            "properties": {
              "_links": links,
              "covers": {"type": "integer", "minimum": 1},
              "date": {"type": "string", "format": "date"},
              "id": {"type": "string", "pattern": "^\\d{4}-\\d{2}-\\d{2}-[A-Za-z]+$"},
              "mainCourseRecipeIds": {"type": "array", "items": {"type": "string", "format": "uuid"}},
              "mealType": {"$ref": "#/components/schemas/MealType"}
            }
          },
          "MenuCollection": {
            "type": "object",
            "properties": {
              "_embedded": {"type": "object", "properties": {"menus": {"type": "array", "items": {"$ref": "#/components/schemas/Menu"}}}},
              "_links": links
            }
          },
          "MenuRequest": {
            "type": "object",
            "required": ["date", "mealType", "covers"],
            "properties": {
              "covers": {"type": "integer", "minimum": 1},
              "date": {"type": "string", "format": "date"},
              "mainCourseRecipeIds": {"type": "array", "items": {"type": "string", "format": "uuid"}},
              "mealType": {"$ref": "#/components/schemas/MealType"}
            }
          },
          "Quantity": {
            "type": "object",
            "required": ["value", "unit"],
            "properties": {
              "unit": {"$ref": "#/components/schemas/MeasurementUnit"},
              "value": {"type": "number", "exclusiveMinimum": true, "minimum": 0}
            }
          },
          "Recipe": {
            "type": "object",
            "required": ["id", "name", "content", "author", "servings", "courseTypes", "ingredients"],
            "properties": {
              "_links": links,
              "author": {"type": "string"},
              "content": {"type": "string"},
              "courseTypes": {"type": "array", "items": {"$ref": "#/components/schemas/CourseType"}},
              "id": {"type": "string", "format": "uuid"},
              "ingredients": {"type": "array", "items": {"$ref": "#/components/schemas/RecipeIngredient"}},
              "name": {"type": "string"},
              "servings": {"type": "integer", "minimum": 1}
            }
          },
          "RecipeCollection": {
            "type": "object",
            "properties": {
              "_embedded": {"type": "object", "properties": {"recipes": {"type": "array", "items": {"$ref": "#/components/schemas/Recipe"}}}},
              "_links": links
            }
          },
          "RecipeIngredient": {
            "type": "object",
            "required": ["id", "isMainIngredient"],
            "properties": {
              "_links": links,
              "id": {"type": "string", "format": "uuid"},
              "isMainIngredient": {"type": "boolean"},
              "quantity": {"$ref": "#/components/schemas/Quantity"}
            }
          },
          "RecipeIngredientCollection": {
            "type": "object",
            "properties": {
              "_embedded": {"type": "object", "properties": {"ingredients": {"type": "array", "items": {"$ref": "#/components/schemas/RecipeIngredient"}}}},
              "_links": links
            }
          },
          "RecipeIngredientRequest": {
            "type": "object",
            "required": ["id"],
            "properties": {
              "id": {"type": "string", "format": "uuid"},
              "isMainIngredient": {"type": "boolean"},
              "quantity": {"$ref": "#/components/schemas/Quantity"}
            }
          },
          "RecipeRequest": {
            "type": "object",
            "required": ["name", "content"],
            "properties": {
              "content": {"type": "string", "minLength": 1},
              "courseTypes": {"type": "array", "items": {"$ref": "#/components/schemas/CourseType"}},
              "ingredients": {"type": "array", "items": {"$ref": "#/components/schemas/RecipeIngredientRequest"}},
              "name": {"type": "string", "minLength": 1},
              "servings": {"type": "integer", "minimum": 1, "default": 4}
            }
          }
        }
      },
      "security": [{}, {"basicAuth": []}],
      "paths": {
        "/actuator/health": {
          "get": {"responses": {"200": {"description": "service is up"}}}
        },
        "/actuator/info": {
          "get": {
            "responses": {
              "200": {"description": "build information"},
              "401": error_response("authentication required"),
              "403": error_response("ACTUATOR role required")
            }
          }
        },
        "/api": {
          "get": {"responses": {"200": hal_response("links the caller may follow", "Index")}}
        },
        "/api/ingredients": {
          "get": {
            "parameters": [query_param("filter[name]", false, None)],
            "responses": {"200": hal_response("ingredients", "IngredientCollection")}
          },
          "post": {
            "requestBody": json_body("IngredientRequest"),
            "responses": {
              "201": hal_response("ingredient created", "Ingredient"),
              "400": error_response("invalid request body"),
              "401": error_response("authentication required"),
              "403": error_response("INGREDIENT_MANAGER role required"),
              "409": error_response("ingredient name already used")
            }
          },
          "delete": {
            "responses": {
              "204": {"description": "all ingredients deleted"},
              "403": error_response("SUPER_ADMINISTRATOR role required"),
              "404": error_response("bulk deletion disabled"),
              "409": error_response("ingredients still used by recipes")
            }
          }
        },
        "/api/ingredients/{id}": {
          "parameters": [path_param("id", "ingredient UUID")],
          "get": {
            "responses": {
              "200": hal_response("ingredient", "Ingredient"),
              "404": error_response("ingredient not found")
            }
          },
          "delete": {
            "responses": {
              "204": {"description": "ingredient deleted"},
              "404": error_response("ingredient not found"),
              "409": error_response("ingredient used by a recipe")
            }
          }
        },
        "/api/menus": {
          "get": {
            "parameters": [
              query_param("filter[date][since]", true, Some("date")),
              query_param("filter[date][until]", true, Some("date"))
            ],
            "responses": {
              "200": hal_response("caller's menus within the range", "MenuCollection"),
              "400": error_response("invalid date range"),
              "401": error_response("authentication required")
            }
          },
          "post": {
            "requestBody": json_body("MenuRequest"),
            "responses": {
              "201": hal_response("menu created", "Menu"),
              "400": error_response("invalid body or unknown recipe"),
              "401": error_response("authentication required"),
              "409": error_response("a menu already exists for this date and meal")
            }
          },
          "delete": {
            "responses": {
              "204": {"description": "all of the caller's menus deleted"},
              "401": error_response("authentication required")
            }
          }
        },
        "/api/menus/{id}": {
          "parameters": [path_param("id", "yyyy-MM-dd-MEAL_TYPE")],
          "get": {
            "responses": {
              "200": hal_response("menu", "Menu"),
              "404": error_response("menu not found")
            }
          },
          "delete": {
            "responses": {
              "204": {"description": "menu deleted"},
              "404": error_response("menu not found")
            }
          }
        },
        "/api/openapi.json": {
          "get": {"responses": {"200": {"description": "this document"}}}
        },
        "/api/recipes": {
          "get": {
            "parameters": [query_param("filter[ingredient]", false, Some("uuid"))],
            "responses": {
              "200": hal_response("recipes", "RecipeCollection"),
              "400": error_response("invalid filter")
            }
          },
          "post": {
            "requestBody": json_body("RecipeRequest"),
            "responses": {
              "201": hal_response("recipe created", "Recipe"),
              "400": error_response("invalid body, unit or unknown ingredient"),
              "401": error_response("authentication required")
            }
          },
          "delete": {
            "responses": {
              "204": {"description": "all recipes deleted"},
              "403": error_response("SUPER_ADMINISTRATOR role required"),
              "404": error_response("bulk deletion disabled")
            }
          }
        },
        "/api/recipes/{id}": {
          "parameters": [path_param("id", "recipe UUID")],
          "get": {
            "responses": {
              "200": hal_response("recipe", "Recipe"),
              "404": error_response("recipe not found")
            }
          },
          "delete": {
            "responses": {
              "204": {"description": "recipe deleted"},
              "403": error_response("only the author may delete"),
              "404": error_response("recipe not found")
            }
          }
        },
        "/api/recipes/{id}/ingredients": {
          "parameters": [path_param("id", "recipe UUID")],
          "get": {
            "responses": {
              "200": hal_response("ingredients of the recipe", "RecipeIngredientCollection"),
              "404": error_response("recipe not found")
            }
          },
          "post": {
            "requestBody": json_body("RecipeIngredientRequest"),
            "responses": {
              "201": hal_response("ingredient added", "RecipeIngredient"),
              "400": error_response("incompatible measurement unit"),
              "403": error_response("only the author may edit"),
              "404": error_response("recipe or ingredient not found"),
              "409": error_response("ingredient already in recipe")
            }
          }
        },
        "/api/recipes/{id}/ingredients/{ingredientId}": {
          "parameters": [
            path_param("id", "recipe UUID"),
            path_param("ingredientId", "ingredient UUID")
          ],
          "get": {
            "responses": {
              "200": hal_response("ingredient of the recipe", "RecipeIngredient"),
              "404": error_response("recipe or relation not found")
            }
          },
          "delete": {
            "responses": {
              "204": {"description": "ingredient removed"},
              "403": error_response("only the author may edit"),
              "404": error_response("ingredient not part of the recipe")
            }
          }
        }
      }
    })
}

/// Paths in the document, `{param}` style.
#[must_use]
pub fn documented_paths() -> Vec<String> {
    openapi_v1_spec()["paths"]
        .as_object()
        .map(|paths| paths.keys().cloned().collect())
        .unwrap_or_default()
}
