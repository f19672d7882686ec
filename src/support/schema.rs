//! JSON schemas for tool inputs.

use std::sync::Arc;

use rmcp::model::JsonObject;
use serde_json::{Map, Value, json};

/// Collects typed properties and emits an object schema
#[derive(Default)]
pub struct SchemaBuilder {
    properties: JsonObject,
    required:   Vec<String>,
}

impl SchemaBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    fn property(mut self, name: &str, definition: Value, required: bool) -> Self {
        self.properties.insert(name.to_string(), definition);
        if required {
            self.required.push(name.to_string());
        }
        self
    }

    pub fn add_string_property(self, name: &str, description: &str, required: bool) -> Self {
        self.property(
            name,
            json!({ "type": "string", "description": description }),
            required,
        )
    }

    pub fn add_integer_property(self, name: &str, description: &str, required: bool) -> Self {
        self.property(
            name,
            json!({ "type": "integer", "description": description }),
            required,
        )
    }

    /// Filter values may be sent as strings, numbers or booleans
    pub fn add_scalar_property(self, name: &str, description: &str, required: bool) -> Self {
        self.property(
            name,
            json!({ "type": ["string", "number", "boolean"], "description": description }),
            required,
        )
    }

    pub fn add_string_array_property(self, name: &str, description: &str, required: bool) -> Self {
        self.property(
            name,
            json!({
                "type": "array",
                "items": { "type": "string" },
                "description": description,
            }),
            required,
        )
    }

    pub fn add_enum_property(
        self,
        name: &str,
        description: &str,
        values: &[&str],
        default: Option<&str>,
        required: bool,
    ) -> Self {
        let mut definition = json!({
            "type": "string",
            "enum": values,
            "description": description,
        });
        if let (Some(default), Some(object)) = (default, definition.as_object_mut()) {
            object.insert("default".to_string(), default.into());
        }
        self.property(name, definition, required)
    }

    pub fn build(self) -> Arc<JsonObject> {
        let mut schema = object_schema(self.properties);
        if !self.required.is_empty() {
            schema.insert("required".to_string(), self.required.into());
        }
        Arc::new(schema)
    }
}

fn object_schema(properties: JsonObject) -> JsonObject {
    let mut schema = Map::new();
    schema.insert("type".to_string(), "object".into());
    schema.insert("properties".to_string(), Value::Object(properties));
    schema
}

/// Schema for tools that take no arguments
pub fn empty_object_schema() -> Arc<JsonObject> {
    Arc::new(object_schema(Map::new()))
}
