use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Handle for a known resource type. `name` is the canonical,
/// lowercase form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourceType {
    pub name: String,
}

impl ResourceType {
    pub fn new(name: &str) -> Self {
        ResourceType {
            name: name.to_lowercase(),
        }
    }
}

/// Lookup side of the resource-type registry. Names resolve
/// case-insensitively.
pub trait ResourceTypeRegistry {
    fn resolve(&self, name: &str) -> Option<&ResourceType>;
}

/// In-memory registry implementation.
#[derive(Debug, Default, Clone)]
pub struct ResourceTypeIndex {
    types: HashMap<String, ResourceType>,
}

impl ResourceTypeIndex {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn define(&mut self, name: &str) {
        let resource_type = ResourceType::new(name);
        self.types.insert(resource_type.name.clone(), resource_type);
    }

    pub fn with_type(mut self, name: &str) -> Self {
        self.define(name);
        self
    }
}

impl ResourceTypeRegistry for ResourceTypeIndex {
    fn resolve(&self, name: &str) -> Option<&ResourceType> {
        self.types.get(&name.to_lowercase())
    }
}
