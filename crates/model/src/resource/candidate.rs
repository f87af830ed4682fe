use crate::core::value::Value;
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};

/// What a compiled predicate needs from a candidate resource: attribute
/// lookup by name and tag-membership testing.
pub trait CandidateResource {
    fn attribute(&self, name: &str) -> Option<&Value>;
    fn has_tag(&self, value: &Value) -> bool;
}

/// A declared resource as seen by the matching engine.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Resource {
    pub type_name: String,
    pub title: String,
    attributes: HashMap<String, Value>,
    tags: HashSet<String>,
}

impl Resource {
    pub fn new(type_name: &str, title: &str) -> Self {
        Resource {
            type_name: type_name.to_string(),
            title: title.to_string(),
            attributes: HashMap::new(),
            tags: HashSet::new(),
        }
    }

    pub fn set_attribute(&mut self, name: &str, value: Value) {
        self.attributes.insert(name.to_string(), value);
    }

    pub fn with_attribute(mut self, name: &str, value: Value) -> Self {
        self.set_attribute(name, value);
        self
    }

    pub fn tag(&mut self, tag: &str) {
        self.tags.insert(tag.to_string());
    }

    pub fn with_tag(mut self, tag: &str) -> Self {
        self.tag(tag);
        self
    }
}

impl CandidateResource for Resource {
    fn attribute(&self, name: &str) -> Option<&Value> {
        self.attributes.get(name)
    }

    fn has_tag(&self, value: &Value) -> bool {
        value
            .as_string()
            .map(|tag| self.tags.contains(&tag))
            .unwrap_or(false)
    }
}
