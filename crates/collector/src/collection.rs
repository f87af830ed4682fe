use crate::{overrides::OverrideRecord, predicate::ResourcePredicate, query::QueryTree};
use model::resource::candidate::CandidateResource;

/// A registered collection, waiting for the compilation pipeline to apply
/// it against the resource graph. An absent predicate means the collector
/// matches every resource of its type.
#[derive(Debug, Clone)]
pub enum Collector {
    /// Virtual collection: matched against resources already present in
    /// the in-progress compilation.
    Catalog {
        resource_type: String,
        predicate: Option<ResourcePredicate>,
        overrides: Option<Vec<OverrideRecord>>,
    },
    /// Exported collection: the query tree goes to the external store; the
    /// predicate form stays usable for local re-filtering.
    Exported {
        resource_type: String,
        query: Option<QueryTree>,
        predicate: Option<ResourcePredicate>,
        overrides: Option<Vec<OverrideRecord>>,
    },
}

impl Collector {
    pub fn resource_type(&self) -> &str {
        match self {
            Collector::Catalog { resource_type, .. } => resource_type,
            Collector::Exported { resource_type, .. } => resource_type,
        }
    }

    pub fn overrides(&self) -> Option<&[OverrideRecord]> {
        match self {
            Collector::Catalog { overrides, .. } => overrides.as_deref(),
            Collector::Exported { overrides, .. } => overrides.as_deref(),
        }
    }

    /// Apply the compiled filter to one candidate.
    pub fn matches(&self, resource: &dyn CandidateResource) -> bool {
        let predicate = match self {
            Collector::Catalog { predicate, .. } => predicate,
            Collector::Exported { predicate, .. } => predicate,
        };
        match predicate {
            Some(predicate) => predicate.matches(resource),
            None => true,
        }
    }
}

/// Registration side of the compiling context. The builder performs
/// exactly one registration per statement.
pub trait CollectionSink {
    fn add_collection(&mut self, collector: Collector);
}
