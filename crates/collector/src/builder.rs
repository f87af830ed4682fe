use crate::{
    collection::{CollectionSink, Collector},
    compiler::FilterCompiler,
    error::{CollectorError, Result},
    eval::EvalContext,
    overrides::build_overrides,
    predicate::PredicateCompiler,
    query::QueryTreeCompiler,
};
use mcl_syntax::ast::{
    collect::{CollectExpression, CollectKind},
    expr::ExpressionKind,
};
use model::resource::registry::ResourceTypeRegistry;
use tracing::debug;

/// Pseudo-type that can never be collected.
pub const RESERVED_CLASS_TYPE: &str = "class";

/// Turns a validated collection statement into a registered [`Collector`].
///
/// Validation is fail-fast: type reference shape, the class pseudo-type,
/// then registry resolution, before any filter compilation happens.
#[derive(Debug, Default, Clone, Copy)]
pub struct CollectorBuilder {
    predicates: PredicateCompiler,
    queries: QueryTreeCompiler,
}

impl CollectorBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn build(
        &self,
        statement: &CollectExpression,
        ctx: &EvalContext<'_>,
        types: &dyn ResourceTypeRegistry,
        sink: &mut dyn CollectionSink,
    ) -> Result<Collector> {
        let ExpressionKind::Name(name) = &statement.type_expr.kind else {
            return Err(CollectorError::InvalidTypeReference);
        };

        let type_name = name.to_lowercase();
        if type_name == RESERVED_CLASS_TYPE {
            return Err(CollectorError::ClassesNotCollectable);
        }

        let resource_type = types
            .resolve(&type_name)
            .ok_or_else(|| CollectorError::UnknownResourceType(type_name.clone()))?;

        let overrides = build_overrides(statement);

        let filter = statement.filter_expr();
        let predicate = filter
            .map(|expr| self.predicates.compile(expr, ctx))
            .transpose()?;

        let collector = match statement.kind {
            CollectKind::Virtual => Collector::Catalog {
                resource_type: resource_type.name.clone(),
                predicate,
                overrides,
            },
            CollectKind::Exported => {
                let query = filter
                    .map(|expr| self.queries.compile(expr, ctx))
                    .transpose()?;
                Collector::Exported {
                    resource_type: resource_type.name.clone(),
                    query,
                    predicate,
                    overrides,
                }
            }
        };

        debug!(
            resource_type = %collector.resource_type(),
            kind = ?statement.kind,
            location = %statement.location,
            "registering collector"
        );
        sink.add_collection(collector.clone());

        Ok(collector)
    }
}
