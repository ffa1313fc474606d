use crate::op::{EndpointGuard, ValidationError, WriteOperation, GUARD_A_COLUMN, GUARD_B_COLUMN};
use talentgraph_core::record::RecordSet;
use talentgraph_core::value::{RawValue, ScalarValue};

/// One side of a relationship write: the label to match and the
/// property/value equality selecting the endpoint node. The match property
/// need not be the node's identifying key; the caller chooses.
#[derive(Debug, Clone, PartialEq)]
pub struct EndpointSelector {
    pub label: String,
    pub match_property: String,
    pub value: RawValue,
}

impl EndpointSelector {
    pub fn new(
        label: impl Into<String>,
        match_property: impl Into<String>,
        value: impl Into<RawValue>,
    ) -> Self {
        Self {
            label: label.into(),
            match_property: match_property.into(),
            value: value.into(),
        }
    }
}

/// Edge property carried by a batch-built relationship: the property name
/// and the record column supplying its value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EdgeProperty {
    pub name: String,
    pub value_column: String,
}

/// Batch description for relationship ingestion: endpoint labels, the
/// properties matched on, the record columns supplying selector values,
/// and the optional edge property.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RelationshipTemplate {
    pub label_a: String,
    pub label_b: String,
    pub match_property_a: String,
    pub match_property_b: String,
    pub value_column_a: String,
    pub value_column_b: String,
    pub relationship_name: String,
    pub edge_property: Option<EdgeProperty>,
}

/// Build one idempotent relationship merge between two already-ingested
/// nodes.
///
/// The merged relationship is undirected by convention. If an endpoint
/// selector matches nothing, the merge is a no-op (zero rows); if it
/// matches more than one node, the operation's guard lets the writer fail
/// it with an ambiguity error instead of merging over the cross-product.
/// An absent selector or edge-property value aborts this operation only.
pub fn build_relationship_write(
    a: &EndpointSelector,
    b: &EndpointSelector,
    relationship_name: &str,
    edge_property: Option<(&str, &RawValue)>,
) -> Result<WriteOperation, ValidationError> {
    if a.label.trim().is_empty() || b.label.trim().is_empty() {
        return Err(ValidationError::EmptyLabel);
    }
    if relationship_name.trim().is_empty() {
        return Err(ValidationError::EmptyRelationshipName);
    }

    let literal_a = selector_literal(a, 'a')?;
    let literal_b = selector_literal(b, 'b')?;

    let relationship = match edge_property {
        Some((name, raw)) => {
            let literal = ScalarValue::classify(raw)
                .render_literal()
                .ok_or_else(|| ValidationError::AbsentEdgeProperty(name.to_string()))?;
            format!("[r:{relationship_name} {{{name}: {literal}}}]")
        }
        None => format!("[r:{relationship_name}]"),
    };

    let statement = format!(
        "MATCH (a:{la}), (b:{lb}) WHERE a.{pa} = {va} AND b.{pb} = {vb} MERGE (a)-{rel}-(b)",
        la = a.label,
        lb = b.label,
        pa = a.match_property,
        pb = b.match_property,
        va = literal_a,
        vb = literal_b,
        rel = relationship,
    );

    let guard = EndpointGuard::new(format!(
        "OPTIONAL MATCH (a:{la}) WHERE a.{pa} = {va} WITH count(a) AS {ga} \
         OPTIONAL MATCH (b:{lb}) WHERE b.{pb} = {vb} RETURN {ga}, count(b) AS {gb}",
        la = a.label,
        lb = b.label,
        pa = a.match_property,
        pb = b.match_property,
        va = literal_a,
        vb = literal_b,
        ga = GUARD_A_COLUMN,
        gb = GUARD_B_COLUMN,
    ));

    Ok(WriteOperation::relationship(statement, guard))
}

/// Build one relationship merge per record, pulling endpoint values (and
/// the optional edge property) out of each record's columns. Failures are
/// reported per record.
pub fn build_relationship_writes(
    template: &RelationshipTemplate,
    records: &RecordSet,
) -> Vec<Result<WriteOperation, ValidationError>> {
    records
        .records()
        .iter()
        .map(|record| {
            let value_a = record
                .get(&template.value_column_a)
                .ok_or_else(|| ValidationError::MissingColumn(template.value_column_a.clone()))?;
            let value_b = record
                .get(&template.value_column_b)
                .ok_or_else(|| ValidationError::MissingColumn(template.value_column_b.clone()))?;

            let edge_value = match &template.edge_property {
                Some(edge) => Some((
                    edge.name.as_str(),
                    record
                        .get(&edge.value_column)
                        .ok_or_else(|| ValidationError::MissingColumn(edge.value_column.clone()))?,
                )),
                None => None,
            };

            build_relationship_write(
                &EndpointSelector::new(
                    template.label_a.clone(),
                    template.match_property_a.clone(),
                    value_a.clone(),
                ),
                &EndpointSelector::new(
                    template.label_b.clone(),
                    template.match_property_b.clone(),
                    value_b.clone(),
                ),
                &template.relationship_name,
                edge_value,
            )
        })
        .collect()
}

fn selector_literal(selector: &EndpointSelector, side: char) -> Result<String, ValidationError> {
    ScalarValue::classify(&selector.value)
        .render_literal()
        .ok_or(ValidationError::AbsentEndpointValue { side })
}
