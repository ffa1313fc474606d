use crate::op::{ValidationError, WriteOperation};
use talentgraph_core::record::{ColumnSelection, Record, RecordSet};
use talentgraph_core::value::{RawValue, ScalarValue};

/// Build one idempotent node merge for a record.
///
/// Columns are visited in selection order; absent values are omitted
/// entirely, so the generated text never contains a null property. The
/// merge is structural: the store keys the node on the full property set
/// presented, and re-ingesting the same record matches the existing node
/// instead of duplicating it.
pub fn build_node_write(
    label: &str,
    record: &Record,
    selection: &ColumnSelection,
) -> Result<WriteOperation, ValidationError> {
    if label.trim().is_empty() {
        return Err(ValidationError::EmptyLabel);
    }

    let mut properties = Vec::new();
    match selection {
        ColumnSelection::All => {
            for name in record.column_names() {
                if let Some(raw) = record.get(name) {
                    push_property(&mut properties, name, raw);
                }
            }
        }
        ColumnSelection::Only(columns) => {
            for name in columns {
                let raw = record
                    .get(name)
                    .ok_or_else(|| ValidationError::MissingColumn(name.clone()))?;
                push_property(&mut properties, name, raw);
            }
        }
    }

    // A record whose every selected column is absent still merges a bare
    // labeled node.
    let statement = if properties.is_empty() {
        format!("MERGE (n:{label})")
    } else {
        format!("MERGE (n:{label} {{{}}})", properties.join(", "))
    };

    Ok(WriteOperation::node(statement))
}

/// Build one merge per record. Failures are reported per record so a batch
/// caller can skip bad rows and keep going.
pub fn build_node_writes(
    label: &str,
    records: &RecordSet,
    selection: &ColumnSelection,
) -> Vec<Result<WriteOperation, ValidationError>> {
    records
        .records()
        .iter()
        .map(|record| build_node_write(label, record, selection))
        .collect()
}

fn push_property(properties: &mut Vec<String>, name: &str, raw: &RawValue) {
    if let Some(literal) = ScalarValue::classify(raw).render_literal() {
        properties.push(format!("{name}: {literal}"));
    }
}
