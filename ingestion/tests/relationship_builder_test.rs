use ingestion::{
    build_relationship_write, build_relationship_writes, EdgeProperty, EndpointSelector,
    RelationshipTemplate, ValidationError,
};
use talentgraph_core::record::{Record, RecordSet};
use talentgraph_core::value::RawValue;

fn people_endpoint(name: &str) -> EndpointSelector {
    EndpointSelector::new("PEOPLE", "name", name)
}

fn tech_endpoint(name: &str) -> EndpointSelector {
    EndpointSelector::new("TECH", "name", name)
}

#[test]
fn test_relationship_without_edge_property() {
    let op = build_relationship_write(
        &people_endpoint("alice"),
        &tech_endpoint("rust"),
        "KNOWS",
        None,
    )
    .unwrap();

    assert_eq!(
        op.statement(),
        "MATCH (a:PEOPLE), (b:TECH) WHERE a.name = 'alice' AND b.name = 'rust' \
         MERGE (a)-[r:KNOWS]-(b)"
    );
    assert!(op.guard().is_some());
}

#[test]
fn test_relationship_with_typed_edge_property() {
    let op = build_relationship_write(
        &people_endpoint("alice"),
        &tech_endpoint("rust"),
        "KNOWS",
        Some(("skill_level", &RawValue::Int(4))),
    )
    .unwrap();

    assert_eq!(
        op.statement(),
        "MATCH (a:PEOPLE), (b:TECH) WHERE a.name = 'alice' AND b.name = 'rust' \
         MERGE (a)-[r:KNOWS {skill_level: toInteger(4)}]-(b)"
    );
}

#[test]
fn test_guard_counts_both_endpoints() {
    let op = build_relationship_write(
        &people_endpoint("alice"),
        &tech_endpoint("rust"),
        "KNOWS",
        None,
    )
    .unwrap();

    let guard = op.guard().unwrap();
    assert_eq!(
        guard.statement(),
        "OPTIONAL MATCH (a:PEOPLE) WHERE a.name = 'alice' WITH count(a) AS a_count \
         OPTIONAL MATCH (b:TECH) WHERE b.name = 'rust' RETURN a_count, count(b) AS b_count"
    );
}

#[test]
fn test_absent_selector_value_fails() {
    let err = build_relationship_write(
        &EndpointSelector::new("PEOPLE", "name", RawValue::Null),
        &tech_endpoint("rust"),
        "KNOWS",
        None,
    )
    .unwrap_err();

    assert_eq!(err, ValidationError::AbsentEndpointValue { side: 'a' });
}

#[test]
fn test_absent_edge_property_value_fails() {
    let err = build_relationship_write(
        &people_endpoint("alice"),
        &tech_endpoint("rust"),
        "KNOWS",
        Some(("skill_level", &RawValue::Float(f64::NAN))),
    )
    .unwrap_err();

    assert_eq!(
        err,
        ValidationError::AbsentEdgeProperty("skill_level".to_string())
    );
}

#[test]
fn test_empty_relationship_name_fails() {
    let err = build_relationship_write(
        &people_endpoint("alice"),
        &tech_endpoint("rust"),
        "",
        None,
    )
    .unwrap_err();

    assert_eq!(err, ValidationError::EmptyRelationshipName);
}

#[test]
fn test_batch_pulls_endpoint_values_and_weight_from_records() {
    let template = RelationshipTemplate {
        label_a: "PEOPLE".to_string(),
        label_b: "TECH".to_string(),
        match_property_a: "name".to_string(),
        match_property_b: "name".to_string(),
        value_column_a: "person".to_string(),
        value_column_b: "tech".to_string(),
        relationship_name: "KNOWS".to_string(),
        edge_property: Some(EdgeProperty {
            name: "skill_level".to_string(),
            value_column: "level".to_string(),
        }),
    };

    let records = RecordSet::new(vec![
        Record::new()
            .with("person", "alice")
            .with("tech", "rust")
            .with("level", 4i64),
        Record::new()
            .with("person", "bob")
            .with("tech", "go")
            .with("level", 2i64),
    ]);

    let results = build_relationship_writes(&template, &records);

    assert_eq!(results.len(), 2);
    assert_eq!(
        results[0].as_ref().unwrap().statement(),
        "MATCH (a:PEOPLE), (b:TECH) WHERE a.name = 'alice' AND b.name = 'rust' \
         MERGE (a)-[r:KNOWS {skill_level: toInteger(4)}]-(b)"
    );
    assert_eq!(
        results[1].as_ref().unwrap().statement(),
        "MATCH (a:PEOPLE), (b:TECH) WHERE a.name = 'bob' AND b.name = 'go' \
         MERGE (a)-[r:KNOWS {skill_level: toInteger(2)}]-(b)"
    );
}

#[test]
fn test_batch_reports_missing_columns_per_record() {
    let template = RelationshipTemplate {
        label_a: "PEOPLE".to_string(),
        label_b: "TECH".to_string(),
        match_property_a: "name".to_string(),
        match_property_b: "name".to_string(),
        value_column_a: "person".to_string(),
        value_column_b: "tech".to_string(),
        relationship_name: "KNOWS".to_string(),
        edge_property: None,
    };

    let records = RecordSet::new(vec![
        Record::new().with("person", "alice").with("tech", "rust"),
        Record::new().with("person", "bob"),
    ]);

    let results = build_relationship_writes(&template, &records);

    assert!(results[0].is_ok());
    assert_eq!(
        results[1].clone().unwrap_err(),
        ValidationError::MissingColumn("tech".to_string())
    );
}
