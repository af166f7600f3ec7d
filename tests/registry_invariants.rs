//! Registry and record invariant tests:
//! - Registration is init-only; duplicate ids are rejected
//! - Stored values round-trip unchanged through construction
//! - Missing required fields fail construction, naming the field
//! - Unknown-field handling follows the configured policy
//! - Construction and access are deterministic

use serde_json::{json, Map, Value};
use typedrec::derived::DerivedPropertyResolver;
use typedrec::record::{Record, UnknownFieldPolicy};
use typedrec::schema::{FieldDef, FieldType, Schema, SchemaError, SchemaRegistry};

// =============================================================================
// Helper Functions
// =============================================================================

fn raw(value: Value) -> Map<String, Value> {
    match value {
        Value::Object(map) => map,
        other => panic!("fixture must be an object, got {}", other),
    }
}

fn setup_registry() -> SchemaRegistry {
    let mut registry = SchemaRegistry::new();

    let schema = Schema::new(
        "contact",
        vec![
            FieldDef::required_string("Name"),
            FieldDef::optional_int("Age"),
            FieldDef::required_bool("Active"),
            FieldDef::optional_list("Tags", FieldType::String),
        ],
    );
    registry.register(schema).unwrap();

    registry
}

// =============================================================================
// Registration Tests
// =============================================================================

/// Registering the same id twice always fails.
#[test]
fn test_duplicate_schema_rejected() {
    let mut registry = setup_registry();

    let again = Schema::new("contact", vec![FieldDef::required_string("Name")]);
    let result = registry.register(again);
    assert_eq!(
        result.unwrap_err(),
        SchemaError::duplicate_schema("contact")
    );

    // The original registration is untouched
    assert_eq!(registry.schema_count(), 1);
    assert_eq!(registry.lookup("contact").unwrap().fields.len(), 4);
}

/// Looking up an unregistered id always fails.
#[test]
fn test_unknown_schema_lookup_fails() {
    let registry = setup_registry();

    for _ in 0..100 {
        assert_eq!(
            registry.lookup("nonexistent").unwrap_err(),
            SchemaError::unknown_schema("nonexistent")
        );
    }
}

/// Schemas declared as JSON register like built ones.
#[test]
fn test_json_declared_schema() {
    let mut registry = setup_registry();
    registry
        .register_json(
            r#"{
                "id": "note",
                "fields": [
                    {"name": "Body", "type": "string", "required": true},
                    {"name": "Pinned", "type": "bool", "required": false}
                ]
            }"#,
        )
        .unwrap();

    let record =
        Record::create(&registry, "note", raw(json!({"Body": "remember"}))).unwrap();
    assert_eq!(record.get_str("Body").unwrap(), "remember");
}

// =============================================================================
// Construction Round-Trip Tests
// =============================================================================

/// Every stored field reads back exactly as supplied.
#[test]
fn test_values_round_trip() {
    let registry = setup_registry();
    let input = json!({
        "Name": "Alice",
        "Age": 30,
        "Active": true,
        "Tags": ["staff", "nz"]
    });

    let record = Record::create(&registry, "contact", raw(input.clone())).unwrap();

    for (key, value) in input.as_object().unwrap() {
        assert_eq!(record.get(key).unwrap(), value);
    }
    assert_eq!(record.len(), 4);
}

/// Missing required field fails construction, naming the field.
#[test]
fn test_missing_required_field() {
    let registry = setup_registry();

    let result = Record::create(
        &registry,
        "contact",
        raw(json!({"Name": "Alice"})), // Active omitted
    );
    assert_eq!(
        result.unwrap_err(),
        SchemaError::missing_field("contact", "Active")
    );
}

/// Optional fields may be absent without failing.
#[test]
fn test_optional_fields_may_be_absent() {
    let registry = setup_registry();

    let record = Record::create(
        &registry,
        "contact",
        raw(json!({"Name": "Alice", "Active": true})),
    )
    .unwrap();
    assert!(!record.has("Age"));
}

// =============================================================================
// Unknown-Field Policy Tests
// =============================================================================

/// Permissive mode drops undeclared keys silently.
#[test]
fn test_permissive_mode_drops() {
    let registry = setup_registry();

    let record = Record::create(
        &registry,
        "contact",
        raw(json!({"Name": "Alice", "Active": true, "Extra": 1})),
    )
    .unwrap();

    assert!(!record.has("Extra"));
    assert_eq!(
        record.get("Extra").unwrap_err(),
        SchemaError::missing_field("contact", "Extra")
    );
}

/// Strict mode rejects undeclared keys.
#[test]
fn test_strict_mode_rejects() {
    let registry = setup_registry();

    let result = Record::create_with(
        &registry,
        "contact",
        raw(json!({"Name": "Alice", "Active": true, "Extra": 1})),
        UnknownFieldPolicy::Reject,
    );
    assert_eq!(
        result.unwrap_err(),
        SchemaError::unrecognized_field("contact", "Extra")
    );
}

// =============================================================================
// Determinism Tests
// =============================================================================

/// The same raw map constructs the same record every time.
#[test]
fn test_construction_is_deterministic() {
    let registry = setup_registry();
    let input = raw(json!({"Name": "Alice", "Active": true}));

    let first = Record::create(&registry, "contact", input.clone()).unwrap();
    for _ in 0..100 {
        let next = Record::create(&registry, "contact", input.clone()).unwrap();
        assert_eq!(next, first);
    }
}

/// An invalid raw map fails the same way every time.
#[test]
fn test_invalid_input_fails_consistently() {
    let registry = setup_registry();
    let input = raw(json!({"Age": 30})); // Name and Active missing

    for _ in 0..100 {
        let result = Record::create(&registry, "contact", input.clone());
        assert!(result.is_err());
    }
}

/// Records are immutable: repeated gets observe the same value.
#[test]
fn test_get_is_idempotent() {
    let registry = setup_registry();
    let record = Record::create(
        &registry,
        "contact",
        raw(json!({"Name": "Alice", "Active": true})),
    )
    .unwrap();

    let first = record.get("Name").unwrap().clone();
    for _ in 0..100 {
        assert_eq!(record.get("Name").unwrap(), &first);
    }
}

// =============================================================================
// Derived Property Tests
// =============================================================================

/// Derived properties compute from fields; unknown names fail.
#[test]
fn test_derived_property_resolution() {
    let mut registry = setup_registry();
    registry
        .register_derived("contact", "getGreeting", |record| {
            Ok(json!(format!("Hello, {}", record.get_str("Name")?)))
        })
        .unwrap();

    let record = Record::create(
        &registry,
        "contact",
        raw(json!({"Name": "Alice", "Active": true})),
    )
    .unwrap();

    let resolver = DerivedPropertyResolver::new(&registry);
    assert_eq!(
        resolver.compute(&record, "getGreeting").unwrap(),
        json!("Hello, Alice")
    );
    assert_eq!(
        resolver.compute(&record, "getOther").unwrap_err(),
        SchemaError::unknown_property("contact", "getOther")
    );
}

// =============================================================================
// Shared-Read Tests
// =============================================================================

/// A built registry and its records are safely read from many threads.
#[test]
fn test_concurrent_reads() {
    let mut registry = setup_registry();
    registry
        .register_derived("contact", "getGreeting", |record| {
            Ok(json!(format!("Hello, {}", record.get_str("Name")?)))
        })
        .unwrap();
    let registry = std::sync::Arc::new(registry);

    let handles: Vec<_> = (0..8)
        .map(|_| {
            let registry = std::sync::Arc::clone(&registry);
            std::thread::spawn(move || {
                let record = Record::create(
                    &registry,
                    "contact",
                    raw(json!({"Name": "Alice", "Active": true})),
                )
                .unwrap();
                let resolver = DerivedPropertyResolver::new(&registry);
                assert_eq!(
                    resolver.compute(&record, "getGreeting").unwrap(),
                    json!("Hello, Alice")
                );
            })
        })
        .collect();

    for handle in handles {
        handle.join().unwrap();
    }
}
