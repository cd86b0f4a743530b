//! End-to-end table assembly through the derive macros.

#![cfg(feature = "macros")]

use std::convert::Infallible;
use std::rc::Rc;
use std::sync::Arc;

use tabby::{
    BorderStyle, BoxError, CapabilityKind, GridRenderer, JsonRenderer, Record, TabBody,
    TabFooter, TabHeader, Table, TableConfig, TableError, TableGrid, Tabulate, TextMarshal,
};

fn cells(row: &[&str]) -> Vec<String> {
    row.iter().map(|cell| cell.to_string()).collect()
}

// =============================================================================
// Basic scenarios
// =============================================================================

#[derive(Record)]
struct IdOnly {
    id: i64,
    #[tab("-")]
    name: String,
}

#[test]
fn test_excluded_field() {
    let grid = tabby::build(
        &IdOnly {
            id: 1,
            name: "x".to_string(),
        },
        &TableConfig::default(),
    )
    .unwrap();
    assert_eq!(grid.header, cells(&["id"]));
    assert_eq!(grid.body, vec![cells(&["1"])]);
    assert!(grid.footer.is_empty());
}

#[derive(Record)]
struct Renamed {
    #[tab("id2")]
    id: i64,
    #[tab("nam")]
    name: String,
}

#[test]
fn test_renamed_fields_over_a_sequence() {
    let data = vec![
        Renamed {
            id: 1,
            name: "name1".to_string(),
        },
        Renamed {
            id: 2,
            name: "name2".to_string(),
        },
    ];
    let grid = tabby::build(&data, &TableConfig::default()).unwrap();
    assert_eq!(grid.header, cells(&["id2", "nam"]));
    assert_eq!(
        grid.body,
        vec![cells(&["1", "name1"]), cells(&["2", "name2"])]
    );
}

#[derive(Record)]
struct Nested {
    name2: String,
}

#[derive(Record)]
struct Outer {
    #[tab("id2")]
    id: i64,
    nested: Nested,
}

#[test]
fn test_inlined_nested_record() {
    let data = Outer {
        id: 1,
        nested: Nested {
            name2: "naming1".to_string(),
        },
    };
    let config = TableConfig::new().inline::<Nested>();
    let grid = tabby::build(&data, &config).unwrap();
    assert_eq!(grid.header, cells(&["id2", "name2"]));
    assert_eq!(grid.body, vec![cells(&["1", "naming1"])]);
}

#[test]
fn test_nested_record_without_inlining_is_one_empty_column() {
    let data = Outer {
        id: 1,
        nested: Nested {
            name2: "naming1".to_string(),
        },
    };
    let grid = tabby::build(&data, &TableConfig::default()).unwrap();
    assert_eq!(grid.header, cells(&["id2", "nested"]));
    assert_eq!(grid.body, vec![cells(&["1", ""])]);
}

#[derive(Record)]
#[tab(footer)]
struct WithFooter {
    id: i64,
    name: String,
}

impl TabFooter for WithFooter {
    fn footer(&self) -> Result<Vec<String>, BoxError> {
        Ok(cells(&["", "hey"]))
    }
}

#[test]
fn test_footer_capability_is_verbatim() {
    let grid = tabby::build(
        &WithFooter {
            id: 1,
            name: "a".to_string(),
        },
        &TableConfig::default(),
    )
    .unwrap();
    assert_eq!(grid.footer, cells(&["", "hey"]));
}

#[derive(Record)]
struct Measurement {
    value: f64,
}

#[test]
fn test_float_formatting() {
    let grid = tabby::build(&Measurement { value: 0.1 }, &TableConfig::default()).unwrap();
    assert_eq!(grid.body, vec![cells(&["0.10"])]);
}

struct Code(i64);

impl TextMarshal for Code {
    fn marshal_text(&self) -> Result<String, BoxError> {
        Ok(format!("C-{}", self.0))
    }
}

#[derive(Record)]
struct Coded {
    code: Code,
}

#[test]
fn test_specialization_beats_text_marshal() {
    let data = Coded { code: Code(4) };
    let plain = tabby::build(&data, &TableConfig::default()).unwrap();
    assert_eq!(plain.body, vec![cells(&["C-4"])]);

    let config =
        TableConfig::new().specialize(|_: &Code| Ok::<_, Infallible>("registered".to_string()));
    let grid = tabby::build(&data, &config).unwrap();
    assert_eq!(grid.body, vec![cells(&["registered"])]);
}

#[test]
fn test_specialization_applies_to_every_row() {
    let data: Vec<Coded> = (1..=3).map(|n| Coded { code: Code(n) }).collect();
    let plain = tabby::build(&data, &TableConfig::default()).unwrap();
    assert_eq!(plain.body, vec![cells(&["C-1"]), cells(&["C-2"]), cells(&["C-3"])]);

    let config =
        TableConfig::new().specialize(|_: &Code| Ok::<_, Infallible>("registered".to_string()));
    let grid = tabby::build(&data, &config).unwrap();
    assert_eq!(grid.header, cells(&["code"]));
    assert_eq!(grid.body, vec![cells(&["registered"]); 3]);
}

// =============================================================================
// Inlining
// =============================================================================

#[derive(Record)]
struct Street {
    line: String,
    #[tab("-")]
    geohash: String,
}

#[derive(Record)]
struct Address {
    #[tab("ignored title")]
    street: Street,
    city: String,
}

#[derive(Record)]
struct Customer {
    name: String,
    #[tab("Where")]
    address: Address,
    #[tab("-")]
    billing: Address,
}

fn customer() -> Customer {
    let address = || Address {
        street: Street {
            line: "1 Main St".to_string(),
            geohash: "u4pruyd".to_string(),
        },
        city: "Oslo".to_string(),
    };
    Customer {
        name: "Kari".to_string(),
        address: address(),
        billing: address(),
    }
}

#[test]
fn test_recursive_inlining() {
    let config = TableConfig::new().inline::<Address>().inline::<Street>();
    let grid = tabby::build(&customer(), &config).unwrap();
    assert_eq!(grid.header, cells(&["name", "line", "city"]));
    assert_eq!(grid.body, vec![cells(&["Kari", "1 Main St", "Oslo"])]);
}

#[test]
fn test_partial_inlining_keeps_inner_columns() {
    let config = TableConfig::new().inline::<Address>();
    let grid = tabby::build(&customer(), &config).unwrap();
    assert_eq!(grid.header, cells(&["name", "ignored title", "city"]));
    assert_eq!(grid.body, vec![cells(&["Kari", "", "Oslo"])]);
}

#[test]
fn test_inlined_scalar_type_has_no_columns() {
    let config = TableConfig::new().inline::<String>();
    let grid = tabby::build(&customer(), &config).unwrap();
    assert_eq!(grid.header, cells(&["Where"]));
    assert_eq!(grid.body, vec![cells(&[""])]);
}

// =============================================================================
// Errors
// =============================================================================

#[test]
fn test_absent_input() {
    let data: Option<Vec<IdOnly>> = None;
    let err = tabby::build(&data, &TableConfig::default()).unwrap_err();
    assert!(matches!(err, TableError::EmptyInput));
}

#[test]
fn test_present_option_is_tabulated() {
    let data = Some(IdOnly {
        id: 9,
        name: String::new(),
    });
    let grid = tabby::build(&data, &TableConfig::default()).unwrap();
    assert_eq!(grid.body, vec![cells(&["9"])]);
}

#[test]
fn test_scalar_inputs_are_rejected() {
    let config = TableConfig::default();
    assert!(matches!(
        tabby::build(&42i64, &config),
        Err(TableError::NotARecord { .. })
    ));
    assert!(matches!(
        tabby::build("text", &config),
        Err(TableError::NotARecord { .. })
    ));
    assert!(matches!(
        tabby::build(&vec![1u8, 2, 3], &config),
        Err(TableError::NotARecord { .. })
    ));
}

#[test]
fn test_sequence_of_sequences_is_rejected() {
    let data = vec![vec![IdOnly {
        id: 1,
        name: String::new(),
    }]];
    let err = tabby::build(&data, &TableConfig::default()).unwrap_err();
    match err {
        TableError::NotARecord { type_name } => assert!(type_name.starts_with("[[")),
        other => panic!("expected NotARecord, got {:?}", other),
    }
}

#[test]
fn test_empty_sequence_has_header_only() {
    let data: Vec<Renamed> = Vec::new();
    let grid = tabby::build(&data, &TableConfig::default()).unwrap();
    assert_eq!(grid.header, cells(&["id2", "nam"]));
    assert!(grid.body.is_empty());
}

#[test]
fn test_pointer_inputs() {
    let config = TableConfig::default();
    let boxed = Box::new(Measurement { value: 1.0 });
    let shared = Rc::new(vec![Measurement { value: 2.0 }]);
    let atomic = Arc::new([Measurement { value: 3.0 }]);
    let slice: &[Measurement] = &[Measurement { value: 4.0 }];
    assert_eq!(tabby::build(&boxed, &config).unwrap().body[0], cells(&["1.00"]));
    assert_eq!(tabby::build(&shared, &config).unwrap().body[0], cells(&["2.00"]));
    assert_eq!(tabby::build(&atomic, &config).unwrap().body[0], cells(&["3.00"]));
    assert_eq!(tabby::build(slice, &config).unwrap().body[0], cells(&["4.00"]));
}

// =============================================================================
// Override capabilities
// =============================================================================

#[derive(Record)]
#[tab(header, body)]
struct Custom {
    id: i64,
}

impl TabHeader for Custom {
    fn header(&self) -> Result<Vec<String>, BoxError> {
        Ok(cells(&["a", "b", "c"]))
    }
}

impl TabBody for Custom {
    fn body(&self) -> Result<Vec<Vec<String>>, BoxError> {
        Ok(vec![cells(&["only one"])])
    }
}

#[test]
fn test_overrides_are_trusted() {
    let grid = tabby::build(&Custom { id: 1 }, &TableConfig::default()).unwrap();
    assert_eq!(grid.header, cells(&["a", "b", "c"]));
    assert_eq!(grid.body, vec![cells(&["only one"])]);
    assert!(!grid.is_consistent());
}

#[derive(Record)]
#[tab(footer)]
struct FailingFooter {
    id: i64,
}

impl TabFooter for FailingFooter {
    fn footer(&self) -> Result<Vec<String>, BoxError> {
        Err("totals unavailable".into())
    }
}

#[test]
fn test_capability_failure_propagates() {
    let err = tabby::build(&FailingFooter { id: 1 }, &TableConfig::default()).unwrap_err();
    match err {
        TableError::Capability { capability, source } => {
            assert_eq!(capability, CapabilityKind::Footer);
            assert_eq!(source.to_string(), "totals unavailable");
        }
        other => panic!("expected capability error, got {:?}", other),
    }
}

#[derive(Tabulate)]
#[tab(header)]
struct Batch(Vec<IdOnly>);

impl TabHeader for Batch {
    fn header(&self) -> Result<Vec<String>, BoxError> {
        Err("no header".into())
    }
}

#[test]
fn test_header_failure_returns_before_body() {
    let batch = Batch(vec![IdOnly {
        id: 1,
        name: String::new(),
    }]);
    let err = tabby::build(&batch, &TableConfig::default()).unwrap_err();
    assert!(matches!(
        err,
        TableError::Capability {
            capability: CapabilityKind::Header,
            ..
        }
    ));
}

// =============================================================================
// Table builder
// =============================================================================

#[test]
fn test_table_builder_matches_build() {
    let data = customer();
    let config = TableConfig::new().inline::<Address>();
    let direct = tabby::build(&data, &config).unwrap();
    let built = Table::new(&data).inline::<Address>().build().unwrap();
    assert_eq!(direct, built);
    let configured = Table::new(&data).config(config).build().unwrap();
    assert_eq!(direct, configured);
}

#[test]
fn test_table_builder_specialize() {
    let grid = Table::new(&Coded { code: Code(1) })
        .specialize(|code: &Code| Ok::<_, Infallible>(format!("#{}", code.0)))
        .build()
        .unwrap();
    assert_eq!(grid.body, vec![cells(&["#1"])]);
}

#[test]
fn test_table_print_to_propagates_build_errors() {
    let data: Option<IdOnly> = None;
    let mut out = Vec::new();
    let err = Table::new(&data).print_to(&mut out).unwrap_err();
    assert!(matches!(err, TableError::EmptyInput));
    assert!(out.is_empty());
}

#[test]
fn test_table_render_to() {
    let data = vec![Renamed {
        id: 1,
        name: "a".to_string(),
    }];

    let mut out = Vec::new();
    Table::new(&data)
        .render_to(&mut out, &GridRenderer::new().border(BorderStyle::None))
        .unwrap();
    assert_eq!(String::from_utf8(out).unwrap(), "id2  nam\n1    a\n");

    let mut out = Vec::new();
    Table::new(&data)
        .render_to(&mut out, &JsonRenderer::new())
        .unwrap();
    let grid: TableGrid = serde_json::from_slice(&out).unwrap();
    assert_eq!(grid.header, cells(&["id2", "nam"]));
}
