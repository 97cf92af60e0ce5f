use std::collections::HashMap;

use tablekit::prelude::*;

fn exportable() -> TableOptions {
    TableOptions::default()
        .with_page_size(2)
        .with_features(Features {
            export: true,
            ..Features::default()
        })
}

fn table(options: TableOptions) -> TableStore<Record> {
    let rows = vec![
        Record::new()
            .set("id", 1i64)
            .set("name", "Alice")
            .set("role", "admin"),
        Record::new()
            .set("id", 2i64)
            .set("name", "Bob \"the builder\"")
            .set("role", "user"),
        Record::new().set("id", 3i64).set("name", "Carol, Jr."),
    ];
    let columns = vec![
        Column::field("id").header("ID").numeric(),
        Column::field("name").header("Name"),
        Column::field("role").header("Role"),
    ];
    create_table(rows, columns, |r: &Record| r.text("id"), options).unwrap()
}

#[test]
fn test_csv_includes_every_page() {
    let table = table(exportable());
    assert_eq!(table.paged_rows().len(), 2);

    let csv = table.export("csv").unwrap();
    let lines: Vec<&str> = csv.split('\n').collect();
    assert_eq!(lines.len(), 4);
    assert_eq!(lines[0], r#""ID","Name","Role""#);
    assert_eq!(lines[1], r#""1","Alice","admin""#);
    assert_eq!(lines[2], r#""2","Bob ""the builder""","user""#);
    assert_eq!(lines[3], r#""3","Carol, Jr.","""#);
}

#[test]
fn test_csv_follows_sort_filter_and_visibility() {
    let mut table = table(exportable());
    table.set_sorting(vec![SortEntry::desc("id")]);
    table.set_global_filter("o");
    table.set_column_visibility(HashMap::from([("role".to_string(), false)]));

    let csv = table.export("csv").unwrap();
    assert_eq!(
        csv,
        "\"ID\",\"Name\"\n\"3\",\"Carol, Jr.\"\n\"2\",\"Bob \"\"the builder\"\"\""
    );
}

#[test]
fn test_csv_with_no_rows_is_header_only() {
    let mut table = table(exportable());
    table.set_global_filter("nobody");
    assert_eq!(table.export("csv").unwrap(), r#""ID","Name","Role""#);
}

#[test]
fn test_json_is_keyed_by_column_id_in_order() {
    let mut table = table(exportable());
    table.set_filter("name", "carol");

    let json = table.export("json").unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(
        parsed,
        serde_json::json!([{ "id": 3, "name": "Carol, Jr.", "role": null }])
    );

    let object = parsed[0].as_object().unwrap();
    let keys: Vec<&str> = object.keys().map(String::as_str).collect();
    assert_eq!(keys, vec!["id", "name", "role"]);
}

#[test]
fn test_json_uses_visible_columns() {
    let mut table = table(exportable());
    table.set_column_visibility(HashMap::from([("id".to_string(), false)]));
    let parsed: serde_json::Value =
        serde_json::from_str(&table.export_as(ExportFormat::Json).unwrap()).unwrap();
    assert_eq!(parsed.as_array().map(Vec::len), Some(3));
    assert_eq!(
        parsed[1],
        serde_json::json!({ "name": "Bob \"the builder\"", "role": "user" })
    );
}

#[test]
fn test_format_names_are_case_insensitive() {
    let table = table(exportable());
    assert_eq!(table.export("CSV").unwrap(), table.export("csv").unwrap());
    assert_eq!("Json".parse::<ExportFormat>().unwrap(), ExportFormat::Json);
    assert_eq!(ExportFormat::Csv.extension(), "csv");
    assert_eq!(ExportFormat::Json.mime_type(), "application/json");
}

#[test]
fn test_unsupported_format_fails() {
    let table = table(exportable());
    let err = table.export("xml").unwrap_err();
    assert!(matches!(err, ExportError::UnsupportedFormat(ref f) if f == "xml"));
    assert_eq!(err.to_string(), "Unsupported export format: xml");
}

#[test]
fn test_export_requires_feature() {
    let table = table(TableOptions::default());
    assert!(matches!(table.export("csv"), Err(ExportError::Disabled)));
}
