use std::sync::{Arc, Mutex};

use tablekit::prelude::*;

#[derive(Debug, Clone, PartialEq)]
struct Row {
    id: u32,
    name: String,
}

fn rows(n: u32) -> Vec<Row> {
    (1..=n)
        .map(|id| Row {
            id,
            name: format!("row {}", id),
        })
        .collect()
}

fn columns() -> Vec<Column<Row>> {
    vec![
        Column::new("id", |r: &Row| Value::from(r.id)).numeric(),
        Column::new("name", |r: &Row| Value::from(&r.name)),
    ]
}

fn table(mode: SelectionMode, page_size: usize, n: u32) -> TableStore<Row> {
    let options = TableOptions::default()
        .with_selection(mode)
        .with_page_size(page_size);
    create_table(rows(n), columns(), |r: &Row| r.id.to_string(), options).unwrap()
}

#[test]
fn test_toggle_all_on_page_keeps_other_pages() {
    let mut table = table(SelectionMode::Multiple, 2, 5);
    table.toggle_row_id("3");
    assert_eq!(table.selected_ids(), vec!["3"]);

    table.toggle_all_on_page();
    assert_eq!(table.selected_ids(), vec!["1", "2", "3"]);
    assert!(table.is_page_selected());

    table.toggle_all_on_page();
    assert_eq!(table.selected_ids(), vec!["3"]);
    assert!(!table.is_page_selected());
}

#[test]
fn test_toggle_all_on_partially_selected_page_selects_rest() {
    let mut table = table(SelectionMode::Multiple, 2, 5);
    table.toggle_row_id("1");
    table.toggle_all_on_page();
    assert_eq!(table.selected_ids(), vec!["1", "2"]);
}

#[test]
fn test_toggle_all_on_page_follows_current_page() {
    let mut table = table(SelectionMode::Multiple, 2, 5);
    table.next_page();
    table.next_page();
    table.toggle_all_on_page();
    assert_eq!(table.selected_ids(), vec!["5"]);
}

#[test]
fn test_multiple_mode_toggles_independently() {
    let mut table = table(SelectionMode::Multiple, 10, 3);
    let all = table.rows().to_vec();
    table.toggle_row(&all[0]);
    table.toggle_row(&all[2]);
    assert!(table.is_selected(&all[0]));
    assert!(!table.is_selected(&all[1]));
    assert_eq!(table.selected_count(), 2);

    table.toggle_row(&all[0]);
    assert_eq!(table.selected_ids(), vec!["3"]);
}

#[test]
fn test_single_mode_replaces_and_clears() {
    let mut table = table(SelectionMode::Single, 10, 3);
    table.toggle_row_id("1");
    table.toggle_row_id("2");
    assert_eq!(table.selected_ids(), vec!["2"]);

    table.toggle_row_id("2");
    assert_eq!(table.selected_count(), 0);
}

#[test]
fn test_single_mode_ignores_toggle_all() {
    let mut table = table(SelectionMode::Single, 10, 3);
    table.toggle_all_on_page();
    assert_eq!(table.selected_count(), 0);
}

#[test]
fn test_none_mode_ignores_selection() {
    let mut table = table(SelectionMode::None, 10, 3);
    table.toggle_row_id("1");
    table.toggle_all_on_page();
    assert_eq!(table.selected_count(), 0);
}

#[test]
fn test_clear_empties_every_page() {
    let mut table = table(SelectionMode::Multiple, 2, 5);
    table.toggle_all_on_page();
    table.next_page();
    table.toggle_all_on_page();
    assert_eq!(table.selected_count(), 4);

    table.clear_selection();
    assert_eq!(table.selected_count(), 0);
}

#[test]
fn test_identity_is_by_row_id_not_contents() {
    let data = vec![
        Row {
            id: 1,
            name: "same".into(),
        },
        Row {
            id: 2,
            name: "same".into(),
        },
    ];
    let options = TableOptions::default().with_selection(SelectionMode::Multiple);
    let mut table = create_table(data, columns(), |r: &Row| r.id.to_string(), options).unwrap();
    table.toggle_row_id("1");
    assert!(table.is_selected_id("1"));
    assert!(!table.is_selected_id("2"));
}

#[test]
fn test_selection_survives_filtering_and_sorting() {
    let mut table = table(SelectionMode::Multiple, 10, 5);
    table.toggle_row_id("1");
    table.set_global_filter("row 4");
    assert_eq!(table.total_rows(), 1);
    assert!(table.is_selected_id("1"));

    table.set_sorting(vec![SortEntry::desc("id")]);
    assert_eq!(table.selected_ids(), vec!["1"]);
}

#[test]
fn test_selected_rows_in_dataset_order() {
    let mut table = table(SelectionMode::Multiple, 10, 4);
    table.toggle_row_id("4");
    table.toggle_row_id("2");
    let names: Vec<&str> = table
        .selected_rows()
        .iter()
        .map(|r| r.name.as_str())
        .collect();
    assert_eq!(names, vec!["row 2", "row 4"]);
}

#[test]
fn test_callback_receives_snapshots() {
    let seen: Arc<Mutex<Vec<Vec<String>>>> = Arc::new(Mutex::new(Vec::new()));
    let mut table = table(SelectionMode::Multiple, 2, 5);
    let sink = Arc::clone(&seen);
    table.on_selection_change(move |snapshot| {
        assert_eq!(snapshot.ids.len(), snapshot.rows.len());
        sink.lock().unwrap().push(snapshot.ids.clone());
    });

    table.toggle_row_id("1");
    table.set_global_filter("row");
    table.toggle_all_on_page();
    table.clear_selection();
    table.clear_selection();

    let seen = seen.lock().unwrap();
    assert_eq!(
        *seen,
        vec![
            vec!["1".to_string()],
            vec!["1".to_string(), "2".to_string()],
            vec![],
        ]
    );
}

#[test]
fn test_set_data_prunes_missing_ids() {
    let calls = Arc::new(Mutex::new(0usize));
    let mut table = table(SelectionMode::Multiple, 10, 5);
    table.toggle_row_id("2");
    table.toggle_row_id("5");

    let counter = Arc::clone(&calls);
    table.on_selection_change(move |_| *counter.lock().unwrap() += 1);

    table.set_data(rows(3));
    assert_eq!(table.selected_ids(), vec!["2"]);
    assert_eq!(*calls.lock().unwrap(), 1);

    table.set_data(rows(4));
    assert_eq!(*calls.lock().unwrap(), 1);
}

#[test]
fn test_unknown_ids_are_never_selected() {
    let calls = Arc::new(Mutex::new(0usize));
    let mut table = table(SelectionMode::Multiple, 10, 3);
    let counter = Arc::clone(&calls);
    table.on_selection_change(move |_| *counter.lock().unwrap() += 1);

    table.toggle_row_id("missing");
    let outsider = Row {
        id: 42,
        name: "not in the table".into(),
    };
    table.toggle_row(&outsider);

    assert_eq!(table.selected_count(), 0);
    assert_eq!(table.selected_count(), table.selected_rows().len());
    assert_eq!(*calls.lock().unwrap(), 0);

    table.toggle_row_id("2");
    assert_eq!(table.selected_count(), table.selected_rows().len());
}

#[test]
fn test_single_mode_unknown_id_keeps_selection() {
    let mut table = table(SelectionMode::Single, 10, 3);
    table.toggle_row_id("1");
    table.toggle_row_id("missing");
    assert_eq!(table.selected_ids(), vec!["1"]);
}
