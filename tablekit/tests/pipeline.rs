use tablekit::query::{DerivedView, Filters, GlobalFilterMode, Pagination, Query, derive};
use tablekit::{Column, ColumnRegistry, FilterOption, Record, Value};

fn people() -> Vec<Record> {
    vec![
        Record::new()
            .set("id", 1i64)
            .set("name", "Alice")
            .set("status", "active"),
        Record::new()
            .set("id", 2i64)
            .set("name", "Bob")
            .set("status", "inactive"),
        Record::new()
            .set("id", 3i64)
            .set("name", "alicia")
            .set("status", "active"),
    ]
}

fn columns() -> ColumnRegistry<Record> {
    ColumnRegistry::new(vec![
        Column::field("id"),
        Column::field("name"),
        Column::field("status").select_filter(vec![
            FilterOption::new("Active", "active"),
            FilterOption::new("Inactive", "inactive"),
        ]),
    ])
    .unwrap()
}

fn run<R>(
    rows: &[R],
    columns: &ColumnRegistry<R>,
    global: &str,
    filters: &Filters,
    pagination: Option<Pagination>,
) -> DerivedView {
    let query = Query {
        global_filter: global,
        global_filter_mode: GlobalFilterMode::Substring,
        filters,
        sorting: &[],
    };
    derive(rows, columns, query, pagination)
}

fn filter(pairs: &[(&str, &str)]) -> Filters {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), Value::from(*v)))
        .collect()
}

#[test]
fn test_global_filter_single_column() {
    let rows = vec![
        Record::new().set("name", "Alice"),
        Record::new().set("name", "Bob"),
    ];
    let columns = ColumnRegistry::new(vec![Column::field("name")]).unwrap();
    let view = run(&rows, &columns, "ali", &Filters::new(), None);
    assert_eq!(view.all_filtered_sorted_rows, vec![0]);
    assert_eq!(view.total_rows, 1);
}

#[test]
fn test_global_filter_is_case_insensitive() {
    let view = run(&people(), &columns(), "ALI", &Filters::new(), None);
    assert_eq!(view.all_filtered_sorted_rows, vec![0, 2]);
}

#[test]
fn test_global_filter_matches_any_column() {
    let view = run(&people(), &columns(), "inact", &Filters::new(), None);
    assert_eq!(view.all_filtered_sorted_rows, vec![1]);
}

#[test]
fn test_empty_global_filter_is_noop() {
    let view = run(&people(), &columns(), "", &Filters::new(), None);
    assert_eq!(view.all_filtered_sorted_rows, vec![0, 1, 2]);
}

#[test]
fn test_fuzzy_global_filter_keeps_order() {
    let query = Query {
        global_filter: "alc",
        global_filter_mode: GlobalFilterMode::Fuzzy,
        filters: &Filters::new(),
        sorting: &[],
    };
    let view = derive(&people(), &columns(), query, None);
    assert_eq!(view.all_filtered_sorted_rows, vec![0, 2]);

    let substring = run(&people(), &columns(), "alc", &Filters::new(), None);
    assert!(substring.all_filtered_sorted_rows.is_empty());
}

#[test]
fn test_select_filter_requires_exact_match() {
    let view = run(
        &people(),
        &columns(),
        "",
        &filter(&[("status", "active")]),
        None,
    );
    assert_eq!(view.all_filtered_sorted_rows, vec![0, 2]);
}

#[test]
fn test_text_filter_matches_substring() {
    let columns = ColumnRegistry::new(vec![Column::field("name"), Column::field("status")]).unwrap();
    let view = run(
        &people(),
        &columns,
        "",
        &filter(&[("status", "ACTIVE")]),
        None,
    );
    // "inactive" contains "active" for a text filter.
    assert_eq!(view.all_filtered_sorted_rows, vec![0, 1, 2]);
}

#[test]
fn test_global_and_column_filters_combine() {
    let view = run(
        &people(),
        &columns(),
        "ali",
        &filter(&[("status", "active"), ("name", "cia")]),
        None,
    );
    assert_eq!(view.all_filtered_sorted_rows, vec![2]);
}

#[test]
fn test_empty_filter_value_is_noop() {
    let view = run(&people(), &columns(), "", &filter(&[("name", "")]), None);
    assert_eq!(view.total_rows, 3);
}

#[test]
fn test_unknown_column_filter_is_ignored() {
    let view = run(&people(), &columns(), "", &filter(&[("nope", "x")]), None);
    assert_eq!(view.total_rows, 3);
}

#[test]
fn test_non_filterable_column_is_ignored() {
    let columns = ColumnRegistry::new(vec![Column::field("name").filterable(false)]).unwrap();
    let view = run(&people(), &columns, "", &filter(&[("name", "Bob")]), None);
    assert_eq!(view.total_rows, 3);
}

#[test]
fn test_missing_values_coerce_to_empty() {
    let rows = vec![
        Record::new().set("id", 1i64),
        Record::new().set("id", 2i64).set("name", "Zed"),
    ];
    let columns = ColumnRegistry::new(vec![Column::field("id"), Column::field("name")]).unwrap();

    let view = run(&rows, &columns, "zed", &Filters::new(), None);
    assert_eq!(view.all_filtered_sorted_rows, vec![1]);

    let view = run(&rows, &columns, "", &filter(&[("name", "z")]), None);
    assert_eq!(view.all_filtered_sorted_rows, vec![1]);
}

#[test]
fn test_accessor_derives_value() {
    struct User {
        first: String,
        last: String,
    }
    let rows = vec![
        User {
            first: "Ada".into(),
            last: "Lovelace".into(),
        },
        User {
            first: "Alan".into(),
            last: "Turing".into(),
        },
    ];
    let columns = ColumnRegistry::new(vec![Column::new("full_name", |u: &User| {
        Value::from(format!("{} {}", u.first, u.last))
    })])
    .unwrap();
    let view = run(&rows, &columns, "n tur", &Filters::new(), None);
    assert_eq!(view.all_filtered_sorted_rows, vec![1]);
}

#[test]
fn test_pagination_slices_page() {
    let rows: Vec<Record> = (0..25).map(|i| Record::new().set("id", i as i64)).collect();
    let columns = ColumnRegistry::new(vec![Column::field("id")]).unwrap();
    let pagination = Pagination {
        page_index: 1,
        ..Pagination::new(10)
    };
    let view = run(&rows, &columns, "", &Filters::new(), Some(pagination));
    assert_eq!(view.page_count, 3);
    assert_eq!(view.page_index, 1);
    assert_eq!(view.paged_rows, (10..20).collect::<Vec<_>>());
    assert_eq!(view.all_filtered_sorted_rows.len(), 25);
}

#[test]
fn test_pagination_clamps_out_of_range_index() {
    let rows: Vec<Record> = (0..25).map(|i| Record::new().set("id", i as i64)).collect();
    let columns = ColumnRegistry::new(vec![Column::field("id")]).unwrap();
    let pagination = Pagination {
        page_index: 7,
        ..Pagination::new(10)
    };
    let view = run(&rows, &columns, "", &Filters::new(), Some(pagination));
    assert_eq!(view.page_index, 2);
    assert_eq!(view.paged_rows, (20..25).collect::<Vec<_>>());
}

#[test]
fn test_pagination_disabled_returns_single_page() {
    let rows: Vec<Record> = (0..25).map(|i| Record::new().set("id", i as i64)).collect();
    let columns = ColumnRegistry::new(vec![Column::field("id")]).unwrap();
    let view = run(&rows, &columns, "", &Filters::new(), None);
    assert_eq!(view.page_count, 1);
    assert_eq!(view.paged_rows.len(), 25);
}

#[test]
fn test_page_count_invariant() {
    let columns = ColumnRegistry::new(vec![Column::field("id")]).unwrap();
    for total in 0..=23usize {
        let rows: Vec<Record> = (0..total).map(|i| Record::new().set("id", i as i64)).collect();
        for size in 1..=7usize {
            for requested in [0, 1, 3, 100] {
                let pagination = Pagination {
                    page_index: requested,
                    ..Pagination::new(size)
                };
                let view = run(&rows, &columns, "", &Filters::new(), Some(pagination));
                assert_eq!(view.page_count, total.div_ceil(size));
                if total == 0 {
                    assert_eq!(view.page_index, 0);
                    assert!(view.paged_rows.is_empty());
                } else {
                    assert!(view.page_index < view.page_count);
                    assert!(!view.paged_rows.is_empty());
                    assert!(view.paged_rows.len() <= size);
                }
            }
        }
    }
}

#[test]
fn test_select_filter_compares_values_not_text() {
    let rows = vec![
        Record::new().set("flag", true).set("level", 1i64),
        Record::new().set("flag", "true").set("level", 1.0),
        Record::new().set("flag", false).set("level", "1"),
    ];
    let columns = ColumnRegistry::new(vec![
        Column::field("flag").select_filter(vec![FilterOption::new("Yes", true)]),
        Column::field("level").select_filter(vec![FilterOption::new("One", 1i64)]),
    ])
    .unwrap();

    let mut filters = Filters::new();
    filters.insert("flag".to_string(), Value::from(true));
    let view = run(&rows, &columns, "", &filters, None);
    assert_eq!(view.all_filtered_sorted_rows, vec![0]);

    let mut filters = Filters::new();
    filters.insert("level".to_string(), Value::from(1i64));
    let view = run(&rows, &columns, "", &filters, None);
    assert_eq!(view.all_filtered_sorted_rows, vec![0]);

    let view = run(&rows, &columns, "", &filter(&[("flag", "true")]), None);
    assert_eq!(view.all_filtered_sorted_rows, vec![1]);
}
