//! Report assembly and workbook persistence

use chrono::{Local, TimeZone};
use newsharvest::{build_rows, write_workbook, Article, RawArticleFields, REPORT_HEADER};

fn fixed_now() -> chrono::DateTime<Local> {
    Local.with_ymd_and_hms(2024, 6, 15, 12, 0, 0).unwrap()
}

fn article(title: &str) -> Article {
    Article::from_raw(RawArticleFields {
        title: Some(title.to_string()),
        link: Some("https://example.com/a".to_string()),
        relative_time: Some("· 1 hour ago".to_string()),
        description: Some("A quiet day on the markets.".to_string()),
        ..Default::default()
    })
    .unwrap()
}

#[test]
fn header_has_the_fixed_ten_columns() {
    assert_eq!(REPORT_HEADER.len(), 10);
    assert_eq!(REPORT_HEADER[0], "Title");
    assert_eq!(REPORT_HEADER[9], "Image");
}

#[test]
fn derived_columns_cover_money_flags_and_lengths() {
    let articles = vec![article("Car sales up $5,000"), article("Nothing special")];
    let rows = build_rows(&articles, fixed_now());

    assert_eq!(rows.len(), 2);
    assert!(rows[0].title_contains_money);
    assert!(!rows[1].title_contains_money);
    assert_eq!(rows[0].title_length, "Car sales up $5,000".chars().count());
    assert_eq!(rows[1].title_length, "Nothing special".chars().count());
}

#[test]
fn time_column_is_second_precision_absolute() {
    let rows = build_rows(&[article("Some headline")], fixed_now());
    // "· 1 hour ago" resolved against the fixed clock.
    assert_eq!(rows[0].time, "2024-06-15 11:00:00");
}

#[test]
fn sentinel_fields_pass_through_unchanged() {
    let rows = build_rows(&[article("Some headline")], fixed_now());
    assert_eq!(rows[0].source, "N/A");
    assert_eq!(rows[0].image, "N/A");
    assert!(!rows[0].description_contains_money);
}

#[test]
fn workbook_lands_under_a_timestamped_name() {
    let dir = tempfile::tempdir().unwrap();
    let now = fixed_now();
    let rows = build_rows(&[article("Car sales up $5,000")], now);

    let path = write_workbook(&rows, dir.path(), now).unwrap();
    assert_eq!(
        path.file_name().unwrap().to_str().unwrap(),
        "2024-06-15_12-00-00.xlsx"
    );
    assert!(path.exists());
    assert!(std::fs::metadata(&path).unwrap().len() > 0);
}

#[test]
fn empty_working_set_still_writes_a_header_only_workbook() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_workbook(&[], dir.path(), fixed_now()).unwrap();
    assert!(path.exists());
}
