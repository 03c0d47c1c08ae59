use std::path::PathBuf;
use std::process;

use crate::runtime::app::maybe_reload_stylesheet;
use crate::theme::{Color, StyleQuery};

fn scratch_path(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!("feedback-field-{}-{name}.css", process::id()))
}

#[tokio::test]
async fn reload_returns_sheet_only_when_contents_change() {
    let path = scratch_path("reload");
    tokio::fs::write(&path, "field { --border-color: red; }")
        .await
        .expect("write stylesheet");

    let mut last = None;
    let first = maybe_reload_stylesheet(&path, &mut last)
        .await
        .expect("reload")
        .expect("first read yields a sheet");
    assert_eq!(
        first
            .query(StyleQuery::element("field"))
            .color("--border-color"),
        Some(Color::Red)
    );
    assert!(
        maybe_reload_stylesheet(&path, &mut last)
            .await
            .expect("reload")
            .is_none()
    );

    tokio::fs::write(&path, "field { --border-color: blue; }")
        .await
        .expect("rewrite stylesheet");
    let changed = maybe_reload_stylesheet(&path, &mut last)
        .await
        .expect("reload")
        .expect("changed contents yield a sheet");
    assert_eq!(
        changed
            .query(StyleQuery::element("field"))
            .color("--border-color"),
        Some(Color::Blue)
    );

    let _ = tokio::fs::remove_file(&path).await;
}

#[tokio::test]
async fn reload_ignores_missing_file_and_reports_parse_errors() {
    let mut last = None;
    let missing = scratch_path("missing");
    assert!(
        maybe_reload_stylesheet(&missing, &mut last)
            .await
            .expect("missing file is not an error")
            .is_none()
    );

    let broken = scratch_path("broken");
    tokio::fs::write(&broken, "field#a#b { color: red; }")
        .await
        .expect("write stylesheet");
    let err = maybe_reload_stylesheet(&broken, &mut last)
        .await
        .expect_err("parse error");
    assert!(format!("{err:#}").contains("selector already has id"));
    assert!(last.is_none());

    let _ = tokio::fs::remove_file(&broken).await;
}
