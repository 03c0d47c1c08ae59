use crate::theme::{Color, StyleQuery, Stylesheet};

#[test]
fn root_properties_flow_into_queries() {
    let css = r"
        :root { --border-width: 2; color: #111; }
        field { color: #222; }
    ";
    let sheet = Stylesheet::parse(css).expect("parse css");
    assert!(!sheet.is_empty());
    assert_eq!(sheet.root().u16("--border-width"), Some(2));

    let field = sheet.query(StyleQuery::element("field"));
    assert_eq!(field.color("color"), Some(Color::Rgb(34, 34, 34)));
    assert_eq!(field.u16("--border-width"), Some(2));
}

#[test]
fn id_rules_beat_element_rules_and_later_rules_win_ties() {
    let css = r"
        #feedback { color: green; }
        field { color: blue; }
        field#feedback { --border-color: red; }
        field#feedback { --border-color: yellow; }
    ";
    let sheet = Stylesheet::parse(css).expect("parse css");
    let style = sheet.query(StyleQuery::element("field").with_id("feedback"));
    assert_eq!(style.color("color"), Some(Color::Green));
    assert_eq!(style.color("--border-color"), Some(Color::Yellow));

    let other = sheet.query(StyleQuery::element("field").with_id("other"));
    assert_eq!(other.color("color"), Some(Color::Blue));
    assert_eq!(other.color("--border-color"), None);
}

#[test]
fn selector_lists_share_declarations() {
    let sheet = Stylesheet::parse("screen, field { --count-hidden: yes; }").expect("parse css");
    assert_eq!(
        sheet.query(StyleQuery::element("screen")).bool("--count-hidden"),
        Some(true)
    );
    assert_eq!(
        sheet.query(StyleQuery::element("FIELD")).bool("--count-hidden"),
        Some(true)
    );
}

#[test]
fn parse_rejects_malformed_selectors() {
    let err = Stylesheet::parse("field#a#b { color: red; }").expect_err("duplicate id");
    assert!(err.to_string().contains("selector already has id"));

    let err = Stylesheet::parse("screen field { color: red; }").expect_err("descendant");
    assert!(err.to_string().contains("descendant selectors"));

    let err = Stylesheet::parse("field# { color: red; }").expect_err("empty id");
    assert!(err.to_string().contains("empty id"));
}

#[test]
fn from_file_reports_missing_path() {
    let err = Stylesheet::from_file("does/not/exist.css").expect_err("missing file");
    assert!(format!("{err:#}").contains("read stylesheet does/not/exist.css"));
}
