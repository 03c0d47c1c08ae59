use crate::theme::Color;
use crate::theme::parser::{
    parse_color, parse_declarations, split_rules, strip_comments, unquote,
};

#[test]
fn strips_block_comments() {
    let input = "color: red; /* remove me */ width: 10;";
    assert_eq!(strip_comments(input), "color: red;  width: 10;");
    assert_eq!(strip_comments("a /* never closed"), "a ");
}

#[test]
fn parses_declarations_with_quotes() {
    let props = parse_declarations("--placeholder: \"Scrie aici: orice\"; --border-width: 2;");
    assert_eq!(props.get("--placeholder").unwrap(), "Scrie aici: orice");
    assert_eq!(props.get("--border-width").unwrap(), "2");
    assert_eq!(unquote("  \"\"  "), "");
}

#[test]
fn split_rules_ignores_braces_inside_quotes() {
    let rules = split_rules(r#"a { x: "{count}/{max}"; } b{y:1}"#);
    assert_eq!(rules.len(), 2);
    assert_eq!(rules[0].0.trim(), "a");
    assert_eq!(rules[0].1.trim(), r#"x: "{count}/{max}";"#);
    assert_eq!(rules[1], (" b", "y:1"));
}

#[test]
fn parses_hex_rgb_and_named_colors() {
    assert_eq!(parse_color("#ff0000"), Some(Color::Rgb(255, 0, 0)));
    assert_eq!(parse_color("#0f0"), Some(Color::Rgb(0, 255, 0)));
    assert_eq!(parse_color("rgb(10, 20, 30)"), Some(Color::Rgb(10, 20, 30)));
    assert_eq!(parse_color("DarkGray"), Some(Color::DarkGray));
    assert_eq!(parse_color("#12345"), None);
    assert_eq!(parse_color("rgb(1,2)"), None);
    assert_eq!(parse_color("chartreuse"), None);
}

#[test]
fn semicolons_inside_quotes_stay_in_the_value() {
    let props = parse_declarations(r#"--placeholder: "Scrie aici; te rog"; color: red"#);
    assert_eq!(props.get("--placeholder").unwrap(), "Scrie aici; te rog");
    assert_eq!(props.get("color").unwrap(), "red");
    assert_eq!(props.len(), 2);
}

#[test]
fn light_gray_is_the_light_terminal_gray() {
    assert_eq!(parse_color("lightgray"), Some(Color::Gray));
    assert_eq!(parse_color("LightGrey"), Some(Color::Gray));
    assert_eq!(parse_color("darkgrey"), Some(Color::DarkGray));
}
