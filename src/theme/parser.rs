use std::collections::HashMap;

use super::Color;

pub(crate) fn strip_comments(input: &str) -> String {
    let mut result = String::with_capacity(input.len());
    let mut rest = input;
    while let Some(start) = rest.find("/*") {
        result.push_str(&rest[..start]);
        match rest[start + 2..].find("*/") {
            Some(end) => rest = &rest[start + 2 + end + 2..],
            None => return result,
        }
    }
    result.push_str(rest);
    result
}

/// Splits a sheet into `(selectors, body)` pairs. Braces inside quoted
/// values do not open or close a rule.
pub(crate) fn split_rules(input: &str) -> Vec<(&str, &str)> {
    let mut rules = Vec::new();
    let mut in_quotes = false;
    let mut start = 0;
    let mut open = None;
    for (index, ch) in input.char_indices() {
        match ch {
            '"' => in_quotes = !in_quotes,
            '{' if !in_quotes && open.is_none() => open = Some(index),
            '}' if !in_quotes => {
                if let Some(brace) = open.take() {
                    rules.push((&input[start..brace], &input[brace + 1..index]));
                }
                start = index + 1;
            }
            _ => {}
        }
    }
    rules
}

pub(crate) fn parse_declarations(body: &str) -> HashMap<String, String> {
    split_declarations(body)
        .into_iter()
        .filter_map(|declaration| declaration.split_once(':'))
        .filter_map(|(name, value)| {
            let key = name.trim().to_ascii_lowercase();
            (!key.is_empty()).then(|| (key, unquote(value)))
        })
        .collect()
}

/// Splits on `;` outside quoted values.
fn split_declarations(body: &str) -> Vec<&str> {
    let mut declarations = Vec::new();
    let mut in_quotes = false;
    let mut start = 0;
    for (index, ch) in body.char_indices() {
        match ch {
            '"' => in_quotes = !in_quotes,
            ';' if !in_quotes => {
                declarations.push(&body[start..index]);
                start = index + 1;
            }
            _ => {}
        }
    }
    declarations.push(&body[start..]);
    declarations
}

pub(crate) fn unquote(value: &str) -> String {
    let trimmed = value.trim();
    trimmed
        .strip_prefix('"')
        .and_then(|inner| inner.strip_suffix('"'))
        .unwrap_or(trimmed)
        .to_string()
}

pub(crate) fn parse_color(value: &str) -> Option<Color> {
    let trimmed = value.trim();
    if let Some(hex) = trimmed.strip_prefix('#') {
        return parse_hex_color(hex);
    }
    if let Some(inner) = trimmed
        .strip_prefix("rgb(")
        .and_then(|v| v.strip_suffix(')'))
    {
        let parts: Vec<u8> = inner
            .split(',')
            .filter_map(|part| part.trim().parse::<u8>().ok())
            .collect();
        if let [r, g, b] = parts[..] {
            return Some(Color::Rgb(r, g, b));
        }
        return None;
    }
    named_color(trimmed)
}

fn parse_hex_color(hex: &str) -> Option<Color> {
    if !hex.is_ascii() {
        return None;
    }
    let channel = |digits: &str| u8::from_str_radix(digits, 16).ok();
    match hex.len() {
        3 => Some(Color::Rgb(
            channel(&hex[0..1].repeat(2))?,
            channel(&hex[1..2].repeat(2))?,
            channel(&hex[2..3].repeat(2))?,
        )),
        6 => Some(Color::Rgb(
            channel(&hex[0..2])?,
            channel(&hex[2..4])?,
            channel(&hex[4..6])?,
        )),
        _ => None,
    }
}

fn named_color(value: &str) -> Option<Color> {
    match value.to_ascii_lowercase().as_str() {
        "black" => Some(Color::Black),
        "white" => Some(Color::White),
        "red" => Some(Color::Red),
        "lightred" => Some(Color::LightRed),
        "green" => Some(Color::Green),
        "blue" => Some(Color::Blue),
        "yellow" => Some(Color::Yellow),
        "cyan" => Some(Color::Cyan),
        "magenta" => Some(Color::Magenta),
        "gray" | "grey" | "lightgray" | "lightgrey" => Some(Color::Gray),
        "darkgray" | "darkgrey" => Some(Color::DarkGray),
        "reset" | "default" => Some(Color::Reset),
        _ => None,
    }
}
