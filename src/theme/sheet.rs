use std::collections::HashMap;
use std::fs;
use std::path::Path;

use anyhow::{Context, Result, anyhow};

use super::Color;
use super::parser::{parse_color, parse_declarations, split_rules, strip_comments};

/// A small CSS-like sheet: `:root`, `element` and `element#id` rules.
#[derive(Clone, Debug, Default)]
pub struct Stylesheet {
    root: HashMap<String, String>,
    rules: Vec<StyleRule>,
}

impl Stylesheet {
    pub fn parse(input: &str) -> Result<Self> {
        let mut sheet = Stylesheet::default();
        let cleaned = strip_comments(input);
        for (selectors, body) in split_rules(&cleaned) {
            let declarations = parse_declarations(body);
            for raw in selectors.split(',').map(str::trim) {
                if raw.is_empty() {
                    continue;
                }
                if raw == ":root" {
                    sheet.root.extend(declarations.clone());
                    continue;
                }
                let selector = Selector::parse(raw)?;
                let order = sheet.rules.len();
                sheet.rules.push(StyleRule {
                    selector,
                    declarations: declarations.clone(),
                    order,
                });
            }
        }
        Ok(sheet)
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path)
            .with_context(|| format!("read stylesheet {}", path.display()))?;
        Self::parse(&contents).with_context(|| format!("parse stylesheet {}", path.display()))
    }

    pub fn root(&self) -> ComputedStyle {
        ComputedStyle {
            props: self.root.clone(),
        }
    }

    /// Root properties overlaid by every matching rule, least specific first.
    pub fn query(&self, query: StyleQuery<'_>) -> ComputedStyle {
        let mut matches: Vec<&StyleRule> = self
            .rules
            .iter()
            .filter(|rule| rule.selector.matches(&query))
            .collect();
        matches.sort_by_key(|rule| (rule.selector.specificity(), rule.order));
        let mut props = self.root.clone();
        for rule in matches {
            props.extend(rule.declarations.clone());
        }
        ComputedStyle { props }
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_empty() && self.rules.is_empty()
    }
}

#[derive(Clone, Debug)]
struct StyleRule {
    selector: Selector,
    declarations: HashMap<String, String>,
    order: usize,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
struct Selector {
    element: Option<String>,
    id: Option<String>,
}

impl Selector {
    fn parse(raw: &str) -> Result<Self> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(anyhow!("empty selector"));
        }
        let mut segments = trimmed.split('#');
        let element = segments
            .next()
            .map(str::trim)
            .filter(|element| !element.is_empty())
            .map(str::to_ascii_lowercase);
        if element.as_deref().is_some_and(|e| e.contains(char::is_whitespace)) {
            return Err(anyhow!("descendant selectors are not supported: {trimmed}"));
        }
        let id = segments.next().map(|id| id.trim().to_string());
        if segments.next().is_some() {
            return Err(anyhow!("selector already has id: {trimmed}"));
        }
        if id.as_deref() == Some("") {
            return Err(anyhow!("empty id in selector: {trimmed}"));
        }
        Ok(Self { element, id })
    }

    fn matches(&self, query: &StyleQuery<'_>) -> bool {
        let element_ok = self
            .element
            .as_deref()
            .is_none_or(|element| element.eq_ignore_ascii_case(query.element));
        let id_ok = self.id.is_none() || self.id.as_deref() == query.id;
        element_ok && id_ok
    }

    fn specificity(&self) -> (u8, u8) {
        (u8::from(self.id.is_some()), u8::from(self.element.is_some()))
    }
}

#[derive(Clone, Copy, Debug)]
pub struct StyleQuery<'a> {
    element: &'a str,
    id: Option<&'a str>,
}

impl<'a> StyleQuery<'a> {
    pub fn element(element: &'a str) -> Self {
        Self { element, id: None }
    }

    pub fn with_id(mut self, id: &'a str) -> Self {
        self.id = Some(id);
        self
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ComputedStyle {
    props: HashMap<String, String>,
}

impl ComputedStyle {
    pub fn get(&self, name: &str) -> Option<&str> {
        self.props
            .get(&name.to_ascii_lowercase())
            .map(String::as_str)
    }

    pub fn color(&self, name: &str) -> Option<Color> {
        self.get(name).and_then(parse_color)
    }

    pub fn bool(&self, name: &str) -> Option<bool> {
        match self.get(name)?.to_ascii_lowercase().as_str() {
            "true" | "1" | "yes" | "on" => Some(true),
            "false" | "0" | "no" | "off" => Some(false),
            _ => None,
        }
    }

    pub fn u16(&self, name: &str) -> Option<u16> {
        self.get(name)?.trim().parse().ok()
    }

    pub fn usize(&self, name: &str) -> Option<usize> {
        self.get(name)?.trim().parse().ok()
    }

    pub fn text(&self, name: &str) -> Option<&str> {
        self.get(name)
    }

    pub fn is_empty(&self) -> bool {
        self.props.is_empty()
    }
}
