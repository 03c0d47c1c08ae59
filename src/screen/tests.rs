use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};

use super::{FEEDBACK_FIELD_ID, FeedbackScreen, FieldConfig};
use crate::events::TerminalEvent;
use crate::field::{Phase, Validity};
use crate::interactions::FieldHitboxes;
use crate::renderer::Renderer;
use crate::runtime::{Screen, ScreenControl};
use crate::theme::{Color, DEFAULT_PLACEHOLDER, Stylesheet, Theme};
use crate::widget::TextSurface;

fn key(code: KeyCode) -> TerminalEvent {
    TerminalEvent::Key(KeyEvent::new(code, KeyModifiers::NONE))
}

fn click(column: u16, row: u16) -> TerminalEvent {
    TerminalEvent::Mouse(MouseEvent {
        kind: MouseEventKind::Down(MouseButton::Left),
        column,
        row,
        modifiers: KeyModifiers::NONE,
    })
}

fn type_text(screen: &mut FeedbackScreen, text: &str) {
    for ch in text.chars() {
        screen.handle_event(&key(KeyCode::Char(ch)));
    }
}

#[test]
fn keys_are_ignored_until_the_field_is_focused() {
    let mut screen = FeedbackScreen::new(Theme::default(), FieldConfig::default());
    type_text(&mut screen, "abc");
    assert_eq!(screen.field().phase(), Phase::Empty);
    assert_eq!(screen.field().surface().text(), DEFAULT_PLACEHOLDER);

    screen.handle_event(&key(KeyCode::Tab));
    assert!(screen.is_focused());
    type_text(&mut screen, "abc");
    assert_eq!(screen.field().text(), "abc");
    assert_eq!(screen.field().surface().count_caption().text, "3/300");
}

#[test]
fn blurring_a_blank_field_restores_the_placeholder() {
    let mut screen = FeedbackScreen::new(Theme::default(), FieldConfig::default());
    screen.handle_event(&key(KeyCode::Tab));
    assert_eq!(screen.field().surface().text(), "");

    assert_eq!(
        screen.handle_event(&key(KeyCode::Esc)),
        ScreenControl::Continue
    );
    assert!(!screen.is_focused());
    assert_eq!(screen.field().phase(), Phase::Empty);
    assert_eq!(screen.field().surface().text(), DEFAULT_PLACEHOLDER);

    assert_eq!(screen.handle_event(&key(KeyCode::Esc)), ScreenControl::Quit);
}

#[test]
fn backspacing_everything_returns_to_placeholder_while_focused() {
    let mut screen = FeedbackScreen::new(Theme::default(), FieldConfig::default());
    screen.handle_event(&key(KeyCode::Tab));
    type_text(&mut screen, "H");
    screen.handle_event(&key(KeyCode::Backspace));

    assert!(screen.is_focused());
    assert_eq!(screen.field().phase(), Phase::Empty);
    assert_eq!(screen.field().surface().caret(), 0);
    assert_eq!(screen.field().surface().count_caption().text, "0/300");

    screen.handle_event(&key(KeyCode::Right));
    assert_eq!(screen.field().surface().caret(), 0);
}

#[test]
fn exceeding_the_maximum_flags_the_field() {
    let config = FieldConfig {
        max_characters: 4,
        ..FieldConfig::default()
    };
    let mut screen = FeedbackScreen::new(Theme::default(), config);
    screen.handle_event(&key(KeyCode::Tab));
    type_text(&mut screen, "abcde");
    assert_eq!(screen.field().validity(), Validity::Invalid);
    assert_eq!(screen.field().surface().count_caption().text, "5/4");

    screen.handle_event(&key(KeyCode::Backspace));
    assert_eq!(screen.field().validity(), Validity::Valid);
}

#[test]
fn paste_inserts_at_caret() {
    let mut screen = FeedbackScreen::new(Theme::default(), FieldConfig::default());
    screen.handle_event(&key(KeyCode::Tab));
    screen.handle_event(&TerminalEvent::Paste("buna ziua".into()));
    assert_eq!(screen.field().text(), "buna ziua");
}

#[test]
fn clicks_focus_inside_and_blur_outside_the_field() {
    let mut screen =
        FeedbackScreen::new(Theme::default(), FieldConfig::default()).with_id("screen.click");
    let mut renderer = Renderer::headless_sized(80, 24).expect("headless renderer");
    renderer
        .draw(|frame| {
            let area = frame.size();
            screen.render(frame, area);
        })
        .expect("draw");

    let hitbox = FieldHitboxes::get("screen.click").expect("field drawn");
    assert_eq!(hitbox.width, 60);
    assert_eq!(hitbox.x, 10);

    screen.handle_event(&click(hitbox.x + 1, hitbox.y + 1));
    assert!(screen.is_focused());
    screen.handle_event(&click(0, 0));
    assert!(!screen.is_focused());
}

#[test]
fn tick_blinks_caret_only_while_focused() {
    let mut screen = FeedbackScreen::new(Theme::default(), FieldConfig::default());
    screen.handle_event(&TerminalEvent::Tick);
    assert!(screen.caret_visible);

    screen.handle_event(&key(KeyCode::Tab));
    screen.handle_event(&TerminalEvent::Tick);
    assert!(!screen.caret_visible);
    type_text(&mut screen, "x");
    assert!(screen.caret_visible);
}

#[test]
fn stylesheet_configures_theme_limits_and_title() {
    let css = r#"
        screen { --title: "Parerea ta"; }
        field#feedback {
            --placeholder: "Scrie aici";
            --border-color: blue;
            --max-characters: 120;
            --count-hidden: true;
        }
    "#;
    let sheet = Stylesheet::parse(css).expect("parse css");
    let screen = FeedbackScreen::from_stylesheet(&sheet);

    assert_eq!(screen.title, "Parerea ta");
    assert_eq!(screen.config().max_characters, 120);
    assert_eq!(screen.field().max_characters(), 120);
    assert!(screen.field().is_character_count_hidden());
    assert_eq!(screen.field().surface().text(), "Scrie aici");
    assert_eq!(screen.field().surface().border().color, Color::Blue);
    assert_eq!(FEEDBACK_FIELD_ID, "feedback");
}

#[test]
fn reloaded_stylesheet_keeps_typed_text() {
    let mut screen = FeedbackScreen::new(Theme::default(), FieldConfig::default());
    screen.handle_event(&key(KeyCode::Tab));
    type_text(&mut screen, "draft");

    let sheet = Stylesheet::parse("field { color: yellow; --max-characters: 3; }")
        .expect("parse css");
    screen.apply_stylesheet(&sheet);

    assert_eq!(screen.field().surface().text(), "draft");
    assert_eq!(screen.field().surface().text_color(), Color::Yellow);
    assert_eq!(screen.field().surface().count_caption().text, "5/3");
}

#[test]
fn bundled_stylesheet_resolves_feedback_defaults() {
    let sheet = Stylesheet::parse(include_str!("../../styles/feedback.css")).expect("parse css");
    let screen = FeedbackScreen::from_stylesheet(&sheet);
    let surface = screen.field().surface();

    assert_eq!(surface.text(), DEFAULT_PLACEHOLDER);
    assert_eq!(surface.text_color(), Color::DarkGray);
    assert_eq!(surface.count_caption().text, "0/300");
    assert_eq!(screen.field().theme().error_border_color, Color::Rgb(0xe5, 0x48, 0x4d));
    assert_eq!(screen.config(), FieldConfig::default());
}

#[test]
fn placeholder_with_semicolon_survives_stylesheet_parsing() {
    let sheet = Stylesheet::parse(r#"field#feedback { --placeholder: "Scrie aici; te rog"; }"#)
        .expect("parse css");
    let screen = FeedbackScreen::from_stylesheet(&sheet);
    assert_eq!(screen.field().surface().text(), "Scrie aici; te rog");
}

#[test]
fn raising_the_maximum_on_reload_clears_the_error() {
    let config = FieldConfig {
        max_characters: 3,
        ..FieldConfig::default()
    };
    let mut screen = FeedbackScreen::new(Theme::default(), config);
    screen.handle_event(&key(KeyCode::Tab));
    type_text(&mut screen, "abcde");
    assert_eq!(screen.field().validity(), Validity::Invalid);
    assert!(screen.field().surface().error_caption().visible);

    let sheet = Stylesheet::parse("field#feedback { --max-characters: 300; }").expect("parse css");
    screen.apply_stylesheet(&sheet);

    assert_eq!(screen.field().validity(), Validity::Valid);
    assert!(!screen.field().surface().error_caption().visible);
    assert_eq!(
        screen.field().surface().border().color,
        screen.field().theme().border_color
    );
    assert_eq!(screen.field().surface().count_caption().text, "5/300");
}
