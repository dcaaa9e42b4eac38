#![forbid(unsafe_code)]

//! Property tests: arbitrary key sequences never corrupt editor state or
//! draw outside the widget's area.

use proptest::prelude::*;
use tessera_core::geometry::Rect;
use tessera_core::key::{Key, KeyCode};
use tessera_layout::Component;
use tessera_render::{Cell, Screen};
use tessera_style::Theme;
use tessera_widgets::{Input, TextArea};

fn key_strategy() -> impl Strategy<Value = Key> {
    prop_oneof![
        4 => prop::sample::select(vec!['a', 'z', ' ', 'é', '日', '本', '-', '😀']).prop_map(Key::char),
        1 => prop::sample::select(vec!['a', 'e', 'u', 'w']).prop_map(Key::ctrl),
        3 => prop::sample::select(vec![
            KeyCode::Backspace,
            KeyCode::Delete,
            KeyCode::Left,
            KeyCode::Right,
            KeyCode::Up,
            KeyCode::Down,
            KeyCode::Home,
            KeyCode::End,
            KeyCode::Enter,
            KeyCode::PageUp,
            KeyCode::PageDown,
        ])
        .prop_map(Key::new),
    ]
}

/// Draws into the middle of a larger screen and checks the border cells
/// stayed untouched.
fn assert_contained(component: &mut dyn Component, width: u16, height: u16) {
    let mut screen = Screen::new(width + 2, height + 2);
    component.draw(&mut screen, Rect::new(1, 1, width, height), &Theme::default());
    let last = screen.height() - 1;
    assert!(screen.row(0).iter().all(Cell::is_default));
    assert!(screen.row(last).iter().all(Cell::is_default));
    for y in 0..screen.height() {
        assert!(screen.cell_at(0, y).is_default());
        assert!(screen.cell_at(width + 1, y).is_default());
    }
}

proptest! {
    #[test]
    fn input_cursor_stays_on_a_char_boundary(
        keys in prop::collection::vec(key_strategy(), 0..80),
        width in 1u16..12,
    ) {
        let mut input = Input::new().with_max_length(20);
        input.focus();
        for key in &keys {
            input.handle_key(key);
            prop_assert!(input.cursor() <= input.value().len());
            prop_assert!(input.value().is_char_boundary(input.cursor()));
            prop_assert!(input.value().chars().count() <= 20);
        }
        assert_contained(&mut input, width, 1);
    }

    #[test]
    fn textarea_cursor_stays_inside_text(
        keys in prop::collection::vec(key_strategy(), 0..120),
        width in 1u16..10,
        height in 1u16..6,
    ) {
        let mut area = TextArea::new().with_text("first line\nsecond 日本\n\nlast");
        area.focus();
        for key in &keys {
            area.handle_key(key);
            let (row, col) = area.cursor();
            prop_assert!(row < area.line_count());
            let line = &area.lines()[row];
            prop_assert!(col <= line.len());
            prop_assert!(line.is_char_boundary(col));
        }
        prop_assert_eq!(area.text().split('\n').count(), area.line_count());
        assert_contained(&mut area, width, height);
    }
}
