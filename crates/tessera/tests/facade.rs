#![forbid(unsafe_code)]

//! The facade surface: errors convert with `?` and the prelude is enough to
//! build and drive a small screen.

use std::error::Error as _;

use tessera::prelude::*;
use tessera::{Color, Error, KeyCode, Notification, PaletteRole, Placement};

fn configure(key: &str, accent: &str, theme: &str) -> tessera::Result<(Key, Theme)> {
    let key: Key = key.parse()?;
    let accent: Color = accent.parse()?;
    let theme = tessera::ThemeBuilder::from_theme(Theme::by_name(theme)?)
        .color(PaletteRole::Accent, accent)
        .build();
    Ok((key, theme))
}

#[test]
fn valid_configuration_parses() {
    let (key, theme) = configure("ctrl+s", "#ff8800", "nord").unwrap();
    assert_eq!(key, Key::ctrl('s'));
    assert_eq!(theme.palette.accent, Color::Rgb(255, 136, 0));
}

#[test]
fn each_edge_error_converts() {
    let err = configure("hyper+q", "#fff", "dark").unwrap_err();
    assert!(matches!(err, Error::Key(_)), "{err:?}");
    assert!(err.source().is_some());

    let err = configure("q", "#nothex", "dark").unwrap_err();
    assert!(matches!(err, Error::Color(_)), "{err:?}");

    let err = configure("q", "#ffffff", "solarized").unwrap_err();
    assert!(matches!(err, Error::Theme(_)), "{err:?}");
    assert!(err.to_string().contains("solarized"));
}

#[test]
fn prelude_drives_a_screen() {
    let mut root = Stack::new()
        .child(
            Linear::vbox()
                .child(Container::new(Input::new().with_placeholder("name")).title("Who"), ConstraintSet::length(3))
                .child(StatusBar::new().left("INSERT"), ConstraintSet::length(1)),
            Placement::fill(),
        )
        .child(Notification::info("hello"), Placement::at(10, 0, 12, 4));

    assert!(dispatch_key(&mut root, &Key::new(KeyCode::Tab)));
    for c in "ada".chars() {
        assert!(dispatch_key(&mut root, &Key::char(c)));
    }

    let mut screen = Screen::new(24, 4);
    root.draw(&mut screen, Rect::from_size(24, 4), &Theme::default());
    assert!(screen.row_text(1).starts_with("│ada"));
    assert!(screen.row_text(0).contains("Info"));
    assert!(screen.row_text(3).starts_with(" INSERT"));
}
