//! Tab traversal through nested layouts.

use std::cell::RefCell;
use std::rc::Rc;

use tessera_core::key::{Key, KeyCode};
use tessera_layout::{
    Component, Constraint, Empty, Linear, Placement, Rect, Split, Stack, dispatch_key,
};
use tessera_render::Screen;
use tessera_style::Theme;

type Log = Rc<RefCell<Vec<&'static str>>>;

/// Focusable leaf that records key deliveries by name.
struct Field {
    name: &'static str,
    focused: bool,
    log: Log,
}

impl Field {
    fn new(name: &'static str, log: &Log) -> Self {
        Self {
            name,
            focused: false,
            log: Rc::clone(log),
        }
    }
}

impl Component for Field {
    fn draw(&mut self, _: &mut Screen, _: Rect, _: &Theme) {}

    fn can_focus(&self) -> bool {
        true
    }

    fn is_focused(&self) -> bool {
        self.focused
    }

    fn focus(&mut self) {
        self.focused = true;
    }

    fn blur(&mut self) {
        self.focused = false;
    }

    fn handle_key(&mut self, key: &Key) -> bool {
        if key.is(KeyCode::Enter) {
            self.log.borrow_mut().push(self.name);
            return true;
        }
        false
    }
}

fn form(log: &Log) -> impl Component {
    let left = Linear::vbox()
        .child(Field::new("name", log), Constraint::length(1))
        .child(Empty, Constraint::length(1))
        .child(Field::new("email", log), Constraint::length(1));
    let right = Stack::new()
        .child(Empty, Placement::fill())
        .child(Field::new("submit", log), Placement::at(0, 0, 6, 1));
    Split::horizontal(left, right)
}

fn press(root: &mut dyn Component, code: KeyCode) -> bool {
    dispatch_key(root, &Key::new(code))
}

#[test]
fn tab_walks_depth_first_and_wraps() {
    let log = Log::default();
    let mut root = form(&log);
    let mut order = Vec::new();
    for _ in 0..4 {
        assert!(press(&mut root, KeyCode::Tab));
        press(&mut root, KeyCode::Enter);
    }
    order.extend(log.borrow().iter().copied());
    assert_eq!(order, ["name", "email", "submit", "name"]);
}

#[test]
fn back_tab_walks_in_reverse() {
    let log = Log::default();
    let mut root = form(&log);
    for _ in 0..3 {
        assert!(press(&mut root, KeyCode::BackTab));
        press(&mut root, KeyCode::Enter);
    }
    assert_eq!(*log.borrow(), ["submit", "email", "name"]);
}

#[test]
fn unfocused_tree_consumes_nothing() {
    let log = Log::default();
    let mut root = form(&log);
    assert!(!press(&mut root, KeyCode::Enter));
    assert!(log.borrow().is_empty());
}

#[test]
fn tree_without_focusable_leaves_ignores_tab() {
    let mut root = Linear::hbox().child(Empty, Constraint::ratio(1.0));
    assert!(!press(&mut root, KeyCode::Tab));
}
