#![forbid(unsafe_code)]

//! Focus ownership for composite components.
//!
//! Every composite owns a [`FocusGroup`]: at most one focused child index.
//! Focus moves only through explicit [`FocusMessage`]s, so two siblings can
//! never both hold focus. When a message walks past the last (or before the
//! first) focusable child the group lets go and reports `false`, and the
//! parent decides what comes next. At the root, [`cycle`] wraps around.

use tessera_core::key::{Key, KeyCode};

use crate::component::Component;

/// A request to move focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FocusMessage {
    Next,
    Previous,
    First,
    Last,
    /// Focus the child at this index.
    Child(usize),
}

/// The focused-child index of a composite.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FocusGroup {
    focused: Option<usize>,
}

impl FocusGroup {
    #[must_use]
    pub const fn new() -> Self {
        Self { focused: None }
    }

    #[must_use]
    pub const fn focused(&self) -> Option<usize> {
        self.focused
    }

    #[must_use]
    pub const fn is_focused(&self) -> bool {
        self.focused.is_some()
    }

    /// Apply `msg` to `children`. Returns `true` if a child holds focus
    /// afterwards.
    pub fn handle(&mut self, msg: FocusMessage, children: &mut [&mut dyn Component]) -> bool {
        let len = children.len();
        match msg {
            FocusMessage::Next => {
                let start = match self.focused {
                    Some(i) if i < len => {
                        if children[i].handle_focus(FocusMessage::Next) {
                            return true;
                        }
                        i + 1
                    }
                    _ => 0,
                };
                self.focused = None;
                self.enter(children, start..len, FocusMessage::First)
            }
            FocusMessage::Previous => {
                let end = match self.focused {
                    Some(i) if i < len => {
                        if children[i].handle_focus(FocusMessage::Previous) {
                            return true;
                        }
                        i
                    }
                    _ => len,
                };
                self.focused = None;
                self.enter(children, (0..end).rev(), FocusMessage::Last)
            }
            FocusMessage::First => {
                self.blur(children);
                self.enter(children, 0..len, FocusMessage::First)
            }
            FocusMessage::Last => {
                self.blur(children);
                self.enter(children, (0..len).rev(), FocusMessage::Last)
            }
            FocusMessage::Child(index) => {
                if index >= len || !children[index].can_focus() {
                    return self.focused.is_some();
                }
                if self.focused != Some(index) {
                    self.blur(children);
                }
                self.enter(children, index..=index, FocusMessage::First)
            }
        }
    }

    fn enter(
        &mut self,
        children: &mut [&mut dyn Component],
        order: impl Iterator<Item = usize>,
        msg: FocusMessage,
    ) -> bool {
        for i in order {
            if children[i].handle_focus(msg) {
                self.focused = Some(i);
                return true;
            }
        }
        false
    }

    /// Blur the focused child, if any.
    pub fn blur(&mut self, children: &mut [&mut dyn Component]) {
        if let Some(i) = self.focused.take()
            && let Some(child) = children.get_mut(i)
        {
            child.blur();
        }
    }

    /// Send `key` to the focused child.
    pub fn route_key(&mut self, key: &Key, children: &mut [&mut dyn Component]) -> bool {
        match self.focused {
            Some(i) => children.get_mut(i).is_some_and(|child| child.handle_key(key)),
            None => false,
        }
    }

    /// Keep the focused index pointing at the same child after the child at
    /// `from` moved to `to`, shifting the ones in between.
    pub fn moved(&mut self, from: usize, to: usize) {
        let Some(f) = self.focused else { return };
        self.focused = Some(if f == from {
            to
        } else if from < to && f > from && f <= to {
            f - 1
        } else if to < from && f >= to && f < from {
            f + 1
        } else {
            f
        });
    }

    /// Forget the child at `index`, which has been removed.
    pub fn removed(&mut self, index: usize) {
        self.focused = match self.focused {
            Some(f) if f == index => None,
            Some(f) if f > index => Some(f - 1),
            other => other,
        };
    }
}

/// Move focus forward or backward from the root, wrapping at either end.
///
/// Returns `false` only when nothing in the tree can take focus.
pub fn cycle(root: &mut dyn Component, forward: bool) -> bool {
    let (step, wrap) = if forward {
        (FocusMessage::Next, FocusMessage::First)
    } else {
        (FocusMessage::Previous, FocusMessage::Last)
    };
    root.handle_focus(step) || root.handle_focus(wrap)
}

/// Deliver `key` to the root. Unconsumed `Tab` and `BackTab` become focus
/// moves.
pub fn dispatch_key(root: &mut dyn Component, key: &Key) -> bool {
    if root.handle_key(key) {
        return true;
    }
    match key.code {
        KeyCode::Tab if key.modifiers.is_empty() => cycle(root, true),
        KeyCode::BackTab => cycle(root, false),
        _ => false,
    }
}
