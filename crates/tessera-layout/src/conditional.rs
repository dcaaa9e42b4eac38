#![forbid(unsafe_code)]

//! Size-driven variant selection.
//!
//! A [`Conditional`] holds candidates guarded by predicates over the width
//! and height it is drawn at. Every draw picks the first candidate whose
//! predicate holds, else the fallback, else nothing. The choice is made
//! again on every call, so a resize switches variants immediately.
//!
//! The most recently drawn variant receives focus and keys. When a resize
//! swaps it out while it holds focus, the old variant is blurred and the
//! new one is offered focus from its first child.

use tessera_core::geometry::Rect;
use tessera_core::key::Key;
use tessera_core::trace;
use tessera_render::Screen;
use tessera_style::Theme;

use crate::component::Component;
use crate::focus::FocusMessage;

type Predicate = Box<dyn Fn(u16, u16) -> bool>;

/// Which candidate a [`Conditional`] picked.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selection {
    Entry(usize),
    Fallback,
}

struct Candidate {
    component: Box<dyn Component>,
    predicate: Predicate,
}

pub struct Conditional {
    candidates: Vec<Candidate>,
    fallback: Option<Box<dyn Component>>,
    active: Option<Selection>,
    focused: bool,
}

impl Default for Conditional {
    fn default() -> Self {
        Self::new()
    }
}

impl Conditional {
    pub fn new() -> Self {
        Self {
            candidates: Vec::new(),
            fallback: None,
            active: None,
            focused: false,
        }
    }

    /// Add a candidate, tried after all earlier ones.
    pub fn when(
        mut self,
        predicate: impl Fn(u16, u16) -> bool + 'static,
        component: impl Component + 'static,
    ) -> Self {
        self.candidates.push(Candidate {
            component: Box::new(component),
            predicate: Box::new(predicate),
        });
        self
    }

    /// Drawn when no predicate matches.
    pub fn fallback(mut self, component: impl Component + 'static) -> Self {
        self.fallback = Some(Box::new(component));
        self
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.candidates.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.candidates.is_empty() && self.fallback.is_none()
    }

    /// The candidate that would be drawn at `width` x `height`.
    #[must_use]
    pub fn select(&self, width: u16, height: u16) -> Option<Selection> {
        self.candidates
            .iter()
            .position(|c| (c.predicate)(width, height))
            .map(Selection::Entry)
            .or(self.fallback.as_ref().map(|_| Selection::Fallback))
    }

    /// The variant chosen by the last draw.
    #[must_use]
    pub const fn active(&self) -> Option<Selection> {
        self.active
    }

    fn variant_mut(&mut self, selection: Selection) -> Option<&mut (dyn Component + 'static)> {
        match selection {
            Selection::Entry(i) => self.candidates.get_mut(i).map(|c| c.component.as_mut()),
            Selection::Fallback => self.fallback.as_deref_mut(),
        }
    }

    fn active_mut(&mut self) -> Option<&mut (dyn Component + 'static)> {
        self.active.and_then(|sel| self.variant_mut(sel))
    }

    fn switch_to(&mut self, next: Option<Selection>) {
        if next == self.active {
            return;
        }
        trace!(from = ?self.active, to = ?next, "conditional variant changed");
        if self.focused {
            if let Some(old) = self.active_mut() {
                old.blur();
            }
            self.active = next;
            self.focused = self
                .active_mut()
                .is_some_and(|new| new.handle_focus(FocusMessage::First));
        } else {
            self.active = next;
        }
    }
}

impl Component for Conditional {
    fn draw(&mut self, screen: &mut Screen, area: Rect, theme: &Theme) {
        self.switch_to(self.select(area.width, area.height));
        if let Some(variant) = self.active_mut() {
            variant.draw(screen, area, theme);
        }
    }

    fn can_focus(&self) -> bool {
        match self.active {
            Some(Selection::Entry(i)) => self.candidates.get(i).is_some_and(|c| c.component.can_focus()),
            Some(Selection::Fallback) => self.fallback.as_ref().is_some_and(|f| f.can_focus()),
            None => false,
        }
    }

    fn is_focused(&self) -> bool {
        self.focused
    }

    fn focus(&mut self) {
        self.handle_focus(FocusMessage::First);
    }

    fn blur(&mut self) {
        if self.focused {
            self.focused = false;
            if let Some(variant) = self.active_mut() {
                variant.blur();
            }
        }
    }

    fn handle_focus(&mut self, msg: FocusMessage) -> bool {
        self.focused = self.active_mut().is_some_and(|variant| variant.handle_focus(msg));
        self.focused
    }

    fn handle_key(&mut self, key: &Key) -> bool {
        self.focused && self.active_mut().is_some_and(|variant| variant.handle_key(key))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::breakpoints::{max_width, min_width};
    use crate::focus::cycle;

    struct Label {
        text: &'static str,
        focused: bool,
        keys: usize,
    }

    impl Label {
        fn new(text: &'static str) -> Self {
            Self {
                text,
                focused: false,
                keys: 0,
            }
        }
    }

    impl Component for Label {
        fn draw(&mut self, screen: &mut Screen, area: Rect, _: &Theme) {
            screen.draw_string(area.x, area.y, self.text, Default::default());
        }

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

        fn handle_key(&mut self, _: &Key) -> bool {
            self.keys += 1;
            true
        }
    }

    fn responsive() -> Conditional {
        Conditional::new()
            .when(min_width(80), Label::new("wide"))
            .when(min_width(40), Label::new("mid"))
            .fallback(Label::new("tiny"))
    }

    fn draw(cond: &mut Conditional, width: u16) -> String {
        let mut screen = Screen::new(width, 1);
        cond.draw(&mut screen, Rect::new(0, 0, width, 1), &Theme::default());
        screen.row_text(0).trim_end().to_owned()
    }

    #[test]
    fn first_match_wins() {
        let cond = responsive();
        assert_eq!(cond.select(100, 10), Some(Selection::Entry(0)));
        assert_eq!(cond.select(80, 10), Some(Selection::Entry(0)));
        assert_eq!(cond.select(50, 10), Some(Selection::Entry(1)));
        assert_eq!(cond.select(10, 10), Some(Selection::Fallback));
    }

    #[test]
    fn nothing_without_fallback() {
        let mut cond = Conditional::new().when(max_width(5), Label::new("x"));
        assert_eq!(cond.select(6, 1), None);
        assert_eq!(draw(&mut cond, 8), "");
        assert!(!cond.can_focus());
    }

    #[test]
    fn selection_follows_every_resize() {
        let mut cond = responsive();
        assert_eq!(draw(&mut cond, 90), "wide");
        assert_eq!(draw(&mut cond, 45), "mid");
        assert_eq!(draw(&mut cond, 90), "wide");
        assert_eq!(draw(&mut cond, 12), "tiny");
        assert_eq!(cond.active(), Some(Selection::Fallback));
    }

    #[test]
    fn focus_moves_to_new_variant() {
        let mut cond = responsive();
        draw(&mut cond, 90);
        assert!(cycle(&mut cond, true));
        assert!(cond.is_focused());

        draw(&mut cond, 45);
        assert!(cond.is_focused());
        assert!(cond.handle_key(&Key::char('k')));
        assert_eq!(cond.active(), Some(Selection::Entry(1)));

        cond.blur();
        assert!(!cond.is_focused());
        assert!(!cond.handle_key(&Key::char('k')));
    }

    #[test]
    fn unfocused_switch_leaves_focus_alone() {
        let mut cond = responsive();
        draw(&mut cond, 90);
        draw(&mut cond, 10);
        assert!(!cond.is_focused());
    }
}
