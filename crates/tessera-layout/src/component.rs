#![forbid(unsafe_code)]

//! The drawable component contract.

use tessera_core::geometry::{Rect, Size};
use tessera_core::key::Key;
use tessera_render::Screen;
use tessera_style::Theme;

use crate::focus::FocusMessage;

/// Something that can draw itself into a region of a [`Screen`].
///
/// Drawing is always bounded: `draw` receives the area the component may
/// use. Fixed-size components report their size through
/// [`intrinsic_size`](Self::intrinsic_size) and clamp it to the area they
/// are given.
///
/// Focus and key handling default to "not focusable, consumes nothing".
pub trait Component {
    fn draw(&mut self, screen: &mut Screen, area: Rect, theme: &Theme);

    /// Preferred size, if the component has one.
    fn intrinsic_size(&self) -> Option<Size> {
        None
    }

    fn can_focus(&self) -> bool {
        false
    }

    fn is_focused(&self) -> bool {
        false
    }

    fn focus(&mut self) {}

    fn blur(&mut self) {}

    /// Move focus in response to `msg`.
    ///
    /// Returns `true` if focus is now inside this component. A component
    /// that already holds focus and receives `Next` or `Previous` gives it
    /// up and returns `false`, so the parent moves on to a sibling.
    fn handle_focus(&mut self, msg: FocusMessage) -> bool {
        if !self.can_focus() {
            return false;
        }
        match msg {
            FocusMessage::Next | FocusMessage::Previous if self.is_focused() => {
                self.blur();
                false
            }
            FocusMessage::Next
            | FocusMessage::Previous
            | FocusMessage::First
            | FocusMessage::Last
            | FocusMessage::Child(0) => {
                self.focus();
                true
            }
            FocusMessage::Child(_) => false,
        }
    }

    /// Returns `true` if the key was consumed.
    fn handle_key(&mut self, _key: &Key) -> bool {
        false
    }
}

impl<C: Component + ?Sized> Component for Box<C> {
    fn draw(&mut self, screen: &mut Screen, area: Rect, theme: &Theme) {
        (**self).draw(screen, area, theme);
    }

    fn intrinsic_size(&self) -> Option<Size> {
        (**self).intrinsic_size()
    }

    fn can_focus(&self) -> bool {
        (**self).can_focus()
    }

    fn is_focused(&self) -> bool {
        (**self).is_focused()
    }

    fn focus(&mut self) {
        (**self).focus();
    }

    fn blur(&mut self) {
        (**self).blur();
    }

    fn handle_focus(&mut self, msg: FocusMessage) -> bool {
        (**self).handle_focus(msg)
    }

    fn handle_key(&mut self, key: &Key) -> bool {
        (**self).handle_key(key)
    }
}

/// Draws nothing. Useful as a placeholder pane.
#[derive(Debug, Clone, Copy, Default)]
pub struct Empty;

impl Component for Empty {
    fn draw(&mut self, _screen: &mut Screen, _area: Rect, _theme: &Theme) {}
}

/// Fills its area with the theme background.
#[derive(Debug, Clone, Copy, Default)]
pub struct Fill;

impl Component for Fill {
    fn draw(&mut self, screen: &mut Screen, area: Rect, theme: &Theme) {
        let cell = tessera_render::Cell::BLANK.with_style(theme.text_style());
        screen.fill(area, cell);
    }
}
