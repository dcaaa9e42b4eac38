#![forbid(unsafe_code)]

//! Bordered box around a single child.

use tessera_core::geometry::{Rect, Sides, Size};
use tessera_core::key::Key;
use tessera_layout::{Component, FocusMessage};
use tessera_render::{BorderChars, Screen};
use tessera_style::Theme;

/// Draws a border (and optional title) and lays its child out inside.
///
/// Focus passes straight through to the child; the border and title switch
/// to the theme's focused colors while the child holds focus.
pub struct Container {
    child: Box<dyn Component>,
    title: Option<String>,
    border: BorderChars,
    padding: Sides,
}

impl Container {
    pub fn new(child: impl Component + 'static) -> Self {
        Self {
            child: Box::new(child),
            title: None,
            border: BorderChars::ROUNDED,
            padding: Sides::default(),
        }
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn border(mut self, border: BorderChars) -> Self {
        self.border = border;
        self
    }

    /// Space between the border and the child.
    pub fn padding(mut self, padding: impl Into<Sides>) -> Self {
        self.padding = padding.into();
        self
    }

    pub fn child_mut(&mut self) -> &mut (dyn Component + 'static) {
        self.child.as_mut()
    }

    /// The area left for the child inside `area`.
    #[must_use]
    pub fn inner(&self, area: Rect) -> Rect {
        area.inner(Sides::all(1)).inner(self.padding)
    }
}

impl Component for Container {
    fn draw(&mut self, screen: &mut Screen, area: Rect, theme: &Theme) {
        #[cfg(feature = "tracing")]
        let _span = tracing::debug_span!(
            "widget_render",
            widget = "Container",
            x = area.x,
            y = area.y,
            w = area.width,
            h = area.height
        )
        .entered();

        if area.is_empty() {
            return;
        }
        let focused = self.child.is_focused();
        let border = theme.border_style(focused);
        match &self.title {
            Some(title) => screen.draw_box_with_title(
                area,
                self.border,
                border,
                title,
                theme.title_style(focused),
            ),
            None => screen.draw_box(area, self.border, border),
        }
        let inner = self.inner(area);
        if !inner.is_empty() {
            self.child.draw(screen, inner, theme);
        }
    }

    fn intrinsic_size(&self) -> Option<Size> {
        let size = self.child.intrinsic_size()?;
        Some(Size::new(
            size.width
                .saturating_add(2)
                .saturating_add(self.padding.horizontal_sum()),
            size.height
                .saturating_add(2)
                .saturating_add(self.padding.vertical_sum()),
        ))
    }

    fn can_focus(&self) -> bool {
        self.child.can_focus()
    }

    fn is_focused(&self) -> bool {
        self.child.is_focused()
    }

    fn focus(&mut self) {
        self.child.focus();
    }

    fn blur(&mut self) {
        self.child.blur();
    }

    fn handle_focus(&mut self, msg: FocusMessage) -> bool {
        self.child.handle_focus(msg)
    }

    fn handle_key(&mut self, key: &Key) -> bool {
        self.child.handle_key(key)
    }
}
