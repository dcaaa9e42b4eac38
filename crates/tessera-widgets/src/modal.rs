#![forbid(unsafe_code)]

//! Modal dialog drawn over existing content.

use tessera_core::geometry::{Rect, Sides};
use tessera_core::key::{Key, KeyCode};
use tessera_layout::{Component, ConstraintSet};
use tessera_render::{BorderChars, Cell, Screen, Style};
use tessera_style::Theme;
use tessera_text::wrap::{WrapMode, wrap_text};

/// A titled message box centered over a dimmed backdrop.
///
/// Meant to sit on top of a [`Stack`](tessera_layout::Stack) with a fill
/// placement: while open it dims everything already drawn in its area and
/// takes focus; escape or enter closes it.
#[derive(Debug, Clone)]
pub struct Modal {
    title: String,
    body: String,
    width: ConstraintSet,
    open: bool,
    focused: bool,
}

impl Modal {
    pub fn new(title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            body: body.into(),
            width: ConstraintSet::percentage(0.6).min(20),
            open: true,
            focused: false,
        }
    }

    /// Width of the dialog box, relative to the area it is drawn in.
    pub fn width(mut self, width: impl Into<ConstraintSet>) -> Self {
        self.width = width.into();
        self
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn open(&mut self) {
        self.open = true;
    }

    pub fn close(&mut self) {
        self.open = false;
        self.focused = false;
    }

    pub fn set_body(&mut self, body: impl Into<String>) {
        self.body = body.into();
    }

    /// The dialog box rectangle inside `area`.
    #[must_use]
    pub fn dialog_area(&self, area: Rect) -> Rect {
        let width = self.width.calculate(area.width, 1.0).min(area.width);
        let lines = wrap_text(&self.body, usize::from(width.saturating_sub(4)), WrapMode::WordChar);
        let height = u16::try_from(lines.len() + 4).unwrap_or(u16::MAX);
        area.centered(width, height)
    }
}

impl Component for Modal {
    fn draw(&mut self, screen: &mut Screen, area: Rect, theme: &Theme) {
        #[cfg(feature = "tracing")]
        let _span = tracing::debug_span!(
            "widget_render",
            widget = "Modal",
            x = area.x,
            y = area.y,
            w = area.width,
            h = area.height
        )
        .entered();

        if !self.open || area.is_empty() {
            return;
        }
        screen.dim_area(area.x, area.y, area.width, area.height);

        let dialog = self.dialog_area(area);
        let surface = Style::new().fg(theme.palette.text).bg(theme.palette.surface);
        screen.fill(dialog, Cell::BLANK.with_style(surface));
        screen.draw_box_with_title(
            dialog,
            BorderChars::ROUNDED,
            theme.border_style(true).bg(theme.palette.surface),
            &self.title,
            theme.title_style(true).bg(theme.palette.surface),
        );

        let body = dialog.inner(Sides::all(2));
        let lines = wrap_text(&self.body, usize::from(body.width), WrapMode::WordChar);
        for (i, line) in lines.iter().take(usize::from(body.height)).enumerate() {
            screen.draw_string_clipped(body.x, body.y + i as u16, line, surface, body.right());
        }
    }

    fn can_focus(&self) -> bool {
        self.open
    }

    fn is_focused(&self) -> bool {
        self.focused
    }

    fn focus(&mut self) {
        self.focused = self.open;
    }

    fn blur(&mut self) {
        self.focused = false;
    }

    fn handle_key(&mut self, key: &Key) -> bool {
        if self.open && (key.is(KeyCode::Escape) || key.is(KeyCode::Enter)) {
            self.close();
            return true;
        }
        false
    }
}
