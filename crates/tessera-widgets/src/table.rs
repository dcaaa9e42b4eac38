#![forbid(unsafe_code)]

//! Tabular data with a header and a selectable row.

use tessera_core::geometry::Rect;
use tessera_core::key::{Key, KeyCode};
use tessera_layout::{Component, ConstraintSet, calculate_constraints};
use tessera_render::{Cell, Screen, Style};
use tessera_style::{Interaction, Theme};
use tessera_text::truncate_with_ellipsis;

/// One table row.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Row {
    cells: Vec<String>,
}

impl Row {
    pub fn new(cells: impl IntoIterator<Item = impl Into<String>>) -> Self {
        Self {
            cells: cells.into_iter().map(Into::into).collect(),
        }
    }

    pub fn cells(&self) -> &[String] {
        &self.cells
    }
}

/// Selection and scroll position.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TableState {
    pub selected: Option<usize>,
    /// First visible row.
    pub offset: usize,
}

/// Rows of text cells under an optional header.
///
/// Column widths come from one [`ConstraintSet`] per column, distributed
/// over the table width minus the column spacing. While focused, up/down,
/// page up/down and home/end move the selection, scrolling to keep it in
/// view.
#[derive(Debug, Clone)]
pub struct Table {
    header: Option<Row>,
    rows: Vec<Row>,
    widths: Vec<ConstraintSet>,
    column_spacing: u16,
    state: TableState,
    /// Visible rows at the last draw, for paging.
    page: usize,
    focused: bool,
}

impl Table {
    pub fn new(
        rows: impl IntoIterator<Item = Row>,
        widths: impl IntoIterator<Item = impl Into<ConstraintSet>>,
    ) -> Self {
        let rows: Vec<Row> = rows.into_iter().collect();
        let selected = (!rows.is_empty()).then_some(0);
        Self {
            header: None,
            rows,
            widths: widths.into_iter().map(Into::into).collect(),
            column_spacing: 1,
            state: TableState {
                selected,
                offset: 0,
            },
            page: 1,
            focused: false,
        }
    }

    pub fn header(mut self, header: Row) -> Self {
        self.header = Some(header);
        self
    }

    pub fn column_spacing(mut self, spacing: u16) -> Self {
        self.column_spacing = spacing;
        self
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    pub fn push_row(&mut self, row: Row) {
        self.rows.push(row);
        if self.state.selected.is_none() {
            self.state.selected = Some(0);
        }
    }

    pub fn state(&self) -> TableState {
        self.state
    }

    pub fn selected(&self) -> Option<usize> {
        self.state.selected
    }

    pub fn selected_row(&self) -> Option<&Row> {
        self.state.selected.and_then(|i| self.rows.get(i))
    }

    pub fn clear_selection(&mut self) {
        self.state = TableState::default();
    }

    /// Select `index`, clamped to the last row.
    pub fn select(&mut self, index: usize) {
        self.state.selected = self.rows.len().checked_sub(1).map(|last| index.min(last));
    }

    /// Column x offsets and widths inside `area`.
    pub fn column_layout(&self, area: Rect) -> Vec<(u16, u16)> {
        let gaps = self.widths.len().saturating_sub(1) as u64 * u64::from(self.column_spacing);
        let available = u64::from(area.width).saturating_sub(gaps) as u16;
        let mut x = area.x;
        calculate_constraints(&self.widths, available)
            .into_iter()
            .map(|width| {
                let column = (x, width);
                x = x.saturating_add(width).saturating_add(self.column_spacing);
                column
            })
            .collect()
    }

    fn move_selection(&mut self, delta: isize) -> bool {
        let Some(last) = self.rows.len().checked_sub(1) else {
            return false;
        };
        // No selection sits just before the first row.
        let next = match self.state.selected {
            Some(current) => current.saturating_add_signed(delta).min(last),
            None if delta > 0 => (delta.unsigned_abs() - 1).min(last),
            None => 0,
        };
        let moved = self.state.selected != Some(next);
        self.state.selected = Some(next);
        moved
    }

    fn scroll_to_selection(&mut self, visible: usize) {
        let Some(selected) = self.state.selected else {
            self.state.offset = 0;
            return;
        };
        if selected < self.state.offset {
            self.state.offset = selected;
        } else if visible > 0 && selected >= self.state.offset + visible {
            self.state.offset = selected + 1 - visible;
        }
    }
}

fn draw_row(screen: &mut Screen, columns: &[(u16, u16)], y: u16, row: &Row, style: Style) {
    for (&(x, width), text) in columns.iter().zip(&row.cells) {
        if width == 0 {
            continue;
        }
        let text = truncate_with_ellipsis(text, usize::from(width));
        screen.draw_string_clipped(x, y, &text, style, x.saturating_add(width));
    }
}

impl Component for Table {
    fn draw(&mut self, screen: &mut Screen, area: Rect, theme: &Theme) {
        #[cfg(feature = "tracing")]
        let _span = tracing::debug_span!(
            "widget_render",
            widget = "Table",
            x = area.x,
            y = area.y,
            w = area.width,
            h = area.height
        )
        .entered();

        if area.is_empty() {
            return;
        }
        let normal = theme.interactive.style(Interaction::Normal);
        screen.fill(area, Cell::BLANK.with_style(normal));
        let columns = self.column_layout(area);

        let mut y = area.y;
        if let Some(header) = &self.header {
            draw_row(screen, &columns, y, header, normal.bold());
            y += 1;
            if y < area.bottom() {
                screen.draw_horizontal_line(area.x, y, area.width, '─', theme.border_style(false));
                y += 1;
            }
        }

        let visible = usize::from(area.bottom() - y);
        self.page = visible.max(1);
        self.scroll_to_selection(visible);

        let highlight = if self.focused {
            Interaction::Selected
        } else {
            Interaction::Hover
        };
        for (i, row) in self.rows.iter().enumerate().skip(self.state.offset).take(visible) {
            let style = if self.state.selected == Some(i) {
                let style = theme.interactive.style(highlight);
                screen.fill(Rect::new(area.x, y, area.width, 1), Cell::BLANK.with_style(style));
                style
            } else {
                normal
            };
            draw_row(screen, &columns, y, row, style);
            y += 1;
        }
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

    fn handle_key(&mut self, key: &Key) -> bool {
        let page = self.page as isize;
        match key.code {
            KeyCode::Up => self.move_selection(-1),
            KeyCode::Down => self.move_selection(1),
            KeyCode::PageUp => self.move_selection(-page),
            KeyCode::PageDown => self.move_selection(page),
            KeyCode::Home => self.move_selection(isize::MIN),
            KeyCode::End => self.move_selection(isize::MAX),
            _ => false,
        }
    }
}
