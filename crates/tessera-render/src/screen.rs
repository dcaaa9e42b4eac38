#![forbid(unsafe_code)]

//! The screen: a row-major grid of cells.
//!
//! Every write is bounds-checked and silently dropped when it falls outside
//! the grid. Wide glyphs occupy two cells, the head and a
//! [`Cell::CONTINUATION`]; any write that lands on half of an existing wide
//! glyph blanks the other half so no orphaned halves survive.
//!
//! ```
//! use tessera_render::{Screen, Style};
//!
//! let mut screen = Screen::new(6, 2);
//! screen.draw_string(0, 0, "hi 你", Style::new());
//! assert_eq!(screen.to_plain_string(), "hi 你 \n      ");
//! ```

use tessera_core::geometry::Rect;
use tessera_core::{debug_span, trace};
use tessera_text::rune_width;

use crate::cell::Cell;
use crate::color::ColorProfile;
use crate::style::{Style, StyleFlags};
use crate::style_cache::StyleCache;

/// A fixed-size cell grid with its render-time style cache.
#[derive(Debug, Clone)]
pub struct Screen {
    width: u16,
    height: u16,
    cells: Vec<Cell>,
    styles: StyleCache,
}

impl Screen {
    /// A blank screen rendering with full 24-bit color.
    ///
    /// Zero dimensions are allowed and produce an empty grid.
    #[must_use]
    pub fn new(width: u16, height: u16) -> Self {
        Self::with_profile(width, height, ColorProfile::TrueColor)
    }

    /// A blank screen whose output is downgraded to `profile`.
    #[must_use]
    pub fn with_profile(width: u16, height: u16, profile: ColorProfile) -> Self {
        let len = usize::from(width) * usize::from(height);
        Self {
            width,
            height,
            cells: vec![Cell::BLANK; len],
            styles: StyleCache::new(profile),
        }
    }

    #[inline]
    #[must_use]
    pub const fn width(&self) -> u16 {
        self.width
    }

    #[inline]
    #[must_use]
    pub const fn height(&self) -> u16 {
        self.height
    }

    /// The whole screen as a rectangle at the origin.
    #[must_use]
    pub const fn bounds(&self) -> Rect {
        Rect::from_size(self.width, self.height)
    }

    #[must_use]
    pub const fn profile(&self) -> ColorProfile {
        self.styles.profile()
    }

    #[inline]
    fn index(&self, x: u16, y: u16) -> Option<usize> {
        (x < self.width && y < self.height)
            .then(|| usize::from(y) * usize::from(self.width) + usize::from(x))
    }

    #[must_use]
    pub fn get(&self, x: u16, y: u16) -> Option<&Cell> {
        self.index(x, y).map(|i| &self.cells[i])
    }

    pub fn get_mut(&mut self, x: u16, y: u16) -> Option<&mut Cell> {
        self.index(x, y).map(|i| &mut self.cells[i])
    }

    /// The cell at `(x, y)`, or a blank cell outside the grid.
    #[must_use]
    pub fn cell_at(&self, x: u16, y: u16) -> Cell {
        self.get(x, y).copied().unwrap_or_default()
    }

    /// All cells of row `y`; empty outside the grid.
    #[must_use]
    pub fn row(&self, y: u16) -> &[Cell] {
        if y >= self.height {
            return &[];
        }
        let start = usize::from(y) * usize::from(self.width);
        &self.cells[start..start + usize::from(self.width)]
    }

    /// Blank whatever wide glyph half is about to be orphaned by a write at
    /// `(x, y)`.
    fn cleanup_overlap(&mut self, x: u16, y: u16, incoming: &Cell) {
        let Some(idx) = self.index(x, y) else { return };
        let current = self.cells[idx];

        if current.width == 2 {
            if let Some(tail) = x.checked_add(1).and_then(|tx| self.index(tx, y))
                && self.cells[tail].is_continuation()
            {
                self.cells[tail] = Cell::BLANK;
            }
        } else if current.is_continuation()
            && !incoming.is_continuation()
            && x > 0
            && let Some(head) = self.index(x - 1, y)
            && self.cells[head].width == 2
        {
            self.cells[head] = Cell::BLANK;
        }
    }

    /// Write `cell` at `(x, y)` as given.
    ///
    /// A 2-wide cell also writes a continuation at `x + 1`; at the last
    /// column only the head is written.
    pub fn set_cell(&mut self, x: u16, y: u16, cell: Cell) {
        let Some(idx) = self.index(x, y) else { return };
        self.cleanup_overlap(x, y, &cell);

        if cell.width == 2 {
            match x.checked_add(1).and_then(|tx| self.index(tx, y)) {
                Some(tail) => {
                    self.cleanup_overlap(x + 1, y, &Cell::CONTINUATION);
                    self.cells[tail] = Cell::CONTINUATION;
                }
                None => {
                    trace!(x, y, "wide glyph at right edge; continuation dropped");
                }
            }
        }
        self.cells[idx] = cell;
    }

    /// Composite `overlay` onto the cell at `(x, y)` with [`Cell::merge`].
    pub fn merge_cell(&mut self, x: u16, y: u16, overlay: &Cell) {
        if let Some(base) = self.get(x, y) {
            let merged = base.merge(overlay);
            self.set_cell(x, y, merged);
        }
    }

    /// [`merge_cell`](Self::merge_cell) over every cell in `rect`.
    pub fn merge_area(&mut self, rect: Rect, overlay: &Cell) {
        for y in rect.y..rect.bottom().min(self.height) {
            for x in rect.x..rect.right().min(self.width) {
                self.merge_cell(x, y, overlay);
            }
        }
    }

    /// Draw one rune. An unset background in `style` keeps the existing
    /// cell's background. Zero-width runes are ignored.
    pub fn draw_rune(&mut self, x: u16, y: u16, rune: char, style: Style) {
        if rune_width(rune) == 0 {
            return;
        }
        let Some(base) = self.get(x, y) else { return };
        let cell = base.merge(&Cell::new(rune).with_style(style));
        self.set_cell(x, y, cell);
    }

    /// Draw `text` starting at `(x, y)`, advancing by each rune's width.
    ///
    /// Stops at the right edge. Returns the column after the last rune.
    pub fn draw_string(&mut self, x: u16, y: u16, text: &str, style: Style) -> u16 {
        let mut cx = x;
        for rune in text.chars() {
            let width = rune_width(rune);
            if width == 0 {
                continue;
            }
            if cx >= self.width {
                break;
            }
            self.draw_rune(cx, y, rune, style);
            cx = cx.saturating_add(width as u16);
        }
        cx
    }

    /// Like [`draw_string`](Self::draw_string) but stops before `max_x`
    /// (exclusive). A wide rune that would straddle `max_x` is not started.
    pub fn draw_string_clipped(
        &mut self,
        x: u16,
        y: u16,
        text: &str,
        style: Style,
        max_x: u16,
    ) -> u16 {
        let max_x = max_x.min(self.width);
        let mut cx = x;
        for rune in text.chars() {
            let width = rune_width(rune) as u16;
            if width == 0 {
                continue;
            }
            if cx.saturating_add(width) > max_x {
                break;
            }
            self.draw_rune(cx, y, rune, style);
            cx += width;
        }
        cx
    }

    /// Set every cell of `rect` to `cell`.
    pub fn fill(&mut self, rect: Rect, cell: Cell) {
        for y in rect.y..rect.bottom().min(self.height) {
            for x in rect.x..rect.right().min(self.width) {
                self.set_cell(x, y, cell);
            }
        }
    }

    /// Reset every cell to a blank default cell.
    pub fn clear(&mut self) {
        self.cells.fill(Cell::BLANK);
    }

    /// Reset every cell to a blank carrying `style`'s colors and attributes.
    pub fn clear_with_style(&mut self, style: Style) {
        self.cells.fill(Cell::BLANK.with_style(style));
    }

    /// Set the dim attribute on every cell in the region, keeping glyphs and
    /// colors.
    pub fn dim_area(&mut self, x: u16, y: u16, width: u16, height: u16) {
        let rect = Rect::new(x, y, width, height);
        for cy in rect.y..rect.bottom().min(self.height) {
            for cx in rect.x..rect.right().min(self.width) {
                if let Some(cell) = self.get_mut(cx, cy) {
                    cell.flags.insert(StyleFlags::DIM);
                }
            }
        }
    }

    /// Copy a `width` x `height` block of `src` starting at `(src_x, src_y)`
    /// to `(dst_x, dst_y)`, verbatim. Cells outside either grid are skipped.
    ///
    /// Cells go through [`set_cell`](Self::set_cell), so wide glyphs already
    /// on this screen are repaired. A wide glyph cut by the block's left or
    /// right edge is copied as a blank.
    #[allow(clippy::too_many_arguments)]
    pub fn draw_region(
        &mut self,
        dst_x: u16,
        dst_y: u16,
        src: &Screen,
        src_x: u16,
        src_y: u16,
        width: u16,
        height: u16,
    ) {
        for dy in 0..height {
            for dx in 0..width {
                let source = src_x
                    .checked_add(dx)
                    .zip(src_y.checked_add(dy))
                    .and_then(|(sx, sy)| src.get(sx, sy));
                let target = dst_x.checked_add(dx).zip(dst_y.checked_add(dy));
                let (Some(cell), Some((tx, ty))) = (source, target) else {
                    continue;
                };
                let cell = if cell.is_continuation() {
                    // Written along with its head.
                    if dx > 0 {
                        continue;
                    }
                    Cell::BLANK
                } else if cell.width == 2 && dx + 1 >= width {
                    Cell::BLANK
                } else {
                    *cell
                };
                self.set_cell(tx, ty, cell);
            }
        }
    }

    /// Terminal-ready output: every cell's rendering, rows joined by `\n`
    /// with no trailing newline.
    #[must_use]
    pub fn render(&self) -> String {
        let span = debug_span!("screen.render", width = self.width, height = self.height);
        let _guard = span.enter();

        let mut out = String::with_capacity(self.cells.len() + usize::from(self.height));
        for y in 0..self.height {
            if y > 0 {
                out.push('\n');
            }
            for cell in self.row(y) {
                cell.render_into(&mut out, &self.styles);
            }
        }
        out
    }

    /// Row `y` as plain text: no escape sequences, continuations skipped,
    /// empty runes as spaces.
    #[must_use]
    pub fn row_text(&self, y: u16) -> String {
        self.row(y)
            .iter()
            .filter(|c| !c.is_continuation())
            .map(|c| if c.rune == '\0' { ' ' } else { c.rune })
            .collect()
    }

    /// All rows as plain text joined by `\n`.
    #[must_use]
    pub fn to_plain_string(&self) -> String {
        (0..self.height)
            .map(|y| self.row_text(y))
            .collect::<Vec<_>>()
            .join("\n")
    }
}
