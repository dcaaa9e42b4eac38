#![forbid(unsafe_code)]

//! Two-pane split.

use tessera_core::geometry::{Rect, Size};
use tessera_core::key::Key;
use tessera_render::{Screen, Style};
use tessera_style::Theme;

use crate::component::Component;
use crate::constraint::ConstraintSet;
use crate::focus::{FocusGroup, FocusMessage};
use crate::linear::Direction;

/// Rectangles produced by [`Split::layout`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SplitAreas {
    pub first: Rect,
    pub divider: Option<Rect>,
    pub second: Rect,
}

/// Two children sharing an area along one axis.
///
/// The first pane is sized by a single [`ConstraintSet`], where a ratio is a
/// fraction of the whole (ratio total 1.0). The second pane gets whatever is
/// left. Panes that end up empty are not drawn.
pub struct Split {
    direction: Direction,
    first: Box<dyn Component>,
    second: Box<dyn Component>,
    constraint: ConstraintSet,
    divider: bool,
    focus: FocusGroup,
}

impl Split {
    pub fn new(
        direction: Direction,
        first: impl Component + 'static,
        second: impl Component + 'static,
    ) -> Self {
        Self {
            direction,
            first: Box::new(first),
            second: Box::new(second),
            constraint: ConstraintSet::ratio(0.5),
            divider: false,
            focus: FocusGroup::new(),
        }
    }

    /// `first` on the left, `second` on the right.
    pub fn horizontal(first: impl Component + 'static, second: impl Component + 'static) -> Self {
        Self::new(Direction::Horizontal, first, second)
    }

    /// `first` on top, `second` below.
    pub fn vertical(first: impl Component + 'static, second: impl Component + 'static) -> Self {
        Self::new(Direction::Vertical, first, second)
    }

    /// Size of the first pane. Defaults to half.
    pub fn constraint(mut self, constraint: impl Into<ConstraintSet>) -> Self {
        self.constraint = constraint.into();
        self
    }

    /// Draw a one-cell line between the panes.
    pub fn divider(mut self, divider: bool) -> Self {
        self.divider = divider;
        self
    }

    pub fn first_mut(&mut self) -> &mut (dyn Component + 'static) {
        self.first.as_mut()
    }

    pub fn second_mut(&mut self) -> &mut (dyn Component + 'static) {
        self.second.as_mut()
    }

    #[must_use]
    pub fn layout(&self, area: Rect) -> SplitAreas {
        let total = match self.direction {
            Direction::Horizontal => area.width,
            Direction::Vertical => area.height,
        };
        let first = self.constraint.calculate(total, 1.0).min(total);
        let divider = if self.divider && first < total { 1 } else { 0 };
        let second = total - first - divider;

        let span = |offset: u16, len: u16| match self.direction {
            Direction::Horizontal => {
                Rect::new(area.x.saturating_add(offset), area.y, len, area.height)
            }
            Direction::Vertical => Rect::new(area.x, area.y.saturating_add(offset), area.width, len),
        };
        SplitAreas {
            first: span(0, first),
            divider: (divider > 0).then(|| span(first, 1)),
            second: span(first + divider, second),
        }
    }
}

impl Component for Split {
    fn draw(&mut self, screen: &mut Screen, area: Rect, theme: &Theme) {
        let areas = self.layout(area);
        if !areas.first.is_empty() {
            self.first.draw(screen, areas.first, theme);
        }
        if let Some(line) = areas.divider {
            let style = Style::new().fg(theme.palette.border);
            match self.direction {
                Direction::Horizontal => {
                    screen.draw_vertical_line(line.x, line.y, line.height, '│', style);
                }
                Direction::Vertical => {
                    screen.draw_horizontal_line(line.x, line.y, line.width, '─', style);
                }
            }
        }
        if !areas.second.is_empty() {
            self.second.draw(screen, areas.second, theme);
        }
    }

    fn intrinsic_size(&self) -> Option<Size> {
        let a = self.first.intrinsic_size()?;
        let b = self.second.intrinsic_size()?;
        let divider = u16::from(self.divider);
        Some(match self.direction {
            Direction::Horizontal => Size::new(
                a.width.saturating_add(b.width).saturating_add(divider),
                a.height.max(b.height),
            ),
            Direction::Vertical => Size::new(
                a.width.max(b.width),
                a.height.saturating_add(b.height).saturating_add(divider),
            ),
        })
    }

    fn can_focus(&self) -> bool {
        self.first.can_focus() || self.second.can_focus()
    }

    fn is_focused(&self) -> bool {
        self.focus.is_focused()
    }

    fn focus(&mut self) {
        self.handle_focus(FocusMessage::First);
    }

    fn blur(&mut self) {
        let mut panes: [&mut dyn Component; 2] = [self.first.as_mut(), self.second.as_mut()];
        self.focus.blur(&mut panes);
    }

    fn handle_focus(&mut self, msg: FocusMessage) -> bool {
        let mut panes: [&mut dyn Component; 2] = [self.first.as_mut(), self.second.as_mut()];
        self.focus.handle(msg, &mut panes)
    }

    fn handle_key(&mut self, key: &Key) -> bool {
        let mut panes: [&mut dyn Component; 2] = [self.first.as_mut(), self.second.as_mut()];
        self.focus.route_key(key, &mut panes)
    }
}
