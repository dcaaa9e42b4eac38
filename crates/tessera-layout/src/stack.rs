#![forbid(unsafe_code)]

//! Overlapping children in z-order.
//!
//! Children are drawn in list order, so the last one ends up on top. Each
//! child is placed by a [`Placement`]: X/Y constraints give an offset into
//! the stack, width/height constraints give a size, and an [`Origin`] per
//! axis says which point of the child sits at that offset. The result is
//! clamped to the stack's area. A negative position snaps to the edge, and
//! a child running past the far edge is shrunk, never moved.

use tessera_core::geometry::{Rect, Size};
use tessera_core::key::Key;
use tessera_render::Screen;
use tessera_style::Theme;

use crate::component::Component;
use crate::constraint::{Constraint, ConstraintSet};
use crate::focus::{FocusGroup, FocusMessage};

/// Which point of a child is pinned to its offset on one axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Origin {
    /// The child's left or top edge.
    #[default]
    Start,
    /// The child's middle.
    Center,
    /// The child's right or bottom edge.
    End,
}

impl Origin {
    const fn pull(self, size: u16) -> i32 {
        match self {
            Self::Start => 0,
            Self::Center => size as i32 / 2,
            Self::End => size as i32,
        }
    }
}

/// One of nine anchor points in a rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Anchor {
    TopLeft,
    Top,
    TopRight,
    Left,
    Center,
    Right,
    BottomLeft,
    Bottom,
    BottomRight,
}

impl Anchor {
    /// Per-axis fraction and origin.
    const fn axes(self) -> ((f64, Origin), (f64, Origin)) {
        const START: (f64, Origin) = (0.0, Origin::Start);
        const MID: (f64, Origin) = (0.5, Origin::Center);
        const END: (f64, Origin) = (1.0, Origin::End);
        match self {
            Self::TopLeft => (START, START),
            Self::Top => (MID, START),
            Self::TopRight => (END, START),
            Self::Left => (START, MID),
            Self::Center => (MID, MID),
            Self::Right => (END, MID),
            Self::BottomLeft => (START, END),
            Self::Bottom => (MID, END),
            Self::BottomRight => (END, END),
        }
    }
}

/// Where and how big a stacked child is.
///
/// Constraints are resolved against the stack's width (X, width) or height
/// (Y, height); ratios act as fractions of that dimension.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Placement {
    pub x: ConstraintSet,
    pub y: ConstraintSet,
    pub width: ConstraintSet,
    pub height: ConstraintSet,
    pub origin_x: Origin,
    pub origin_y: Origin,
}

impl Placement {
    /// Fixed position and size.
    #[must_use]
    pub const fn at(x: u16, y: u16, width: u16, height: u16) -> Self {
        Self {
            x: ConstraintSet::length(x),
            y: ConstraintSet::length(y),
            width: ConstraintSet::length(width),
            height: ConstraintSet::length(height),
            origin_x: Origin::Start,
            origin_y: Origin::Start,
        }
    }

    /// The whole stack area.
    #[must_use]
    pub const fn fill() -> Self {
        Self {
            width: ConstraintSet::full(),
            height: ConstraintSet::full(),
            ..Self::at(0, 0, 0, 0)
        }
    }

    /// A `width` x `height` child centered in the stack.
    #[must_use]
    pub fn centered(width: impl Into<ConstraintSet>, height: impl Into<ConstraintSet>) -> Self {
        Self::anchored(Anchor::Center, width, height)
    }

    /// A child pinned to one of the stack's anchor points.
    #[must_use]
    pub fn anchored(
        anchor: Anchor,
        width: impl Into<ConstraintSet>,
        height: impl Into<ConstraintSet>,
    ) -> Self {
        let ((fx, origin_x), (fy, origin_y)) = anchor.axes();
        Self {
            x: ConstraintSet::new(Constraint::Percentage(fx)),
            y: ConstraintSet::new(Constraint::Percentage(fy)),
            width: width.into(),
            height: height.into(),
            origin_x,
            origin_y,
        }
    }

    /// Resolve against `area`.
    #[must_use]
    pub fn resolve(&self, area: Rect) -> Rect {
        let (x, width) = place_axis(&self.x, &self.width, self.origin_x, area.width);
        let (y, height) = place_axis(&self.y, &self.height, self.origin_y, area.height);
        Rect::new(
            area.x.saturating_add(x),
            area.y.saturating_add(y),
            width,
            height,
        )
    }
}

fn place_axis(offset: &ConstraintSet, size: &ConstraintSet, origin: Origin, total: u16) -> (u16, u16) {
    let size = size.calculate(total, 1.0);
    let pos = i32::from(offset.calculate(total, 1.0)) - origin.pull(size);
    let pos = pos.clamp(0, i32::from(total)) as u16;
    (pos, size.min(total - pos))
}

struct StackItem {
    component: Box<dyn Component>,
    placement: Placement,
}

/// Children drawn on top of each other.
pub struct Stack {
    items: Vec<StackItem>,
    focus: FocusGroup,
}

impl Default for Stack {
    fn default() -> Self {
        Self::new()
    }
}

impl Stack {
    pub fn new() -> Self {
        Self {
            items: Vec::new(),
            focus: FocusGroup::new(),
        }
    }

    /// Add a child on top.
    pub fn push(&mut self, component: impl Component + 'static, placement: Placement) {
        self.items.push(StackItem {
            component: Box::new(component),
            placement,
        });
    }

    pub fn child(mut self, component: impl Component + 'static, placement: Placement) -> Self {
        self.push(component, placement);
        self
    }

    pub fn push_centered(
        &mut self,
        component: impl Component + 'static,
        width: impl Into<ConstraintSet>,
        height: impl Into<ConstraintSet>,
    ) {
        self.push(component, Placement::centered(width, height));
    }

    pub fn push_anchored(
        &mut self,
        component: impl Component + 'static,
        anchor: Anchor,
        width: impl Into<ConstraintSet>,
        height: impl Into<ConstraintSet>,
    ) {
        self.push(component, Placement::anchored(anchor, width, height));
    }

    /// Remove and return the child at `index`.
    pub fn remove(&mut self, index: usize) -> Option<Box<dyn Component>> {
        if index >= self.items.len() {
            return None;
        }
        self.focus.removed(index);
        Some(self.items.remove(index).component)
    }

    /// Move the child at `index` to the top.
    pub fn bring_to_front(&mut self, index: usize) {
        let Some(last) = self.items.len().checked_sub(1) else { return };
        if index < last {
            let item = self.items.remove(index);
            self.items.push(item);
            self.focus.moved(index, last);
        }
    }

    /// Move the child at `index` to the bottom.
    pub fn send_to_back(&mut self, index: usize) {
        if index > 0 && index < self.items.len() {
            let item = self.items.remove(index);
            self.items.insert(0, item);
            self.focus.moved(index, 0);
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut (dyn Component + 'static)> {
        self.items.get_mut(index).map(|item| item.component.as_mut())
    }

    pub fn placement_mut(&mut self, index: usize) -> Option<&mut Placement> {
        self.items.get_mut(index).map(|item| &mut item.placement)
    }

    #[must_use]
    pub const fn focused_child(&self) -> Option<usize> {
        self.focus.focused()
    }

    /// Each child's rectangle inside `area`, bottom to top.
    #[must_use]
    pub fn layout(&self, area: Rect) -> Vec<Rect> {
        self.items.iter().map(|item| item.placement.resolve(area)).collect()
    }
}

fn children(items: &mut [StackItem]) -> Vec<&mut dyn Component> {
    items
        .iter_mut()
        .map(|item| item.component.as_mut() as &mut dyn Component)
        .collect()
}

impl Component for Stack {
    fn draw(&mut self, screen: &mut Screen, area: Rect, theme: &Theme) {
        for item in &mut self.items {
            let rect = item.placement.resolve(area);
            if !rect.is_empty() {
                item.component.draw(screen, rect, theme);
            }
        }
    }

    /// The largest child, if every child has a size.
    fn intrinsic_size(&self) -> Option<Size> {
        self.items.iter().try_fold(Size::new(0, 0), |acc, item| {
            let size = item.component.intrinsic_size()?;
            Some(Size::new(acc.width.max(size.width), acc.height.max(size.height)))
        })
    }

    fn can_focus(&self) -> bool {
        self.items.iter().any(|item| item.component.can_focus())
    }

    fn is_focused(&self) -> bool {
        self.focus.is_focused()
    }

    fn focus(&mut self) {
        self.handle_focus(FocusMessage::First);
    }

    fn blur(&mut self) {
        self.focus.blur(&mut children(&mut self.items));
    }

    fn handle_focus(&mut self, msg: FocusMessage) -> bool {
        self.focus.handle(msg, &mut children(&mut self.items))
    }

    fn handle_key(&mut self, key: &Key) -> bool {
        self.focus.route_key(key, &mut children(&mut self.items))
    }
}
