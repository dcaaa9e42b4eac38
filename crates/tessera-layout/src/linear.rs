#![forbid(unsafe_code)]

//! Row and column layouts.

use tessera_core::geometry::{Rect, Sides, Size};
use tessera_core::key::Key;
use tessera_render::Screen;
use tessera_style::Theme;

use crate::component::Component;
use crate::constraint::{ConstraintSet, calculate_constraints};
use crate::focus::{FocusGroup, FocusMessage};

/// The main axis of a layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Direction {
    /// Top to bottom.
    #[default]
    Vertical,
    /// Left to right.
    Horizontal,
}

/// Placement of a child on the cross axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Alignment {
    Start,
    Center,
    End,
    /// Fill the whole cross axis.
    #[default]
    Stretch,
}

impl Alignment {
    /// Offset of a `size`-long item inside `total`.
    #[must_use]
    pub const fn offset(self, size: u16, total: u16) -> u16 {
        let free = total.saturating_sub(size);
        match self {
            Self::Start | Self::Stretch => 0,
            Self::Center => free / 2,
            Self::End => free,
        }
    }
}

struct LinearItem {
    component: Box<dyn Component>,
    constraint: ConstraintSet,
    cross: Option<ConstraintSet>,
    align: Option<Alignment>,
}

/// Children laid end to end along one axis.
///
/// Padding is applied first, then the spacing between children is taken out
/// of the main axis, and what is left is distributed with
/// [`calculate_constraints`]. Each child is then placed on the cross axis by
/// its own alignment (or the layout's).
pub struct Linear {
    direction: Direction,
    items: Vec<LinearItem>,
    spacing: u16,
    padding: Sides,
    align: Alignment,
    focus: FocusGroup,
}

impl Linear {
    pub fn new(direction: Direction) -> Self {
        Self {
            direction,
            items: Vec::new(),
            spacing: 0,
            padding: Sides::default(),
            align: Alignment::default(),
            focus: FocusGroup::new(),
        }
    }

    /// Children side by side, left to right.
    pub fn hbox() -> Self {
        Self::new(Direction::Horizontal)
    }

    /// Children stacked top to bottom.
    pub fn vbox() -> Self {
        Self::new(Direction::Vertical)
    }

    pub fn spacing(mut self, spacing: u16) -> Self {
        self.spacing = spacing;
        self
    }

    pub fn padding(mut self, padding: impl Into<Sides>) -> Self {
        self.padding = padding.into();
        self
    }

    /// Default cross-axis alignment for children that do not set one.
    pub fn align(mut self, align: Alignment) -> Self {
        self.align = align;
        self
    }

    pub fn child(mut self, component: impl Component + 'static, constraint: impl Into<ConstraintSet>) -> Self {
        self.push(component, constraint);
        self
    }

    /// Add a child with its own cross-axis alignment and optional cross size.
    pub fn child_aligned(
        mut self,
        component: impl Component + 'static,
        constraint: impl Into<ConstraintSet>,
        align: Alignment,
        cross: Option<ConstraintSet>,
    ) -> Self {
        self.items.push(LinearItem {
            component: Box::new(component),
            constraint: constraint.into(),
            cross,
            align: Some(align),
        });
        self
    }

    pub fn push(&mut self, component: impl Component + 'static, constraint: impl Into<ConstraintSet>) {
        self.items.push(LinearItem {
            component: Box::new(component),
            constraint: constraint.into(),
            cross: None,
            align: None,
        });
    }

    /// Remove and return the child at `index`.
    pub fn remove(&mut self, index: usize) -> Option<Box<dyn Component>> {
        if index >= self.items.len() {
            return None;
        }
        self.focus.removed(index);
        Some(self.items.remove(index).component)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    #[must_use]
    pub const fn direction(&self) -> Direction {
        self.direction
    }

    pub fn get(&self, index: usize) -> Option<&dyn Component> {
        self.items.get(index).map(|item| item.component.as_ref())
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut (dyn Component + 'static)> {
        self.items.get_mut(index).map(|item| item.component.as_mut())
    }

    /// Index of the child holding focus.
    #[must_use]
    pub const fn focused_child(&self) -> Option<usize> {
        self.focus.focused()
    }

    /// The rectangle each child gets inside `area`, in child order.
    #[must_use]
    pub fn layout(&self, area: Rect) -> Vec<Rect> {
        let inner = area.inner(self.padding);
        let (main_total, cross_total) = match self.direction {
            Direction::Horizontal => (inner.width, inner.height),
            Direction::Vertical => (inner.height, inner.width),
        };

        let gaps = self.items.len().saturating_sub(1) as u64 * u64::from(self.spacing);
        let available = u64::from(main_total).saturating_sub(gaps) as u16;
        let sets: Vec<ConstraintSet> = self.items.iter().map(|item| item.constraint).collect();
        let sizes = calculate_constraints(&sets, available);

        let mut cursor = 0u16;
        self.items
            .iter()
            .zip(sizes)
            .map(|(item, main)| {
                let align = item.align.unwrap_or(self.align);
                let cross = self.cross_size(item, align, cross_total);
                let cross_offset = align.offset(cross, cross_total);
                let rect = match self.direction {
                    Direction::Horizontal => Rect::new(
                        inner.x.saturating_add(cursor),
                        inner.y.saturating_add(cross_offset),
                        main,
                        cross,
                    ),
                    Direction::Vertical => Rect::new(
                        inner.x.saturating_add(cross_offset),
                        inner.y.saturating_add(cursor),
                        cross,
                        main,
                    ),
                };
                cursor = cursor.saturating_add(main).saturating_add(self.spacing);
                rect
            })
            .collect()
    }

    fn cross_size(&self, item: &LinearItem, align: Alignment, total: u16) -> u16 {
        if let Some(cross) = item.cross {
            return cross.calculate(total, 1.0).min(total);
        }
        if align == Alignment::Stretch {
            return total;
        }
        let intrinsic = item.component.intrinsic_size().map(|Size { width, height }| {
            match self.direction {
                Direction::Horizontal => height,
                Direction::Vertical => width,
            }
        });
        intrinsic.unwrap_or(total).min(total)
    }
}

fn children(items: &mut [LinearItem]) -> Vec<&mut dyn Component> {
    items
        .iter_mut()
        .map(|item| item.component.as_mut() as &mut dyn Component)
        .collect()
}

impl Component for Linear {
    fn draw(&mut self, screen: &mut Screen, area: Rect, theme: &Theme) {
        let rects = self.layout(area);
        for (item, rect) in self.items.iter_mut().zip(rects) {
            if !rect.is_empty() {
                item.component.draw(screen, rect, theme);
            }
        }
    }

    /// Sum along the main axis (plus spacing and padding), max across.
    fn intrinsic_size(&self) -> Option<Size> {
        let mut main = 0u16;
        let mut cross = 0u16;
        for item in &self.items {
            let size = item.component.intrinsic_size()?;
            let (m, c) = match self.direction {
                Direction::Horizontal => (size.width, size.height),
                Direction::Vertical => (size.height, size.width),
            };
            main = main.saturating_add(m);
            cross = cross.max(c);
        }
        let gaps = (self.items.len().saturating_sub(1) as u16).saturating_mul(self.spacing);
        main = main.saturating_add(gaps);
        let (width, height) = match self.direction {
            Direction::Horizontal => (main, cross),
            Direction::Vertical => (cross, main),
        };
        Some(Size::new(
            width.saturating_add(self.padding.horizontal_sum()),
            height.saturating_add(self.padding.vertical_sum()),
        ))
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
