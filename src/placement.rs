//! Placement of the dropdown panel relative to its trigger.
//!
//! The panel is placed on the preferred [`Side`] of the trigger, separated by
//! [`SIDE_OFFSET`], and aligned along that side according to [`Align`]. When
//! the preferred side does not fit in the viewport and the opposite side has
//! more room, the panel flips. The result is clamped to the viewport.
use crate::core::{Point, Rectangle, Size};

/// The gap between the trigger and the panel.
pub const SIDE_OFFSET: f32 = 8.0;

/// The distance between the arrow and the start or end edge of the panel.
pub const ARROW_OFFSET: f32 = 10.0;

/// The length of the arrow along the panel edge.
pub const ARROW_WIDTH: f32 = 10.0;

/// The depth of the arrow, away from the panel edge.
pub const ARROW_HEIGHT: f32 = 5.0;

/// The side of the trigger the panel is placed on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Side {
    /// Above the trigger.
    Top,
    /// To the right of the trigger.
    Right,
    /// Below the trigger.
    #[default]
    Bottom,
    /// To the left of the trigger.
    Left,
}

impl Side {
    /// Returns the side across the trigger.
    pub fn opposite(self) -> Self {
        match self {
            Side::Top => Side::Bottom,
            Side::Right => Side::Left,
            Side::Bottom => Side::Top,
            Side::Left => Side::Right,
        }
    }

    fn is_vertical(self) -> bool {
        matches!(self, Side::Top | Side::Bottom)
    }
}

/// The alignment of the panel along the chosen side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Align {
    /// Aligns the leading edges of trigger and panel.
    Start,
    /// Centers the panel on the trigger.
    #[default]
    Center,
    /// Aligns the trailing edges of trigger and panel.
    End,
}

/// The resolved position of a panel and its arrow.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Placement {
    /// The side the panel ended up on, after flipping.
    pub side: Side,
    /// The bounds of the panel.
    pub content: Rectangle,
    /// The bounds of the arrow, in the gap between trigger and panel.
    pub arrow: Rectangle,
}

/// Places a panel of the given size next to `trigger`, inside `viewport`.
pub fn resolve(
    trigger: Rectangle,
    content: Size,
    side: Side,
    align: Align,
    viewport: Size,
) -> Placement {
    let side = choose_side(trigger, content, side, viewport);

    let position = if side.is_vertical() {
        let y = match side {
            Side::Top => trigger.y - SIDE_OFFSET - content.height,
            _ => trigger.y + trigger.height + SIDE_OFFSET,
        };

        let x = align_on(trigger.x, trigger.width, content.width, align);

        Point::new(
            clamp(x, content.width, viewport.width),
            clamp(y, content.height, viewport.height),
        )
    } else {
        let x = match side {
            Side::Left => trigger.x - SIDE_OFFSET - content.width,
            _ => trigger.x + trigger.width + SIDE_OFFSET,
        };

        let y = align_on(trigger.y, trigger.height, content.height, align);

        Point::new(
            clamp(x, content.width, viewport.width),
            clamp(y, content.height, viewport.height),
        )
    };

    let content = Rectangle::new(position, content);
    let arrow = arrow(content, side, align);

    Placement {
        side,
        content,
        arrow,
    }
}

fn choose_side(trigger: Rectangle, content: Size, side: Side, viewport: Size) -> Side {
    let space = |side: Side| match side {
        Side::Top => trigger.y,
        Side::Right => viewport.width - trigger.x - trigger.width,
        Side::Bottom => viewport.height - trigger.y - trigger.height,
        Side::Left => trigger.x,
    };

    let needed = SIDE_OFFSET
        + if side.is_vertical() {
            content.height
        } else {
            content.width
        };

    let opposite = side.opposite();

    if needed > space(side) && space(opposite) > space(side) {
        opposite
    } else {
        side
    }
}

fn align_on(start: f32, length: f32, size: f32, align: Align) -> f32 {
    match align {
        Align::Start => start,
        Align::Center => start + (length - size) / 2.0,
        Align::End => start + length - size,
    }
}

fn clamp(position: f32, size: f32, max: f32) -> f32 {
    position.min(max - size).max(0.0)
}

/// Places the arrow [`ARROW_OFFSET`] from the start or end edge of the
/// panel, or centered on it, following `align`.
fn arrow(content: Rectangle, side: Side, align: Align) -> Rectangle {
    let along = |start: f32, length: f32| match align {
        Align::Start => start + ARROW_OFFSET,
        Align::Center => start + (length - ARROW_WIDTH) / 2.0,
        Align::End => start + length - ARROW_OFFSET - ARROW_WIDTH,
    };

    match side {
        Side::Top | Side::Bottom => {
            let x = along(content.x, content.width);
            let y = if side == Side::Bottom {
                content.y - ARROW_HEIGHT
            } else {
                content.y + content.height
            };

            Rectangle::new(Point::new(x, y), Size::new(ARROW_WIDTH, ARROW_HEIGHT))
        }
        Side::Left | Side::Right => {
            let y = along(content.y, content.height);
            let x = if side == Side::Right {
                content.x - ARROW_HEIGHT
            } else {
                content.x + content.width
            };

            Rectangle::new(Point::new(x, y), Size::new(ARROW_HEIGHT, ARROW_WIDTH))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn viewport() -> Size {
        Size::new(800.0, 600.0)
    }

    fn trigger() -> Rectangle {
        Rectangle::new(Point::new(100.0, 100.0), Size::new(80.0, 30.0))
    }

    #[test]
    fn test_defaults() {
        assert_eq!(Side::default(), Side::Bottom);
        assert_eq!(Align::default(), Align::Center);
    }

    #[test]
    fn test_bottom_center() {
        let placement = resolve(
            trigger(),
            Size::new(120.0, 60.0),
            Side::Bottom,
            Align::Center,
            viewport(),
        );

        assert_eq!(placement.side, Side::Bottom);
        assert_eq!(placement.content.y, 138.0);
        assert_eq!(placement.content.x, 80.0);
    }

    #[test]
    fn test_right_with_arrow() {
        let placement = resolve(
            trigger(),
            Size::new(120.0, 60.0),
            Side::Right,
            Align::Center,
            viewport(),
        );

        assert_eq!(placement.side, Side::Right);
        assert_eq!(
            placement.content.x,
            trigger().x + trigger().width + SIDE_OFFSET
        );
        assert_eq!(placement.content.y, 85.0);

        // The arrow sits in the gap, against the panel edge.
        assert_eq!(
            placement.arrow.x + placement.arrow.width,
            placement.content.x
        );
        assert!(placement.arrow.y >= placement.content.y + ARROW_OFFSET);
        assert!(
            placement.arrow.y + placement.arrow.height
                <= placement.content.y + placement.content.height - ARROW_OFFSET
        );
    }

    #[test]
    fn test_start_and_end_alignment() {
        let content = Size::new(200.0, 60.0);

        let start = resolve(trigger(), content, Side::Bottom, Align::Start, viewport());
        assert_eq!(start.content.x, 100.0);
        assert_eq!(start.arrow.x - start.content.x, ARROW_OFFSET);

        let end = resolve(trigger(), content, Side::Bottom, Align::End, viewport());
        assert_eq!(end.content.x, 0.0);
        assert_eq!(
            end.content.x + end.content.width - (end.arrow.x + end.arrow.width),
            ARROW_OFFSET
        );
    }

    #[test]
    fn test_centered_arrow() {
        let placement = resolve(
            trigger(),
            Size::new(200.0, 60.0),
            Side::Bottom,
            Align::Center,
            viewport(),
        );

        assert_eq!(placement.content.x, 40.0);
        assert_eq!(placement.arrow.x, 40.0 + (200.0 - ARROW_WIDTH) / 2.0);
        assert_eq!(placement.arrow.y, placement.content.y - ARROW_HEIGHT);
    }

    #[test]
    fn test_flipped_side_keeps_arrow_alignment() {
        let start = resolve(
            trigger(),
            Size::new(120.0, 60.0),
            Side::Left,
            Align::Start,
            Size::new(800.0, 600.0),
        );

        assert_eq!(start.side, Side::Right);
        assert_eq!(start.arrow.y, start.content.y + ARROW_OFFSET);
        assert_eq!(start.arrow.x + start.arrow.width, start.content.x);
    }

    #[test]
    fn test_flips_when_out_of_room() {
        let trigger = Rectangle::new(Point::new(100.0, 560.0), Size::new(80.0, 30.0));
        let placement = resolve(
            trigger,
            Size::new(120.0, 200.0),
            Side::Bottom,
            Align::Center,
            viewport(),
        );

        assert_eq!(placement.side, Side::Top);
        assert_eq!(placement.content.y, 560.0 - SIDE_OFFSET - 200.0);
        assert_eq!(placement.arrow.y, placement.content.y + 200.0);
    }

    #[test]
    fn test_keeps_side_when_opposite_is_worse() {
        let trigger = Rectangle::new(Point::new(100.0, 20.0), Size::new(80.0, 30.0));
        let placement = resolve(
            trigger,
            Size::new(120.0, 700.0),
            Side::Bottom,
            Align::Center,
            viewport(),
        );

        assert_eq!(placement.side, Side::Bottom);
    }

    #[test]
    fn test_clamps_cross_axis() {
        let trigger = Rectangle::new(Point::new(760.0, 100.0), Size::new(40.0, 30.0));
        let placement = resolve(
            trigger,
            Size::new(200.0, 60.0),
            Side::Bottom,
            Align::Start,
            viewport(),
        );

        assert_eq!(placement.content.x, 600.0);
    }

    #[test]
    fn test_clamps_main_axis_when_no_side_fits() {
        let trigger = Rectangle::new(Point::new(100.0, 300.0), Size::new(80.0, 30.0));
        let placement = resolve(
            trigger,
            Size::new(120.0, 400.0),
            Side::Bottom,
            Align::Center,
            viewport(),
        );

        assert_eq!(placement.side, Side::Top);
        assert_eq!(placement.content.y, 0.0);
        assert!(placement.content.y + placement.content.height <= viewport().height);
    }
}
