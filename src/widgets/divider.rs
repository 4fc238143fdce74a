//! Edge divider lines for widgets.
//!
//! Each widget edge (top, left, right, bottom) can carry an independent
//! divider line spanning the full edge. Endpoints use `w - 1` / `h - 1`
//! because valid pixel coordinates exclude the upper bound - a line at
//! `x = w` would be invisible.

use embedded_graphics::{
    pixelcolor::Rgb565,
    prelude::*,
    primitives::{Line, PrimitiveStyle},
};
use heapless::Vec;

/// Which edges of a widget carry a divider line. All four are independent
/// and may be enabled together.
#[derive(Clone, Copy, Default, PartialEq, Eq, Debug)]
pub struct DividerEdges {
    pub top: bool,
    pub left: bool,
    pub right: bool,
    pub bottom: bool,
}

impl DividerEdges {
    /// No dividers (the default).
    pub const NONE: Self = Self { top: false, left: false, right: false, bottom: false };
}

/// Compute the line segments for the enabled edges of a surface of `size`.
///
/// Emission order is fixed: top, left, right, bottom.
pub fn divider_segments(size: Size, edges: DividerEdges) -> Vec<Line, 4> {
    let mut segments: Vec<Line, 4> = Vec::new();
    let right = size.width.saturating_sub(1) as i32;
    let bottom = size.height.saturating_sub(1) as i32;

    if edges.top {
        let _ = segments.push(Line::new(Point::new(0, 0), Point::new(right, 0)));
    }
    if edges.left {
        let _ = segments.push(Line::new(Point::new(0, 0), Point::new(0, bottom)));
    }
    if edges.right {
        let _ = segments.push(Line::new(Point::new(right, 0), Point::new(right, bottom)));
    }
    if edges.bottom {
        let _ = segments.push(Line::new(Point::new(0, bottom), Point::new(right, bottom)));
    }
    segments
}

/// Draw the enabled divider segments with the given stroke.
pub fn draw_dividers<D>(
    display: &mut D,
    size: Size,
    edges: DividerEdges,
    color: Rgb565,
    stroke_px: u32,
) -> Result<(), D::Error>
where
    D: DrawTarget<Color = Rgb565>,
{
    let style = PrimitiveStyle::with_stroke(color, stroke_px);
    for segment in divider_segments(size, edges) {
        segment.into_styled(style).draw(display)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    const SIZE: Size = Size::new(200, 100);

    #[test]
    fn test_no_edges_no_segments() {
        assert!(divider_segments(SIZE, DividerEdges::NONE).is_empty());
    }

    #[test]
    fn test_single_edges_are_independent() {
        let top = divider_segments(SIZE, DividerEdges { top: true, ..DividerEdges::NONE });
        assert_eq!(top.len(), 1);
        assert_eq!(top[0], Line::new(Point::new(0, 0), Point::new(199, 0)));

        let left = divider_segments(SIZE, DividerEdges { left: true, ..DividerEdges::NONE });
        assert_eq!(left.len(), 1);
        assert_eq!(left[0], Line::new(Point::new(0, 0), Point::new(0, 99)));

        let right = divider_segments(SIZE, DividerEdges { right: true, ..DividerEdges::NONE });
        assert_eq!(right.len(), 1);
        assert_eq!(right[0], Line::new(Point::new(199, 0), Point::new(199, 99)));

        let bottom = divider_segments(SIZE, DividerEdges { bottom: true, ..DividerEdges::NONE });
        assert_eq!(bottom.len(), 1);
        assert_eq!(bottom[0], Line::new(Point::new(0, 99), Point::new(199, 99)));
    }

    #[test]
    fn test_subset_draws_exactly_that_subset() {
        let edges = DividerEdges { top: true, bottom: true, ..DividerEdges::NONE };
        let segments = divider_segments(SIZE, edges);
        assert_eq!(segments.len(), 2, "exactly the enabled edges appear");
        // Both horizontal, spanning the full width
        for line in &segments {
            assert_eq!(line.start.x, 0);
            assert_eq!(line.end.x, 199);
        }
    }

    #[test]
    fn test_all_four_edges_co_drawable() {
        let edges = DividerEdges { top: true, left: true, right: true, bottom: true };
        assert_eq!(divider_segments(SIZE, edges).len(), 4);
    }
}
