use super::bubbles::BubbleDescriptor;
use super::constants::{FALLBACK_HEIGHT_FRACTION, LAYOUT_PADDING_PX};
use glam::Vec2;
use rand::Rng;

/// Resolve the area bubbles are scattered over.
///
/// An unmeasured (zero) container falls back to the viewport width and a
/// fraction of the viewport height, per axis.
pub fn container_extent(measured: Vec2, viewport: Vec2) -> Vec2 {
    let width = if measured.x.is_finite() && measured.x > 0.0 {
        measured.x
    } else {
        viewport.x
    };
    let height = if measured.y.is_finite() && measured.y > 0.0 {
        measured.y
    } else {
        viewport.y * FALLBACK_HEIGHT_FRACTION
    };
    Vec2::new(width, height)
}

/// Free room along one axis once the bubble and both paddings are subtracted.
/// Clamped at zero so oversized bubbles never produce a negative range.
#[inline]
pub fn axis_span(extent: f32, size: f32) -> f32 {
    (extent - size - LAYOUT_PADDING_PX * 2.0).max(0.0)
}

/// Whole-pixel offset in `[padding, padding + span)`; exactly `padding` when the span is empty.
pub fn axis_offset<R: Rng + ?Sized>(rng: &mut R, extent: f32, size: f32) -> f32 {
    let r: f32 = rng.gen();
    (r * axis_span(extent, size)).floor() + LAYOUT_PADDING_PX
}

/// Top-left corner for each descriptor. Positions are independent; overlaps are allowed.
pub fn place_bubbles<R: Rng + ?Sized>(
    rng: &mut R,
    extent: Vec2,
    descriptors: &[BubbleDescriptor],
) -> Vec<Vec2> {
    descriptors
        .iter()
        .map(|d| {
            let left = axis_offset(rng, extent.x, d.size);
            let top = axis_offset(rng, extent.y, d.size);
            Vec2::new(left, top)
        })
        .collect()
}
