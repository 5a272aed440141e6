//! Free and aspect-locked scaling from a dragged handle.
//!
//! Both operations turn a handle and a movement vector into a
//! [`ScaleResult`] that the caller adds to its own element state. The edge
//! or corner opposite the handle is the anchor and does not move.
//!
//! Ratio-locked scaling reduces to free scaling: corners project the drag
//! onto the locked diagonal first, edges add two half-size perpendicular
//! scales about the element's centerline.

use num_traits::Float;

use crate::geometry::{Ratio, ScaleResult, Vector2};
use crate::handle::{Handle, Horizontal, Vertical};

/// Scale freely, each axis independently.
///
/// `north` and `west` move the origin by `diff` and shrink the size by the
/// same amount; `south` and `east` only grow the size. Axes the handle
/// does not name contribute nothing.
///
/// ```
/// use zenhandle::{scale, Handle, ScaleResult, Vector2};
///
/// let r = scale(Handle::NORTH_WEST, Vector2::new(5.0, 7.0));
/// assert_eq!(r, ScaleResult::new(7.0, 5.0, -5.0, -7.0));
/// ```
pub fn scale(handle: Handle, diff: Vector2) -> ScaleResult {
    #[cfg(feature = "tracing")]
    let _span = tracing::trace_span!(
        "scale",
        handle = handle.as_str(),
        dx = diff.x,
        dy = diff.y
    )
    .entered();

    let mut result = ScaleResult::ZERO;
    match handle.vertical {
        Some(Vertical::North) => {
            result.dimensions.height -= diff.y;
            result.position.top += diff.y;
        }
        Some(Vertical::South) => result.dimensions.height += diff.y,
        None => {}
    }
    match handle.horizontal {
        Some(Horizontal::West) => {
            result.dimensions.width -= diff.x;
            result.position.left += diff.x;
        }
        Some(Horizontal::East) => result.dimensions.width += diff.x,
        None => {}
    }
    result
}

/// Scale while holding the aspect ratio.
///
/// Corner handles follow the component of `diff` along the locked diagonal
/// through the anchor corner and drop the rest. Edge handles move their
/// edge by the full drag and resize the perpendicular axis symmetrically
/// about the center, so the perpendicular size changes by `|diff| / ratio`
/// (vertical edges: `|diff| * ratio`).
///
/// ```
/// use zenhandle::{scale_keep_ratio, Handle, Ratio, ScaleResult, Vector2};
///
/// let ratio = Ratio::new(2.0).unwrap();
///
/// // Dragging the top edge down by 10 shrinks the width by 10 / 2,
/// // split evenly between the left and right edges.
/// let r = scale_keep_ratio(Handle::NORTH, Vector2::new(0.0, 10.0), ratio);
/// assert_eq!(r, ScaleResult::new(10.0, 2.5, -5.0, -10.0));
///
/// // A drag across the locked diagonal changes nothing.
/// let r = scale_keep_ratio(Handle::SOUTH_EAST, Vector2::new(2.0, -1.0), ratio);
/// assert!(r.is_zero());
/// ```
pub fn scale_keep_ratio(handle: Handle, diff: Vector2, ratio: Ratio) -> ScaleResult {
    #[cfg(feature = "tracing")]
    let _span = tracing::trace_span!(
        "scale_keep_ratio",
        handle = handle.as_str(),
        dx = diff.x,
        dy = diff.y,
        ratio = ratio.get()
    )
    .entered();

    if handle.is_corner() {
        scale_corner(handle, diff, ratio.get())
    } else {
        scale_side(handle, diff, ratio.get())
    }
}

/// Project `diff` onto the ratio-locked diagonal from the dragged corner
/// toward the anchor, then scale freely along it.
fn scale_corner(handle: Handle, diff: Vector2, ratio: f64) -> ScaleResult {
    let to_anchor = Vector2::new(
        match handle.horizontal {
            Some(Horizontal::West) => 1.0,
            _ => -1.0,
        },
        match handle.vertical {
            Some(Vertical::South) => -ratio,
            _ => ratio,
        },
    );
    // |to_anchor| = sqrt(1 + ratio²); hypot keeps huge ratios finite.
    let length = Float::hypot(1.0, ratio);
    let unit = Vector2::new(to_anchor.x / length, to_anchor.y / length);
    let along = diff.dot(to_anchor) / length;

    #[cfg(feature = "tracing")]
    tracing::trace!(along, "projected corner drag onto locked diagonal");

    scale(handle, unit * along)
}

/// Primary edge scale plus two equal perpendicular scales that keep the
/// element's centerline fixed.
fn scale_side(handle: Handle, diff: Vector2, ratio: f64) -> ScaleResult {
    let parts = match (handle.vertical, handle.horizontal) {
        (Some(Vertical::North), None) => {
            let half = diff.y / (2.0 * ratio);
            [
                scale(Handle::NORTH, Vector2::new(0.0, diff.y)),
                scale(Handle::EAST, Vector2::new(-half, 0.0)),
                scale(Handle::WEST, Vector2::new(half, 0.0)),
            ]
        }
        (Some(Vertical::South), None) => {
            let half = diff.y / (2.0 * ratio);
            [
                scale(Handle::SOUTH, Vector2::new(0.0, diff.y)),
                scale(Handle::EAST, Vector2::new(half, 0.0)),
                scale(Handle::WEST, Vector2::new(-half, 0.0)),
            ]
        }
        (None, Some(Horizontal::East)) => {
            let half = diff.x * ratio / 2.0;
            [
                scale(Handle::EAST, Vector2::new(diff.x, 0.0)),
                scale(Handle::NORTH, Vector2::new(0.0, -half)),
                scale(Handle::SOUTH, Vector2::new(0.0, half)),
            ]
        }
        (None, Some(Horizontal::West)) => {
            let half = diff.x * ratio / 2.0;
            [
                scale(Handle::WEST, Vector2::new(diff.x, 0.0)),
                scale(Handle::NORTH, Vector2::new(0.0, half)),
                scale(Handle::SOUTH, Vector2::new(0.0, -half)),
            ]
        }
        // Corners are routed to scale_corner; NONE has no edge to move.
        _ => return ScaleResult::ZERO,
    };
    parts.into_iter().sum()
}
