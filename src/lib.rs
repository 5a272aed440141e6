//! Resize-handle geometry for interactive drag/resize controllers.
//!
//! Pure geometry — no event tracking, no rendering, no allocations,
//! `no_std` compatible.
//!
//! # Modules
//!
//! - [`handle`] — Handle tokens (edges and corners) and their parsing
//! - [`geometry`] — Vectors, deltas, aspect ratios, element bounds
//! - [`scale`] — Free and ratio-locked scaling
//!
//! # Example
//!
//! ```
//! use zenhandle::{scale, scale_keep_ratio, Bounds, Handle, Ratio, Vector2};
//!
//! let start = Bounds::new(0.0, 0.0, 200.0, 100.0);
//! let handle: Handle = "north-west".parse().unwrap();
//!
//! // Free resize: the south-east corner stays where it was.
//! let moved = start.apply(scale(handle, Vector2::new(20.0, 10.0)));
//! assert_eq!((moved.right(), moved.bottom()), (start.right(), start.bottom()));
//!
//! // Locked resize from the right edge: the height follows the width
//! // along slope `ratio`, split evenly above and below the center.
//! let ratio = Ratio::new(0.5).unwrap();
//! let grown = start.apply(scale_keep_ratio(Handle::EAST, Vector2::new(20.0, 0.0), ratio));
//! assert_eq!((grown.width, grown.height), (220.0, 110.0));
//! assert_eq!(grown.top, -5.0);
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

pub mod geometry;
pub mod handle;
pub mod scale;

pub use geometry::{
    Bounds, DimensionsDelta, HandleError, PositionDelta, Ratio, ScaleResult, Vector2,
};
pub use handle::{Handle, Horizontal, Vertical};
pub use scale::{scale, scale_keep_ratio};
