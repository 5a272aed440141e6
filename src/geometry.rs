//! Value types shared by every scaling operation.
//!
//! All types are plain `Copy` values in the same coordinate space as the
//! resized element: `x` grows rightward, `y` grows downward. Nothing here
//! clamps; a delta that would produce a negative size is returned as-is.

use core::iter::Sum;
use core::ops::{Add, AddAssign, Mul, Neg, Sub};

use num_traits::Float;

/// Error from the validating constructors at the crate boundary.
#[non_exhaustive]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, thiserror::Error)]
pub enum HandleError {
    /// Token is not one of the 8 canonical handle names.
    #[error("unknown resize handle token")]
    UnknownHandle,
    /// Aspect ratio is zero, negative, NaN or infinite.
    #[error("aspect ratio must be positive and finite")]
    InvalidRatio,
}

/// A 2D displacement, typically the pointer movement since the drag began.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Vector2 {
    pub x: f64,
    pub y: f64,
}

impl Vector2 {
    /// The zero vector.
    pub const ZERO: Self = Self { x: 0.0, y: 0.0 };

    /// Create a new vector.
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Dot product.
    pub fn dot(self, other: Self) -> f64 {
        self.x * other.x + self.y * other.y
    }

    /// Euclidean length.
    pub fn length(self) -> f64 {
        Float::sqrt(self.dot(self))
    }
}

impl Add for Vector2 {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Vector2 {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Neg for Vector2 {
    type Output = Self;

    fn neg(self) -> Self {
        Self::new(-self.x, -self.y)
    }
}

impl Mul<f64> for Vector2 {
    type Output = Self;

    fn mul(self, rhs: f64) -> Self {
        Self::new(self.x * rhs, self.y * rhs)
    }
}

/// Amount to add to the element's origin.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct PositionDelta {
    pub top: f64,
    pub left: f64,
}

impl PositionDelta {
    pub const ZERO: Self = Self {
        top: 0.0,
        left: 0.0,
    };

    pub const fn new(top: f64, left: f64) -> Self {
        Self { top, left }
    }
}

/// Amount to add to the element's size.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct DimensionsDelta {
    pub width: f64,
    pub height: f64,
}

impl DimensionsDelta {
    pub const ZERO: Self = Self {
        width: 0.0,
        height: 0.0,
    };

    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

/// Position and dimension deltas produced by a scaling operation.
///
/// Results are additive: summing two results component-wise gives the
/// result of the combined movement.
///
/// ```
/// use zenhandle::{scale, Handle, ScaleResult, Vector2};
///
/// let a = scale(Handle::SOUTH_EAST, Vector2::new(3.0, 4.0));
/// let b = scale(Handle::SOUTH_EAST, Vector2::new(1.0, 1.0));
/// assert_eq!(a + b, scale(Handle::SOUTH_EAST, Vector2::new(4.0, 5.0)));
/// assert!(ScaleResult::ZERO.is_zero());
/// ```
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct ScaleResult {
    pub position: PositionDelta,
    pub dimensions: DimensionsDelta,
}

impl ScaleResult {
    /// No movement, no resize.
    pub const ZERO: Self = Self {
        position: PositionDelta::ZERO,
        dimensions: DimensionsDelta::ZERO,
    };

    /// Create a result from its four components.
    pub const fn new(top: f64, left: f64, width: f64, height: f64) -> Self {
        Self {
            position: PositionDelta::new(top, left),
            dimensions: DimensionsDelta::new(width, height),
        }
    }

    /// Whether every component is exactly zero (either sign).
    pub fn is_zero(&self) -> bool {
        self.position.top == 0.0
            && self.position.left == 0.0
            && self.dimensions.width == 0.0
            && self.dimensions.height == 0.0
    }

    /// Component-wise comparison within an absolute tolerance.
    ///
    /// Ratio-locked corner results pass through a square root, so exact
    /// equality is rarely what callers want there.
    pub fn approx_eq(&self, other: &Self, epsilon: f64) -> bool {
        let close = |a: f64, b: f64| (a - b).abs() <= epsilon;
        close(self.position.top, other.position.top)
            && close(self.position.left, other.position.left)
            && close(self.dimensions.width, other.dimensions.width)
            && close(self.dimensions.height, other.dimensions.height)
    }
}

impl Add for ScaleResult {
    type Output = Self;

    fn add(mut self, rhs: Self) -> Self {
        self += rhs;
        self
    }
}

impl AddAssign for ScaleResult {
    fn add_assign(&mut self, rhs: Self) {
        self.position.top += rhs.position.top;
        self.position.left += rhs.position.left;
        self.dimensions.width += rhs.dimensions.width;
        self.dimensions.height += rhs.dimensions.height;
    }
}

impl Sum for ScaleResult {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, Add::add)
    }
}

/// Target width-to-height aspect ratio for locked scaling.
///
/// Always positive and finite; the only way to build one is through the
/// validating constructors. Locked scaling moves along slope `ratio`:
/// the height delta is `ratio` times the width delta.
#[derive(Copy, Clone, Debug, PartialEq, PartialOrd)]
pub struct Ratio(f64);

impl Ratio {
    /// Square aspect.
    pub const SQUARE: Self = Self(1.0);

    /// Validate a raw ratio.
    pub fn new(ratio: f64) -> Result<Self, HandleError> {
        if ratio.is_finite() && ratio > 0.0 {
            Ok(Self(ratio))
        } else {
            Err(HandleError::InvalidRatio)
        }
    }

    /// Ratio of an element's size, usually taken when the drag starts.
    ///
    /// Fails if either side is zero, negative or non-finite, or if the
    /// quotient overflows.
    pub fn of(width: f64, height: f64) -> Result<Self, HandleError> {
        if !(width.is_finite() && height.is_finite() && width > 0.0 && height > 0.0) {
            return Err(HandleError::InvalidRatio);
        }
        Self::new(width / height)
    }

    /// The raw value.
    pub const fn get(self) -> f64 {
        self.0
    }
}

impl TryFrom<f64> for Ratio {
    type Error = HandleError;

    fn try_from(ratio: f64) -> Result<Self, Self::Error> {
        Self::new(ratio)
    }
}

/// An element rectangle as the drag controller stores it.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Bounds {
    pub top: f64,
    pub left: f64,
    pub width: f64,
    pub height: f64,
}

impl Bounds {
    /// Create new bounds.
    pub const fn new(top: f64, left: f64, width: f64, height: f64) -> Self {
        Self {
            top,
            left,
            width,
            height,
        }
    }

    /// Right edge (`left + width`).
    pub fn right(&self) -> f64 {
        self.left + self.width
    }

    /// Bottom edge (`top + height`).
    pub fn bottom(&self) -> f64 {
        self.top + self.height
    }

    /// Add a scaling result. No clamping: negative sizes pass through.
    pub fn apply(self, delta: ScaleResult) -> Self {
        Self {
            top: self.top + delta.position.top,
            left: self.left + delta.position.left,
            width: self.width + delta.dimensions.width,
            height: self.height + delta.dimensions.height,
        }
    }

    /// Aspect ratio of these bounds.
    pub fn ratio(&self) -> Result<Ratio, HandleError> {
        Ratio::of(self.width, self.height)
    }
}
