//! Resize handle tokens.
//!
//! A handle names the edge or corner being dragged. Edges carry one
//! direction (`north`, `south`, `east`, `west`); corners join one vertical
//! and one horizontal direction (`north-west`, `south-east`, ...).
//!
//! ```text
//!     north-west ─── north ─── north-east
//!         │                        │
//!       west                     east
//!         │                        │
//!     south-west ─── south ─── south-east
//! ```

use core::fmt;
use core::str::FromStr;

use crate::geometry::HandleError;

/// Vertical component of a handle.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Vertical {
    /// Top edge. Dragging it moves the origin.
    North,
    /// Bottom edge.
    South,
}

/// Horizontal component of a handle.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Horizontal {
    /// Right edge.
    East,
    /// Left edge. Dragging it moves the origin.
    West,
}

/// Which edge or corner of a rectangle is being dragged.
///
/// At most one direction per axis. The 8 valid handles are available as
/// constants; [`Handle::NONE`] is what an unrecognized token parses to and
/// scales to a zero delta.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Handle {
    pub vertical: Option<Vertical>,
    pub horizontal: Option<Horizontal>,
}

impl Handle {
    /// No recognized direction on either axis.
    pub const NONE: Self = Self::new(None, None);

    pub const NORTH: Self = Self::new(Some(Vertical::North), None);
    pub const SOUTH: Self = Self::new(Some(Vertical::South), None);
    pub const EAST: Self = Self::new(None, Some(Horizontal::East));
    pub const WEST: Self = Self::new(None, Some(Horizontal::West));
    pub const NORTH_EAST: Self = Self::new(Some(Vertical::North), Some(Horizontal::East));
    pub const NORTH_WEST: Self = Self::new(Some(Vertical::North), Some(Horizontal::West));
    pub const SOUTH_EAST: Self = Self::new(Some(Vertical::South), Some(Horizontal::East));
    pub const SOUTH_WEST: Self = Self::new(Some(Vertical::South), Some(Horizontal::West));

    /// The 8 valid handles, clockwise from north.
    pub const ALL: [Self; 8] = [
        Self::NORTH,
        Self::NORTH_EAST,
        Self::EAST,
        Self::SOUTH_EAST,
        Self::SOUTH,
        Self::SOUTH_WEST,
        Self::WEST,
        Self::NORTH_WEST,
    ];

    /// Build a handle from its axis components.
    pub const fn new(vertical: Option<Vertical>, horizontal: Option<Horizontal>) -> Self {
        Self {
            vertical,
            horizontal,
        }
    }

    /// Permissive parse: an axis is set when its direction word appears
    /// anywhere in the token.
    ///
    /// Never fails. Unrecognized tokens yield [`Handle::NONE`]. A token
    /// naming both directions of one axis keeps `North` / `West`.
    ///
    /// ```
    /// use zenhandle::Handle;
    ///
    /// assert_eq!(Handle::from_token("north-west"), Handle::NORTH_WEST);
    /// assert_eq!(Handle::from_token("handle-east"), Handle::EAST);
    /// assert_eq!(Handle::from_token("center"), Handle::NONE);
    /// ```
    pub fn from_token(token: &str) -> Self {
        let vertical = if token.contains("north") {
            Some(Vertical::North)
        } else if token.contains("south") {
            Some(Vertical::South)
        } else {
            None
        };
        let horizontal = if token.contains("west") {
            Some(Horizontal::West)
        } else if token.contains("east") {
            Some(Horizontal::East)
        } else {
            None
        };
        Self::new(vertical, horizontal)
    }

    /// Both axes present.
    pub const fn is_corner(&self) -> bool {
        self.vertical.is_some() && self.horizontal.is_some()
    }

    /// Exactly one axis present.
    pub const fn is_edge(&self) -> bool {
        self.vertical.is_some() != self.horizontal.is_some()
    }

    /// One of the 8 handles a rectangle actually has.
    pub const fn is_valid(&self) -> bool {
        self.vertical.is_some() || self.horizontal.is_some()
    }

    /// The anchor: the edge or corner that stays put while this one moves.
    pub const fn opposite(&self) -> Self {
        let vertical = match self.vertical {
            Some(Vertical::North) => Some(Vertical::South),
            Some(Vertical::South) => Some(Vertical::North),
            None => None,
        };
        let horizontal = match self.horizontal {
            Some(Horizontal::East) => Some(Horizontal::West),
            Some(Horizontal::West) => Some(Horizontal::East),
            None => None,
        };
        Self::new(vertical, horizontal)
    }

    /// Canonical token, e.g. `"south-east"`. [`Handle::NONE`] is `"none"`.
    pub const fn as_str(&self) -> &'static str {
        match (self.vertical, self.horizontal) {
            (Some(Vertical::North), None) => "north",
            (Some(Vertical::South), None) => "south",
            (None, Some(Horizontal::East)) => "east",
            (None, Some(Horizontal::West)) => "west",
            (Some(Vertical::North), Some(Horizontal::East)) => "north-east",
            (Some(Vertical::North), Some(Horizontal::West)) => "north-west",
            (Some(Vertical::South), Some(Horizontal::East)) => "south-east",
            (Some(Vertical::South), Some(Horizontal::West)) => "south-west",
            (None, None) => "none",
        }
    }
}

impl fmt::Display for Handle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Strict parse: only the 8 canonical tokens, ASCII case-insensitive.
impl FromStr for Handle {
    type Err = HandleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        Self::ALL
            .into_iter()
            .find(|h| h.as_str().eq_ignore_ascii_case(s))
            .ok_or(HandleError::UnknownHandle)
    }
}
