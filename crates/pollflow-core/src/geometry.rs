//! Geometric primitives for diagram layout and positioning.
//!
//! This module provides the value types used by the layout engine to place
//! process boxes and pollutant groups, and to accumulate the bounding boxes
//! of everything drawn.
//!
//! # Overview
//!
//! - [`Point`] - A 2D coordinate in diagram space
//! - [`Size`] - Width and height dimensions
//! - [`Bounds`] - A rectangle described by its left, right, top and bottom edges
//! - [`Insets`] - Padding values for four sides
//!
//! # Coordinate System
//!
//! Pollflow uses a coordinate system consistent with SVG:
//!
//! ```text
//!   (0,0) ────────► +X
//!     │
//!     │
//!     ▼
//!    +Y
//! ```
//!
//! - **Origin**: Top-left corner at `(0, 0)`
//! - **X-axis**: Increases rightward
//! - **Y-axis**: Increases downward

/// A 2D point representing a position in diagram coordinate space.
///
/// # Examples
///
/// ```
/// # use pollflow_core::geometry::{Point, Size};
/// let top_left = Point::new(520.0, 50.0);
///
/// let process_box = top_left.to_bounds(Size::new(160.0, 60.0));
/// assert_eq!(process_box.left(), 520.0);
/// assert_eq!(process_box.right(), 680.0);
/// assert_eq!(process_box.bottom(), 110.0);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Point {
    x: f32,
    y: f32,
}

impl Point {
    /// Creates a new point with the specified coordinates
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Returns the x-coordinate of the point
    pub fn x(self) -> f32 {
        self.x
    }

    /// Returns the y-coordinate of the point
    pub fn y(self) -> f32 {
        self.y
    }

    /// Converts a top-left point and a size into a bounds rectangle.
    pub fn to_bounds(self, size: Size) -> Bounds {
        Bounds::new_from_top_left(self, size)
    }
}

/// Represents the dimensions of an element with width and height
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Size {
    width: f32,
    height: f32,
}

impl Size {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Returns the width dimension of this size
    pub fn width(self) -> f32 {
        self.width
    }

    /// Returns the height dimension of this size
    pub fn height(self) -> f32 {
        self.height
    }
}

/// A rectangle described by its four edges.
///
/// [`Bounds::EMPTY`] is the identity element of [`Bounds::merge`]: its edges
/// are infinite sentinels (`left`/`top` at `+∞`, `right`/`bottom` at `-∞`),
/// so merging any real rectangle into it yields that rectangle. Accumulators
/// start from `EMPTY` and only ever grow.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    left: f32,
    right: f32,
    top: f32,
    bottom: f32,
}

impl Bounds {
    /// The identity element for [`Bounds::merge`].
    pub const EMPTY: Self = Self {
        left: f32::INFINITY,
        right: f32::NEG_INFINITY,
        top: f32::INFINITY,
        bottom: f32::NEG_INFINITY,
    };

    /// Creates bounds from explicit edges.
    pub fn new(left: f32, right: f32, top: f32, bottom: f32) -> Self {
        Self {
            left,
            right,
            top,
            bottom,
        }
    }

    /// Creates a new bounds from a top-left point and a size
    pub fn new_from_top_left(top_left: Point, size: Size) -> Self {
        Self {
            left: top_left.x,
            right: top_left.x + size.width,
            top: top_left.y,
            bottom: top_left.y + size.height,
        }
    }

    /// Creates bounds horizontally centered on `center_x`, starting at `top`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use pollflow_core::geometry::{Bounds, Size};
    /// let bounds = Bounds::new_from_center_x(600.0, 50.0, Size::new(160.0, 60.0));
    /// assert_eq!(bounds.left(), 520.0);
    /// assert_eq!(bounds.right(), 680.0);
    /// assert_eq!(bounds.bottom(), 110.0);
    /// ```
    pub fn new_from_center_x(center_x: f32, top: f32, size: Size) -> Self {
        let half_width = size.width / 2.0;
        Self {
            left: center_x - half_width,
            right: center_x + half_width,
            top,
            bottom: top + size.height,
        }
    }

    /// Returns the left edge
    pub fn left(self) -> f32 {
        self.left
    }

    /// Returns the right edge
    pub fn right(self) -> f32 {
        self.right
    }

    /// Returns the top edge
    pub fn top(self) -> f32 {
        self.top
    }

    /// Returns the bottom edge
    pub fn bottom(self) -> f32 {
        self.bottom
    }

    /// Returns the width of the bounds
    pub fn width(self) -> f32 {
        self.right - self.left
    }

    /// Returns the height of the bounds
    pub fn height(self) -> f32 {
        self.bottom - self.top
    }

    /// Returns `true` when every edge holds a finite value.
    ///
    /// [`Bounds::EMPTY`] is not finite; any bounds that had a real rectangle
    /// merged into it is.
    pub fn is_finite(self) -> bool {
        self.left.is_finite()
            && self.right.is_finite()
            && self.top.is_finite()
            && self.bottom.is_finite()
    }

    /// Merges two bounds to create a larger bounds that contains both.
    ///
    /// # Examples
    ///
    /// ```
    /// # use pollflow_core::geometry::{Bounds, Point, Size};
    /// let process = Bounds::new_from_top_left(Point::new(0.0, 0.0), Size::new(100.0, 30.0));
    /// let pollutant = Bounds::new_from_top_left(Point::new(10.0, 40.0), Size::new(120.0, 80.0));
    ///
    /// let combined = process.merge(&pollutant);
    /// assert_eq!(combined.left(), 0.0);
    /// assert_eq!(combined.width(), 130.0);
    /// assert_eq!(combined.height(), 120.0);
    ///
    /// assert_eq!(Bounds::EMPTY.merge(&process), process);
    /// ```
    pub fn merge(&self, other: &Self) -> Self {
        Self {
            left: self.left.min(other.left),
            right: self.right.max(other.right),
            top: self.top.min(other.top),
            bottom: self.bottom.max(other.bottom),
        }
    }

    /// Expands the bounds by adding insets.
    pub fn add_padding(&self, insets: Insets) -> Self {
        Self {
            left: self.left - insets.left(),
            right: self.right + insets.right(),
            top: self.top - insets.top(),
            bottom: self.bottom + insets.bottom(),
        }
    }
}

impl Default for Bounds {
    fn default() -> Self {
        Self::EMPTY
    }
}

/// Represents spacing around an element with potentially different values
/// for each side
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Insets {
    top: f32,
    right: f32,
    bottom: f32,
    left: f32,
}

impl Insets {
    /// Creates uniform insets with the same value for all sides
    pub fn uniform(value: f32) -> Self {
        Self {
            top: value,
            right: value,
            bottom: value,
            left: value,
        }
    }

    /// Returns the top inset value
    pub fn top(self) -> f32 {
        self.top
    }

    /// Returns the right inset value
    pub fn right(self) -> f32 {
        self.right
    }

    /// Returns the bottom inset value
    pub fn bottom(self) -> f32 {
        self.bottom
    }

    /// Returns the left inset value
    pub fn left(self) -> f32 {
        self.left
    }
}
