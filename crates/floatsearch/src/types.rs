//! Geometry, color and font metric types shared by the widgets.
//!
//! Coordinates are in points with the origin at the top-left and y growing
//! downwards. Every widget reports frames in its parent's coordinate space.

use unicode_segmentation::UnicodeSegmentation;

/// A point in 2D space.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    /// Create a new point.
    #[inline]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// The origin point (0, 0).
    pub const ZERO: Self = Self { x: 0.0, y: 0.0 };
}

/// A size in 2D space (width and height).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

impl Size {
    /// Create a new size.
    #[inline]
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Zero size.
    pub const ZERO: Self = Self {
        width: 0.0,
        height: 0.0,
    };
}

/// A rectangle defined by origin and size.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    pub origin: Point,
    pub size: Size,
}

impl Rect {
    /// Create a new rectangle from origin and size.
    #[inline]
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            origin: Point { x, y },
            size: Size { width, height },
        }
    }

    /// Empty rectangle at origin.
    pub const ZERO: Self = Self {
        origin: Point::ZERO,
        size: Size::ZERO,
    };

    /// Left edge x coordinate.
    #[inline]
    pub fn left(&self) -> f32 {
        self.origin.x
    }

    /// Top edge y coordinate.
    #[inline]
    pub fn top(&self) -> f32 {
        self.origin.y
    }

    /// Right edge x coordinate.
    #[inline]
    pub fn right(&self) -> f32 {
        self.origin.x + self.size.width
    }

    /// Bottom edge y coordinate.
    #[inline]
    pub fn bottom(&self) -> f32 {
        self.origin.y + self.size.height
    }

    /// Width of the rectangle.
    #[inline]
    pub fn width(&self) -> f32 {
        self.size.width
    }

    /// Height of the rectangle.
    #[inline]
    pub fn height(&self) -> f32 {
        self.size.height
    }

    /// Check if a point is inside the rectangle.
    #[inline]
    pub fn contains(&self, point: Point) -> bool {
        point.x >= self.left()
            && point.x < self.right()
            && point.y >= self.top()
            && point.y < self.bottom()
    }

    /// Offset the rectangle by a delta.
    #[inline]
    pub fn offset(&self, dx: f32, dy: f32) -> Rect {
        Rect::new(self.origin.x + dx, self.origin.y + dy, self.size.width, self.size.height)
    }

    /// Shrink the rectangle by per-edge insets. Sizes never go negative.
    pub fn inset(&self, insets: EdgeInsets) -> Rect {
        Rect::new(
            self.origin.x + insets.left,
            self.origin.y + insets.top,
            (self.size.width - insets.left - insets.right).max(0.0),
            (self.size.height - insets.top - insets.bottom).max(0.0),
        )
    }

    /// The smallest rectangle with integral coordinates containing this one.
    ///
    /// The origin is floored and the far edges are ceiled.
    pub fn integral(&self) -> Rect {
        let left = self.left().floor();
        let top = self.top().floor();
        let right = self.right().ceil();
        let bottom = self.bottom().ceil();
        Rect::new(left, top, right - left, bottom - top)
    }
}

/// Per-edge insets used to shrink a [`Rect`].
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct EdgeInsets {
    pub top: f32,
    pub left: f32,
    pub bottom: f32,
    pub right: f32,
}

impl EdgeInsets {
    /// Insets that only move the top edge.
    pub const fn top(top: f32) -> Self {
        Self {
            top,
            left: 0.0,
            bottom: 0.0,
            right: 0.0,
        }
    }
}

/// An RGBA color with straight (non-premultiplied) alpha.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    /// Create a new color from RGBA components (0.0-1.0 range).
    #[inline]
    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Create an opaque color from RGB components.
    #[inline]
    pub const fn from_rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    /// Create a color from 8-bit RGBA components (0-255 range).
    #[inline]
    pub fn from_rgba8(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self::new(
            f32::from(r) / 255.0,
            f32::from(g) / 255.0,
            f32::from(b) / 255.0,
            f32::from(a) / 255.0,
        )
    }

    /// Create an opaque color from 8-bit RGB components.
    #[inline]
    pub fn from_rgb8(r: u8, g: u8, b: u8) -> Self {
        Self::from_rgba8(r, g, b, 255)
    }

    /// Create a color from a hex string (e.g., "#FF0000" or "#FF0000FF").
    pub fn from_hex(hex: &str) -> Option<Self> {
        let hex = hex.trim_start_matches('#');
        let len = hex.len();

        if (len != 6 && len != 8) || !hex.is_ascii() {
            return None;
        }

        let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
        let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
        let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
        let a = if len == 8 {
            u8::from_str_radix(&hex[6..8], 16).ok()?
        } else {
            255
        };

        Some(Self::from_rgba8(r, g, b, a))
    }

    /// Format as `#RRGGBB`, or `#RRGGBBAA` when not fully opaque.
    pub fn to_hex(self) -> String {
        let channel = |v: f32| (v.clamp(0.0, 1.0) * 255.0).round() as u8;
        let (r, g, b, a) = (channel(self.r), channel(self.g), channel(self.b), channel(self.a));
        if a == 255 {
            format!("#{r:02X}{g:02X}{b:02X}")
        } else {
            format!("#{r:02X}{g:02X}{b:02X}{a:02X}")
        }
    }

    pub const BLACK: Self = Self::from_rgb(0.0, 0.0, 0.0);
    pub const WHITE: Self = Self::from_rgb(1.0, 1.0, 1.0);
    pub const GRAY: Self = Self::from_rgb(128.0 / 255.0, 128.0 / 255.0, 128.0 / 255.0);
    pub const LIGHT_GRAY: Self = Self::from_rgb(2.0 / 3.0, 2.0 / 3.0, 2.0 / 3.0);
}

/// Horizontal alignment of text inside an input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TextAlignment {
    #[default]
    Left,
    Center,
    Right,
}

/// Ratio of a font's line height to its point size.
const LINE_HEIGHT_FACTOR: f32 = 1.2;

/// Ratio of a font's average glyph advance to its point size.
const AVERAGE_ADVANCE_FACTOR: f32 = 0.55;

/// Approximate metrics for a single font size.
///
/// There is no text shaping here: widths are estimated from the grapheme
/// count, which is enough to size a one-line caption.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FontMetrics {
    size: f32,
    line_height: f32,
    average_advance: f32,
}

impl FontMetrics {
    /// Metrics for the system font at `size` points.
    pub fn system(size: f32) -> Self {
        Self {
            size,
            line_height: size * LINE_HEIGHT_FACTOR,
            average_advance: size * AVERAGE_ADVANCE_FACTOR,
        }
    }

    /// Metrics with explicit line height and advance.
    pub fn custom(size: f32, line_height: f32, average_advance: f32) -> Self {
        Self {
            size,
            line_height,
            average_advance,
        }
    }

    /// Point size.
    #[inline]
    pub fn size(&self) -> f32 {
        self.size
    }

    /// Height of one line of text.
    #[inline]
    pub fn line_height(&self) -> f32 {
        self.line_height
    }

    /// Estimated width of `text` on a single line.
    pub fn text_width(&self, text: &str) -> f32 {
        text.graphemes(true).count() as f32 * self.average_advance
    }

    /// Size of the smallest box that fits `text` on one line.
    pub fn size_to_fit(&self, text: &str) -> Size {
        if text.is_empty() {
            return Size::ZERO;
        }
        Size::new(self.text_width(text).ceil(), self.line_height.ceil())
    }
}
