//! Viewport-space geometry
//!
//! All values are CSS pixels relative to the viewport's top-left corner,
//! the same space `getBoundingClientRect` and `clientX/clientY` report in.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Current window inner size
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

/// Size of an element's border box
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

impl Size {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

/// Axis-aligned bounding rectangle
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub left: f32,
    pub top: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub fn new(left: f32, top: f32, width: f32, height: f32) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    /// Build from edges rather than origin + size
    pub fn from_edges(left: f32, top: f32, right: f32, bottom: f32) -> Self {
        Self::new(left, top, right - left, bottom - top)
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.left + self.width
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.top + self.height
    }

    #[inline]
    pub fn center(&self) -> Vec2 {
        Vec2::new(self.left + self.width / 2.0, self.top + self.height / 2.0)
    }

    pub fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    /// True if the two rectangles share any interior area
    pub fn overlaps(&self, other: &Rect) -> bool {
        self.left < other.right()
            && other.left < self.right()
            && self.top < other.bottom()
            && other.top < self.bottom()
    }
}

#[cfg(target_arch = "wasm32")]
impl From<&web_sys::DomRect> for Rect {
    fn from(r: &web_sys::DomRect) -> Self {
        Self::new(r.left() as f32, r.top() as f32, r.width() as f32, r.height() as f32)
    }
}

/// Top-left corner of the No button (fixed positioning, px)
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ControlPosition {
    pub left: f32,
    pub top: f32,
}

impl ControlPosition {
    pub fn new(left: f32, top: f32) -> Self {
        Self { left, top }
    }

    pub fn css_left(&self) -> String {
        format!("{}px", self.left)
    }

    pub fn css_top(&self) -> String {
        format!("{}px", self.top)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rect_edges_and_center() {
        let r = Rect::new(500.0, 300.0, 100.0, 40.0);
        assert_eq!(r.right(), 600.0);
        assert_eq!(r.bottom(), 340.0);
        assert_eq!(r.center(), Vec2::new(550.0, 320.0));
        assert_eq!(Rect::from_edges(500.0, 300.0, 600.0, 340.0), r);
    }

    #[test]
    fn test_rect_overlap() {
        let a = Rect::new(0.0, 0.0, 100.0, 50.0);
        assert!(a.overlaps(&Rect::new(50.0, 25.0, 100.0, 50.0)));
        // Touching edges is not overlap
        assert!(!a.overlaps(&Rect::new(100.0, 0.0, 100.0, 50.0)));
        assert!(!a.overlaps(&Rect::new(0.0, 60.0, 100.0, 50.0)));
    }

    #[test]
    fn test_css_strings() {
        let pos = ControlPosition::new(850.0, 312.5);
        assert_eq!(pos.css_left(), "850px");
        assert_eq!(pos.css_top(), "312.5px");
    }
}
