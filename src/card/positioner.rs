//! Evasive "No" button positioning
//!
//! The No button starts beside the Yes button, jumps to a random spot whenever
//! the pointer reaches it, and reports when the pointer is close enough to
//! swap the card image for the sad one.

use glam::Vec2;
use rand::Rng;

use crate::consts::*;
use crate::geometry::{ControlPosition, Rect, Size, Viewport};

/// Horizontal gap between the Yes button and the No button for a viewport width
pub fn gap_for_width(viewport_width: f32) -> f32 {
    if viewport_width < BREAKPOINT_SM {
        GAP_XS
    } else if viewport_width < BREAKPOINT_MD {
        GAP_SM
    } else if viewport_width < BREAKPOINT_LG {
        GAP_MD
    } else {
        GAP_LG
    }
}

/// Initial placement of the No button relative to the Yes button.
///
/// Places it `gap_for_width` to the right of the Yes button, pulled back so it
/// never crosses the right edge (minus [`OVERFLOW_MARGIN`]) and never sits
/// closer than [`MIN_LEFT`] to the left edge. On phone-width viewports where
/// the right-hand slot does not fit, it drops below the Yes button instead.
pub fn initialize_layout(accept: &Rect, viewport: Viewport, decline: Size) -> ControlPosition {
    // Unrendered buttons report zero width
    let decline_width = if decline.width > 0.0 {
        decline.width
    } else {
        DEFAULT_DECLINE_WIDTH
    };

    let candidate = accept.right() + gap_for_width(viewport.width);
    let max_left = viewport.width - decline_width - OVERFLOW_MARGIN;
    let left = candidate.min(max_left);

    let top = if left >= max_left && viewport.width < BREAKPOINT_SM {
        accept.bottom() + BELOW_OFFSET
    } else {
        accept.top
    };

    ControlPosition::new(left.max(MIN_LEFT), top)
}

/// Uniform draw in `[min, max]`, or `min` when the range is empty
fn draw<R: Rng>(rng: &mut R, min: f32, max: f32) -> f32 {
    if max > min {
        rng.random_range(min..=max)
    } else {
        min
    }
}

/// Random position keeping the whole button inside the viewport minus
/// [`RELOCATE_MARGIN`] on every side.
pub fn relocate_randomly<R: Rng>(
    viewport: Viewport,
    decline: Size,
    rng: &mut R,
) -> ControlPosition {
    let max_x = viewport.width - decline.width - RELOCATE_MARGIN;
    let max_y = viewport.height - decline.height - RELOCATE_MARGIN;
    ControlPosition::new(
        draw(rng, RELOCATE_MARGIN, max_x),
        draw(rng, RELOCATE_MARGIN, max_y),
    )
}

/// True if the pointer is strictly within [`PROXIMITY_THRESHOLD`] of the
/// button's center
#[inline]
pub fn is_near(pointer: Vec2, decline: &Rect) -> bool {
    pointer.distance(decline.center()) < PROXIMITY_THRESHOLD
}

/// Owns the No button's position and the pointer-proximity flag
#[derive(Debug, Clone, Default)]
pub struct EvasivePositioner {
    position: ControlPosition,
    near: bool,
}

impl EvasivePositioner {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn position(&self) -> ControlPosition {
        self.position
    }

    pub fn is_near(&self) -> bool {
        self.near
    }

    /// Recompute the beside/below placement (mount and every resize)
    pub fn layout(&mut self, accept: &Rect, viewport: Viewport, decline: Size) -> ControlPosition {
        self.position = initialize_layout(accept, viewport, decline);
        self.position
    }

    /// Jump somewhere random. No memory of earlier spots.
    pub fn relocate<R: Rng>(
        &mut self,
        viewport: Viewport,
        decline: Size,
        rng: &mut R,
    ) -> ControlPosition {
        self.position = relocate_randomly(viewport, decline, rng);
        self.position
    }

    /// Recompute the proximity flag. Returns true if it changed.
    pub fn update_proximity(&mut self, pointer: Vec2, decline: &Rect) -> bool {
        self.set_near(is_near(pointer, decline))
    }

    /// Pointer left the interactive area. Returns true if the flag changed.
    pub fn pointer_left(&mut self) -> bool {
        self.set_near(false)
    }

    fn set_near(&mut self, near: bool) -> bool {
        let changed = self.near != near;
        self.near = near;
        changed
    }
}
