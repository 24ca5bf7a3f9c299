//! Viewport dimension contracts.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
/// Current host viewport dimensions in CSS pixels.
pub struct ViewportSize {
    /// Viewport width.
    pub width: i32,
    /// Viewport height.
    pub height: i32,
}

impl Default for ViewportSize {
    fn default() -> Self {
        Self {
            width: 1280,
            height: 800,
        }
    }
}

/// Host service reporting the current viewport dimensions.
///
/// Window presenters query this once at mount time to derive their geometry
/// presets; the probe is intentionally synchronous and cheap.
pub trait ViewportProbe {
    /// Returns the current viewport dimensions.
    fn viewport_size(&self) -> ViewportSize;
}

#[derive(Debug, Clone, Copy, Default)]
/// Fixed-size viewport probe for tests and headless targets.
pub struct FixedViewport(pub ViewportSize);

impl FixedViewport {
    /// Creates a probe reporting the given dimensions.
    pub fn new(width: i32, height: i32) -> Self {
        Self(ViewportSize { width, height })
    }
}

impl ViewportProbe for FixedViewport {
    fn viewport_size(&self) -> ViewportSize {
        self.0
    }
}
