use serde::{Deserialize, Serialize};

use crate::core::types::ScreenPoint;

/// Measured size of the floating readout, supplied by the host.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TooltipSize {
    pub width: f64,
    pub height: f64,
}

impl TooltipSize {
    #[must_use]
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TooltipRect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl TooltipRect {
    #[must_use]
    pub fn right(self) -> f64 {
        self.x + self.width
    }

    #[must_use]
    pub fn bottom(self) -> f64 {
        self.y + self.height
    }
}

/// Places the tooltip above the indicator, centred on the selected point.
///
/// The box is shifted, not re-centred, to stay inside
/// `[0, viewport_width - size.width]`. A box wider than the viewport sticks to
/// the left edge. `y` is not clamped and may be negative when the point sits
/// close to the top.
#[must_use]
pub fn position_tooltip(
    point: ScreenPoint,
    size: TooltipSize,
    indicator_radius: f64,
    margin: f64,
    viewport_width: f64,
) -> TooltipRect {
    let y = point.y - margin - size.height - indicator_radius;
    let max_x = (viewport_width - size.width).max(0.0);
    let x = (point.x - size.width / 2.0).clamp(0.0, max_x);
    TooltipRect {
        x,
        y,
        width: size.width,
        height: size.height,
    }
}
