use serde::{Deserialize, Serialize};

use crate::core::Viewport;
use crate::error::{ChartError, ChartResult};
use crate::render::{FillPrimitive, IndicatorPrimitive, StrokePrimitive, TooltipPrimitive};

/// Backend-agnostic scene for one chart draw pass.
///
/// Draw order is fill, stroke, indicator, tooltip.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderFrame {
    pub viewport: Viewport,
    pub fill: Option<FillPrimitive>,
    pub stroke: Option<StrokePrimitive>,
    pub indicator: Option<IndicatorPrimitive>,
    pub tooltip: Option<TooltipPrimitive>,
}

impl RenderFrame {
    #[must_use]
    pub fn new(viewport: Viewport) -> Self {
        Self {
            viewport,
            fill: None,
            stroke: None,
            indicator: None,
            tooltip: None,
        }
    }

    pub fn validate(&self) -> ChartResult<()> {
        if !self.viewport.is_valid() {
            return Err(ChartError::InvalidViewport {
                width: self.viewport.width,
                height: self.viewport.height,
            });
        }
        if let Some(fill) = &self.fill {
            fill.validate()?;
        }
        if let Some(stroke) = &self.stroke {
            stroke.validate()?;
        }
        if let Some(indicator) = self.indicator {
            indicator.validate()?;
        }
        if let Some(tooltip) = &self.tooltip {
            tooltip.validate()?;
        }
        Ok(())
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fill.is_none()
            && self.stroke.is_none()
            && self.indicator.is_none()
            && self.tooltip.is_none()
    }
}
