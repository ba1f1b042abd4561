use serde::{Deserialize, Serialize};

use crate::core::{ChartPath, ScreenPoint, TooltipRect};
use crate::error::{ChartError, ChartResult};

/// RGBA color in normalized 0..=1 channel values.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Color {
    pub red: f64,
    pub green: f64,
    pub blue: f64,
    pub alpha: f64,
}

impl Color {
    #[must_use]
    pub const fn rgba(red: f64, green: f64, blue: f64, alpha: f64) -> Self {
        Self {
            red,
            green,
            blue,
            alpha,
        }
    }

    #[must_use]
    pub const fn rgb(red: f64, green: f64, blue: f64) -> Self {
        Self::rgba(red, green, blue, 1.0)
    }

    #[must_use]
    pub const fn with_alpha(self, alpha: f64) -> Self {
        Self::rgba(self.red, self.green, self.blue, alpha)
    }

    pub fn validate(self) -> ChartResult<()> {
        for (channel, value) in [
            ("red", self.red),
            ("green", self.green),
            ("blue", self.blue),
            ("alpha", self.alpha),
        ] {
            if !value.is_finite() || !(0.0..=1.0).contains(&value) {
                return Err(ChartError::InvalidData(format!(
                    "color channel `{channel}` must be finite and in [0, 1]"
                )));
            }
        }
        Ok(())
    }
}

/// Vertical two-stop gradient, `start_y` to `end_y` in pixel space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct VerticalGradient {
    pub start_y: f64,
    pub end_y: f64,
    pub start_color: Color,
    pub end_color: Color,
}

impl VerticalGradient {
    pub fn validate(self) -> ChartResult<()> {
        if !self.start_y.is_finite() || !self.end_y.is_finite() {
            return Err(ChartError::InvalidData(
                "gradient bounds must be finite".to_owned(),
            ));
        }
        self.start_color.validate()?;
        self.end_color.validate()
    }
}

/// Smooth temperature curve stroke.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StrokePrimitive {
    pub path: ChartPath,
    pub stroke_width: f64,
    pub color: Color,
}

impl StrokePrimitive {
    pub fn validate(&self) -> ChartResult<()> {
        if !self.path.is_finite() {
            return Err(ChartError::InvalidData(
                "stroke path coordinates must be finite".to_owned(),
            ));
        }
        if !self.stroke_width.is_finite() || self.stroke_width <= 0.0 {
            return Err(ChartError::InvalidData(
                "stroke width must be finite and > 0".to_owned(),
            ));
        }
        self.color.validate()
    }
}

/// Area under the curve, shaded with a vertical gradient.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FillPrimitive {
    pub path: ChartPath,
    pub gradient: VerticalGradient,
}

impl FillPrimitive {
    pub fn validate(&self) -> ChartResult<()> {
        if !self.path.is_finite() {
            return Err(ChartError::InvalidData(
                "fill path coordinates must be finite".to_owned(),
            ));
        }
        self.gradient.validate()
    }
}

/// Ring marking the selected point.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct IndicatorPrimitive {
    pub center: ScreenPoint,
    pub radius: f64,
    pub stroke_width: f64,
    pub stroke_color: Color,
    pub fill_color: Color,
}

impl IndicatorPrimitive {
    pub fn validate(self) -> ChartResult<()> {
        if !self.center.x.is_finite() || !self.center.y.is_finite() {
            return Err(ChartError::InvalidData(
                "indicator center must be finite".to_owned(),
            ));
        }
        if !self.radius.is_finite() || self.radius <= 0.0 {
            return Err(ChartError::InvalidData(
                "indicator radius must be finite and > 0".to_owned(),
            ));
        }
        if !self.stroke_width.is_finite() || self.stroke_width < 0.0 {
            return Err(ChartError::InvalidData(
                "indicator stroke width must be finite and >= 0".to_owned(),
            ));
        }
        self.stroke_color.validate()?;
        self.fill_color.validate()
    }

    /// Radius of the inner disc so it meets the centre of the ring stroke.
    #[must_use]
    pub fn inner_radius(self) -> f64 {
        (self.radius - self.stroke_width / 2.0).max(0.0)
    }
}

/// Floating value readout.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TooltipPrimitive {
    pub rect: TooltipRect,
    pub time_text: String,
    pub temperature_text: String,
    pub icon_id: String,
    pub font_size_px: f64,
    pub text_color: Color,
    pub background_color: Color,
    pub corner_radius: f64,
}

impl TooltipPrimitive {
    pub fn validate(&self) -> ChartResult<()> {
        let rect = self.rect;
        if ![rect.x, rect.y, rect.width, rect.height]
            .iter()
            .all(|v| v.is_finite())
        {
            return Err(ChartError::InvalidData(
                "tooltip rect must be finite".to_owned(),
            ));
        }
        if rect.width < 0.0 || rect.height < 0.0 {
            return Err(ChartError::InvalidData(
                "tooltip rect size must be >= 0".to_owned(),
            ));
        }
        if self.time_text.is_empty() || self.temperature_text.is_empty() {
            return Err(ChartError::InvalidData(
                "tooltip texts must not be empty".to_owned(),
            ));
        }
        if !self.font_size_px.is_finite() || self.font_size_px <= 0.0 {
            return Err(ChartError::InvalidData(
                "font size must be finite and > 0".to_owned(),
            ));
        }
        self.text_color.validate()?;
        self.background_color.validate()
    }
}
