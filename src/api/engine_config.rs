use serde::{Deserialize, Serialize};

use crate::core::{
    DEFAULT_HIT_TEST_WINDOW, DEFAULT_RESOLUTION, DEFAULT_TENSION, TooltipSize, Viewport,
};
use crate::render::Color;

/// Smoothing of the rendered curve.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CurveConfig {
    pub tension: f64,
}

impl Default for CurveConfig {
    fn default() -> Self {
        Self {
            tension: DEFAULT_TENSION,
        }
    }
}

/// Vertical compression of the temperature range.
///
/// The coldest reading sits `min_value_buffer` of the plot height above the
/// bottom, the warmest `max_value_buffer` below the top.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScaleConfig {
    pub min_value_buffer: f64,
    pub max_value_buffer: f64,
}

impl Default for ScaleConfig {
    fn default() -> Self {
        Self {
            min_value_buffer: 0.5,
            max_value_buffer: 0.1,
        }
    }
}

/// Insets of the plotted points. Top padding leaves room for the tooltip,
/// horizontal padding keeps the indicator visible at both extremes.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PaddingConfig {
    pub top: f64,
    pub bottom: f64,
    pub horizontal: f64,
}

impl Default for PaddingConfig {
    fn default() -> Self {
        Self {
            top: 60.0,
            bottom: 20.0,
            horizontal: 50.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct IndicatorConfig {
    pub radius: f64,
    pub stroke_width: f64,
}

impl Default for IndicatorConfig {
    fn default() -> Self {
        Self {
            radius: 8.0,
            stroke_width: 3.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TooltipConfig {
    /// Measured tooltip box; hosts with a real text layout should overwrite it.
    pub size: TooltipSize,
    /// Gap between the tooltip and the top of the indicator.
    pub margin: f64,
    pub font_size_px: f64,
    pub corner_radius: f64,
}

impl Default for TooltipConfig {
    fn default() -> Self {
        Self {
            size: TooltipSize::new(64.0, 72.0),
            margin: 12.0,
            font_size_px: 12.0,
            corner_radius: 8.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HitTestConfig {
    /// Indices scanned on either side of the proportional estimate.
    pub window: usize,
}

impl Default for HitTestConfig {
    fn default() -> Self {
        Self {
            window: DEFAULT_HIT_TEST_WINDOW,
        }
    }
}

/// Colors and stroke widths handed to the renderer.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ChartStyle {
    pub line_color: Color,
    pub line_stroke_width: f64,
    pub surface_color: Color,
    /// Opacity of the area tint at the top of the plot; it fades to 0 at the bottom.
    pub area_top_alpha: f64,
    pub tooltip_text_color: Color,
    pub tooltip_background_color: Color,
}

impl Default for ChartStyle {
    fn default() -> Self {
        let on_surface_variant = Color::rgb(0.286, 0.271, 0.310);
        Self {
            line_color: on_surface_variant,
            line_stroke_width: 2.0,
            surface_color: Color::rgb(1.0, 1.0, 1.0),
            area_top_alpha: 50.0 / 255.0,
            tooltip_text_color: on_surface_variant,
            tooltip_background_color: Color::rgba(1.0, 1.0, 1.0, 0.0),
        }
    }
}

/// Public engine bootstrap configuration.
///
/// Lengths are in host pixels. Defaults are expressed in density-independent
/// units; use `scaled` to convert them for a given screen density.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ChartEngineConfig {
    #[serde(default)]
    pub viewport: Viewport,
    #[serde(default = "default_resolution")]
    pub resolution: u32,
    /// Dense index selected before any input arrives.
    #[serde(default = "default_initial_selected_index")]
    pub initial_selected_index: usize,
    #[serde(default)]
    pub curve: CurveConfig,
    #[serde(default)]
    pub scale: ScaleConfig,
    #[serde(default)]
    pub padding: PaddingConfig,
    #[serde(default)]
    pub indicator: IndicatorConfig,
    #[serde(default)]
    pub tooltip: TooltipConfig,
    #[serde(default)]
    pub hit_test: HitTestConfig,
    #[serde(default)]
    pub style: ChartStyle,
}

impl Default for ChartEngineConfig {
    fn default() -> Self {
        Self::new(Viewport::default())
    }
}

impl ChartEngineConfig {
    #[must_use]
    pub fn new(viewport: Viewport) -> Self {
        Self {
            viewport,
            resolution: default_resolution(),
            initial_selected_index: default_initial_selected_index(),
            curve: CurveConfig::default(),
            scale: ScaleConfig::default(),
            padding: PaddingConfig::default(),
            indicator: IndicatorConfig::default(),
            tooltip: TooltipConfig::default(),
            hit_test: HitTestConfig::default(),
            style: ChartStyle::default(),
        }
    }

    /// Sets dense samples per hour; the initial selection keeps pointing at 11:00.
    #[must_use]
    pub fn with_resolution(mut self, resolution: u32) -> Self {
        self.resolution = resolution;
        self.initial_selected_index = (resolution as usize).saturating_mul(11);
        self
    }

    #[must_use]
    pub fn with_tension(mut self, tension: f64) -> Self {
        self.curve.tension = tension;
        self
    }

    #[must_use]
    pub fn with_value_buffers(mut self, min_value_buffer: f64, max_value_buffer: f64) -> Self {
        self.scale = ScaleConfig {
            min_value_buffer,
            max_value_buffer,
        };
        self
    }

    #[must_use]
    pub fn with_padding(mut self, top: f64, bottom: f64, horizontal: f64) -> Self {
        self.padding = PaddingConfig {
            top,
            bottom,
            horizontal,
        };
        self
    }

    #[must_use]
    pub fn with_tooltip_size(mut self, width: f64, height: f64) -> Self {
        self.tooltip.size = TooltipSize::new(width, height);
        self
    }

    #[must_use]
    pub fn with_hit_test_window(mut self, window: usize) -> Self {
        self.hit_test.window = window;
        self
    }

    #[must_use]
    pub fn with_style(mut self, style: ChartStyle) -> Self {
        self.style = style;
        self
    }

    /// Converts every length from density-independent units into pixels.
    #[must_use]
    pub fn scaled(mut self, density: f64) -> Self {
        self.padding.top *= density;
        self.padding.bottom *= density;
        self.padding.horizontal *= density;
        self.indicator.radius *= density;
        self.indicator.stroke_width *= density;
        self.tooltip.size.width *= density;
        self.tooltip.size.height *= density;
        self.tooltip.margin *= density;
        self.tooltip.font_size_px *= density;
        self.tooltip.corner_radius *= density;
        self.style.line_stroke_width *= density;
        self
    }
}

fn default_resolution() -> u32 {
    DEFAULT_RESOLUTION
}

fn default_initial_selected_index() -> usize {
    11 * DEFAULT_RESOLUTION as usize
}
