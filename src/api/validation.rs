use crate::core::MAX_RESOLUTION;
use crate::error::{ChartError, ChartResult};
use crate::render::Color;

use super::ChartEngineConfig;

pub(super) fn validate_config(config: &ChartEngineConfig) -> ChartResult<()> {
    let viewport = config.viewport;
    if !viewport.width.is_finite()
        || !viewport.height.is_finite()
        || viewport.width < 0.0
        || viewport.height < 0.0
    {
        return Err(ChartError::InvalidViewport {
            width: viewport.width,
            height: viewport.height,
        });
    }
    if config.resolution == 0 || config.resolution > MAX_RESOLUTION {
        return Err(ChartError::InvalidConfig(format!(
            "resolution must be in 1..={MAX_RESOLUTION}"
        )));
    }
    if !config.curve.tension.is_finite() || config.curve.tension < 0.0 {
        return Err(ChartError::InvalidConfig(
            "curve tension must be finite and >= 0".to_owned(),
        ));
    }

    let scale = config.scale;
    for (name, value) in [
        ("min_value_buffer", scale.min_value_buffer),
        ("max_value_buffer", scale.max_value_buffer),
    ] {
        if !value.is_finite() || !(0.0..1.0).contains(&value) {
            return Err(ChartError::InvalidConfig(format!(
                "{name} must be finite and in [0, 1)"
            )));
        }
    }
    if scale.min_value_buffer + scale.max_value_buffer > 1.0 {
        return Err(ChartError::InvalidConfig(
            "value buffers must not exceed 1 combined".to_owned(),
        ));
    }

    for (name, value) in [
        ("padding.top", config.padding.top),
        ("padding.bottom", config.padding.bottom),
        ("padding.horizontal", config.padding.horizontal),
        ("indicator.stroke_width", config.indicator.stroke_width),
        ("tooltip.size.width", config.tooltip.size.width),
        ("tooltip.size.height", config.tooltip.size.height),
        ("tooltip.margin", config.tooltip.margin),
        ("tooltip.corner_radius", config.tooltip.corner_radius),
    ] {
        validate_non_negative(name, value)?;
    }
    for (name, value) in [
        ("indicator.radius", config.indicator.radius),
        ("tooltip.font_size_px", config.tooltip.font_size_px),
        ("style.line_stroke_width", config.style.line_stroke_width),
    ] {
        validate_positive(name, value)?;
    }

    let style = config.style;
    validate_alpha("style.area_top_alpha", style.area_top_alpha)?;
    validate_color(style.line_color)?;
    validate_color(style.surface_color)?;
    validate_color(style.tooltip_text_color)?;
    validate_color(style.tooltip_background_color)?;
    Ok(())
}

fn validate_non_negative(name: &str, value: f64) -> ChartResult<()> {
    if !value.is_finite() || value < 0.0 {
        return Err(ChartError::InvalidConfig(format!(
            "{name} must be finite and >= 0"
        )));
    }
    Ok(())
}

fn validate_positive(name: &str, value: f64) -> ChartResult<()> {
    if !value.is_finite() || value <= 0.0 {
        return Err(ChartError::InvalidConfig(format!(
            "{name} must be finite and > 0"
        )));
    }
    Ok(())
}

fn validate_alpha(name: &str, value: f64) -> ChartResult<()> {
    if !value.is_finite() || !(0.0..=1.0).contains(&value) {
        return Err(ChartError::InvalidConfig(format!(
            "{name} must be finite and in [0, 1]"
        )));
    }
    Ok(())
}

fn validate_color(color: Color) -> ChartResult<()> {
    color
        .validate()
        .map_err(|err| ChartError::InvalidConfig(err.to_string()))
}
