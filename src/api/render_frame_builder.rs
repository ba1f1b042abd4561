use crate::render::{
    FillPrimitive, IndicatorPrimitive, RenderFrame, StrokePrimitive, TooltipPrimitive,
    VerticalGradient,
};

use super::ChartEngineConfig;
use super::chart_state::ChartState;

/// Materializes the drawable scene for one snapshot.
///
/// Returns an empty frame when there is nothing to draw so backends still
/// clear their target.
#[must_use]
pub fn build_render_frame(state: &ChartState, config: &ChartEngineConfig) -> RenderFrame {
    let mut frame = RenderFrame::new(state.viewport);
    if !state.is_drawable() || state.curve.is_empty() {
        return frame;
    }

    let style = config.style;
    frame.fill = Some(FillPrimitive {
        path: state.curve.fill.clone(),
        gradient: VerticalGradient {
            start_y: config.padding.top,
            end_y: state.viewport.height,
            start_color: style.line_color.with_alpha(style.area_top_alpha),
            end_color: style.line_color.with_alpha(0.0),
        },
    });
    frame.stroke = Some(StrokePrimitive {
        path: state.curve.stroke.clone(),
        stroke_width: style.line_stroke_width,
        color: style.line_color,
    });
    frame.indicator = state.indicator.map(|center| IndicatorPrimitive {
        center,
        radius: config.indicator.radius,
        stroke_width: config.indicator.stroke_width,
        stroke_color: style.line_color,
        fill_color: style.surface_color,
    });
    frame.tooltip = state.tooltip.as_ref().map(|tooltip| TooltipPrimitive {
        rect: tooltip.rect,
        time_text: tooltip.formatted_time.clone(),
        temperature_text: tooltip.formatted_temperature.clone(),
        icon_id: tooltip.condition_icon_id.clone(),
        font_size_px: config.tooltip.font_size_px,
        text_color: style.tooltip_text_color,
        background_color: style.tooltip_background_color,
        corner_radius: config.tooltip.corner_radius,
    });
    frame
}
