use cairo::{Context, Format, ImageSurface, LineCap, LineJoin, LinearGradient};
use pango::FontDescription;
use std::f64::consts::{FRAC_PI_2, PI, TAU};

use crate::core::{ChartPath, PathCommand, TooltipRect};
use crate::error::{ChartError, ChartResult};
use crate::render::{
    Color, FillPrimitive, IndicatorPrimitive, RenderFrame, Renderer, StrokePrimitive,
    TooltipPrimitive,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CairoRenderStats {
    pub fills_drawn: usize,
    pub strokes_drawn: usize,
    pub path_commands: usize,
    pub indicators_drawn: usize,
    pub tooltips_drawn: usize,
}

/// Optional extension trait for renderers that can draw into an external Cairo
/// context (for example a GTK `DrawingArea` callback).
pub trait CairoContextRenderer {
    fn render_on_cairo_context(
        &mut self,
        context: &Context,
        frame: &RenderFrame,
    ) -> ChartResult<()>;
}

/// Cairo + Pango + PangoCairo renderer backend.
///
/// Renders offscreen into an image surface through `Renderer::render`, or in
/// place on an external context through `CairoContextRenderer`. Condition
/// icons are host resources and are not drawn here; the tooltip shows the time
/// and temperature lines only.
#[derive(Debug)]
pub struct CairoRenderer {
    surface: ImageSurface,
    clear_color: Option<Color>,
    last_stats: CairoRenderStats,
}

impl CairoRenderer {
    pub fn new(width: i32, height: i32) -> ChartResult<Self> {
        if width <= 0 || height <= 0 {
            return Err(ChartError::Render(
                "cairo surface size must be > 0".to_owned(),
            ));
        }

        let surface = ImageSurface::create(Format::ARgb32, width, height)
            .map_err(|err| map_backend_error("failed to create cairo surface", err))?;
        Ok(Self {
            surface,
            clear_color: Some(Color::rgb(1.0, 1.0, 1.0)),
            last_stats: CairoRenderStats::default(),
        })
    }

    #[must_use]
    pub fn surface(&self) -> &ImageSurface {
        &self.surface
    }

    /// Background painted before each frame; `None` keeps whatever the
    /// target already contains.
    pub fn set_clear_color(&mut self, color: Option<Color>) -> ChartResult<()> {
        if let Some(color) = color {
            color.validate()?;
        }
        self.clear_color = color;
        Ok(())
    }

    #[must_use]
    pub fn last_stats(&self) -> CairoRenderStats {
        self.last_stats
    }

    fn render_with_context(&mut self, context: &Context, frame: &RenderFrame) -> ChartResult<()> {
        frame.validate()?;

        if let Some(color) = self.clear_color {
            apply_color(context, color);
            context
                .paint()
                .map_err(|err| map_backend_error("failed to clear surface", err))?;
        }

        let mut stats = CairoRenderStats::default();

        if let Some(fill) = &frame.fill {
            draw_fill(context, fill)?;
            stats.fills_drawn += 1;
            stats.path_commands += fill.path.len();
        }
        if let Some(stroke) = &frame.stroke {
            draw_stroke(context, stroke)?;
            stats.strokes_drawn += 1;
            stats.path_commands += stroke.path.len();
        }
        if let Some(indicator) = frame.indicator {
            draw_indicator(context, indicator)?;
            stats.indicators_drawn += 1;
        }
        if let Some(tooltip) = &frame.tooltip {
            draw_tooltip(context, tooltip)?;
            stats.tooltips_drawn += 1;
        }

        self.last_stats = stats;
        Ok(())
    }
}

impl Renderer for CairoRenderer {
    fn render(&mut self, frame: &RenderFrame) -> ChartResult<()> {
        let context = Context::new(&self.surface)
            .map_err(|err| map_backend_error("failed to create cairo context", err))?;
        self.render_with_context(&context, frame)
    }
}

impl CairoContextRenderer for CairoRenderer {
    fn render_on_cairo_context(
        &mut self,
        context: &Context,
        frame: &RenderFrame,
    ) -> ChartResult<()> {
        self.render_with_context(context, frame)
    }
}

fn draw_fill(context: &Context, fill: &FillPrimitive) -> ChartResult<()> {
    let gradient = LinearGradient::new(0.0, fill.gradient.start_y, 0.0, fill.gradient.end_y);
    add_color_stop(&gradient, 0.0, fill.gradient.start_color);
    add_color_stop(&gradient, 1.0, fill.gradient.end_color);

    append_path(context, &fill.path);
    context
        .set_source(&gradient)
        .map_err(|err| map_backend_error("failed to set area gradient", err))?;
    context
        .fill()
        .map_err(|err| map_backend_error("failed to fill area", err))
}

fn draw_stroke(context: &Context, stroke: &StrokePrimitive) -> ChartResult<()> {
    append_path(context, &stroke.path);
    apply_color(context, stroke.color);
    context.set_line_width(stroke.stroke_width);
    context.set_line_cap(LineCap::Round);
    context.set_line_join(LineJoin::Round);
    context
        .stroke()
        .map_err(|err| map_backend_error("failed to stroke curve", err))
}

fn draw_indicator(context: &Context, indicator: IndicatorPrimitive) -> ChartResult<()> {
    let center = indicator.center;

    context.new_path();
    context.arc(center.x, center.y, indicator.radius, 0.0, TAU);
    apply_color(context, indicator.stroke_color);
    context.set_line_width(indicator.stroke_width);
    context
        .stroke()
        .map_err(|err| map_backend_error("failed to stroke indicator", err))?;

    context.new_path();
    context.arc(center.x, center.y, indicator.inner_radius(), 0.0, TAU);
    apply_color(context, indicator.fill_color);
    context
        .fill()
        .map_err(|err| map_backend_error("failed to fill indicator", err))
}

fn draw_tooltip(context: &Context, tooltip: &TooltipPrimitive) -> ChartResult<()> {
    append_rounded_rect(context, tooltip.rect, tooltip.corner_radius);
    apply_color(context, tooltip.background_color);
    context
        .fill()
        .map_err(|err| map_backend_error("failed to fill tooltip", err))?;

    let center_x = tooltip.rect.x + tooltip.rect.width / 2.0;
    let line_height = tooltip.rect.height / 2.0;
    for (line, text) in [&tooltip.time_text, &tooltip.temperature_text]
        .into_iter()
        .enumerate()
    {
        let layout = pangocairo::functions::create_layout(context);
        let font_description = FontDescription::from_string(&format!("Sans {}", tooltip.font_size_px));
        layout.set_font_description(Some(&font_description));
        layout.set_text(text);

        let (text_width, text_height) = layout.pixel_size();
        let x = center_x - f64::from(text_width) / 2.0;
        let y = tooltip.rect.y
            + line_height * line as f64
            + (line_height - f64::from(text_height)) / 2.0;

        apply_color(context, tooltip.text_color);
        context.move_to(x, y);
        pangocairo::functions::show_layout(context, &layout);
    }
    Ok(())
}

fn append_path(context: &Context, path: &ChartPath) {
    context.new_path();
    for command in &path.commands {
        match *command {
            PathCommand::MoveTo(p) => context.move_to(p.x, p.y),
            PathCommand::LineTo(p) => context.line_to(p.x, p.y),
            PathCommand::CubicTo {
                control1,
                control2,
                to,
            } => context.curve_to(control1.x, control1.y, control2.x, control2.y, to.x, to.y),
            PathCommand::Close => context.close_path(),
        }
    }
}

fn append_rounded_rect(context: &Context, rect: TooltipRect, corner_radius: f64) {
    context.new_path();
    if corner_radius <= 0.0 {
        context.rectangle(rect.x, rect.y, rect.width, rect.height);
        return;
    }

    let radius = corner_radius.min(rect.width * 0.5).min(rect.height * 0.5);
    let left = rect.x;
    let top = rect.y;
    let right = rect.right();
    let bottom = rect.bottom();

    context.new_sub_path();
    context.arc(right - radius, top + radius, radius, -FRAC_PI_2, 0.0);
    context.arc(right - radius, bottom - radius, radius, 0.0, FRAC_PI_2);
    context.arc(left + radius, bottom - radius, radius, FRAC_PI_2, PI);
    context.arc(left + radius, top + radius, radius, PI, PI + FRAC_PI_2);
    context.close_path();
}

fn apply_color(context: &Context, color: Color) {
    context.set_source_rgba(color.red, color.green, color.blue, color.alpha);
}

fn add_color_stop(gradient: &LinearGradient, offset: f64, color: Color) {
    gradient.add_color_stop_rgba(offset, color.red, color.green, color.blue, color.alpha);
}

fn map_backend_error(prefix: &str, err: cairo::Error) -> ChartError {
    ChartError::Render(format!("{prefix}: {err}"))
}
