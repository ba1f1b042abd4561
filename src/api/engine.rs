use tracing::{debug, trace};

use crate::core::{DenseSample, ScreenPoint, Viewport};
use crate::error::ChartResult;
use crate::interaction::{InputController, InteractionMode};
use crate::render::Renderer;

#[cfg(feature = "cairo-backend")]
use crate::render::CairoContextRenderer;

use super::chart_state::{ChartInput, ChartState, TooltipView};
use super::render_frame_builder::build_render_frame;
use super::validation::validate_config;
use super::ChartEngineConfig;

/// Main orchestration facade consumed by host applications.
///
/// `ChartEngine` owns the host input, the current `ChartState` snapshot, the
/// pointer state machine and the renderer. All operations run synchronously on
/// the caller's (UI) thread.
pub struct ChartEngine<R: Renderer> {
    pub(super) renderer: R,
    pub(super) config: ChartEngineConfig,
    pub(super) viewport: Viewport,
    pub(super) input: ChartInput,
    pub(super) state: ChartState,
    pub(super) input_controller: InputController,
    pub(super) redraw_requested: bool,
}

impl<R: Renderer> ChartEngine<R> {
    /// Creates an engine with no data.
    pub fn new(renderer: R, config: ChartEngineConfig) -> ChartResult<Self> {
        validate_config(&config)?;

        let input = ChartInput {
            timezone_id: "UTC".to_owned(),
            ..ChartInput::default()
        };
        let state = ChartState::build(
            &input,
            &config,
            config.viewport,
            config.initial_selected_index,
        );
        Ok(Self {
            renderer,
            config,
            viewport: config.viewport,
            input,
            state,
            input_controller: InputController::default(),
            redraw_requested: true,
        })
    }

    #[must_use]
    pub fn config(&self) -> &ChartEngineConfig {
        &self.config
    }

    /// Replaces the configuration and recomputes everything.
    pub fn set_config(&mut self, config: ChartEngineConfig) -> ChartResult<()> {
        validate_config(&config)?;
        debug!(resolution = config.resolution, "replace chart config");
        self.config = config;
        self.rebuild_state();
        Ok(())
    }

    #[must_use]
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    /// Current derived snapshot.
    #[must_use]
    pub fn state(&self) -> &ChartState {
        &self.state
    }

    #[must_use]
    pub fn input(&self) -> &ChartInput {
        &self.input
    }

    #[must_use]
    pub fn dense_series(&self) -> &[DenseSample] {
        &self.state.dense
    }

    #[must_use]
    pub fn points(&self) -> &[ScreenPoint] {
        &self.state.points
    }

    #[must_use]
    pub fn selected_index(&self) -> usize {
        self.state.selected_index()
    }

    #[must_use]
    pub fn selected_sample(&self) -> Option<&DenseSample> {
        self.state.selected_sample()
    }

    /// Screen position of the selection indicator, if anything is drawn.
    #[must_use]
    pub fn indicator(&self) -> Option<ScreenPoint> {
        self.state.indicator
    }

    #[must_use]
    pub fn tooltip(&self) -> Option<&TooltipView> {
        self.state.tooltip.as_ref()
    }

    #[must_use]
    pub fn interaction_mode(&self) -> InteractionMode {
        self.input_controller.mode()
    }

    /// Whether a state change is waiting to be drawn.
    #[must_use]
    pub fn needs_redraw(&self) -> bool {
        self.redraw_requested
    }

    /// Builds the current frame and hands it to the renderer.
    ///
    /// With an unusable viewport nothing is drawn and the redraw request stays
    /// pending until a valid resize arrives.
    pub fn render(&mut self) -> ChartResult<()> {
        if !self.viewport.is_valid() {
            trace!("skip render for empty viewport");
            return Ok(());
        }
        let frame = build_render_frame(&self.state, &self.config);
        self.renderer.render(&frame)?;
        self.redraw_requested = false;
        Ok(())
    }

    /// Renders the frame into an external cairo context.
    ///
    /// Used from host draw callbacks while keeping the renderer decoupled from
    /// any toolkit API.
    #[cfg(feature = "cairo-backend")]
    pub fn render_on_cairo_context(&mut self, context: &cairo::Context) -> ChartResult<()>
    where
        R: CairoContextRenderer,
    {
        if !self.viewport.is_valid() {
            return Ok(());
        }
        let frame = build_render_frame(&self.state, &self.config);
        self.renderer.render_on_cairo_context(context, &frame)?;
        self.redraw_requested = false;
        Ok(())
    }

    /// Renders only when a redraw was requested; returns whether it drew.
    pub fn render_if_needed(&mut self) -> ChartResult<bool> {
        if !self.redraw_requested || !self.viewport.is_valid() {
            return Ok(false);
        }
        self.render()?;
        Ok(true)
    }

    #[must_use]
    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    #[must_use]
    pub fn renderer_mut(&mut self) -> &mut R {
        &mut self.renderer
    }

    #[must_use]
    pub fn into_renderer(self) -> R {
        self.renderer
    }

    /// Full recomputation from input, config and viewport; keeps the selection.
    pub(super) fn rebuild_state(&mut self) {
        let requested = self.state.selected_index();
        self.state = ChartState::build(&self.input, &self.config, self.viewport, requested);
        self.redraw_requested = true;
        trace!(
            dense_count = self.state.dense.len(),
            point_count = self.state.points.len(),
            selected_index = self.state.selected_index(),
            "rebuilt chart state"
        );
    }
}
