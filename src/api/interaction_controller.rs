use tracing::trace;

use crate::core::nearest_index;
use crate::interaction::{PointerAction, PointerPhase};
use crate::render::Renderer;

use super::ChartEngine;

impl<R: Renderer> ChartEngine<R> {
    /// Feeds one pointer/touch event into the selection state machine.
    ///
    /// Returns `true` when the selected index changed. Redraw is requested
    /// only in that case.
    pub fn on_pointer_event(&mut self, x: f64, y: f64, phase: PointerPhase) -> bool {
        let previous_mode = self.input_controller.mode();
        let action = self.input_controller.on_pointer_event(x, y, phase);
        if previous_mode != self.input_controller.mode() {
            trace!(?phase, mode = ?self.input_controller.mode(), "pointer mode transition");
        }

        match action {
            PointerAction::Ignore => false,
            PointerAction::Select => {
                let Some(index) = nearest_index(
                    x,
                    self.viewport.width,
                    &self.state.points,
                    self.config.hit_test.window,
                ) else {
                    return false;
                };
                self.apply_selection(index)
            }
        }
    }

    /// Selects `hour * resolution + minute`, clamping every component.
    ///
    /// `hour` is clamped to `0..=23`, `minute` to `0..resolution`, and the
    /// resulting index into the dense series. Returns `true` when the
    /// selection changed.
    pub fn set_selected_hour(&mut self, hour: i64, minute: i64) -> bool {
        let resolution = i64::from(self.config.resolution);
        let hour = hour.clamp(0, 23);
        let minute = minute.clamp(0, resolution - 1);
        let index = (hour * resolution + minute) as usize;
        self.apply_selection(index)
    }

    /// Selects a dense index directly, clamped into bounds.
    pub fn set_selected_index(&mut self, index: usize) -> bool {
        self.apply_selection(index)
    }

    fn apply_selection(&mut self, requested: usize) -> bool {
        let previous = self.state.selected_index();
        let next_state = self.state.with_selection(requested, &self.config);
        if next_state.selected_index() == previous {
            return false;
        }
        trace!(
            previous,
            selected_index = next_state.selected_index(),
            "selection changed"
        );
        self.state = next_state;
        if self.state.is_drawable() {
            self.redraw_requested = true;
        }
        true
    }
}
