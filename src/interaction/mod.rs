use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum InteractionMode {
    #[default]
    Idle,
    Tracking,
}

/// Pointer/touch phase reported by the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PointerPhase {
    Down,
    Move,
    Up,
    Cancel,
}

/// What the engine should do in response to one pointer event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PointerAction {
    /// Hit test the pointer and apply the resulting selection.
    Select,
    /// Nothing to do; selection stays as is.
    Ignore,
}

/// Idle/Tracking state machine driving selection from pointer input.
///
/// Selection is sticky: releasing or cancelling the pointer never changes it,
/// and there is no snap-to-hour on release.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct InputController {
    mode: InteractionMode,
    cursor: Option<(f64, f64)>,
}

impl InputController {
    #[must_use]
    pub fn mode(self) -> InteractionMode {
        self.mode
    }

    /// Last pointer position seen while tracking.
    #[must_use]
    pub fn cursor(self) -> Option<(f64, f64)> {
        self.cursor
    }

    /// Advances the state machine and reports whether a hit test is due.
    ///
    /// - `Down` always (re)enters `Tracking` and selects.
    /// - `Move` selects only while `Tracking`.
    /// - `Up`/`Cancel` return to `Idle` without touching the selection.
    pub fn on_pointer_event(&mut self, x: f64, y: f64, phase: PointerPhase) -> PointerAction {
        match (self.mode, phase) {
            (_, PointerPhase::Down) => {
                self.mode = InteractionMode::Tracking;
                self.cursor = Some((x, y));
                PointerAction::Select
            }
            (InteractionMode::Tracking, PointerPhase::Move) => {
                self.cursor = Some((x, y));
                PointerAction::Select
            }
            (InteractionMode::Idle, PointerPhase::Move) => PointerAction::Ignore,
            (_, PointerPhase::Up | PointerPhase::Cancel) => {
                self.mode = InteractionMode::Idle;
                self.cursor = None;
                PointerAction::Ignore
            }
        }
    }

    /// Drops any in-flight gesture, e.g. when the chart is detached.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
