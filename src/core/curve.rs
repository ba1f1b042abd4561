use serde::{Deserialize, Serialize};

use crate::core::types::{ScreenPoint, Viewport};

/// Catmull-Rom to Bezier control-point scale used unless configured otherwise.
pub const DEFAULT_TENSION: f64 = 0.3;

/// One drawing command of a backend-agnostic path.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum PathCommand {
    MoveTo(ScreenPoint),
    LineTo(ScreenPoint),
    CubicTo {
        control1: ScreenPoint,
        control2: ScreenPoint,
        to: ScreenPoint,
    },
    Close,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ChartPath {
    pub commands: Vec<PathCommand>,
}

impl ChartPath {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.commands.len()
    }

    /// Last explicit point of the path, ignoring `Close`.
    #[must_use]
    pub fn current_point(&self) -> Option<ScreenPoint> {
        self.commands.iter().rev().find_map(|command| match *command {
            PathCommand::MoveTo(p) | PathCommand::LineTo(p) => Some(p),
            PathCommand::CubicTo { to, .. } => Some(to),
            PathCommand::Close => None,
        })
    }

    #[must_use]
    pub fn is_finite(&self) -> bool {
        self.commands.iter().all(|command| match *command {
            PathCommand::MoveTo(p) | PathCommand::LineTo(p) => p.x.is_finite() && p.y.is_finite(),
            PathCommand::CubicTo {
                control1,
                control2,
                to,
            } => [control1, control2, to]
                .iter()
                .all(|p| p.x.is_finite() && p.y.is_finite()),
            PathCommand::Close => true,
        })
    }

    fn move_to(&mut self, x: f64, y: f64) {
        self.commands.push(PathCommand::MoveTo(ScreenPoint::new(x, y)));
    }

    fn line_to(&mut self, x: f64, y: f64) {
        self.commands.push(PathCommand::LineTo(ScreenPoint::new(x, y)));
    }
}

/// Stroke and area paths for one chart layout.
///
/// Both paths extend flat to the left and right viewport edges so the curve
/// spans the full width although data points are inset by horizontal padding.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct CurveGeometry {
    pub stroke: ChartPath,
    pub fill: ChartPath,
}

impl CurveGeometry {
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.stroke.is_empty() && self.fill.is_empty()
    }
}

/// Control points of the cubic segment from `points[index]` to `points[index + 1]`.
///
/// Missing neighbours at either end are clamped to the segment endpoints.
#[must_use]
pub fn segment_control_points(
    points: &[ScreenPoint],
    index: usize,
    tension: f64,
) -> (ScreenPoint, ScreenPoint) {
    let p1 = points[index];
    let p2 = points[index + 1];
    let p0 = if index > 0 { points[index - 1] } else { p1 };
    let p3 = points.get(index + 2).copied().unwrap_or(p2);

    let control1 = ScreenPoint::new(
        p1.x + (p2.x - p0.x) * tension,
        p1.y + (p2.y - p0.y) * tension,
    );
    let control2 = ScreenPoint::new(
        p2.x - (p3.x - p1.x) * tension,
        p2.y - (p3.y - p1.y) * tension,
    );
    (control1, control2)
}

/// Builds the smooth stroke path and the closed area path through `points`.
///
/// Fewer than two points produce empty paths.
#[must_use]
pub fn build_curve(points: &[ScreenPoint], viewport: Viewport, tension: f64) -> CurveGeometry {
    if points.len() < 2 || !viewport.is_valid() {
        return CurveGeometry::empty();
    }

    let first = points[0];
    let last = points[points.len() - 1];
    // Stroke: MoveTo + LineTo + cubic segments + LineTo.
    let mut stroke = ChartPath {
        commands: Vec::with_capacity(points.len() + 2),
    };
    // Fill: MoveTo + 2 LineTo + cubic segments + 2 LineTo + Close.
    let mut fill = ChartPath {
        commands: Vec::with_capacity(points.len() + 5),
    };

    stroke.move_to(0.0, first.y);
    stroke.line_to(first.x, first.y);

    fill.move_to(0.0, viewport.height);
    fill.line_to(0.0, first.y);
    fill.line_to(first.x, first.y);

    for index in 0..points.len() - 1 {
        let (control1, control2) = segment_control_points(points, index, tension);
        let segment = PathCommand::CubicTo {
            control1,
            control2,
            to: points[index + 1],
        };
        stroke.commands.push(segment);
        fill.commands.push(segment);
    }

    stroke.line_to(viewport.width, last.y);

    fill.line_to(viewport.width, last.y);
    fill.line_to(viewport.width, viewport.height);
    fill.commands.push(PathCommand::Close);

    CurveGeometry { stroke, fill }
}
