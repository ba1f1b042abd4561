use serde::{Deserialize, Serialize};

use crate::core::types::{DenseSample, ScreenPoint, Viewport};

/// Screen layout used to map the dense series into pixels.
///
/// `min_value_buffer` and `max_value_buffer` are fractions of the plot height
/// kept empty below the coldest and above the warmest reading.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ChartGeometry {
    pub width: f64,
    pub height: f64,
    pub padding_top: f64,
    pub padding_bottom: f64,
    pub padding_horizontal: f64,
    pub min_value_buffer: f64,
    pub max_value_buffer: f64,
}

impl ChartGeometry {
    #[must_use]
    pub fn viewport(self) -> Viewport {
        Viewport::new(self.width, self.height)
    }

    #[must_use]
    pub fn plot_width(self) -> f64 {
        self.width - 2.0 * self.padding_horizontal
    }

    #[must_use]
    pub fn plot_height(self) -> f64 {
        self.height - self.padding_top - self.padding_bottom
    }

    /// Maps a dense index into its horizontal pixel position.
    #[must_use]
    pub fn index_to_x(self, index: usize, count: usize) -> f64 {
        if count <= 1 {
            return self.width / 2.0;
        }
        let ratio = index as f64 / (count - 1) as f64;
        self.padding_horizontal + ratio * self.plot_width()
    }

    /// Maps a temperature into its vertical pixel position.
    ///
    /// `bounds` are the hourly minimum and maximum. The range is floored to 1
    /// so a flat series lands on the `min_value_buffer` line.
    #[must_use]
    pub fn temperature_to_y(self, temperature: f64, bounds: (f64, f64)) -> f64 {
        let (min, max) = bounds;
        let range = (max - min).max(1.0);
        let normalized = (temperature - min) / range;
        let span = 1.0 - self.min_value_buffer - self.max_value_buffer;
        let adjusted = self.min_value_buffer + normalized * span;
        self.padding_top + self.plot_height() * (1.0 - adjusted)
    }
}

/// Projects every dense sample into screen space, index-aligned.
///
/// Returns an empty vector for an empty series or an unusable viewport.
#[must_use]
pub fn map_screen_points(
    dense: &[DenseSample],
    bounds: (f64, f64),
    geometry: ChartGeometry,
) -> Vec<ScreenPoint> {
    if dense.is_empty() || !geometry.viewport().is_valid() {
        return Vec::new();
    }

    let count = dense.len();
    dense
        .iter()
        .enumerate()
        .map(|(index, sample)| {
            ScreenPoint::new(
                geometry.index_to_x(index, count),
                geometry.temperature_to_y(sample.temperature, bounds),
            )
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn geometry() -> ChartGeometry {
        ChartGeometry {
            width: 300.0,
            height: 200.0,
            padding_top: 60.0,
            padding_bottom: 20.0,
            padding_horizontal: 50.0,
            min_value_buffer: 0.5,
            max_value_buffer: 0.1,
        }
    }

    #[test]
    fn extremes_map_onto_buffer_lines() {
        let geometry = geometry();
        // plot height 120: minimum sits at 50% from the bottom, maximum at 90%.
        assert!((geometry.temperature_to_y(10.0, (10.0, 30.0)) - 120.0).abs() <= 1e-9);
        assert!((geometry.temperature_to_y(30.0, (10.0, 30.0)) - 72.0).abs() <= 1e-9);
    }

    #[test]
    fn flat_range_is_floored_to_one_degree() {
        let geometry = geometry();
        let y = geometry.temperature_to_y(18.0, (18.0, 18.0));
        assert!((y - 120.0).abs() <= 1e-9);
    }

    #[test]
    fn single_point_is_centered() {
        assert!((geometry().index_to_x(0, 1) - 150.0).abs() <= 1e-9);
        assert!((geometry().index_to_x(0, 2) - 50.0).abs() <= 1e-9);
        assert!((geometry().index_to_x(1, 2) - 250.0).abs() <= 1e-9);
    }
}
