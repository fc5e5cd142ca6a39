//! Chart-facing output boundary.
//!
//! The (external) chart widget consumes plain ordered values per line, with
//! the sample index implicit by position. This module converts engine
//! output into that shape; rendering itself is out of scope.

use serde::Serialize;

use crate::montecarlo::SimulationResult;
use crate::window::PriceWindow;

/// A renderable series: one dataset per line on the chart.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartSeries {
    /// Ordered price values, one inner vector per dataset.
    pub datasets: Vec<Vec<f64>>,
}

impl ChartSeries {
    /// The live window as exactly one dataset, oldest value first.
    pub fn from_window(window: &PriceWindow) -> Self {
        Self {
            datasets: vec![window.values()],
        }
    }

    /// One dataset per simulated forward path.
    pub fn from_result(result: &SimulationResult) -> Self {
        Self {
            datasets: result
                .paths()
                .iter()
                .map(|path| path.iter().map(|p| p.value).collect())
                .collect(),
        }
    }

    /// Number of datasets (lines) in the series.
    pub fn dataset_count(&self) -> usize {
        self.datasets.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::montecarlo::MonteCarloSimulator;
    use types::{PricePoint, SimulationConfig};

    #[test]
    fn test_window_maps_to_single_dataset() {
        let mut window = PriceWindow::new(3);
        window.push(PricePoint::new(0, 1.0));
        window.push(PricePoint::new(1, 2.0));
        window.push(PricePoint::new(2, 3.0));

        let series = ChartSeries::from_window(&window);
        assert_eq!(series.dataset_count(), 1);
        assert_eq!(series.datasets[0], vec![1.0, 2.0, 3.0]);
    }

    #[test]
    fn test_result_maps_to_one_dataset_per_path() {
        let config = SimulationConfig::default().with_path_count(4).with_steps(6);
        let result = MonteCarloSimulator::with_seed(17).run(&config).unwrap();

        let series = ChartSeries::from_result(&result);
        assert_eq!(series.dataset_count(), 4);
        assert!(series.datasets.iter().all(|d| d.len() == 6));
    }

    #[test]
    fn test_serializes_to_plain_arrays() {
        let mut window = PriceWindow::new(2);
        window.push(PricePoint::new(0, 1.5));
        window.push(PricePoint::new(1, 2.5));

        let json = serde_json::to_string(&ChartSeries::from_window(&window)).unwrap();
        assert_eq!(json, r#"{"datasets":[[1.5,2.5]]}"#);
    }
}
