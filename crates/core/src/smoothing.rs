//! Moving-average smoothing for observation time series.

use crate::error::{PlumeError, Result};

/// Unweighted moving average over full windows only.
///
/// The output has `series.len() - window + 1` entries; edge samples are
/// dropped rather than averaged over partial windows.
///
/// A window longer than the series slides the series along the window
/// instead, giving `window - series.len() + 1` entries that all equal
/// `sum(series) / window`. An empty series gives an empty vector.
///
/// # Errors
///
/// Returns [`PlumeError::InvalidWindow`] for a window of zero.
pub fn moving_average(series: &[f64], window: usize) -> Result<Vec<f64>> {
    if window == 0 {
        return Err(PlumeError::InvalidWindow(window));
    }

    if series.is_empty() {
        return Ok(Vec::new());
    }

    let weight = 1.0 / window as f64;
    if window > series.len() {
        let total = series.iter().map(|v| v * weight).sum::<f64>();
        return Ok(vec![total; window - series.len() + 1]);
    }

    Ok(series
        .windows(window)
        .map(|w| w.iter().map(|v| v * weight).sum::<f64>())
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_valid_mode() {
        let smoothed = moving_average(&[1.0, 2.0, 3.0, 4.0, 5.0], 3).unwrap();
        assert_eq!(smoothed.len(), 3);
        for (got, want) in smoothed.iter().zip([2.0, 3.0, 4.0]) {
            assert_relative_eq!(*got, want, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_window_of_one_is_identity() {
        let series = [0.5, -1.25, 8.0];
        assert_eq!(moving_average(&series, 1).unwrap(), series.to_vec());
    }

    #[test]
    fn test_window_edges() {
        let wide = moving_average(&[1.0, 2.0], 3).unwrap();
        assert_eq!(wide.len(), 2);
        for v in wide {
            assert_relative_eq!(v, 1.0, epsilon = 1e-12);
        }
        assert_eq!(moving_average(&[1.0, 3.0], 2).unwrap().len(), 1);
        assert!(moving_average(&[], 4).unwrap().is_empty());
        assert!(matches!(
            moving_average(&[1.0], 0),
            Err(PlumeError::InvalidWindow(0))
        ));
    }
}
