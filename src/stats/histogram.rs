/// Equal-width histogram bucketing for distribution views
///
/// Bounds snap to whole numbers (floor of the minimum, ceil of the maximum) so
/// bin labels read cleanly, and the maximum value clamps into the last bin to
/// absorb floating-point edge cases at the upper bound.

/// Bin count used when the caller does not specify one
pub const DEFAULT_BIN_COUNT: usize = 15;

#[derive(Debug, Clone, PartialEq)]
pub struct HistogramBin {
    /// Human-readable range, one decimal place: "2.0-4.0"
    pub label: String,
    pub lower: f64,
    pub upper: f64,
    pub count: usize,
}

/// Bucket `values` into `bin_count` equal-width bins
///
/// Empty input yields an empty vec. All values identical yields a single-width
/// bin range so the width never divides by zero.
pub fn build_histogram_bins(values: &[f64], bin_count: usize) -> Vec<HistogramBin> {
    if values.is_empty() || bin_count == 0 {
        return Vec::new();
    }

    let raw_min = values.iter().copied().fold(f64::INFINITY, f64::min);
    let raw_max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let min = raw_min.floor();
    let max = raw_max.ceil();

    let mut width = (max - min) / bin_count as f64;
    if width == 0.0 {
        width = 1.0;
    }

    let mut bins: Vec<HistogramBin> = (0..bin_count)
        .map(|i| {
            let lower = min + i as f64 * width;
            let upper = lower + width;
            HistogramBin {
                label: format!("{:.1}-{:.1}", lower, upper),
                lower,
                upper,
                count: 0,
            }
        })
        .collect();

    for &value in values {
        let idx = (((value - min) / width).floor() as usize).min(bin_count - 1);
        bins[idx].count += 1;
    }

    bins
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_even_spread_over_five_bins() {
        let values: Vec<f64> = (1..=10).map(|v| v as f64).collect();
        let bins = build_histogram_bins(&values, 5);
        assert_eq!(bins.len(), 5);
        let counts: Vec<usize> = bins.iter().map(|b| b.count).collect();
        // Width (10-1)/5 = 1.8; boundary values go to the lower bin except the
        // maximum, which clamps into the last bin
        assert_eq!(counts.iter().sum::<usize>(), 10);
        assert_eq!(bins[0].lower, 1.0);
        assert_eq!(bins[4].upper, 10.0);
        assert_eq!(counts, vec![2, 2, 2, 2, 2]);
    }

    #[test]
    fn test_empty_input_yields_no_bins() {
        assert!(build_histogram_bins(&[], 15).is_empty());
    }

    #[test]
    fn test_identical_values_default_width() {
        let bins = build_histogram_bins(&[3.0, 3.0, 3.0], 4);
        assert_eq!(bins.len(), 4);
        // Zero range falls back to width 1; everything lands in the first bin
        assert_eq!(bins[0].count, 3);
        assert_eq!(bins[0].lower, 3.0);
        assert_eq!(bins[0].upper, 4.0);
        assert_eq!(bins.iter().skip(1).map(|b| b.count).sum::<usize>(), 0);
    }

    #[test]
    fn test_maximum_clamps_to_last_bin() {
        let bins = build_histogram_bins(&[0.0, 10.0], 10);
        assert_eq!(bins[0].count, 1);
        assert_eq!(bins[9].count, 1);
    }

    #[test]
    fn test_fractional_bounds_snap_to_integers() {
        let bins = build_histogram_bins(&[0.3, 4.7], 5);
        assert_eq!(bins[0].lower, 0.0);
        assert_eq!(bins[4].upper, 5.0);
        assert_eq!(bins[0].label, "0.0-1.0");
    }

    #[test]
    fn test_zero_bin_count_yields_no_bins() {
        assert!(build_histogram_bins(&[1.0, 2.0], 0).is_empty());
    }

    #[test]
    fn test_labels_one_decimal_place() {
        let values: Vec<f64> = (0..30).map(|v| v as f64 / 2.0).collect();
        let bins = build_histogram_bins(&values, DEFAULT_BIN_COUNT);
        assert_eq!(bins.len(), DEFAULT_BIN_COUNT);
        assert_eq!(bins[0].label, "0.0-1.0");
        assert_eq!(bins[1].label, "1.0-2.0");
    }
}
