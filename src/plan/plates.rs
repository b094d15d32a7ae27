//! Plate math - which plates to load on each side of the bar
//!
//! Greedy decomposition is exact only because the default denominations
//! form a canonical coin system at 0.5 lb granularity. A custom plate set
//! must keep that property for the result to be optimal.

use super::numeric::finite_or_zero;

pub const DEFAULT_BAR_WEIGHT: f64 = 45.0;
pub const DEFAULT_PLATES: &[f64] = &[45.0, 35.0, 25.0, 10.0, 5.0, 2.5];

/// Tolerance added before flooring plate counts
const PLATE_EPSILON: f64 = 1e-6;

/// Most plates of one size that fit on a sleeve
pub const MAX_PLATES_PER_SIZE: usize = 100;

#[derive(Debug, Clone, PartialEq)]
pub struct PlateConfig {
    pub bar_weight: f64,
    /// Plate denominations, heaviest first
    pub plates: Vec<f64>,
}

impl PlateConfig {
    /// Denominations are sorted heaviest first; non-finite, zero and
    /// negative entries are dropped along with duplicates.
    pub fn new(bar_weight: f64, plates: &[f64]) -> Self {
        let mut plates: Vec<f64> = plates
            .iter()
            .copied()
            .filter(|p| p.is_finite() && *p > 0.0)
            .collect();
        plates.sort_by(|a, b| b.total_cmp(a));
        plates.dedup();

        Self {
            bar_weight: finite_or_zero(bar_weight).max(0.0),
            plates,
        }
    }
}

impl Default for PlateConfig {
    fn default() -> Self {
        Self::new(DEFAULT_BAR_WEIGHT, DEFAULT_PLATES)
    }
}

fn round_to_cents(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Plates for one side of the bar, heaviest first.
///
/// Empty when the load does not exceed the bar, or when it would take more
/// than `MAX_PLATES_PER_SIZE` plates of any one size.
pub fn calculate_plate_math(total_weight: f64, config: &PlateConfig) -> Vec<f64> {
    let remaining = finite_or_zero(total_weight) - config.bar_weight;
    if remaining <= 0.0 {
        return Vec::new();
    }

    let mut per_side = remaining / 2.0;
    let mut selected = Vec::new();

    for &plate in &config.plates {
        let count = (per_side / plate + PLATE_EPSILON).floor();
        if count > MAX_PLATES_PER_SIZE as f64 {
            return Vec::new();
        }
        if count > 0.0 {
            selected.extend(std::iter::repeat_n(plate, count as usize));
            per_side = round_to_cents(per_side - count * plate);
        }
    }

    selected
}

/// "45" for whole plates, "2.5" otherwise
pub fn format_plate(plate: f64) -> String {
    format!("{}", plate)
}

/// Display line for a set, e.g. "Per side: 45 + 2.5"
pub fn plate_math_label(total_weight: f64, config: &PlateConfig) -> String {
    let plates = calculate_plate_math(total_weight, config);
    if plates.is_empty() {
        return "Per side: no plates".to_string();
    }
    let parts: Vec<String> = plates.iter().map(|p| format_plate(*p)).collect();
    format!("Per side: {}", parts.join(" + "))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plates(total: f64) -> Vec<f64> {
        calculate_plate_math(total, &PlateConfig::default())
    }

    #[test]
    fn test_bar_only() {
        assert!(plates(45.0).is_empty());
        assert!(plates(30.0).is_empty());
        assert!(plates(f64::NAN).is_empty());
    }

    #[test]
    fn test_common_loads() {
        assert_eq!(plates(135.0), vec![45.0]);
        assert_eq!(plates(225.0), vec![45.0, 45.0]);
        assert_eq!(plates(140.0), vec![45.0, 2.5]);
        assert_eq!(plates(185.0), vec![45.0, 25.0]);
        assert_eq!(plates(315.0), vec![45.0, 45.0, 45.0]);
        assert_eq!(plates(95.0), vec![25.0]);
    }

    #[test]
    fn test_every_five_lb_load_is_exact() {
        for total in (50..=600).step_by(5) {
            let loaded: f64 = plates(total as f64).iter().sum::<f64>() * 2.0 + DEFAULT_BAR_WEIGHT;
            assert!((loaded - total as f64).abs() < 1e-9, "total {} loaded {}", total, loaded);
        }
    }

    #[test]
    fn test_unloadable_weight_is_empty() {
        assert!(plates(1e20).is_empty());
        assert!(plates(f64::MAX).is_empty());
        assert!(plates(f64::from(u32::MAX)).is_empty());

        let tiny = PlateConfig::new(45.0, &[0.001]);
        assert!(calculate_plate_math(500.0, &tiny).is_empty());
        assert_eq!(plate_math_label(1e20, &PlateConfig::default()), "Per side: no plates");
    }

    #[test]
    fn test_heaviest_loadable_weight() {
        // 100 plates of 45 per side
        let total = DEFAULT_BAR_WEIGHT + 2.0 * 45.0 * MAX_PLATES_PER_SIZE as f64;
        assert_eq!(plates(total).len(), MAX_PLATES_PER_SIZE);
    }

    #[test]
    fn test_plates_descending() {
        let result = plates(455.0);
        assert!(result.windows(2).all(|w| w[0] >= w[1]));
    }

    #[test]
    fn test_idempotent() {
        assert_eq!(plates(265.0), plates(265.0));
    }

    #[test]
    fn test_custom_config() {
        let config = PlateConfig::new(20.0, &[2.5, 20.0, 10.0, 5.0, 1.25]);
        assert_eq!(config.plates, vec![20.0, 10.0, 5.0, 2.5, 1.25]);
        assert_eq!(calculate_plate_math(100.0, &config), vec![20.0, 20.0]);
        assert_eq!(calculate_plate_math(62.5, &config), vec![20.0, 1.25]);
    }

    #[test]
    fn test_config_drops_invalid_plates() {
        let config = PlateConfig::new(f64::NAN, &[0.0, -5.0, f64::INFINITY, 10.0, 10.0]);
        assert_eq!(config.bar_weight, 0.0);
        assert_eq!(config.plates, vec![10.0]);
    }

    #[test]
    fn test_format_plate() {
        assert_eq!(format_plate(45.0), "45");
        assert_eq!(format_plate(2.5), "2.5");
        assert_eq!(format_plate(1.25), "1.25");
    }

    #[test]
    fn test_plate_math_label() {
        let config = PlateConfig::default();
        assert_eq!(plate_math_label(140.0, &config), "Per side: 45 + 2.5");
        assert_eq!(plate_math_label(45.0, &config), "Per side: no plates");
    }
}
