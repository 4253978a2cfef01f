//! Fabricated social-volume series.

use rand::Rng;

/// Points per series.
pub const SERIES_LEN: usize = 7;

/// X-axis labels matching each series point, oldest first.
pub const SOCIAL_VOLUME_LABELS: [&str; SERIES_LEN] =
    ["3d ago", "2d ago", "1d ago", "12h ago", "6h ago", "3h ago", "Now"];

/// Lowest value a series point can take.
const FLOOR: f64 = 50.0;

/// Seven-point random walk around `base`.
///
/// Starts at a random 70% to 130% of `base`, then alternates amplified and
/// inverted random swings scaled by `volatility`, with a slight downward
/// drift over the first three points and an upward drift after.
pub fn volatile_series<R: Rng + ?Sized>(base: f64, volatility: f64, rng: &mut R) -> Vec<u64> {
    let mut current = base * (0.7 + rng.gen::<f64>() * 0.6);

    (0..SERIES_LEN)
        .map(|i| {
            let swing_factor = if i % 2 == 0 { 1.2 } else { -0.8 };
            let random_swing = (rng.gen::<f64>() - 0.5) * 2.0 * volatility * base * 1.5;
            let trend = if i < 3 { -0.05 } else { 0.1 };
            current = (current + random_swing * swing_factor + trend * base).max(FLOOR);
            current.round() as u64
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_series_shape() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..50 {
            let series = volatile_series(120.0, 0.6, &mut rng);
            assert_eq!(series.len(), SERIES_LEN);
            assert!(series.iter().all(|&v| v >= 50));
        }
    }

    #[test]
    fn test_same_seed_same_series() {
        let a = volatile_series(200.0, 0.5, &mut StdRng::seed_from_u64(7));
        let b = volatile_series(200.0, 0.5, &mut StdRng::seed_from_u64(7));
        assert_eq!(a, b);
    }

    #[test]
    fn test_zero_volatility_is_pure_drift() {
        // Without swings the walk is start + drift, bounded by the start range.
        let series = volatile_series(1000.0, 0.0, &mut StdRng::seed_from_u64(1));
        let deltas: Vec<i64> = series.windows(2).map(|w| w[1] as i64 - w[0] as i64).collect();
        assert_eq!(deltas[0], -50);
        assert_eq!(deltas[1], -50);
        assert!(deltas[2..].iter().all(|&d| d == 100));
        assert!(series[0] >= 650 && series[0] <= 1250);
    }

    #[test]
    fn test_floor_applies() {
        let series = volatile_series(1.0, 0.0, &mut StdRng::seed_from_u64(3));
        assert!(series.iter().all(|&v| v == 50));
    }
}
