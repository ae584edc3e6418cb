//! Progression Calculator
//!
//! Pure functions mapping accumulated XP to level, next-level threshold,
//! and a human-scale display string. All functions are total: malformed
//! input degrades to 0 at the `clamp_xp` boundary instead of failing.

/// XP required to advance one level.
pub const XP_PER_LEVEL: u64 = 1000;

/// Sanitize a raw document value into usable XP.
///
/// Store documents are written by multiple client versions; an absent,
/// NaN, or negative `xp` field is treated as 0. Fractions truncate.
pub fn clamp_xp(raw: Option<f64>) -> u64 {
    match raw {
        Some(v) if v.is_finite() && v > 0.0 => v as u64,
        _ => 0,
    }
}

/// Level for a given XP total. Always >= 1; saturates at `u32::MAX`
/// instead of wrapping on pathological totals.
pub fn level_for_xp(xp: u64) -> u32 {
    u32::try_from(xp / XP_PER_LEVEL).map_or(u32::MAX, |tiers| tiers.saturating_add(1))
}

/// XP remaining before the next level boundary, in `[1, XP_PER_LEVEL]`.
pub fn xp_to_next_level(xp: u64) -> u64 {
    (xp / XP_PER_LEVEL)
        .saturating_add(1)
        .saturating_mul(XP_PER_LEVEL)
        .saturating_sub(xp)
}

/// Format XP for display: `2500000` -> `"2.5M"`, `1500` -> `"1.5K"`,
/// `500` -> `"500"`.
pub fn format_xp(xp: u64) -> String {
    if xp >= 1_000_000 {
        format!("{:.1}M", xp as f64 / 1_000_000.0)
    } else if xp >= 1_000 {
        format!("{:.1}K", xp as f64 / 1_000.0)
    } else {
        xp.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn level_boundaries() {
        assert_eq!(level_for_xp(0), 1);
        assert_eq!(level_for_xp(999), 1);
        assert_eq!(level_for_xp(1000), 2);
        assert_eq!(level_for_xp(2500), 3);
    }

    #[test]
    fn level_is_non_decreasing() {
        let mut last = 0;
        for xp in (0..5000).step_by(50) {
            let lvl = level_for_xp(xp);
            assert!(lvl >= last);
            last = lvl;
        }
    }

    #[test]
    fn next_level_threshold() {
        assert_eq!(xp_to_next_level(0), 1000);
        assert_eq!(xp_to_next_level(999), 1);
        assert_eq!(xp_to_next_level(1000), 1000);
        for xp in (0..4000).step_by(7) {
            let remaining = xp_to_next_level(xp);
            assert!((1..=XP_PER_LEVEL).contains(&remaining));
            assert_eq!(remaining, level_for_xp(xp) as u64 * XP_PER_LEVEL - xp);
        }
    }

    #[test]
    fn extreme_totals_saturate_instead_of_wrapping() {
        assert_eq!(level_for_xp(u32::MAX as u64 * XP_PER_LEVEL), u32::MAX);
        assert_eq!(level_for_xp(u64::MAX), u32::MAX);
        // The threshold stays total even where the level saturates.
        let _ = xp_to_next_level(u64::MAX);
        assert!(xp_to_next_level(u32::MAX as u64 * XP_PER_LEVEL) <= XP_PER_LEVEL);
    }

    #[test]
    fn formats_human_scale() {
        assert_eq!(format_xp(500), "500");
        assert_eq!(format_xp(1500), "1.5K");
        assert_eq!(format_xp(2_500_000), "2.5M");
        assert_eq!(format_xp(1_000_000), "1.0M");
    }

    #[test]
    fn clamps_malformed_input() {
        assert_eq!(clamp_xp(None), 0);
        assert_eq!(clamp_xp(Some(f64::NAN)), 0);
        assert_eq!(clamp_xp(Some(-5.0)), 0);
        assert_eq!(clamp_xp(Some(1234.9)), 1234);
        assert_eq!(format_xp(clamp_xp(None)), "0");
    }
}
