//! Score to severity-band mapping
//!
//! The same four bands color the cover headline and every breakdown bar.

use crate::types::Color;

/// Severity band for a 0-100 score, ordered from least to most severe
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ScoreBand {
    Good,
    NeedsImprovement,
    Poor,
    Critical,
}

impl ScoreBand {
    /// Boundary values belong to the higher band (90 is `Good`)
    pub fn from_score(score: u8) -> Self {
        match score {
            90..=u8::MAX => ScoreBand::Good,
            70..=89 => ScoreBand::NeedsImprovement,
            50..=69 => ScoreBand::Poor,
            _ => ScoreBand::Critical,
        }
    }

    pub fn color(self) -> Color {
        match self {
            ScoreBand::Good => Color::rgb8(34, 197, 94),
            ScoreBand::NeedsImprovement => Color::rgb8(245, 158, 11),
            ScoreBand::Poor => Color::rgb8(249, 115, 22),
            ScoreBand::Critical => Color::rgb8(239, 68, 68),
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ScoreBand::Good => "Good",
            ScoreBand::NeedsImprovement => "Needs Improvement",
            ScoreBand::Poor => "Poor",
            ScoreBand::Critical => "Critical",
        }
    }
}

/// Color for a score
pub fn color_for(score: u8) -> Color {
    ScoreBand::from_score(score).color()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_boundaries_land_in_higher_band() {
        assert_eq!(ScoreBand::from_score(90), ScoreBand::Good);
        assert_eq!(ScoreBand::from_score(89), ScoreBand::NeedsImprovement);
        assert_eq!(ScoreBand::from_score(70), ScoreBand::NeedsImprovement);
        assert_eq!(ScoreBand::from_score(69), ScoreBand::Poor);
        assert_eq!(ScoreBand::from_score(50), ScoreBand::Poor);
        assert_eq!(ScoreBand::from_score(49), ScoreBand::Critical);
        assert_eq!(ScoreBand::from_score(0), ScoreBand::Critical);
        assert_eq!(ScoreBand::from_score(100), ScoreBand::Good);
    }

    #[test]
    fn test_severity_non_increasing() {
        let mut previous = ScoreBand::from_score(0);
        for score in 1..=100u8 {
            let band = ScoreBand::from_score(score);
            assert!(band <= previous, "severity increased at {}", score);
            previous = band;
        }
    }

    #[test]
    fn test_exactly_four_colors() {
        let mut colors: Vec<Color> = Vec::new();
        for score in 0..=100u8 {
            let color = color_for(score);
            if !colors.contains(&color) {
                colors.push(color);
            }
        }
        assert_eq!(colors.len(), 4);
    }
}
