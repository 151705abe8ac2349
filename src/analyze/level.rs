use crate::types::coverage::{Level, Rate, Thresholds};

/// Bracket boundaries belong to the upper level.
pub fn classify(lines_rate: Rate, thresholds: &Thresholds) -> Level {
    if lines_rate < thresholds.alert {
        Level::Red
    } else if lines_rate < thresholds.warning {
        Level::Yellow
    } else {
        Level::Green
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rank(level: Level) -> u8 {
        match level {
            Level::Red => 0,
            Level::Yellow => 1,
            Level::Green => 2,
        }
    }

    #[test]
    fn classifies_each_bracket() {
        let thresholds = Thresholds::default();
        assert_eq!(classify(20.0, &thresholds), Level::Red);
        assert_eq!(classify(75.5, &thresholds), Level::Yellow);
        assert_eq!(classify(99.99, &thresholds), Level::Green);
    }

    #[test]
    fn boundaries_belong_to_upper_bracket() {
        let thresholds = Thresholds::default();
        assert_eq!(classify(thresholds.alert, &thresholds), Level::Yellow);
        assert_eq!(classify(thresholds.warning, &thresholds), Level::Green);
        assert_eq!(classify(49.99, &thresholds), Level::Red);
        assert_eq!(classify(89.99, &thresholds), Level::Yellow);
    }

    #[test]
    fn classification_is_monotonic() {
        let thresholds = Thresholds {
            alert: 33.3,
            warning: 66.6,
        };
        let mut previous = Level::Red;
        for step in 0..=10_000 {
            let level = classify(step as f64 / 100.0, &thresholds);
            assert!(rank(level) >= rank(previous), "level dropped at {step}");
            previous = level;
        }
    }

    #[test]
    fn inverted_thresholds_skip_yellow() {
        let thresholds = Thresholds {
            alert: 90.0,
            warning: 50.0,
        };
        assert_eq!(classify(60.0, &thresholds), Level::Red);
        assert_eq!(classify(90.0, &thresholds), Level::Green);
    }
}
