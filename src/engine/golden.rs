use crate::models::output::GoldenTime;
use crate::models::shift::Strategy;

/// Strategy-specific peak-demand clock windows. Pure function of the hour.
///
/// Sniper's golden window is late night (22:00-04:00, wrapping midnight).
/// Feeder gets the three daytime rush bands.
pub fn classify(hour: u32, strategy: Strategy) -> GoldenTime {
    let label = match strategy {
        Strategy::Sniper => {
            if hour >= 22 || hour < 4 {
                Some("Late Night Surge")
            } else {
                None
            }
        }
        Strategy::Feeder => match hour {
            6..=8 => Some("Morning Rush"),
            11..=12 => Some("Lunch Rush"),
            16..=18 => Some("Evening Rush"),
            _ => None,
        },
    };

    match label {
        Some(label) => GoldenTime {
            active: true,
            label: label.to_string(),
        },
        None => GoldenTime {
            active: false,
            label: "Off-Peak".to_string(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::classify;
    use crate::models::shift::Strategy;

    #[test]
    fn sniper_window_wraps_midnight() {
        assert!(classify(23, Strategy::Sniper).active);
        assert!(classify(1, Strategy::Sniper).active);
        assert!(!classify(4, Strategy::Sniper).active);
        assert!(!classify(12, Strategy::Sniper).active);
    }

    #[test]
    fn feeder_hits_all_three_rush_bands() {
        assert_eq!(classify(7, Strategy::Feeder).label, "Morning Rush");
        assert_eq!(classify(12, Strategy::Feeder).label, "Lunch Rush");
        assert_eq!(classify(17, Strategy::Feeder).label, "Evening Rush");
        assert!(!classify(14, Strategy::Feeder).active);
        assert!(!classify(23, Strategy::Feeder).active);
    }
}
