use eframe::egui::Color32;

/// Risk bands derived from a snapshot's recession probability, used to
/// color the probability readouts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RiskLevel {
    Low,
    Guarded,
    Elevated,
    High,
}

impl RiskLevel {
    pub fn from_probability(probability_pct: f64) -> Self {
        if probability_pct >= 50.0 {
            Self::High
        } else if probability_pct >= 25.0 {
            Self::Elevated
        } else if probability_pct >= 10.0 {
            Self::Guarded
        } else {
            Self::Low
        }
    }
}

impl std::fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Low => write!(f, "Low"),
            Self::Guarded => write!(f, "Guarded"),
            Self::Elevated => write!(f, "Elevated"),
            Self::High => write!(f, "High"),
        }
    }
}

impl From<&RiskLevel> for Color32 {
    fn from(value: &RiskLevel) -> Color32 {
        match value {
            RiskLevel::Low => Color32::GREEN,
            RiskLevel::Guarded => Color32::LIGHT_YELLOW,
            RiskLevel::Elevated => Color32::GOLD,
            RiskLevel::High => Color32::RED,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bands_cover_the_probability_range() {
        assert_eq!(RiskLevel::from_probability(0.0), RiskLevel::Low);
        assert_eq!(RiskLevel::from_probability(9.9), RiskLevel::Low);
        assert_eq!(RiskLevel::from_probability(10.0), RiskLevel::Guarded);
        assert_eq!(RiskLevel::from_probability(25.0), RiskLevel::Elevated);
        assert_eq!(RiskLevel::from_probability(50.0), RiskLevel::High);
        assert_eq!(RiskLevel::from_probability(100.0), RiskLevel::High);
    }
}
