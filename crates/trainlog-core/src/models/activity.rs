//! Activity and athlete kinds.
//!
//! The athlete kind is a closed tag; everything that varies by kind (file label,
//! history header, energy formula) is keyed off it with a single match.

use serde::{Deserialize, Serialize};
use std::fmt;

/// kcal burned per km running
pub const RUNNING_KCAL_PER_KM: f64 = 0.063;

/// kcal burned per km biking
pub const BIKING_KCAL_PER_KM: f64 = 0.049;

/// Activity used to select the energy estimate formula
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActivityKind {
    Running,
    Biking,
    Gym,
}

impl ActivityKind {
    /// Parse the single-letter code used by the workout prompt (`r`, `b`, `g`)
    pub fn from_code(code: &str) -> Option<Self> {
        match code.trim().to_lowercase().as_str() {
            "r" => Some(ActivityKind::Running),
            "b" => Some(ActivityKind::Biking),
            "g" => Some(ActivityKind::Gym),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ActivityKind::Running => "running",
            ActivityKind::Biking => "biking",
            ActivityKind::Gym => "gym",
        }
    }

    /// Whether workouts of this activity record a distance instead of exercises
    pub fn is_distance_based(&self) -> bool {
        matches!(self, ActivityKind::Running | ActivityKind::Biking)
    }

    /// Estimated kcal for `distance_km`, or `None` when the activity has no formula
    pub fn energy_estimate(&self, distance_km: f64) -> Option<f64> {
        match self {
            ActivityKind::Running => Some(distance_km * RUNNING_KCAL_PER_KM),
            ActivityKind::Biking => Some(distance_km * BIKING_KCAL_PER_KM),
            ActivityKind::Gym => None,
        }
    }
}

impl fmt::Display for ActivityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Kind of athlete owning a workout history
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AthleteKind {
    Runner,
    Biker,
    Bodybuilder,
}

impl AthleteKind {
    /// The athlete kind that records workouts of `activity`
    pub fn for_activity(activity: ActivityKind) -> Self {
        match activity {
            ActivityKind::Running => AthleteKind::Runner,
            ActivityKind::Biking => AthleteKind::Biker,
            ActivityKind::Gym => AthleteKind::Bodybuilder,
        }
    }

    /// Activity used when evaluating every workout of this athlete
    pub fn activity(&self) -> ActivityKind {
        match self {
            AthleteKind::Runner => ActivityKind::Running,
            AthleteKind::Biker => ActivityKind::Biking,
            AthleteKind::Bodybuilder => ActivityKind::Gym,
        }
    }

    /// Name written to the `athlete_type` field of the workout file
    pub fn type_name(&self) -> &'static str {
        match self {
            AthleteKind::Runner => "Runner",
            AthleteKind::Biker => "Biker",
            AthleteKind::Bodybuilder => "Bodybuilder",
        }
    }

    /// Heading printed above the workout history
    pub fn history_header(&self, name: &str) -> String {
        match self {
            AthleteKind::Runner => format!("🏃 Bėgiko {} treniruočių istorija:", name),
            AthleteKind::Biker => format!("🚴 Dviratininko {} treniruočių istorija:", name),
            AthleteKind::Bodybuilder => format!("🏋️ Kultūristo {} treniruočių istorija:", name),
        }
    }
}

impl fmt::Display for AthleteKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.type_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_code() {
        assert_eq!(ActivityKind::from_code("r"), Some(ActivityKind::Running));
        assert_eq!(ActivityKind::from_code("B"), Some(ActivityKind::Biking));
        assert_eq!(ActivityKind::from_code(" g "), Some(ActivityKind::Gym));
        assert_eq!(ActivityKind::from_code("x"), None);
        assert_eq!(ActivityKind::from_code(""), None);
    }

    #[test]
    fn test_energy_estimate() {
        let running = ActivityKind::Running.energy_estimate(5.0).unwrap();
        assert!((running - 0.315).abs() < 1e-12);

        let biking = ActivityKind::Biking.energy_estimate(10.0).unwrap();
        assert!((biking - 0.49).abs() < 1e-12);

        assert_eq!(ActivityKind::Gym.energy_estimate(10.0), None);
    }

    #[test]
    fn test_kind_activity_mapping_is_symmetric() {
        for activity in [ActivityKind::Running, ActivityKind::Biking, ActivityKind::Gym] {
            assert_eq!(AthleteKind::for_activity(activity).activity(), activity);
        }
    }

    #[test]
    fn test_type_name_matches_serialized_tag() {
        let json = serde_json::to_string(&AthleteKind::Bodybuilder).unwrap();
        assert_eq!(json, "\"Bodybuilder\"");
        assert_eq!(AthleteKind::Runner.to_string(), "Runner");
    }

    #[test]
    fn test_history_header() {
        assert_eq!(
            AthleteKind::Runner.history_header("Ana"),
            "🏃 Bėgiko Ana treniruočių istorija:"
        );
        assert!(AthleteKind::Biker.history_header("Ana").starts_with("🚴 Dviratininko Ana"));
        assert!(AthleteKind::Bodybuilder.history_header("Ana").starts_with("🏋️ Kultūristo Ana"));
    }
}
