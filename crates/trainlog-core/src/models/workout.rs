use super::{format_quantity, Exercise};
use crate::error::Result;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::io::{self, Write};

/// A dated training session
///
/// Distance-based sessions carry a distance and no exercises, gym sessions carry
/// exercises and no distance. The model itself allows both.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Workout {
    /// `YYYY-MM-DD`
    date: String,

    /// Distance covered in km
    distance: Option<f64>,

    /// Exercises in the order they were added
    #[serde(default)]
    exercises: Vec<Exercise>,
}

impl Workout {
    pub fn new(date: impl Into<String>, distance: Option<f64>) -> Self {
        Self { date: date.into(), distance, exercises: Vec::new() }
    }

    pub fn date(&self) -> &str {
        &self.date
    }

    /// Distance in km, 0 when none was recorded
    pub fn distance(&self) -> f64 {
        self.distance.unwrap_or(0.0)
    }

    /// Distance as stored, without the zero normalization
    pub fn raw_distance(&self) -> Option<f64> {
        self.distance
    }

    pub fn exercises(&self) -> &[Exercise] {
        &self.exercises
    }

    pub fn add_exercise(&mut self, exercise: Exercise) {
        self.exercises.push(exercise);
    }

    pub fn to_document(&self) -> Result<Value> {
        Ok(serde_json::to_value(self)?)
    }

    pub fn from_document(document: Value) -> Result<Self> {
        Ok(serde_json::from_value(document)?)
    }

    /// Write the textual view of this workout.
    ///
    /// The distance line depends on the stored distance, so a recorded `0` is shown
    /// while an unrecorded distance is not.
    pub fn render<W: Write>(&self, out: &mut W) -> io::Result<()> {
        writeln!(out, "\n📅 Treniruotė atlikta: {}", self.date)?;

        if let Some(distance) = self.distance {
            writeln!(out, "📏 Įveikta: {} km", format_quantity(distance))?;
        }

        for exercise in &self.exercises {
            // Bodyweight exercises print a bare 0
            let weight = match exercise.raw_weight() {
                Some(weight) => format_quantity(weight),
                None => "0".to_string(),
            };
            writeln!(
                out,
                "🏋️ {}: {}x{} @ {}kg",
                exercise.name(),
                exercise.sets(),
                exercise.reps(),
                weight
            )?;
        }

        Ok(())
    }
}
