use crate::error::Result;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One strength movement inside a gym workout
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Exercise {
    name: String,
    sets: u32,
    reps: u32,
    /// Load in kg; unset means bodyweight
    weight: Option<f64>,
}

impl Exercise {
    pub fn new(name: impl Into<String>, sets: u32, reps: u32, weight: Option<f64>) -> Self {
        Self { name: name.into(), sets, reps, weight }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn sets(&self) -> u32 {
        self.sets
    }

    pub fn reps(&self) -> u32 {
        self.reps
    }

    /// Weight in kg, 0 for bodyweight exercises
    pub fn weight(&self) -> f64 {
        self.weight.unwrap_or(0.0)
    }

    /// Weight as stored, without the bodyweight normalization
    pub fn raw_weight(&self) -> Option<f64> {
        self.weight
    }

    pub fn to_document(&self) -> Result<Value> {
        Ok(serde_json::to_value(self)?)
    }

    pub fn from_document(document: Value) -> Result<Self> {
        Ok(serde_json::from_value(document)?)
    }
}
