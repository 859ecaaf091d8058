//! Athlete: one person's workout history and its backing file.

use super::{AthleteKind, Workout};
use crate::config::CorruptPolicy;
use crate::error::{Result, TrainlogError};
use crate::ports::RecordStore;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Workouts keyed by date, in the order dates were first recorded
pub type WorkoutLog = IndexMap<String, Vec<Workout>>;

/// Document written to the workout file
#[derive(Serialize)]
struct AthleteDocument<'a> {
    athlete_type: AthleteKind,
    workouts: &'a WorkoutLog,
}

/// Document read back from the workout file.
///
/// `athlete_type` stays a plain string: a file written by another kind is still
/// loaded, only the tag differs.
#[derive(Deserialize)]
struct StoredDocument {
    #[serde(default)]
    athlete_type: Option<String>,
    #[serde(default)]
    workouts: WorkoutLog,
}

pub struct Athlete {
    name: String,
    kind: AthleteKind,
    workouts: WorkoutLog,
    path: PathBuf,
    store: Arc<dyn RecordStore>,
    reset_reason: Option<String>,
}

impl Athlete {
    /// Open the history of `name` as an athlete of `kind`, loading whatever the
    /// workout file already holds.
    pub fn open(
        name: impl Into<String>,
        kind: AthleteKind,
        store: Arc<dyn RecordStore>,
        data_dir: &Path,
        on_corrupt: CorruptPolicy,
    ) -> Result<Self> {
        let name = name.into();
        let path = data_dir.join(Self::file_name(&name));

        let mut athlete = Self {
            name,
            kind,
            workouts: WorkoutLog::new(),
            path,
            store,
            reset_reason: None,
        };
        athlete.load_workouts(on_corrupt)?;

        Ok(athlete)
    }

    /// File name for an athlete; depends on the name only, never on the kind
    pub fn file_name(name: &str) -> String {
        format!("{}_workouts.json", name.to_lowercase())
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> AthleteKind {
        self.kind
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn workouts(&self) -> &WorkoutLog {
        &self.workouts
    }

    /// Why the stored history was discarded, when it was reset under
    /// [`CorruptPolicy::Reset`]
    pub fn reset_reason(&self) -> Option<&str> {
        self.reset_reason.as_deref()
    }

    /// Record a workout and persist the whole history
    pub fn add_workout(&mut self, workout: Workout) -> Result<()> {
        debug!(date = workout.date(), athlete = %self.name, "Adding workout");
        self.workouts.entry(workout.date().to_string()).or_default().push(workout);
        self.save_workouts()
    }

    /// The document persisted for this athlete
    pub fn to_document(&self) -> Result<Value> {
        let document = AthleteDocument { athlete_type: self.kind, workouts: &self.workouts };
        Ok(serde_json::to_value(document)?)
    }

    /// Write the kind-specific heading followed by every workout
    pub fn display_workouts<W: Write>(&self, out: &mut W) -> io::Result<()> {
        writeln!(out, "\n{}", self.kind.history_header(&self.name))?;
        self.display_all_workouts(out)
    }

    fn display_all_workouts<W: Write>(&self, out: &mut W) -> io::Result<()> {
        let activity = self.kind.activity();

        for workout in self.workouts.values().flatten() {
            let distance = workout.distance();
            workout.render(out)?;

            if let Some(kcal) = activity.energy_estimate(distance) {
                writeln!(out, "Sudeginta kalorijų: {:.3} kcal", kcal)?;
            }
        }

        Ok(())
    }

    fn save_workouts(&self) -> Result<()> {
        let document = self.to_document()?;
        self.store.save(&self.path, &document)?;
        info!(path = %self.path.display(), kind = %self.kind, "Saved workouts");
        Ok(())
    }

    fn load_workouts(&mut self, on_corrupt: CorruptPolicy) -> Result<()> {
        let document = match self.store.load(&self.path)?.into_document() {
            Ok(document) => document,
            Err(reason) => return self.handle_corrupt(reason, on_corrupt),
        };

        match serde_json::from_value::<StoredDocument>(document) {
            Ok(stored) => {
                if let Some(stored_kind) = stored.athlete_type.as_deref() {
                    if stored_kind != self.kind.type_name() {
                        debug!(
                            stored = stored_kind,
                            current = %self.kind,
                            "Workout file was last saved by another athlete kind"
                        );
                    }
                }
                self.workouts = stored.workouts;
                debug!(dates = self.workouts.len(), path = %self.path.display(), "Loaded workouts");
                Ok(())
            }
            Err(e) => self.handle_corrupt(e.to_string(), on_corrupt),
        }
    }

    fn handle_corrupt(&mut self, reason: String, on_corrupt: CorruptPolicy) -> Result<()> {
        match on_corrupt {
            CorruptPolicy::Fail => {
                Err(TrainlogError::CorruptRecord { path: self.path.clone(), reason })
            }
            CorruptPolicy::Reset => {
                warn!(path = %self.path.display(), %reason, "Discarding corrupt workout file");
                self.workouts.clear();
                self.reset_reason = Some(reason);
                Ok(())
            }
        }
    }
}

impl fmt::Debug for Athlete {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Athlete")
            .field("name", &self.name)
            .field("kind", &self.kind)
            .field("path", &self.path)
            .field("dates", &self.workouts.len())
            .finish()
    }
}
