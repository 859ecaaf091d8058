//! Interactive journal session: collects workouts and records them for the athlete
//! matching each workout's activity.

use crate::interactive::Prompter;
use anyhow::{Context, Result};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::debug;
use trainlog_core::config::CorruptPolicy;
use trainlog_core::models::{ActivityKind, Athlete, AthleteKind, Exercise, Workout};
use trainlog_core::ports::RecordStore;
use trainlog_core::validation;

pub const BANNER: &str = "🏋️‍♂️ Treniruotės sekimo programa";

const PROMPT_NAME: &str = "Įveskite savo vardą";
const PROMPT_DATE: &str = "Įveskite treniruotės datą (pvz. 2025-05-01)";
const PROMPT_ACTIVITY: &str = "Ar ši treniruotė yra bėgimo (r), dviračio (b) ar salės (g)?";
const PROMPT_DISTANCE: &str = "Kiek km įveikėte?";
const PROMPT_EXERCISE_NAME: &str = "Įveskite pratimo pavadinimą";
const PROMPT_SETS: &str = "Kiek serijų (sets)?";
const PROMPT_REPS: &str = "Kiek pakartojimų (reps)?";
const PROMPT_WEIGHT: &str = "Kiek svorio (kg)? (palikite tuščią jei kūno svoris)";
const PROMPT_MORE_EXERCISES: &str = "Pridėti dar vieną pratimą? (t/n)";
const PROMPT_MORE_WORKOUTS: &str = "Pridėti dar vieną treniruotę? (t/n)";
const PROMPT_EXIT: &str = "Paspauskite Enter, kad išeitumėte...";

const INVALID_NAME: &str = "Vardas negali būti tuščias.";
const INVALID_DATE: &str = "Netinkamas datos formatas. Bandykite dar kartą.";
const INVALID_ACTIVITY: &str = "Netinkamas pasirinkimas. Įveskite 'r', 'b' arba 'g'.";
const INVALID_DISTANCE: &str = "Netinkamas atstumas. Įveskite skaičių.";
const INVALID_EXERCISE_NAME: &str = "Pavadinimas negali būti tuščias.";
const INVALID_COUNT: &str = "Netinkamas skaičius. Įveskite teigiamą sveikąjį skaičių.";
const INVALID_WEIGHT: &str = "Netinkamas svoris. Įveskite skaičių arba palikite tuščią.";

/// Where athlete files live and how unreadable ones are treated
#[derive(Debug, Clone)]
pub struct SessionSettings {
    pub data_dir: PathBuf,
    pub on_corrupt: CorruptPolicy,
}

pub struct Session<P: Prompter> {
    prompter: P,
    store: Arc<dyn RecordStore>,
    settings: SessionSettings,
}

impl<P: Prompter> Session<P> {
    pub fn new(prompter: P, store: Arc<dyn RecordStore>, settings: SessionSettings) -> Self {
        Self { prompter, store, settings }
    }

    #[cfg(test)]
    pub fn prompter(&self) -> &P {
        &self.prompter
    }

    /// Ask for the athlete name, then record workouts until the user stops.
    ///
    /// Returns the athlete of the last recorded workout's kind.
    pub fn run(&mut self) -> Result<Athlete> {
        let name = self.ask_until(PROMPT_NAME, INVALID_NAME, validation::parse_name)?;
        let mut current: Option<Athlete> = None;

        loop {
            let (workout, activity) = self.prompt_workout()?;
            let kind = AthleteKind::for_activity(activity);

            let mut athlete = match current.take() {
                Some(athlete) if athlete.kind() == kind => athlete,
                previous => {
                    if let Some(previous) = previous {
                        debug!(from = %previous.kind(), to = %kind, "Switching athlete kind");
                    }
                    self.open_athlete(&name, kind)?
                }
            };

            athlete
                .add_workout(workout)
                .with_context(|| format!("Failed to save {}", athlete.path().display()))?;
            current = Some(athlete);

            let more = self.prompter.ask(PROMPT_MORE_WORKOUTS)?;
            if !validation::parse_yes(&more) {
                break;
            }
        }

        current.context("No workout was recorded")
    }

    /// Wait for Enter before the program exits
    pub fn pause(&mut self) -> Result<()> {
        self.prompter.ask(PROMPT_EXIT).map(|_| ())
    }

    fn open_athlete(&mut self, name: &str, kind: AthleteKind) -> Result<Athlete> {
        let athlete = Athlete::open(
            name,
            kind,
            self.store.clone(),
            &self.settings.data_dir,
            self.settings.on_corrupt,
        )
        .context("Failed to open workout history")?;

        if let Some(reason) = athlete.reset_reason() {
            self.prompter.notify(&format!(
                "⚠ Failas {} sugadintas, pradedama nuo tuščios istorijos ({})",
                athlete.path().display(),
                reason
            ))?;
        }

        Ok(athlete)
    }

    fn prompt_workout(&mut self) -> Result<(Workout, ActivityKind)> {
        let date = self.ask_until(PROMPT_DATE, INVALID_DATE, validation::parse_date)?;
        let activity = self.ask_until(PROMPT_ACTIVITY, INVALID_ACTIVITY, |answer| {
            ActivityKind::from_code(answer).ok_or(())
        })?;

        let workout = if activity.is_distance_based() {
            let distance =
                self.ask_until(PROMPT_DISTANCE, INVALID_DISTANCE, validation::parse_distance)?;
            Workout::new(date, Some(distance))
        } else {
            let mut workout = Workout::new(date, None);
            loop {
                workout.add_exercise(self.prompt_exercise()?);
                let more = self.prompter.ask(PROMPT_MORE_EXERCISES)?;
                if !validation::parse_yes(&more) {
                    break;
                }
            }
            workout
        };

        Ok((workout, activity))
    }

    fn prompt_exercise(&mut self) -> Result<Exercise> {
        let name =
            self.ask_until(PROMPT_EXERCISE_NAME, INVALID_EXERCISE_NAME, validation::parse_name)?;
        let sets = self.ask_until(PROMPT_SETS, INVALID_COUNT, |answer| {
            validation::parse_count("sets", answer)
        })?;
        let reps = self.ask_until(PROMPT_REPS, INVALID_COUNT, |answer| {
            validation::parse_count("reps", answer)
        })?;
        let weight = self.ask_until(PROMPT_WEIGHT, INVALID_WEIGHT, validation::parse_weight)?;

        Ok(Exercise::new(name, sets, reps, weight))
    }

    /// Ask `prompt` until `parse` accepts the answer, showing `invalid` after each rejection
    fn ask_until<T, E>(
        &mut self,
        prompt: &str,
        invalid: &str,
        parse: impl Fn(&str) -> std::result::Result<T, E>,
    ) -> Result<T> {
        loop {
            let answer = self.prompter.ask(prompt)?;
            match parse(&answer) {
                Ok(value) => return Ok(value),
                Err(_) => {
                    debug!(prompt, answer = %answer, "Rejected answer");
                    self.prompter.notify(invalid)?;
                }
            }
        }
    }
}
