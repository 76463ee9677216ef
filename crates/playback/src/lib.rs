#![warn(clippy::pedantic)]
#![allow(clippy::missing_errors_doc)]

use chrono::{DateTime, Utc};

pub mod engine;

pub use engine::{EmptyWorkoutError, Phase, PlaybackEngine, SetField};

#[allow(async_fn_in_trait)]
pub trait OngoingWorkoutRepository {
    async fn read_ongoing_workout(&self) -> Result<Option<OngoingWorkout>, String>;
    async fn write_ongoing_workout(
        &self,
        ongoing_workout: Option<OngoingWorkout>,
    ) -> Result<(), String>;
}

/// Resumable state of an in-progress workout, including entered set values
/// and completed circuit passes.
#[derive(serde::Serialize, serde::Deserialize, Clone)]
pub struct OngoingWorkout {
    pub workout_id: u128,
    pub start_time: DateTime<Utc>,
    pub section_idx: usize,
    pub exercise_idx: usize,
    pub phase: Phase,
    pub timer_state: TimerState,
    pub sets: Vec<Vec<Vec<OngoingSet>>>,
    pub rounds: Vec<u32>,
}

/// One recorded set, indexed by section, exercise and set position. Plain
/// numbers so the snapshot can be serialized without the domain types.
#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct OngoingSet {
    pub reps: u32,
    pub weight: f32,
}

#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerState {
    Unset,
    Active { time: u32 },
    Paused { time: u32 },
}
