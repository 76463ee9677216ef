use chrono::NaiveDate;

use crate::{CreateError, MuscleGroup, Name, Reps, SessionContext, Time, Weight, WorkoutID};

#[allow(async_fn_in_trait)]
pub trait WorkoutLogRepository {
    async fn store_completed_workout(
        &self,
        session: &SessionContext,
        record: CompletedWorkoutRecord,
    ) -> Result<CompletedWorkoutRecord, CreateError>;
}

/// One set as tracked during playback, mutated in place as the user enters
/// values.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct CompletedSet {
    pub set_number: u32,
    pub reps: Reps,
    pub weight: Weight,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CompletedSetRecord {
    pub exercise: Name,
    pub muscle_group: MuscleGroup,
    pub set_number: u32,
    pub reps: Reps,
    pub weight: Weight,
    pub target_sets: u32,
    pub target_reps: Reps,
    pub rest: Time,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CompletedWorkoutRecord {
    pub workout_id: WorkoutID,
    pub date: NaiveDate,
    pub sets: Vec<CompletedSetRecord>,
}

impl CompletedWorkoutRecord {
    #[must_use]
    pub fn num_sets(&self) -> usize {
        self.sets.len()
    }

    #[must_use]
    pub fn avg_reps(&self) -> Option<f32> {
        if self.sets.is_empty() {
            None
        } else {
            #[allow(clippy::cast_precision_loss)]
            Some(
                self.sets
                    .iter()
                    .map(|s| u32::from(s.reps))
                    .sum::<u32>() as f32
                    / self.sets.len() as f32,
            )
        }
    }

    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn volume_load(&self) -> u32 {
        self.sets
            .iter()
            .map(|s| (u32::from(s.reps) as f32 * f32::from(s.weight)).round() as u32)
            .sum()
    }
}
