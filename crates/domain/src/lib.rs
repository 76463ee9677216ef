#![warn(clippy::pedantic)]
#![allow(clippy::missing_errors_doc)]

pub mod error;
pub mod muscle;
pub mod record;
pub mod service;
pub mod session;
pub mod training;
pub mod workout;

use std::slice::Iter;

use derive_more::{AsRef, Display};

pub use error::{CreateError, DeleteError, ReadError, StorageError};
pub use muscle::{MuscleGroup, MuscleGroupError};
pub use record::{CompletedSet, CompletedSetRecord, CompletedWorkoutRecord, WorkoutLogRepository};
pub use service::{Service, SessionService, WorkoutLogService, WorkoutService};
pub use session::{SessionContext, SessionRepository, UserID};
pub use training::{Reps, RepsError, Time, TimeError, Weight, WeightError};
pub use workout::{
    Section, SectionKind, SectionKindError, SetsExercise, TimedExercise, Workout, WorkoutID,
    WorkoutRepository,
};

pub trait Property: Clone + Copy + Sized {
    fn iter() -> Iter<'static, Self>;
    fn name(self) -> &'static str;
}

#[derive(AsRef, Debug, Display, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct Name(String);

impl Name {
    pub fn new(name: &str) -> Result<Self, NameError> {
        let trimmed_name = name.trim();

        if trimmed_name.is_empty() {
            return Err(NameError::Empty);
        }

        let len = trimmed_name.len();

        if len > 64 {
            return Err(NameError::TooLong(len));
        }

        Ok(Name(trimmed_name.to_string()))
    }
}

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum NameError {
    #[error("Name must not be empty")]
    Empty,
    #[error("Name must be 64 characters or fewer ({0} > 64)")]
    TooLong(usize),
}
