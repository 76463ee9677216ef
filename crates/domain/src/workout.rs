use std::collections::BTreeSet;

use chrono::Duration;
use derive_more::Deref;
use uuid::Uuid;

use crate::{CreateError, DeleteError, MuscleGroup, Name, ReadError, Reps, Time};

#[allow(async_fn_in_trait)]
pub trait WorkoutRepository {
    async fn read_workouts(&self) -> Result<Vec<Workout>, ReadError>;
    async fn create_workout(
        &self,
        name: Name,
        sections: Vec<Section>,
    ) -> Result<Workout, CreateError>;
    async fn delete_workout(&self, id: WorkoutID) -> Result<WorkoutID, DeleteError>;
}

#[derive(Debug, Clone, PartialEq)]
pub struct Workout {
    pub id: WorkoutID,
    pub name: Name,
    pub notes: String,
    pub sections: Vec<Section>,
}

impl Workout {
    pub fn duration(&self) -> Duration {
        self.sections.iter().map(Section::duration).sum()
    }

    pub fn num_sets(&self) -> u32 {
        self.sections.iter().map(Section::num_sets).sum()
    }

    pub fn muscle_groups(&self) -> BTreeSet<MuscleGroup> {
        self.sections
            .iter()
            .flat_map(Section::muscle_groups)
            .collect::<BTreeSet<_>>()
    }
}

#[derive(Deref, Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct WorkoutID(Uuid);

impl WorkoutID {
    #[must_use]
    pub fn nil() -> Self {
        Self(Uuid::nil())
    }

    #[must_use]
    pub fn is_nil(&self) -> bool {
        self.0.is_nil()
    }
}

impl From<Uuid> for WorkoutID {
    fn from(value: Uuid) -> Self {
        Self(value)
    }
}

impl From<u128> for WorkoutID {
    fn from(value: u128) -> Self {
        Self(Uuid::from_bytes(value.to_be_bytes()))
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Section {
    Sets {
        name: Name,
        exercises: Vec<SetsExercise>,
    },
    Circuit {
        name: Name,
        exercises: Vec<TimedExercise>,
    },
}

impl Section {
    #[must_use]
    pub fn name(&self) -> &Name {
        match self {
            Section::Sets { name, .. } | Section::Circuit { name, .. } => name,
        }
    }

    #[must_use]
    pub fn kind(&self) -> SectionKind {
        match self {
            Section::Sets { .. } => SectionKind::Sets,
            Section::Circuit { .. } => SectionKind::Circuit,
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        match self {
            Section::Sets { exercises, .. } => exercises.len(),
            Section::Circuit { exercises, .. } => exercises.len(),
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn duration(&self) -> Duration {
        match self {
            Section::Sets { exercises, .. } => exercises
                .iter()
                .map(SetsExercise::duration)
                .sum::<Duration>(),
            Section::Circuit { exercises, .. } => exercises
                .iter()
                .map(|e| Duration::seconds(i64::from(e.work) + i64::from(e.rest)))
                .sum::<Duration>(),
        }
    }

    pub fn num_sets(&self) -> u32 {
        match self {
            Section::Sets { exercises, .. } => exercises.iter().map(|e| e.target_sets).sum(),
            Section::Circuit { exercises, .. } => {
                u32::try_from(exercises.len()).unwrap_or(u32::MAX)
            }
        }
    }

    fn muscle_groups(&self) -> BTreeSet<MuscleGroup> {
        match self {
            Section::Sets { exercises, .. } => {
                exercises.iter().map(|e| e.muscle_group).collect()
            }
            Section::Circuit { exercises, .. } => {
                exercises.iter().map(|e| e.muscle_group).collect()
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SetsExercise {
    pub name: Name,
    pub muscle_group: MuscleGroup,
    pub target_sets: u32,
    pub target_reps: Reps,
    pub rest: Time,
}

impl SetsExercise {
    // Assume 4 s per rep.
    pub fn duration(&self) -> Duration {
        Duration::seconds(
            i64::from(self.target_sets) * (i64::from(u32::from(self.target_reps)) * 4)
                + i64::from(self.target_sets) * i64::from(self.rest),
        )
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct TimedExercise {
    pub name: Name,
    pub muscle_group: MuscleGroup,
    pub work: Time,
    pub rest: Time,
}

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum SectionKind {
    Sets,
    Circuit,
}

impl crate::Property for SectionKind {
    fn iter() -> std::slice::Iter<'static, SectionKind> {
        static KINDS: [SectionKind; 2] = [SectionKind::Sets, SectionKind::Circuit];
        KINDS.iter()
    }

    fn name(self) -> &'static str {
        match self {
            SectionKind::Sets => "Sets",
            SectionKind::Circuit => "Circuit",
        }
    }
}

impl TryFrom<&str> for SectionKind {
    type Error = SectionKindError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value.trim().to_lowercase().as_str() {
            "sets" => Ok(SectionKind::Sets),
            "circuit" | "wod" | "hiit" | "tabata" => Ok(SectionKind::Circuit),
            _ => Err(SectionKindError::Unknown(value.to_string())),
        }
    }
}

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum SectionKindError {
    #[error("Unknown section kind \"{0}\"")]
    Unknown(String),
}
