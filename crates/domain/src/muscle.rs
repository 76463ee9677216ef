use std::slice::Iter;

use crate::Property;

#[derive(Clone, Copy, Default, Debug, Eq, Hash, PartialEq, PartialOrd, Ord)]
pub enum MuscleGroup {
    #[default]
    FullBody,
    Chest,
    Back,
    Shoulders,
    Arms,
    Core,
    Legs,
}

impl Property for MuscleGroup {
    fn iter() -> Iter<'static, MuscleGroup> {
        static MUSCLE_GROUPS: [MuscleGroup; 7] = [
            MuscleGroup::FullBody,
            MuscleGroup::Chest,
            MuscleGroup::Back,
            MuscleGroup::Shoulders,
            MuscleGroup::Arms,
            MuscleGroup::Core,
            MuscleGroup::Legs,
        ];
        MUSCLE_GROUPS.iter()
    }

    fn name(self) -> &'static str {
        match self {
            MuscleGroup::FullBody => "Full Body",
            MuscleGroup::Chest => "Chest",
            MuscleGroup::Back => "Back",
            MuscleGroup::Shoulders => "Shoulders",
            MuscleGroup::Arms => "Arms",
            MuscleGroup::Core => "Core",
            MuscleGroup::Legs => "Legs",
        }
    }
}

impl TryFrom<&str> for MuscleGroup {
    type Error = MuscleGroupError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value.trim().to_lowercase().as_str() {
            "full body" | "fullbody" => Ok(MuscleGroup::FullBody),
            "chest" => Ok(MuscleGroup::Chest),
            "back" => Ok(MuscleGroup::Back),
            "shoulders" => Ok(MuscleGroup::Shoulders),
            "arms" => Ok(MuscleGroup::Arms),
            "core" => Ok(MuscleGroup::Core),
            "legs" => Ok(MuscleGroup::Legs),
            _ => Err(MuscleGroupError::Unknown(value.to_string())),
        }
    }
}

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum MuscleGroupError {
    #[error("Unknown muscle group \"{0}\"")]
    Unknown(String),
}
