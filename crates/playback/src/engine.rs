use std::iter::zip;

use chrono::{DateTime, Utc};
use log::debug;

use kraft_domain::{
    CompletedSet, CompletedSetRecord, CompletedWorkoutRecord, Reps, Section, Weight, Workout,
};

use crate::{OngoingSet, OngoingWorkout, TimerState};

#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Working,
    Resting,
    SectionComplete,
    WorkoutComplete,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SetField {
    Reps(Reps),
    Weight(Weight),
}

#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("workout has no exercises")]
pub struct EmptyWorkoutError;

/// Drives a user through the sections and exercises of a workout.
///
/// Sets sections are navigated manually and track entered reps and weights.
/// Circuit sections are driven by an external one-second clock calling
/// `tick()`, alternating between work and rest countdowns.
pub struct PlaybackEngine {
    workout: Workout,
    started: DateTime<Utc>,
    section_idx: usize,
    exercise_idx: usize,
    phase: Phase,
    time_remaining: u32,
    paused: bool,
    sets: Vec<Vec<Vec<CompletedSet>>>,
    rounds: Vec<u32>,
}

impl PlaybackEngine {
    pub fn start(workout: Workout) -> Result<Self, EmptyWorkoutError> {
        if workout.sections.is_empty() || workout.sections.iter().any(Section::is_empty) {
            return Err(EmptyWorkoutError);
        }

        let sets = workout
            .sections
            .iter()
            .map(|section| match section {
                Section::Sets { exercises, .. } => exercises
                    .iter()
                    .map(|e| {
                        (1..=e.target_sets)
                            .map(|n| CompletedSet {
                                set_number: n,
                                ..CompletedSet::default()
                            })
                            .collect()
                    })
                    .collect(),
                Section::Circuit { exercises, .. } => {
                    exercises.iter().map(|_| Vec::new()).collect()
                }
            })
            .collect();
        let rounds = vec![0; workout.sections.len()];

        let mut engine = Self {
            workout,
            started: Utc::now(),
            section_idx: 0,
            exercise_idx: 0,
            phase: Phase::Idle,
            time_remaining: 0,
            paused: false,
            sets,
            rounds,
        };
        engine.enter(0, 0);
        Ok(engine)
    }

    pub fn restore(workout: Workout, ongoing: &OngoingWorkout) -> Result<Self, EmptyWorkoutError> {
        let mut engine = Self::start(workout)?;
        engine.started = ongoing.start_time;
        let section_idx = ongoing.section_idx.min(engine.workout.sections.len() - 1);
        let exercise_idx = ongoing
            .exercise_idx
            .min(engine.workout.sections[section_idx].len() - 1);
        engine.enter(section_idx, exercise_idx);
        engine.phase = ongoing.phase;
        match ongoing.timer_state {
            TimerState::Unset => {
                engine.time_remaining = 0;
            }
            TimerState::Active { time } => {
                engine.time_remaining = time;
                engine.paused = false;
            }
            TimerState::Paused { time } => {
                engine.time_remaining = time;
                engine.paused = true;
            }
        }
        // Zipping clamps the recorded values to the workout's dimensions,
        // values of an inconsistent snapshot fall back to the defaults.
        for (sets, ongoing_sets) in zip(&mut engine.sets, &ongoing.sets) {
            for (sets, ongoing_sets) in zip(sets, ongoing_sets) {
                for (set, ongoing_set) in zip(sets, ongoing_sets) {
                    set.reps = Reps::new(ongoing_set.reps).unwrap_or_default();
                    set.weight = Weight::new(ongoing_set.weight).unwrap_or_default();
                }
            }
        }
        for (rounds, ongoing_rounds) in zip(&mut engine.rounds, &ongoing.rounds) {
            *rounds = *ongoing_rounds;
        }
        Ok(engine)
    }

    #[must_use]
    pub fn snapshot(&self) -> OngoingWorkout {
        OngoingWorkout {
            workout_id: self.workout.id.as_u128(),
            start_time: self.started,
            section_idx: self.section_idx,
            exercise_idx: self.exercise_idx,
            phase: self.phase,
            timer_state: match self.phase {
                Phase::Working | Phase::Resting if self.paused => TimerState::Paused {
                    time: self.time_remaining,
                },
                Phase::Working | Phase::Resting => TimerState::Active {
                    time: self.time_remaining,
                },
                Phase::Idle | Phase::SectionComplete | Phase::WorkoutComplete => TimerState::Unset,
            },
            sets: self
                .sets
                .iter()
                .map(|sets| {
                    sets.iter()
                        .map(|sets| {
                            sets.iter()
                                .map(|set| OngoingSet {
                                    reps: u32::from(set.reps),
                                    weight: f32::from(set.weight),
                                })
                                .collect()
                        })
                        .collect()
                })
                .collect(),
            rounds: self.rounds.clone(),
        }
    }

    #[must_use]
    pub fn workout(&self) -> &Workout {
        &self.workout
    }

    #[must_use]
    pub fn started(&self) -> DateTime<Utc> {
        self.started
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    #[must_use]
    pub fn time_remaining(&self) -> u32 {
        self.time_remaining
    }

    #[must_use]
    pub fn section_index(&self) -> usize {
        self.section_idx
    }

    #[must_use]
    pub fn exercise_index(&self) -> usize {
        self.exercise_idx
    }

    #[must_use]
    pub fn is_paused(&self) -> bool {
        self.paused
    }

    #[must_use]
    pub fn current_section(&self) -> &Section {
        &self.workout.sections[self.section_idx]
    }

    /// Sets recorded for the current exercise. Empty in circuit sections.
    #[must_use]
    pub fn current_sets(&self) -> &[CompletedSet] {
        &self.sets[self.section_idx][self.exercise_idx]
    }

    /// Full circuit passes completed in the current section.
    #[must_use]
    pub fn completed_rounds(&self) -> u32 {
        self.rounds[self.section_idx]
    }

    pub fn update_set(&mut self, set_idx: usize, field: SetField) {
        if !matches!(
            self.workout.sections[self.section_idx],
            Section::Sets { .. }
        ) {
            debug!("ignoring set update outside a sets section");
            return;
        }
        let Some(set) = self.sets[self.section_idx][self.exercise_idx].get_mut(set_idx) else {
            debug!("ignoring update of nonexistent set {set_idx}");
            return;
        };
        match field {
            SetField::Reps(reps) => set.reps = reps,
            SetField::Weight(weight) => set.weight = weight,
        }
    }

    /// Advances the countdown by one second of elapsed wall-clock time. Must
    /// be called once per second by the host while a circuit section is
    /// active.
    pub fn tick(&mut self) {
        if self.paused || !matches!(self.phase, Phase::Working | Phase::Resting) {
            return;
        }
        let Section::Circuit { exercises, .. } = &self.workout.sections[self.section_idx] else {
            return;
        };

        if self.time_remaining > 0 {
            self.time_remaining -= 1;
        }
        if self.time_remaining > 0 {
            return;
        }

        if self.phase == Phase::Working {
            self.phase = Phase::Resting;
            self.time_remaining = u32::from(exercises[self.exercise_idx].rest);
        } else {
            let next = self.exercise_idx + 1;
            if next < exercises.len() {
                self.exercise_idx = next;
                self.phase = Phase::Working;
                self.time_remaining = u32::from(exercises[next].work);
            } else {
                // The last exercise's rest ran out, the pass is done.
                self.rounds[self.section_idx] += 1;
                self.phase = Phase::SectionComplete;
                self.time_remaining = 0;
            }
        }
    }

    pub fn pause(&mut self) {
        self.paused = true;
    }

    pub fn resume(&mut self) {
        self.paused = false;
    }

    pub fn next_exercise(&mut self) {
        if self.phase == Phase::WorkoutComplete {
            return;
        }
        if self.exercise_idx + 1 < self.workout.sections[self.section_idx].len() {
            self.enter(self.section_idx, self.exercise_idx + 1);
        } else if self.section_idx + 1 < self.workout.sections.len() {
            self.enter(self.section_idx + 1, 0);
        }
    }

    pub fn previous_exercise(&mut self) {
        if self.phase == Phase::WorkoutComplete {
            return;
        }
        if self.exercise_idx > 0 {
            self.enter(self.section_idx, self.exercise_idx - 1);
        } else if self.section_idx > 0 {
            let section_idx = self.section_idx - 1;
            self.enter(section_idx, self.workout.sections[section_idx].len() - 1);
        }
    }

    /// Starts another pass through the current circuit section.
    pub fn add_another_set(&mut self) {
        if self.phase != Phase::SectionComplete {
            debug!("ignoring additional set outside a completed section");
            return;
        }
        let Section::Circuit { exercises, .. } = &self.workout.sections[self.section_idx] else {
            return;
        };
        self.exercise_idx = 0;
        self.time_remaining = u32::from(exercises[0].work);
        self.phase = Phase::Working;
    }

    pub fn advance_section(&mut self) {
        if self.phase != Phase::SectionComplete {
            debug!("ignoring section advance before section completion");
            return;
        }
        if self.section_idx + 1 < self.workout.sections.len() {
            self.enter(self.section_idx + 1, 0);
        } else {
            self.phase = Phase::WorkoutComplete;
            self.time_remaining = 0;
        }
    }

    /// Finalizes the workout, from any phase. The user may end early, in
    /// which case unentered sets keep their default values.
    #[must_use]
    pub fn complete(self) -> CompletedWorkoutRecord {
        let mut records = Vec::new();
        for (section, (sets, rounds)) in
            zip(&self.workout.sections, zip(&self.sets, &self.rounds))
        {
            match section {
                Section::Sets { exercises, .. } => {
                    for (exercise, sets) in zip(exercises, sets) {
                        for set in sets {
                            records.push(CompletedSetRecord {
                                exercise: exercise.name.clone(),
                                muscle_group: exercise.muscle_group,
                                set_number: set.set_number,
                                reps: set.reps,
                                weight: set.weight,
                                target_sets: exercise.target_sets,
                                target_reps: exercise.target_reps,
                                rest: exercise.rest,
                            });
                        }
                    }
                }
                Section::Circuit { exercises, .. } => {
                    for exercise in exercises {
                        for pass in 1..=*rounds {
                            records.push(CompletedSetRecord {
                                exercise: exercise.name.clone(),
                                muscle_group: exercise.muscle_group,
                                set_number: pass,
                                reps: Reps::default(),
                                weight: Weight::default(),
                                target_sets: *rounds,
                                target_reps: Reps::default(),
                                rest: exercise.rest,
                            });
                        }
                    }
                }
            }
        }
        CompletedWorkoutRecord {
            workout_id: self.workout.id,
            date: self.started.date_naive(),
            sets: records,
        }
    }

    fn enter(&mut self, section_idx: usize, exercise_idx: usize) {
        self.section_idx = section_idx;
        self.exercise_idx = exercise_idx;
        match &self.workout.sections[section_idx] {
            Section::Sets { .. } => {
                self.phase = Phase::Idle;
                self.time_remaining = 0;
            }
            Section::Circuit { exercises, .. } => {
                self.phase = Phase::Working;
                self.time_remaining = u32::from(exercises[exercise_idx].work);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use kraft_domain::{MuscleGroup, Name, SetsExercise, Time, TimedExercise};

    use super::*;

    fn sets_workout() -> Workout {
        Workout {
            id: 1.into(),
            name: Name::new("Push Day").unwrap(),
            notes: String::new(),
            sections: vec![Section::Sets {
                name: Name::new("Warmup").unwrap(),
                exercises: vec![
                    SetsExercise {
                        name: Name::new("Push-ups").unwrap(),
                        muscle_group: MuscleGroup::Chest,
                        target_sets: 3,
                        target_reps: Reps::new(10).unwrap(),
                        rest: Time::new(60).unwrap(),
                    },
                    SetsExercise {
                        name: Name::new("Squats").unwrap(),
                        muscle_group: MuscleGroup::Legs,
                        target_sets: 3,
                        target_reps: Reps::new(8).unwrap(),
                        rest: Time::new(60).unwrap(),
                    },
                ],
            }],
        }
    }

    fn circuit_workout() -> Workout {
        Workout {
            id: 2.into(),
            name: Name::new("Conditioning").unwrap(),
            notes: String::new(),
            sections: vec![Section::Circuit {
                name: Name::new("Finisher").unwrap(),
                exercises: vec![
                    TimedExercise {
                        name: Name::new("Burpees").unwrap(),
                        muscle_group: MuscleGroup::FullBody,
                        work: Time::new(20).unwrap(),
                        rest: Time::new(10).unwrap(),
                    },
                    TimedExercise {
                        name: Name::new("Mountain Climbers").unwrap(),
                        muscle_group: MuscleGroup::Core,
                        work: Time::new(15).unwrap(),
                        rest: Time::new(5).unwrap(),
                    },
                ],
            }],
        }
    }

    fn mixed_workout() -> Workout {
        let mut workout = circuit_workout();
        workout.sections.extend(sets_workout().sections);
        workout
    }

    fn tick_n(engine: &mut PlaybackEngine, n: u32) {
        for _ in 0..n {
            engine.tick();
        }
    }

    #[test]
    fn test_start_without_sections() {
        let workout = Workout {
            id: 3.into(),
            name: Name::new("Empty").unwrap(),
            notes: String::new(),
            sections: vec![],
        };
        assert!(matches!(
            PlaybackEngine::start(workout),
            Err(EmptyWorkoutError)
        ));
    }

    #[test]
    fn test_start_with_empty_section() {
        let workout = Workout {
            id: 3.into(),
            name: Name::new("Empty").unwrap(),
            notes: String::new(),
            sections: vec![Section::Sets {
                name: Name::new("Warmup").unwrap(),
                exercises: vec![],
            }],
        };
        assert!(matches!(
            PlaybackEngine::start(workout),
            Err(EmptyWorkoutError)
        ));
    }

    #[rstest]
    #[case(sets_workout(), Phase::Idle, 0)]
    #[case(circuit_workout(), Phase::Working, 20)]
    fn test_start_phase(
        #[case] workout: Workout,
        #[case] phase: Phase,
        #[case] time_remaining: u32,
    ) {
        let engine = PlaybackEngine::start(workout).unwrap();
        assert_eq!(engine.phase(), phase);
        assert_eq!(engine.time_remaining(), time_remaining);
        assert_eq!(engine.section_index(), 0);
        assert_eq!(engine.exercise_index(), 0);
    }

    #[test]
    fn test_start_then_complete() {
        let record = PlaybackEngine::start(sets_workout()).unwrap().complete();
        assert_eq!(record.num_sets(), 6);
        assert!(record.sets.iter().all(|s| s.reps == Reps::default()));

        // Circuit sections contribute one record per completed pass.
        let record = PlaybackEngine::start(circuit_workout()).unwrap().complete();
        assert_eq!(record.num_sets(), 0);
    }

    #[test]
    fn test_recorded_sets() {
        let mut engine = PlaybackEngine::start(sets_workout()).unwrap();
        engine.update_set(0, SetField::Reps(Reps::new(10).unwrap()));
        engine.update_set(0, SetField::Weight(Weight::new(20.0).unwrap()));
        engine.next_exercise();
        engine.update_set(0, SetField::Reps(Reps::new(8).unwrap()));
        let record = engine.complete();

        assert_eq!(record.num_sets(), 6);
        let reps = record
            .sets
            .iter()
            .map(|s| u32::from(s.reps))
            .collect::<Vec<_>>();
        assert_eq!(reps, vec![10, 0, 0, 8, 0, 0]);
        assert_eq!(record.sets[0].weight, Weight::new(20.0).unwrap());
        assert_eq!(record.sets[0].exercise, Name::new("Push-ups").unwrap());
        assert_eq!(record.sets[3].exercise, Name::new("Squats").unwrap());
        assert_eq!(record.sets[3].muscle_group, MuscleGroup::Legs);
    }

    #[test]
    fn test_circuit_transitions() {
        let mut engine = PlaybackEngine::start(circuit_workout()).unwrap();

        tick_n(&mut engine, 20);
        assert_eq!(engine.phase(), Phase::Resting);
        assert_eq!(engine.time_remaining(), 10);

        tick_n(&mut engine, 10);
        assert_eq!(engine.phase(), Phase::Working);
        assert_eq!(engine.exercise_index(), 1);
        assert_eq!(engine.time_remaining(), 15);

        tick_n(&mut engine, 20);
        assert_eq!(engine.phase(), Phase::SectionComplete);
        assert_eq!(engine.completed_rounds(), 1);
    }

    #[test]
    fn test_pause_resume() {
        let mut engine = PlaybackEngine::start(circuit_workout()).unwrap();
        tick_n(&mut engine, 5);
        assert_eq!(engine.time_remaining(), 15);

        engine.pause();
        assert!(engine.is_paused());
        tick_n(&mut engine, 30);
        assert_eq!(engine.phase(), Phase::Working);
        assert_eq!(engine.time_remaining(), 15);

        engine.resume();
        engine.tick();
        assert_eq!(engine.time_remaining(), 14);
    }

    #[test]
    fn test_add_another_set() {
        let mut engine = PlaybackEngine::start(circuit_workout()).unwrap();
        tick_n(&mut engine, 50);
        assert_eq!(engine.phase(), Phase::SectionComplete);

        engine.add_another_set();
        assert_eq!(engine.phase(), Phase::Working);
        assert_eq!(engine.exercise_index(), 0);
        assert_eq!(engine.time_remaining(), 20);
        assert_eq!(engine.completed_rounds(), 1);

        tick_n(&mut engine, 50);
        assert_eq!(engine.completed_rounds(), 2);

        let record = engine.complete();
        assert_eq!(record.num_sets(), 4);
        assert_eq!(record.sets[0].set_number, 1);
        assert_eq!(record.sets[1].set_number, 2);
    }

    #[test]
    fn test_add_another_set_outside_section_complete() {
        let mut engine = PlaybackEngine::start(circuit_workout()).unwrap();
        tick_n(&mut engine, 3);

        engine.add_another_set();
        assert_eq!(engine.phase(), Phase::Working);
        assert_eq!(engine.exercise_index(), 0);
        assert_eq!(engine.time_remaining(), 17);
        assert_eq!(engine.completed_rounds(), 0);
    }

    #[test]
    fn test_navigation_clamps() {
        let mut engine = PlaybackEngine::start(sets_workout()).unwrap();

        engine.previous_exercise();
        assert_eq!(engine.section_index(), 0);
        assert_eq!(engine.exercise_index(), 0);

        engine.next_exercise();
        assert_eq!(engine.exercise_index(), 1);

        engine.next_exercise();
        assert_eq!(engine.section_index(), 0);
        assert_eq!(engine.exercise_index(), 1);
    }

    #[test]
    fn test_navigation_across_sections() {
        let mut engine = PlaybackEngine::start(mixed_workout()).unwrap();

        engine.next_exercise();
        engine.next_exercise();
        assert_eq!(engine.section_index(), 1);
        assert_eq!(engine.exercise_index(), 0);
        assert_eq!(engine.phase(), Phase::Idle);

        engine.previous_exercise();
        assert_eq!(engine.section_index(), 0);
        assert_eq!(engine.exercise_index(), 1);
        assert_eq!(engine.phase(), Phase::Working);
        assert_eq!(engine.time_remaining(), 15);
    }

    #[test]
    fn test_advance_section() {
        let mut engine = PlaybackEngine::start(mixed_workout()).unwrap();
        tick_n(&mut engine, 50);
        assert_eq!(engine.phase(), Phase::SectionComplete);

        engine.advance_section();
        assert_eq!(engine.section_index(), 1);
        assert_eq!(engine.exercise_index(), 0);
        assert_eq!(engine.phase(), Phase::Idle);
    }

    #[test]
    fn test_advance_section_at_last_section() {
        let mut engine = PlaybackEngine::start(circuit_workout()).unwrap();
        tick_n(&mut engine, 50);

        engine.advance_section();
        assert_eq!(engine.phase(), Phase::WorkoutComplete);

        engine.next_exercise();
        assert_eq!(engine.phase(), Phase::WorkoutComplete);
        assert_eq!(engine.section_index(), 0);
    }

    #[test]
    fn test_advance_section_outside_section_complete() {
        let mut engine = PlaybackEngine::start(mixed_workout()).unwrap();
        engine.advance_section();
        assert_eq!(engine.section_index(), 0);
        assert_eq!(engine.phase(), Phase::Working);
    }

    #[test]
    fn test_tick_ignored_in_sets_section() {
        let mut engine = PlaybackEngine::start(sets_workout()).unwrap();
        tick_n(&mut engine, 10);
        assert_eq!(engine.phase(), Phase::Idle);
        assert_eq!(engine.time_remaining(), 0);
    }

    #[test]
    fn test_update_set_ignored_in_circuit_section() {
        let mut engine = PlaybackEngine::start(circuit_workout()).unwrap();
        engine.update_set(0, SetField::Reps(Reps::new(10).unwrap()));
        assert!(engine.current_sets().is_empty());
    }

    #[test]
    fn test_update_set_ignored_for_nonexistent_set() {
        let mut engine = PlaybackEngine::start(sets_workout()).unwrap();
        engine.update_set(3, SetField::Reps(Reps::new(10).unwrap()));
        assert!(
            engine
                .current_sets()
                .iter()
                .all(|s| s.reps == Reps::default())
        );
    }

    #[test]
    fn test_snapshot_restore() {
        let mut engine = PlaybackEngine::start(circuit_workout()).unwrap();
        tick_n(&mut engine, 7);
        engine.pause();

        let ongoing = engine.snapshot();
        assert_eq!(ongoing.workout_id, 2);
        assert_eq!(ongoing.timer_state, TimerState::Paused { time: 13 });

        let restored = PlaybackEngine::restore(circuit_workout(), &ongoing).unwrap();
        assert_eq!(restored.phase(), Phase::Working);
        assert_eq!(restored.time_remaining(), 13);
        assert_eq!(restored.section_index(), 0);
        assert_eq!(restored.exercise_index(), 0);
        assert!(restored.is_paused());
        assert_eq!(restored.started(), engine.started());
    }

    #[test]
    fn test_snapshot_unset_timer_in_sets_section() {
        let engine = PlaybackEngine::start(sets_workout()).unwrap();
        assert_eq!(engine.snapshot().timer_state, TimerState::Unset);
    }

    #[test]
    fn test_restore_keeps_completed_rounds() {
        let mut engine = PlaybackEngine::start(circuit_workout()).unwrap();
        tick_n(&mut engine, 50);
        assert_eq!(engine.completed_rounds(), 1);

        let restored =
            PlaybackEngine::restore(circuit_workout(), &engine.snapshot()).unwrap();
        assert_eq!(restored.phase(), Phase::SectionComplete);
        assert_eq!(restored.completed_rounds(), 1);
        assert_eq!(restored.complete().num_sets(), 2);
    }

    #[test]
    fn test_restore_keeps_recorded_sets() {
        let mut engine = PlaybackEngine::start(sets_workout()).unwrap();
        engine.update_set(0, SetField::Reps(Reps::new(10).unwrap()));
        engine.update_set(0, SetField::Weight(Weight::new(20.0).unwrap()));
        engine.next_exercise();
        engine.update_set(1, SetField::Reps(Reps::new(8).unwrap()));

        let restored = PlaybackEngine::restore(sets_workout(), &engine.snapshot()).unwrap();
        assert_eq!(restored.exercise_index(), 1);
        assert_eq!(
            restored.current_sets()[1],
            CompletedSet {
                set_number: 2,
                reps: Reps::new(8).unwrap(),
                weight: Weight::default(),
            }
        );

        let record = restored.complete();
        assert_eq!(record.sets[0].reps, Reps::new(10).unwrap());
        assert_eq!(record.sets[0].weight, Weight::new(20.0).unwrap());
        assert_eq!(record.sets[4].reps, Reps::new(8).unwrap());
    }

    #[test]
    fn test_restore_ignores_excess_recorded_values() {
        let mut engine = PlaybackEngine::start(sets_workout()).unwrap();
        engine.update_set(0, SetField::Reps(Reps::new(10).unwrap()));
        let mut ongoing = engine.snapshot();
        ongoing.sets[0][0].push(OngoingSet {
            reps: 99,
            weight: 0.0,
        });
        ongoing.rounds.push(5);

        let restored = PlaybackEngine::restore(sets_workout(), &ongoing).unwrap();
        assert_eq!(restored.current_sets().len(), 3);
        assert_eq!(restored.complete().num_sets(), 6);
    }

    #[rstest]
    #[case(0, 0, 2)]
    #[case(0, 5, 6)]
    #[case(5, 0, 6)]
    fn test_zero_durations_consume_one_tick(
        #[case] work: u32,
        #[case] rest: u32,
        #[case] ticks: u32,
    ) {
        let workout = Workout {
            id: 4.into(),
            name: Name::new("Sprint").unwrap(),
            notes: String::new(),
            sections: vec![Section::Circuit {
                name: Name::new("Finisher").unwrap(),
                exercises: vec![TimedExercise {
                    name: Name::new("Burpees").unwrap(),
                    muscle_group: MuscleGroup::FullBody,
                    work: Time::new(work).unwrap(),
                    rest: Time::new(rest).unwrap(),
                }],
            }],
        };
        let mut engine = PlaybackEngine::start(workout).unwrap();
        assert_eq!(engine.phase(), Phase::Working);
        assert_eq!(engine.time_remaining(), work);

        tick_n(&mut engine, ticks - 1);
        assert_ne!(engine.phase(), Phase::SectionComplete);

        engine.tick();
        assert_eq!(engine.phase(), Phase::SectionComplete);
        assert_eq!(engine.completed_rounds(), 1);
    }
}
