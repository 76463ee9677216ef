use log::{debug, error};

use crate::{
    CompletedWorkoutRecord, CreateError, DeleteError, Name, ReadError, Section, SessionContext,
    SessionRepository, Workout, WorkoutID, WorkoutLogRepository, WorkoutRepository,
};

#[allow(async_fn_in_trait)]
pub trait WorkoutService {
    async fn get_workouts(&self) -> Result<Vec<Workout>, ReadError>;
    async fn get_workout(&self, id: WorkoutID) -> Result<Workout, ReadError>;
    async fn create_workout(
        &self,
        name: Name,
        sections: Vec<Section>,
    ) -> Result<Workout, CreateError>;
    async fn delete_workout(&self, id: WorkoutID) -> Result<WorkoutID, DeleteError>;
}

#[allow(async_fn_in_trait)]
pub trait WorkoutLogService {
    async fn store_completed_workout(
        &self,
        session: &SessionContext,
        record: CompletedWorkoutRecord,
    ) -> Result<CompletedWorkoutRecord, CreateError>;
}

#[allow(async_fn_in_trait)]
pub trait SessionService {
    async fn get_session(&self) -> Result<SessionContext, ReadError>;
}

pub struct Service<R> {
    repository: R,
}

impl<R> Service<R> {
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

macro_rules! log_on_error {
    ($func: expr, $error: ident, $action: literal, $entity: literal) => {{
        let result = $func.await;
        match result {
            Ok(_) => {}
            Err(ref err) => match err {
                $error::Storage(crate::StorageError::NoConnection) => {
                    debug!("failed to {} {}: {err}", $action, $entity);
                }
                _ => {
                    error!("failed to {} {}: {err}", $action, $entity);
                }
            },
        }
        result
    }};
}

impl<R: WorkoutRepository> WorkoutService for Service<R> {
    async fn get_workouts(&self) -> Result<Vec<Workout>, ReadError> {
        log_on_error!(self.repository.read_workouts(), ReadError, "get", "workouts")
    }

    async fn get_workout(&self, id: WorkoutID) -> Result<Workout, ReadError> {
        let workouts = self.get_workouts().await?;
        workouts
            .into_iter()
            .find(|w| w.id == id)
            .ok_or(ReadError::NotFound)
    }

    async fn create_workout(
        &self,
        name: Name,
        sections: Vec<Section>,
    ) -> Result<Workout, CreateError> {
        log_on_error!(
            self.repository.create_workout(name, sections),
            CreateError,
            "create",
            "workout"
        )
    }

    async fn delete_workout(&self, id: WorkoutID) -> Result<WorkoutID, DeleteError> {
        log_on_error!(
            self.repository.delete_workout(id),
            DeleteError,
            "delete",
            "workout"
        )
    }
}

impl<R: WorkoutLogRepository> WorkoutLogService for Service<R> {
    // Failures are reported, never retried. Whether to call again is the
    // caller's decision.
    async fn store_completed_workout(
        &self,
        session: &SessionContext,
        record: CompletedWorkoutRecord,
    ) -> Result<CompletedWorkoutRecord, CreateError> {
        log_on_error!(
            self.repository.store_completed_workout(session, record),
            CreateError,
            "store",
            "completed workout"
        )
    }
}

impl<R: SessionRepository> SessionService for Service<R> {
    async fn get_session(&self) -> Result<SessionContext, ReadError> {
        log_on_error!(
            self.repository.current_session(),
            ReadError,
            "get",
            "session"
        )
    }
}
