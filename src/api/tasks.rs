use super::{ApiClient, ApiError};
use crate::libs::panel::Resource;
use crate::libs::task::{NewTask, Task, TaskFilter};

/// The `/tasks/` collection.
#[derive(Debug, Clone, Copy)]
pub struct Tasks;

impl Resource for Tasks {
    type Item = Task;
    type Draft = NewTask;
    type Filter = TaskFilter;

    const COLLECTION: &'static str = "/tasks/";
}

impl Tasks {
    pub fn complete_path(id: i64) -> String {
        format!("{}/complete", Self::item_path(id))
    }
}

impl ApiClient {
    /// `POST /tasks/{id}/complete`. Completing twice is harmless.
    pub async fn complete_task(&self, id: i64) -> Result<(), ApiError> {
        self.post_empty(&Tasks::complete_path(id)).await?;
        Ok(())
    }
}
