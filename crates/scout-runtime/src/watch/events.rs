use scout_types::{ProjectId, ProjectRecord};

/// Notifications pushed from project watches to the subscriber.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WatchEvent {
    /// The marker directory of this project was created, removed or modified.
    /// Consumers should re-scan rather than trust the carried record.
    ProjectChanged(ProjectRecord),

    /// The watch backend reported an error for this project.
    Error {
        project_id: ProjectId,
        message: String,
    },
}

impl WatchEvent {
    pub fn project_id(&self) -> &ProjectId {
        match self {
            WatchEvent::ProjectChanged(project) => &project.id,
            WatchEvent::Error { project_id, .. } => project_id,
        }
    }
}
