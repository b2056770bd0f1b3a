use serde::Serialize;

use bnx_core::entities::ResearchProject;
use bnx_core::format::{date_fr, group_thousands};

/// One dashboard card, with labels and numbers formatted for display.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct ProjectCard {
    pub id: String,
    pub title: String,
    pub category: &'static str,
    /// Icon name shown next to the category.
    pub icon: &'static str,
    pub status: &'static str,
    pub completion_date: String,
    pub samples: String,
}

impl From<&ResearchProject> for ProjectCard {
    fn from(project: &ResearchProject) -> Self {
        Self {
            id: project.id.clone(),
            title: project.title.clone(),
            category: project.category.label(),
            icon: project.category.icon(),
            status: project.status.label(),
            completion_date: date_fr(project.completion_date),
            samples: group_thousands(u64::from(project.sample_size)),
        }
    }
}
