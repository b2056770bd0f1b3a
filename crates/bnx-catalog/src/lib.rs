//! # bnx-catalog
//!
//! Static reference data for the BioNext portal: the research projects, the
//! analysis attached to each one, and its chart specs.
//!
//! Analyses and charts are pure functions of the project id. An id with no
//! dataset is handled by the configured [`MissPolicy`]: fall back to the
//! default (`gen-001`) dataset with a warning, or fail with
//! [`CoreError::NotFound`].

mod analyses;
mod charts;
mod projects;

use chrono::{DateTime, Utc};
use serde::Serialize;

use bnx_config::MissPolicy;
use bnx_core::entities::{AnalysisResult, ChartSpec, Report, ResearchProject};
use bnx_core::enums::ProjectStatus;
use bnx_core::errors::CoreError;

/// Dataset templates. One per known project id.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Dataset {
    Genetic,
    Therapeutic,
    Cellular,
    Biochemical,
}

impl Dataset {
    /// Used when an id has no entry and the policy allows a fallback.
    pub(crate) const DEFAULT: Self = Self::Genetic;

    pub(crate) fn for_id(id: &str) -> Option<Self> {
        match id {
            "gen-001" => Some(Self::Genetic),
            "ther-045" => Some(Self::Therapeutic),
            "cell-x01" => Some(Self::Cellular),
            "bio-789" => Some(Self::Biochemical),
            _ => None,
        }
    }
}

/// Counters shown under the dashboard project grid.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct DashboardStats {
    pub total_projects: usize,
    pub completed: usize,
    pub in_progress: usize,
    pub total_samples: u64,
}

/// Read-only lookups over the static catalog.
#[derive(Debug, Clone, Copy, Default)]
pub struct Catalog {
    policy: MissPolicy,
}

impl Catalog {
    #[must_use]
    pub const fn new(policy: MissPolicy) -> Self {
        Self { policy }
    }

    #[must_use]
    pub const fn policy(&self) -> MissPolicy {
        self.policy
    }

    /// All projects in dashboard order.
    #[must_use]
    pub fn projects(&self) -> Vec<ResearchProject> {
        projects::all()
    }

    /// Look up a project. Unknown ids are always an error: there is nothing to show.
    pub fn project(&self, id: &str) -> Result<ResearchProject, CoreError> {
        projects::find(id).ok_or_else(|| CoreError::not_found("project", id))
    }

    /// Analysis for `project`, subject to the miss policy.
    pub fn analysis(&self, project: &ResearchProject) -> Result<AnalysisResult, CoreError> {
        self.dataset(&project.id, "analysis")
            .map(|dataset| analyses::analysis(dataset, project))
    }

    /// Chart specs for `project`, subject to the miss policy.
    pub fn charts(&self, project: &ResearchProject) -> Result<Vec<ChartSpec>, CoreError> {
        self.dataset(&project.id, "charts").map(charts::charts)
    }

    /// Analysis for `project`, falling back to the default dataset regardless of policy.
    #[must_use]
    pub fn analysis_or_default(project: &ResearchProject) -> AnalysisResult {
        analyses::analysis(
            Dataset::for_id(&project.id).unwrap_or(Dataset::DEFAULT),
            project,
        )
    }

    /// Chart specs for `project`, falling back to the default dataset regardless of policy.
    #[must_use]
    pub fn charts_or_default(project: &ResearchProject) -> Vec<ChartSpec> {
        charts::charts(Dataset::for_id(&project.id).unwrap_or(Dataset::DEFAULT))
    }

    /// Assemble the report shown when a project is opened.
    pub fn report(
        &self,
        project_id: &str,
        generated_at: DateTime<Utc>,
    ) -> Result<Report, CoreError> {
        let project = self.project(project_id)?;
        let analysis = self.analysis(&project)?;
        let charts = self.charts(&project)?;
        Ok(Report {
            project,
            analysis,
            charts,
            generated_at,
        })
    }

    #[must_use]
    pub fn stats(&self) -> DashboardStats {
        let projects = self.projects();
        DashboardStats {
            total_projects: projects.len(),
            completed: count_status(&projects, ProjectStatus::Completed),
            in_progress: count_status(&projects, ProjectStatus::InProgress),
            total_samples: projects.iter().map(|p| u64::from(p.sample_size)).sum(),
        }
    }

    fn dataset(&self, id: &str, what: &str) -> Result<Dataset, CoreError> {
        if let Some(dataset) = Dataset::for_id(id) {
            return Ok(dataset);
        }
        match self.policy {
            MissPolicy::Fallback => {
                tracing::warn!(project_id = id, what, "no dataset for project; using default");
                Ok(Dataset::DEFAULT)
            }
            MissPolicy::Error => Err(CoreError::not_found(what, id)),
        }
    }
}

fn count_status(projects: &[ResearchProject], status: ProjectStatus) -> usize {
    projects.iter().filter(|p| p.status == status).count()
}
