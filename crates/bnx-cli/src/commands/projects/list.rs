use bnx_catalog::Catalog;
use bnx_config::BnxConfig;
use bnx_core::entities::ResearchProject;
use bnx_core::enums::{Category, ProjectStatus};

use super::ProjectCard;
use crate::cli::GlobalFlags;
use crate::commands::shared::limit::effective_limit;
use crate::commands::shared::parse::parse_enum;
use crate::output::output;

pub fn run(
    status: Option<&str>,
    category: Option<&str>,
    limit: Option<u32>,
    catalog: &Catalog,
    config: &BnxConfig,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let status = status
        .map(|value| parse_enum::<ProjectStatus>(value, "status"))
        .transpose()?;
    let category = category
        .map(|value| parse_enum::<Category>(value, "category"))
        .transpose()?;
    let limit = effective_limit(limit, flags.limit, config.general.default_limit);

    let cards = filter_projects(&catalog.projects(), status, category, limit);
    output(&cards, flags.format)
}

fn filter_projects(
    projects: &[ResearchProject],
    status: Option<ProjectStatus>,
    category: Option<Category>,
    limit: u32,
) -> Vec<ProjectCard> {
    projects
        .iter()
        .filter(|project| status.is_none_or(|status| project.status == status))
        .filter(|project| category.is_none_or(|category| project.category == category))
        .take(usize::try_from(limit).unwrap_or(usize::MAX))
        .map(ProjectCard::from)
        .collect()
}
