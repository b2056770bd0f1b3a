//! The four demonstration projects shown on the dashboard.

use chrono::NaiveDate;

use bnx_core::entities::ResearchProject;
use bnx_core::enums::{Category, ProjectStatus};

struct ProjectRow {
    id: &'static str,
    title: &'static str,
    description: &'static str,
    category: Category,
    status: ProjectStatus,
    completion: (i32, u32, u32),
    sample_size: u32,
}

const PROJECTS: [ProjectRow; 4] = [
    ProjectRow {
        id: "gen-001",
        title: "Analyse génétique - Cohorte A",
        description: "Étude des mutations BRCA1/BRCA2 sur une cohorte de 12 000 patients européens",
        category: Category::Genetic,
        status: ProjectStatus::Completed,
        completion: (2024, 12, 15),
        sample_size: 12000,
    },
    ProjectRow {
        id: "ther-045",
        title: "Simulation thérapeutique - Essai 45",
        description: "Efficacité du protocole XR-451 sur les tumeurs pancréatiques",
        category: Category::Therapeutic,
        status: ProjectStatus::Completed,
        completion: (2024, 11, 28),
        sample_size: 847,
    },
    ProjectRow {
        id: "cell-x01",
        title: "Modélisation cellulaire - Sujet X",
        description: "Comportement des cellules souches dans un environnement hypoxique",
        category: Category::Cellular,
        status: ProjectStatus::InProgress,
        completion: (2024, 12, 20),
        sample_size: 2400,
    },
    ProjectRow {
        id: "bio-789",
        title: "Analyse biochimique - Protéines Tau",
        description: "Quantification des agrégats de protéines Tau chez les patients Alzheimer",
        category: Category::Biochemical,
        status: ProjectStatus::Completed,
        completion: (2024, 10, 12),
        sample_size: 567,
    },
];

pub(crate) fn all() -> Vec<ResearchProject> {
    PROJECTS.iter().filter_map(to_project).collect()
}

pub(crate) fn find(id: &str) -> Option<ResearchProject> {
    PROJECTS.iter().find(|row| row.id == id).and_then(to_project)
}

fn to_project(row: &ProjectRow) -> Option<ResearchProject> {
    let (year, month, day) = row.completion;
    Some(ResearchProject {
        id: row.id.to_string(),
        title: row.title.to_string(),
        description: row.description.to_string(),
        category: row.category,
        status: row.status,
        completion_date: NaiveDate::from_ymd_opt(year, month, day)?,
        sample_size: row.sample_size,
    })
}
