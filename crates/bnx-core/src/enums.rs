//! Category, status, chart kind, and screen enums for BioNext.
//!
//! Project-facing enums serialize in `kebab-case` (`in-progress`) to match the
//! catalog identifiers. Each carries its static display lookups (French label,
//! badge colour) so callers never switch on raw strings.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

// ---------------------------------------------------------------------------
// Badge
// ---------------------------------------------------------------------------

/// Badge colour family used by the dashboard for categories and statuses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum Badge {
    Red,
    Green,
    Purple,
    Orange,
    Yellow,
    Gray,
    Blue,
}

impl Badge {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Red => "red",
            Self::Green => "green",
            Self::Purple => "purple",
            Self::Orange => "orange",
            Self::Yellow => "yellow",
            Self::Gray => "gray",
            Self::Blue => "blue",
        }
    }

    /// ANSI foreground code used when tables are coloured.
    #[must_use]
    pub const fn ansi_code(self) -> &'static str {
        match self {
            Self::Red => "31",
            Self::Green => "32",
            Self::Yellow | Self::Orange => "33",
            Self::Blue => "34",
            Self::Purple => "35",
            Self::Gray => "90",
        }
    }
}

impl fmt::Display for Badge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Category
// ---------------------------------------------------------------------------

/// Research domain of a project.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "kebab-case")]
pub enum Category {
    Genetic,
    Therapeutic,
    Cellular,
    Biochemical,
}

impl Category {
    pub const ALL: [Self; 4] = [
        Self::Genetic,
        Self::Therapeutic,
        Self::Cellular,
        Self::Biochemical,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Genetic => "genetic",
            Self::Therapeutic => "therapeutic",
            Self::Cellular => "cellular",
            Self::Biochemical => "biochemical",
        }
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Genetic => "Génétique",
            Self::Therapeutic => "Thérapeutique",
            Self::Cellular => "Cellulaire",
            Self::Biochemical => "Biochimique",
        }
    }

    #[must_use]
    pub const fn badge(self) -> Badge {
        match self {
            Self::Genetic => Badge::Red,
            Self::Therapeutic => Badge::Green,
            Self::Cellular => Badge::Purple,
            Self::Biochemical => Badge::Orange,
        }
    }

    /// Dashboard icon name.
    #[must_use]
    pub const fn icon(self) -> &'static str {
        match self {
            Self::Genetic => "dna",
            Self::Therapeutic => "pill",
            Self::Cellular => "activity",
            Self::Biochemical => "flask-conical",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// ProjectStatus
// ---------------------------------------------------------------------------

/// Progress of a research project.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "kebab-case")]
pub enum ProjectStatus {
    Completed,
    InProgress,
    Pending,
}

impl ProjectStatus {
    pub const ALL: [Self; 3] = [Self::Completed, Self::InProgress, Self::Pending];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Completed => "completed",
            Self::InProgress => "in-progress",
            Self::Pending => "pending",
        }
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Completed => "Terminé",
            Self::InProgress => "En cours",
            Self::Pending => "En attente",
        }
    }

    #[must_use]
    pub const fn badge(self) -> Badge {
        match self {
            Self::Completed => Badge::Green,
            Self::InProgress => Badge::Yellow,
            Self::Pending => Badge::Gray,
        }
    }
}

impl fmt::Display for ProjectStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// ChartKind
// ---------------------------------------------------------------------------

/// Visualization selected by a chart spec.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum ChartKind {
    Bar,
    Line,
    Pie,
    Scatter,
}

impl ChartKind {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Bar => "bar",
            Self::Line => "line",
            Self::Pie => "pie",
            Self::Scatter => "scatter",
        }
    }
}

impl fmt::Display for ChartKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// ScreenKind
// ---------------------------------------------------------------------------

/// The three screens of the portal.
///
/// ```text
/// login → dashboard → report
///           ↑   ↓       │
///           └── back ───┘
/// dashboard | report → login (logout)
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum ScreenKind {
    Login,
    Dashboard,
    Report,
}

impl ScreenKind {
    /// Valid next screens from the current one.
    #[must_use]
    #[allow(clippy::match_same_arms)]
    pub const fn allowed_next_states(self) -> &'static [Self] {
        match self {
            Self::Login => &[Self::Dashboard],
            Self::Dashboard => &[Self::Report, Self::Login],
            Self::Report => &[Self::Dashboard, Self::Login],
        }
    }

    /// Check whether moving to `next` is allowed.
    #[must_use]
    pub fn can_transition_to(self, next: Self) -> bool {
        self.allowed_next_states().contains(&next)
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Login => "login",
            Self::Dashboard => "dashboard",
            Self::Report => "report",
        }
    }
}

impl fmt::Display for ScreenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_serializes_kebab_case() {
        let json = serde_json::to_string(&ProjectStatus::InProgress).unwrap();
        assert_eq!(json, "\"in-progress\"");
        let back: ProjectStatus = serde_json::from_str("\"in-progress\"").unwrap();
        assert_eq!(back, ProjectStatus::InProgress);
    }

    #[test]
    fn status_labels_match_dashboard() {
        assert_eq!(ProjectStatus::Completed.label(), "Terminé");
        assert_eq!(ProjectStatus::InProgress.label(), "En cours");
        assert_eq!(ProjectStatus::Pending.label(), "En attente");
    }

    #[test]
    fn every_category_has_distinct_badge() {
        let badges: std::collections::HashSet<Badge> =
            Category::ALL.iter().map(|c| c.badge()).collect();
        assert_eq!(badges.len(), 4);
    }

    #[test]
    fn login_only_leads_to_dashboard() {
        assert!(ScreenKind::Login.can_transition_to(ScreenKind::Dashboard));
        assert!(!ScreenKind::Login.can_transition_to(ScreenKind::Report));
        assert!(!ScreenKind::Login.can_transition_to(ScreenKind::Login));
    }

    #[test]
    fn report_returns_to_dashboard_or_login() {
        assert!(ScreenKind::Report.can_transition_to(ScreenKind::Dashboard));
        assert!(ScreenKind::Report.can_transition_to(ScreenKind::Login));
        assert!(!ScreenKind::Report.can_transition_to(ScreenKind::Report));
    }
}
