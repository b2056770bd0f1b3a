//! Chart specs per dataset.

use bnx_core::color::Color;
use bnx_core::entities::{ChartSpec, Series, SeriesData, SeriesFill, XyPoint};
use bnx_core::enums::ChartKind;

use crate::Dataset;

const BLUE: Color = Color::hex(0x2563EB);
const TEAL: Color = Color::hex(0x0D9488);
const EMERALD: Color = Color::hex(0x059669);
const RED: Color = Color::hex(0xDC2626);
const VIOLET: Color = Color::hex(0x7C3AED);
const AMBER: Color = Color::hex(0xF59E0B);

fn labels(items: &[&str]) -> Vec<String> {
    items.iter().map(|item| (*item).to_string()).collect()
}

fn values_series(label: &str, values: &[f64], fill: SeriesFill) -> Series {
    Series {
        label: label.to_string(),
        data: SeriesData::Values(values.to_vec()),
        fill,
        border: None,
    }
}

fn line_series(label: &str, values: &[f64], color: Color) -> Series {
    Series {
        border: Some(color),
        ..values_series(label, values, SeriesFill::Uniform(color.with_alpha(0.1)))
    }
}

pub(crate) fn charts(dataset: Dataset) -> Vec<ChartSpec> {
    match dataset {
        Dataset::Genetic => vec![
            ChartSpec {
                kind: ChartKind::Pie,
                title: "Répartition des mutations génétiques".to_string(),
                labels: labels(&["BRCA1 Mutant", "BRCA2 Mutant", "Double Mutation", "Wild Type"]),
                series: vec![values_series(
                    "Patients",
                    &[2160.0, 1440.0, 240.0, 8160.0],
                    SeriesFill::PerPoint(vec![
                        Color::hex(0xEF4444),
                        Color::hex(0xF97316),
                        Color::hex(0xEAB308),
                        Color::hex(0x10B981),
                    ]),
                )],
                axis_titles: None,
            },
            ChartSpec {
                kind: ChartKind::Bar,
                title: "Prévalence par origine géographique".to_string(),
                labels: labels(&["Nord-Européenne", "Sud-Européenne", "Méditerranéenne", "Autre"]),
                series: vec![
                    values_series(
                        "Mutations BRCA1 (%)",
                        &[23.0, 15.0, 18.0, 12.0],
                        SeriesFill::Uniform(BLUE),
                    ),
                    values_series(
                        "Mutations BRCA2 (%)",
                        &[14.0, 11.0, 13.0, 9.0],
                        SeriesFill::Uniform(TEAL),
                    ),
                ],
                axis_titles: None,
            },
        ],
        Dataset::Therapeutic => vec![
            ChartSpec {
                kind: ChartKind::Bar,
                title: "Efficacité thérapeutique (XR-451 vs Contrôle)".to_string(),
                labels: labels(&[
                    "Réponse Complète",
                    "Réponse Partielle",
                    "Maladie Stable",
                    "Progression",
                ]),
                series: vec![
                    values_series(
                        "XR-451 (%)",
                        &[12.0, 22.0, 31.0, 35.0],
                        SeriesFill::Uniform(EMERALD),
                    ),
                    values_series(
                        "Contrôle (%)",
                        &[3.0, 9.0, 26.0, 62.0],
                        SeriesFill::Uniform(RED),
                    ),
                ],
                axis_titles: None,
            },
            ChartSpec {
                kind: ChartKind::Line,
                title: "Survie sans progression".to_string(),
                labels: labels(&["0", "2", "4", "6", "8", "10", "12", "14", "16"]),
                series: vec![
                    line_series(
                        "XR-451",
                        &[100.0, 89.0, 78.0, 67.0, 50.0, 38.0, 24.0, 15.0, 8.0],
                        EMERALD,
                    ),
                    line_series(
                        "Contrôle",
                        &[100.0, 76.0, 52.0, 31.0, 18.0, 9.0, 4.0, 2.0, 1.0],
                        RED,
                    ),
                ],
                axis_titles: None,
            },
        ],
        Dataset::Cellular => vec![
            ChartSpec {
                kind: ChartKind::Bar,
                title: "Viabilité cellulaire par condition".to_string(),
                labels: labels(&[
                    "Normoxie (21% O₂)",
                    "Hypoxie Modérée (5% O₂)",
                    "Hypoxie Sévère (1% O₂)",
                    "Anoxie (0% O₂)",
                ]),
                series: vec![values_series(
                    "Viabilité (%)",
                    &[98.0, 95.0, 87.0, 32.0],
                    SeriesFill::PerPoint(vec![
                        Color::hex(0x10B981),
                        EMERALD,
                        AMBER,
                        Color::hex(0xEF4444),
                    ]),
                )],
                axis_titles: None,
            },
            ChartSpec {
                kind: ChartKind::Line,
                title: "Expression HIF-1α dans le temps".to_string(),
                labels: labels(&["0h", "2h", "6h", "12h", "24h", "48h", "72h"]),
                series: vec![line_series(
                    "Expression relative",
                    &[1.0, 2.1, 4.8, 8.2, 12.5, 15.3, 17.1],
                    VIOLET,
                )],
                axis_titles: None,
            },
        ],
        Dataset::Biochemical => vec![
            ChartSpec {
                kind: ChartKind::Bar,
                title: "Concentration de protéines Tau".to_string(),
                labels: labels(&[
                    "Témoins sains",
                    "MCI",
                    "Alzheimer léger",
                    "Alzheimer modéré",
                    "Alzheimer sévère",
                ]),
                series: vec![
                    values_series(
                        "Tau total (pg/mL)",
                        &[45.0, 78.0, 156.0, 287.0, 423.0],
                        SeriesFill::Uniform(BLUE),
                    ),
                    values_series(
                        "Tau phosphorylée (pg/mL)",
                        &[12.0, 28.0, 67.0, 134.0, 198.0],
                        SeriesFill::Uniform(RED),
                    ),
                ],
                axis_titles: None,
            },
            ChartSpec {
                kind: ChartKind::Scatter,
                title: "Corrélation Tau-P vs Score MMSE".to_string(),
                labels: labels(&["Corrélation"]),
                series: vec![Series {
                    label: "Patients".to_string(),
                    data: SeriesData::Points(
                        [
                            (30.0, 15.0),
                            (28.0, 22.0),
                            (25.0, 35.0),
                            (22.0, 48.0),
                            (20.0, 67.0),
                            (17.0, 89.0),
                            (15.0, 112.0),
                            (12.0, 145.0),
                            (10.0, 167.0),
                            (8.0, 189.0),
                            (5.0, 198.0),
                        ]
                        .into_iter()
                        .map(|(x, y)| XyPoint { x, y })
                        .collect(),
                    ),
                    fill: SeriesFill::Uniform(AMBER),
                    border: None,
                }],
                axis_titles: Some((
                    "Score MMSE".to_string(),
                    "Tau phosphorylée (pg/mL)".to_string(),
                )),
            },
        ],
    }
}
