//! Analysis text per dataset. Summaries interpolate the project's sample size.

use bnx_core::entities::{AnalysisResult, ResearchProject};
use bnx_core::format::group_thousands;

use crate::Dataset;

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|item| (*item).to_string()).collect()
}

pub(crate) fn analysis(dataset: Dataset, project: &ResearchProject) -> AnalysisResult {
    let samples = project.sample_size;
    match dataset {
        Dataset::Genetic => AnalysisResult {
            summary: format!(
                "L'analyse génétique de la cohorte A a révélé des mutations significatives sur les gènes BRCA1 et BRCA2. \
                 Sur les {} échantillons analysés, 18% présentaient une mutation pathogène sur BRCA1, principalement chez \
                 les patients d'origine nord-européenne (23%), tandis que 12% montraient des variations sur BRCA2. Ces \
                 résultats confirment la prévalence élevée de ces mutations dans notre population d'étude et suggèrent \
                 une corrélation géographique importante.",
                group_thousands(u64::from(samples))
            ),
            key_findings: strings(&[
                "Mutation BRCA1 détectée chez 18% des patients",
                "Mutation BRCA2 présente chez 12% de la cohorte",
                "Prévalence plus élevée chez les patients nord-européens (23%)",
                "Corrélation significative avec l'âge d'apparition des symptômes",
                "Identification de 3 nouvelles variantes de signification incertaine",
            ]),
            statistical_significance: 0.001,
            confidence_level: 95.0,
            methodology: "Séquençage nouvelle génération (NGS) avec validation par PCR quantitative"
                .to_string(),
            limitations: strings(&[
                "Biais de sélection géographique",
                "Données manquantes pour 2.3% des échantillons",
                "Suivi clinique limité à 5 ans",
            ]),
        },
        Dataset::Therapeutic => AnalysisResult {
            summary: format!(
                "L'essai thérapeutique du protocole XR-451 sur {samples} patients atteints de tumeurs pancréatiques a \
                 montré une efficacité prometteuse. Le taux de réponse objective était de 34%, avec une survie sans \
                 progression médiane de 8.2 mois comparée à 4.1 mois pour le groupe contrôle. Les effets secondaires \
                 de grade 3-4 ont été observés chez 28% des patients, principalement des troubles gastro-intestinaux \
                 et une fatigue sévère."
            ),
            key_findings: strings(&[
                "Taux de réponse objective de 34% vs 12% (contrôle)",
                "Survie sans progression: 8.2 mois vs 4.1 mois",
                "Réduction tumorale ≥50% chez 67 patients",
                "Amélioration de la qualité de vie dans 78% des cas",
                "Biomarqueur prédictif identifié (p53 mutant)",
            ]),
            statistical_significance: 0.0001,
            confidence_level: 99.0,
            methodology: "Essai randomisé contrôlé en double aveugle, phase III".to_string(),
            limitations: strings(&[
                "Population majoritairement caucasienne",
                "Durée de suivi encore limitée",
                "Coût élevé du traitement",
            ]),
        },
        Dataset::Cellular => AnalysisResult {
            summary: format!(
                "L'étude de modélisation cellulaire en cours examine le comportement de {samples} cultures de cellules \
                 souches en conditions hypoxiques. Les résultats préliminaires montrent une adaptation métabolique \
                 remarquable avec une activation des voies HIF-1α dans 89% des cultures. La prolifération cellulaire \
                 est réduite de 40% mais la viabilité reste stable, suggérant un mécanisme de préservation \
                 énergétique sophistiqué."
            ),
            key_findings: strings(&[
                "Activation HIF-1α dans 89% des cultures",
                "Réduction de 40% de la prolifération cellulaire",
                "Maintien de la viabilité cellulaire (>95%)",
                "Shift métabolique vers la glycolyse anaérobie",
                "Expression accrue des gènes de survie cellulaire",
            ]),
            statistical_significance: 0.005,
            confidence_level: 95.0,
            methodology: "Culture cellulaire 3D avec analyse transcriptomique et protéomique"
                .to_string(),
            limitations: strings(&[
                "Modèle in vitro uniquement",
                "Étude en cours - données partielles",
                "Variabilité inter-lignées cellulaires",
            ]),
        },
        Dataset::Biochemical => AnalysisResult {
            summary: format!(
                "L'analyse biochimique des protéines Tau chez {samples} patients Alzheimer a révélé des niveaux \
                 d'agrégation significativement élevés comparés aux contrôles sains. La concentration moyenne de Tau \
                 phosphorylée était 4.2 fois supérieure chez les patients (p<0.001), avec une corrélation forte avec \
                 le score MMSE (r=-0.78). Les isoformes 3R et 4R montrent des patterns de distribution distincts selon \
                 le stade de la maladie."
            ),
            key_findings: strings(&[
                "Concentration Tau-P 4.2x supérieure chez les patients",
                "Corrélation négative forte avec MMSE (r=-0.78)",
                "Ratio 3R/4R altéré dans 92% des cas",
                "Détection précoce possible 18 mois avant symptômes",
                "Variation régionale dans la distribution des agrégats",
            ]),
            statistical_significance: 0.0001,
            confidence_level: 99.0,
            methodology: "Spectrométrie de masse haute résolution et immunohistochimie".to_string(),
            limitations: strings(&[
                "Échantillon de taille modérée",
                "Manque de données longitudinales",
                "Hétérogénéité des stades cliniques",
            ]),
        },
    }
}
