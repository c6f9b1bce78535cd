//! The fixed battery of charts produced for one algorithm.

use std::collections::HashSet;
use std::fmt;

use crate::stats::{Metric, ScenarioGroup, StatsTable};

use super::figure::{Figure, Marker};
use super::format::capitalize;
use super::palette::ScenarioPalette;
use super::render::ImageFormat;
use super::template::{Annotator, OverlayTemplate, Reference};
use super::theme::ChartTheme;

/// What a chart shows. The suffix ends the artifact's file name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChartKind {
    /// 2x3 figure for a single scenario.
    Individual,
    TimeComparison,
    ComparisonsComparison,
    Consistency,
    ComparisonEfficiency,
    SwapsPerElement,
    SwapsComparison,
    Complexity,
    /// 2x2 figure combining time, efficiency and consistency.
    Summary,
}

impl ChartKind {
    /// Kinds produced once per algorithm, in output order.
    pub const ALGORITHM_WIDE: [Self; 8] = [
        Self::TimeComparison,
        Self::ComparisonsComparison,
        Self::Consistency,
        Self::ComparisonEfficiency,
        Self::SwapsPerElement,
        Self::SwapsComparison,
        Self::Complexity,
        Self::Summary,
    ];

    #[must_use]
    pub const fn suffix(self) -> &'static str {
        match self {
            Self::Individual => "individual",
            Self::TimeComparison => "comparacao_tempo_cenarios",
            Self::ComparisonsComparison => "comparacao_comparacoes",
            Self::Consistency => "consistencia_cenarios",
            Self::ComparisonEfficiency => "eficiencia_comparacoes",
            Self::SwapsPerElement => "trocas_por_elemento",
            Self::SwapsComparison => "comparacao_trocas_cenarios",
            Self::Complexity => "analise_complexidade",
            Self::Summary => "resumo_geral",
        }
    }
}

impl fmt::Display for ChartKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.suffix())
    }
}

/// A chart ready to be written.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartArtifact {
    pub kind: ChartKind,
    /// Set for per-scenario charts.
    pub scenario: Option<String>,
    /// File name without extension.
    pub file_stem: String,
    pub figure: Figure,
}

impl ChartArtifact {
    #[must_use]
    pub fn file_name(&self, format: ImageFormat) -> String {
        format!("{}.{}", self.file_stem, format.extension())
    }
}

/// The algorithm a battery is drawn for.
#[derive(Debug, Clone, Copy)]
pub struct ChartSubject<'a> {
    /// Configuration key, used as file name prefix.
    pub slug: &'a str,
    /// Name shown in titles, e.g. "Shell Sort".
    pub display_name: &'a str,
    pub palette: &'a ScenarioPalette,
}

/// Replace characters that are unsafe in file names with `_`.
#[must_use]
pub fn sanitize_file_component(name: &str) -> String {
    name.chars()
        .map(|c| {
            if c.is_alphanumeric() || c == '-' || c == '_' {
                c
            } else {
                '_'
            }
        })
        .collect()
}

/// File-name components for scenarios, in the given order.
///
/// A name that collides with an earlier one after sanitizing gets `_2`, `_3`
/// and so on.
#[must_use]
pub fn scenario_file_stems(scenarios: &[&str]) -> Vec<String> {
    let mut taken = HashSet::new();
    scenarios
        .iter()
        .map(|scenario| {
            let base = sanitize_file_component(scenario);
            let mut stem = base.clone();
            let mut n = 2;
            while !taken.insert(stem.clone()) {
                stem = format!("{base}_{n}");
                n += 1;
            }
            stem
        })
        .collect()
}

const fn pixels([w, h]: [u32; 2]) -> (u32, u32) {
    (w, h)
}

/// Plan every chart for one algorithm's statistics.
///
/// Produces one per-scenario figure for each scenario with rows, followed by
/// the eight algorithm-wide charts. An empty table plans nothing.
#[must_use]
pub fn plan_battery(
    table: &StatsTable,
    subject: &ChartSubject<'_>,
    theme: &ChartTheme,
) -> Vec<ChartArtifact> {
    let groups = table.scenario_groups();
    if groups.is_empty() {
        return Vec::new();
    }
    let slug = sanitize_file_component(subject.slug);
    let sizes = table.distinct_sizes();
    let names: Vec<&str> = groups.iter().map(|g| g.scenario).collect();

    let mut artifacts: Vec<ChartArtifact> = groups
        .iter()
        .zip(scenario_file_stems(&names))
        .map(|(group, stem)| ChartArtifact {
            kind: ChartKind::Individual,
            scenario: Some(group.scenario.to_string()),
            file_stem: format!("{slug}_{stem}_{}", ChartKind::Individual.suffix()),
            figure: individual_figure(group, subject, theme),
        })
        .collect();

    for kind in ChartKind::ALGORITHM_WIDE {
        let figure = match overlay_template(kind, subject.display_name) {
            Some(template) => {
                let panel = template.panel(&groups, subject.palette, &sizes);
                Figure::single(template.title, pixels(theme.overlay_size), panel)
            }
            None => summary_figure(&groups, subject, theme, &sizes),
        };
        artifacts.push(ChartArtifact {
            kind,
            scenario: None,
            file_stem: format!("{slug}_{}", kind.suffix()),
            figure,
        });
    }
    artifacts
}

/// Single-panel overlay for `kind`; `None` for the multi-panel kinds.
fn overlay_template(kind: ChartKind, name: &str) -> Option<OverlayTemplate> {
    let template = match kind {
        ChartKind::TimeComparison => OverlayTemplate::new(
            Metric::MeanTime,
            format!("Comparação de Tempo Médio de Execução - {name}"),
            "Tempo Médio (ms)",
        ),
        ChartKind::ComparisonsComparison => OverlayTemplate::new(
            Metric::MeanComparisons,
            format!("Comparação de Operações de Comparação - {name}"),
            "Número de Comparações",
        )
        .marker(Marker::Square),
        ChartKind::Consistency => OverlayTemplate::new(
            Metric::CoefficientOfVariation,
            "Consistência do Tempo de Execução (menor = mais consistente)",
            "Coeficiente de Variação (%)",
        )
        .marker(Marker::Triangle),
        ChartKind::ComparisonEfficiency => OverlayTemplate::new(
            Metric::ComparisonsPerElement,
            "Eficiência do Algoritmo: Comparações por Elemento (menor = mais eficiente)",
            "Comparações por Elemento",
        )
        .marker(Marker::Diamond),
        ChartKind::SwapsPerElement => OverlayTemplate::new(
            Metric::SwapsPerElement,
            format!("Eficiência em Trocas - {name}"),
            "Trocas por Elemento",
        )
        .marker(Marker::Triangle),
        ChartKind::SwapsComparison => OverlayTemplate::new(
            Metric::MeanSwaps,
            format!("Comparação de Trocas Realizadas - {name}"),
            "Número Médio de Trocas",
        )
        .marker(Marker::Diamond)
        .annotate(Annotator::LastPointValue),
        ChartKind::Complexity => OverlayTemplate::new(
            Metric::MeanTime,
            format!("Análise de Complexidade do {name} (escala log-log)"),
            "Tempo Médio (ms) (escala log)",
        )
        .x_label("Tamanho do Array (escala log)")
        .log_log()
        .reference(Reference::NLogN)
        .reference(Reference::NPow15)
        .annotate(Annotator::ComplexityExponent),
        ChartKind::Individual | ChartKind::Summary => return None,
    };
    Some(template)
}

fn individual_figure(
    group: &ScenarioGroup<'_>,
    subject: &ChartSubject<'_>,
    theme: &ChartTheme,
) -> Figure {
    let scenario = group.scenario;
    let templates = [
        OverlayTemplate::new(
            Metric::MeanTime,
            format!("Tempo Médio de Execução ({scenario})"),
            "Tempo Médio (ms)",
        )
        .annotate(Annotator::EveryPointValue { decimals: 2 }),
        OverlayTemplate::new(
            Metric::StdDevTime,
            format!("Variação do Tempo de Execução ({scenario})"),
            "Desvio Padrão (ms)",
        )
        .marker(Marker::Square),
        OverlayTemplate::new(
            Metric::MeanComparisons,
            format!("Comparações Realizadas ({scenario})"),
            "Número de Comparações",
        )
        .marker(Marker::Triangle),
        OverlayTemplate::new(
            Metric::MeanSwaps,
            format!("Trocas Realizadas ({scenario})"),
            "Número de Trocas",
        )
        .marker(Marker::Diamond),
        OverlayTemplate::new(
            Metric::ComparisonsPerElement,
            format!("Comparações por Elemento ({scenario})"),
            "Comparações por Elemento",
        )
        .marker(Marker::Triangle),
        OverlayTemplate::new(
            Metric::CoefficientOfVariation,
            format!("Consistência do Tempo ({scenario})"),
            "Coeficiente de Variação (%)",
        )
        .marker(Marker::Cross),
    ];

    let panels = templates
        .into_iter()
        .enumerate()
        .map(|(i, template)| {
            let palette = ScenarioPalette::uniform(theme.panel_color(i));
            template
                .without_legend()
                .captioned_panel(std::slice::from_ref(group), &palette, &[])
        })
        .collect();

    Figure {
        title: Some(format!(
            "{} - Cenário: {}",
            subject.display_name,
            capitalize(scenario)
        )),
        size: pixels(theme.individual_size),
        grid: (2, 3),
        panels,
    }
}

fn summary_figure(
    groups: &[ScenarioGroup<'_>],
    subject: &ChartSubject<'_>,
    theme: &ChartTheme,
    sizes: &[u64],
) -> Figure {
    let templates = [
        OverlayTemplate::new(Metric::MeanTime, "Tempo de Execução", "Tempo Médio (ms)"),
        OverlayTemplate::new(
            Metric::ComparisonsPerElement,
            "Eficiência em Comparações",
            "Comparações por Elemento",
        )
        .marker(Marker::Square),
        OverlayTemplate::new(
            Metric::SwapsPerElement,
            "Eficiência em Trocas",
            "Trocas por Elemento",
        )
        .marker(Marker::Triangle),
        OverlayTemplate::new(
            Metric::CoefficientOfVariation,
            "Consistência",
            "Coef. Variação (%)",
        )
        .marker(Marker::Diamond),
    ];

    Figure {
        title: Some(format!("Resumo de Desempenho - {}", subject.display_name)),
        size: pixels(theme.summary_size),
        grid: (2, 2),
        panels: templates
            .iter()
            .map(|t| t.captioned_panel(groups, subject.palette, sizes))
            .collect(),
    }
}

#[cfg(test)]
#[path = "battery_tests.rs"]
mod tests;
