//! Canonical statistics: reconciliation, derived metrics and per-scenario summaries.

mod descriptive;
mod metrics;
mod reconcile;
mod summary;
mod table;

pub use descriptive::{mean, sample_std_dev};
pub use metrics::{
    DerivedMetrics, Metric, coefficient_of_variation_pct, comparisons_per_element,
    complexity_exponent, complexity_exponents, swaps_per_element,
};
pub use reconcile::{ReconcilePath, Reconciled, reconcile};
pub use summary::{ScenarioSummary, summarize};
pub use table::{ScenarioGroup, ScenarioStats, StatsTable};
