pub mod context;
pub mod init;
pub mod render;
pub mod stats;

pub use context::{load_config, resolve_root};
pub use init::{generate_config_template, run_init, run_init_impl};
pub use render::{format_batch_report, render_with, run_render, select_jobs};
pub use stats::{build_report, run_stats, run_stats_impl};
