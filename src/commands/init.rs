use std::fs;

use crate::cli::InitArgs;
use crate::{EXIT_CONFIG_ERROR, EXIT_SUCCESS, Result, SortbenchError};

#[must_use]
pub fn run_init(args: &InitArgs) -> i32 {
    match run_init_impl(args) {
        Ok(()) => EXIT_SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            EXIT_CONFIG_ERROR
        }
    }
}

/// Initializes a new configuration file.
///
/// # Errors
/// Returns an error if the file already exists (without --force) or cannot be written.
pub fn run_init_impl(args: &InitArgs) -> Result<()> {
    let output_path = &args.output;

    if output_path.exists() && !args.force {
        return Err(SortbenchError::Config(format!(
            "Configuration file already exists: {}. Use --force to overwrite.",
            output_path.display()
        )));
    }

    if let Some(parent) = output_path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)?;
    }
    fs::write(output_path, generate_config_template())?;

    println!("Created configuration file: {}", output_path.display());
    Ok(())
}

/// Commented template that parses to the built-in defaults.
#[must_use]
pub fn generate_config_template() -> String {
    r##"# sortbench configuration file
version = "1"

[paths]
# Project root; relative paths are resolved against this file's directory
results_root = "."
# Each algorithm reads the newest CSV in <files_dir>/<input_dir>
files_dir = "results/files"
# and writes its charts to <graphics_dir>/<output_dir>
graphics_dir = "results/graphics"

# Chart styling (uncomment to override the defaults)
# [theme]
# font_family = "sans-serif"
# title_font_size = 30
# caption_font_size = 22
# label_font_size = 16
# annotation_font_size = 14
# line_width = 2
# marker_size = 5
# grid = true
# background = "white"
# fallback_color = "gray"
# panel_colors = ["steelblue", "darkorange", "forestgreen", "firebrick", "rebeccapurple", "saddlebrown"]
# overlay_size = [1200, 800]
# individual_size = [1800, 1000]
# summary_size = [1500, 1200]

# Algorithms keyed by the prefix of their chart file names.
# Declaring any algorithm here replaces the whole built-in list.
[algorithms.shellsort]
name = "Shell Sort"
input_dir = "shellSort"
output_dir = "shellSort"

[algorithms.shellsort.scenario_colors]
crescente = "steelblue"
decrescente = "darkorange"
aleatorio = "forestgreen"

[algorithms.cyclesort]
name = "Cycle Sort"
input_dir = "cycleSort"
output_dir = "cycleSort"

# Named colors or "#rrggbb"; unlisted scenarios are drawn in the fallback color
[algorithms.cyclesort.scenario_colors]
crescente = "mediumpurple"
decrescente = "crimson"
aleatorio = "darkcyan"
"##
    .to_string()
}

#[cfg(test)]
#[path = "init_tests.rs"]
mod tests;
