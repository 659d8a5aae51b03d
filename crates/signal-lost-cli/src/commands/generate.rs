//! Generate command implementation
//!
//! Runs the selected material recipes and writes their maps under the
//! output root.

use std::path::Path;
use std::process::ExitCode;
use std::time::Instant;

use anyhow::{Context, Result};
use colored::Colorize;

use signal_lost_textures::generate::{generate_all, GenerateOptions};
use signal_lost_textures::material::MaterialKind;
use signal_lost_textures::noise::Resampler;
use signal_lost_textures::MaterialReport;

use super::json_output::{error_codes, GenerateOutput, JsonError};

/// Parsed generation settings.
#[derive(Debug, Clone)]
pub struct GenerateArgs {
    /// Materials to generate, in generation order.
    pub kinds: Vec<MaterialKind>,
    pub options: GenerateOptions,
}

impl GenerateArgs {
    /// Build settings from raw CLI values.
    ///
    /// `material` is `all` or one material name.
    pub fn from_cli(
        material: &str,
        size: u32,
        static_size: u32,
        seed: u32,
        resampler: &str,
        parallel: bool,
    ) -> Result<Self> {
        let kinds = match material {
            "all" => MaterialKind::ALL.to_vec(),
            name => vec![name.parse::<MaterialKind>().map_err(anyhow::Error::msg)?],
        };
        let resampler = resampler
            .parse::<Resampler>()
            .map_err(anyhow::Error::msg)?;

        Ok(Self {
            kinds,
            options: GenerateOptions {
                size,
                static_size,
                seed,
                resampler,
                parallel,
            },
        })
    }
}

/// Run the generate command
///
/// # Returns
/// Exit code: 0 success, 1 when a `--json` run fails. In human mode
/// failures propagate as errors.
pub fn run(args: &GenerateArgs, out_root: &Path, json_output: bool) -> Result<ExitCode> {
    if json_output {
        run_json(args, out_root)
    } else {
        run_human(args, out_root)
    }
}

fn generate(args: &GenerateArgs, out_root: &Path) -> Result<Vec<MaterialReport>> {
    log::debug!(
        "selected materials: {:?} (parallel: {})",
        args.kinds,
        args.options.parallel
    );
    generate_all(&args.kinds, &args.options, out_root)
        .with_context(|| format!("Failed to generate textures under {}", out_root.display()))
}

/// Run generate with human-readable (colored) output
fn run_human(args: &GenerateArgs, out_root: &Path) -> Result<ExitCode> {
    let start = Instant::now();
    let options = &args.options;

    println!("{}", "SIGNAL LOST - Texture Generator".cyan().bold());
    println!(
        "{} {}x{} | {} {}",
        "Size:".dimmed(),
        options.size,
        options.size,
        "Seed:".dimmed(),
        options.seed
    );
    println!("{} {}", "Output root:".cyan().bold(), out_root.display());
    if options.resampler != Resampler::default() {
        println!(
            "  {} noise upscaling uses {} resampling",
            "!".yellow(),
            options.resampler
        );
    }
    println!();

    let reports = generate(args, out_root)?;

    for report in &reports {
        println!(
            "  {} {} ({}x{}, seed {})",
            "Generated".green(),
            report.material.to_string().bold(),
            report.size,
            report.size,
            report.seed
        );
        for file in &report.files {
            println!(
                "    {} {}",
                file.path.display().to_string().dimmed(),
                &file.hash[..16]
            );
        }
    }

    println!(
        "\n{} Generated {} material(s) in {}ms",
        "SUCCESS".green().bold(),
        reports.len(),
        start.elapsed().as_millis()
    );

    Ok(ExitCode::SUCCESS)
}

/// Run generate with JSON output
fn run_json(args: &GenerateArgs, out_root: &Path) -> Result<ExitCode> {
    let output = json_report(args, out_root);
    println!("{}", serde_json::to_string_pretty(&output)?);

    Ok(if output.success {
        ExitCode::SUCCESS
    } else {
        ExitCode::from(1)
    })
}

/// Run generation and capture the outcome, success or failure, as a report.
fn json_report(args: &GenerateArgs, out_root: &Path) -> GenerateOutput {
    let start = Instant::now();
    let (materials, error) = match generate(args, out_root) {
        Ok(materials) => (materials, None),
        Err(e) => (
            Vec::new(),
            Some(JsonError::new(error_codes::GENERATION_ERROR, format!("{:#}", e))),
        ),
    };

    GenerateOutput {
        success: error.is_none(),
        size: args.options.size,
        seed: args.options.seed,
        materials,
        error,
        duration_ms: start.elapsed().as_millis() as u64,
    }
}
