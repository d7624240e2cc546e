use clap::{Parser, Subcommand};
use hueprint_core::{AnalysisOptions, AnalysisReport, Rgb, SeededSource, ThreadSource};
use rayon::prelude::*;
use serde::Serialize;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};

#[derive(Parser)]
#[command(name = "hueprint")]
#[command(version, about = "Byte-stream color profile analyzer", long_about = None)]
struct Cli {
    /// Print progress diagnostics to stderr
    #[arg(long, global = true)]
    verbose: bool,

    /// Analysis config file (overrides discovery)
    #[arg(long, global = true, value_name = "FILE")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Analyze a file's bytes and print or save the report
    Analyze {
        /// Input file
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Write the JSON report to this file instead of stdout
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Seed for reproducible dominant-color selection
        #[arg(long, value_name = "N")]
        seed: Option<u64>,

        /// Print a human-readable digest instead of JSON
        #[arg(long)]
        summary: bool,
    },

    /// Analyze multiple files in parallel
    Batch {
        /// Input files
        #[arg(value_name = "FILES")]
        inputs: Vec<PathBuf>,

        /// Seed for reproducible dominant-color selection
        #[arg(long, value_name = "N")]
        seed: Option<u64>,

        /// Number of parallel threads
        #[arg(short = 'j', long, value_name = "N")]
        threads: Option<usize>,
    },

    /// Classify a single color value
    Name {
        /// Color as #rrggbb or R,G,B
        #[arg(value_name = "COLOR")]
        color: String,
    },

    /// Print the color reference catalog
    Catalog {
        /// Print as JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Print the effective analysis options and their source
    ConfigShow,
}

fn main() {
    let cli = Cli::parse();

    hueprint_core::config::set_verbose(cli.verbose);

    let result = match cli.command {
        Commands::Analyze {
            input,
            output,
            seed,
            summary,
        } => cmd_analyze(input, output, seed, summary, cli.config.as_deref()),

        Commands::Batch {
            inputs,
            seed,
            threads,
        } => cmd_batch(inputs, seed, threads, cli.config.as_deref()),

        Commands::Name { color } => cmd_name(color),

        Commands::Catalog { json } => cmd_catalog(json),

        Commands::ConfigShow => cmd_config_show(cli.config.as_deref()),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

/// Resolve the effective analysis options, honoring an explicit config path.
fn resolve_options(config: Option<&Path>) -> AnalysisOptions {
    match config {
        Some(path) => {
            let handle = hueprint_core::config::load_analysis_config(Some(path));
            if hueprint_core::config::is_verbose() {
                if let Some(source) = &handle.source {
                    eprintln!("[hueprint] Loaded analysis config from {}", source.display());
                }
                for warning in &handle.warnings {
                    eprintln!("[hueprint] Config warning: {}", warning);
                }
            }
            handle.options
        }
        None => {
            hueprint_core::config::log_config_usage();
            hueprint_core::config::analysis_config_handle().options.clone()
        }
    }
}

/// Run one analysis, seeded when the caller asked for reproducible output.
fn run_analysis(
    bytes: &[u8],
    options: &AnalysisOptions,
    seed: Option<u64>,
) -> Result<AnalysisReport, String> {
    match seed {
        Some(seed) => {
            let mut source = SeededSource::new(seed);
            hueprint_core::analyze_with(bytes, options, &mut source)
        }
        None => {
            let mut source = ThreadSource;
            hueprint_core::analyze_with(bytes, options, &mut source)
        }
    }
}

fn cmd_analyze(
    input: PathBuf,
    output: Option<PathBuf>,
    seed: Option<u64>,
    summary: bool,
    config: Option<&Path>,
) -> Result<(), String> {
    let options = resolve_options(config);

    let bytes = std::fs::read(&input)
        .map_err(|e| format!("Failed to read {}: {}", input.display(), e))?;

    let report = run_analysis(&bytes, &options, seed)?;

    if summary {
        print_summary(&input, &report);
        return Ok(());
    }

    let json = serde_json::to_string_pretty(&report)
        .map_err(|e| format!("Failed to serialize report: {}", e))?;

    match output {
        Some(path) => {
            std::fs::write(&path, json)
                .map_err(|e| format!("Failed to write report file: {}", e))?;
            println!("Report written to: {}", path.display());
        }
        None => println!("{}", json),
    }

    Ok(())
}

fn cmd_batch(
    inputs: Vec<PathBuf>,
    seed: Option<u64>,
    threads: Option<usize>,
    config: Option<&Path>,
) -> Result<(), String> {
    if inputs.is_empty() {
        return Err("No input files specified".to_string());
    }

    // Configure thread pool if specified
    if let Some(num_threads) = threads {
        rayon::ThreadPoolBuilder::new()
            .num_threads(num_threads)
            .build_global()
            .map_err(|e| format!("Failed to configure thread pool: {}", e))?;
        println!("Using {} threads for parallel processing", num_threads);
    }

    let options = resolve_options(config);

    println!("\nAnalyzing {} files in parallel...\n", inputs.len());

    // Progress tracking
    let processed_count = AtomicUsize::new(0);
    let total_files = inputs.len();

    let results: Vec<Result<PathBuf, String>> = inputs
        .par_iter()
        .map(|input| {
            let bytes = std::fs::read(input)
                .map_err(|e| format!("Failed to read {}: {}", input.display(), e))?;

            let report = run_analysis(&bytes, &options, seed)?;

            let output_path = report_output_path(input);
            let json = serde_json::to_string_pretty(&report)
                .map_err(|e| format!("Failed to serialize report: {}", e))?;
            std::fs::write(&output_path, json)
                .map_err(|e| format!("Failed to write report file: {}", e))?;

            // Update progress
            let count = processed_count.fetch_add(1, Ordering::SeqCst) + 1;
            println!(
                "[{}/{}] Analyzed: {} -> {}",
                count,
                total_files,
                input.display(),
                output_path.display()
            );

            Ok(output_path)
        })
        .collect();

    // Summarize results
    let mut success_count = 0;
    let mut errors: Vec<(PathBuf, String)> = Vec::new();

    for (input, result) in inputs.iter().zip(results.iter()) {
        match result {
            Ok(_) => success_count += 1,
            Err(e) => {
                errors.push((input.clone(), e.clone()));
            }
        }
    }

    println!("\n========================================");
    println!("BATCH ANALYSIS COMPLETE");
    println!("========================================");
    println!("  Successful: {}", success_count);
    println!("  Failed:     {}", errors.len());

    if !errors.is_empty() {
        println!("\nErrors:");
        for (path, error) in &errors {
            println!("  {}: {}", path.display(), error);
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(format!("{} files failed to analyze", errors.len()))
    }
}

fn cmd_name(color: String) -> Result<(), String> {
    let rgb = parse_color_arg(&color)?;
    let name = hueprint_core::name_for(rgb);

    println!("Color: {}", rgb.hex());
    println!("  RGB:  ({}, {}, {})", rgb.r, rgb.g, rgb.b);
    println!("  Name: {}", name);

    Ok(())
}

/// One catalog row for JSON output.
#[derive(Serialize)]
struct CatalogRow {
    name: &'static str,
    hex: String,
    rgb: Rgb,
}

fn cmd_catalog(json: bool) -> Result<(), String> {
    let entries = hueprint_core::catalog::entries();

    if json {
        let rows: Vec<CatalogRow> = entries
            .iter()
            .map(|&(rgb, name)| CatalogRow {
                name,
                hex: rgb.hex(),
                rgb,
            })
            .collect();
        let json = serde_json::to_string_pretty(&rows)
            .map_err(|e| format!("Failed to serialize catalog: {}", e))?;
        println!("{}", json);
        return Ok(());
    }

    println!("Color Reference Catalog ({} entries)", entries.len());
    println!("========================================");
    for (rgb, name) in entries {
        println!(
            "  {:<24} {}  ({:>3}, {:>3}, {:>3})",
            name,
            rgb.hex(),
            rgb.r,
            rgb.g,
            rgb.b
        );
    }

    Ok(())
}

fn cmd_config_show(config: Option<&Path>) -> Result<(), String> {
    let handle = hueprint_core::config::load_analysis_config(config);

    match &handle.source {
        Some(source) => println!("Config source: {}", source.display()),
        None => println!("Config source: built-in defaults"),
    }

    if !handle.warnings.is_empty() {
        println!("\nWarnings:");
        for warning in &handle.warnings {
            println!("  {}", warning);
        }
    }

    let json = serde_json::to_string_pretty(&handle.options)
        .map_err(|e| format!("Failed to serialize options: {}", e))?;
    println!("\nEffective options:\n{}", json);

    Ok(())
}

/// Print a human-readable digest of the report.
fn print_summary(input: &Path, report: &AnalysisReport) {
    println!("Analysis Summary: {}", input.display());
    println!("========================================");

    let meta = &report.metadata;
    println!("\nSample:");
    println!("  Bytes: {}", meta.image_size_bytes);
    println!("  Colors sampled: {}", meta.total_color_samples);
    println!("  Unique colors: {}", meta.unique_colors_found);

    if let Some(entries) = report.dominant_colors.value() {
        if entries.is_empty() {
            println!("\nDominant Colors: none");
        } else {
            println!("\nDominant Colors:");
            for entry in entries {
                println!(
                    "  {}. {} ({}) - {:.2}%",
                    entry.rank, entry.name, entry.hex, entry.percentage
                );
            }
        }
    }

    if let Some(characteristics) = report.characteristics.value() {
        println!("\nCharacteristics:");
        println!(
            "  Temperature: {:?} (warm {:.1}%, cool {:.1}%)",
            characteristics.temperature.classification,
            characteristics.temperature.warm_percentage,
            characteristics.temperature.cool_percentage
        );
        println!(
            "  Brightness: {:?} ({:.3})",
            characteristics.brightness.level, characteristics.brightness.average
        );
        println!(
            "  Saturation: {:?} ({:.3})",
            characteristics.saturation.level, characteristics.saturation.average
        );
    }

    if let Some(regional) = report.regional_analysis.value() {
        println!("\nRegions:");
        for region in &regional.regions {
            println!(
                "  {:<13} {} ({}) - {:.2}%",
                region.region,
                region.dominant_color.name,
                region.dominant_color.hex,
                region.dominant_color.percentage
            );
        }
        println!(
            "  Balance: {:?} (center/edge contrast {:.2})",
            regional.balance_analysis.overall_balance,
            regional.center_edge_analysis.center_edge_contrast
        );
    }
}

/// Build the batch output path, `<stem>.hueprint.json` next to the input.
fn report_output_path(input: &Path) -> PathBuf {
    let stem = input
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "report".to_string());
    input.with_file_name(format!("{}.hueprint.json", stem))
}

/// Parse a color argument in "#rrggbb" or "R,G,B" form.
fn parse_color_arg(color_str: &str) -> Result<Rgb, String> {
    let trimmed = color_str.trim();

    if trimmed.contains(',') {
        let parts: Vec<&str> = trimmed.split(',').collect();
        if parts.len() != 3 {
            return Err(format!(
                "Color must be in format R,G,B (e.g., 255,0,0), got: {}",
                color_str
            ));
        }

        let r = parts[0]
            .trim()
            .parse::<u8>()
            .map_err(|_| format!("Invalid red value: {}", parts[0]))?;
        let g = parts[1]
            .trim()
            .parse::<u8>()
            .map_err(|_| format!("Invalid green value: {}", parts[1]))?;
        let b = parts[2]
            .trim()
            .parse::<u8>()
            .map_err(|_| format!("Invalid blue value: {}", parts[2]))?;

        return Ok(Rgb::new(r, g, b));
    }

    Rgb::from_hex(trimmed)
}

// =============================================================================
// Tests
// =============================================================================
