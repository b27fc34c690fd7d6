//! docoutline CLI - document outline inference tool

use std::fs;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};

use clap::{Args, Parser, Subcommand};
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use rayon::prelude::*;

use docoutline::{
    extract_outline, profile_document, render, DocumentResult, HeadingLevel, JsonFormat,
    OutlineOptions, PageWords,
};

/// Input directory used when running inside the container image.
const CONTAINER_INPUT: &str = "/app/input";
/// Output directory used when running inside the container image.
const CONTAINER_OUTPUT: &str = "/app/output";

#[derive(Parser)]
#[command(name = "docoutline")]
#[command(author = "docoutline contributors")]
#[command(version)]
#[command(about = "Infer document titles and heading outlines from word dumps", long_about = None)]
struct Cli {
    #[command(flatten)]
    tuning: Tuning,

    #[command(subcommand)]
    command: Option<Commands>,
}

/// Inference options shared by every command.
#[derive(Args, Clone)]
struct Tuning {
    /// Number of leading pages sampled for the typography profile
    #[arg(long, global = true, value_name = "N")]
    profile_pages: Option<usize>,

    /// Minimum score for a line to be accepted as a heading
    #[arg(long, global = true, value_name = "SCORE")]
    heading_threshold: Option<f64>,

    /// Lines starting left of this x-coordinate count as low-indented
    #[arg(long, global = true, value_name = "X")]
    indent_threshold: Option<f64>,

    /// Maximum vertical distance for words to share a line
    #[arg(long, global = true, value_name = "PT")]
    line_tolerance: Option<f64>,

    /// Score pages one at a time
    #[arg(long, global = true)]
    sequential: bool,

    /// Treat unreadable pages as empty instead of failing
    #[arg(long, global = true)]
    lenient: bool,
}

impl Tuning {
    fn options(&self) -> OutlineOptions {
        let mut options = OutlineOptions::new();
        if let Some(pages) = self.profile_pages {
            options = options.with_profile_pages(pages);
        }
        if let Some(score) = self.heading_threshold {
            options = options.with_heading_threshold(score);
        }
        if let Some(x) = self.indent_threshold {
            options = options.with_indent_threshold(x);
        }
        if let Some(tolerance) = self.line_tolerance {
            options = options.with_line_tolerance(tolerance);
        }
        if self.sequential {
            options = options.sequential();
        }
        if self.lenient {
            options = options.lenient();
        }
        options
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Process every word dump in a directory (default)
    Run {
        /// Directory containing *.json word dumps
        #[arg(short, long, value_name = "DIR", env = "DOCOUTLINE_INPUT")]
        input: Option<PathBuf>,

        /// Directory receiving one outline per input file
        #[arg(short, long, value_name = "DIR", env = "DOCOUTLINE_OUTPUT")]
        output: Option<PathBuf>,
    },

    /// Infer the outline of a single word dump
    Outline {
        /// Input word dump
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Output file (stdout if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Output compact JSON
        #[arg(long)]
        compact: bool,

        /// Print an indented text outline instead of JSON
        #[arg(long, conflicts_with = "compact")]
        text: bool,
    },

    /// Show the typography profile of a word dump
    Profile {
        /// Input word dump
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Print the profile as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show version information
    Version,
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();
    let options = cli.tuning.options();

    let result = match cli.command {
        Some(Commands::Run { input, output }) => cmd_run(input, output, &options),
        Some(Commands::Outline {
            input,
            output,
            compact,
            text,
        }) => cmd_outline(&input, output.as_deref(), compact, text, &options),
        Some(Commands::Profile { input, json }) => cmd_profile(&input, json, &options),
        Some(Commands::Version) => {
            cmd_version();
            Ok(())
        }
        None => cmd_run(None, None, &options),
    };

    if let Err(e) = result {
        eprintln!("{}: {}", "Error".red().bold(), e);
        std::process::exit(1);
    }
}

/// Pick batch directories: explicit paths win, then the container layout
/// when both of its directories exist, then `./input` and `./output`.
fn resolve_dirs(input: Option<PathBuf>, output: Option<PathBuf>) -> (PathBuf, PathBuf) {
    let container =
        Path::new(CONTAINER_INPUT).is_dir() && Path::new(CONTAINER_OUTPUT).is_dir();
    let (default_input, default_output) = if container {
        (PathBuf::from(CONTAINER_INPUT), PathBuf::from(CONTAINER_OUTPUT))
    } else {
        (PathBuf::from("input"), PathBuf::from("output"))
    };

    (
        input.unwrap_or(default_input),
        output.unwrap_or(default_output),
    )
}

/// Word dumps in a directory, sorted by file name.
fn collect_dumps(dir: &Path) -> Result<Vec<PathBuf>, Box<dyn std::error::Error>> {
    let mut files: Vec<PathBuf> = fs::read_dir(dir)?
        .filter_map(|entry| entry.ok().map(|e| e.path()))
        .filter(|path| {
            path.is_file()
                && path
                    .extension()
                    .is_some_and(|ext| ext.eq_ignore_ascii_case("json"))
        })
        .collect();
    files.sort();
    Ok(files)
}

fn outline_path(output_dir: &Path, input: &Path) -> PathBuf {
    let stem = input.file_stem().unwrap_or_default().to_string_lossy();
    output_dir.join(format!("{}.json", stem))
}

fn process_file(
    input: &Path,
    output_dir: &Path,
    options: &OutlineOptions,
) -> Result<DocumentResult, Box<dyn std::error::Error + Send + Sync>> {
    let words = PageWords::open(input)?;
    let result = extract_outline(&words, options)?;
    let file = fs::File::create(outline_path(output_dir, input))?;
    let mut writer = BufWriter::new(file);
    render::write_json(&mut writer, &result, JsonFormat::Pretty)?;
    writer.flush()?;
    Ok(result)
}

fn cmd_run(
    input: Option<PathBuf>,
    output: Option<PathBuf>,
    options: &OutlineOptions,
) -> Result<(), Box<dyn std::error::Error>> {
    let (input_dir, output_dir) = resolve_dirs(input, output);

    if !input_dir.is_dir() {
        return Err(format!("Input directory not found: {}", input_dir.display()).into());
    }
    fs::create_dir_all(&output_dir)?;
    if fs::canonicalize(&input_dir)? == fs::canonicalize(&output_dir)? {
        return Err("Input and output directories must differ".into());
    }

    let files = collect_dumps(&input_dir)?;
    if files.is_empty() {
        println!(
            "{} {}",
            "No word dumps found in".yellow(),
            input_dir.display()
        );
        return Ok(());
    }

    let pb = ProgressBar::new(files.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} {msg}")
            .unwrap()
            .progress_chars("#>-"),
    );

    let failures = AtomicUsize::new(0);
    files.par_iter().for_each(|file| {
        let name = file.file_name().unwrap_or_default().to_string_lossy();
        match process_file(file, &output_dir, options) {
            Ok(result) => {
                pb.println(format!(
                    "  {} {} ({} headings)",
                    "✓".green(),
                    name,
                    result.outline.len()
                ));
            }
            Err(e) => {
                failures.fetch_add(1, Ordering::Relaxed);
                pb.println(format!("  {} {}: {}", "✗".red(), name, e));
            }
        }
        pb.inc(1);
    });

    pb.finish_with_message("Done!");

    let failed = failures.into_inner();
    println!(
        "\n{} {} processed, {} failed",
        "Finished:".green().bold(),
        files.len() - failed,
        failed
    );
    println!("{} {}", "Output:".bold(), output_dir.display());

    if failed > 0 {
        return Err(format!("{} of {} files failed", failed, files.len()).into());
    }
    Ok(())
}

fn cmd_outline(
    input: &Path,
    output: Option<&Path>,
    compact: bool,
    text: bool,
    options: &OutlineOptions,
) -> Result<(), Box<dyn std::error::Error>> {
    let words = PageWords::open(input)?;
    let result = extract_outline(&words, options)?;

    let rendered = if text {
        render::to_text(&result)
    } else {
        let format = if compact {
            JsonFormat::Compact
        } else {
            JsonFormat::Pretty
        };
        render::to_json(&result, format)?
    };

    if let Some(path) = output {
        fs::write(path, &rendered)?;
        println!("{} {}", "Saved to".green(), path.display());
    } else {
        println!("{}", rendered);
    }

    Ok(())
}

fn cmd_profile(
    input: &Path,
    json: bool,
    options: &OutlineOptions,
) -> Result<(), Box<dyn std::error::Error>> {
    let words = PageWords::open(input)?;
    let profile = profile_document(&words, options)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&profile)?);
        return Ok(());
    }

    println!("{}", "Document Information".cyan().bold());
    println!("{}", "─".repeat(40).dimmed());
    println!("{}: {}", "File".bold(), input.display());
    println!("{}: {}", "Pages".bold(), words.pages().len());
    println!("{}: {}", "Words".bold(), words.word_count());
    println!(
        "{}: {}",
        "Sampled pages".bold(),
        words.pages().len().min(options.profile_pages)
    );

    println!();
    println!("{}", "Typography Profile".cyan().bold());
    println!("{}", "─".repeat(40).dimmed());

    let Some(profile) = profile else {
        println!("{}", "No font sizes found; the outline will be empty".yellow());
        return Ok(());
    };

    println!("{}: {}", "Body size".bold(), profile.body_size());
    if profile.heading_sizes().is_empty() {
        println!("{}: none", "Heading sizes".bold());
    } else {
        println!("{}:", "Heading sizes".bold());
        let sizes = profile.heading_sizes();
        for (i, size) in sizes.iter().enumerate() {
            let branch = if i + 1 == sizes.len() { "└─" } else { "├─" };
            let level = profile
                .level_for(*size)
                .map_or("-", HeadingLevel::as_str);
            println!("  {} {} {}", branch.dimmed(), level, size);
        }
    }

    println!("{}:", "Common colors".bold());
    let colors = profile.common_colors();
    if colors.is_empty() {
        println!("  {}", "none".dimmed());
    }
    for (i, color) in colors.iter().enumerate() {
        let branch = if i + 1 == colors.len() { "└─" } else { "├─" };
        println!("  {} {:?}", branch.dimmed(), color.channels());
    }

    Ok(())
}

fn cmd_version() {
    println!("{} {}", "docoutline".cyan().bold(), env!("CARGO_PKG_VERSION"));
    println!("Document outline inference tool");
    println!();
    println!("License: MIT");
}
