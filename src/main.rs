/*!
 * Command-line interface for projsnap
 */

use std::io;
use std::process;
use std::sync::Arc;
use std::time::{Duration, Instant};

use clap::{CommandFactory, Parser};
use clap_complete::generate;
use indicatif::{ProgressBar, ProgressStyle};

use projsnap::config::{Args, Config};
use projsnap::error::Result;
use projsnap::prompt::prompt_mode;
use projsnap::report::{Reporter, SnapshotReport};
use projsnap::tree::render_tree;
use projsnap::utils::format_thousands;
use projsnap::{build_block, MarkdownHeaders, MarkdownWriter, Packer, Scanner};

fn main() {
    let args = Args::parse();

    if let Some(shell) = args.generate {
        generate(shell, &mut Args::command(), "projsnap", &mut io::stdout());
        return;
    }

    init_logging(&args);

    let quiet = args.quiet;
    if let Err(e) = run(Config::from_args(args), quiet) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn init_logging(args: &Args) {
    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"));
    if args.quiet {
        builder.filter_level(log::LevelFilter::Warn);
    } else if args.verbose {
        builder.filter_level(log::LevelFilter::Debug);
    }
    builder.target(env_logger::Target::Stderr).init();
}

fn progress_bar(quiet: bool, prefix: &'static str) -> ProgressBar {
    if quiet {
        return ProgressBar::hidden();
    }

    let progress = ProgressBar::new_spinner();
    let style = ProgressStyle::with_template(
        "{spinner:.green} {prefix:.bold.cyan} {pos} {wide_msg:.dim.white}",
    )
    .unwrap_or_else(|_| ProgressStyle::default_spinner());
    progress.set_style(style);
    progress.set_prefix(prefix);
    progress.enable_steady_tick(Duration::from_millis(100));
    progress
}

fn run(config: Config, quiet: bool) -> Result<()> {
    config.validate()?;

    // Scan
    let started = Instant::now();
    let progress = progress_bar(quiet, "📂 Scanning");
    let scanner = Scanner::new(config.clone(), Arc::new(progress.clone()));
    let scan = scanner.scan()?;
    progress.finish_and_clear();
    let scan_time = started.elapsed();

    if scan.files.is_empty() {
        println!("⚠️  No files found to include in the snapshot.");
        return Ok(());
    }

    println!(
        "📦 {} files found, {} lines",
        scan.statistics.total_files,
        format_thousands(scan.statistics.total_lines)
    );

    let mode = match config.mode {
        Some(mode) => mode,
        None => prompt_mode(io::stdin().lock(), io::stdout(), config.max_lines)?,
    };
    log::info!("Generating {} snapshot", mode);

    // Build blocks, pack and write
    let started = Instant::now();
    let headers = MarkdownHeaders::new(&scan, render_tree(&scanner, &scan.root));

    let progress = progress_bar(quiet, "📝 Reading");
    let blocks: Vec<_> = scan
        .files
        .iter()
        .map(|file| {
            progress.inc(1);
            progress.set_message(file.rel_path.display().to_string());
            build_block(file)
        })
        .collect();
    progress.finish_and_clear();

    let documents = Packer::new(config.max_lines).pack(&blocks, mode, &headers);
    let writer = MarkdownWriter::new(&config.output_dir, config.output_base());
    let written = writer.write_all(&documents)?;

    let report = SnapshotReport {
        root: scan.root.clone(),
        mode,
        total_files: scan.statistics.total_files,
        total_lines: scan.statistics.total_lines,
        documents: written,
        duration: scan_time + started.elapsed(),
    };
    Reporter::new(config.report_format).print_report(&report)
}
