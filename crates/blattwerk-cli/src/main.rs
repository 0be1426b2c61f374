// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Blattwerk — PDF assembly and extraction.
//
// Entry point. Initialises logging, parses the command line, dispatches to
// the engine, and maps typed results to user-facing messages.

mod commands;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use blattwerk_core::human_errors::humanize_error;

#[derive(Parser)]
#[command(
    name = "blattwerk",
    version,
    about = "PDF assembly and extraction: merge, split, text and image extraction"
)]
struct Cli {
    /// Print a machine-readable JSON summary instead of prose
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Merge two or more PDFs into one, preserving input order
    Merge {
        /// Input PDF files, in the order their pages should appear
        #[arg(required = true)]
        inputs: Vec<PathBuf>,

        /// Path of the merged PDF
        #[arg(short, long)]
        output: PathBuf,
    },
    /// Split a PDF into one file per page (page_N.pdf)
    Split {
        /// Input PDF file
        input: PathBuf,

        /// Directory for the per-page files
        #[arg(short, long)]
        output_dir: PathBuf,
    },
    /// Extract the text layer into a UTF-8 text file
    ExtractText {
        /// Input PDF file
        input: PathBuf,

        /// Path of the text file
        #[arg(short, long)]
        output: PathBuf,

        /// Insert a blank line between pages instead of the historical
        /// back-to-back concatenation
        #[arg(long)]
        page_breaks: bool,
    },
    /// Extract embedded raster images in their native encoding
    ExtractImages {
        /// Input PDF file
        input: PathBuf,

        /// Directory for the image files (image_page_N_ID.ext)
        #[arg(short, long)]
        output_dir: PathBuf,
    },
    /// Convert raster images to another format
    ConvertImages {
        /// Input image files
        #[arg(required = true)]
        inputs: Vec<PathBuf>,

        /// Directory for the converted files
        #[arg(short, long)]
        output_dir: PathBuf,

        /// Target format: png, jpeg, bmp, gif, or tiff
        #[arg(short, long)]
        format: String,
    },
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();

    tracing::debug!("Blattwerk starting");

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Merge { inputs, output } => commands::merge::run(&inputs, &output, cli.json),
        Commands::Split { input, output_dir } => commands::split::run(&input, &output_dir, cli.json),
        Commands::ExtractText {
            input,
            output,
            page_breaks,
        } => commands::text::run(&input, &output, page_breaks, cli.json),
        Commands::ExtractImages { input, output_dir } => {
            commands::images::run(&input, &output_dir, cli.json)
        }
        Commands::ConvertImages {
            inputs,
            output_dir,
            format,
        } => commands::convert::run(&inputs, &output_dir, &format, cli.json),
    };

    if let Err(err) = result {
        let human = humanize_error(&err);
        eprintln!("Error: {}", human.message);
        eprintln!("  {}", human.suggestion);
        std::process::exit(1);
    }
}
