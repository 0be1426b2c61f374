// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Subcommand implementations. Each `run` loads inputs, invokes one engine
// operation, writes the output, and reports a summary.

pub mod convert;
pub mod images;
pub mod merge;
pub mod split;
pub mod text;

use blattwerk_core::error::Result;
use blattwerk_core::types::OperationSummary;

/// Print the success summary, as prose or as JSON (`--json`).
pub(crate) fn report(summary: &OperationSummary, json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(summary)?);
        return Ok(());
    }
    println!("{}", describe(summary));
    Ok(())
}

fn describe(summary: &OperationSummary) -> String {
    match summary {
        OperationSummary::Merged {
            input_documents,
            pages,
            output,
        } => format!("Merged {input_documents} documents into {output} ({pages} pages)"),
        OperationSummary::Split { pages, output_dir } => {
            format!("Split into {pages} pages in {output_dir}")
        }
        OperationSummary::TextExtracted { pages, output } => {
            format!("Extracted text of {pages} pages into {output}")
        }
        OperationSummary::ImagesExtracted {
            images,
            skipped,
            output_dir,
        } => {
            if *skipped > 0 {
                format!("Extracted {images} images into {output_dir} ({skipped} skipped)")
            } else {
                format!("Extracted {images} images into {output_dir}")
            }
        }
        OperationSummary::ImagesConverted {
            converted,
            failed,
            output_dir,
        } => {
            if *failed > 0 {
                format!("Converted {converted} images into {output_dir} ({failed} failed)")
            } else {
                format!("Converted {converted} images into {output_dir}")
            }
        }
    }
}
