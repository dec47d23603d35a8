// Command implementations for the fuzztensor CLI.

use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use anyhow::{Context, Result, bail};
use comfy_table::{Cell, Table, presets::UTF8_FULL};
use humansize::{DECIMAL, format_size};
use memmap2::Mmap;

use fuzztensor::{HarnessReport, Report, Verdict, find, read_report, registry, run_one, write_report};

/// `list`: one row per registered harness.
pub fn print_harness_table() -> Result<()> {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL);
    table.set_header(vec!["Harness", "Min input size"]);
    for harness in registry().values() {
        table.add_row(vec![
            Cell::new(harness.name),
            Cell::new(format!("{} bytes", harness.min_len)),
        ]);
    }
    println!("{table}");
    Ok(())
}

fn verdict_cell(verdict: Verdict) -> Cell {
    match verdict {
        Verdict::Keep => Cell::new("keep"),
        Verdict::Discard => Cell::new("DISCARD"),
    }
}

fn outcome_text(entry: &HarnessReport) -> String {
    match (&entry.output, &entry.detail) {
        (Some(output), _) => {
            let dims: Vec<String> = output.output.shape.iter().map(|d| d.to_string()).collect();
            format!(
                "completed: {} [{}]",
                output.output.dtype.to_string_key(),
                dims.join(",")
            )
        }
        (None, Some(detail)) => detail.clone(),
        (None, None) => String::new(),
    }
}

/// `run`: replay each corpus file through the named harness.
pub fn replay_corpus(harness_name: &str, inputs: &[impl AsRef<Path>], report_path: Option<&Path>) -> Result<()> {
    let Some(harness) = find(harness_name) else {
        bail!(
            "unknown harness '{}' (known: {})",
            harness_name,
            registry().keys().copied().collect::<Vec<_>>().join(", ")
        );
    };

    let mut table = Table::new();
    table.load_preset(UTF8_FULL);
    table.set_header(vec!["Input", "Size", "Verdict", "Outcome"]);

    let mut report = Report::new();
    let mut discards = 0usize;
    for input in inputs {
        let path = input.as_ref();
        let file = File::open(path).with_context(|| format!("opening {}", path.display()))?;
        let mmap = unsafe { Mmap::map(&file) }
            .with_context(|| format!("mapping {}", path.display()))?;

        let entry = run_one(harness, &mmap);
        if entry.verdict == Verdict::Discard {
            discards += 1;
        }
        table.add_row(vec![
            Cell::new(path.display().to_string()),
            Cell::new(format_size(entry.input_len, DECIMAL)),
            verdict_cell(entry.verdict),
            Cell::new(outcome_text(&entry)),
        ]);
        report.push(entry);
    }

    println!("{table}");
    if discards > 0 {
        eprintln!(
            "{} of {} inputs hit an unexpected failure",
            discards,
            inputs.len()
        );
    }

    if let Some(path) = report_path {
        let file = File::create(path).with_context(|| format!("creating {}", path.display()))?;
        let written = write_report(BufWriter::new(file), &report)?;
        println!(
            "wrote {} ({} entries, {})",
            path.display(),
            report.entries.len(),
            format_size(written, DECIMAL)
        );
    }
    Ok(())
}

/// `report`: print a saved triage report container.
pub fn print_report(path: &Path) -> Result<()> {
    let file = File::open(path).with_context(|| format!("opening {}", path.display()))?;
    let report = read_report(file)?;

    let mut table = Table::new();
    table.load_preset(UTF8_FULL);
    table.set_header(vec!["Harness", "Input digest", "Size", "Verdict", "Outcome"]);
    for entry in &report.entries {
        let digest_prefix = entry.input_digest.get(..12).unwrap_or(&entry.input_digest);
        table.add_row(vec![
            Cell::new(&entry.harness),
            Cell::new(digest_prefix),
            Cell::new(format_size(entry.input_len, DECIMAL)),
            verdict_cell(entry.verdict),
            Cell::new(outcome_text(entry)),
        ]);
    }
    println!("{table}");
    println!("{} entries", report.entries.len());
    Ok(())
}
