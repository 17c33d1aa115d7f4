//! Question bank build pipeline.
//!
//! The core parser is pure; this module owns every side effect around it:
//! directory scanning, file reads, progress output on stdout, and the
//! final JSON write.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use quizbank_core::parse;
use thiserror::Error;

/// Errors from the build pipeline. Parse problems never surface here;
/// malformed blocks are dropped inside the core parser.
#[derive(Debug, Error)]
pub enum BuildError {
    #[error("failed to scan {}: {source}", path.display())]
    Scan {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to encode question bank: {0}")]
    Encode(#[from] serde_json::Error),
}

/// One quiz source: the file name for progress lines, the stem as the
/// metadata label, and the raw text.
#[derive(Debug, Clone)]
pub struct Source {
    pub name: String,
    pub label: String,
    pub text: String,
}

/// Run the full build: scan `input` for quiz files, parse each, write
/// the combined bank to `output`.
pub fn run(input: &Path, output: &Path) -> Result<(), BuildError> {
    tracing::info!("scanning {}", input.display());
    let sources = collect_sources(input)?;

    let mut bank = Vec::new();
    for source in &sources {
        let records = parse(&source.text, &source.label);
        println!("{}: {} questions parsed", source.name, records.len());
        bank.extend(records);
    }
    println!("Total questions: {}", bank.len());

    let json = serde_json::to_string_pretty(&bank)?;
    fs::write(output, json).map_err(|source| BuildError::Write {
        path: output.to_path_buf(),
        source,
    })?;

    let resolved = fs::canonicalize(output).unwrap_or_else(|_| output.to_path_buf());
    println!("Wrote {}", resolved.display());
    Ok(())
}

/// Collect `.txt` sources from a directory in sorted path order.
pub fn collect_sources(dir: &Path) -> Result<Vec<Source>, BuildError> {
    let entries = fs::read_dir(dir).map_err(|source| BuildError::Scan {
        path: dir.to_path_buf(),
        source,
    })?;

    let mut paths = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|source| BuildError::Scan {
            path: dir.to_path_buf(),
            source,
        })?;
        let path = entry.path();
        if path.extension().map_or(false, |ext| ext == "txt") {
            paths.push(path);
        } else {
            tracing::debug!("skipping {}", path.display());
        }
    }
    paths.sort();

    let mut sources = Vec::with_capacity(paths.len());
    for path in paths {
        let text = fs::read_to_string(&path).map_err(|source| BuildError::Read {
            path: path.clone(),
            source,
        })?;
        sources.push(Source {
            name: path
                .file_name()
                .and_then(|s| s.to_str())
                .unwrap_or("default")
                .to_string(),
            label: path
                .file_stem()
                .and_then(|s| s.to_str())
                .unwrap_or("default")
                .to_string(),
            text,
        });
    }
    Ok(sources)
}
