//! Pfam family downloader
//!
//! Pages through the InterPro protein API and materializes one FASTA
//! file. The API is slow and rate-limited: a 408 (or request timeout)
//! means "wait just over a minute and ask again with the same URL";
//! other HTTP failures get three retries with the same sleep before
//! giving up.

use anyhow::{Context, Result};
use clap::Args;
use indicatif::ProgressBar;
use msabench_core::{msabench_data_dir, MsabenchError};
use reqwest::blocking::Client;
use reqwest::header::ACCEPT;
use serde::Deserialize;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::PathBuf;
use std::thread;
use std::time::Duration;

const HEADER_SEPARATOR: char = '|';
const LINE_LENGTH: usize = 80;
const RETRY_SLEEP: Duration = Duration::from_secs(61);
const PAGE_SLEEP: Duration = Duration::from_secs(1);
const MAX_ATTEMPTS: u32 = 3;

#[derive(Args)]
pub struct DownloadArgs {
    /// Pfam family accession to fetch
    #[arg(long, default_value = "PF00005")]
    pub family: String,

    /// Output FASTA file (defaults to {family}.fasta in the data dir)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// API page size
    #[arg(long, default_value_t = 200)]
    pub page_size: usize,
}

#[derive(Debug, Deserialize)]
struct Page {
    count: Option<u64>,
    next: Option<String>,
    #[serde(default)]
    results: Vec<Item>,
}

#[derive(Debug, Deserialize)]
struct Item {
    metadata: Metadata,
    #[serde(default)]
    entries: Option<Vec<Entry>>,
    extra_fields: ExtraFields,
}

#[derive(Debug, Deserialize)]
struct Metadata {
    accession: String,
    name: String,
}

#[derive(Debug, Deserialize)]
struct ExtraFields {
    sequence: String,
}

#[derive(Debug, Deserialize)]
struct Entry {
    accession: String,
    #[serde(default)]
    entry_protein_locations: Vec<Locations>,
}

#[derive(Debug, Deserialize)]
struct Locations {
    #[serde(default)]
    fragments: Vec<Fragment>,
}

#[derive(Debug, Deserialize)]
struct Fragment {
    start: u64,
    end: u64,
}

pub fn run(args: DownloadArgs) -> Result<()> {
    let output_path = args
        .output
        .unwrap_or_else(|| msabench_data_dir().join(format!("{}.fasta", args.family)));
    if let Some(parent) = output_path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let mut writer = BufWriter::new(File::create(&output_path)?);

    let client = Client::builder()
        .timeout(Duration::from_secs(120))
        .build()
        .context("failed to build HTTP client")?;

    let mut next = Some(format!(
        "https://www.ebi.ac.uk:443/interpro/api/protein/UniProt/entry/pfam/{}/?page_size={}&extra_fields=sequence",
        args.family, args.page_size
    ));
    let pb = ProgressBar::new(0);
    let mut attempts = 0u32;
    let mut written = 0usize;

    while let Some(url) = next.clone() {
        let response = match client.get(&url).header(ACCEPT, "application/json").send() {
            Ok(response) => response,
            Err(e) if e.is_timeout() => {
                tracing::warn!(%url, "request timed out, retrying after sleep");
                thread::sleep(RETRY_SLEEP);
                continue;
            }
            Err(e) => {
                if attempts < MAX_ATTEMPTS {
                    attempts += 1;
                    tracing::warn!(%url, attempt = attempts, error = %e, "request failed, retrying");
                    thread::sleep(RETRY_SLEEP);
                    continue;
                }
                return Err(MsabenchError::Network(format!("{}: {}", url, e)).into());
            }
        };

        let status = response.status();
        if status.as_u16() == 408 {
            // long-running query timed out server-side
            thread::sleep(RETRY_SLEEP);
            continue;
        }
        if status.as_u16() == 204 {
            // no more data
            break;
        }
        if !status.is_success() {
            if attempts < MAX_ATTEMPTS {
                attempts += 1;
                tracing::warn!(%url, %status, attempt = attempts, "HTTP error, retrying");
                thread::sleep(RETRY_SLEEP);
                continue;
            }
            return Err(MsabenchError::Network(format!("HTTP {} from {}", status, url)).into());
        }

        let page: Page = response
            .json()
            .with_context(|| format!("invalid JSON payload from {}", url))?;
        attempts = 0;

        if let Some(count) = page.count {
            pb.set_length(count);
        }
        for item in &page.results {
            write_item(&mut writer, item)?;
            written += 1;
        }
        pb.inc(page.results.len() as u64);

        next = page.next.clone();
        // Don't overload the server, give it time before asking for more
        if next.is_some() {
            thread::sleep(PAGE_SLEEP);
        }
    }
    pb.finish_and_clear();
    writer.flush()?;

    println!("Wrote {} records to {}", written, output_path.display());
    Ok(())
}

fn format_header(item: &Item) -> String {
    match &item.entries {
        // an empty entries array still gets the three-field header,
        // with nothing between the separators
        Some(entries) => {
            let entries_header = entries
                .iter()
                .map(|entry| {
                    let locations = entry
                        .entry_protein_locations
                        .iter()
                        .map(|loc| {
                            loc.fragments
                                .iter()
                                .map(|f| format!("{}...{}", f.start, f.end))
                                .collect::<Vec<_>>()
                                .join(",")
                        })
                        .collect::<Vec<_>>()
                        .join(";");
                    format!("{}({})", entry.accession, locations)
                })
                .collect::<Vec<_>>()
                .join("-");
            format!(
                "{}{}{}{}{}",
                item.metadata.accession,
                HEADER_SEPARATOR,
                entries_header,
                HEADER_SEPARATOR,
                item.metadata.name
            )
        }
        None => format!(
            "{}{}{}",
            item.metadata.accession, HEADER_SEPARATOR, item.metadata.name
        ),
    }
}

fn write_item<W: Write>(writer: &mut W, item: &Item) -> Result<()> {
    writeln!(writer, ">{}", format_header(item))?;
    for chunk in item.extra_fields.sequence.as_bytes().chunks(LINE_LENGTH) {
        writer.write_all(chunk)?;
        writer.write_all(b"\n")?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(entries: Option<Vec<Entry>>, sequence: &str) -> Item {
        Item {
            metadata: Metadata {
                accession: "A0A024RBG1".to_string(),
                name: "ABC_TRAN".to_string(),
            },
            entries,
            extra_fields: ExtraFields {
                sequence: sequence.to_string(),
            },
        }
    }

    #[test]
    fn test_header_without_entries() {
        assert_eq!(format_header(&item(None, "MK")), "A0A024RBG1|ABC_TRAN");
    }

    #[test]
    fn test_header_with_empty_entries_list() {
        assert_eq!(
            format_header(&item(Some(vec![]), "MK")),
            "A0A024RBG1||ABC_TRAN"
        );
    }

    #[test]
    fn test_header_with_entry_locations() {
        let entries = vec![Entry {
            accession: "PF00005".to_string(),
            entry_protein_locations: vec![Locations {
                fragments: vec![
                    Fragment { start: 5, end: 120 },
                    Fragment { start: 130, end: 170 },
                ],
            }],
        }];
        assert_eq!(
            format_header(&item(Some(entries), "MK")),
            "A0A024RBG1|PF00005(5...120,130...170)|ABC_TRAN"
        );
    }

    #[test]
    fn test_sequence_wrapped_at_80_columns() {
        let seq = "M".repeat(170);
        let mut out = Vec::new();
        write_item(&mut out, &item(None, &seq)).unwrap();

        let text = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 4);
        assert!(lines[0].starts_with('>'));
        assert_eq!(lines[1].len(), 80);
        assert_eq!(lines[2].len(), 80);
        assert_eq!(lines[3].len(), 10);
    }
}
