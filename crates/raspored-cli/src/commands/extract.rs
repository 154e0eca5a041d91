use raspored_core::extraction::pdftotext::PdftotextExtractor;
use raspored_core::parsing::SlotNumbering;
use raspored_core::records;
use raspored_core::{extract_schedule, ExtractOptions, Strategy};
use std::path::PathBuf;

pub fn run(
    pdf_path: PathBuf,
    output_file: Option<PathBuf>,
    strategy: Strategy,
    numbering: SlotNumbering,
    format: &str,
) -> Result<(), raspored_core::error::RasporedError> {
    let pdf_bytes = std::fs::read(&pdf_path)?;
    let extractor = PdftotextExtractor::new();
    let options = ExtractOptions {
        strategy,
        numbering,
    };
    let extraction = extract_schedule(&pdf_bytes, &extractor, &options)?;

    for warning in &extraction.warnings {
        eprintln!("warning: {warning}");
    }

    match output_file {
        Some(path) => {
            let file = std::fs::File::create(&path)?;
            match format {
                "json" => serde_json::to_writer_pretty(file, &extraction.records)?,
                _ => records::write_csv(&extraction.records, file)?,
            }
            eprintln!(
                "Extracted {} record(s), written to {}",
                extraction.records.len(),
                path.display()
            );
        }
        None => {
            let stdout = std::io::stdout();
            match format {
                "json" => {
                    serde_json::to_writer_pretty(stdout.lock(), &extraction.records)?;
                    println!();
                }
                _ => records::write_csv(&extraction.records, stdout.lock())?,
            }
        }
    }

    Ok(())
}
