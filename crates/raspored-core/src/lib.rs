pub mod calendar;
pub mod error;
pub mod extraction;
pub mod model;
pub mod parsing;
pub mod records;

use error::RasporedError;
use extraction::{PageContent, PdfExtractor};
use parsing::{Extraction, ScanOptions, SlotNumbering};

/// Which heuristic interprets the extracted text.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Strategy {
    /// Use the table grid when one is detected, else line scanning.
    #[default]
    Auto,
    /// Force the line-scanning heuristic.
    Lines,
    /// Force the table-grid heuristic.
    Table,
}

/// Options for a full extraction run.
#[derive(Debug, Clone, Copy, Default)]
pub struct ExtractOptions {
    pub strategy: Strategy,
    pub numbering: SlotNumbering,
}

/// Main API entry point: extract schedule records from a PDF document.
///
/// An empty result is reported as `NoScheduleData` so callers never write
/// an empty output file.
pub fn extract_schedule(
    pdf_bytes: &[u8],
    extractor: &dyn PdfExtractor,
    options: &ExtractOptions,
) -> Result<Extraction, RasporedError> {
    let pages = extractor.extract_pages(pdf_bytes)?;
    let extraction = extract_from_pages(&pages, options);
    if extraction.records.is_empty() {
        return Err(RasporedError::NoScheduleData);
    }
    Ok(extraction)
}

/// Run the configured heuristic over already-extracted pages.
pub fn extract_from_pages(pages: &[PageContent], options: &ExtractOptions) -> Extraction {
    let grid = match options.strategy {
        Strategy::Lines => None,
        Strategy::Auto | Strategy::Table => extraction::table::build_grid(pages),
    };

    match (grid, options.strategy) {
        (Some(grid), _) => parsing::parse_grid(&grid),
        (None, Strategy::Table) => Extraction::default(),
        (None, _) => {
            let scan = ScanOptions {
                numbering: options.numbering,
            };
            let lines = pages
                .iter()
                .flat_map(|p| p.lines.iter().map(|s| s.as_str()));
            parsing::scan_lines(lines, &scan)
        }
    }
}
