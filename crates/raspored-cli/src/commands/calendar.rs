use raspored_core::calendar::build_calendar;
use std::path::PathBuf;

pub fn run(
    input_file: PathBuf,
    output_file: Option<PathBuf>,
) -> Result<(), raspored_core::error::RasporedError> {
    let input = std::fs::read_to_string(&input_file)?;
    let build = build_calendar(&input)?;

    for skip in &build.skipped {
        eprintln!(
            "Skipping line {}: {} ({})",
            skip.line_number, skip.line, skip.reason
        );
    }

    let ics = build.calendar.to_string();
    match output_file {
        Some(path) => {
            std::fs::write(&path, &ics)?;
            eprintln!(
                "Calendar with {} event(s) written to {}",
                build.events,
                path.display()
            );
        }
        None => print!("{ics}"),
    }

    Ok(())
}
