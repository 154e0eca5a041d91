pub mod days;
pub mod slots;

use crate::model::{Day, ScheduleRecord};
use days::day_from_name;
use slots::{parse_slot_label, parse_slot_marker};

/// Slot numbering policy for the line-scanning heuristic.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SlotNumbering {
    /// Slots come only from explicit "N." marker lines; 0 until the first
    /// marker of the day.
    #[default]
    Explicit,
    /// Records are numbered 1, 2, 3… per day; an explicit marker re-seeds
    /// the counter.
    Ordinal,
}

/// Options for the line-scanning heuristic.
#[derive(Debug, Clone, Copy, Default)]
pub struct ScanOptions {
    pub numbering: SlotNumbering,
}

/// Result of one extraction run: the records plus skip diagnostics.
#[derive(Debug, Clone, Default)]
pub struct Extraction {
    pub records: Vec<ScheduleRecord>,
    pub warnings: Vec<String>,
}

/// Line-scanning heuristic: stateful single pass over text lines.
///
/// A line matching a localized day name switches the active day, a "N."
/// line sets the slot counter, and any other non-empty line while a day is
/// active is a class entry. Blank lines are skipped without ending the day;
/// text before the first day name is ignored.
pub fn scan_lines<'a, I>(lines: I, options: &ScanOptions) -> Extraction
where
    I: IntoIterator<Item = &'a str>,
{
    let mut records = Vec::new();
    let mut current_day: Option<Day> = None;
    let mut slot: u32 = 0;
    let mut next_ordinal: u32 = 1;

    for raw in lines {
        let line = raw.trim();

        if let Some(day) = day_from_name(line) {
            current_day = Some(day);
            slot = 0;
            next_ordinal = 1;
        } else if let Some(marker) = parse_slot_marker(line) {
            slot = marker;
            next_ordinal = marker;
        } else if let Some(day) = current_day {
            if line.is_empty() {
                continue;
            }
            let assigned = match options.numbering {
                SlotNumbering::Explicit => slot,
                SlotNumbering::Ordinal => {
                    let s = next_ordinal;
                    next_ordinal += 1;
                    s
                }
            };
            records.push(ScheduleRecord {
                day,
                label: line.to_string(),
                slot: assigned,
            });
        }
    }

    Extraction {
        records,
        warnings: Vec::new(),
    }
}

/// Table-grid heuristic: the header row carries day names (column 0 is
/// unused), every other row carries a slot label in column 0 and class
/// names under the day columns.
///
/// Rows whose slot label is not numeric are skipped with a warning; header
/// columns that are not recognized day names are ignored.
pub fn parse_grid(grid: &[Vec<String>]) -> Extraction {
    let mut extraction = Extraction::default();
    let Some((header, rows)) = grid.split_first() else {
        return extraction;
    };

    let day_columns: Vec<(usize, Day)> = header
        .iter()
        .enumerate()
        .skip(1)
        .filter_map(|(col, cell)| day_from_name(cell).map(|day| (col, day)))
        .collect();

    for row in rows {
        let Some(label_cell) = row.first() else {
            continue;
        };
        let Some(slot) = parse_slot_label(label_cell) else {
            if !label_cell.trim().is_empty() {
                extraction.warnings.push(format!(
                    "skipping row with non-numeric slot label '{}'",
                    label_cell.trim()
                ));
            }
            continue;
        };

        for &(col, day) in &day_columns {
            let Some(cell) = row.get(col) else {
                continue;
            };
            let text = cell.trim();
            if text.is_empty() {
                continue;
            }
            extraction.records.push(ScheduleRecord {
                day,
                label: text.to_string(),
                slot,
            });
        }
    }

    extraction
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rec(day: Day, label: &str, slot: u32) -> ScheduleRecord {
        ScheduleRecord {
            day,
            label: label.to_string(),
            slot,
        }
    }

    #[test]
    fn test_scan_explicit_markers() {
        let lines = ["Ponedjeljak", "1.", "Mathematics", "2.", "Physics"];
        let result = scan_lines(lines, &ScanOptions::default());
        assert_eq!(
            result.records,
            vec![
                rec(Day::Mo, "Mathematics", 1),
                rec(Day::Mo, "Physics", 2),
            ]
        );
    }

    #[test]
    fn test_scan_slot_zero_before_first_marker() {
        let lines = ["Utorak", "Razrednik", "1.", "Kemija"];
        let result = scan_lines(lines, &ScanOptions::default());
        assert_eq!(
            result.records,
            vec![rec(Day::Tu, "Razrednik", 0), rec(Day::Tu, "Kemija", 1)]
        );
    }

    #[test]
    fn test_scan_day_switch_resets_slot() {
        let lines = ["Ponedjeljak", "3.", "Fizika", "Utorak", "Povijest"];
        let result = scan_lines(lines, &ScanOptions::default());
        assert_eq!(
            result.records,
            vec![rec(Day::Mo, "Fizika", 3), rec(Day::Tu, "Povijest", 0)]
        );
    }

    #[test]
    fn test_scan_blank_lines_do_not_end_day() {
        let lines = ["Srijeda", "1.", "Biologija", "", "2.", "Geografija"];
        let result = scan_lines(lines, &ScanOptions::default());
        assert_eq!(
            result.records,
            vec![
                rec(Day::We, "Biologija", 1),
                rec(Day::We, "Geografija", 2),
            ]
        );
    }

    #[test]
    fn test_scan_ignores_preamble() {
        let lines = ["Školska godina 2024/25", "Raspored sati", "Petak", "Tjelesni"];
        let result = scan_lines(lines, &ScanOptions::default());
        assert_eq!(result.records, vec![rec(Day::Fr, "Tjelesni", 0)]);
    }

    #[test]
    fn test_scan_ordinal_numbering() {
        let lines = ["Ponedjeljak", "Matematika", "Fizika", "Utorak", "Kemija"];
        let options = ScanOptions {
            numbering: SlotNumbering::Ordinal,
        };
        let result = scan_lines(lines, &options);
        assert_eq!(
            result.records,
            vec![
                rec(Day::Mo, "Matematika", 1),
                rec(Day::Mo, "Fizika", 2),
                rec(Day::Tu, "Kemija", 1),
            ]
        );
    }

    #[test]
    fn test_scan_ordinal_marker_reseeds_counter() {
        let lines = ["Ponedjeljak", "3.", "Fizika", "Kemija"];
        let options = ScanOptions {
            numbering: SlotNumbering::Ordinal,
        };
        let result = scan_lines(lines, &options);
        assert_eq!(
            result.records,
            vec![rec(Day::Mo, "Fizika", 3), rec(Day::Mo, "Kemija", 4)]
        );
    }

    fn grid(rows: &[&[&str]]) -> Vec<Vec<String>> {
        rows.iter()
            .map(|r| r.iter().map(|c| c.to_string()).collect())
            .collect()
    }

    #[test]
    fn test_grid_basic() {
        let grid = grid(&[
            &["", "Ponedjeljak", "Utorak"],
            &["1.", "Math", "Physics"],
        ]);
        let result = parse_grid(&grid);
        assert_eq!(
            result.records,
            vec![rec(Day::Mo, "Math", 1), rec(Day::Tu, "Physics", 1)]
        );
        assert!(result.warnings.is_empty());
    }

    #[test]
    fn test_grid_empty_cells_skipped() {
        let grid = grid(&[
            &["", "Ponedjeljak", "Petak"],
            &["1.", "", "Tjelesni"],
            &["2.", "Kemija", "  "],
        ]);
        let result = parse_grid(&grid);
        assert_eq!(
            result.records,
            vec![rec(Day::Fr, "Tjelesni", 1), rec(Day::Mo, "Kemija", 2)]
        );
    }

    #[test]
    fn test_grid_non_numeric_slot_label_warns() {
        let grid = grid(&[&["", "Ponedjeljak"], &["sat", "Matematika"]]);
        let result = parse_grid(&grid);
        assert!(result.records.is_empty());
        assert_eq!(result.warnings.len(), 1);
        assert!(result.warnings[0].contains("sat"));
    }

    #[test]
    fn test_grid_unrecognized_header_column_ignored() {
        let grid = grid(&[
            &["", "Ponedjeljak", "Napomena"],
            &["1.", "Matematika", "dvorana A"],
        ]);
        let result = parse_grid(&grid);
        assert_eq!(result.records, vec![rec(Day::Mo, "Matematika", 1)]);
    }

    #[test]
    fn test_grid_empty() {
        let result = parse_grid(&[]);
        assert!(result.records.is_empty());
    }
}
