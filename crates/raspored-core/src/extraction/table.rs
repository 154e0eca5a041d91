use crate::extraction::PageContent;
use crate::parsing::days::day_from_name;

/// Reconstruct a timetable grid from pdftotext -layout output.
///
/// -layout preserves column alignment using spaces: the header row carries
/// the day names and every cell below starts near its column's header. Cells
/// are separated by runs of 2+ spaces.

#[derive(Debug, Clone)]
struct Segment {
    /// Character column where the segment starts.
    start: usize,
    text: String,
}

/// Split a line into segments separated by 2+ spaces, keeping the starting
/// character column of each segment.
fn split_segments(line: &str) -> Vec<Segment> {
    let mut segments = Vec::new();
    let mut current = String::new();
    let mut start = 0usize;
    let mut spaces = 0usize;

    for (col, c) in line.chars().enumerate() {
        if c.is_whitespace() {
            spaces += 1;
            if spaces == 2 && !current.is_empty() {
                segments.push(Segment {
                    start,
                    text: current.trim_end().to_string(),
                });
                current.clear();
            } else if spaces < 2 && !current.is_empty() {
                current.push(c);
            }
        } else {
            if current.is_empty() {
                start = col;
            }
            current.push(c);
            spaces = 0;
        }
    }

    if !current.is_empty() {
        segments.push(Segment {
            start,
            text: current.trim_end().to_string(),
        });
    }

    segments
}

/// Try to reconstruct a table grid from extracted pages.
///
/// The header row is the first line containing at least two recognized day
/// names; its segment positions define the grid columns. A slot-label column
/// is implied at column 0 when the header starts with a gap. Returns None
/// when no such header exists, so the caller can fall back to line scanning.
pub fn build_grid(pages: &[PageContent]) -> Option<Vec<Vec<String>>> {
    let lines: Vec<&str> = pages
        .iter()
        .flat_map(|p| p.lines.iter().map(|s| s.as_str()))
        .collect();

    let (header_index, header_segments) = lines.iter().enumerate().find_map(|(i, line)| {
        let segments = split_segments(line);
        let day_count = segments
            .iter()
            .filter(|s| day_from_name(&s.text).is_some())
            .count();
        if day_count >= 2 {
            Some((i, segments))
        } else {
            None
        }
    })?;

    let mut starts: Vec<usize> = header_segments.iter().map(|s| s.start).collect();
    let implied_label_column = starts.first().is_some_and(|&s| s > 0);
    if implied_label_column {
        starts.insert(0, 0);
    }

    let mut grid = Vec::new();
    let mut header_row = vec![String::new(); starts.len()];
    for segment in &header_segments {
        header_row[column_for(&starts, segment.start)] = segment.text.clone();
    }
    grid.push(header_row);

    for line in lines.iter().skip(header_index + 1) {
        let segments = split_segments(line);
        if segments.is_empty() {
            continue;
        }
        let mut row = vec![String::new(); starts.len()];
        for segment in segments {
            let col = column_for(&starts, segment.start);
            if row[col].is_empty() {
                row[col] = segment.text;
            } else {
                // Second segment landing in one column: wrapped cell content.
                row[col].push(' ');
                row[col].push_str(&segment.text);
            }
        }
        grid.push(row);
    }

    Some(grid)
}

/// Index of the column a segment belongs to: the last column boundary at or
/// before the segment start, with a two-character tolerance for cells that
/// begin slightly left of their header.
fn column_for(starts: &[usize], start: usize) -> usize {
    let mut column = 0;
    for (i, &boundary) in starts.iter().enumerate() {
        if start + 2 >= boundary {
            column = i;
        } else {
            break;
        }
    }
    column
}
