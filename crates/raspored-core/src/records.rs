use crate::error::RasporedError;
use crate::model::{Day, ScheduleRecord};
use std::io::Write;

/// Write records as headerless `day,label,slot` CSV rows.
///
/// This is the contract between the extractor and the calendar builder.
pub fn write_csv<W: Write>(records: &[ScheduleRecord], writer: W) -> Result<(), RasporedError> {
    let mut out = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(writer);
    for record in records {
        let slot = record.slot.to_string();
        out.write_record([record.day.code(), record.label.as_str(), slot.as_str()])?;
    }
    out.flush()?;
    Ok(())
}

/// Parse one builder input line: `day, label, slot-index`, exactly three
/// comma-separated fields, each trimmed.
///
/// The error is a human-readable reason; callers skip the line and keep
/// going.
pub fn parse_line(line: &str) -> Result<ScheduleRecord, String> {
    let parts: Vec<&str> = line.split(',').collect();
    if parts.len() != 3 {
        return Err(format!(
            "expected 3 comma-separated fields, got {}",
            parts.len()
        ));
    }

    let day_code = parts[0].trim();
    let day = Day::from_code(day_code)
        .ok_or_else(|| format!("unrecognized day code '{day_code}'"))?;

    let label = parts[1].trim().to_string();

    let slot_text = parts[2].trim();
    let slot: u32 = slot_text
        .parse()
        .map_err(|_| format!("invalid slot index '{slot_text}'"))?;

    Ok(ScheduleRecord { day, label, slot })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_write_csv_headerless_rows() {
        let records = vec![
            ScheduleRecord {
                day: Day::Mo,
                label: "Mathematics".to_string(),
                slot: 1,
            },
            ScheduleRecord {
                day: Day::Tu,
                label: "Physics".to_string(),
                slot: 2,
            },
        ];
        let mut buf = Vec::new();
        write_csv(&records, &mut buf).unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert_eq!(text, "MO,Mathematics,1\nTU,Physics,2\n");
    }

    #[test]
    fn test_parse_line_trims_fields() {
        let record = parse_line("MO, Mathematics , 1").unwrap();
        assert_eq!(record.day, Day::Mo);
        assert_eq!(record.label, "Mathematics");
        assert_eq!(record.slot, 1);
    }

    #[test]
    fn test_parse_line_wrong_field_count() {
        assert!(parse_line("MO,Mathematics").is_err());
        assert!(parse_line("MO,Math,1,extra").is_err());
        assert!(parse_line("just one field").is_err());
    }

    #[test]
    fn test_parse_line_unknown_day() {
        let err = parse_line("XX, History, 2").unwrap_err();
        assert!(err.contains("XX"));
    }

    #[test]
    fn test_parse_line_bad_slot() {
        let err = parse_line("MO, Math, abc").unwrap_err();
        assert!(err.contains("abc"));
    }

    #[test]
    fn test_csv_output_parses_back() {
        let records = vec![ScheduleRecord {
            day: Day::Fr,
            label: "Tjelesni".to_string(),
            slot: 7,
        }];
        let mut buf = Vec::new();
        write_csv(&records, &mut buf).unwrap();
        let text = String::from_utf8(buf).unwrap();
        let parsed = parse_line(text.trim()).unwrap();
        assert_eq!(parsed, records[0]);
    }
}
