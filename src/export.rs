//! CSV export for projection output

use std::io;
use std::path::Path;

use crate::growth::GrowthProjection;
use crate::scenario::{align_by_year, NamedProjection};

/// Write a projection's year-by-year points as CSV
///
/// Columns: year, balance, contributions, earnings.
pub fn write_projection<W: io::Write>(
    writer: W,
    projection: &GrowthProjection,
) -> Result<(), csv::Error> {
    write_projection_inner(csv::Writer::from_writer(writer), projection)
}

/// Write a projection to a CSV file
pub fn write_projection_to_path<P: AsRef<Path>>(
    path: P,
    projection: &GrowthProjection,
) -> Result<(), csv::Error> {
    log::info!("writing projection CSV to {}", path.as_ref().display());
    let csv_writer = csv::Writer::from_path(path)?;
    write_projection_inner(csv_writer, projection)
}

fn write_projection_inner<W: io::Write>(
    mut csv_writer: csv::Writer<W>,
    projection: &GrowthProjection,
) -> Result<(), csv::Error> {
    for point in &projection.points {
        csv_writer.serialize(point)?;
    }
    csv_writer.flush()?;
    Ok(())
}

/// Write an aligned comparison set as CSV
///
/// Header: `year` followed by one column per scenario name; each row holds
/// that year's balances.
pub fn write_comparison<W: io::Write>(
    writer: W,
    scenarios: &[NamedProjection],
) -> Result<(), csv::Error> {
    let mut csv_writer = csv::Writer::from_writer(writer);

    let mut header = vec!["year".to_string()];
    header.extend(scenarios.iter().map(|s| s.name.clone()));
    csv_writer.write_record(&header)?;

    for row in align_by_year(scenarios) {
        let mut record = vec![row.year.to_string()];
        record.extend(row.balances.iter().map(|b| b.to_string()));
        csv_writer.write_record(&record)?;
    }

    csv_writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::growth::GrowthPlan;
    use crate::scenario::ScenarioRunner;

    #[test]
    fn test_projection_csv_shape() {
        let projection = GrowthPlan::new(1_000.0, 0.0, 0.0, 2).project();

        let mut out = Vec::new();
        write_projection(&mut out, &projection).unwrap();
        let text = String::from_utf8(out).unwrap();

        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 4); // header + 3 points
        assert_eq!(lines[0], "year,balance,contributions,earnings");
        assert_eq!(lines[1], "0,1000,1000,0");
        assert_eq!(lines[3], "2,1000,1000,0");
    }

    #[test]
    fn test_comparison_csv_shape() {
        let runner = ScenarioRunner::new(GrowthPlan::new(1_000.0, 100.0, 5.0, 1));
        let scenarios = runner.run_comparison();

        let mut out = Vec::new();
        write_comparison(&mut out, &scenarios).unwrap();
        let text = String::from_utf8(out).unwrap();

        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 3); // header + years 0..=1
        assert!(lines[0].starts_with("year,Your Plan,No Monthly Contributions"));
        assert!(lines[1].starts_with("0,1000,1000,"));
    }

    #[test]
    fn test_write_to_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("projection.csv");

        let projection = GrowthPlan::new(500.0, 50.0, 6.0, 3).project();
        write_projection_to_path(&path, &projection).unwrap();

        let text = std::fs::read_to_string(&path).unwrap();
        assert_eq!(text.lines().count(), 5);
    }
}
