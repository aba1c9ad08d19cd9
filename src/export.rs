//! CSV export of projection tables

use crate::error::{PlannerError, Result};
use crate::projection::ProjectionResult;
use crate::scenario::SweepPoint;
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// Default download name for the projection table
pub const DEFAULT_EXPORT_PATH: &str = "financial_projection.csv";

pub const PROJECTION_HEADER: [&str; 6] = [
    "Goal",
    "Years",
    "Monthly Contribution",
    "Initial Amount",
    "Annual Savings Increase",
    "Projected Corpus",
];

fn money(value: f64) -> String {
    format!("{:.2}", value)
}

/// Write one row per goal, monetary columns with 2 decimals
pub fn write_projection_csv<W: Write>(writer: W, result: &ProjectionResult) -> Result<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    csv_writer.write_record(PROJECTION_HEADER)?;

    for row in &result.rows {
        csv_writer.write_record([
            row.goal.clone(),
            row.years.to_string(),
            money(row.monthly_contribution),
            money(row.initial_amount),
            row.annual_savings_increase.to_string(),
            money(row.projected_corpus),
        ])?;
    }

    csv_writer.flush().map_err(|e| PlannerError::Csv(e.into()))?;
    Ok(())
}

pub fn write_projection_csv_path<P: AsRef<Path>>(path: P, result: &ProjectionResult) -> Result<()> {
    let path = path.as_ref();
    let file = File::create(path).map_err(|e| PlannerError::io(path, e))?;
    write_projection_csv(file, result)?;
    log::info!("wrote {} projection rows to {}", result.rows.len(), path.display());
    Ok(())
}

/// Render the projection table as a CSV string
pub fn projection_csv_string(result: &ProjectionResult) -> Result<String> {
    let mut buffer = Vec::new();
    write_projection_csv(&mut buffer, result)?;
    Ok(String::from_utf8_lossy(&buffer).into_owned())
}

pub const SCHEDULE_HEADER: [&str; 6] = ["Goal", "Year", "Opening Balance", "Contribution", "Growth", "Closing Balance"];

/// Year-by-year balances of every goal that carries a schedule
///
/// Rows without a schedule (projected without `detailed_output`) are skipped.
pub fn write_schedule_csv<W: Write>(writer: W, result: &ProjectionResult) -> Result<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    csv_writer.write_record(SCHEDULE_HEADER)?;

    for row in &result.rows {
        for year in &row.schedule {
            csv_writer.write_record([
                row.goal.clone(),
                year.year.to_string(),
                money(year.opening_balance),
                money(year.contribution),
                money(year.growth),
                money(year.closing_balance),
            ])?;
        }
    }

    csv_writer.flush().map_err(|e| PlannerError::Csv(e.into()))?;
    Ok(())
}

pub fn write_schedule_csv_path<P: AsRef<Path>>(path: P, result: &ProjectionResult) -> Result<()> {
    let path = path.as_ref();
    let file = File::create(path).map_err(|e| PlannerError::io(path, e))?;
    write_schedule_csv(file, result)?;
    log::info!("wrote schedules of {} goals to {}", result.rows.len(), path.display());
    Ok(())
}

/// Total corpus per goal at each swept return rate
pub fn write_sweep_csv<W: Write>(writer: W, points: &[SweepPoint]) -> Result<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);

    let goals: Vec<String> = points
        .first()
        .map(|p| p.result.rows.iter().map(|r| r.goal.clone()).collect())
        .unwrap_or_default();

    let mut header = vec!["Annual Return (%)".to_string()];
    header.extend(goals.iter().cloned());
    header.push("Total".to_string());
    csv_writer.write_record(&header)?;

    for point in points {
        let mut record = vec![format!("{:.1}", point.return_pct)];
        record.extend(point.result.rows.iter().map(|r| money(r.projected_corpus)));
        record.push(money(point.result.summary().total_projected_corpus));
        csv_writer.write_record(&record)?;
    }

    csv_writer.flush().map_err(|e| PlannerError::Csv(e.into()))?;
    Ok(())
}
