//! Centralized CSV/JSON loader.
//!
//! Every registry file goes through here. Rows are validated into typed
//! records once; the first invalid row aborts the load with a [`DataError`]
//! naming the file, row, and field.

use std::collections::{HashMap, HashSet};
use std::path::Path;

use chrono::NaiveDate;
use tracing::{debug, info};
use zoning_core::errors::DataError;
use zoning_core::{Place, ReformRecord, ReformType};

use crate::raw::RawRow;

// Column names, with the aliases accepted for each field.
const PLACE_ID: &[&str] = &["place_fips", "place_id"];
const PLACE_NAME: &[&str] = &["place_name", "city_name"];
const STATE_ID: &[&str] = &["state_fips", "state_id"];
const STATE_NAME: &[&str] = &["state_name"];
const RECENT_PERMITS: &[&str] = &["recent_units_2024", "recent_permits"];
const GROWTH_RATE: &[&str] = &["growth_rate_5yr"];
const MF_SHARE: &[&str] = &["mf_share_recent", "mf_share"];
const REFORM_NAME: &[&str] = &["reform_name"];
const REFORM_TYPE: &[&str] = &["reform_type"];
const EFFECTIVE_DATE: &[&str] = &["effective_date"];
const RESTRICTIVENESS: &[&str] = &["baseline_wrluri", "baseline_restrictiveness"];

const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%m/%d/%Y"];

/// Source file format, chosen by extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Format {
    Csv,
    Json,
}

impl Format {
    fn detect(path: &Path) -> Result<Self, DataError> {
        match path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase())
            .as_deref()
        {
            Some("csv") => Ok(Self::Csv),
            Some("json") => Ok(Self::Json),
            _ => Err(DataError::UnsupportedFormat {
                path: path.display().to_string(),
            }),
        }
    }
}

/// Load and validate places from a `.json` array or a `.csv` file.
///
/// Rejects missing or non-finite features, negative permit counts,
/// multifamily shares outside [0, 100], and duplicate place ids.
pub fn load_places(path: &Path) -> Result<Vec<Place>, DataError> {
    let source = path.display().to_string();
    let format = Format::detect(path)?;

    let mut places = Vec::new();
    let mut seen: HashSet<String> = HashSet::new();
    for_each_row(path, &source, format, |row| {
        let place = place_from_row(&row)?;
        if !seen.insert(place.place_id.clone()) {
            return Err(DataError::DuplicatePlace {
                path: source.clone(),
                place_id: place.place_id,
            });
        }
        places.push(place);
        Ok(())
    })?;

    info!(path = %source, rows_loaded = places.len(), "loaded places");
    Ok(places)
}

/// Load and validate reform adoptions from a `.csv` (or `.json`) file.
///
/// Rows without a city name or reform type are skipped. Every other
/// malformed row fails the load.
pub fn load_reforms(path: &Path) -> Result<Vec<ReformRecord>, DataError> {
    let source = path.display().to_string();
    let format = Format::detect(path)?;

    let mut reforms = Vec::new();
    let mut skipped = 0usize;
    for_each_row(path, &source, format, |row| {
        match reform_from_row(&row)? {
            Some(record) => reforms.push(record),
            None => {
                debug!(path = %source, row = row.row, "skipping reform row without city or type");
                skipped += 1;
            }
        }
        Ok(())
    })?;

    info!(
        path = %source,
        rows_loaded = reforms.len(),
        rows_skipped = skipped,
        "loaded reforms"
    );
    Ok(reforms)
}

/// Feed every data row of `path` to `visit`, stopping at the first error.
fn for_each_row<F>(path: &Path, source: &str, format: Format, mut visit: F) -> Result<(), DataError>
where
    F: FnMut(RawRow<'_>) -> Result<(), DataError>,
{
    match format {
        Format::Csv => {
            let mut reader = csv::ReaderBuilder::new()
                .trim(csv::Trim::All)
                .from_path(path)
                .map_err(|e| csv_error(source, e))?;
            let headers = reader.headers().map_err(|e| csv_error(source, e))?.clone();

            for (idx, result) in reader.records().enumerate() {
                let record = result.map_err(|e| csv_error(source, e))?;
                let fields: HashMap<String, String> = headers
                    .iter()
                    .zip(record.iter())
                    .map(|(h, v)| (h.to_string(), v.to_string()))
                    .collect();
                visit(RawRow::new(source, idx + 1, fields))?;
            }
        }
        Format::Json => {
            let content = std::fs::read_to_string(path).map_err(|e| DataError::Io {
                path: source.to_string(),
                message: e.to_string(),
            })?;
            let rows: Vec<serde_json::Value> =
                serde_json::from_str(&content).map_err(|e| DataError::Json {
                    path: source.to_string(),
                    message: e.to_string(),
                })?;

            for (idx, value) in rows.iter().enumerate() {
                let object = value.as_object().ok_or_else(|| DataError::InvalidField {
                    path: source.to_string(),
                    row: idx + 1,
                    field: "record",
                    message: "expected a JSON object".to_string(),
                })?;
                visit(RawRow::from_json(source, idx + 1, object))?;
            }
        }
    }
    Ok(())
}

fn csv_error(source: &str, err: csv::Error) -> DataError {
    if let csv::ErrorKind::Io(io) = err.kind() {
        return DataError::Io {
            path: source.to_string(),
            message: io.to_string(),
        };
    }
    DataError::Csv {
        path: source.to_string(),
        message: err.to_string(),
    }
}

fn place_from_row(row: &RawRow<'_>) -> Result<Place, DataError> {
    let place_id = row.required_text("place_id", PLACE_ID)?.to_string();

    let permits = row.required_number("recent_permits", RECENT_PERMITS)?;
    if permits < 0.0 {
        return Err(row.invalid("recent_permits", format!("negative: {permits}")));
    }
    // `u64::MAX as f64` is 2^64, one past the largest representable count.
    if permits.round() >= u64::MAX as f64 {
        return Err(row.invalid("recent_permits", format!("too large: {permits}")));
    }
    let growth_rate_5yr = row.required_number("growth_rate_5yr", GROWTH_RATE)?;
    let mf_share = row.required_number("mf_share", MF_SHARE)?;
    if !(0.0..=100.0).contains(&mf_share) {
        return Err(row.invalid("mf_share", format!("outside 0-100: {mf_share}")));
    }

    Ok(Place {
        place_name: row
            .text(PLACE_NAME)
            .unwrap_or(place_id.as_str())
            .to_string(),
        state_id: row.text(STATE_ID).unwrap_or_default().to_string(),
        state_name: row.text(STATE_NAME).unwrap_or_default().to_string(),
        recent_permits: permits.round() as u64,
        growth_rate_5yr,
        mf_share,
        place_id,
    })
}

/// `Ok(None)` for rows the source data leaves incomplete on purpose.
fn reform_from_row(row: &RawRow<'_>) -> Result<Option<ReformRecord>, DataError> {
    let (Some(place_name), Some(reform_type)) = (row.text(PLACE_NAME), row.text(REFORM_TYPE))
    else {
        return Ok(None);
    };

    let place_id = row.required_text("place_id", PLACE_ID)?.to_string();
    let date_text = row.required_text("effective_date", EFFECTIVE_DATE)?;
    let effective_date = parse_date(date_text)
        .ok_or_else(|| row.invalid("effective_date", format!("unrecognized date: {date_text:?}")))?;

    // Zero is how the source marks an unknown index.
    let baseline_restrictiveness = match row.number("baseline_restrictiveness", RESTRICTIVENESS)? {
        Some(v) if v < 0.0 => {
            return Err(row.invalid("baseline_restrictiveness", format!("negative: {v}")));
        }
        Some(v) if v == 0.0 => None,
        other => other,
    };

    Ok(Some(ReformRecord {
        place_name: place_name.to_string(),
        state_id: row.text(STATE_ID).unwrap_or_default().to_string(),
        state_name: row.text(STATE_NAME).unwrap_or_default().to_string(),
        reform_name: row.text(REFORM_NAME).unwrap_or_default().to_string(),
        reform_type: ReformType::parse(reform_type),
        effective_date,
        baseline_restrictiveness,
        place_id,
    }))
}

fn parse_date(text: &str) -> Option<NaiveDate> {
    DATE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(text, fmt).ok())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_detection_is_case_insensitive() {
        assert_eq!(Format::detect(Path::new("a/Places.JSON")).unwrap(), Format::Json);
        assert_eq!(Format::detect(Path::new("reforms.csv")).unwrap(), Format::Csv);
        assert!(matches!(
            Format::detect(Path::new("places.xlsx")),
            Err(DataError::UnsupportedFormat { .. })
        ));
    }

    #[test]
    fn both_date_formats_parse() {
        let expected = NaiveDate::from_ymd_opt(2021, 8, 1);
        assert_eq!(parse_date("2021-08-01"), expected);
        assert_eq!(parse_date("08/01/2021"), expected);
        assert_eq!(parse_date("August 2021"), None);
    }
}
