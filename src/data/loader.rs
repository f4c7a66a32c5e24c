use std::fs::File;
use std::io::Read;
use std::path::Path;

use arrow::array::{Array, ArrayRef, AsArray};
use arrow::datatypes::{DataType, Float32Type, Float64Type, Int32Type, Int64Type};
use parquet::arrow::arrow_reader::ParquetRecordBatchReaderBuilder;
use serde_json::{Map, Value as JsonValue};

use super::error::LoadError;
use super::model::{
    LaunchDataset, LaunchRecord, Outcome, BOOSTER_COLUMN, OUTCOME_COLUMN, PAYLOAD_COLUMN,
    SITE_COLUMN,
};

// ---------------------------------------------------------------------------
// Public entry-point
// ---------------------------------------------------------------------------

/// Load a launch table from a file.  Dispatch by extension.
///
/// Supported formats:
/// * `.csv`     – header row with the four launch columns (others ignored)
/// * `.json`    – `[{ "Launch Site": ..., "Payload Mass (kg)": ..., ... }, ...]`
/// * `.parquet` – columns with the same names, written by Pandas or Polars
///
/// Any malformed row fails the whole load.
pub fn load_file(path: &Path) -> Result<LaunchDataset, LoadError> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_ascii_lowercase();

    let records = match ext.as_str() {
        "csv" => parse_csv(open(path)?)?,
        "json" => {
            let mut text = String::new();
            open(path)?
                .read_to_string(&mut text)
                .map_err(|source| LoadError::Io {
                    path: path.to_path_buf(),
                    source,
                })?;
            parse_json(&text)?
        }
        "parquet" | "pq" => parse_parquet(open(path)?)?,
        other => return Err(LoadError::UnsupportedFormat(other.to_string())),
    };

    log::debug!("parsed {} launch rows from {}", records.len(), path.display());
    LaunchDataset::from_records(records)
}

fn open(path: &Path) -> Result<File, LoadError> {
    File::open(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })
}

// ---------------------------------------------------------------------------
// CSV loader
// ---------------------------------------------------------------------------

/// CSV layout: header row with column names, one launch per row.
pub fn parse_csv<R: Read>(source: R) -> Result<Vec<LaunchRecord>, LoadError> {
    let mut reader = csv::Reader::from_reader(source);
    let headers = reader.headers()?.clone();

    let column = |name: &'static str| {
        headers
            .iter()
            .position(|h| h.trim() == name)
            .ok_or(LoadError::MissingColumn { column: name })
    };
    let site_idx = column(SITE_COLUMN)?;
    let payload_idx = column(PAYLOAD_COLUMN)?;
    let outcome_idx = column(OUTCOME_COLUMN)?;
    let booster_idx = column(BOOSTER_COLUMN)?;

    let mut records = Vec::new();

    for (row, result) in reader.records().enumerate() {
        let record = result?;
        let cell = |idx: usize, name: &'static str| present(record.get(idx), row, name);

        let payload_raw = cell(payload_idx, PAYLOAD_COLUMN)?;
        let payload_mass = payload_raw
            .trim()
            .parse::<f64>()
            .map_err(|_| invalid(row, PAYLOAD_COLUMN, payload_raw))?;

        let outcome_raw = cell(outcome_idx, OUTCOME_COLUMN)?;
        let outcome =
            Outcome::parse(outcome_raw).ok_or_else(|| invalid(row, OUTCOME_COLUMN, outcome_raw))?;

        records.push(LaunchRecord {
            site: cell(site_idx, SITE_COLUMN)?.to_string(),
            payload_mass,
            outcome,
            booster_category: cell(booster_idx, BOOSTER_COLUMN)?.to_string(),
        });
    }

    Ok(records)
}

/// A blank cell counts as missing, the same as a JSON `null` or a Parquet null.
fn present<'a>(value: Option<&'a str>, row: usize, column: &'static str) -> Result<&'a str, LoadError> {
    match value {
        Some(v) if !v.trim().is_empty() => Ok(v),
        _ => Err(LoadError::MissingField { row, column }),
    }
}

fn invalid(row: usize, column: &'static str, value: impl ToString) -> LoadError {
    LoadError::InvalidField {
        row,
        column,
        value: value.to_string(),
    }
}

// ---------------------------------------------------------------------------
// JSON loader
// ---------------------------------------------------------------------------

/// Expected JSON schema (records-oriented, `df.to_json(orient='records')`):
///
/// ```json
/// [
///   {
///     "Launch Site": "CCAFS LC-40",
///     "Payload Mass (kg)": 525.0,
///     "class": 0,
///     "Booster Version Category": "v1.0"
///   },
///   ...
/// ]
/// ```
pub fn parse_json(text: &str) -> Result<Vec<LaunchRecord>, LoadError> {
    let root: JsonValue = serde_json::from_str(text)?;
    let rows = root
        .as_array()
        .ok_or_else(|| LoadError::Malformed("expected top-level JSON array".to_string()))?;

    rows.iter()
        .enumerate()
        .map(|(row, value)| {
            let obj = value
                .as_object()
                .ok_or_else(|| LoadError::Malformed(format!("row {row} is not a JSON object")))?;
            json_record(obj, row)
        })
        .collect()
}

fn json_record(obj: &Map<String, JsonValue>, row: usize) -> Result<LaunchRecord, LoadError> {
    let field = move |name: &'static str| match obj.get(name) {
        None | Some(JsonValue::Null) => Err(LoadError::MissingField { row, column: name }),
        Some(v) => Ok(v),
    };
    let text = move |name: &'static str| {
        let v = field(name)?;
        let s = v.as_str().ok_or_else(|| invalid(row, name, v))?;
        present(Some(s), row, name).map(str::to_string)
    };

    let payload = field(PAYLOAD_COLUMN)?;
    let payload_mass = payload
        .as_f64()
        .ok_or_else(|| invalid(row, PAYLOAD_COLUMN, payload))?;

    let class = field(OUTCOME_COLUMN)?;
    let outcome = match class {
        JsonValue::Bool(b) => Some(if *b { Outcome::Success } else { Outcome::Failure }),
        JsonValue::Number(n) => match n.as_i64() {
            Some(i) => Outcome::from_class(i),
            None => n.as_f64().and_then(Outcome::from_class_f64),
        },
        _ => None,
    }
    .ok_or_else(|| invalid(row, OUTCOME_COLUMN, class))?;

    Ok(LaunchRecord {
        site: text(SITE_COLUMN)?,
        payload_mass,
        outcome,
        booster_category: text(BOOSTER_COLUMN)?,
    })
}

// ---------------------------------------------------------------------------
// Parquet loader
// ---------------------------------------------------------------------------

/// Load launches from a Parquet file.
///
/// Expected schema:
/// - `Launch Site`, `Booster Version Category`: Utf8 or LargeUtf8
/// - `Payload Mass (kg)`: Float64, Float32, Int64 or Int32
/// - `class`: Int64, Int32, Float64 or Boolean
///
/// Works with files written by both **Pandas** (`df.to_parquet()`) and
/// **Polars** (`df.write_parquet()`).
pub fn parse_parquet(file: File) -> Result<Vec<LaunchRecord>, LoadError> {
    let reader = ParquetRecordBatchReaderBuilder::try_new(file)?.build()?;

    let mut records = Vec::new();

    for batch_result in reader {
        let batch = batch_result?;
        let schema = batch.schema();
        let column = |name: &'static str| {
            schema
                .index_of(name)
                .map(|i| batch.column(i))
                .map_err(|_| LoadError::MissingColumn { column: name })
        };
        let site_col = column(SITE_COLUMN)?;
        let payload_col = column(PAYLOAD_COLUMN)?;
        let outcome_col = column(OUTCOME_COLUMN)?;
        let booster_col = column(BOOSTER_COLUMN)?;

        // Row numbers run across batches.
        let offset = records.len();
        for i in 0..batch.num_rows() {
            let row = offset + i;
            let payload_mass = number_at(payload_col, i, row, PAYLOAD_COLUMN)?;
            let class = number_at(outcome_col, i, row, OUTCOME_COLUMN)?;
            let outcome = Outcome::from_class_f64(class)
                .ok_or_else(|| invalid(row, OUTCOME_COLUMN, class))?;

            records.push(LaunchRecord {
                site: string_at(site_col, i, row, SITE_COLUMN)?,
                payload_mass,
                outcome,
                booster_category: string_at(booster_col, i, row, BOOSTER_COLUMN)?,
            });
        }
    }

    Ok(records)
}

// -- Arrow helpers --

fn string_at(
    col: &ArrayRef,
    i: usize,
    row: usize,
    name: &'static str,
) -> Result<String, LoadError> {
    if col.is_null(i) {
        return Err(LoadError::MissingField { row, column: name });
    }
    let value = match col.data_type() {
        DataType::Utf8 => col.as_string::<i32>().value(i),
        DataType::LargeUtf8 => col.as_string::<i64>().value(i),
        other => return Err(unsupported_type(name, other)),
    };
    present(Some(value), row, name).map(str::to_string)
}

/// Read a numeric (or boolean) cell widened to `f64`.
fn number_at(col: &ArrayRef, i: usize, row: usize, name: &'static str) -> Result<f64, LoadError> {
    if col.is_null(i) {
        return Err(LoadError::MissingField { row, column: name });
    }
    match col.data_type() {
        DataType::Float64 => Ok(col.as_primitive::<Float64Type>().value(i)),
        DataType::Float32 => Ok(col.as_primitive::<Float32Type>().value(i) as f64),
        DataType::Int64 => Ok(col.as_primitive::<Int64Type>().value(i) as f64),
        DataType::Int32 => Ok(col.as_primitive::<Int32Type>().value(i) as f64),
        DataType::Boolean => Ok(if col.as_boolean().value(i) { 1.0 } else { 0.0 }),
        other => Err(unsupported_type(name, other)),
    }
}

fn unsupported_type(name: &str, data_type: &DataType) -> LoadError {
    LoadError::Malformed(format!("column '{name}' has unsupported type {data_type:?}"))
}
