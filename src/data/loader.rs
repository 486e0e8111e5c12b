use std::collections::HashMap;
use std::path::Path;

use arrow::array::{
    Array, ArrayRef, BooleanArray, Float32Array, Float64Array, Int32Array, Int64Array,
    LargeStringArray, StringArray, StringViewArray,
};
use arrow::datatypes::DataType;
use arrow::util::display::{ArrayFormatter, FormatOptions};
use bytes::Bytes;
use parquet::arrow::arrow_reader::ParquetRecordBatchReaderBuilder;
use serde_json::Value as JsonValue;

use super::error::LoadError;
use super::model::{CellValue, RawTable};

// ---------------------------------------------------------------------------
// Upload – a named blob of bytes
// ---------------------------------------------------------------------------

/// A file handed to the analyzer. Everything is read into memory up front so
/// the cache can key on content regardless of where it came from.
#[derive(Debug, Clone)]
pub struct Upload {
    pub name: String,
    pub bytes: Vec<u8>,
}

/// Input formats, chosen by file extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    Csv,
    Json,
    Parquet,
}

impl Format {
    pub fn as_str(self) -> &'static str {
        match self {
            Format::Csv => "csv",
            Format::Json => "json",
            Format::Parquet => "parquet",
        }
    }
}

impl Upload {
    pub fn new(name: impl Into<String>, bytes: Vec<u8>) -> Self {
        Upload {
            name: name.into(),
            bytes,
        }
    }

    /// Read a file from disk.
    pub fn from_path(path: &Path) -> Result<Self, LoadError> {
        let bytes = std::fs::read(path).map_err(|source| LoadError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());
        Ok(Upload::new(name, bytes))
    }

    /// Format implied by the name. No extension means CSV.
    pub fn format(&self) -> Result<Format, LoadError> {
        let ext = Path::new(&self.name)
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase());

        match ext.as_deref() {
            None | Some("csv") => Ok(Format::Csv),
            Some("json") => Ok(Format::Json),
            Some("parquet") | Some("pq") => Ok(Format::Parquet),
            Some(other) => Err(LoadError::UnsupportedFormat(other.to_string())),
        }
    }
}

// ---------------------------------------------------------------------------
// Public entry-point
// ---------------------------------------------------------------------------

/// Parse an upload into a [`RawTable`]. Dispatch by extension.
///
/// Supported formats:
/// * `.csv`     – header row, `\n` or `\r\n` line endings (recommended)
/// * `.json`    – `[{ "Title": ..., "Genre": ..., ... }, ...]`
/// * `.parquet` – flat columns of strings, numbers, booleans or dates
pub fn parse_upload(upload: &Upload) -> Result<RawTable, LoadError> {
    let table = match upload.format()? {
        Format::Csv => parse_csv(&upload.bytes, &upload.name)?,
        Format::Json => parse_json(&upload.bytes)?,
        Format::Parquet => parse_parquet(Bytes::from(upload.bytes.clone()))?,
    };
    log::info!(
        "Parsed {} rows x {} columns from {}",
        table.len(),
        table.columns.len(),
        upload.name
    );
    Ok(table)
}

// ---------------------------------------------------------------------------
// CSV loader
// ---------------------------------------------------------------------------

/// CSV layout: header row with column names, one record per line.
/// Rows may be shorter than the header; missing trailing cells read as null.
fn parse_csv(bytes: &[u8], name: &str) -> Result<RawTable, LoadError> {
    let mut reader = csv::ReaderBuilder::new()
        .flexible(true)
        .from_reader(bytes);

    let columns: Vec<String> = reader.headers()?.iter().map(|h| h.to_string()).collect();
    if columns.is_empty() || columns.iter().all(|c| c.is_empty()) {
        return Err(LoadError::Empty {
            name: name.to_string(),
        });
    }

    let mut rows = Vec::new();
    for result in reader.records() {
        let record = result?;
        rows.push(record.iter().map(CellValue::infer).collect());
    }

    Ok(RawTable::new(columns, rows))
}

// ---------------------------------------------------------------------------
// JSON loader
// ---------------------------------------------------------------------------

/// Records-oriented JSON, the default `df.to_json(orient='records')`:
///
/// ```json
/// [
///   { "Title": "Spider-Man", "Genre": "Action, Adventure", "Popularity": 5083.9 },
///   ...
/// ]
/// ```
///
/// Columns are the union of keys, in first-seen order.
fn parse_json(bytes: &[u8]) -> Result<RawTable, LoadError> {
    let root: JsonValue = serde_json::from_slice(bytes)?;
    let records = root
        .as_array()
        .ok_or_else(|| LoadError::JsonLayout("expected a top-level array".into()))?;

    let mut columns: Vec<String> = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();
    let mut sparse_rows: Vec<Vec<(usize, CellValue)>> = Vec::with_capacity(records.len());

    for (i, rec) in records.iter().enumerate() {
        let obj = rec
            .as_object()
            .ok_or_else(|| LoadError::JsonLayout(format!("record {i} is not an object")))?;

        let mut cells = Vec::with_capacity(obj.len());
        for (key, val) in obj {
            let col = *index.entry(key.clone()).or_insert_with(|| {
                columns.push(key.clone());
                columns.len() - 1
            });
            cells.push((col, json_to_cell(val)));
        }
        sparse_rows.push(cells);
    }

    let rows = sparse_rows
        .into_iter()
        .map(|cells| {
            let mut row = vec![CellValue::Null; columns.len()];
            for (col, value) in cells {
                row[col] = value;
            }
            row
        })
        .collect();

    Ok(RawTable::new(columns, rows))
}

fn json_to_cell(val: &JsonValue) -> CellValue {
    match val {
        JsonValue::String(s) if s.is_empty() => CellValue::Null,
        JsonValue::String(s) => CellValue::String(s.clone()),
        JsonValue::Number(n) => {
            if let Some(i) = n.as_i64() {
                CellValue::Integer(i)
            } else if let Some(f) = n.as_f64() {
                CellValue::Float(f)
            } else {
                CellValue::String(n.to_string())
            }
        }
        JsonValue::Bool(b) => CellValue::Bool(*b),
        JsonValue::Null => CellValue::Null,
        other => CellValue::String(other.to_string()),
    }
}

// ---------------------------------------------------------------------------
// Parquet loader
// ---------------------------------------------------------------------------

/// Load a flat Parquet file. Works with files written by both **Pandas**
/// (`df.to_parquet()`) and **Polars** (`df.write_parquet()`).
fn parse_parquet(bytes: Bytes) -> Result<RawTable, LoadError> {
    let builder = ParquetRecordBatchReaderBuilder::try_new(bytes)?;
    let columns: Vec<String> = builder
        .schema()
        .fields()
        .iter()
        .map(|f| f.name().clone())
        .collect();
    let reader = builder.build()?;

    let mut rows = Vec::new();
    for batch_result in reader {
        let batch = batch_result?;
        let arrays = batch.columns();
        for row in 0..batch.num_rows() {
            let mut cells = Vec::with_capacity(arrays.len());
            for col in arrays {
                cells.push(arrow_cell(col, row)?);
            }
            rows.push(cells);
        }
    }

    Ok(RawTable::new(columns, rows))
}

/// Extract a single cell from an Arrow column at a given row.
fn arrow_cell(col: &ArrayRef, row: usize) -> Result<CellValue, LoadError> {
    if col.is_null(row) {
        return Ok(CellValue::Null);
    }
    let any = col.as_any();
    let value = match col.data_type() {
        DataType::Utf8 => any
            .downcast_ref::<StringArray>()
            .map(|a| text_cell(a.value(row))),
        DataType::LargeUtf8 => any
            .downcast_ref::<LargeStringArray>()
            .map(|a| text_cell(a.value(row))),
        DataType::Utf8View => any
            .downcast_ref::<StringViewArray>()
            .map(|a| text_cell(a.value(row))),
        DataType::Int32 => any
            .downcast_ref::<Int32Array>()
            .map(|a| CellValue::Integer(a.value(row) as i64)),
        DataType::Int64 => any
            .downcast_ref::<Int64Array>()
            .map(|a| CellValue::Integer(a.value(row))),
        DataType::Float32 => any
            .downcast_ref::<Float32Array>()
            .map(|a| float_cell(a.value(row) as f64)),
        DataType::Float64 => any
            .downcast_ref::<Float64Array>()
            .map(|a| float_cell(a.value(row))),
        DataType::Boolean => any
            .downcast_ref::<BooleanArray>()
            .map(|a| CellValue::Bool(a.value(row))),
        _ => None,
    };

    match value {
        Some(v) => Ok(v),
        // Dates, timestamps and anything exotic go through Arrow's formatter.
        None => {
            let formatter = ArrayFormatter::try_new(col.as_ref(), &FormatOptions::default())?;
            Ok(text_cell(&formatter.value(row).to_string()))
        }
    }
}

fn text_cell(s: &str) -> CellValue {
    if s.is_empty() {
        CellValue::Null
    } else {
        CellValue::String(s.to_string())
    }
}

fn float_cell(v: f64) -> CellValue {
    if v.is_nan() {
        CellValue::Null
    } else {
        CellValue::Float(v)
    }
}
