// src/export.rs

use anyhow::{Context, Result};
use arrow::{
    array::{ArrayRef, Date32Array, Float64Array, StringArray},
    datatypes::{DataType, Field, Schema},
    record_batch::RecordBatch,
};
use chrono::{Datelike, NaiveDate};
use parquet::arrow::ArrowWriter;
use parquet::basic::Compression;
use parquet::file::properties::WriterProperties;
use std::{
    fs::File,
    io::Write,
    path::Path,
    sync::Arc,
};
use tracing::{debug, instrument};

use crate::record::{RecordSet, Value};

/// Identifier columns kept as text even when every value parses as a
/// number: jerseys `0` and `00` are different players.
const TEXT_COLUMNS: &[&str] = &["NUMBER", "SEASON", "TEAM"];

/// Strip thousands separators so `796,264` reads as a number.
fn numeric(s: &str) -> Option<f64> {
    let cleaned: String = s.trim().chars().filter(|c| *c != ',').collect();
    if cleaned.is_empty() {
        return None;
    }
    cleaned.parse::<f64>().ok()
}

/// Column type from its present values: dates stay dates, all-numeric text
/// becomes Float64, anything else (or nothing at all) is Utf8.
fn infer_type(values: &[&Value]) -> DataType {
    let present: Vec<&Value> = values.iter().copied().filter(|v| !v.is_missing()).collect();
    if present.is_empty() {
        return DataType::Utf8;
    }
    if present.iter().all(|v| matches!(v, Value::Date(_))) {
        return DataType::Date32;
    }
    if present
        .iter()
        .all(|v| v.as_str().and_then(numeric).is_some())
    {
        return DataType::Float64;
    }
    DataType::Utf8
}

/// Days between 0001-01-01 and 1970-01-01.
const UNIX_EPOCH_FROM_CE: i32 = 719_163;

fn days_since_epoch(d: &NaiveDate) -> i32 {
    d.num_days_from_ce() - UNIX_EPOCH_FROM_CE
}

fn build_array(values: &[&Value], ty: &DataType) -> ArrayRef {
    match ty {
        DataType::Date32 => Arc::new(Date32Array::from(
            values
                .iter()
                .map(|v| match v {
                    Value::Date(d) => Some(days_since_epoch(d)),
                    _ => None,
                })
                .collect::<Vec<_>>(),
        )),
        DataType::Float64 => Arc::new(Float64Array::from(
            values
                .iter()
                .map(|v| v.as_str().and_then(numeric))
                .collect::<Vec<_>>(),
        )),
        _ => Arc::new(StringArray::from(
            values
                .iter()
                .map(|v| match v {
                    Value::Missing => None,
                    other => Some(other.to_string()),
                })
                .collect::<Vec<_>>(),
        )),
    }
}

/// Typed Arrow view of a record set.
pub fn to_record_batch(set: &RecordSet) -> Result<RecordBatch> {
    let mut fields = Vec::with_capacity(set.columns().len());
    let mut arrays = Vec::with_capacity(set.columns().len());

    for (i, name) in set.columns().iter().enumerate() {
        let values: Vec<&Value> = set.rows().iter().map(|r| &r[i]).collect();
        let ty = if TEXT_COLUMNS.contains(&name.as_str()) {
            DataType::Utf8
        } else {
            infer_type(&values)
        };
        arrays.push(build_array(&values, &ty));
        fields.push(Field::new(name, ty, true));
    }

    RecordBatch::try_new(Arc::new(Schema::new(fields)), arrays)
        .context("building record batch from normalized rows")
}

/// Write `set` as a single Snappy-compressed Parquet file.
#[instrument(level = "info", skip(set, path), fields(path = %path.as_ref().display(), rows = set.len()))]
pub fn write_parquet<P: AsRef<Path>>(set: &RecordSet, path: P) -> Result<()> {
    let path = path.as_ref();
    let batch = to_record_batch(set)?;
    let file = File::create(path).with_context(|| format!("creating {:?}", path))?;
    let props = WriterProperties::builder()
        .set_compression(Compression::SNAPPY)
        .build();
    let mut writer = ArrowWriter::try_new(file, batch.schema(), Some(props))
        .context("creating Arrow writer")?;
    writer.write(&batch).context("writing batch")?;
    writer.close().context("closing Parquet writer")?;
    debug!("parquet written");
    Ok(())
}

/// One JSON object per row, keys in column order, missing cells as `null`.
pub fn write_json_lines<W: Write>(set: &RecordSet, mut out: W) -> Result<()> {
    for record in set.records() {
        serde_json::to_writer(&mut out, &record).context("serializing record")?;
        out.write_all(b"\n")?;
    }
    out.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::RecordSetBuilder;
    use arrow::array::Array;
    use parquet::arrow::arrow_reader::ParquetRecordBatchReaderBuilder;
    use tempfile::tempdir;

    fn sample() -> RecordSet {
        let cols = ["PLAYER", "BIRTH_DATE", "WEIGHT", "ATTENDANCE", "COLLEGE"]
            .iter()
            .map(|c| c.to_string())
            .collect();
        let mut b = RecordSetBuilder::new("test", cols);
        b.push(vec![
            Value::text("Jayson Tatum"),
            Value::Date(NaiveDate::from_ymd_opt(1998, 3, 3).unwrap()),
            Value::text("210"),
            Value::text("796,264"),
            Value::text("Duke"),
        ])
        .unwrap();
        b.push(vec![
            Value::text("Sam Hauser"),
            Value::Missing,
            Value::text("217"),
            Value::Missing,
            Value::Missing,
        ])
        .unwrap();
        b.finish()
    }

    #[test]
    fn test_infers_column_types() -> Result<()> {
        let batch = to_record_batch(&sample())?;
        let schema = batch.schema();
        assert_eq!(schema.field(0).data_type(), &DataType::Utf8);
        assert_eq!(schema.field(1).data_type(), &DataType::Date32);
        assert_eq!(schema.field(2).data_type(), &DataType::Float64);
        assert_eq!(schema.field(3).data_type(), &DataType::Float64);
        assert_eq!(schema.field(4).data_type(), &DataType::Utf8);

        let attendance = batch
            .column(3)
            .as_any()
            .downcast_ref::<Float64Array>()
            .unwrap();
        assert_eq!(attendance.value(0), 796264.0);
        assert!(attendance.is_null(1));
        Ok(())
    }

    #[test]
    fn test_jersey_numbers_stay_text() -> Result<()> {
        let cols = ["NUMBER", "WEIGHT"].iter().map(|c| c.to_string()).collect();
        let mut b = RecordSetBuilder::new("roster", cols);
        b.push(vec![Value::text("0"), Value::text("210")]).unwrap();
        b.push(vec![Value::text("00"), Value::text("223")]).unwrap();
        let batch = to_record_batch(&b.finish())?;

        assert_eq!(batch.schema().field(0).data_type(), &DataType::Utf8);
        assert_eq!(batch.schema().field(1).data_type(), &DataType::Float64);
        let numbers = batch
            .column(0)
            .as_any()
            .downcast_ref::<StringArray>()
            .unwrap();
        assert_eq!(numbers.value(0), "0");
        assert_eq!(numbers.value(1), "00");
        Ok(())
    }

    #[test]
    fn test_json_lines_keep_column_order_and_nulls() -> Result<()> {
        let mut buf = Vec::new();
        write_json_lines(&sample(), &mut buf)?;
        let text = String::from_utf8(buf)?;
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 2);
        assert_eq!(
            lines[0],
            r#"{"PLAYER":"Jayson Tatum","BIRTH_DATE":"1998-03-03","WEIGHT":"210","ATTENDANCE":"796,264","COLLEGE":"Duke"}"#
        );
        assert!(lines[1].contains(r#""BIRTH_DATE":null"#));
        Ok(())
    }

    #[test]
    fn test_parquet_round_trips_row_count() -> Result<()> {
        let dir = tempdir()?;
        let path = dir.path().join("roster.parquet");
        write_parquet(&sample(), &path)?;

        let file = File::open(&path)?;
        let reader = ParquetRecordBatchReaderBuilder::try_new(file)?.build()?;
        let rows: usize = reader.map(|b| b.map(|b| b.num_rows())).sum::<Result<usize, _>>()?;
        assert_eq!(rows, 2);
        Ok(())
    }
}
