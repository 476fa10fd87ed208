//! # Table Decoder
//!
//! カンマ区切りテキストを表にデコードし、列ごとに型を推定する

use csv::{ReaderBuilder, StringRecord};
use std::collections::HashSet;

use crate::domain::entities::table::{Cell, ColumnType, Table};
use crate::domain::error::UtilsError;

const UTF8_BOM: &[u8] = &[0xEF, 0xBB, 0xBF];

/// 欠損値として扱う文字列
const NA_VALUES: &[&str] = &[
    "", "#N/A", "#N/A N/A", "#NA", "-1.#IND", "-1.#QNAN", "-NaN", "-nan", "1.#IND", "1.#QNAN",
    "<NA>", "N/A", "NA", "NULL", "NaN", "None", "n/a", "nan", "null",
];

/// CSVデコーダー
pub struct TableDecoder;

impl TableDecoder {
    /// CSVのバイト列を表にデコードする
    ///
    /// 先頭行を列名とし、空行は読み飛ばす。列名より短い行は欠損値で埋める
    ///
    /// # Errors
    ///
    /// - 内容がない、またはデータ行がない場合は `UtilsError::EmptyResult`
    /// - UTF-8として不正、または列名より長い行がある場合は `UtilsError::Parse`
    pub fn decode(bytes: &[u8]) -> Result<Table, UtilsError> {
        let bytes = bytes.strip_prefix(UTF8_BOM).unwrap_or(bytes);
        if bytes.iter().all(u8::is_ascii_whitespace) {
            return Err(UtilsError::EmptyResult(
                "no columns to parse from content".to_string(),
            ));
        }

        let mut reader = ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_reader(bytes);

        let headers = reader
            .headers()
            .map_err(|e| UtilsError::Parse(format!("failed to read header line: {}", e)))?
            .clone();
        let columns = Self::column_names(&headers);
        let width = columns.len();

        let mut raw_rows: Vec<Vec<Option<String>>> = Vec::new();
        for (index, record) in reader.records().enumerate() {
            let line = index + 2;
            let record = record
                .map_err(|e| UtilsError::Parse(format!("line {}: {}", line, e)))?;

            if record.len() > width {
                return Err(UtilsError::Parse(format!(
                    "line {}: expected {} fields, saw {}",
                    line,
                    width,
                    record.len()
                )));
            }

            let mut row: Vec<Option<String>> = record.iter().map(Self::normalize).collect();
            row.resize(width, None);
            raw_rows.push(row);
        }

        if raw_rows.is_empty() {
            return Err(UtilsError::EmptyResult(format!(
                "header line with {} columns but no data rows",
                width
            )));
        }

        let column_types: Vec<ColumnType> = (0..width)
            .map(|c| Self::infer_type(raw_rows.iter().filter_map(|row| row[c].as_deref())))
            .collect();

        let rows = raw_rows
            .into_iter()
            .map(|row| {
                row.into_iter()
                    .zip(column_types.iter())
                    .map(|(value, ty)| Self::convert(value, *ty))
                    .collect()
            })
            .collect();

        Table::new(columns, column_types, rows)
    }

    /// 列名を決める（空は `Unnamed: i`、重複は `name.1`, `name.2`, ...）
    fn column_names(headers: &StringRecord) -> Vec<String> {
        let mut used = HashSet::new();
        let mut columns = Vec::with_capacity(headers.len());

        for (i, header) in headers.iter().enumerate() {
            let base = if header.is_empty() {
                format!("Unnamed: {}", i)
            } else {
                header.to_string()
            };

            let mut name = base.clone();
            let mut suffix = 1;
            while used.contains(&name) {
                name = format!("{}.{}", base, suffix);
                suffix += 1;
            }

            used.insert(name.clone());
            columns.push(name);
        }

        columns
    }

    fn normalize(field: &str) -> Option<String> {
        if NA_VALUES.contains(&field) {
            None
        } else {
            Some(field.to_string())
        }
    }

    /// 欠損でない値から列の型を推定する
    fn infer_type<'a>(values: impl Iterator<Item = &'a str>) -> ColumnType {
        let mut seen = false;
        let mut all_int = true;
        let mut all_float = true;
        let mut all_bool = true;

        for value in values {
            let value = value.trim();
            seen = true;
            all_int = all_int && value.parse::<i64>().is_ok();
            all_float = all_float && Self::parse_float(value).is_some();
            all_bool = all_bool && Self::parse_bool(value).is_some();

            if !all_int && !all_float && !all_bool {
                return ColumnType::Text;
            }
        }

        match (seen, all_int, all_float, all_bool) {
            (false, ..) => ColumnType::Empty,
            (true, true, ..) => ColumnType::Int,
            (true, false, true, _) => ColumnType::Float,
            (true, false, false, true) => ColumnType::Bool,
            _ => ColumnType::Text,
        }
    }

    fn convert(value: Option<String>, ty: ColumnType) -> Cell {
        let Some(value) = value else {
            return Cell::Null;
        };

        // infer_type guarantees the parse succeeds for the chosen type
        let trimmed = value.trim();
        match ty {
            ColumnType::Empty => Cell::Null,
            ColumnType::Int => match trimmed.parse::<i64>() {
                Ok(v) => Cell::Int(v),
                Err(_) => Cell::Text(value),
            },
            ColumnType::Float => match Self::parse_float(trimmed) {
                Some(v) => Cell::Float(v),
                None => Cell::Text(value),
            },
            ColumnType::Bool => match Self::parse_bool(trimmed) {
                Some(v) => Cell::Bool(v),
                None => Cell::Text(value),
            },
            ColumnType::Text => Cell::Text(value),
        }
    }

    fn parse_float(value: &str) -> Option<f64> {
        value.parse::<f64>().ok().filter(|v| v.is_finite())
    }

    fn parse_bool(value: &str) -> Option<bool> {
        if value.eq_ignore_ascii_case("true") {
            Some(true)
        } else if value.eq_ignore_ascii_case("false") {
            Some(false)
        } else {
            None
        }
    }
}
