//! # Table Value Object
//!
//! CSVから得られた表形式データ

use serde::Serialize;
use std::fmt;

use crate::domain::error::UtilsError;

/// セルの値
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Cell {
    Null,
    Int(i64),
    Float(f64),
    Bool(bool),
    Text(String),
}

impl Cell {
    #[inline]
    pub fn is_null(&self) -> bool {
        matches!(self, Cell::Null)
    }

    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Cell::Int(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Cell::Int(v) => Some(*v as f64),
            Cell::Float(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Cell::Text(s) => Some(s),
            _ => None,
        }
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Cell::Null => Ok(()),
            Cell::Int(v) => write!(f, "{}", v),
            Cell::Float(v) => write!(f, "{}", v),
            Cell::Bool(v) => write!(f, "{}", v),
            Cell::Text(s) => f.write_str(s),
        }
    }
}

impl From<i64> for Cell {
    fn from(v: i64) -> Self {
        Cell::Int(v)
    }
}

impl From<f64> for Cell {
    fn from(v: f64) -> Self {
        Cell::Float(v)
    }
}

impl From<bool> for Cell {
    fn from(v: bool) -> Self {
        Cell::Bool(v)
    }
}

impl From<&str> for Cell {
    fn from(v: &str) -> Self {
        Cell::Text(v.to_string())
    }
}

/// 列の推定型
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ColumnType {
    /// 値が一つもない列
    Empty,
    Int,
    Float,
    Bool,
    Text,
}

/// 表
///
/// 列名は先頭行から決まり、行の順序は元データの順序を保つ
#[derive(Debug, Clone, PartialEq)]
pub struct Table {
    columns: Vec<String>,
    column_types: Vec<ColumnType>,
    rows: Vec<Vec<Cell>>,
}

impl Table {
    /// 新しい表を作成
    ///
    /// # Errors
    ///
    /// 列の型の数、または行の長さが列数と一致しない場合は `UtilsError::InvalidInput`
    pub fn new(
        columns: Vec<String>,
        column_types: Vec<ColumnType>,
        rows: Vec<Vec<Cell>>,
    ) -> Result<Self, UtilsError> {
        let width = columns.len();
        if column_types.len() != width {
            return Err(UtilsError::invalid_input(format!(
                "{} column types for {} columns",
                column_types.len(),
                width
            )));
        }
        if let Some((index, row)) = rows.iter().enumerate().find(|(_, r)| r.len() != width) {
            return Err(UtilsError::invalid_input(format!(
                "row {} has {} cells, expected {}",
                index,
                row.len(),
                width
            )));
        }

        Ok(Self {
            columns,
            column_types,
            rows,
        })
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn column_types(&self) -> &[ColumnType] {
        &self.column_types
    }

    /// データ行の数
    #[inline]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// 列名の位置
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c == name)
    }

    /// 行を取得
    pub fn row(&self, index: usize) -> Option<Record<'_>> {
        self.rows.get(index).map(|cells| Record {
            columns: &self.columns,
            cells,
        })
    }

    /// 全行を順に返す
    pub fn records(&self) -> impl Iterator<Item = Record<'_>> + '_ {
        self.rows.iter().map(move |cells| Record {
            columns: &self.columns,
            cells,
        })
    }

    /// 列の値を行順に返す
    pub fn column(&self, name: &str) -> Option<Vec<&Cell>> {
        let index = self.column_index(name)?;
        Some(self.rows.iter().map(|row| &row[index]).collect())
    }

    /// 行ごとのJSONオブジェクトに変換（列順を保持）
    pub fn to_json_rows(&self) -> Vec<serde_json::Value> {
        self.records().map(|record| record.to_json()).collect()
    }
}

/// 1行分のビュー（列名 → セル）
#[derive(Debug, Clone, Copy)]
pub struct Record<'a> {
    columns: &'a [String],
    cells: &'a [Cell],
}

impl<'a> Record<'a> {
    pub fn get(&self, column: &str) -> Option<&'a Cell> {
        let index = self.columns.iter().position(|c| c == column)?;
        self.cells.get(index)
    }

    pub fn cells(&self) -> &'a [Cell] {
        self.cells
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'a str, &'a Cell)> + 'a {
        self.columns
            .iter()
            .map(String::as_str)
            .zip(self.cells.iter())
    }

    pub fn to_json(&self) -> serde_json::Value {
        let mut object = serde_json::Map::new();
        for (column, cell) in self.iter() {
            object.insert(
                column.to_string(),
                serde_json::to_value(cell).unwrap_or(serde_json::Value::Null),
            );
        }
        serde_json::Value::Object(object)
    }
}
