use serde_json::{Map, Value};
use std::fmt;
use std::io::Read;

/// A single field of a loaded table. Fields are typed at load time:
/// an empty CSV field becomes `Null`, a field that parses as a float
/// becomes `Number`, everything else stays `Text`.
#[derive(Debug, Clone, PartialEq)]
pub enum Cell {
    Null,
    Text(String),
    Number(f64),
}

impl Cell {
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Cell::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// Null, or text that trims to nothing.
    pub fn is_blank(&self) -> bool {
        match self {
            Cell::Null => true,
            Cell::Text(s) => s.trim().is_empty(),
            Cell::Number(_) => false,
        }
    }

    fn to_json(&self) -> Value {
        match self {
            Cell::Null => Value::Null,
            Cell::Text(s) => Value::String(s.clone()),
            Cell::Number(n) => serde_json::Number::from_f64(*n)
                .map(Value::Number)
                .unwrap_or(Value::Null),
        }
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Cell::Null => Ok(()),
            Cell::Text(s) => write!(f, "{}", s),
            Cell::Number(n) => write!(f, "{}", n),
        }
    }
}

#[derive(thiserror::Error, Debug)]
pub enum TableError {
    #[error("unknown column: {0}")]
    UnknownColumn(String),
    #[error("column {column}, row {row}: expected a number, found {found:?}")]
    NotNumeric {
        column: String,
        row: usize,
        found: String,
    },
}

/// In-memory table: ordered column names plus row-major cells. Every row
/// has exactly one cell per column.
#[derive(Debug, Clone, Default)]
pub struct Table {
    columns: Vec<String>,
    rows: Vec<Vec<Cell>>,
}

impl Table {
    pub fn new(columns: Vec<String>) -> Self {
        Self {
            columns,
            rows: Vec::new(),
        }
    }

    /// Decode a CSV byte stream with a header row.
    pub fn from_csv(input: impl Read) -> Result<Self, csv::Error> {
        let mut rdr = csv::ReaderBuilder::new().from_reader(input);
        let columns: Vec<String> = rdr.headers()?.iter().map(|h| h.to_string()).collect();
        let mut rows = Vec::new();
        for record in rdr.records() {
            let record = record?;
            rows.push(record.iter().map(infer_cell).collect());
        }
        Ok(Self { columns, rows })
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn rows(&self) -> &[Vec<Cell>] {
        &self.rows
    }

    pub fn rows_mut(&mut self) -> &mut [Vec<Cell>] {
        &mut self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn column_index(&self, name: &str) -> Result<usize, TableError> {
        self.columns
            .iter()
            .position(|c| c == name)
            .ok_or_else(|| TableError::UnknownColumn(name.to_string()))
    }

    /// Rename a column if it exists; returns whether a rename happened.
    pub fn rename_column(&mut self, from: &str, to: &str) -> bool {
        match self.columns.iter_mut().find(|c| *c == from) {
            Some(c) => {
                *c = to.to_string();
                true
            }
            None => false,
        }
    }

    pub fn push_row(&mut self, row: Vec<Cell>) {
        debug_assert_eq!(row.len(), self.columns.len());
        self.rows.push(row);
    }

    /// Append a derived column on the right, one cell per row. Replaces
    /// the values if a column with that name already exists.
    pub fn add_column(&mut self, name: &str, cells: Vec<Cell>) {
        debug_assert_eq!(cells.len(), self.rows.len());
        if let Ok(idx) = self.column_index(name) {
            for (row, cell) in self.rows.iter_mut().zip(cells) {
                row[idx] = cell;
            }
            return;
        }
        self.columns.push(name.to_string());
        for (row, cell) in self.rows.iter_mut().zip(cells) {
            row.push(cell);
        }
    }

    /// Project onto the named columns, preserving row order.
    pub fn select(&self, names: &[&str]) -> Result<Table, TableError> {
        let indices: Vec<usize> = names
            .iter()
            .map(|n| self.column_index(n))
            .collect::<Result<_, _>>()?;
        let rows = self
            .rows
            .iter()
            .map(|row| indices.iter().map(|&i| row[i].clone()).collect())
            .collect();
        Ok(Table {
            columns: names.iter().map(|n| n.to_string()).collect(),
            rows,
        })
    }

    /// Rows as JSON objects keyed by column name.
    pub fn to_json_rows(&self) -> Vec<Value> {
        self.rows
            .iter()
            .map(|row| {
                let mut obj = Map::new();
                for (col, cell) in self.columns.iter().zip(row) {
                    obj.insert(col.clone(), cell.to_json());
                }
                Value::Object(obj)
            })
            .collect()
    }
}

fn infer_cell(field: &str) -> Cell {
    if field.is_empty() {
        return Cell::Null;
    }
    match field.parse::<f64>() {
        Ok(n) => Cell::Number(n),
        Err(_) => Cell::Text(field.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::{Cell, Table};

    #[test]
    fn csv_fields_are_typed_on_load() {
        let csv = "ID,NAME,SALARY\n7,Raphaely,24000\n8,,\n";
        let t = Table::from_csv(csv.as_bytes()).expect("parse csv");
        assert_eq!(t.columns(), ["ID", "NAME", "SALARY"]);
        assert_eq!(t.rows()[0][1], Cell::Text("Raphaely".to_string()));
        assert_eq!(t.rows()[0][2], Cell::Number(24000.0));
        assert_eq!(t.rows()[1][1], Cell::Null);
        assert_eq!(t.rows()[1][2], Cell::Null);
    }

    #[test]
    fn select_projects_in_requested_order() {
        let csv = "A,B,C\n1,2,3\n";
        let t = Table::from_csv(csv.as_bytes()).expect("parse csv");
        let s = t.select(&["C", "A"]).expect("select");
        assert_eq!(s.columns(), ["C", "A"]);
        assert_eq!(s.rows()[0], vec![Cell::Number(3.0), Cell::Number(1.0)]);
    }

    #[test]
    fn rename_is_a_noop_for_missing_columns() {
        let mut t = Table::new(vec!["DEPARTMENT_ID".to_string()]);
        assert!(!t.rename_column("DEPARTMENT_IDENTIFIER", "DEPARTMENT_ID"));
        assert!(t.rename_column("DEPARTMENT_ID", "DEPT"));
        assert_eq!(t.columns(), ["DEPT"]);
    }
}
