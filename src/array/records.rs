// records.rs - Mixed-type delimited reader with per-column type inference

use crate::error::{ArrayError, ArrayResult};
use ndarray::Array1;
use std::fmt::{self, Display};
use std::path::Path;

/// One cell of a record table
#[derive(Debug, Clone, PartialEq)]
pub enum Field {
    Int(i64),
    Float(f64),
    Text(String),
    Missing,
}

impl Field {
    pub fn is_missing(&self) -> bool {
        matches!(self, Field::Missing)
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Field::Int(val) => Some(*val as f64),
            Field::Float(val) => Some(*val),
            _ => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Field::Text(s) => Some(s),
            _ => None,
        }
    }
}

impl Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Field::Int(val) => write!(f, "{}", val),
            Field::Float(val) if val.is_finite() && val.fract() == 0.0 => write!(f, "{:.1}", val),
            Field::Float(val) => write!(f, "{}", val),
            Field::Text(s) => write!(f, "'{}'", s),
            Field::Missing => write!(f, "--"),
        }
    }
}

/// Type inferred for a whole column
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnKind {
    Int,
    Float,
    Text,
}

impl ColumnKind {
    pub fn name(&self) -> &'static str {
        match self {
            ColumnKind::Int => "int64",
            ColumnKind::Float => "float64",
            ColumnKind::Text => "text",
        }
    }

    /// Narrowest kind that fits every present raw value
    fn infer<'a>(raw: impl Iterator<Item = &'a str> + Clone) -> Self {
        let mut present = raw.clone().peekable();
        if present.peek().is_none() {
            return ColumnKind::Float;
        }
        if raw.clone().all(|s| s.parse::<i64>().is_ok()) {
            ColumnKind::Int
        } else if raw.clone().all(|s| s.parse::<f64>().is_ok()) {
            ColumnKind::Float
        } else {
            ColumnKind::Text
        }
    }

    fn convert(&self, raw: &str) -> Field {
        match self {
            ColumnKind::Int => raw.parse().map(Field::Int).unwrap_or(Field::Missing),
            ColumnKind::Float => raw.parse().map(Field::Float).unwrap_or(Field::Missing),
            ColumnKind::Text => Field::Text(raw.to_string()),
        }
    }
}

/// A named, typed column
#[derive(Debug, Clone, PartialEq)]
pub struct Column {
    pub name: String,
    pub kind: ColumnKind,
    pub fields: Vec<Field>,
}

impl Column {
    pub fn missing_count(&self) -> usize {
        self.fields.iter().filter(|field| field.is_missing()).count()
    }

    /// Numeric view of the column; missing cells become NaN
    pub fn to_f64_array(&self) -> ArrayResult<Array1<f64>> {
        if self.kind == ColumnKind::Text {
            return Err(ArrayError::NonNumericColumn {
                name: self.name.clone(),
                kind: self.kind.name(),
            });
        }
        Ok(self
            .fields
            .iter()
            .map(|field| field.as_f64().unwrap_or(f64::NAN))
            .collect())
    }
}

impl Display for Column {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        crate::containers::write_joined(f, "[", &self.fields, "]")
    }
}

/// Options for `RecordTable::read`
#[derive(Debug, Clone)]
pub struct RecordOptions {
    pub delimiter: u8,
    /// Leading records to skip; without `names` the first one supplies them
    pub skip_header: usize,
    pub names: Option<Vec<String>>,
    /// Raw strings treated as missing besides the empty string
    pub missing_values: Vec<String>,
}

impl Default for RecordOptions {
    fn default() -> Self {
        Self {
            delimiter: b',',
            skip_header: 0,
            names: None,
            missing_values: Vec::new(),
        }
    }
}

/// Structured record array produced by the mixed-type reader
#[derive(Debug, Clone, PartialEq)]
pub struct RecordTable {
    columns: Vec<Column>,
    rows: usize,
}

impl RecordTable {
    /// Parse a delimited file with optional header, missing fields and
    /// heterogeneous column types.
    pub fn read(file_path: &Path, options: &RecordOptions) -> ArrayResult<Self> {
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(false)
            .delimiter(options.delimiter)
            .comment(Some(b'#'))
            .trim(csv::Trim::All)
            .flexible(true)
            .from_path(file_path)?;

        let mut header: Option<Vec<String>> = None;
        let mut raw_rows: Vec<(usize, Vec<String>)> = Vec::new();

        for (record_num, record) in reader.records().enumerate() {
            let record = record?;
            let fields: Vec<String> = record.iter().map(str::to_string).collect();
            if record_num < options.skip_header {
                if record_num == 0 {
                    header = Some(fields);
                }
                continue;
            }
            let line = record
                .position()
                .map(|pos| pos.line() as usize)
                .unwrap_or(record_num + 1);
            raw_rows.push((line, fields));
        }

        let names = match (&options.names, header) {
            (Some(names), _) => names.clone(),
            (None, Some(header)) => header,
            (None, None) => {
                let width = raw_rows.first().map(|(_, row)| row.len()).unwrap_or(0);
                (0..width).map(|i| format!("f{}", i)).collect()
            }
        };

        // Pad short rows with missing cells; long rows are an error
        for (line, row) in raw_rows.iter_mut() {
            if row.len() > names.len() {
                return Err(ArrayError::Ragged {
                    line: *line,
                    expected: names.len(),
                    found: row.len(),
                });
            }
            row.resize(names.len(), String::new());
        }

        let is_missing =
            |raw: &str| raw.is_empty() || options.missing_values.iter().any(|m| m == raw);

        let columns = names
            .into_iter()
            .enumerate()
            .map(|(col, name)| {
                let present = raw_rows
                    .iter()
                    .map(move |(_, row)| row[col].as_str())
                    .filter(|raw| !is_missing(*raw));
                let kind = ColumnKind::infer(present);
                let fields = raw_rows
                    .iter()
                    .map(|(_, row)| {
                        let raw = row[col].as_str();
                        if is_missing(raw) {
                            Field::Missing
                        } else {
                            kind.convert(raw)
                        }
                    })
                    .collect();
                Column { name, kind, fields }
            })
            .collect::<Vec<_>>();

        tracing::debug!(
            path = %file_path.display(),
            rows = raw_rows.len(),
            columns = columns.len(),
            "record table loaded"
        );
        Ok(Self {
            columns,
            rows: raw_rows.len(),
        })
    }

    pub fn len(&self) -> usize {
        self.rows
    }

    pub fn is_empty(&self) -> bool {
        self.rows == 0
    }

    pub fn names(&self) -> Vec<&str> {
        self.columns.iter().map(|c| c.name.as_str()).collect()
    }

    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    /// Named-field access
    pub fn column(&self, name: &str) -> ArrayResult<&Column> {
        self.columns
            .iter()
            .find(|c| c.name == name)
            .ok_or_else(|| ArrayError::UnknownColumn(name.to_string()))
    }

    /// Named numeric column as a float array, NaN where missing
    pub fn column_f64(&self, name: &str) -> ArrayResult<Array1<f64>> {
        self.column(name)?.to_f64_array()
    }

    pub fn row(&self, index: usize) -> Option<Vec<&Field>> {
        if index >= self.rows {
            return None;
        }
        Some(self.columns.iter().map(|c| &c.fields[index]).collect())
    }
}

impl Display for RecordTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for index in 0..self.rows {
            if index > 0 {
                write!(f, "\n ")?;
            }
            let cells = self.columns.iter().map(|c| &c.fields[index]);
            crate::containers::write_joined(f, "(", cells, ")")?;
        }
        write!(f, "]")
    }
}

/// Read a mixed-type delimited file; see `RecordTable::read`
pub fn read_records(file_path: &Path, options: &RecordOptions) -> ArrayResult<RecordTable> {
    RecordTable::read(file_path, options)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    const MIXED: &str = "Name,Age,Score\nAlice,25,88.5\nBob,,92.0\nCharlie,30,\nDavid,22,78.2\n";

    fn mixed_table(options: &RecordOptions) -> RecordTable {
        let dir = tempdir().unwrap();
        let path = dir.path().join("mixed_data.csv");
        std::fs::write(&path, MIXED).unwrap();
        RecordTable::read(&path, options).unwrap()
    }

    fn named_options() -> RecordOptions {
        RecordOptions {
            skip_header: 1,
            names: Some(vec!["Name".into(), "Age".into(), "Score".into()]),
            ..RecordOptions::default()
        }
    }

    #[test]
    fn test_mixed_file_columns() {
        let table = mixed_table(&named_options());
        assert_eq!(table.len(), 4);
        assert_eq!(table.names(), vec!["Name", "Age", "Score"]);

        let score = table.column("Score").unwrap();
        assert_eq!(score.kind, ColumnKind::Float);
        assert_eq!(
            score.fields,
            vec![
                Field::Float(88.5),
                Field::Float(92.0),
                Field::Missing,
                Field::Float(78.2)
            ]
        );
        assert_eq!(score.to_string(), "[88.5, 92.0, --, 78.2]");

        let age = table.column("Age").unwrap();
        assert_eq!(age.kind, ColumnKind::Int);
        assert!(age.fields[1].is_missing());
        assert_eq!(age.missing_count(), 1);

        let names = table.column("Name").unwrap();
        assert_eq!(names.kind, ColumnKind::Text);
        assert_eq!(names.fields[1].as_text(), Some("Bob"));
    }

    #[test]
    fn test_header_supplies_names() {
        let table = mixed_table(&RecordOptions {
            skip_header: 1,
            ..RecordOptions::default()
        });
        assert_eq!(table.names(), vec!["Name", "Age", "Score"]);
        assert_eq!(table.row(0).unwrap()[0], &Field::Text("Alice".into()));
    }

    #[test]
    fn test_numeric_view() {
        let table = mixed_table(&named_options());
        let scores = table.column_f64("Score").unwrap();
        assert_eq!(scores[0], 88.5);
        assert!(scores[2].is_nan());

        assert!(matches!(
            table.column_f64("Name"),
            Err(ArrayError::NonNumericColumn { .. })
        ));
        assert!(matches!(
            table.column("Height"),
            Err(ArrayError::UnknownColumn(_))
        ));
    }

    #[test]
    fn test_without_header_everything_is_text() {
        let table = mixed_table(&RecordOptions::default());
        assert_eq!(table.names(), vec!["f0", "f1", "f2"]);
        assert_eq!(table.len(), 5);
        // The header row makes every column textual
        assert!(table.columns().iter().all(|c| c.kind == ColumnKind::Text));
    }

    #[test]
    fn test_short_rows_padded_and_custom_missing() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("short.csv");
        std::fs::write(&path, "a;b;c\n1;NA;3\n4\n").unwrap();

        let table = read_records(
            &path,
            &RecordOptions {
                delimiter: b';',
                skip_header: 1,
                names: None,
                missing_values: vec!["NA".into()],
            },
        )
        .unwrap();

        let b = table.column("b").unwrap();
        assert_eq!(b.fields, vec![Field::Missing, Field::Missing]);
        assert_eq!(table.column("c").unwrap().fields[1], Field::Missing);
        assert_eq!(table.column("a").unwrap().kind, ColumnKind::Int);
    }

    #[test]
    fn test_long_rows_rejected() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("long.csv");
        std::fs::write(&path, "x,y\n1,2,3\n").unwrap();

        let options = RecordOptions {
            skip_header: 1,
            ..RecordOptions::default()
        };
        assert!(matches!(
            RecordTable::read(&path, &options),
            Err(ArrayError::Ragged { line: 2, .. })
        ));
    }

    #[test]
    fn test_display() {
        let table = mixed_table(&named_options());
        let rendered = table.to_string();
        assert!(rendered.starts_with("[('Alice', 25, 88.5)"));
        assert!(rendered.contains("('Bob', --, 92.0)"));
        assert!(rendered.contains("('Charlie', 30, --)"));
    }
}
