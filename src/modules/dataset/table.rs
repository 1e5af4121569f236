use std::io::{Read, Write};
use std::path::Path;

use crate::shared::errors::AppResult;

/// In-memory CSV table: one header row plus string cells.
///
/// This is the engine-facing view of an uploaded tabular file; reading,
/// column lookup and augmented write-back happen here, everything else
/// (upload, download, presentation) stays with the caller.
#[derive(Debug, Clone, Default)]
pub struct CsvTable {
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl CsvTable {
    pub fn new(headers: Vec<String>, rows: Vec<Vec<String>>) -> Self {
        Self { headers, rows }
    }

    pub fn from_path(path: impl AsRef<Path>) -> AppResult<Self> {
        let reader = csv::ReaderBuilder::new()
            .flexible(true)
            .from_path(path.as_ref())?;
        Self::read(reader)
    }

    pub fn from_reader<R: Read>(reader: R) -> AppResult<Self> {
        let reader = csv::ReaderBuilder::new().flexible(true).from_reader(reader);
        Self::read(reader)
    }

    fn read<R: Read>(mut reader: csv::Reader<R>) -> AppResult<Self> {
        let headers: Vec<String> = reader
            .headers()?
            .iter()
            .map(|column| column.to_string())
            .collect();

        let mut rows = Vec::new();
        for record in reader.records() {
            let record = record?;
            let mut row: Vec<String> = record.iter().map(|cell| cell.to_string()).collect();
            // Short rows are padded so every cell access stays in bounds.
            row.resize(headers.len(), String::new());
            rows.push(row);
        }

        Ok(Self { headers, rows })
    }

    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.headers.iter().position(|header| header == name)
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn value(&self, row: usize, column: usize) -> &str {
        self.rows
            .get(row)
            .and_then(|cells| cells.get(column))
            .map(String::as_str)
            .unwrap_or_default()
    }

    /// Append an empty column and return its index.
    pub fn add_column(&mut self, name: &str) -> usize {
        self.headers.push(name.to_string());
        for row in &mut self.rows {
            row.push(String::new());
        }
        self.headers.len() - 1
    }

    pub fn set(&mut self, row: usize, column: usize, value: impl Into<String>) {
        if let Some(cell) = self.rows.get_mut(row).and_then(|cells| cells.get_mut(column)) {
            *cell = value.into();
        }
    }

    pub fn write_to<W: Write>(&self, writer: W) -> AppResult<()> {
        let mut writer = csv::Writer::from_writer(writer);
        writer.write_record(&self.headers)?;
        for row in &self.rows {
            writer.write_record(row)?;
        }
        writer.flush()?;
        Ok(())
    }

    pub fn write_path(&self, path: impl AsRef<Path>) -> AppResult<()> {
        let file = std::fs::File::create(path.as_ref())?;
        self.write_to(file)
    }
}
