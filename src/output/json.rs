//! JSON catalog file output

use crate::catalog::ProductRecord;
use crate::output::traits::{OutputResult, OutputWriter};
use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

/// Writes the catalog as a pretty-printed JSON array
#[derive(Debug, Clone)]
pub struct JsonFileWriter {
    path: PathBuf,
}

impl JsonFileWriter {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl OutputWriter for JsonFileWriter {
    fn write(&self, records: &[ProductRecord]) -> OutputResult<()> {
        let json = format_catalog_json(records)?;

        let mut file = BufWriter::new(File::create(&self.path)?);
        file.write_all(&json)?;
        file.write_all(b"\n")?;
        file.flush()?;

        tracing::info!("Wrote {} products to {}", records.len(), self.path.display());
        Ok(())
    }
}

/// Serializes records as a JSON array indented by four spaces
pub fn format_catalog_json(records: &[ProductRecord]) -> OutputResult<Vec<u8>> {
    let mut buffer = Vec::new();
    let mut serializer = Serializer::with_formatter(&mut buffer, PrettyFormatter::with_indent(b"    "));
    records.serialize(&mut serializer)?;
    Ok(buffer)
}
