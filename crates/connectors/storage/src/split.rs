use std::collections::BTreeMap;
use std::fmt;
use std::net::SocketAddr;
use std::str::FromStr;

use igloo_common::size_of::{estimated_size_of_str, instance_size};
use igloo_common::{ConnectorSplit, Error, Result};
use serde::{Deserialize, Serialize};

/// How a worker reads the table named by a [`StorageSplit`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Mode {
    /// Scan the whole table.
    Table,
    /// Scan a previously listed set of entries belonging to the table.
    List,
}

impl Mode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Mode::Table => "TABLE",
            Mode::List => "LIST",
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Mode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        if s.eq_ignore_ascii_case("table") {
            Ok(Mode::Table)
        } else if s.eq_ignore_ascii_case("list") {
            Ok(Mode::List)
        } else {
            Err(Error::invalid_argument(format!("unknown split mode: {}", s)))
        }
    }
}

/// One unit of scan work over a storage-backed table.
///
/// The table is referenced by name only; resolving it to files is left to
/// the worker that executes the split.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "SplitRecord", into = "SplitRecord")]
pub struct StorageSplit {
    mode: Mode,
    schema_name: String,
    table_name: String,
}

impl StorageSplit {
    pub fn new(mode: Mode, schema_name: impl Into<String>, table_name: impl Into<String>) -> Self {
        Self { mode, schema_name: schema_name.into(), table_name: table_name.into() }
    }

    pub fn builder() -> StorageSplitBuilder {
        StorageSplitBuilder::default()
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn schema_name(&self) -> &str {
        &self.schema_name
    }

    pub fn table_name(&self) -> &str {
        &self.table_name
    }
}

impl ConnectorSplit for StorageSplit {
    // Storage has no notion of data locality.
    fn addresses(&self) -> &[SocketAddr] {
        &[]
    }

    fn split_info(&self) -> BTreeMap<String, String> {
        BTreeMap::from([
            ("mode".to_string(), self.mode.as_str().to_string()),
            ("schemaName".to_string(), self.schema_name.clone()),
            ("tableName".to_string(), self.table_name.clone()),
        ])
    }

    fn retained_size_in_bytes(&self) -> usize {
        instance_size::<Self>()
            + estimated_size_of_str(&self.schema_name)
            + estimated_size_of_str(&self.table_name)
    }
}

/// Collects split fields that may be missing and validates them on
/// [`build`](StorageSplitBuilder::build).
#[derive(Debug, Clone, Default)]
pub struct StorageSplitBuilder {
    mode: Option<Mode>,
    schema_name: Option<String>,
    table_name: Option<String>,
}

impl StorageSplitBuilder {
    pub fn mode(mut self, mode: Mode) -> Self {
        self.mode = Some(mode);
        self
    }

    pub fn schema_name(mut self, schema_name: impl Into<String>) -> Self {
        self.schema_name = Some(schema_name.into());
        self
    }

    pub fn table_name(mut self, table_name: impl Into<String>) -> Self {
        self.table_name = Some(table_name.into());
        self
    }

    pub fn build(self) -> Result<StorageSplit> {
        let schema_name = self.schema_name.ok_or_else(|| reject("schema name is null"))?;
        let mode = self.mode.ok_or_else(|| reject("mode is null"))?;
        let table_name = self.table_name.ok_or_else(|| reject("table name is null"))?;
        Ok(StorageSplit { mode, schema_name, table_name })
    }
}

fn reject(reason: &str) -> Error {
    tracing::warn!(reason, "rejected storage split");
    Error::invalid_argument(reason)
}

/// Wire form of a split. Every field is optional so that absent and null
/// values reach the builder's validation instead of failing inside serde.
#[derive(Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SplitRecord {
    mode: Option<Mode>,
    schema_name: Option<String>,
    table_name: Option<String>,
}

impl From<StorageSplit> for SplitRecord {
    fn from(split: StorageSplit) -> Self {
        Self {
            mode: Some(split.mode),
            schema_name: Some(split.schema_name),
            table_name: Some(split.table_name),
        }
    }
}

impl TryFrom<SplitRecord> for StorageSplit {
    type Error = Error;

    fn try_from(record: SplitRecord) -> Result<Self> {
        let mut builder = StorageSplit::builder();
        builder.mode = record.mode;
        builder.schema_name = record.schema_name;
        builder.table_name = record.table_name;
        builder.build()
    }
}
