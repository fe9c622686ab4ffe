//! Encoding of task payloads exchanged between coordinator and workers.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Wire format of a task payload.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PayloadFormat {
    #[default]
    Json,
    Bincode,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PayloadCodec {
    format: PayloadFormat,
}

impl PayloadCodec {
    pub fn new(format: PayloadFormat) -> Self {
        Self { format }
    }

    pub fn format(&self) -> PayloadFormat {
        self.format
    }

    pub fn encode<T: Serialize>(&self, value: &T) -> Result<Vec<u8>> {
        let bytes = match self.format {
            PayloadFormat::Json => serde_json::to_vec(value)?,
            PayloadFormat::Bincode => bincode::serialize(value)?,
        };
        tracing::debug!(format = ?self.format, len = bytes.len(), "encoded task payload");
        Ok(bytes)
    }

    pub fn decode<T: DeserializeOwned>(&self, payload: &[u8]) -> Result<T> {
        tracing::debug!(format = ?self.format, len = payload.len(), "decoding task payload");
        let value = match self.format {
            PayloadFormat::Json => serde_json::from_slice(payload)?,
            PayloadFormat::Bincode => bincode::deserialize(payload)?,
        };
        Ok(value)
    }
}
