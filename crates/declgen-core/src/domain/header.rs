use chrono::{DateTime, Utc};
use serde::Serialize;

/// Provenance block written at the top of every generated document.
///
/// Supplied once by the caller and read-only afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Header {
    name: String,
    description: String,
    version: String,
    timestamp: DateTime<Utc>,
    schema_url: String,
}

impl Header {
    /// Create a header stamped with the current time.
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        version: impl Into<String>,
        schema_url: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            version: version.into(),
            timestamp: Utc::now(),
            schema_url: schema_url.into(),
        }
    }

    /// Replace the generation timestamp; used for reproducible output.
    pub fn with_timestamp(mut self, timestamp: DateTime<Utc>) -> Self {
        self.timestamp = timestamp;
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn version(&self) -> &str {
        &self.version
    }

    pub fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }

    pub fn schema_url(&self) -> &str {
        &self.schema_url
    }
}
