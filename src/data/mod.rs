use std::fs;
use std::io::Cursor;
use std::path::Path;

use bincode::ErrorKind;
use thiserror::Error;

use crate::path::plan::FlightPlan;

/// Compression level used when encoding serialized mission plans.
///
/// Plans are tiny, so the default level is plenty; the constant keeps the
/// chosen level explicit and in one place.
const PLAN_COMPRESSION_LEVEL: i32 = 3;

#[derive(Debug, Error)]
pub enum DataError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Serialize(#[from] Box<ErrorKind>),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Compression error: {0}")]
    Compression(#[source] std::io::Error),
}

pub fn serialize_plan(plan: &FlightPlan) -> Result<Vec<u8>, DataError> {
    let encoded = bincode::serialize(plan)?;
    let mut cursor = Cursor::new(encoded);
    zstd::stream::encode_all(&mut cursor, PLAN_COMPRESSION_LEVEL).map_err(DataError::Compression)
}

pub fn deserialize_plan(bytes: &[u8]) -> Result<FlightPlan, DataError> {
    let mut cursor = Cursor::new(bytes);
    let decoded = zstd::stream::decode_all(&mut cursor).map_err(DataError::Compression)?;
    let plan: FlightPlan = bincode::deserialize(&decoded)?;
    Ok(plan)
}

pub fn write_plan_to_file<P: AsRef<Path>>(plan: &FlightPlan, path: P) -> Result<(), DataError> {
    let bytes = serialize_plan(plan)?;
    fs::write(path, bytes)?;
    Ok(())
}

pub fn read_plan_from_file<P: AsRef<Path>>(path: P) -> Result<FlightPlan, DataError> {
    let bytes = fs::read(path)?;
    deserialize_plan(&bytes)
}

/// Parses a hand-edited JSON plan of the form
/// `{"waypoints": [{"x": 0.0, "y": 0.0, "z": 100.0}, ...]}`.
pub fn plan_from_json(text: &str) -> Result<FlightPlan, DataError> {
    Ok(serde_json::from_str(text)?)
}

pub fn plan_to_json(plan: &FlightPlan) -> Result<String, DataError> {
    Ok(serde_json::to_string_pretty(plan)?)
}
