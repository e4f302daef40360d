//! Response payload of the statistics service.

use crate::error::FetchError;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;
use std::fmt;

/// Probabilities (in percent) of exceeding each weather threshold.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Probabilities {
    /// Max temperature above 30 °C
    pub temperature: f64,
    /// Precipitation above 1 mm
    pub precipitation: f64,
    /// Max wind above 25 km/h
    pub wind: f64,
}

/// The service sends the comfort score either as a number or preformatted
/// (e.g. "85/100"). It is shown verbatim either way.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ComfortScore {
    Number(f64),
    Text(String),
}

impl fmt::Display for ComfortScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ComfortScore::Number(n) if n.fract() == 0.0 => write!(f, "{:.0}", n),
            ComfortScore::Number(n) => write!(f, "{}", n),
            ComfortScore::Text(s) => f.write_str(s),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComfortIndex {
    pub score: ComfortScore,
    pub label: String,
}

/// A successful lookup for one location/date/activity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatsResult {
    pub recommendation: String,
    pub suggestion: Option<String>,
    pub comfort_index: Option<ComfortIndex>,
    pub probabilities: Probabilities,
    /// Year -> probability of a hot day. Arrives unordered.
    pub trend_data: Option<HashMap<i32, f64>>,
    /// Target date as the service labels it, e.g. "July 15"
    pub date_str: Option<String>,
}

impl StatsResult {
    /// The suggestion, if there is one worth showing. The service sends ""
    /// when it has nothing to suggest.
    pub fn suggestion_text(&self) -> Option<&str> {
        self.suggestion.as_deref().filter(|s| !s.is_empty())
    }
}

/// What a completed request yielded.
#[derive(Debug, Clone, PartialEq)]
pub enum StatsOutcome {
    Loaded(Box<StatsResult>),
    /// The service answered but has no data for this location.
    NoData,
}

/// `null`, `false`, `0` and `""` all mean "no data".
fn is_falsy(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::Number(n) => n.as_f64() == Some(0.0),
        Value::String(s) => s.is_empty(),
        Value::Array(_) | Value::Object(_) => false,
    }
}

/// Interpret a response body.
///
/// Invalid JSON, or a truthy value that is not shaped like a `StatsResult`,
/// is a `FetchError::Parse`.
pub fn interpret_body(body: &str) -> Result<StatsOutcome, FetchError> {
    let value: Value = serde_json::from_str(body)?;
    if is_falsy(&value) {
        return Ok(StatsOutcome::NoData);
    }
    let result: StatsResult = serde_json::from_value(value)?;
    Ok(StatsOutcome::Loaded(Box::new(result)))
}
