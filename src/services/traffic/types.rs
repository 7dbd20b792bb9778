use std::fmt;

use serde::{Deserialize, Serialize};

use super::TrafficError;

/// Name of a kernel network interface
///
/// Never empty. The interface it names may not exist (anymore).
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct InterfaceName(String);

impl InterfaceName {
    /// Create an interface name, trimming surrounding whitespace
    ///
    /// # Errors
    ///
    /// Returns `TrafficError::EmptyInterfaceName` for an empty or blank name
    pub fn new(name: impl Into<String>) -> Result<Self, TrafficError> {
        let name = name.into();
        let trimmed = name.trim();

        if trimmed.is_empty() {
            return Err(TrafficError::EmptyInterfaceName);
        }

        if trimmed.len() == name.len() {
            Ok(Self(name))
        } else {
            Ok(Self(trimmed.to_string()))
        }
    }

    /// Borrow the name as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for InterfaceName {
    type Error = TrafficError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<InterfaceName> for String {
    fn from(value: InterfaceName) -> Self {
        value.0
    }
}

impl fmt::Display for InterfaceName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Receive/transmit byte counters captured at one instant
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CounterSample {
    /// Received bytes
    pub rx: u64,
    /// Transmitted bytes
    pub tx: u64,
}

/// Counter snapshot marking the start of a session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionBaseline {
    /// Received bytes at session start
    pub rx: u64,
    /// Transmitted bytes at session start
    pub tx: u64,
    /// Session start, Unix seconds
    pub epoch: i64,
}

impl SessionBaseline {
    /// Baseline taken from `sample` at `epoch`
    pub fn from_sample(sample: CounterSample, epoch: i64) -> Self {
        Self {
            rx: sample.rx,
            tx: sample.tx,
            epoch,
        }
    }
}

/// Traffic accumulated since the session baseline
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SessionDelta {
    /// Bytes received this session
    pub rx: u64,
    /// Bytes transmitted this session
    pub tx: u64,
    /// `rx + tx`
    pub total: u64,
}

/// Instantaneous throughput in bits per second
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Throughput {
    /// Download rate
    pub down_bps: f64,
    /// Upload rate
    pub up_bps: f64,
}
