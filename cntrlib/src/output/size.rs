//! Human-readable byte sizes.

use std::fmt;

use serde::Serialize;

/// Binary size units, 1024 apart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum SizeUnit {
    B,
    K,
    M,
    G,
}

impl SizeUnit {
    const ALL: [SizeUnit; 4] = [SizeUnit::B, SizeUnit::K, SizeUnit::M, SizeUnit::G];

    pub fn as_str(&self) -> &'static str {
        match self {
            SizeUnit::B => "B",
            SizeUnit::K => "K",
            SizeUnit::M => "M",
            SizeUnit::G => "G",
        }
    }
}

impl fmt::Display for SizeUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A byte count scaled to the largest unit that keeps it below 1024.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct HumanSize {
    pub value: f64,
    pub unit: SizeUnit,
}

impl HumanSize {
    /// Scale `bytes` by 1024 until it drops below 1024 or units run out.
    ///
    /// Sizes of 1024 G and above stay in gigabytes.
    pub fn from_bytes(bytes: u64) -> Self {
        let mut value = bytes as f64;
        let mut unit = 0;
        while value >= 1024.0 && unit + 1 < SizeUnit::ALL.len() {
            value /= 1024.0;
            unit += 1;
        }
        Self {
            value,
            unit: SizeUnit::ALL[unit],
        }
    }
}

/// One decimal digit followed by the unit letter, e.g. `1.5K`.
impl fmt::Display for HumanSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.1}{}", self.value, self.unit)
    }
}

/// Shorthand for `HumanSize::from_bytes(bytes).to_string()`.
pub fn format_size(bytes: u64) -> String {
    HumanSize::from_bytes(bytes).to_string()
}
