//! Record identifiers: `trigger`, `TTL{n}`, `DAC{n}`
//! Location: src/program/identifier.rs

use crate::config::constants::identifiers;
use crate::error::{ProgramError, ProgramResult};
use crate::signal::ChannelKind;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Stable key of a record within a program
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum ChannelId {
    /// The master trigger record
    Trigger,
    /// Logical output `TTL{n}`, `n >= 1`
    Ttl(u32),
    /// Analog output `DAC{n}`, `n >= 1`
    Dac(u32),
}

impl ChannelId {
    /// Whether this names the trigger record
    pub fn is_trigger(&self) -> bool {
        matches!(self, ChannelId::Trigger)
    }

    /// Check that the identifier names a channel of `kind`
    pub fn check_kind(&self, kind: &ChannelKind) -> ProgramResult<()> {
        let reason = match (self, kind.is_logical()) {
            (ChannelId::Trigger, _) => "the trigger is not a channel",
            (ChannelId::Ttl(_), true) | (ChannelId::Dac(_), false) => return Ok(()),
            (ChannelId::Ttl(_), false) => "TTL identifiers name logical channels",
            (ChannelId::Dac(_), true) => "DAC identifiers name analog channels",
        };
        Err(ProgramError::InvalidIdentifier {
            identifier: self.to_string(),
            reason,
        })
    }
}

impl fmt::Display for ChannelId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChannelId::Trigger => f.write_str(identifiers::TRIGGER),
            ChannelId::Ttl(n) => write!(f, "{}{}", identifiers::TTL_PREFIX, n),
            ChannelId::Dac(n) => write!(f, "{}{}", identifiers::DAC_PREFIX, n),
        }
    }
}

impl FromStr for ChannelId {
    type Err = ProgramError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == identifiers::TRIGGER {
            return Ok(ChannelId::Trigger);
        }

        let invalid = |reason| ProgramError::InvalidIdentifier {
            identifier: s.to_string(),
            reason,
        };

        let (constructor, digits): (fn(u32) -> ChannelId, &str) =
            if let Some(rest) = s.strip_prefix(identifiers::TTL_PREFIX) {
                (ChannelId::Ttl, rest)
            } else if let Some(rest) = s.strip_prefix(identifiers::DAC_PREFIX) {
                (ChannelId::Dac, rest)
            } else {
                return Err(invalid("expected 'trigger', 'TTL<n>' or 'DAC<n>'"));
            };

        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return Err(invalid("channel number must be a decimal integer"));
        }
        if digits == "0" {
            return Err(invalid("channel numbers start at 1"));
        }
        if digits.starts_with('0') {
            return Err(invalid("channel number must not have leading zeros"));
        }
        let number = digits
            .parse::<u32>()
            .map_err(|_| invalid("channel number too large"))?;

        Ok(constructor(number))
    }
}

impl TryFrom<String> for ChannelId {
    type Error = ProgramError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<ChannelId> for String {
    fn from(id: ChannelId) -> Self {
        id.to_string()
    }
}
