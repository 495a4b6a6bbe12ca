use crate::errors::{ServiceError, ServiceResult};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Upper bound on contracts in a single analysis request.
pub const MAX_CONTRACTS: usize = 4;

/// Largest accepted magnitude for strike, bid and ask. Four contracts over
/// the [0, 200] grid stay far inside f64 range at this size.
pub const MAX_PRICE_MAGNITUDE: f64 = 1e12;

// ── Contract description ──

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OptionKind {
    Call,
    Put,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PositionSide {
    Long,
    Short,
}

impl std::fmt::Display for OptionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Call => write!(f, "call"),
            Self::Put => write!(f, "put"),
        }
    }
}

impl std::fmt::Display for PositionSide {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Long => write!(f, "long"),
            Self::Short => write!(f, "short"),
        }
    }
}

/// One options position in the basket.
///
/// `ask` is the premium charged against the payoff for either side.
/// `bid` and `expiration` are carried through from the request but do not
/// enter the payoff computation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContractSpec {
    #[serde(rename = "type")]
    pub kind: OptionKind,
    pub strike_price: f64,
    pub bid: f64,
    pub ask: f64,
    #[serde(rename = "expiration_date")]
    pub expiration: DateTime<Utc>,
    #[serde(rename = "long_short")]
    pub side: PositionSide,
}

/// Boundary checks run before the engine sees a batch.
/// The length check comes first so an oversized batch always reports the
/// fixed limit message. Pure function, no side effects.
pub fn validate_batch(contracts: &[ContractSpec]) -> ServiceResult<()> {
    if contracts.len() > MAX_CONTRACTS {
        return Err(ServiceError::TooManyContracts { max: MAX_CONTRACTS });
    }

    for (index, c) in contracts.iter().enumerate() {
        // negated comparisons so NaN fails too
        if !(c.strike_price.abs() <= MAX_PRICE_MAGNITUDE) {
            return Err(ServiceError::InvalidContract { index, reason: "strike_price out of range" });
        }
        if c.strike_price < 0.0 {
            return Err(ServiceError::InvalidContract { index, reason: "strike_price must be non-negative" });
        }
        if !(c.ask.abs() <= MAX_PRICE_MAGNITUDE) || !(c.bid.abs() <= MAX_PRICE_MAGNITUDE) {
            return Err(ServiceError::InvalidContract { index, reason: "bid and ask out of range" });
        }
    }

    Ok(())
}

#[cfg(test)]
pub(crate) fn sample(kind: OptionKind, strike: f64, ask: f64, side: PositionSide) -> ContractSpec {
    ContractSpec {
        kind,
        strike_price: strike,
        bid: (ask - 1.0).max(0.0),
        ask,
        expiration: Utc::now() + chrono::Duration::days(30),
        side,
    }
}
