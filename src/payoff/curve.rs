use crate::contract::{ContractSpec, OptionKind, PositionSide};
use crate::payoff::CurvePoint;

/// Sampling grid for the underlying price axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PriceDomain {
    pub start: f64,
    pub end: f64,
    pub step: f64,
}

impl PriceDomain {
    /// [0, 200] in unit steps: 201 samples.
    pub const STANDARD: PriceDomain = PriceDomain { start: 0.0, end: 200.0, step: 1.0 };

    /// Number of samples, both ends inclusive. Zero for an empty or
    /// degenerate grid.
    #[inline]
    pub fn sample_count(&self) -> usize {
        if !(self.step > 0.0) || self.end < self.start {
            return 0;
        }
        ((self.end - self.start) / self.step).floor() as usize + 1
    }

    /// Price at sample `i`. Computed from the index, not accumulated, so
    /// the grid stays exact for integral steps.
    #[inline]
    pub fn price_at(&self, i: usize) -> f64 {
        self.start + i as f64 * self.step
    }
}

/// Payoff of a single contract at expiry for underlying price `x`,
/// before the side is applied:
///
/// Call: max(0, x - K) - ask
/// Put:  max(0, K - x) - ask
///
/// The premium is charged for both sides.
#[inline]
pub fn contract_payoff(contract: &ContractSpec, x: f64) -> f64 {
    let intrinsic = match contract.kind {
        OptionKind::Call => (x - contract.strike_price).max(0.0),
        OptionKind::Put => (contract.strike_price - x).max(0.0),
    };
    intrinsic - contract.ask
}

/// Net payoff of the whole basket at `x`. Summed in input order.
#[inline]
pub fn net_payoff(contracts: &[ContractSpec], x: f64) -> f64 {
    let mut y = 0.0;
    for contract in contracts {
        let payoff = contract_payoff(contract, x);
        match contract.side {
            PositionSide::Long => y += payoff,
            PositionSide::Short => y -= payoff,
        }
    }
    y
}

/// Sample the basket's net payoff across `domain`.
pub fn compute_curve(contracts: &[ContractSpec], domain: &PriceDomain) -> Vec<CurvePoint> {
    (0..domain.sample_count())
        .map(|i| {
            let x = domain.price_at(i);
            CurvePoint { x, y: net_payoff(contracts, x) }
        })
        .collect()
}
