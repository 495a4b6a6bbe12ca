pub mod curve;
pub mod metrics;

use crate::contract::ContractSpec;
use crate::payoff::curve::PriceDomain;

/// One sample of the risk/reward graph.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize)]
pub struct CurvePoint {
    pub x: f64,
    pub y: f64,
}

/// Everything the analyzer reports for one basket.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct AnalysisResult {
    #[serde(rename = "graph_data")]
    pub curve: Vec<CurvePoint>,
    pub max_profit: f64,
    pub max_loss: f64,
    pub break_even_points: Vec<f64>,
}

/// Analyze a basket over the standard [0, 200] price grid.
///
/// Pure function: no I/O, no shared state, deterministic from inputs.
/// Works for any number of contracts; the request boundary is what caps it.
pub fn analyze(contracts: &[ContractSpec]) -> AnalysisResult {
    analyze_over(contracts, &PriceDomain::STANDARD)
}

/// Same as [`analyze`] with an explicit sampling grid.
pub fn analyze_over(contracts: &[ContractSpec], domain: &PriceDomain) -> AnalysisResult {
    let curve = curve::compute_curve(contracts, domain);
    let max_profit = metrics::max_profit(&curve);
    let max_loss = metrics::max_loss(&curve);
    let break_even_points = metrics::break_even_points(&curve);

    AnalysisResult {
        curve,
        max_profit,
        max_loss,
        break_even_points,
    }
}
