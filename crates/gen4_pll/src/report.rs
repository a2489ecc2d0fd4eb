//! Closed-form clock computation and report rendering.

use gen4_common::Frequency;
use serde::Serialize;
use std::fmt;

use crate::error::PllError;
use crate::params::PllParams;

/// Which way a rounded millisecond counter drifts relative to real time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DriftDirection {
    /// The ideal tick count is above the integer counter, so each counted
    /// "millisecond" ends early and the derived clock runs behind.
    Behind,
    /// The ideal tick count is below the integer counter.
    Forward,
}

impl DriftDirection {
    /// Classifies the counter rounding error. Zero error has no direction.
    pub fn from_ms_diff(ms_diff: f64) -> Option<Self> {
        if ms_diff > 0.0 {
            Some(Self::Behind)
        } else if ms_diff < 0.0 {
            Some(Self::Forward)
        } else {
            None
        }
    }
}

impl fmt::Display for DriftDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Behind => write!(f, "behind"),
            Self::Forward => write!(f, "forward"),
        }
    }
}

/// Everything derived from one [`PllParams`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ClockReport {
    /// The parameters this report was computed from.
    pub params: PllParams,
    /// Primary PLL output: `(input / input_div) * feedback_div`.
    pub clk_op: Frequency,
    /// Secondary output: `clk_op / output_div`.
    pub clk_ok: Frequency,
    /// Period of `clk_ok`, in seconds.
    pub clk_ok_period: f64,
    /// Ideal (fractional) number of `clk_ok` ticks per millisecond.
    pub ms_counter: f64,
    /// The integer counter value actually used in hardware.
    pub ms_counter_rounded: u64,
    /// `ms_counter - ms_counter_rounded`, in cycles.
    pub ms_diff: f64,
    /// Timing error accumulated per counted millisecond, in seconds.
    pub drift_per_ms: f64,
    /// Drift direction, `None` when the counter is exact.
    pub direction: Option<DriftDirection>,
    /// Seconds of operation after which the drift reaches 1 ms.
    pub secs_to_1ms_drift: Option<f64>,
}

/// Computes the clock report for a PLL configuration.
///
/// Rounding of the ideal counter uses round-half-to-even, so a counter of
/// exactly `n.5` ticks rounds to the even neighbour.
pub fn compute(params: &PllParams) -> Result<ClockReport, PllError> {
    params.validate()?;

    let clk_op = params
        .input
        .divide(params.input_div)
        .multiply(params.feedback_div);
    let clk_ok = clk_op.divide(params.output_div);
    let clk_ok_period = clk_ok.period_secs();

    let ms_counter = clk_ok.hz() / 1_000.0;
    let rounded = ms_counter.round_ties_even();
    let ms_diff = ms_counter - rounded;
    let drift_per_ms = ms_diff * clk_ok_period;

    let secs_to_1ms_drift = if drift_per_ms == 0.0 {
        None
    } else {
        Some(((1.0 / drift_per_ms) / 1_000_000.0).abs())
    };

    log::debug!(
        "clk_op={} Hz clk_ok={} Hz ms_counter={ms_counter} ms_diff={ms_diff}",
        clk_op.hz(),
        clk_ok.hz()
    );

    Ok(ClockReport {
        params: *params,
        clk_op,
        clk_ok,
        clk_ok_period,
        ms_counter,
        ms_counter_rounded: rounded as u64,
        ms_diff,
        drift_per_ms,
        direction: DriftDirection::from_ms_diff(ms_diff),
        secs_to_1ms_drift,
    })
}

impl ClockReport {
    /// Renders the human-readable report, one entry per output line.
    pub fn render_text(&self) -> Vec<String> {
        let input = self.params.input;
        let mut lines = vec![
            format!("CLKI = {} MHz ({} Hz)", input.mhz(), input.hz()),
            format!("CLKOP = {} MHz ({} Hz)", self.clk_op.mhz(), self.clk_op.hz()),
            format!("CLKOK = {} kHz ({} Hz)", self.clk_ok.khz(), self.clk_ok.hz()),
            format!(
                "Ms counter = {} (actual = {})",
                self.ms_counter_rounded, self.ms_counter
            ),
            format!("Ms diff = {} cycles", self.ms_diff),
            format!("Ns drift per ms = {} ns", self.drift_per_ms * 1e9),
        ];
        match (self.direction, self.secs_to_1ms_drift) {
            (Some(direction), Some(secs)) => {
                lines.push(format!("Clock drifts by 1 ms {direction} after {secs} s"))
            }
            _ => lines.push("Clock does not drift (counter is exact)".to_string()),
        }
        lines
    }
}
