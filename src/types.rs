use anyhow::{anyhow, Result};

/// Contract side: call or put
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum OptionType {
    Call,
    Put,
}

impl OptionType {
    pub fn is_call(&self) -> bool {
        matches!(self, OptionType::Call)
    }
}

/// Day-count basis used to turn days-to-expiration into a year fraction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DayCount {
    /// Calendar days, 365 per year
    Calendar,
    /// Trading days, 252 per year
    Trading,
}

impl DayCount {
    /// Number of days in one year under this basis.
    ///
    /// Theta is scaled by the same value so that its output is "per one
    /// elapsed day" in the chosen convention.
    pub fn days_per_year(&self) -> f64 {
        match self {
            DayCount::Calendar => 365.0,
            DayCount::Trading => 252.0,
        }
    }
}

/// Immutable market snapshot for a single European option contract.
///
/// All rates are decimal fractions (3.10% is passed as 0.0310), never
/// percentages. Time to expiration is given in days (fractional days are
/// valid) and interpreted through `day_count`.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct OptionInputs {
    /// Call or put
    pub option_type: OptionType,
    /// Underlying price, must be > 0
    pub s: f64,
    /// Strike price, must be > 0
    pub k: f64,
    /// Annualized implied volatility as a decimal fraction
    pub sigma: f64,
    /// Annualized continuously-compounded risk-free rate
    pub r: f64,
    /// Annualized continuous dividend yield
    pub q: f64,
    /// Days to expiration (whole or fractional)
    pub t_days: f64,
    /// Day-count basis for the year fraction
    pub day_count: DayCount,
}

impl OptionInputs {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        option_type: OptionType,
        s: f64,
        k: f64,
        sigma: f64,
        r: f64,
        q: f64,
        t_days: f64,
        day_count: DayCount,
    ) -> Self {
        Self {
            option_type,
            s,
            k,
            sigma,
            r,
            q,
            t_days,
            day_count,
        }
    }

    /// Opt-in input guard for callers that want a typed error instead of
    /// NaN/Inf propagation. None of the pricing formulas call this: passing
    /// degenerate inputs (sigma = 0, t_days = 0, s <= 0, k <= 0) straight to
    /// them produces NaN or infinities through ordinary IEEE-754 arithmetic.
    pub fn validate(&self) -> Result<()> {
        if !self.s.is_finite() || self.s <= 0.0 {
            return Err(anyhow!("Underlying price must be positive, got: {}", self.s));
        }
        if !self.k.is_finite() || self.k <= 0.0 {
            return Err(anyhow!("Strike price must be positive, got: {}", self.k));
        }
        if !self.sigma.is_finite() || self.sigma <= 0.0 {
            return Err(anyhow!("Volatility must be positive, got: {}", self.sigma));
        }
        if !self.t_days.is_finite() || self.t_days <= 0.0 {
            return Err(anyhow!(
                "Days to expiration must be positive, got: {}",
                self.t_days
            ));
        }
        if !self.r.is_finite() {
            return Err(anyhow!("Risk-free rate must be finite, got: {}", self.r));
        }
        if !self.q.is_finite() {
            return Err(anyhow!("Dividend yield must be finite, got: {}", self.q));
        }
        Ok(())
    }
}

/// The five first- and second-order sensitivities of an option contract.
///
/// Vega and rho are scaled to a 1% move (divided by 100); theta is per one
/// elapsed day under the snapshot's day-count basis.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Greeks {
    pub delta: f64,
    pub gamma: f64,
    pub theta: f64,
    pub vega: f64,
    pub rho: f64,
}

/// Present value bundled with all five Greeks, computed from one shared
/// d1/d2 snapshot so the components are mutually consistent.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PriceAndGreeks {
    pub price: f64,
    pub delta: f64,
    pub gamma: f64,
    pub theta: f64,
    pub vega: f64,
    pub rho: f64,
}
