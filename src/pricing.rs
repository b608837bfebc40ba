//! Time normalization, moneyness factors and the Black-Scholes-Merton
//! present-value formula.
//!
//! Every function here is pure and allocation-free. Degenerate inputs
//! (sigma = 0, t_days = 0, non-positive prices) are not guarded: they flow
//! through IEEE-754 arithmetic to NaN or infinities, and callers that want
//! typed rejection use [`OptionInputs::validate`] first.

use crate::normal::norm_cdf;
use crate::types::{DayCount, OptionInputs, OptionType};

/// Convert days-to-expiration into a year fraction under the given basis.
///
/// No rounding is applied; fractional days (e.g. 0.5 days until an intraday
/// expiry) are valid inputs.
pub fn year_fraction(t_days: f64, day_count: DayCount) -> f64 {
    t_days / day_count.days_per_year()
}

impl OptionInputs {
    /// Year-fraction time to expiration for this snapshot.
    pub fn year_fraction(&self) -> f64 {
        year_fraction(self.t_days, self.day_count)
    }

    /// Moneyness factors (d1, d2):
    ///
    /// d1 = (ln(S/K) + t·(r − q + σ²/2)) / (σ·√t), d2 = d1 − σ·√t
    ///
    /// Each standalone pricing call derives these fresh. When several
    /// quantities are needed against the same snapshot, compute the pair
    /// once and feed it to the `*_with` variants, which use it verbatim
    /// (a legitimately zero d1 or d2 is passed through unchanged).
    pub fn d1_d2(&self) -> (f64, f64) {
        let t = self.year_fraction();
        let vol_sqrt_t = self.sigma * t.sqrt();
        let d1 = ((self.s / self.k).ln() + t * (self.r - self.q + 0.5 * self.sigma * self.sigma))
            / vol_sqrt_t;
        (d1, d1 - vol_sqrt_t)
    }

    /// Present value of the contract, deriving d1/d2 from the snapshot.
    pub fn price(&self) -> f64 {
        let (d1, d2) = self.d1_d2();
        self.price_with(d1, d2)
    }

    /// Present value using caller-supplied moneyness factors.
    ///
    /// call = S·e^(−qt)·Φ(d1) − K·e^(−rt)·Φ(d2)
    /// put  = K·e^(−rt)·Φ(−d2) − S·e^(−qt)·Φ(−d1)
    pub fn price_with(&self, d1: f64, d2: f64) -> f64 {
        let t = self.year_fraction();
        let disc_s = self.s * (-self.q * t).exp();
        let disc_k = self.k * (-self.r * t).exp();

        match self.option_type {
            OptionType::Call => disc_s * norm_cdf(d1) - disc_k * norm_cdf(d2),
            OptionType::Put => disc_k * norm_cdf(-d2) - disc_s * norm_cdf(-d1),
        }
    }
}
