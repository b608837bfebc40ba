//! Closed-form Greeks and the aggregate accessors.
//!
//! Each Greek exists in two forms: a standalone method that derives d1/d2
//! from the snapshot, and a `*_with` method that takes precomputed factors.
//! The aggregates compute d1/d2 exactly once and thread the same pair
//! through every component, so a bundle is always internally consistent.

use crate::normal::{norm_cdf, norm_pdf};
use crate::types::{Greeks, OptionInputs, OptionType, PriceAndGreeks};

impl OptionInputs {
    /// Delta, ∂V/∂S: call e^(−qt)·Φ(d1), put −e^(−qt)·Φ(−d1).
    pub fn delta(&self) -> f64 {
        let (d1, _) = self.d1_d2();
        self.delta_with(d1)
    }

    pub fn delta_with(&self, d1: f64) -> f64 {
        let dividend_disc = (-self.q * self.year_fraction()).exp();
        match self.option_type {
            OptionType::Call => dividend_disc * norm_cdf(d1),
            OptionType::Put => -dividend_disc * norm_cdf(-d1),
        }
    }

    /// Gamma, ∂²V/∂S²: e^(−qt)·φ(d1) / (S·σ·√t). Identical for calls and puts.
    pub fn gamma(&self) -> f64 {
        let (d1, _) = self.d1_d2();
        self.gamma_with(d1)
    }

    pub fn gamma_with(&self, d1: f64) -> f64 {
        let t = self.year_fraction();
        (-self.q * t).exp() * norm_pdf(d1) / (self.s * self.sigma * t.sqrt())
    }

    /// Theta, time decay per one elapsed day under the snapshot's day-count
    /// basis (the annualized decay divided by 365 or 252).
    pub fn theta(&self) -> f64 {
        let (d1, d2) = self.d1_d2();
        self.theta_with(d1, d2)
    }

    pub fn theta_with(&self, d1: f64, d2: f64) -> f64 {
        let t = self.year_fraction();
        let disc_s = self.s * (-self.q * t).exp();
        let disc_k = self.k * (-self.r * t).exp();

        // Common decay term from the diffusion part
        let decay = -disc_s * self.sigma * norm_pdf(d1) / (2.0 * t.sqrt());

        let annual = match self.option_type {
            OptionType::Call => {
                decay - self.r * disc_k * norm_cdf(d2) + self.q * disc_s * norm_cdf(d1)
            }
            OptionType::Put => {
                decay + self.r * disc_k * norm_cdf(-d2) + self.q * disc_s * norm_cdf(-d1)
            }
        };

        annual / self.day_count.days_per_year()
    }

    /// Vega per 1% volatility move: S·e^(−qt)·√t·φ(d1) / 100. Identical for
    /// calls and puts. Callers must not rescale.
    pub fn vega(&self) -> f64 {
        let (d1, _) = self.d1_d2();
        self.vega_with(d1)
    }

    pub fn vega_with(&self, d1: f64) -> f64 {
        let t = self.year_fraction();
        self.s * (-self.q * t).exp() * t.sqrt() * norm_pdf(d1) / 100.0
    }

    /// Rho per 1% rate move: call K·t·e^(−(r−q)t)·Φ(d2) / 100, put
    /// −K·t·e^(−(r−q)t)·Φ(−d2) / 100.
    pub fn rho(&self) -> f64 {
        let (_, d2) = self.d1_d2();
        self.rho_with(d2)
    }

    pub fn rho_with(&self, d2: f64) -> f64 {
        let t = self.year_fraction();
        let scaled = self.k * t * (-(self.r - self.q) * t).exp() / 100.0;
        match self.option_type {
            OptionType::Call => scaled * norm_cdf(d2),
            OptionType::Put => -scaled * norm_cdf(-d2),
        }
    }

    /// All five Greeks from a single d1/d2 computation.
    pub fn greeks(&self) -> Greeks {
        let (d1, d2) = self.d1_d2();
        Greeks {
            delta: self.delta_with(d1),
            gamma: self.gamma_with(d1),
            theta: self.theta_with(d1, d2),
            vega: self.vega_with(d1),
            rho: self.rho_with(d2),
        }
    }

    /// Present value and all five Greeks from a single d1/d2 computation,
    /// so price and sensitivities share the same moneyness snapshot.
    pub fn price_and_greeks(&self) -> PriceAndGreeks {
        let (d1, d2) = self.d1_d2();
        PriceAndGreeks {
            price: self.price_with(d1, d2),
            delta: self.delta_with(d1),
            gamma: self.gamma_with(d1),
            theta: self.theta_with(d1, d2),
            vega: self.vega_with(d1),
            rho: self.rho_with(d2),
        }
    }
}
