//! # Bsm-Lib: Black-Scholes-Merton Option Pricing and Greeks
//!
//! `bsm-lib` is a fast, allocation-free Rust library for computing the
//! theoretical fair value of European option contracts and their first- and
//! second-order sensitivities (Greeks) under the Black-Scholes-Merton
//! closed-form model, extended with a continuous dividend yield.
//!
//! ## Core Features
//!
//! - **Closed-Form Pricing**: call and put present value with dividend yield
//! - **Full Greeks**: delta, gamma, theta, vega, rho as standalone formulas
//! - **Consistent Aggregates**: bundle accessors that share one d1/d2 snapshot
//! - **Production Ready**: pure, deterministic, zero-allocation primitives
//!   suitable for per-contract repricing loops on every market tick
//!
//! ## Quick Start
//!
//! ```rust
//! use bsm_lib::{DayCount, OptionInputs, OptionType};
//!
//! // ATM call, 20% vol, 5% rate, no dividend, 365 calendar days out
//! let contract = OptionInputs::new(
//!     OptionType::Call,
//!     100.0,  // underlying
//!     100.0,  // strike
//!     0.20,   // volatility (decimal fraction)
//!     0.05,   // risk-free rate
//!     0.0,    // dividend yield
//!     365.0,  // days to expiration
//!     DayCount::Calendar,
//! );
//!
//! let value = contract.price();
//! let all = contract.price_and_greeks();
//! println!("price {:.4}, delta {:.4}", all.price, all.delta);
//! ```
//!
//! ## Units Contract
//!
//! - `s`, `k`: currency units, must be > 0
//! - `sigma`, `r`, `q`: decimal fractions (3.10% is passed as `0.0310`)
//! - `t_days`: days to expiration, divided by 365 ([`DayCount::Calendar`])
//!   or 252 ([`DayCount::Trading`]) to produce a year fraction
//! - vega and rho outputs are per 1% move (already divided by 100)
//! - theta output is per one elapsed day under the chosen day-count basis
//!
//! ## Degenerate Inputs
//!
//! The formulas perform no input validation: zero volatility or zero time to
//! expiration flows through IEEE-754 arithmetic to NaN or infinities rather
//! than raising an error. Callers validate up front (see
//! [`OptionInputs::validate`]) or check `is_finite()` on outputs.

// ================================================================================================
// MODULES
// ================================================================================================

pub mod greeks;
pub mod normal;
pub mod pricing;
pub mod types;

// ================================================================================================
// PUBLIC RE-EXPORTS
// ================================================================================================

// Contract inputs and output bundles
pub use types::{DayCount, Greeks, OptionInputs, OptionType, PriceAndGreeks};

// Normalization helpers and distribution utilities
pub use normal::{norm_cdf, norm_pdf};
pub use pricing::year_fraction;
