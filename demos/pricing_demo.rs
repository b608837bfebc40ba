// demos/pricing_demo.rs

//! Demonstration of Black-Scholes-Merton pricing and Greeks
//!
//! This example shows how to:
//! 1. Build market snapshots for a ladder of strikes
//! 2. Price calls and puts
//! 3. Read back all Greeks from a single consistent computation
//! 4. Verify put-call parity across the ladder

use bsm_lib::{DayCount, OptionInputs, OptionType};

fn main() {
    println!("Black-Scholes-Merton Pricing Demo");
    println!("=================================");

    let underlying = 100.0;
    let sigma = 0.20;
    let r = 0.05;
    let q = 0.01;
    let t_days = 90.0;

    println!("Underlying price: ${:.2}", underlying);
    println!("Volatility: {:.0}%", sigma * 100.0);
    println!("Risk-free rate: {:.1}%", r * 100.0);
    println!("Dividend yield: {:.1}%", q * 100.0);
    println!("Expiration: {} calendar days", t_days);

    let strikes = [80.0, 90.0, 95.0, 100.0, 105.0, 110.0, 120.0];

    for option_type in [OptionType::Call, OptionType::Put] {
        println!("\n{:?} ladder:", option_type);
        println!(
            "{:<8} {:<10} {:<10} {:<10} {:<10} {:<10} {:<10}",
            "Strike", "Price", "Delta", "Gamma", "Theta", "Vega", "Rho"
        );
        println!("{}", "-".repeat(68));

        for &strike in &strikes {
            let contract = OptionInputs::new(
                option_type,
                underlying,
                strike,
                sigma,
                r,
                q,
                t_days,
                DayCount::Calendar,
            );

            let all = contract.price_and_greeks();
            println!(
                "{:<8.0} {:<10.4} {:<10.4} {:<10.4} {:<10.5} {:<10.4} {:<10.4}",
                strike, all.price, all.delta, all.gamma, all.theta, all.vega, all.rho
            );
        }
    }

    // Parity check: C - P should equal the discounted forward at every strike
    println!("\nPut-call parity check:");
    let t = t_days / 365.0;
    for &strike in &strikes {
        let call = OptionInputs::new(
            OptionType::Call,
            underlying,
            strike,
            sigma,
            r,
            q,
            t_days,
            DayCount::Calendar,
        );
        let put = OptionInputs { option_type: OptionType::Put, ..call };

        let parity = call.price() - put.price();
        let forward = underlying * (-q * t).exp() - strike * (-r * t).exp();
        println!(
            "  K={:<6.0} C-P={:>9.6}  S e^-qt - K e^-rt={:>9.6}  diff={:+.2e}",
            strike,
            parity,
            forward,
            (parity - forward).abs()
        );
    }
}
