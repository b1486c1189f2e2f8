//! Baseline Learning Example
//!
//! This example demonstrates the adaptive baseline: the pipeline spends
//! its first window of samples learning the ambient gas profile, then
//! latches into the classified states.
//!
//! ## What You'll Learn
//!
//! - Constructing a pipeline with a compile-time window size
//! - The Bootup phase and the readiness latch
//! - How z-score and rate-of-change appear once the baseline is ready
//!
//! ## Running the Example
//!
//! ```bash
//! cargo run --example 01_baseline_learning
//! ```

use firesentry_core::{RiskConfig, RiskPipeline, SensorFrame};

/// Small window so the learning phase fits in a terminal
const WINDOW: usize = 10;

fn main() {
    println!("Firesentry Baseline Learning Example");
    println!("====================================\n");

    let config = RiskConfig {
        tick_interval_ms: 1000,
        ..RiskConfig::default()
    };
    let mut pipeline: RiskPipeline<WINDOW> = RiskPipeline::new(config);

    // Ambient readings with a little noise, then a gas excursion
    let readings = [
        400.0, 402.0, 399.0, 401.0, 400.0, 398.0, 403.0, 400.0, 401.0, 399.0, // learning
        400.0, 402.0, // calm, baseline ready
        480.0, 560.0, 650.0, // rising gas
    ];

    for (i, gas) in readings.iter().enumerate() {
        let record = pipeline.tick(SensorFrame { gas: *gas, flame: false }, i as u64 * 1000);

        println!(
            "t={:5}ms gas={:6.1} z={:5.2} rate={:6.2}/s risk={:5.1} state={}",
            record.timestamp,
            record.gas,
            record.z_score,
            record.rate_of_change,
            record.risk_score,
            record.state.name(),
        );

        if i + 1 == WINDOW {
            println!("--- baseline ready (mean {:.1}) ---", pipeline.learning_mean());
        }
    }
}
