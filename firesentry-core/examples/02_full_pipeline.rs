//! Full Pipeline Example
//!
//! Wires the risk core to all three collaborator seams - a simulated
//! sensor source, the alarm cadence machine as the alert sink, and an
//! in-memory telemetry sink - and runs a fire scenario end to end:
//! learning, calm, gas rise, sustained flame, confirmed emergency.
//!
//! ## Running the Example
//!
//! ```bash
//! cargo run --example 02_full_pipeline
//! ```

use firesentry_core::alarm::AlarmCadence;
use firesentry_core::errors::SensorError;
use firesentry_core::traits::MemoryTelemetrySink;
use firesentry_core::{
    AlertSink, AlertState, PipelineDriver, RiskConfig, SensorFrame, SensorSource,
};

const WINDOW: usize = 10;
const TICK_MS: u64 = 500;

/// Simulated gas/flame sensor running a scripted fire
struct SimulatedSensors {
    tick: usize,
}

impl SensorSource for SimulatedSensors {
    fn poll_frame(&mut self) -> nb::Result<SensorFrame, SensorError> {
        let t = self.tick;
        self.tick += 1;

        // Learning + calm, then gas rises, then flame appears
        let frame = match t {
            0..=14 => SensorFrame { gas: 400.0 + (t % 3) as f32, flame: false },
            15..=19 => SensorFrame { gas: 400.0 + (t - 14) as f32 * 300.0, flame: false },
            _ => SensorFrame { gas: 2600.0, flame: true },
        };
        Ok(frame)
    }
}

/// Alert sink that prints state transitions
struct PrintSink {
    last_printed: Option<AlertState>,
    latest: AlertState,
}

impl AlertSink for PrintSink {
    fn set_state(&mut self, state: AlertState) {
        self.latest = state;
        if self.last_printed != Some(state) {
            println!(">>> state -> {}", state.name());
            self.last_printed = Some(state);
        }
    }
}

fn main() {
    println!("Firesentry Full Pipeline Example");
    println!("================================\n");

    let sink = PrintSink {
        last_printed: None,
        latest: AlertState::Bootup,
    };

    let mut driver: PipelineDriver<_, _, _, WINDOW> = PipelineDriver::new(
        SimulatedSensors { tick: 0 },
        sink,
        MemoryTelemetrySink::<64>::new(),
        RiskConfig {
            tick_interval_ms: TICK_MS as u32,
            ..RiskConfig::default()
        },
    );

    for t in 0..25u64 {
        let now = t * TICK_MS;
        match driver.run_tick(now) {
            Ok(record) => {
                println!(
                    "t={:5}ms gas={:6.1} risk={:5.1} flame={} persist={} state={}",
                    now,
                    record.gas,
                    record.risk_score,
                    record.flame as u8,
                    record.flame_persistence,
                    record.state.name(),
                );
            }
            Err(e) => println!("t={:5}ms tick skipped: {}", now, e),
        }
    }

    println!("\ncaptured {} telemetry records", driver.telemetry().records().len());

    // The actuator cadence polls faster than the tick rate, reading
    // only the final discrete state
    let final_state = driver.alert_sink().latest;
    let mut cadence = AlarmCadence::new();
    cadence.set_state(final_state, 0);

    println!("\nactuator cadence for {} (50 ms polls):", final_state.name());
    for poll in 0..6u64 {
        let out = cadence.poll(poll * 50);
        println!("  t={:3}ms led={} buzzer={}", poll * 50, out.led as u8, out.buzzer as u8);
    }
}
