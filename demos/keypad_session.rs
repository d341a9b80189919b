//! Keypad Session
//!
//! This example presses a sequence of keypad buttons and prints the
//! two-line readout after each press.
//!
//! Key concepts:
//! - The calculator owns the only state value
//! - Each button dispatches one event into the pure reducer
//! - Chained operations evaluate left to right
//!
//! Run with: RUST_LOG=calcpad=trace cargo run --example keypad_session

use calcpad::keypad::Key;
use calcpad::CalculatorBuilder;
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    println!("=== Keypad Session Example ===\n");

    let mut calculator = CalculatorBuilder::new().tape_capacity(64).build()?;

    let labels = [
        "1", "2", "3", "4", ".", "5", "+", "6", "*", "2", "=", "0", "0", "DEL", "/", "0", "=",
    ];
    for label in labels {
        let key = Key::from_label(label).ok_or_else(|| format!("no key labelled {label}"))?;
        calculator.press(key);
        println!("[{key:>3}]\n{}\n", calculator.screen());
    }

    let tape = calculator.tape();
    println!(
        "Pressed {} keys in {:?}, {} changed the state",
        tape.len(),
        tape.duration().unwrap_or_default(),
        tape.changes()
    );

    println!("\n=== Example Complete ===");
    Ok(())
}
