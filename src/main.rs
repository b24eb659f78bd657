/*!
 * Warehouse Robot Simulation - Main Entry Point
 *
 * Text menu over the simulation library:
 * - Run robots WITHOUT synchronization (conflicts expected)
 * - Run robots WITH synchronization (robots take turns)
 *
 * Environment variables:
 * - WAREHOUSE_ROBOTS: robots per run (default: 5)
 * - WAREHOUSE_TIME_UNIT_MS: length of one time unit (default: 1000)
 * - WAREHOUSE_TRACE_JSON: JSON output instead of colored text
 */

use std::io::{self, BufRead, Write};
use std::thread;
use std::time::Duration;

use miette::{IntoDiagnostic, Result};
use tracing::info;
use warehouse_sim::monitoring::json_requested;
use warehouse_sim::{init_tracing, Protocol, RunReport, Simulation, SimulationConfig};

fn main() -> Result<()> {
    init_tracing();

    let config = SimulationConfig::from_env()?;
    info!(
        robots = config.robots,
        time_unit_ms = config.time_unit.as_millis() as u64,
        "Warehouse simulation ready"
    );
    let simulation = Simulation::new(config)?;

    let stdin = io::stdin();
    let mut input = stdin.lock();

    loop {
        clear_screen()?;
        println!("\n=== Warehouse Robot Simulation ===");
        println!("1. Run WITHOUT synchronization (robots may conflict)");
        println!("2. Run WITH synchronization (robots take turns)");
        println!("3. Exit");

        let Some(choice) = prompt(&mut input, "\nChoose an option (1, 2, or 3): ")? else {
            break;
        };

        let protocol = match choice.trim() {
            "1" => Protocol::Unsynchronized,
            "2" => Protocol::Synchronized,
            "3" => {
                println!("\nExiting program. Goodbye!");
                break;
            }
            _ => {
                println!("\nInvalid choice! Please enter 1, 2, or 3.");
                thread::sleep(Duration::from_secs(1));
                continue;
            }
        };

        clear_screen()?;
        match protocol {
            Protocol::Unsynchronized => println!("\nRunning {protocol} (Conflicts Expected)"),
            Protocol::Synchronized => println!("\nRunning {protocol} (No Conflicts)"),
        }

        let report = simulation.run(protocol)?;
        print_report(&report)?;

        if prompt(&mut input, "\nPress Enter to return to the main menu...")?.is_none() {
            break;
        }
    }

    Ok(())
}

/// Print `message` and read one line; `None` on end of input
fn prompt(input: &mut impl BufRead, message: &str) -> Result<Option<String>> {
    print!("{message}");
    io::stdout().flush().into_diagnostic()?;

    let mut line = String::new();
    let read = input.read_line(&mut line).into_diagnostic()?;
    Ok((read > 0).then_some(line))
}

fn print_report(report: &RunReport) -> Result<()> {
    if json_requested() {
        println!("{}", serde_json::to_string(report).into_diagnostic()?);
    } else {
        println!("\n{report}");
    }
    Ok(())
}

fn clear_screen() -> Result<()> {
    print!("\x1B[2J\x1B[1;1H");
    io::stdout().flush().into_diagnostic()
}
