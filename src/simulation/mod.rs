/*!
 * Simulation
 *
 * Orchestrates one run: resets the shelf, spawns one thread per robot with a
 * small stagger between spawns, joins every robot and summarizes the outcome.
 *
 * ## Example
 *
 * ```rust,no_run
 * use warehouse_sim::{Simulation, SimulationConfig};
 *
 * let simulation = Simulation::new(SimulationConfig::default())?;
 * let report = simulation.run_synchronized(5)?;
 * assert_eq!(report.conflicts, 0);
 * # Ok::<(), warehouse_sim::SimulationError>(())
 * ```
 */

mod config;
mod orchestrator;
mod report;

pub use config::{SimulationConfig, ROBOTS_ENV, TIME_UNIT_MS_ENV};
pub use orchestrator::Simulation;
pub use report::RunReport;
