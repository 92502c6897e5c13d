//! Sample tables for plotting and export.

use std::io::Write;

use serde::{Deserialize, Serialize};
use shm_diagnostics::trajectory_energy;
use shm_scenario::Scenario;
use shm_sim::Method;

use crate::error::AppResult;
use crate::scenario_service::prepare;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct SeriesRow {
    pub time: f64,
    pub position: f64,
    pub velocity: f64,
    pub energy: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeriesTable {
    pub method: Method,
    pub rows: Vec<SeriesRow>,
}

/// Run one method on the scenario (forcing included) and tabulate it
/// against absolute grid time.
pub fn series_table(scenario: &Scenario, method: Method) -> AppResult<SeriesTable> {
    let inputs = prepare(scenario)?;
    let traj = method.run(
        &inputs.params,
        &inputs.state,
        &inputs.grid,
        inputs.forcing.as_ref(),
    )?;
    let energy = trajectory_energy(&inputs.params, &traj)?;

    let rows = inputs
        .grid
        .times()
        .zip(traj.iter())
        .zip(energy)
        .map(|((time, (position, velocity)), energy)| SeriesRow {
            time,
            position,
            velocity,
            energy,
        })
        .collect();

    Ok(SeriesTable { method, rows })
}

/// Write `time,position,velocity,energy` rows with a header line.
pub fn write_csv<W: Write>(table: &SeriesTable, mut out: W) -> AppResult<()> {
    writeln!(out, "time,position,velocity,energy")?;
    for row in &table.rows {
        writeln!(
            out,
            "{},{},{},{}",
            row.time, row.position, row.velocity, row.energy
        )?;
    }
    out.flush()?;
    Ok(())
}
