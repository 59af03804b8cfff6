use std::io::{self, Write};

use crate::sim::SimulationRun;

/// One row of the flattened position table.
#[derive(Debug, Clone, PartialEq)]
pub struct PositionRecord {
    pub time: f64,       // years
    pub object: String,
    pub x: f64,          // AU
    pub y: f64,          // AU
    pub z: f64,          // AU
}

/// Flatten a simulation run into one record per (object, time) pair.
///
/// Objects appear in trace order; time ascends within each object.
pub fn flatten_run(run: &SimulationRun) -> Vec<PositionRecord> {
    let mut records = Vec::with_capacity(run.traces.len() * run.num_steps());
    for trace in &run.traces {
        for (t, p) in run.time.iter().zip(&trace.positions) {
            records.push(PositionRecord {
                time: *t,
                object: trace.name.clone(),
                x: p.x,
                y: p.y,
                z: p.z,
            });
        }
    }
    records
}

/// Write the position table as CSV.
///
/// Columns: Time, Object, X_pos, Y_pos, Z_pos
pub fn write_positions<W: Write>(writer: &mut W, run: &SimulationRun) -> io::Result<()> {
    writeln!(writer, "Time,Object,X_pos,Y_pos,Z_pos")?;
    for record in flatten_run(run) {
        writeln!(
            writer,
            "{:.6},{},{:.6},{:.6},{:.6}",
            record.time, record.object, record.x, record.y, record.z,
        )?;
    }
    Ok(())
}

/// Write the position table to a CSV file at the given path.
pub fn write_positions_file(path: &str, run: &SimulationRun) -> io::Result<()> {
    let mut file = std::fs::File::create(path)?;
    write_positions(&mut file, run)
}
