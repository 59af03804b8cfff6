use orbit_sim::io;
use orbit_sim::sim::{run_simulation, SimConfig};
use orbit_sim::system::presets;

fn main() {
    // -----------------------------------------------------------------------
    // System: Sun, Earth, and the Mars system (Phobos + Deimos)
    // -----------------------------------------------------------------------
    let system = presets::inner_solar_system();

    let config = SimConfig::default();   // two years, weekly steps

    // -----------------------------------------------------------------------
    // Run simulation
    // -----------------------------------------------------------------------
    let run = run_simulation(&system, &config).expect("preset system simulates");

    // -----------------------------------------------------------------------
    // Print results
    // -----------------------------------------------------------------------
    println!();
    println!("====================================================================");
    println!("  ORBITAL SIMULATION — {}", system.name);
    println!("====================================================================");
    println!();

    let central = system.get_central_object();
    println!("  Central Body");
    println!("  ──────────────────────────────────────────────────────────────────");
    println!(
        "  {}:  radius {:>9.0} km   mass {:>10.3e} kg",
        central.name(),
        central.radius(),
        central.mass(),
    );
    println!();

    println!("  Orbiting Entries");
    println!("  ──────────────────────────────────────────────────────────────────");
    println!(
        "  {:<14}  {:>10}  {:>12}  {:>14}",
        "name", "a (AU)", "T (yr)", "omega (rad/yr)"
    );
    for trace in &run.traces {
        println!(
            "  {:<14}  {:>10.4}  {:>12.6}  {:>14.6}",
            trace.name,
            trace.orbit_radius,
            2.0 * std::f64::consts::PI / trace.angular_velocity,
            trace.angular_velocity,
        );
    }
    println!();
    println!("  {}", system.orbiting_objects_list());
    println!();

    // -----------------------------------------------------------------------
    // Trajectory table (sampled)
    // -----------------------------------------------------------------------
    println!("  Trajectory");
    println!("  ──────────────────────────────────────────────────────────────────");
    println!(
        "  {:>8}  {:<14}  {:>9}  {:>9}  {:>9}",
        "t (yr)", "object", "x (AU)", "y (AU)", "z (AU)"
    );
    println!("  {}", "─".repeat(58));

    let sample_interval = (run.num_steps() / 12).max(1);
    for trace in &run.traces {
        for (i, p) in trace.positions.iter().enumerate() {
            if i % sample_interval != 0 && i != trace.positions.len() - 1 {
                continue;
            }
            println!(
                "  {:>8.3}  {:<14}  {:>9.4}  {:>9.4}  {:>9.4}",
                run.time[i], trace.name, p.x, p.y, p.z,
            );
        }
    }
    println!();

    // -----------------------------------------------------------------------
    // Write flat table for downstream plotting
    // -----------------------------------------------------------------------
    let out_path = "orbits.csv";
    match io::write_positions_file(out_path, &run) {
        Ok(()) => println!("  Positions written to {out_path}"),
        Err(e) => eprintln!("  Could not write {out_path}: {e}"),
    }

    println!(
        "  Simulation: {} entries, {} steps, dt={} yr",
        run.traces.len(),
        run.num_steps(),
        config.timestep,
    );
    println!("====================================================================");
    println!();
}
