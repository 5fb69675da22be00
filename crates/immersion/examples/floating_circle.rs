//! Float a 12-segment circle and print A(h) alongside the equilibrium depth.
//!
//! Usage:
//!   cargo run -p immersion --example floating_circle -- [mass_kg] [seed]

use immersion::prelude::*;

fn main() {
    let mut args = std::env::args().skip(1);
    let mass: f64 = args.next().and_then(|s| s.parse().ok()).unwrap_or(5.0);
    let seed: u64 = args.next().and_then(|s| s.parse().ok()).unwrap_or(2025);

    let shape = match circle_fan(0.2, 12) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("circle: {e}");
            return;
        }
    };
    let cfg = SliceCfg {
        slice_height: 0.02,
        samples_per_slice: 10_000,
    };
    let af = match compute_area_function(&shape, &cfg, seed) {
        Ok(af) => af,
        Err(e) => {
            eprintln!("area: {e}");
            return;
        }
    };
    for (h, a) in af.points() {
        println!("h={h:.3}  A={a:.5}");
    }
    match equilibrium_depth(&af, mass, 0.2, WATER_DENSITY) {
        Some(d) => println!("{mass} kg floats at depth {d:.4} m"),
        None => println!("{mass} kg sinks"),
    }
}
