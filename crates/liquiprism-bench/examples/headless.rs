//! Headless run of a cube with note output printed to the console.
//!
//! Demonstrates: build config → LockstepCube → step → map births to notes
//! → shake → reset → repeat.

use liquiprism_bench::staggered_profile;
use liquiprism_engine::LockstepCube;
use liquiprism_obs::{cube_hash, render_cube, NoteMapper};

fn main() {
    println!("=== Liquiprism Headless Example ===\n");

    let mut world = LockstepCube::new(staggered_profile(42)).unwrap();
    let mapper = NoteMapper::builder().max_notes(3).build().unwrap();

    // --- Run 1: free evolution with a shake halfway ---
    println!("Run 1: 60 ticks, shake(4) at tick 30");
    for tick in 0..60 {
        if tick == 30 {
            world.shake(4);
        }
        let report = world.step().unwrap();
        let events = mapper.cube_events(world.cube());

        if tick % 10 == 0 || tick == 59 {
            println!(
                "  tick {:>3}: faces={}, stochastic={}, births={:>3}, flips={}, notes={:>2}, time={:>5}μs",
                report.tick,
                report.metrics.faces_ticked,
                report.metrics.stochastic_faces,
                report.metrics.births,
                report.metrics.flips,
                events.len(),
                report.metrics.total_us,
            );
        }
    }
    println!("  digest: {:016x}", cube_hash(world.cube()));

    // --- Reset and Run 2 ---
    println!("\nResetting cube...");
    world.reset(99);

    println!("Run 2: 20 ticks");
    for _ in 0..20 {
        world.step().unwrap();
    }
    println!("  alive cells: {}", world.cube().alive_count());
    println!("\n{}", render_cube(world.cube()));

    println!("Final tick: {}", world.current_tick());
    println!("Done.");
}
