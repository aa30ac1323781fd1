/// Frame-loop timings without criterion
use std::time::Instant;

use press_sim::materials::{lab_presets, quick_presets};
use press_sim::{MaterialCatalog, PressParams, PressState, SceneLayout, SystemSettings};

fn time_it<F: FnMut()>(name: &str, iterations: usize, mut f: F) {
    // Warmup
    for _ in 0..5 {
        f();
    }

    let start = Instant::now();
    for _ in 0..iterations {
        f();
    }
    let elapsed = start.elapsed();

    let avg_us = elapsed.as_secs_f64() * 1_000_000.0 / iterations as f64;
    println!("{}: {:.3}us avg ({} iterations)", name, avg_us, iterations);
}

fn lab_state() -> PressState {
    let params = PressParams::lab();
    let material = lab_presets()[1].to_material(params.force_bands);
    PressState::new(material, SystemSettings::default(), params, &SceneLayout::lab())
}

fn main() {
    println!("\n=== Press Benchmarks ===\n");

    println!("--- Automatic cycle ---");
    for &frames in &[60, 600, 6000] {
        time_it(&format!("auto cycle (frames={})", frames), 100, || {
            let mut state = lab_state();
            state.toggle_mode();
            for _ in 0..frames {
                state.advance(1.0 / 60.0);
            }
            std::hint::black_box(state.pressure());
        });
    }

    println!("\n--- Manual approach ---");
    time_it("nudge to contact and back", 1000, || {
        let mut state = lab_state();
        while !state.is_contact() {
            state.nudge_forward();
        }
        while state.piston().extension() > 0.0 {
            state.nudge_back();
        }
        std::hint::black_box(state.piston().extension());
    });

    println!("\n--- Preset switching ---");
    let params = PressParams::quick();
    let bands = params.force_bands;
    let mut catalog = MaterialCatalog::new(quick_presets());
    let mut state = PressState::new(
        quick_presets()[0].to_material(bands),
        SystemSettings::quick(),
        params,
        &SceneLayout::quick(),
    );
    let count = catalog.len();
    let mut next = 0;
    time_it("select preset", 10_000, || {
        next = (next + 1) % count;
        if let Some(config) = catalog.select(next).cloned() {
            state.select_material(config.to_material(bands));
        }
    });

    println!("\n=== Benchmarks Complete ===");
}
