//! Parallel Coordinate Example
//!
//! Simulates a small hyperparameter sweep, builds the parallel-coordinate
//! figure and prints the plotly document.
//!
//! Run with: cargo run --example parallel_coordinate

use anyhow::Context;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use trueno_parcoords::config::PlotConfig;
use trueno_parcoords::plot::ParallelCoordinatePlot;
use trueno_parcoords::study::{Distribution, Study, StudyDirection, TrialRecord, TrialState};
use trueno_parcoords::telemetry;

const N_TRIALS: u64 = 20;

fn main() -> anyhow::Result<()> {
    let _ = telemetry::init_default_tracing();

    println!("=== trueno-parcoords: Parallel Coordinate Plot ===\n");

    // -------------------------------------------------------------------------
    // 1. Run a simulated sweep
    // -------------------------------------------------------------------------
    println!("1. Running {N_TRIALS} trials...");

    let mut rng = StdRng::seed_from_u64(10);
    let mut study = Study::new("resnet-sweep", StudyDirection::Minimize);
    let lr_dist = Distribution::Float { low: 1e-5, high: 1e-1, log: true, step: None };

    for number in 0..N_TRIALS {
        let lr = 10f64.powf(rng.gen_range(-5.0..-1.0));
        let optimizer = if rng.gen_bool(0.5) { "adam" } else { "sgd" };
        let batch_size: i64 = [16, 32, 64][rng.gen_range(0..3)];

        let mut builder = TrialRecord::builder(number)
            .param_with_distribution("learning_rate", lr, lr_dist.clone())
            .param("optimizer", optimizer);
        // Momentum only exists for SGD (conditional search space).
        if optimizer == "sgd" {
            builder = builder.param("momentum_for_stochastic_gradient_descent", rng.gen_range(0.5_f64..0.99));
        }

        let trial = if rng.gen_bool(0.15) {
            builder.state(TrialState::Pruned).build()
        } else {
            let loss = (lr.log10() + 3.0).powi(2) + 0.1 * (batch_size as f64).log2();
            builder.param("batch_size", batch_size).value(loss).build()
        };
        study.add_trial(trial);
    }

    println!("   Completed: {}/{}", study.completed_trials().len(), study.trial_count());

    // -------------------------------------------------------------------------
    // 2. Build the figure
    // -------------------------------------------------------------------------
    println!("\n2. Building axes...");

    let config = PlotConfig::from_json_str(r#"{ "colorscale": "viridis" }"#)?;
    let figure = ParallelCoordinatePlot::new(&study)
        .target_name("Validation Loss")
        .config(config)
        .build()
        .context("building parallel coordinate figure")?;

    for dim in figure.dimensions() {
        let (min, max) = dim.range();
        println!("   {:<22} n={:<3} range=({min:.3}, {max:.3})", dim.label(), dim.values().len());
        if let Some(text) = dim.ticktext() {
            println!("   {:<22} ticks={text:?}", "");
        }
    }
    for diagnostic in figure.diagnostics() {
        println!("   note: {diagnostic}");
    }

    // -------------------------------------------------------------------------
    // 3. Export for a renderer
    // -------------------------------------------------------------------------
    println!("\n3. Plotly document:");
    println!("{}", serde_json::to_string_pretty(&figure.to_plotly_value())?);

    Ok(())
}
