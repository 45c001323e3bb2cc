use clap::Parser;
use forest_fire_core::{ForestFire, TreeCondition};
use serde::Serialize;

/// Forest fire demo with configurable parameters
#[derive(Parser, Debug)]
#[command(name = "forest-fire-demo")]
#[command(about = "Forest fire propagation demo", long_about = None)]
struct Args {
    /// Grid height in cells
    #[arg(long, default_value_t = 100)]
    height: usize,

    /// Grid width in cells
    #[arg(long, default_value_t = 100)]
    width: usize,

    /// Fraction of cells seeded with a tree (0-1)
    #[arg(short, long, default_value_t = 0.65)]
    density: f64,

    /// Random seed for a reproducible run (omit for OS entropy)
    #[arg(short, long)]
    seed: Option<u64>,

    /// Report counts every N ticks
    #[arg(short, long, default_value_t = 1)]
    report_interval: u64,

    /// Render the grid as ASCII after every report
    #[arg(long)]
    render: bool,

    /// Print the final summary as JSON instead of text
    #[arg(long)]
    json: bool,

    /// Safety cap on the number of ticks
    #[arg(long, default_value_t = 10_000)]
    max_ticks: u64,
}

/// End-of-run report for external consumers.
#[derive(Debug, Serialize)]
struct RunSummary {
    height: usize,
    width: usize,
    density: f64,
    seed: Option<u64>,
    planted: usize,
    ticks: u64,
    fine: usize,
    burned_out: usize,
}

fn counts(model: &ForestFire) -> (usize, usize, usize) {
    (
        model.count_by_condition(TreeCondition::Fine),
        model.count_by_condition(TreeCondition::OnFire),
        model.count_by_condition(TreeCondition::BurnedOut),
    )
}

fn render(model: &ForestFire) -> String {
    let mut out = String::with_capacity((model.width() + 1) * model.height());
    for y in 0..model.height() {
        for x in 0..model.width() {
            let glyph = match model
                .grid()
                .agent_at(x, y)
                .and_then(|id| model.tree(id))
                .map(|tree| tree.condition)
            {
                None => '.',
                Some(TreeCondition::Fine) => 'T',
                Some(TreeCondition::OnFire) => '*',
                Some(TreeCondition::BurnedOut) => 'x',
            };
            out.push(glyph);
        }
        out.push('\n');
    }
    out
}

fn report(model: &ForestFire, show_grid: bool) {
    let (fine, on_fire, burned_out) = counts(model);
    println!(
        "tick {:>4}: {} fine, {} on fire, {} burned out",
        model.ticks(),
        fine,
        on_fire,
        burned_out
    );
    if show_grid {
        println!("{}", render(model));
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let args = Args::parse();

    let model = match args.seed {
        Some(seed) => ForestFire::from_seed(args.height, args.width, args.density, seed),
        None => ForestFire::new(args.height, args.width, args.density),
    };
    let mut model = match model {
        Ok(model) => model,
        Err(err) => {
            eprintln!("error: {err}");
            std::process::exit(1);
        }
    };

    println!(
        "=== Forest Fire Demo: {}x{} at density {} ({} trees) ===\n",
        args.width,
        args.height,
        args.density,
        model.tree_count()
    );
    report(&model, args.render);

    let report_interval = args.report_interval.max(1);
    while model.running() && model.ticks() < args.max_ticks {
        model.step();
        if model.ticks() % report_interval == 0 {
            report(&model, args.render);
        }
    }

    let (fine, _, burned_out) = counts(&model);
    let summary = RunSummary {
        height: args.height,
        width: args.width,
        density: args.density,
        seed: args.seed,
        planted: model.tree_count(),
        ticks: model.ticks(),
        fine,
        burned_out,
    };

    if args.json {
        match serde_json::to_string_pretty(&summary) {
            Ok(json) => println!("{json}"),
            Err(err) => eprintln!("error: failed to serialize summary: {err}"),
        }
    } else {
        println!(
            "\nFire out after {} ticks: {} of {} trees burned, {} untouched",
            summary.ticks, summary.burned_out, summary.planted, summary.fine
        );
    }
}
