//! Minimize a function given by its minterms and print the map, groups and expression.
//!
//! Run with:
//! ```bash
//! cargo run --example kmap -- --vars 4 0 1 2 5 8 9 10
//! ```

use clap::Parser;

use kmap_rs::expr::{Negation, Notation, VariableNames};
use kmap_rs::grid::Grid;
use kmap_rs::solver::{Solver, SolverConfig};

#[derive(Debug, Parser)]
#[command(author, version, about = "Karnaugh map minimizer")]
struct Cli {
    /// Number of variables (1 to 10).
    #[arg(long, value_name = "INT", default_value = "4")]
    vars: usize,

    /// Minterms where the function is true.
    #[arg(value_name = "MINTERM")]
    minterms: Vec<usize>,

    /// Write negation as `~A` and conjunction as `*`.
    #[clap(long)]
    tilde: bool,

    /// Name variables `x1, x2, ...` instead of `A, B, ...`.
    #[clap(long)]
    indexed: bool,

    /// Log level.
    #[clap(long, value_name = "LEVEL", default_value = "info")]
    log_level: simplelog::LevelFilter,
}

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let args = Cli::parse();

    simplelog::TermLogger::init(
        args.log_level,
        simplelog::Config::default(),
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    )?;

    let config = SolverConfig {
        notation: Notation {
            names: if args.indexed {
                VariableNames::Indexed
            } else {
                VariableNames::Letters
            },
            negation: if args.tilde {
                Negation::Tilde
            } else {
                Negation::Prime
            },
        },
    };
    let solver = Solver::new(config);

    let grid = Grid::from_minterms(args.vars, &args.minterms)?;
    println!("{}\n", grid);

    let time_solve = std::time::Instant::now();
    let solution = solver.solve_grid(grid)?;
    let elapsed = time_solve.elapsed();

    println!(
        "{} maximal groups, {} selected:",
        solution.groups_considered,
        solution.cover.len()
    );
    for group in &solution.cover {
        let mut wraps = Vec::new();
        if group.wraps_rows(&solution.grid) {
            wraps.push("rows");
        }
        if group.wraps_columns(&solution.grid) {
            wraps.push("columns");
        }
        if wraps.is_empty() {
            println!("  {}", group);
        } else {
            println!("  {} (wraps {})", group, wraps.join(", "));
        }
    }

    println!("\nf = {}", solution);
    println!("\nDone in {:.3} ms", elapsed.as_secs_f64() * 1000.0);

    Ok(())
}
