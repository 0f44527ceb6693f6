use std::fs;
use std::path::PathBuf;

use anyhow::{bail, Context};
use clap::Parser;

use terminus::{
    binomial, scatter_svg_2d, scatter_svg_3d, ExactSearch, PointSource, RatioSource, Solver,
};

#[derive(Debug, Parser)]
#[command(name = "terminus")]
#[command(about = "Exact terminal-planet placement in a multi-dimensional space", long_about = None)]
struct Cli {
    /// Folder where simulation images will be saved.
    #[arg(long, default_value = "result")]
    folder: PathBuf,

    /// Prefix for the filenames of the simulation images.
    #[arg(long, default_value = "simulation")]
    filename: String,

    /// Number of dimensions for the simulation space.
    #[arg(long, default_value_t = 3)]
    dimensions: usize,

    /// Total number of planets in the simulation.
    #[arg(long, default_value_t = 50)]
    planets: usize,

    /// Number of terminal planets to select.
    #[arg(long, default_value_t = 3)]
    terminal_planets: usize,

    /// Number of independent simulation rounds to run.
    #[arg(long, default_value_t = 1)]
    iterations: usize,

    /// Replace the output folder if it already exists.
    #[arg(long)]
    replace_folder: bool,

    /// Seed for the point generator; omit for an OS-seeded run.
    #[arg(long)]
    seed: Option<u64>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if cli.folder.exists() {
        if cli.replace_folder {
            println!("Deleting existing folder: {}", cli.folder.display());
            fs::remove_dir_all(&cli.folder)
                .with_context(|| format!("removing {}", cli.folder.display()))?;
        } else {
            bail!(
                "folder '{}' already exists; use --replace-folder to replace it",
                cli.folder.display()
            );
        }
    }
    fs::create_dir_all(&cli.folder)
        .with_context(|| format!("creating {}", cli.folder.display()))?;

    let mut source = match cli.seed {
        Some(seed) => RatioSource::new().with_seed(seed),
        None => RatioSource::new(),
    };
    let solver = ExactSearch::new(cli.terminal_planets);
    let candidates = binomial(cli.planets, cli.terminal_planets);

    for index in 0..cli.iterations {
        let points = source.points(cli.planets, cli.dimensions);
        let solution = solver
            .solve(&points)
            .with_context(|| format!("iteration {index}"))?;
        println!(
            "iteration {index}: {candidates} candidates, best cost {:.4}, centers {:?}",
            solution.cost, solution.indices
        );

        let svg = match cli.dimensions {
            2 => Some(scatter_svg_2d(&points, &solution.centers, 800)?),
            3 => Some(scatter_svg_3d(&points, &solution.centers, 800)?),
            _ => None,
        };
        match svg {
            Some(svg) => {
                let path = cli
                    .folder
                    .join(format!("{}_{index:03}.svg", cli.filename));
                fs::write(&path, svg).with_context(|| format!("writing {}", path.display()))?;
            }
            None => {
                println!("no plot for {} dimensions; terminal planets:", cli.dimensions);
                for center in &solution.centers {
                    println!("  {center:?}");
                }
            }
        }
    }

    Ok(())
}
