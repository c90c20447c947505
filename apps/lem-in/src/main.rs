//! lem-in: route every ant from `##start` to `##end` in the fewest turns.
//!
//! Reads a colony map, echoes it, then prints one line of `L<ant>-<room>`
//! moves per turn.  Any parse or topology error prints `ERROR: <message>`
//! instead, with no move lines.
//!
//! ```text
//! lem-in maps/diamond.map
//! lem-in maps/hub.map --csv out/ --config solver.json
//! RUST_LOG=lem_sim=debug lem-in maps/hub.map
//! ```

use std::fs;
use std::io::{self, BufWriter};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;

use lem_colony::load_colony;
use lem_core::SolverConfig;
use lem_output::{CsvWriter, MoveLogObserver, MoveWriter, TextWriter};
use lem_sim::SimBuilder;

#[derive(Parser, Debug)]
#[command(name = "lem-in", version, about = "Route an ant colony through its tunnels")]
struct Cli {
    /// Colony map file.
    map: PathBuf,

    /// JSON file overriding solver constants (missing keys keep defaults).
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Also write every move to `<DIR>/moves.csv`.
    #[arg(long, value_name = "DIR")]
    csv: Option<PathBuf>,
}

fn main() -> ExitCode {
    init_tracing();
    let cli = Cli::parse();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            // The report goes to stdout, so the error does too.
            println!("ERROR: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .try_init();
}

fn run(cli: &Cli) -> Result<()> {
    let config = match &cli.config {
        Some(path) => load_config(path)?,
        None => SolverConfig::default(),
    };

    let colony = load_colony(&cli.map)?;
    tracing::info!(
        rooms = colony.room_count(),
        tunnels = colony.tunnel_count(),
        ants = colony.ant_count(),
        "colony loaded"
    );
    let mut sim = SimBuilder::new(&colony).config(config).build()?;

    // Nothing reaches stdout until the colony is known to be routable.
    let stdout = BufWriter::new(io::stdout().lock());
    let mut writers: Vec<Box<dyn MoveWriter>> = vec![Box::new(TextWriter::new(stdout))];
    if let Some(dir) = &cli.csv {
        fs::create_dir_all(dir).with_context(|| format!("creating {}", dir.display()))?;
        writers.push(Box::new(CsvWriter::new(dir)?));
    }
    writers.write_input(colony.input())?;

    let mut observer = MoveLogObserver::new(writers);
    let log = sim.run(&mut observer);
    if let Some(e) = observer.take_error() {
        return Err(e).context("writing move report");
    }

    tracing::info!(turns = log.len(), moves = log.move_count(), "report written");
    Ok(())
}

fn load_config(path: &Path) -> Result<SolverConfig> {
    let text = fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
    let config: SolverConfig =
        serde_json::from_str(&text).with_context(|| format!("parsing {}", path.display()))?;
    config.validate()?;
    Ok(config)
}
