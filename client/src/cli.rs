use std::{
    fs,
    io::{self, BufWriter},
    path::PathBuf,
};

use anyhow::{bail, Context};
use libgame::{codec, Game};
use tracing::info;

use crate::{config::Config, output::GenerationPrinter};

pub const USAGE: &str = "Usage: client <board-file> [generations|-] [config.json]";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Args {
    pub board_path: PathBuf,

    /// Overrides the configured generation count when given.
    pub generations: Option<usize>,

    pub config_path: Option<PathBuf>,
}

pub fn parse_args<I>(mut args: I) -> anyhow::Result<Args>
where
    I: Iterator<Item = String>,
{
    let board_path = PathBuf::from(args.next().context(USAGE)?);

    let generations = match args.next().as_deref() {
        None | Some("-") => None,
        Some(generations) => Some(
            generations
                .parse::<usize>()
                .with_context(|| format!("Invalid generation count {generations:?}"))?,
        ),
    };

    let config_path = args.next().map(PathBuf::from);

    if let Some(extra) = args.next() {
        bail!("Unexpected argument {extra:?}\n{USAGE}");
    }

    Ok(Args {
        board_path,
        generations,
        config_path,
    })
}

pub fn load_config(args: &Args) -> anyhow::Result<Config> {
    match &args.config_path {
        Some(config_path) => Config::load(config_path)
            .with_context(|| format!("Couldn't load config {}", config_path.display())),
        None => Ok(Config::default()),
    }
}

pub fn run(args: Args, config: Config) -> anyhow::Result<()> {
    let board_text = fs::read_to_string(&args.board_path)
        .with_context(|| format!("Couldn't read board file {}", args.board_path.display()))?;

    let board = codec::decode_text(&board_text)
        .with_context(|| format!("Couldn't decode board file {}", args.board_path.display()))?;

    let generations = args.generations.unwrap_or(config.generations);
    info!(
        width = board.width,
        height = board.height,
        generations,
        "starting simulation"
    );

    let mut game = Game::new(board, config.rule.clone());

    let stdout = BufWriter::new(io::stdout().lock());
    let mut printer = GenerationPrinter::new(stdout, &config);

    game.try_run(generations, |generation, board| printer.print(generation, board))?;
    printer.finish()?;

    info!(generation = game.generation(), "simulation finished");
    Ok(())
}
