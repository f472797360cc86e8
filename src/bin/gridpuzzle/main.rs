#![warn(rust_2018_idioms)]
#![warn(trivial_casts)]
#![warn(trivial_numeric_casts)]
#![warn(unused_qualifications)]

use std::io;

use anyhow::Result;
use gridpuzzle::input::StdinKeys;
use gridpuzzle::prompt::{PromptLoop, PuzzleParams, Session};
use gridpuzzle::puzzle::{PuzzleSource, RandomPuzzleSource};
use log::info;

use crate::options::Options;

mod options;

fn main() -> Result<()> {
    env_logger::init();
    let options = Options::from_args()?;
    info!("{:?}", options);
    let session = match options.seed() {
        Some(seed) => run(RandomPuzzleSource::seeded(seed), options.params())?,
        None => run(RandomPuzzleSource::new(), options.params())?,
    };
    info!("printed {} puzzle(s)", session.puzzles);
    Ok(())
}

fn run(source: impl PuzzleSource, params: PuzzleParams) -> Result<Session> {
    let stdout = io::stdout();
    let mut prompt = PromptLoop::new(StdinKeys::new(), source, stdout.lock(), params);
    let session = prompt.run()?;
    Ok(session)
}
