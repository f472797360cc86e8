use anyhow::{bail, Context as _, Result};
use clap::ArgMatches;
use gridpuzzle::prompt::PuzzleParams;
use gridpuzzle::puzzle::{max_score, Value, MAX_DIMENSION};

#[derive(Clone, Debug)]
pub(crate) struct Options {
    params: PuzzleParams,
    seed: Option<u64>,
}

impl Options {
    pub fn from_args() -> Result<Self> {
        Self::from_arg_matches(&clap_app().get_matches())
    }

    fn from_arg_matches(matches: &ArgMatches<'_>) -> Result<Self> {
        let defaults = PuzzleParams::default();
        let rows = match matches.value_of("rows") {
            Some(s) => s.parse().with_context(|| format!("invalid rows: {}", s))?,
            None => defaults.rows,
        };
        let cols = match matches.value_of("cols") {
            Some(s) => s.parse().with_context(|| format!("invalid cols: {}", s))?,
            None => defaults.cols,
        };
        let score = if matches.is_present("unscored") {
            None
        } else {
            match matches.value_of("score") {
                Some(s) => Some(
                    s.parse::<Value>()
                        .with_context(|| format!("invalid score: {}", s))?,
                ),
                None => defaults.score,
            }
        };
        let seed = match matches.value_of("seed") {
            Some(s) => Some(
                s.parse::<u64>()
                    .with_context(|| format!("invalid seed: {}", s))?,
            ),
            None => None,
        };
        let params = PuzzleParams { rows, cols, score };
        check_params(&params)?;
        Ok(Self { params, seed })
    }

    pub fn params(&self) -> PuzzleParams {
        self.params
    }

    pub fn seed(&self) -> Option<u64> {
        self.seed
    }
}

fn check_params(params: &PuzzleParams) -> Result<()> {
    let valid = 1..=MAX_DIMENSION;
    if !valid.contains(&params.rows) {
        bail!("rows must be between 1 and {}: {}", MAX_DIMENSION, params.rows);
    }
    if !valid.contains(&params.cols) {
        bail!("cols must be between 1 and {}: {}", MAX_DIMENSION, params.cols);
    }
    if let Some(score) = params.score {
        let max = max_score(params.rows, params.cols);
        if !(0..=max).contains(&score) {
            bail!(
                "score must be between 0 and {} for a {}x{} puzzle: {}",
                max,
                params.rows,
                params.cols,
                score
            );
        }
    }
    Ok(())
}

fn clap_app() -> clap::App<'static, 'static> {
    use clap::{App, Arg};

    App::new("gridpuzzle")
        .about("Generate numeric grid puzzles")
        .arg(
            Arg::with_name("rows")
                .short("r")
                .long("rows")
                .takes_value(true)
                .value_name("ROWS")
                .help("the number of rows in each puzzle [default: 5]"),
        )
        .arg(
            Arg::with_name("cols")
                .short("c")
                .long("cols")
                .takes_value(true)
                .value_name("COLS")
                .help("the number of columns in each puzzle [default: 5]"),
        )
        .arg(
            Arg::with_name("score")
                .short("s")
                .long("score")
                .takes_value(true)
                .value_name("SCORE")
                .help("the sum of the revealed values of each puzzle [default: 40]"),
        )
        .arg(
            Arg::with_name("unscored")
                .long("unscored")
                .conflicts_with("score")
                .help("reveal random cells without a target score"),
        )
        .arg(
            Arg::with_name("seed")
                .long("seed")
                .takes_value(true)
                .value_name("SEED")
                .help("seed the generator to produce the same puzzles on every run"),
        )
}

#[cfg(test)]
mod tests {
    use gridpuzzle::prompt::PuzzleParams;

    use super::{clap_app, Options};

    fn parse(args: &[&str]) -> anyhow::Result<Options> {
        let matches = clap_app().get_matches_from_safe(args)?;
        Options::from_arg_matches(&matches)
    }

    #[test]
    fn defaults() {
        let options = parse(&["gridpuzzle"]).unwrap();
        assert_eq!(PuzzleParams::default(), options.params());
        assert_eq!(None, options.seed());
    }

    #[test]
    fn all_options() {
        let args = ["gridpuzzle", "-r", "3", "-c", "4", "-s", "12", "--seed", "9"];
        let options = parse(&args).unwrap();
        assert_eq!(
            PuzzleParams {
                rows: 3,
                cols: 4,
                score: Some(12)
            },
            options.params()
        );
        assert_eq!(Some(9), options.seed());
    }

    #[test]
    fn unscored() {
        let options = parse(&["gridpuzzle", "--unscored"]).unwrap();
        assert_eq!(None, options.params().score);
    }

    #[test]
    fn unscored_conflicts_with_score() {
        assert!(parse(&["gridpuzzle", "--unscored", "-s", "3"]).is_err());
    }

    #[test]
    fn invalid_number() {
        assert!(parse(&["gridpuzzle", "--rows", "five"]).is_err());
    }

    #[test]
    fn dimensions_out_of_range() {
        assert!(parse(&["gridpuzzle", "-r", "0"]).is_err());
        assert!(parse(&["gridpuzzle", "-c", "10"]).is_err());
        assert!(parse(&["gridpuzzle", "-r", "9", "-c", "9"]).is_ok());
    }

    #[test]
    fn score_out_of_range() {
        assert!(parse(&["gridpuzzle", "--score=-1"]).is_err());
        assert!(parse(&["gridpuzzle", "-s", "1000"]).is_err());
        assert!(parse(&["gridpuzzle", "-s", "76"]).is_err());
        assert!(parse(&["gridpuzzle", "-s", "75"]).is_ok());
        assert!(parse(&["gridpuzzle", "-s", "0"]).is_ok());
    }

    #[test]
    fn unscored_ignores_score_limit() {
        assert!(parse(&["gridpuzzle", "--unscored", "-r", "1", "-c", "1"]).is_ok());
    }
}
