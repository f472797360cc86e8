use anyhow::Result;

use gridpuzzle::collections::Grid;
use gridpuzzle::input::{ReaderKeys, ScriptedKeys};
use gridpuzzle::prompt::{PromptLoop, PuzzleParams, PROMPT, REPROMPT};
use gridpuzzle::puzzle::{is_partial_latin, score, RandomPuzzleSource, Value};

#[test]
fn seeded_puzzles_from_scripted_keys() -> Result<()> {
    let mut prompt = PromptLoop::new(
        ScriptedKeys::new("yyn".chars()),
        RandomPuzzleSource::seeded(2024),
        Vec::new(),
        PuzzleParams::default(),
    );
    let session = prompt.run()?;
    assert_eq!(2, session.puzzles);

    let out = String::from_utf8(prompt.into_output())?;
    assert!(out.starts_with(&format!("{}\n\n", PROMPT)));
    let grids = parse_grids(&out)?;
    assert_eq!(2, grids.len());
    for grid in &grids {
        assert_eq!(5, grid.row_count());
        assert_eq!(5, grid.col_count());
        assert_eq!(40, score(grid));
        assert!(is_partial_latin(grid, 5));
    }
    Ok(())
}

#[test]
fn same_seed_same_output() -> Result<()> {
    let render = || -> Result<String> {
        let mut prompt = PromptLoop::new(
            ReaderKeys::new(&b"y\ny\ny\nn\n"[..]),
            RandomPuzzleSource::seeded(7),
            Vec::new(),
            PuzzleParams {
                rows: 4,
                cols: 6,
                score: None,
            },
        );
        prompt.run()?;
        Ok(String::from_utf8(prompt.into_output())?)
    };
    let out = render()?;
    assert_eq!(out, render()?);
    let grids = parse_grids(&out)?;
    assert_eq!(3, grids.len());
    for grid in &grids {
        assert_eq!(4, grid.row_count());
        assert_eq!(6, grid.col_count());
        assert!(is_partial_latin(grid, 6));
    }
    Ok(())
}

/// Collects each run of tab-prefixed lines into a grid
fn parse_grids(out: &str) -> Result<Vec<Grid<Value>>> {
    let mut grids = Vec::new();
    for block in out.split(REPROMPT) {
        let rows = block
            .lines()
            .filter(|line| line.starts_with('\t'))
            .map(|line| {
                line[1..]
                    .split('\t')
                    .map(str::parse::<Value>)
                    .collect::<Result<Vec<_>, _>>()
            })
            .collect::<Result<Vec<_>, _>>()?;
        if !rows.is_empty() {
            grids.push(Grid::from_rows(rows)?);
        }
    }
    Ok(grids)
}
