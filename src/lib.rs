//! Generate numeric grid puzzles and print them at an interactive prompt

#![warn(rust_2018_idioms)]
#![warn(trivial_casts)]
#![warn(trivial_numeric_casts)]
#![warn(unused_qualifications)]

#[macro_use]
extern crate log;

pub mod collections;
pub mod input;
pub mod print;
pub mod prompt;
pub mod puzzle;
