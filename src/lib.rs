// Opt in to warnings about new 2018 idioms
#![warn(rust_2018_idioms)]
// Additional warnings that are allow by default (`rustc -W help`)
#![warn(missing_copy_implementations)]
#![warn(missing_debug_implementations)]
#![warn(trivial_casts)]
#![warn(trivial_numeric_casts)]
#![warn(unreachable_pub)]
#![warn(unused)]
// Clippy
#![allow(unknown_lints)] // necessary because rustc doesn't know about clippy
#![warn(clippy::all)]

#[macro_use]
extern crate log;
#[macro_use]
extern crate prettytable;

pub mod config;
pub mod data;
pub mod moves;
pub mod parser;
pub mod puzzle;
pub mod solution_formatter;
pub mod solver;
pub mod state;

mod fs;
mod vec2d;

use std::error::Error;

use crate::config::SearchConfig;
use crate::puzzle::Puzzle;
use crate::solver::SolverOk;

pub trait LoadPuzzle {
    fn load_puzzle(&self) -> Result<Puzzle, Box<dyn Error>>;
}

pub trait Solve {
    fn solve(&self, config: SearchConfig, print_status: bool) -> SolverOk;
}
