use std::{error, fmt::Display, path::PathBuf};

use clap::Parser;

pub mod asteroid;

#[derive(Debug)]
pub enum Error {
    InconsistentRow(usize, usize),
    InvalidChar(usize, usize, char),
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::InconsistentRow(expect_col_n, this_col_n) => write!(
                f,
                "Expect {} character(s) in one row, given {}.",
                expect_col_n, this_col_n
            ),
            Error::InvalidChar(r_ind, c_ind, c) => write!(
                f,
                "Invalid character({}) found in given map, at position(x = {}, y = {}).",
                c, r_ind, c_ind
            ),
        }
    }
}

impl error::Error for Error {}

#[derive(Debug, Parser)]
pub struct CLIArgs {
    pub input_path: PathBuf,
}
