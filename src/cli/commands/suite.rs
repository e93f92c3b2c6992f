//! Suite editing command argument structures

use clap::Args;

use crate::cli::parse::parse_difficulty;

/// A test selected by id.
#[derive(Args, Debug)]
pub struct IdArgs {
    /// Test id (1-based)
    pub id: u32,
}

/// Arguments for the add command.
#[derive(Args, Debug)]
pub struct AddArgs {
    /// Program input (stdin)
    #[arg(long, short, default_value = "")]
    pub input: String,

    /// Expected program output (stdout)
    #[arg(long, short, default_value = "")]
    pub output: String,

    /// What the test checks
    #[arg(long, short, default_value = "")]
    pub explanation: String,

    /// Difficulty (1-5)
    #[arg(long, short, default_value = "3", value_parser = parse_difficulty)]
    pub difficulty: u8,
}

/// Arguments for the difficulty command.
#[derive(Args, Debug)]
pub struct DifficultyArgs {
    /// Test id (1-based)
    pub id: u32,

    /// New difficulty (1-5)
    #[arg(value_parser = parse_difficulty)]
    pub level: u8,
}

/// Arguments for the weight command.
#[derive(Args, Debug)]
pub struct WeightArgs {
    /// Test id (1-based)
    pub id: u32,

    /// New weight; clamped to 0-100
    #[arg(allow_negative_numbers = true)]
    pub value: i64,
}

/// Arguments for the edit command.
#[derive(Args, Debug)]
pub struct EditArgs {
    /// Test id (1-based)
    pub id: u32,

    /// Replace the program input
    #[arg(long, short)]
    pub input: Option<String>,

    /// Replace the expected output
    #[arg(long, short)]
    pub output: Option<String>,

    /// Replace the explanation
    #[arg(long, short)]
    pub explanation: Option<String>,
}
