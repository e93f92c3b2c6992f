//! Main CLI commands enum

use clap::Subcommand;

pub mod suite;
pub mod transfer;

pub use suite::*;
pub use transfer::*;

/// Top-level gradecase commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Create a new suite file with blank tests
    Init(InitArgs),

    /// List tests with their weights
    List,

    /// Show a single test in full
    Show(IdArgs),

    /// Add a test and recalculate weights from difficulty
    Add(AddArgs),

    /// Remove a test, renumber the rest and recalculate weights
    Remove(IdArgs),

    /// Set a test's difficulty (1-5) and recalculate weights
    Difficulty(DifficultyArgs),

    /// Set a test's weight by hand and redistribute the others
    Weight(WeightArgs),

    /// Edit a test's input, output or explanation
    Edit(EditArgs),

    /// Re-derive every weight from difficulty
    Recalc,

    /// Write the suite in the grading backend's wire format
    Export(ExportArgs),

    /// Import tests from a wire payload or AI generator output
    Import(ImportArgs),
}
