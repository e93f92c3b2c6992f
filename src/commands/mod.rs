//! CLI commands for gradecase

pub mod add;
pub mod difficulty;
pub mod dispatch;
pub mod edit;
pub mod export;
pub mod import;
pub mod init;
pub mod list;
pub mod recalc;
pub mod remove;
pub mod render;
pub mod show;
pub mod weight;
