//! gradecase core library
//!
//! Weight allocation engine, test-case store and backend wire format for
//! authoring graded test suites.

pub mod config;
pub mod error;
pub mod format;
pub mod generate;
pub mod logging;
pub mod store;
pub mod suite;
pub mod test_case;
pub mod weights;
pub mod wire;
