//! Testing infrastructure for scout integration tests.
//!
//! - `TestWorld`: temp home directory with project trees and a matching config
//! - `assertions`: checks over discovered project lists and CLI JSON output

pub mod assertions;
pub mod world;

pub use world::TestWorld;
