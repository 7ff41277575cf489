mod runner;

pub use crate::runner::{Report, Runner, Settings};
