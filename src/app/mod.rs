pub mod output;

pub use output::{render, OutputFormat};
