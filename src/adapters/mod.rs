// Adapters layer: concrete implementations of the domain ports.

pub mod recorder;

pub use recorder::{JsonLinesRecorder, TracingRecorder};
