pub mod cli;
pub mod error;
pub mod parse;
pub mod pipeline;
pub mod report;
pub mod validate;
pub mod wasm;
