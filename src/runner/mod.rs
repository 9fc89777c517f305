//! External OCR command invocation (e.g. `ocropus-rpred`, `ocropus-gpageseg`).

pub mod cmd;

pub use cmd::Cmd;
