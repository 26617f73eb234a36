//! Summarization pipeline
//!
//! [`runner::Pipeline`] wires the stages together; [`observer`] provides
//! stage-boundary hooks.

pub mod observer;
pub mod runner;
