//! # dx-viz
//!
//! Presentation-side data for discretia.
//!
//! This crate is intentionally dependency-light and focuses on emitting
//! plot-friendly JSON structures (arrays instead of nested objects), the
//! explanation text shown next to each chart, and the static quiz bank.

#![warn(missing_docs)]
#![warn(clippy::all)]

/// Bar chart artifacts.
pub mod chart;

/// Human-readable analysis sentences.
pub mod explain;

/// Static multiple-choice quiz bank.
pub mod quiz;

/// Parameter-change driver.
pub mod session;

/// [`dx_core::RenderTarget`] sinks.
pub mod targets;

pub use chart::{BarChartArtifact, BAR_SCHEMA_VERSION};
pub use quiz::{check_answer, Question, Quiz, QuizOutcome, QUIZZES};
pub use session::{ParameterChange, Session, SliderState};
pub use targets::{FrameRecorder, JsonLinesTarget};
