//! Advertising brief intake: field extraction from document text and the
//! go/no-go decision rules applied to the extracted briefing.

pub mod config;
pub mod error;
pub mod telemetry;
pub mod workflows;

pub use error::AppError;
pub use workflows::analysis::{AnalysisError, BriefingAnalysis, BriefingAnalyzer};
