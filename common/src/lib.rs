//! Resume Shortlist Common Library
//!
//! CLIとWeb(WASM)で共有される型とユーティリティ

pub mod types;
pub mod error;
pub mod selection;
pub mod screen;
pub mod endpoint;
pub mod render;
pub mod analysis;

pub use types::{AnalysisResult, Candidate};
pub use error::AnalysisError;
pub use selection::{is_accepted, FileSelection, NamedFile, SelectedFile, PDF_MIME};
pub use screen::{Screen, ViewState};
pub use endpoint::{resolve_job_role, Endpoint, DEFAULT_BASE_URL, DEFAULT_JOB_ROLE, FILES_FIELD};
pub use render::{percent, CandidateRow, ResultsView, TOP_COUNT_CAP};
pub use analysis::{
    interpret_reply, run_analysis, AnalyzeOutcome, BusyGuard, BusyIndicator, HttpReply, Transport,
};
