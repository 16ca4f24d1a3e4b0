//! Request handlers that score generated LLM responses.
//!
//! The same evaluation contract is exposed twice: as an axum route
//! (`POST /evaluate`, see [`api`]) and as a serverless function handler
//! returning a status/headers/body envelope (see [`function`]). Scores come
//! from an [`Evaluator`]; the default [`FixedScoreEvaluator`] returns
//! placeholder values.
//!
//! ```no_run
//! # async fn run() -> Result<(), llm_eval::error::EvalError> {
//! use llm_eval::api::{Server, ServerConfig};
//!
//! Server::new(ServerConfig::default()).run().await
//! # }
//! ```

#[cfg(feature = "api")]
pub mod api;
pub mod error;
pub mod evaluation;
pub mod evaluator;
pub mod function;
pub mod grading;

pub use error::EvalError;
pub use evaluation::{EvaluationRequest, EvaluationResult};
pub use evaluator::{Evaluator, FixedScoreEvaluator, TestCase};
