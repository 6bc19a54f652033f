//! Plum-blossom (梅花易数) divination for Guaxiang.
//!
//! A reading is cast from three inputs: the time of the question, a short
//! description of an object the asker observed, and the question's category.
//! The object names the upper trigram, the two-hour period names the lower
//! one, and their sum with the hour picks the moving line. Everything here is
//! deterministic: the same inputs always give the same reading.
//!
//! [`compute`] is the pure engine. [`divine`] bundles it with an almanac
//! query, the Xiao Liu Ren palace cast and mantra guidance.
//! [`DivinationSession`] wraps that in a line-oriented command interpreter
//! with a guard against asking the same question twice.

pub mod classifier;
pub mod config;
pub mod context;
pub mod engine;
pub mod error;
pub mod fortune;
pub mod guard;
pub mod guidance;
pub mod narrative;
pub mod reading;
pub mod session;
pub mod xiaoliuren;

pub use classifier::{Classification, classify};
pub use config::SessionConfig;
pub use context::{DivinationContext, QuestionType};
pub use engine::{LineChange, MovingLine, PredictionResult, compute};
pub use error::{OracleError, OracleResult};
pub use fortune::Fortune;
pub use guard::QuestionGuard;
pub use guidance::{Guidance, Mantra};
pub use narrative::{Analysis, ChangedAnalysis, HexagramAnalysis};
pub use reading::{Reading, divine};
pub use session::{DivinationSession, HistoryEntry, Question};
pub use xiaoliuren::Palace;
