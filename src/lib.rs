pub mod config;
pub mod grading;
pub mod scoring;

pub use grading::{
    evaluate_answer, is_answer_accepted, normalize, split_candidates, AnswerEvaluation, MatchKind,
};
pub use scoring::{grade_submission, AnswerKey, ScoreReport, Submission};
