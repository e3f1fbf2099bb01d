//! 답안 제출 채점
//!
//! 퀴즈 정답표와 사용자 제출 답안을 받아 정답 수, 백분율 점수, 오답 목록을 계산합니다.
//! 저장/인증/HTTP는 다루지 않으며 정답 판정은 [`crate::grading`]에 위임합니다.

mod answer_key;
mod error;
mod report;

pub use answer_key::{AnswerKey, QuizItem};
pub use error::ScoreError;
pub use report::{grade_submission, score_percentage, IncorrectItem, ScoreReport, Submission};
