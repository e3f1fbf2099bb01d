//! 주관식 답안 채점 엔진
//!
//! 사용자가 입력한 자유 텍스트 답이 저장된 정답과 일치하는지 판정합니다.
//! 정규화(NFKC, 케이스 폴딩, 공백 정리), 복수 정답 분리, 숫자 오차 허용,
//! 순서 무관 토큰 비교, 길이별 임계값 유사도 비교를 하나의 판정으로 묶습니다.
//!
//! 모든 함수는 입력만으로 결과가 정해지는 순수 함수이며 상태를 가지지 않습니다.
//!
//! # 사용 예시
//!
//! ```
//! use quiz_grading::grading::{is_answer_accepted, split_candidates};
//!
//! assert_eq!(split_candidates("Array / 배열"), vec!["array", "배열"]);
//! assert!(is_answer_accepted("Ａｒｒａｙ", "Array/배열"));
//! assert!(is_answer_accepted("http client", "client http"));
//! assert!(is_answer_accepted("3.14", "3.145"));
//! ```

mod matcher;
mod normalize;
mod number;
mod similarity;
mod unicode;

// 공개 인터페이스
pub use matcher::{
    evaluate_answer, is_answer_accepted, match_candidate, matches, AnswerEvaluation,
    CandidateMatch, MatchKind, NUMBER_TOLERANCE,
};
pub use normalize::{normalize, split_candidates, CANDIDATE_SEPARATOR};
pub use number::extract_single_number;
pub use similarity::{ascii_word_guard, similarity_ratio, similarity_threshold};
pub use unicode::{compact, is_complete_hangul, is_word_char, tokenize};
