//! 정답 판정
//!
//! 단일 정답 비교는 아래 순서로 진행하며, 먼저 결론이 나는 규칙이 판정을 결정합니다:
//! 1. 완전 일치
//! 2. 축약형 일치 (어느 한쪽 축약형이 비면 즉시 거부)
//! 3. 숫자 오차 비교 (양쪽 모두 숫자 하나일 때, 결과와 무관하게 여기서 종료)
//! 4. 토큰 일치 (순서 무관)
//! 5. 길이별 임계값 기반 유사도 비교 (+ 짧은 영문 단어 오탐 방지)

use serde::{Deserialize, Serialize};

use super::normalize::{normalize, split_candidates};
use super::number::extract_single_number;
use super::similarity::{ascii_word_guard, similarity_ratio, similarity_threshold};
use super::unicode::{compact, is_ascii_word, tokenize};

/// 숫자형 답안 허용 오차
pub const NUMBER_TOLERANCE: f64 = 0.01;

/// 정답으로 인정된 근거
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchKind {
    Exact,
    Compact,
    Number,
    Token,
    Similarity,
    None,
}

impl MatchKind {
    /// 여러 후보가 인정됐을 때 대표 근거를 고르는 우선순위
    pub fn priority(self) -> u8 {
        match self {
            MatchKind::Exact => 5,
            MatchKind::Compact | MatchKind::Number | MatchKind::Token => 4,
            MatchKind::Similarity => 3,
            MatchKind::None => 0,
        }
    }

    pub fn is_accepted(self) -> bool {
        self != MatchKind::None
    }
}

/// 정답 후보 하나에 대한 비교 결과
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CandidateMatch {
    /// 정규화된 정답 후보
    pub candidate: String,
    pub kind: MatchKind,
    /// 유사도 (0.0 ~ 1.0)
    pub similarity: f64,
    /// 적용된 임계값 (임계값 없이 결정된 경우 None)
    pub threshold: Option<f64>,
}

impl CandidateMatch {
    fn new(candidate: &str, kind: MatchKind, similarity: f64, threshold: Option<f64>) -> Self {
        Self {
            candidate: candidate.to_string(),
            kind,
            similarity,
            threshold,
        }
    }

    fn rejected(candidate: &str) -> Self {
        Self::new(candidate, MatchKind::None, 0.0, None)
    }

    pub fn is_accepted(&self) -> bool {
        self.kind.is_accepted()
    }
}

/// 정규화된 사용자 답과 정규화된 정답 후보 하나를 비교
pub fn match_candidate(user: &str, candidate: &str) -> CandidateMatch {
    if user == candidate {
        return CandidateMatch::new(candidate, MatchKind::Exact, 1.0, Some(1.0));
    }

    let user_compact = compact(user);
    let candidate_compact = compact(candidate);
    if user_compact.is_empty() || candidate_compact.is_empty() {
        return CandidateMatch::rejected(candidate);
    }

    if user_compact == candidate_compact {
        return CandidateMatch::new(candidate, MatchKind::Compact, 1.0, Some(1.0));
    }

    // 축약형은 소수점과 부호를 지우므로 정규화 문자열에서 숫자를 추출
    if let (Some(user_number), Some(candidate_number)) =
        (extract_single_number(user), extract_single_number(candidate))
    {
        if (user_number - candidate_number).abs() <= NUMBER_TOLERANCE {
            return CandidateMatch::new(candidate, MatchKind::Number, 1.0, None);
        }
        return CandidateMatch::rejected(candidate);
    }

    let mut user_tokens = tokenize(user);
    let mut candidate_tokens = tokenize(candidate);
    user_tokens.sort_unstable();
    candidate_tokens.sort_unstable();
    if !user_tokens.is_empty() && user_tokens == candidate_tokens {
        return CandidateMatch::new(candidate, MatchKind::Token, 1.0, None);
    }

    let similarity = similarity_ratio(&user_compact, &candidate_compact);
    let threshold = similarity_threshold(
        user_compact.chars().count().max(candidate_compact.chars().count()),
    );
    if similarity < threshold {
        return CandidateMatch::new(candidate, MatchKind::None, similarity, Some(threshold));
    }

    if is_ascii_word(&user_compact)
        && is_ascii_word(&candidate_compact)
        && !ascii_word_guard(&user_compact, &candidate_compact)
    {
        return CandidateMatch::new(candidate, MatchKind::None, similarity, Some(threshold));
    }

    CandidateMatch::new(candidate, MatchKind::Similarity, similarity, Some(threshold))
}

/// 정규화된 사용자 답이 정규화된 정답 후보와 일치하는지 판정
pub fn matches(user: &str, candidate: &str) -> bool {
    match_candidate(user, candidate).is_accepted()
}

/// 허용 오차를 반영한 정답 판정
///
/// 정답 컬럼은 `/`로 여러 정답을 나열할 수 있으며, 하나라도 일치하면 정답입니다.
/// 정규화 후 빈 답은 항상 오답입니다.
///
/// # Examples
/// ```
/// use quiz_grading::is_answer_accepted;
///
/// assert!(is_answer_accepted("ARRAY", "Array/배열"));
/// assert!(is_answer_accepted("배열", "Array/배열"));
/// assert!(is_answer_accepted("recieve", "receive"));
/// assert!(!is_answer_accepted("cat", "cut"));
/// assert!(!is_answer_accepted("3.14", "3.20"));
/// assert!(!is_answer_accepted("   ", "   "));
/// ```
pub fn is_answer_accepted(user_answer: &str, answer_field: &str) -> bool {
    let user = normalize(user_answer);
    if user.is_empty() {
        return false;
    }

    split_candidates(answer_field).iter().any(|candidate| {
        let result = match_candidate(&user, candidate);
        log::debug!("채점: '{}' vs '{}' -> {:?}", user, candidate, result.kind);
        result.is_accepted()
    })
}

/// 채점 근거를 포함한 판정 결과
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnswerEvaluation {
    pub accepted: bool,
    /// 사용자가 입력한 원본 답
    pub user_answer: String,
    pub normalized_user_answer: String,
    /// 대표 근거가 된 정답 후보 (후보가 없으면 빈 문자열)
    pub matched_answer: String,
    pub match_kind: MatchKind,
    pub similarity: f64,
    pub threshold: Option<f64>,
    /// 화면 표시용 판정 기준
    pub criteria_label: String,
    /// 완전 일치가 아닌 허용 규칙으로 인정됐는지
    pub used_tolerance: bool,
}

/// 판정 근거 표시 문구
fn criteria_label(kind: MatchKind, threshold: Option<f64>) -> String {
    match kind {
        MatchKind::Exact => "완전 일치".to_string(),
        MatchKind::Compact => "공백/기호 무시 일치".to_string(),
        MatchKind::Number => format!("숫자 오차 ±{}", NUMBER_TOLERANCE),
        MatchKind::Token => "토큰 단위 일치".to_string(),
        MatchKind::Similarity => {
            format!("유사도 {}% 이상", (threshold.unwrap_or(0.0) * 100.0).round())
        }
        MatchKind::None => "정답 기준 미충족".to_string(),
    }
}

/// 후보별 결과 중 대표 결과 선택
///
/// 인정된 후보가 있으면 우선순위, 유사도 순으로 고르고,
/// 없으면 유사도가 가장 높은 후보를 고릅니다. 동점이면 앞선 후보가 남습니다.
fn pick_best(results: Vec<CandidateMatch>) -> Option<CandidateMatch> {
    let any_accepted = results.iter().any(CandidateMatch::is_accepted);

    let mut best: Option<CandidateMatch> = None;
    for current in results {
        if any_accepted && !current.is_accepted() {
            continue;
        }
        let replace = match &best {
            None => true,
            Some(best) => {
                let priority = (current.kind.priority(), best.kind.priority());
                priority.0 > priority.1
                    || (priority.0 == priority.1 && current.similarity > best.similarity)
            }
        };
        if replace {
            best = Some(current);
        }
    }
    best
}

/// 판정 결과와 그 근거를 함께 반환
///
/// `accepted`는 항상 [`is_answer_accepted`]와 같습니다.
///
/// # Examples
/// ```
/// use quiz_grading::{evaluate_answer, MatchKind};
///
/// let evaluation = evaluate_answer("fast api", "FastAPI");
/// assert!(evaluation.accepted);
/// assert_eq!(evaluation.match_kind, MatchKind::Compact);
/// assert!(evaluation.used_tolerance);
/// ```
pub fn evaluate_answer(user_answer: &str, answer_field: &str) -> AnswerEvaluation {
    let user = normalize(user_answer);
    if user.is_empty() {
        return AnswerEvaluation {
            accepted: false,
            user_answer: user_answer.to_string(),
            normalized_user_answer: String::new(),
            matched_answer: String::new(),
            match_kind: MatchKind::None,
            similarity: 0.0,
            threshold: None,
            criteria_label: "미입력".to_string(),
            used_tolerance: false,
        };
    }

    let candidate_matches: Vec<CandidateMatch> = split_candidates(answer_field)
        .iter()
        .map(|candidate| match_candidate(&user, candidate))
        .collect();
    let best = pick_best(candidate_matches)
        .unwrap_or_else(|| CandidateMatch::rejected(""));

    log::debug!(
        "채점: '{}' vs '{}' -> {:?} (유사도 {:.3})",
        user,
        best.candidate,
        best.kind,
        best.similarity
    );

    AnswerEvaluation {
        accepted: best.is_accepted(),
        user_answer: user_answer.to_string(),
        normalized_user_answer: user,
        criteria_label: criteria_label(best.kind, best.threshold),
        used_tolerance: best.is_accepted() && best.kind != MatchKind::Exact,
        match_kind: best.kind,
        similarity: best.similarity,
        threshold: best.threshold,
        matched_answer: best.candidate,
    }
}
