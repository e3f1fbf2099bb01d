//! 답안 제출 채점 및 결과 리포트

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Deserializer, Serialize};

use super::answer_key::AnswerKey;
use super::error::ScoreError;
use crate::config::GraderConfig;
use crate::grading::is_answer_accepted;

fn default_total() -> u32 {
    10
}

/// 앞뒤 공백 제거 후 빈 카테고리는 None
fn deserialize_category<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value: Option<String> = Option::deserialize(deserializer)?;
    Ok(value
        .map(|c| c.trim().to_string())
        .filter(|c| !c.is_empty()))
}

/// 빈 퀴즈 ID 제거, null 답은 빈 문자열
fn deserialize_user_answers<'de, D>(deserializer: D) -> Result<BTreeMap<String, String>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<BTreeMap<String, Option<String>>> = Option::deserialize(deserializer)?;
    Ok(raw
        .unwrap_or_default()
        .into_iter()
        .filter_map(|(quiz_id, answer)| {
            let quiz_id = quiz_id.trim().to_string();
            if quiz_id.is_empty() {
                None
            } else {
                Some((quiz_id, answer.unwrap_or_default()))
            }
        })
        .collect())
}

/// 사용자 답안 제출
///
/// `user_answers`가 비어 있으면 `correct`/`total`을 그대로 사용합니다.
#[derive(Deserialize, Clone, Debug, PartialEq)]
pub struct Submission {
    #[serde(default, deserialize_with = "deserialize_category")]
    pub category: Option<String>,
    #[serde(default)]
    pub correct: u32,
    #[serde(default = "default_total")]
    pub total: u32,
    /// 퀴즈 ID -> 사용자 답
    #[serde(default, deserialize_with = "deserialize_user_answers")]
    pub user_answers: BTreeMap<String, String>,
}

impl Submission {
    /// 퀴즈 ID와 답 목록으로 제출 생성
    pub fn with_answers<I, K, V>(answers: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            category: None,
            correct: 0,
            total: default_total(),
            user_answers: answers
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }

    pub fn from_json(json_str: &str) -> Result<Self, ScoreError> {
        Ok(serde_json::from_str(json_str)?)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ScoreError> {
        let content = fs::read_to_string(path)?;
        Self::from_json(&content)
    }
}

/// 오답 문항
#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct IncorrectItem {
    pub quiz_id: String,
    pub question: String,
    pub user_answer: String,
    /// 저장된 정답 컬럼 원문
    pub correct_answer: String,
}

/// 채점 결과
#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct ScoreReport {
    pub category: Option<String>,
    /// 백분율 점수 (0.0 ~ 100.0)
    pub score: f64,
    pub correct: u32,
    pub total: u32,
    pub incorrect_items: Vec<IncorrectItem>,
}

/// 정답 수/문항 수로 백분율 점수 계산 (문항 수 0이면 0.0)
pub fn score_percentage(correct: u32, total: u32) -> f64 {
    if total == 0 {
        return 0.0;
    }
    correct as f64 / total as f64 * 100.0
}

/// 자체 보고된 정답 수/문항 수 검증
fn validate_counts(correct: u32, total: u32) -> Result<(), ScoreError> {
    if total == 0 && correct > 0 {
        return Err(ScoreError::InvalidCounts(
            "total이 0이면 correct는 0이어야 합니다".into(),
        ));
    }
    if correct > total {
        return Err(ScoreError::InvalidCounts(format!(
            "correct({})는 total({})보다 클 수 없습니다",
            correct, total
        )));
    }
    Ok(())
}

/// 제출된 답안을 정답표로 채점
///
/// 정답표에 없는 퀴즈 ID는 건너뛰며 문항 수에도 포함하지 않습니다.
///
/// # Examples
/// ```
/// use quiz_grading::config::GraderConfig;
/// use quiz_grading::scoring::{grade_submission, AnswerKey, QuizItem, Submission};
///
/// let key = AnswerKey::from_items(vec![QuizItem {
///     id: "q1".into(),
///     question: "순서가 있는 자료구조는?".into(),
///     answer: "Array/배열".into(),
///     explanation: String::new(),
///     category: String::new(),
/// }])
/// .unwrap();
///
/// let submission = Submission::with_answers([("q1", "배열")]);
/// let report = grade_submission(&key, &submission, &GraderConfig::default()).unwrap();
/// assert_eq!(report.correct, 1);
/// assert_eq!(report.score, 100.0);
/// ```
pub fn grade_submission(
    key: &AnswerKey,
    submission: &Submission,
    config: &GraderConfig,
) -> Result<ScoreReport, ScoreError> {
    let mut correct = submission.correct;
    let mut total = submission.total;
    let mut incorrect_items = Vec::new();

    if submission.user_answers.is_empty() {
        validate_counts(correct, total)?;
    } else {
        correct = 0;
        total = 0;

        for (quiz_id, answer) in &submission.user_answers {
            let Some(quiz) = key.get(quiz_id) else {
                log::debug!("정답표에 없는 퀴즈 ID 무시: {}", quiz_id);
                continue;
            };

            total += 1;
            if is_answer_accepted(answer, &quiz.answer) {
                correct += 1;
                continue;
            }

            let user_answer = if answer.trim().is_empty() {
                config.unanswered_label.clone()
            } else {
                answer.clone()
            };
            incorrect_items.push(IncorrectItem {
                quiz_id: quiz_id.clone(),
                question: quiz.question.clone(),
                user_answer,
                correct_answer: quiz.answer.clone(),
            });
        }
    }

    let score = score_percentage(correct, total);
    log::info!("채점 완료: {}/{} ({:.1}점)", correct, total, score);

    Ok(ScoreReport {
        category: submission.category.clone(),
        score,
        correct,
        total,
        incorrect_items,
    })
}
