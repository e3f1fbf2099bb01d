//! 퀴즈 정답표
//!
//! JSON 배열 형식의 퀴즈 목록을 로드하여 퀴즈 ID로 조회합니다.

use std::collections::HashMap;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use serde::{Deserialize, Serialize};

use super::error::ScoreError;

/// 퀴즈 한 문항
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct QuizItem {
    pub id: String,
    pub question: String,
    /// 정답 컬럼 (`/`로 복수 정답 구분)
    pub answer: String,
    #[serde(default)]
    pub explanation: String,
    #[serde(default)]
    pub category: String,
}

/// 퀴즈 ID -> 문항 정답표
#[derive(Debug, Clone, Default)]
pub struct AnswerKey {
    quizzes: HashMap<String, QuizItem>,
}

impl AnswerKey {
    /// 문항 목록으로 정답표 생성 (ID 중복 시 형식 오류)
    pub fn from_items<I>(items: I) -> Result<Self, ScoreError>
    where
        I: IntoIterator<Item = QuizItem>,
    {
        let mut quizzes = HashMap::new();
        for mut item in items {
            let id = item.id.trim().to_string();
            if id.is_empty() {
                return Err(ScoreError::FormatError(format!(
                    "빈 퀴즈 ID: '{}'",
                    item.question
                )));
            }
            if quizzes.contains_key(&id) {
                return Err(ScoreError::FormatError(format!("중복된 퀴즈 ID: {}", id)));
            }
            item.id = id.clone();
            quizzes.insert(id, item);
        }
        Ok(Self { quizzes })
    }

    /// JSON 문자열에서 정답표 로드
    ///
    /// # 형식
    /// ```json
    /// [
    ///   { "id": "q1", "question": "순서가 있는 자료구조는?", "answer": "Array/배열" }
    /// ]
    /// ```
    pub fn from_json(json_str: &str) -> Result<Self, ScoreError> {
        let items: Vec<QuizItem> = serde_json::from_str(json_str)?;
        Self::from_items(items)
    }

    /// JSON 파일에서 정답표 로드
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ScoreError> {
        let file = File::open(path)?;
        let items: Vec<QuizItem> = serde_json::from_reader(BufReader::new(file))?;
        Self::from_items(items)
    }

    /// 퀴즈 ID로 문항 조회
    pub fn get(&self, quiz_id: &str) -> Option<&QuizItem> {
        self.quizzes.get(quiz_id)
    }

    pub fn len(&self) -> usize {
        self.quizzes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.quizzes.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_key_json() -> &'static str {
        r#"[
            { "id": "q1", "question": "순서가 있는 자료구조는?", "answer": "Array/배열", "category": "자료구조" },
            { "id": "q2", "question": "원주율 소수 둘째 자리까지", "answer": "3.14", "explanation": "π" }
        ]"#
    }

    #[test]
    fn test_load_from_json() {
        let key = AnswerKey::from_json(sample_key_json()).unwrap();
        assert_eq!(key.len(), 2);

        let q1 = key.get("q1").unwrap();
        assert_eq!(q1.answer, "Array/배열");
        assert_eq!(q1.category, "자료구조");
        assert_eq!(q1.explanation, "");

        assert!(key.get("q3").is_none());
    }

    #[test]
    fn test_duplicate_id() {
        let json = r#"[
            { "id": "q1", "question": "a", "answer": "a" },
            { "id": " q1 ", "question": "b", "answer": "b" }
        ]"#;
        let result = AnswerKey::from_json(json);
        assert!(matches!(result, Err(ScoreError::FormatError(_))));
    }

    #[test]
    fn test_blank_id() {
        let json = r#"[{ "id": "  ", "question": "a", "answer": "a" }]"#;
        assert!(matches!(
            AnswerKey::from_json(json),
            Err(ScoreError::FormatError(_))
        ));
    }

    #[test]
    fn test_parse_error() {
        let result = AnswerKey::from_json(r#"{ "id": "q1" }"#);
        assert!(matches!(result, Err(ScoreError::ParseError(_))));
    }

    #[test]
    fn test_load_missing_file() {
        let result = AnswerKey::load("/nonexistent/quizzes.json");
        assert!(matches!(result, Err(ScoreError::IoError(_))));
    }
}
