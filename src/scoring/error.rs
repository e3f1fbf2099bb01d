//! 채점/정답표 로드 에러

/// 정답표 로드 및 제출 채점 에러
#[derive(Debug)]
pub enum ScoreError {
    /// 파일 읽기 실패
    IoError(std::io::Error),
    /// JSON 파싱 실패
    ParseError(String),
    /// 정답표 형식 오류
    FormatError(String),
    /// 자체 보고한 정답 수/문항 수가 모순됨
    InvalidCounts(String),
}

impl std::fmt::Display for ScoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ScoreError::IoError(e) => write!(f, "파일 읽기 오류: {}", e),
            ScoreError::ParseError(s) => write!(f, "JSON 파싱 오류: {}", s),
            ScoreError::FormatError(s) => write!(f, "정답표 형식 오류: {}", s),
            ScoreError::InvalidCounts(s) => write!(f, "점수 집계 오류: {}", s),
        }
    }
}

impl std::error::Error for ScoreError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ScoreError::IoError(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for ScoreError {
    fn from(e: std::io::Error) -> Self {
        ScoreError::IoError(e)
    }
}

impl From<serde_json::Error> for ScoreError {
    fn from(e: serde_json::Error) -> Self {
        ScoreError::ParseError(e.to_string())
    }
}
