//! 채점 도구 설정 파일 로드/저장 (JSON)
//!
//! 채점 임계값은 고정 정책이므로 설정 대상이 아닙니다.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// 채점 도구 설정
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct GraderConfig {
    /// 오답 리포트에서 빈 답 대신 표시할 문구
    #[serde(default = "default_unanswered_label")]
    pub unanswered_label: String,
    /// JSON 출력 들여쓰기 여부
    #[serde(default = "default_pretty_output")]
    pub pretty_output: bool,
    /// 기본 로그 레벨 (RUST_LOG가 우선)
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_unanswered_label() -> String {
    "(미입력)".to_string()
}

fn default_pretty_output() -> bool {
    true
}

fn default_log_level() -> String {
    "warn".to_string()
}

impl Default for GraderConfig {
    fn default() -> Self {
        Self {
            unanswered_label: default_unanswered_label(),
            pretty_output: default_pretty_output(),
            log_level: default_log_level(),
        }
    }
}

/// 설정 파일 로드 (경로 없음, 파일 없음, 파싱 실패 시 기본값)
pub fn load_config(path: Option<&Path>) -> GraderConfig {
    let Some(path) = path else {
        return GraderConfig::default();
    };
    match fs::read_to_string(path) {
        Ok(content) => serde_json::from_str(&content).unwrap_or_else(|e| {
            log::warn!("설정 파일 파싱 실패, 기본값 사용: {} ({})", path.display(), e);
            GraderConfig::default()
        }),
        Err(e) => {
            log::warn!("설정 파일 읽기 실패, 기본값 사용: {} ({})", path.display(), e);
            GraderConfig::default()
        }
    }
}

/// 설정 파일 저장
pub fn save_config(config: &GraderConfig, path: &Path) -> Result<(), String> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| format!("설정 디렉토리 생성 실패: {}", e))?;
    }
    let json = serde_json::to_string_pretty(config).map_err(|e| format!("직렬화 실패: {}", e))?;
    fs::write(path, json).map_err(|e| format!("설정 파일 저장 실패: {}", e))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = GraderConfig::default();
        assert_eq!(config.unanswered_label, "(미입력)");
        assert!(config.pretty_output);
        assert_eq!(config.log_level, "warn");
    }

    #[test]
    fn test_serialize_deserialize() {
        let config = GraderConfig {
            unanswered_label: "(blank)".to_string(),
            pretty_output: false,
            log_level: "debug".to_string(),
        };
        let json = serde_json::to_string(&config).unwrap();
        let parsed: GraderConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, config);
    }

    #[test]
    fn test_backward_compat_missing_field() {
        // 일부 필드만 있는 설정 파일은 나머지를 기본값으로 채움
        let json = r#"{"pretty_output": false}"#;
        let config: GraderConfig = serde_json::from_str(json).unwrap();
        assert!(!config.pretty_output);
        assert_eq!(config.unanswered_label, "(미입력)");
    }

    #[test]
    fn test_load_missing_or_invalid() {
        assert_eq!(load_config(None), GraderConfig::default());
        assert_eq!(
            load_config(Some(Path::new("/nonexistent/grader.json"))),
            GraderConfig::default()
        );
    }

    #[test]
    fn test_save_and_load_roundtrip() {
        let dir = std::env::temp_dir().join(format!("quiz-grading-config-{}", std::process::id()));
        let path = dir.join("nested").join("grader.json");
        let config = GraderConfig {
            unanswered_label: "-".to_string(),
            ..GraderConfig::default()
        };

        save_config(&config, &path).unwrap();
        assert_eq!(load_config(Some(path.as_path())), config);

        fs::write(&path, "not json").unwrap();
        assert_eq!(load_config(Some(path.as_path())), GraderConfig::default());

        let _ = fs::remove_dir_all(&dir);
    }
}
