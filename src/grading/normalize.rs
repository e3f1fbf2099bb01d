//! 답안 텍스트 정규화 및 정답 후보 분리

use std::collections::HashMap;

use lazy_static::lazy_static;
use unicode_normalization::UnicodeNormalization;

/// 정답 컬럼에서 복수 정답을 구분하는 문자
pub const CANDIDATE_SEPARATOR: char = '/';

lazy_static! {
    /// 소문자 변환만으로는 접히지 않는 전체 케이스 폴딩 항목
    static ref FULL_CASE_FOLDS: HashMap<char, &'static str> = {
        let mut folds = HashMap::new();
        folds.insert('ß', "ss");
        folds.insert('ẞ', "ss");
        folds.insert('ς', "σ");
        // 결합 이오타 하위첨자 (ᾳ, ῃ, ῳ 등은 분해 후 여기로 모임)
        folds.insert('\u{345}', "ι");
        folds
    };
}

/// 체로키 소문자 블록 (U+AB70..U+ABBF → U+13A0..U+13EF)
const CHEROKEE_SMALL_FIRST: u32 = 0xAB70;
const CHEROKEE_SMALL_LAST: u32 = 0xABBF;
const CHEROKEE_CAPITAL_FIRST: u32 = 0x13A0;

/// 체로키 소문자 보충 (U+13F8..U+13FD → U+13F0..U+13F5)
const CHEROKEE_SUPPLEMENT_FIRST: u32 = 0x13F8;
const CHEROKEE_SUPPLEMENT_LAST: u32 = 0x13FD;

/// 공백 문자 판정 (유니코드 White_Space + 정보 구분자 U+001C..U+001F)
fn is_space(ch: char) -> bool {
    ch.is_whitespace() || ('\u{1C}'..='\u{1F}').contains(&ch)
}

/// 케이스 폴딩: 소문자 변환 후 특수 폴딩 적용
///
/// 입력은 NFKD 분해형이어야 결합 문자 단위로 폴딩됩니다.
fn case_fold(value: &str) -> String {
    let mut folded = String::with_capacity(value.len());
    for lower in value.chars().flat_map(char::to_lowercase) {
        if let Some(replacement) = FULL_CASE_FOLDS.get(&lower) {
            folded.push_str(replacement);
            continue;
        }

        let cp = lower as u32;
        let mapped = if (CHEROKEE_SMALL_FIRST..=CHEROKEE_SMALL_LAST).contains(&cp) {
            char::from_u32(cp - CHEROKEE_SMALL_FIRST + CHEROKEE_CAPITAL_FIRST)
        } else if (CHEROKEE_SUPPLEMENT_FIRST..=CHEROKEE_SUPPLEMENT_LAST).contains(&cp) {
            char::from_u32(cp - 8)
        } else {
            None
        };
        folded.push(mapped.unwrap_or(lower));
    }
    folded
}

/// 사용자 입력/정답 텍스트를 비교 가능한 형태로 정규화
///
/// 1. NFKD 분해 (전각/반각, 호환 문자 통일)
/// 2. 케이스 폴딩 (ß → ss, 이오타 하위첨자 → ι 등 전체 폴딩 포함)
/// 3. NFKC 재조합
/// 4. 앞뒤 공백 제거, 내부 연속 공백을 스페이스 하나로 축소
///
/// 빈 문자열이나 공백만 있는 입력은 빈 문자열을 반환합니다.
///
/// # Examples
/// ```
/// use quiz_grading::normalize;
///
/// assert_eq!(normalize("  Ｆａｓｔ\tAPI  "), "fast api");
/// assert_eq!(normalize("Straße"), "strasse");
/// assert_eq!(normalize("   "), "");
/// ```
pub fn normalize(value: &str) -> String {
    if value.is_empty() {
        return String::new();
    }

    // 분해형에서 폴딩한 뒤 NFKC로 재조합해야 재정규화가 멱등
    let decomposed: String = value.nfkd().collect();
    let folded: String = case_fold(&decomposed).nfkc().collect();

    folded
        .split(is_space)
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

/// 정답 컬럼(`/` 구분)을 정규화된 개별 정답 후보로 분리
///
/// 컬럼 전체를 먼저 정규화한 뒤 분리하므로 `"cat / dog"`의 구분자 주변 공백은
/// 후보에 남지 않습니다. 빈 후보와 중복 후보는 제거되고 처음 등장 순서가 유지됩니다.
///
/// # Examples
/// ```
/// use quiz_grading::split_candidates;
///
/// assert_eq!(split_candidates("A/a/B"), vec!["a", "b"]);
/// assert!(split_candidates(" / ").is_empty());
/// ```
pub fn split_candidates(answer_field: &str) -> Vec<String> {
    let normalized = normalize(answer_field);
    if normalized.is_empty() {
        return Vec::new();
    }

    let mut candidates: Vec<String> = Vec::new();
    for part in normalized.split(CANDIDATE_SEPARATOR) {
        let candidate = normalize(part);
        if !candidate.is_empty() && !candidates.contains(&candidate) {
            candidates.push(candidate);
        }
    }
    candidates
}
