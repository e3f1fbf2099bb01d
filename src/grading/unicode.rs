//! 문자 분류 및 비교용 축약/토큰 뷰
//!
//! 단어 문자는 ASCII 영문자, ASCII 숫자, 완성형 한글(가-힣)뿐이며
//! 그 외 모든 문자는 구분자로 취급합니다.

/// 완성형 한글 시작 코드포인트 (가)
const HANGUL_SYLLABLE_FIRST: u32 = 0xAC00;
/// 완성형 한글 끝 코드포인트 (힣)
const HANGUL_SYLLABLE_LAST: u32 = 0xD7A3;

/// 문자가 완성형 한글(가-힣)인지 확인
pub fn is_complete_hangul(ch: char) -> bool {
    (HANGUL_SYLLABLE_FIRST..=HANGUL_SYLLABLE_LAST).contains(&(ch as u32))
}

/// 단어 문자(ASCII 영숫자 또는 완성형 한글)인지 확인
pub fn is_word_char(ch: char) -> bool {
    ch.is_ascii_alphanumeric() || is_complete_hangul(ch)
}

/// 단어 문자만 남긴 축약형
///
/// 공백, 문장부호, 기호를 모두 제거합니다.
/// `"fast api"` → `"fastapi"`
pub fn compact(value: &str) -> String {
    value.chars().filter(|&c| is_word_char(c)).collect()
}

/// 단어 문자의 최대 연속 구간 목록 (빈 토큰 제외)
pub fn tokenize(value: &str) -> Vec<&str> {
    value
        .split(|c: char| !is_word_char(c))
        .filter(|token| !token.is_empty())
        .collect()
}

/// 비어 있지 않고 모든 문자가 ASCII 영문자인지 확인
pub fn is_ascii_word(value: &str) -> bool {
    !value.is_empty() && value.chars().all(|c| c.is_ascii_alphabetic())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_complete_hangul() {
        assert!(is_complete_hangul('가'));
        assert!(is_complete_hangul('힣'));
        assert!(is_complete_hangul('배'));

        // 낱자모는 완성형이 아님
        assert!(!is_complete_hangul('ㄱ'));
        assert!(!is_complete_hangul('ㅏ'));
        assert!(!is_complete_hangul('a'));
        assert!(!is_complete_hangul('1'));
    }

    #[test]
    fn test_is_word_char() {
        assert!(is_word_char('a'));
        assert!(is_word_char('Z'));
        assert!(is_word_char('7'));
        assert!(is_word_char('열'));

        assert!(!is_word_char(' '));
        assert!(!is_word_char('-'));
        assert!(!is_word_char('.'));
        assert!(!is_word_char('é'));
        assert!(!is_word_char('ㅎ'));
        assert!(!is_word_char('٣')); // ASCII 숫자가 아님
    }

    #[test]
    fn test_compact() {
        assert_eq!(compact("fast api"), "fastapi");
        assert_eq!(compact("c++ / c#"), "cc");
        assert_eq!(compact("3.14"), "314");
        assert_eq!(compact("배열 (array)"), "배열array");
        assert_eq!(compact("!!! ..."), "");
        assert_eq!(compact(""), "");
    }

    #[test]
    fn test_tokenize() {
        assert_eq!(tokenize("http client"), vec!["http", "client"]);
        assert_eq!(tokenize("--a,,b--"), vec!["a", "b"]);
        assert_eq!(tokenize("배열-리스트"), vec!["배열", "리스트"]);
        assert!(tokenize("...").is_empty());
        assert!(tokenize("").is_empty());
    }

    #[test]
    fn test_is_ascii_word() {
        assert!(is_ascii_word("receive"));
        assert!(is_ascii_word("Cat"));

        assert!(!is_ascii_word(""));
        assert!(!is_ascii_word("abc1"));
        assert!(!is_ascii_word("배열"));
    }
}
