//! 숫자형 답안 추출
//!
//! `[-+]?숫자+(.숫자+)?` 형태의 부호 있는 십진수 리터럴을 왼쪽부터 겹치지 않게 스캔합니다.

/// 천 단위 구분자
const THOUSANDS_SEPARATOR: char = ',';

/// `pos`에서 시작하는 숫자 리터럴의 끝 위치 (매칭 실패 시 None)
fn match_number_at(bytes: &[u8], pos: usize) -> Option<usize> {
    let mut end = pos;
    if matches!(bytes.get(end), Some(b'+') | Some(b'-')) {
        end += 1;
    }

    let digits_start = end;
    while bytes.get(end).is_some_and(u8::is_ascii_digit) {
        end += 1;
    }
    if end == digits_start {
        return None;
    }

    // 소수부는 점 뒤에 숫자가 하나 이상 있을 때만 포함
    if bytes.get(end) == Some(&b'.') && bytes.get(end + 1).is_some_and(u8::is_ascii_digit) {
        end += 1;
        while bytes.get(end).is_some_and(u8::is_ascii_digit) {
            end += 1;
        }
    }

    Some(end)
}

/// 문자열에 포함된 모든 숫자 리터럴
fn find_numbers(value: &str) -> Vec<&str> {
    let bytes = value.as_bytes();
    let mut numbers = Vec::new();
    let mut pos = 0;

    while pos < bytes.len() {
        match match_number_at(bytes, pos) {
            Some(end) => {
                // 매칭 구간은 모두 ASCII라 문자 경계가 보장됨
                numbers.push(&value[pos..end]);
                pos = end;
            }
            None => pos += 1,
        }
    }
    numbers
}

/// 숫자 리터럴이 정확히 하나일 때만 그 값을 반환
///
/// 쉼표(천 단위 구분자)는 스캔 전에 제거합니다. 숫자가 없거나 두 개 이상이면
/// `None`이며 숫자 비교 규칙은 적용되지 않습니다.
///
/// # Examples
/// ```
/// use quiz_grading::grading::extract_single_number;
///
/// assert_eq!(extract_single_number("1,000원"), Some(1000.0));
/// assert_eq!(extract_single_number("-3.5"), Some(-3.5));
/// assert_eq!(extract_single_number("1 2"), None);
/// assert_eq!(extract_single_number("abc"), None);
/// ```
pub fn extract_single_number(value: &str) -> Option<f64> {
    let stripped: String = value.chars().filter(|&c| c != THOUSANDS_SEPARATOR).collect();
    match find_numbers(&stripped).as_slice() {
        [single] => single.parse::<f64>().ok(),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_numbers() {
        assert_eq!(find_numbers("3.14"), vec!["3.14"]);
        assert_eq!(find_numbers("v1.2.3"), vec!["1.2", "3"]);
        assert_eq!(find_numbers("a-1b+2"), vec!["-1", "+2"]);
        assert_eq!(find_numbers("5."), vec!["5"]);
        assert_eq!(find_numbers("-"), Vec::<&str>::new());
        assert_eq!(find_numbers("배열"), Vec::<&str>::new());
    }

    #[test]
    fn test_single_number() {
        assert_eq!(extract_single_number("42"), Some(42.0));
        assert_eq!(extract_single_number("3.14"), Some(3.14));
        assert_eq!(extract_single_number("+7"), Some(7.0));
        assert_eq!(extract_single_number("약 100개"), Some(100.0));
        assert_eq!(extract_single_number("1,234,567"), Some(1_234_567.0));
    }

    #[test]
    fn test_not_single_number() {
        assert_eq!(extract_single_number(""), None);
        assert_eq!(extract_single_number("http"), None);
        assert_eq!(extract_single_number("1 2"), None);
        assert_eq!(extract_single_number("ipv4 ipv6"), None);
        assert_eq!(extract_single_number("1.2.3"), None);
    }

    #[test]
    fn test_non_ascii_digits_ignored() {
        // NFKC로 변환되지 않는 숫자는 리터럴로 보지 않음
        assert_eq!(extract_single_number("٣"), None);
    }
}
