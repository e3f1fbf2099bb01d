//! 편집 유사도 및 길이별 허용 임계값
//!
//! 유사도는 Ratcliff–Obershelp 방식입니다. 가장 긴 공통 블록을 찾고
//! 양옆 구간에 대해 재귀적으로 반복한 뒤, 매칭된 문자 수 M으로
//! `2M / (|a| + |b|)`를 계산합니다.

use std::collections::HashMap;

/// 자동 정크 처리가 시작되는 b 문자열 길이
const AUTOJUNK_MIN_LEN: usize = 200;

/// 퍼지 허용이 의미 없는 짧은 영문 단어 최대 길이
pub const SHORT_WORD_MAX_LEN: usize = 3;

/// 축약형 길이에 따른 유사도 허용 임계값
///
/// | 길이 | 임계값 |
/// |---|---|
/// | 0–3 | 1.00 |
/// | 4–5 | 0.80 |
/// | 6–8 | 0.75 |
/// | 9+  | 0.72 |
pub fn similarity_threshold(length: usize) -> f64 {
    match length {
        0..=3 => 1.0,
        4..=5 => 0.8,
        6..=8 => 0.75,
        _ => 0.72,
    }
}

/// 두 문자열의 유사도 (0.0 ~ 1.0)
///
/// 길이는 유니코드 스칼라 값 단위로 계산하며, 두 문자열이 모두 비어 있으면 1.0입니다.
///
/// # Examples
/// ```
/// use quiz_grading::grading::similarity_ratio;
///
/// assert_eq!(similarity_ratio("abcd", "bcde"), 0.75);
/// assert_eq!(similarity_ratio("", ""), 1.0);
/// ```
pub fn similarity_ratio(a: &str, b: &str) -> f64 {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();

    let total = a.len() + b.len();
    if total == 0 {
        return 1.0;
    }

    let matched = BlockMatcher::new(&a, &b).matched_len();
    2.0 * matched as f64 / total as f64
}

/// 짧은 영문 단어 오탐 방지 규칙
///
/// 두 축약형이 모두 ASCII 영단어일 때만 적용합니다. 정답이 3글자 이하면 거부하고,
/// 그보다 길면 첫 글자와 끝 글자가 같은 경우만 허용합니다 (`recieve` ~ `receive`).
pub fn ascii_word_guard(user: &str, candidate: &str) -> bool {
    if candidate.chars().count() <= SHORT_WORD_MAX_LEN {
        return false;
    }
    user.chars().next() == candidate.chars().next()
        && user.chars().next_back() == candidate.chars().next_back()
}

/// 최장 공통 블록 탐색기
struct BlockMatcher<'a> {
    a: &'a [char],
    b: &'a [char],
    /// b의 문자 -> 등장 위치 목록 (오름차순)
    b2j: HashMap<char, Vec<usize>>,
}

impl<'a> BlockMatcher<'a> {
    fn new(a: &'a [char], b: &'a [char]) -> Self {
        let mut b2j: HashMap<char, Vec<usize>> = HashMap::new();
        for (j, &ch) in b.iter().enumerate() {
            b2j.entry(ch).or_default().push(j);
        }

        // 긴 b에서 과도하게 자주 나오는 문자는 블록 시작점 후보에서 제외
        if b.len() >= AUTOJUNK_MIN_LEN {
            let popular_limit = b.len() / 100 + 1;
            b2j.retain(|_, indices| indices.len() <= popular_limit);
        }

        Self { a, b, b2j }
    }

    /// `a[alo..ahi]`와 `b[blo..bhi]` 사이의 최장 공통 블록 `(i, j, size)`
    ///
    /// 길이가 같으면 a에서 먼저, 그다음 b에서 먼저 시작하는 블록을 선택합니다.
    fn find_longest_match(
        &self,
        alo: usize,
        ahi: usize,
        blo: usize,
        bhi: usize,
    ) -> (usize, usize, usize) {
        let (mut best_i, mut best_j, mut best_size) = (alo, blo, 0);

        // j -> b[j]에서 끝나는 현재 공통 블록 길이
        let mut j2len: HashMap<usize, usize> = HashMap::new();
        for i in alo..ahi {
            let mut next_j2len = HashMap::new();
            if let Some(indices) = self.b2j.get(&self.a[i]) {
                for &j in indices {
                    if j < blo {
                        continue;
                    }
                    if j >= bhi {
                        break;
                    }
                    let k = j
                        .checked_sub(1)
                        .and_then(|prev| j2len.get(&prev))
                        .copied()
                        .unwrap_or(0)
                        + 1;
                    next_j2len.insert(j, k);
                    if k > best_size {
                        best_i = i + 1 - k;
                        best_j = j + 1 - k;
                        best_size = k;
                    }
                }
            }
            j2len = next_j2len;
        }

        // 제외된 빈출 문자로 블록 양끝 확장
        while best_i > alo && best_j > blo && self.a[best_i - 1] == self.b[best_j - 1] {
            best_i -= 1;
            best_j -= 1;
            best_size += 1;
        }
        while best_i + best_size < ahi
            && best_j + best_size < bhi
            && self.a[best_i + best_size] == self.b[best_j + best_size]
        {
            best_size += 1;
        }

        (best_i, best_j, best_size)
    }

    /// 재귀 블록 매칭으로 찾은 전체 매칭 문자 수
    fn matched_len(&self) -> usize {
        let mut matched = 0;
        let mut pending = vec![(0, self.a.len(), 0, self.b.len())];

        while let Some((alo, ahi, blo, bhi)) = pending.pop() {
            let (i, j, size) = self.find_longest_match(alo, ahi, blo, bhi);
            if size == 0 {
                continue;
            }
            matched += size;
            if alo < i && blo < j {
                pending.push((alo, i, blo, j));
            }
            if i + size < ahi && j + size < bhi {
                pending.push((i + size, ahi, j + size, bhi));
            }
        }
        matched
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn test_threshold_buckets() {
        assert_eq!(similarity_threshold(0), 1.0);
        assert_eq!(similarity_threshold(3), 1.0);
        assert_eq!(similarity_threshold(4), 0.8);
        assert_eq!(similarity_threshold(5), 0.8);
        assert_eq!(similarity_threshold(6), 0.75);
        assert_eq!(similarity_threshold(8), 0.75);
        assert_eq!(similarity_threshold(9), 0.72);
        assert_eq!(similarity_threshold(100), 0.72);
    }

    #[test]
    fn test_ratio_identity_and_disjoint() {
        assert_eq!(similarity_ratio("array", "array"), 1.0);
        assert_eq!(similarity_ratio("abc", "xyz"), 0.0);
        assert_eq!(similarity_ratio("", "abc"), 0.0);
        assert_eq!(similarity_ratio("", ""), 1.0);
    }

    #[test]
    fn test_ratio_known_values() {
        // "rec" + "ve" + "i" = 6 매칭, 12 / 14
        assert!(approx(similarity_ratio("recieve", "receive"), 12.0 / 14.0));
        // "client" 한 블록만 매칭
        assert!(approx(similarity_ratio("httpclient", "clienthttp"), 0.6));
        assert!(approx(similarity_ratio("cat", "cut"), 4.0 / 6.0));
        assert!(approx(similarity_ratio("배열구조", "배열구초"), 0.75));
    }

    #[test]
    fn test_ratio_is_not_symmetric_in_general() {
        // 블록 선택이 a 기준이라 인자 순서에 따라 값이 달라질 수 있음
        let forward = similarity_ratio("tide", "diet");
        let backward = similarity_ratio("diet", "tide");
        assert!(approx(forward, 0.25));
        assert!(approx(backward, 0.5));
    }

    #[test]
    fn test_ratio_autojunk_long_input() {
        let long_a = "a".repeat(250);
        let long_b = format!("{}b", "a".repeat(250));
        let ratio = similarity_ratio(&long_a, &long_b);
        assert!(ratio > 0.99, "ratio = {}", ratio);
    }

    #[test]
    fn test_ascii_word_guard() {
        assert!(ascii_word_guard("recieve", "receive"));
        assert!(!ascii_word_guard("cats", "cat"));
        assert!(!ascii_word_guard("breach", "preach"));
        assert!(!ascii_word_guard("planet", "planes"));
    }
}
