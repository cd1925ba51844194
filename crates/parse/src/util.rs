use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// Levenshtein edit distance over chars, using the two-row O(min(m,n)) space algorithm.
pub fn levenshtein_distance(s1: &str, s2: &str) -> usize {
    let a: Vec<char> = s1.chars().collect();
    let b: Vec<char> = s2.chars().collect();
    let (m, n) = (a.len(), b.len());

    if m == 0 {
        return n;
    }
    if n == 0 {
        return m;
    }

    // Keep the shorter string in the inner loop to minimise allocation.
    let (a, b, m, n) = if m <= n { (a, b, m, n) } else { (b, a, n, m) };

    let mut prev: Vec<usize> = (0..=n).collect();
    let mut curr = vec![0usize; n + 1];

    for i in 1..=m {
        curr[0] = i;
        for j in 1..=n {
            let cost = usize::from(a[i - 1] != b[j - 1]);
            curr[j] = (prev[j] + 1).min(curr[j - 1] + 1).min(prev[j - 1] + cost);
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    prev[n]
}

/// Edit distance scaled by the longer string: 0.0 is identical, 1.0 shares nothing.
pub fn mismatch_score(s1: &str, s2: &str) -> f32 {
    let max_len = s1.chars().count().max(s2.chars().count());
    if max_len == 0 {
        return 0.0;
    }
    levenshtein_distance(s1, s2) as f32 / max_len as f32
}

/// Strips Vietnamese tone and vowel marks so `lương` and `luong` compare equal.
pub fn fold_diacritics(s: &str) -> String {
    s.nfd()
        .filter(|c| !is_combining_mark(*c))
        .map(|c| match c {
            'đ' => 'd',
            'Đ' => 'D',
            other => other,
        })
        .collect::<String>()
        .to_lowercase()
}

/// Collapses whitespace runs to single spaces and trims both ends.
pub fn collapse_whitespace(s: &str) -> String {
    s.split_whitespace().collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identical_strings_are_zero() {
        assert_eq!(levenshtein_distance("abc", "abc"), 0);
        assert_eq!(levenshtein_distance("", ""), 0);
    }

    #[test]
    fn empty_string_is_length_of_other() {
        assert_eq!(levenshtein_distance("", "phở"), 3);
        assert_eq!(levenshtein_distance("phở", ""), 3);
    }

    #[test]
    fn counts_chars_not_bytes() {
        assert_eq!(levenshtein_distance("phở", "pho"), 1);
        assert_eq!(levenshtein_distance("cà phê", "ca phe"), 2);
    }

    #[test]
    fn single_edits() {
        assert_eq!(levenshtein_distance("grab", "grap"), 1);
        assert_eq!(levenshtein_distance("grab", "grabb"), 1);
        assert_eq!(levenshtein_distance("grabb", "grab"), 1);
    }

    #[test]
    fn commutative() {
        assert_eq!(
            levenshtein_distance("shopee", "shoppe"),
            levenshtein_distance("shoppe", "shopee")
        );
    }

    #[test]
    fn mismatch_score_bounds() {
        assert_eq!(mismatch_score("cafe", "cafe"), 0.0);
        assert_eq!(mismatch_score("", ""), 0.0);
        assert_eq!(mismatch_score("abc", "xyz"), 1.0);
        assert!((mismatch_score("grabb", "grab") - 0.2).abs() < 1e-6);
    }

    #[test]
    fn fold_removes_marks_and_stroke() {
        assert_eq!(fold_diacritics("lương"), "luong");
        assert_eq!(fold_diacritics("Đổ xăng"), "do xang");
        assert_eq!(fold_diacritics("cà phê sữa đá"), "ca phe sua da");
        assert_eq!(fold_diacritics("grab"), "grab");
    }

    #[test]
    fn collapse_whitespace_joins_runs() {
        assert_eq!(collapse_whitespace("  ăn   sáng \t ngon "), "ăn sáng ngon");
        assert_eq!(collapse_whitespace("   "), "");
    }
}
