/// Finds the first occurrence of `token` within `haystack`,
/// using ASCII case insensitive comparison.
///
/// The returned index is a byte offset into `haystack`.
///
/// Tokens are never empty: an empty `token` matches nowhere,
/// so an empty haystack can never accidentally satisfy a token lookup.
pub fn find_token(haystack: &str, token: &str) -> Option<usize> {
    let haystack = haystack.as_bytes();
    let token = token.as_bytes();

    let (first, rest) = token.split_first()?;
    if haystack.len() < token.len() {
        return None;
    }

    let last_start = haystack.len() - token.len();
    (0..=last_start).find(|&start| {
        haystack[start].eq_ignore_ascii_case(first)
            && haystack[start + 1..start + token.len()].eq_ignore_ascii_case(rest)
    })
}

/// Returns `true` if any of the `tokens` occurs within `haystack`,
/// using ASCII case insensitive comparison.
///
/// Empty tokens are ignored, see [`find_token`].
pub fn contains_any_token<I>(haystack: &str, tokens: I) -> bool
where
    I: IntoIterator<Item: AsRef<str>>,
{
    tokens
        .into_iter()
        .any(|token| find_token(haystack, token.as_ref()).is_some())
}

#[cfg(test)]
mod tests {
    use super::*;
    use quickcheck::TestResult;
    use quickcheck_macros::quickcheck;

    #[test]
    fn test_find_token_start_middle_end() {
        for (haystack, token, index) in [
            ("iPad; CPU OS 6_0", "ipad", 0),
            ("Linux; Android 4.4.2", "ANDROID", 7),
            ("AppleWebKit/537.36", "webkit", 5),
            ("Silk/3.4 Mobile", "mobile", 9),
        ] {
            assert_eq!(
                find_token(haystack, token),
                Some(index),
                "find_token({haystack:?}, {token:?})",
            );
        }
    }

    #[test]
    fn test_find_token_misses() {
        for (haystack, token) in [
            ("", "ipad"),
            ("ipa", "ipad"),
            ("iphone", "ipod"),
            ("Chromium", "chrome"),
        ] {
            assert_eq!(
                find_token(haystack, token),
                None,
                "find_token({haystack:?}, {token:?})",
            );
        }
    }

    #[test]
    fn test_find_token_empty_token_never_matches() {
        assert_eq!(find_token("", ""), None);
        assert_eq!(find_token("Mozilla/5.0", ""), None);
    }

    #[test]
    fn test_find_token_multibyte_haystack() {
        assert_eq!(find_token("ünïcödé iPhone", "iphone"), Some(12));
        assert_eq!(find_token("ü", "u"), None);
    }

    #[test]
    fn test_contains_any_token() {
        assert!(contains_any_token("Mozilla/5.0 (iPod touch)", ["ipad", "ipod"]));
        assert!(contains_any_token("GoogleTV/092754", ["googletv", "sonydtv"]));
        assert!(!contains_any_token("Mozilla/5.0 (X11)", ["ipad", "ipod"]));

        let empty: [&str; 0] = [];
        assert!(!contains_any_token("Mozilla/5.0", empty));
        assert!(!contains_any_token("Mozilla/5.0", [""]));
    }

    #[quickcheck]
    fn find_token_ignores_ascii_case(haystack: String, token: String) -> TestResult {
        if token.is_empty() {
            return TestResult::discard();
        }
        TestResult::from_bool(
            find_token(&haystack, &token)
                == find_token(&haystack.to_ascii_uppercase(), &token.to_ascii_lowercase()),
        )
    }

    #[quickcheck]
    fn find_token_finds_embedded_token(prefix: String, token: String, suffix: String) -> TestResult {
        if token.is_empty() {
            return TestResult::discard();
        }
        let haystack = format!("{prefix}{token}{suffix}");
        TestResult::from_bool(
            find_token(&haystack, &token).is_some_and(|index| index <= prefix.len()),
        )
    }
}
