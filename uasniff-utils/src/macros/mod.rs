#[doc(hidden)]
#[macro_export]
/// Match a string against literal arms, comparing ASCII case insensitively.
///
/// Leading and trailing whitespace of the matched value is ignored.
/// A fallback arm (`_ => ...`) is required, the macro never panics.
macro_rules! __match_ignore_ascii_case_str {
    (match ($s:expr) {
        $($case:literal $(| $caseVar:literal)* => $ret:expr,)+
        _ => $fallback:expr $(,)?
    }) => {
        {
            let s = ($s).trim();
            $(
                if s.eq_ignore_ascii_case($case) $(|| s.eq_ignore_ascii_case($caseVar))* {
                    $ret
                } else
            )+
            {
                $fallback
            }
        }
    };
}
#[doc(inline)]
pub use crate::__match_ignore_ascii_case_str as match_ignore_ascii_case_str;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn match_ignore_ascii_case_str_mixed_case() {
        let result = match_ignore_ascii_case_str!(match ("IsWebKit") {
            "isWebKit" => true,
            _ => false,
        });
        assert!(result);
    }

    #[test]
    fn match_ignore_ascii_case_str_variants() {
        let result = match_ignore_ascii_case_str!(match ("tv") {
            "isIOS" | "ios" => 1,
            "isTV" | "tv" => 2,
            _ => 3,
        });
        assert_eq!(result, 2);
    }

    #[test]
    fn match_ignore_ascii_case_str_trims_input() {
        let result = match_ignore_ascii_case_str!(match ("  gecko\t") {
            "gecko" => 1,
            _ => 2,
        });
        assert_eq!(result, 1);
    }

    #[test]
    fn match_ignore_ascii_case_str_fallback() {
        let s = String::from("netscape");
        let result = match_ignore_ascii_case_str!(match (s) {
            "firefox" => Some(1),
            "gecko" => Some(2),
            _ => None,
        });
        assert_eq!(result, None);
    }
}
