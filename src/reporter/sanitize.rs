use lazy_static::*;
use regex::{NoExpand, Regex};
use std::borrow::Cow;

/// Status keywords the sink parses as its own control tokens.
pub const SENTINELS: [&str; 6] = [
    "PROCESS-CRASH",
    "TEST-END",
    "TEST-KNOWN-FAIL",
    "TEST-PASS",
    "TEST-START",
    "TEST-UNEXPECTED-FAIL",
];

lazy_static! {
    static ref SENTINEL_MASKS: Vec<(Regex, String)> = SENTINELS
        .iter()
        .map(|sentinel| {
            let regex = Regex::new(&regex::escape(sentinel)).expect("Regex compilation error");
            (regex, "*".repeat(sentinel.len()))
        })
        .collect();
}

/// Masks every sentinel keyword with asterisks of the same length. Keywords
/// are masked one after another in `SENTINELS` order, so where two overlap the
/// earlier one in that list takes the shared characters.
pub fn sanitize(text: &str) -> Cow<'_, str> {
    let mut result = Cow::Borrowed(text);
    for (regex, mask) in SENTINEL_MASKS.iter() {
        let replaced = match regex.replace_all(&result, NoExpand(mask)) {
            Cow::Owned(replaced) => Some(replaced),
            Cow::Borrowed(_) => None,
        };
        if let Some(replaced) = replaced {
            result = Cow::Owned(replaced);
        }
    }
    result
}

#[cfg(test)]
mod tests {
    use super::{sanitize, SENTINELS};

    #[test]
    fn test_mask_keeps_surrounding_text() {
        assert_eq!(sanitize("TEST-PASS foo TEST-END"), "********* foo ********");
    }

    #[test]
    fn test_every_sentinel_is_masked_with_equal_length() {
        for sentinel in SENTINELS.iter() {
            let title = format!("before {} middle {} after", sentinel, sentinel);
            let result = sanitize(&title);

            let stars = "*".repeat(sentinel.len());
            assert_eq!(result, format!("before {} middle {} after", stars, stars));
            assert_eq!(result.len(), title.len());
        }
    }

    #[test]
    fn test_adjacent_sentinels() {
        let result = sanitize("PROCESS-CRASHTEST-UNEXPECTED-FAIL");

        assert_eq!(result, "*".repeat(33));
    }

    #[test]
    fn test_overlapping_sentinels_follow_list_order() {
        assert_eq!(sanitize("TEST-STARTEST-PASS"), "TEST-STAR*********");
        assert_eq!(sanitize("TEST-STARTEST-END"), "TEST-STAR********");
        assert_eq!(sanitize("TEST-STARTEST-START"), "**********EST-START");
    }

    #[test]
    fn test_plain_title_is_borrowed() {
        let result = sanitize("handles TEST- prefixes and test-pass");

        assert!(matches!(result, std::borrow::Cow::Borrowed(_)));
        assert_eq!(result, "handles TEST- prefixes and test-pass");
    }
}
