//! Display labels for confusion-matrix axes.

/// Marker appended to each code on the heatmap axes.
pub const DEFAULT_LABEL_SUFFIX: &str = "*";

/// One display label per code, in the same order.
///
/// Never reorders, filters or deduplicates, so position `i` lines up with
/// row and column `i` of a matrix built from the same sequence.
pub fn format_labels(codes: &[String], suffix: &str) -> Vec<String> {
    codes.iter().map(|code| format!("{code}{suffix}")).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn codes(raw: &[&str]) -> Vec<String> {
        raw.iter().map(|c| c.to_string()).collect()
    }

    #[test]
    fn test_appends_marker_in_order() {
        let labels = format_labels(&codes(&["05", "11", "14"]), DEFAULT_LABEL_SUFFIX);
        assert_eq!(labels, vec!["05*", "11*", "14*"]);
    }

    #[test]
    fn test_keeps_duplicates() {
        let labels = format_labels(&codes(&["05", "05"]), "*");
        assert_eq!(labels, vec!["05*", "05*"]);
    }

    #[test]
    fn test_empty_sequence() {
        assert!(format_labels(&[], "*").is_empty());
    }
}
