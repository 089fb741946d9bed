//! Response sectionizer: splits one block of free-form model output into
//! per-label sections.
//!
//! The model is prompted to answer with three labeled parts; this module finds
//! each label case-insensitively and cuts its section at the nearest following
//! occurrence of any *other* label. An absent label is a normal outcome and
//! comes back as an empty string; callers decide what to show instead.

use std::collections::HashMap;

// ────────────────────────────────────────────────────────────────────────────
// Section labels
// ────────────────────────────────────────────────────────────────────────────

/// The three fixed section labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SectionLabel {
    Summary,
    MissingKeywords,
    CoverLetter,
}

impl SectionLabel {
    /// Canonical label order. Each label is searched independently, so the
    /// order carries no meaning beyond matching the prompt's numbered items.
    pub const ALL: [SectionLabel; 3] = [
        SectionLabel::Summary,
        SectionLabel::MissingKeywords,
        SectionLabel::CoverLetter,
    ];

    /// The literal heading text searched for in model output.
    pub fn as_str(&self) -> &'static str {
        match self {
            SectionLabel::Summary => "Summary",
            SectionLabel::MissingKeywords => "Missing Keywords",
            SectionLabel::CoverLetter => "Cover Letter",
        }
    }
}

/// One extracted substring per label; an empty string means the label was not
/// found. Built per request and discarded once rendered into the response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectionMap {
    pub summary: String,
    pub missing_keywords: String,
    pub cover_letter: String,
}

impl SectionMap {
    /// Sectionizes `output` with the three canonical labels.
    pub fn parse(output: &str) -> Self {
        let labels: Vec<&str> = SectionLabel::ALL.iter().map(|label| label.as_str()).collect();
        let mut sections = sectionize(output, &labels);

        SectionMap {
            summary: sections
                .remove(SectionLabel::Summary.as_str())
                .unwrap_or_default(),
            missing_keywords: sections
                .remove(SectionLabel::MissingKeywords.as_str())
                .unwrap_or_default(),
            cover_letter: sections
                .remove(SectionLabel::CoverLetter.as_str())
                .unwrap_or_default(),
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Sectionizing
// ────────────────────────────────────────────────────────────────────────────

/// Splits `output` into one substring per label.
///
/// For each label independently: find its first case-insensitive occurrence;
/// the section runs from there to the earliest first occurrence of any *other*
/// label strictly after `start + 1`, or to the end of the text. The result is
/// trimmed. A label that never occurs maps to the empty string, so the returned
/// map always has exactly one entry per label.
///
/// Pure function; never panics. Labels are assumed not to be substrings of one
/// another; no validation or reordering is attempted, so output that repeats or
/// reorders labels partitions by the same arithmetic.
pub fn sectionize<'a>(output: &str, labels: &[&'a str]) -> HashMap<&'a str, String> {
    let mut sections = HashMap::with_capacity(labels.len());

    for &label in labels {
        let Some(start) = find_ignore_case(output, label, 0) else {
            sections.insert(label, String::new());
            continue;
        };

        // The earliest following occurrence of any other label bounds this
        // section. The search starts at start + 1 so a label at its own start
        // position never bounds itself; only other labels truncate.
        let mut end = output.len();
        for &other in labels {
            if other == label {
                continue;
            }
            if let Some(next_start) = find_ignore_case(output, other, start + 1) {
                if next_start < end {
                    end = next_start;
                }
            }
        }

        sections.insert(label, output[start..end].trim().to_string());
    }

    sections
}

/// Byte index of the first ASCII-case-insensitive occurrence of `needle` in
/// `haystack` at or after `from`.
///
/// Compares raw bytes, so `from` may point mid-code-point without issue. A
/// match can differ from `needle` only in ASCII letter case, so returned
/// indices always fall on char boundaries and are safe to slice with.
fn find_ignore_case(haystack: &str, needle: &str, from: usize) -> Option<usize> {
    let haystack = haystack.as_bytes();
    let needle = needle.as_bytes();

    if needle.is_empty() {
        return (from <= haystack.len()).then_some(from);
    }
    if from + needle.len() > haystack.len() {
        return None;
    }

    (from..=haystack.len() - needle.len())
        .find(|&i| haystack[i..i + needle.len()].eq_ignore_ascii_case(needle))
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    const CANONICAL_OUTPUT: &str =
        "Summary: great fit.\nMissing Keywords: Docker, Kubernetes\nCover Letter: Dear Hiring Manager, ...";

    fn canonical_labels() -> Vec<&'static str> {
        SectionLabel::ALL.iter().map(|label| label.as_str()).collect()
    }

    #[test]
    fn test_labels_in_canonical_order() {
        assert_eq!(
            canonical_labels(),
            vec!["Summary", "Missing Keywords", "Cover Letter"]
        );
    }

    #[test]
    fn test_canonical_output_splits_into_three_trimmed_sections() {
        let sections = sectionize(CANONICAL_OUTPUT, &canonical_labels());

        assert_eq!(sections["Summary"], "Summary: great fit.");
        assert_eq!(
            sections["Missing Keywords"],
            "Missing Keywords: Docker, Kubernetes"
        );
        assert_eq!(
            sections["Cover Letter"],
            "Cover Letter: Dear Hiring Manager, ..."
        );
    }

    #[test]
    fn test_canonical_sections_are_ordered_and_disjoint() {
        let sections = sectionize(CANONICAL_OUTPUT, &canonical_labels());

        let summary_start = CANONICAL_OUTPUT.find(sections["Summary"].as_str()).unwrap();
        let keywords_start = CANONICAL_OUTPUT
            .find(sections["Missing Keywords"].as_str())
            .unwrap();
        let cover_start = CANONICAL_OUTPUT
            .find(sections["Cover Letter"].as_str())
            .unwrap();

        assert!(summary_start + sections["Summary"].len() <= keywords_start);
        assert!(keywords_start + sections["Missing Keywords"].len() <= cover_start);
    }

    #[test]
    fn test_last_section_runs_to_end_of_text() {
        let sections = sectionize(CANONICAL_OUTPUT, &canonical_labels());
        assert!(CANONICAL_OUTPUT.ends_with(sections["Cover Letter"].as_str()));
    }

    #[test]
    fn test_absent_labels_yield_empty_strings() {
        let sections = sectionize("Summary: something", &canonical_labels());

        assert_eq!(sections["Summary"], "Summary: something");
        assert_eq!(sections["Missing Keywords"], "");
        assert_eq!(sections["Cover Letter"], "");
    }

    #[test]
    fn test_empty_output_yields_all_empty_strings() {
        let sections = sectionize("", &canonical_labels());

        assert_eq!(sections.len(), 3);
        assert!(sections.values().all(|section| section.is_empty()));
    }

    #[test]
    fn test_cover_letter_only_output_keeps_entire_string() {
        let output = "Cover Letter: Dear Hiring Manager...";
        let sections = sectionize(output, &canonical_labels());

        assert_eq!(sections["Summary"], "");
        assert_eq!(sections["Missing Keywords"], "");
        assert_eq!(sections["Cover Letter"], output);
    }

    #[test]
    fn test_labels_found_case_insensitively_and_original_case_kept() {
        let output = "SUMMARY: a\nmissing keywords: b\nCoVeR lEtTeR: c";
        let sections = sectionize(output, &canonical_labels());

        assert_eq!(sections["Summary"], "SUMMARY: a");
        assert_eq!(sections["Missing Keywords"], "missing keywords: b");
        assert_eq!(sections["Cover Letter"], "CoVeR lEtTeR: c");
    }

    #[test]
    fn test_case_variant_bounds_same_span_as_exact_case() {
        let exact = sectionize(CANONICAL_OUTPUT, &canonical_labels());
        let upper = sectionize(&CANONICAL_OUTPUT.to_uppercase(), &canonical_labels());

        for label in canonical_labels() {
            assert_eq!(upper[label], exact[label].to_uppercase());
        }
    }

    #[test]
    fn test_surrounding_whitespace_is_trimmed() {
        let output = "  Summary: a\n\nMissing Keywords: b  ";
        let sections = sectionize(output, &canonical_labels());

        assert_eq!(sections["Summary"], "Summary: a");
        assert_eq!(sections["Missing Keywords"], "Missing Keywords: b");
    }

    #[test]
    fn test_nearest_other_label_truncates_regardless_of_declared_order() {
        // Cover Letter appears before Missing Keywords in the text, so it is
        // the boundary that cuts the summary short.
        let output = "Summary: a. Cover Letter: b. Missing Keywords: c.";
        let sections = sectionize(output, &canonical_labels());

        assert_eq!(sections["Summary"], "Summary: a.");
        assert_eq!(sections["Cover Letter"], "Cover Letter: b.");
        assert_eq!(sections["Missing Keywords"], "Missing Keywords: c.");
    }

    #[test]
    fn test_out_of_order_labels_partition_by_position() {
        let output = "Cover Letter: z\nSummary: a\nMissing Keywords: b";
        let sections = sectionize(output, &canonical_labels());

        assert_eq!(sections["Cover Letter"], "Cover Letter: z");
        assert_eq!(sections["Summary"], "Summary: a");
        assert_eq!(sections["Missing Keywords"], "Missing Keywords: b");
    }

    #[test]
    fn test_duplicate_of_same_label_never_bounds_itself() {
        let output = "Summary: first take. Summary: second take.";
        let sections = sectionize(output, &canonical_labels());

        assert_eq!(sections["Summary"], output);
    }

    #[test]
    fn test_label_mentioned_inside_another_section_truncates_it() {
        // Known fragility, kept on purpose: a label word appearing mid-text
        // still acts as a boundary.
        let output = "Summary: see my Cover Letter below.\nMissing Keywords: Docker";
        let sections = sectionize(output, &canonical_labels());

        assert_eq!(sections["Summary"], "Summary: see my");
        assert_eq!(sections["Cover Letter"], "Cover Letter below.");
        assert_eq!(sections["Missing Keywords"], "Missing Keywords: Docker");
    }

    #[test]
    fn test_multibyte_text_around_labels_is_sliced_safely() {
        let output = "résumé ✨ Summary: café ☕\nMissing Keywords: naïveté";
        let sections = sectionize(output, &canonical_labels());

        assert_eq!(sections["Summary"], "Summary: café ☕");
        assert_eq!(sections["Missing Keywords"], "Missing Keywords: naïveté");
        assert_eq!(sections["Cover Letter"], "");
    }

    #[test]
    fn test_sectionize_is_idempotent() {
        let first = sectionize(CANONICAL_OUTPUT, &canonical_labels());
        let second = sectionize(CANONICAL_OUTPUT, &canonical_labels());

        assert_eq!(first, second);
    }

    #[test]
    fn test_section_map_parse_pulls_all_three_fields() {
        let map = SectionMap::parse(CANONICAL_OUTPUT);

        assert_eq!(map.summary, "Summary: great fit.");
        assert_eq!(map.missing_keywords, "Missing Keywords: Docker, Kubernetes");
        assert_eq!(map.cover_letter, "Cover Letter: Dear Hiring Manager, ...");
    }

    #[test]
    fn test_section_map_parse_empty_output() {
        let map = SectionMap::parse("");

        assert_eq!(
            map,
            SectionMap {
                summary: String::new(),
                missing_keywords: String::new(),
                cover_letter: String::new(),
            }
        );
    }

    #[test]
    fn test_find_ignore_case_first_occurrence() {
        assert_eq!(find_ignore_case("abc Summary abc", "summary", 0), Some(4));
    }

    #[test]
    fn test_find_ignore_case_respects_from_offset() {
        let text = "Cover Letter: x Cover Letter: y";
        assert_eq!(find_ignore_case(text, "Cover Letter", 0), Some(0));
        assert_eq!(find_ignore_case(text, "Cover Letter", 1), Some(16));
    }

    #[test]
    fn test_find_ignore_case_skips_occurrence_before_from() {
        assert_eq!(find_ignore_case("summary", "Summary", 1), None);
    }

    #[test]
    fn test_find_ignore_case_absent_needle() {
        assert_eq!(find_ignore_case("abc", "d", 0), None);
    }

    #[test]
    fn test_find_ignore_case_from_beyond_haystack() {
        assert_eq!(find_ignore_case("abc", "c", 5), None);
    }
}
