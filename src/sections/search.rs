//! Title search

use crate::core::model::Section;
use crate::sections::parse::HEADER_MARKER;

/// Lower-case a title and strip its header markers and surrounding whitespace
pub fn normalize_title(title: &str) -> String {
    title
        .to_lowercase()
        .trim_start_matches(HEADER_MARKER)
        .trim()
        .to_string()
}

/// Check whether a section title contains the search term, ignoring case
pub fn title_matches(section: &Section, term_lower: &str) -> bool {
    normalize_title(section.title()).contains(term_lower)
}

/// Return the sections whose title contains `term`, in document order
pub fn search_sections<'a>(sections: &'a [Section], term: &str) -> Vec<&'a Section> {
    let term_lower = term.to_lowercase();
    sections
        .iter()
        .filter(|section| title_matches(section, &term_lower))
        .collect()
}
