//! Academic term calendar.
//!
//! Term labels like "Fall2025" parse into a position on an academic
//! calendar. The calendar itself is injectable configuration rather than a
//! pair of hard-coded constants: an ordered cycle of term names plus the
//! set of cycle positions whose calendar year belongs to the *previous*
//! academic year. The default is the fall/spring cycle where Spring 2026
//! sits in academic year 2025, but a quarter system works through the same
//! type.

use std::cmp::Ordering;

/// Ordered term-name cycle plus the academic-year offset rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TermCalendar {
    /// Term names in academic-year order, stored lowercase.
    cycle: Vec<String>,
    /// Cycle indices whose calendar year belongs to the previous academic
    /// year (for fall/spring: spring).
    previous_year_terms: Vec<usize>,
}

/// A term label resolved against a calendar.
///
/// Ordering is chronological: academic year first, then position in the
/// cycle. Derived field order matters here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ParsedTerm {
    pub academic_year: i32,
    pub term_index: usize,
    pub calendar_year: i32,
}

impl TermCalendar {
    /// Build a calendar from a term-name cycle and previous-year indices.
    /// Names are matched case-insensitively.
    pub fn new(
        cycle: impl IntoIterator<Item = impl Into<String>>,
        previous_year_terms: impl IntoIterator<Item = usize>,
    ) -> Self {
        Self {
            cycle: cycle
                .into_iter()
                .map(|name| name.into().to_lowercase())
                .collect(),
            previous_year_terms: previous_year_terms.into_iter().collect(),
        }
    }

    /// The standard two-term cycle: Fall opens the academic year, the
    /// following Spring closes it under the previous Fall's year.
    pub fn fall_spring() -> Self {
        Self::new(["fall", "spring"], [1])
    }

    pub fn cycle_len(&self) -> usize {
        self.cycle.len()
    }

    /// Position of a term name in the cycle, case-insensitive.
    pub fn term_index(&self, name: &str) -> Option<usize> {
        let name = name.to_lowercase();
        self.cycle.iter().position(|term| *term == name)
    }

    /// Parse a term label: leading alphabetic run is the term name,
    /// trailing digit run is the calendar year. Labels that do not fit the
    /// pattern, or whose term name is outside the cycle, yield `None` -
    /// callers skip them rather than fail.
    pub fn parse(&self, label: &str) -> Option<ParsedTerm> {
        let split = label.find(|c: char| !c.is_ascii_alphabetic())?;
        let (name, digits) = label.split_at(split);
        if name.is_empty() || digits.is_empty() || !digits.chars().all(|c| c.is_ascii_digit()) {
            return None;
        }
        let term_index = self.term_index(name)?;
        let calendar_year: i32 = digits.parse().ok()?;
        Some(ParsedTerm {
            academic_year: self.academic_year(term_index, calendar_year),
            term_index,
            calendar_year,
        })
    }

    /// Academic year of a (term, calendar year) pair.
    fn academic_year(&self, term_index: usize, calendar_year: i32) -> i32 {
        if self.previous_year_terms.contains(&term_index) {
            calendar_year - 1
        } else {
            calendar_year
        }
    }
}

impl Default for TermCalendar {
    fn default() -> Self {
        Self::fall_spring()
    }
}

impl ParsedTerm {
    /// Strictly-before comparison used by the sequencer.
    pub fn is_before(&self, other: &ParsedTerm) -> bool {
        match self.academic_year.cmp(&other.academic_year) {
            Ordering::Equal => self.term_index < other.term_index,
            ordering => ordering == Ordering::Less,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_fall_and_spring_labels() {
        let cal = TermCalendar::fall_spring();
        let fall = cal.parse("Fall2025").unwrap();
        assert_eq!(fall.term_index, 0);
        assert_eq!(fall.calendar_year, 2025);
        assert_eq!(fall.academic_year, 2025);

        let spring = cal.parse("Spring2026").unwrap();
        assert_eq!(spring.term_index, 1);
        // Spring belongs to the preceding Fall's academic year.
        assert_eq!(spring.academic_year, 2025);
    }

    #[test]
    fn parse_is_case_insensitive() {
        let cal = TermCalendar::fall_spring();
        assert_eq!(cal.parse("fall2025"), cal.parse("FALL2025"));
        assert!(cal.parse("sPrInG2026").is_some());
    }

    #[test]
    fn rejects_malformed_labels() {
        let cal = TermCalendar::fall_spring();
        for label in ["", "Fall", "2025", "Fall 2025", "Summer2025", "Fall2025b"] {
            assert!(cal.parse(label).is_none(), "expected None for {label:?}");
        }
    }

    #[test]
    fn spring_sorts_after_same_year_fall() {
        let cal = TermCalendar::fall_spring();
        let fall = cal.parse("Fall2025").unwrap();
        let spring = cal.parse("Spring2026").unwrap();
        let next_fall = cal.parse("Fall2026").unwrap();

        assert!(fall.is_before(&spring));
        assert!(spring.is_before(&next_fall));
        assert!(fall < spring && spring < next_fall);
    }

    #[test]
    fn ordinal_year_labels_order_correctly() {
        // Planner UIs use small ordinals ("fall1", "spring2") instead of
        // calendar years; the same rules apply.
        let cal = TermCalendar::fall_spring();
        let fall1 = cal.parse("fall1").unwrap();
        let spring2 = cal.parse("spring2").unwrap();
        assert!(fall1.is_before(&spring2));
    }

    #[test]
    fn quarter_calendar_works() {
        let cal = TermCalendar::new(["autumn", "winter", "spring", "summer"], [1, 2, 3]);
        let autumn = cal.parse("Autumn2025").unwrap();
        let winter = cal.parse("Winter2026").unwrap();
        let summer = cal.parse("Summer2026").unwrap();
        assert_eq!(winter.academic_year, 2025);
        assert!(autumn.is_before(&winter));
        assert!(winter.is_before(&summer));
    }
}
