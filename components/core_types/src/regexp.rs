//! Regular expression values
//!
//! Patterns are compiled with the `regex` crate. Matching is stateless: a
//! value never carries a `lastIndex`, so testing the same input twice always
//! gives the same answer, with the sticky flag anchoring every match at the
//! start of the input.

use regex::{Regex, RegexBuilder};
use std::fmt;

use crate::error::ValueError;

/// Parsed regular expression flags
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RegExpFlags {
    /// `d` - match indices
    pub has_indices: bool,
    /// `g` - global
    pub global: bool,
    /// `i` - ignore case
    pub ignore_case: bool,
    /// `m` - multiline anchors
    pub multiline: bool,
    /// `s` - dot matches newlines
    pub dot_all: bool,
    /// `u` or `v` - unicode mode
    pub unicode: bool,
    /// `y` - sticky
    pub sticky: bool,
}

impl RegExpFlags {
    /// Parse a flags string, rejecting duplicates and unknown flags
    pub fn parse(flags: &str) -> Result<Self, ValueError> {
        let mut parsed = RegExpFlags::default();
        let mut unicode_sets = false;

        for ch in flags.chars() {
            let slot = match ch {
                'd' => &mut parsed.has_indices,
                'g' => &mut parsed.global,
                'i' => &mut parsed.ignore_case,
                'm' => &mut parsed.multiline,
                's' => &mut parsed.dot_all,
                'u' => &mut parsed.unicode,
                'v' => &mut unicode_sets,
                'y' => &mut parsed.sticky,
                other => return Err(ValueError::UnknownFlag(other)),
            };
            if *slot {
                return Err(ValueError::DuplicateFlag(ch));
            }
            *slot = true;
        }

        if unicode_sets {
            if parsed.unicode {
                return Err(ValueError::IncompatibleFlags);
            }
            parsed.unicode = true;
        }

        Ok(parsed)
    }
}

/// A compiled regular expression with its source and flags
#[derive(Debug, Clone)]
pub struct RegExpValue {
    regex: Regex,
    source_pattern: String,
    /// Flags as written, in canonical order
    flags_str: String,
    flags: RegExpFlags,
}

impl RegExpValue {
    /// Compile a pattern with the given flags
    pub fn new(pattern: &str, flags: &str) -> Result<Self, ValueError> {
        let parsed = RegExpFlags::parse(flags)?;

        let regex = RegexBuilder::new(pattern)
            .case_insensitive(parsed.ignore_case)
            .multi_line(parsed.multiline)
            .dot_matches_new_line(parsed.dot_all)
            .unicode(true)
            .build()
            .map_err(|e| ValueError::InvalidPattern {
                pattern: pattern.to_string(),
                reason: e.to_string(),
            })?;

        // Canonical order matches the order flags are reported by the runtime
        let flags_str: String = "dgimsuvy"
            .chars()
            .filter(|c| flags.contains(*c))
            .collect();

        Ok(RegExpValue {
            regex,
            source_pattern: pattern.to_string(),
            flags_str,
            flags: parsed,
        })
    }

    /// Get the source pattern (`(?:)` for an empty pattern)
    pub fn source(&self) -> &str {
        if self.source_pattern.is_empty() {
            "(?:)"
        } else {
            &self.source_pattern
        }
    }

    /// Get the flags string
    pub fn flags(&self) -> &str {
        &self.flags_str
    }

    /// Get the parsed flags
    pub fn parsed_flags(&self) -> RegExpFlags {
        self.flags
    }

    /// Test if the pattern matches the input
    pub fn test(&self, input: &str) -> bool {
        if self.flags.sticky {
            return self.regex.find(input).is_some_and(|m| m.start() == 0);
        }
        self.regex.is_match(input)
    }
}

impl fmt::Display for RegExpValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "/{}/{}", self.source(), self.flags_str)
    }
}
