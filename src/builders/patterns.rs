use anyhow::{Context, Result};
use regex::Regex;
use std::fmt;

/// A declarative description of one removable attribute line.
///
/// The stripped lines all have the same shape inside a multi-line
/// component invocation: leading indentation, the attribute name, `={`,
/// a property path off a named source object, `}` and the line
/// terminator. `credits={generator.credits}` is one such line. Keeping
/// the three parts separate (instead of a raw regex string) makes the
/// built-in table in `core::config` const-constructible and keeps regex
/// syntax out of the configuration data.
#[derive(Debug, Clone, Copy)]
pub struct PropSpec {
    /// The attribute name on the left of the assignment, e.g. `credits`.
    pub attribute: &'static str,
    /// The source object the expression reads from, e.g. `generator`.
    pub source: &'static str,
    /// The property read off the source object, e.g. `refreshCredits`.
    pub property: &'static str,
}

impl fmt::Display for PropSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}={{{}.{}}}",
            self.attribute, self.source, self.property
        )
    }
}

/// A compiled whole-line pattern for one attribute assignment.
///
/// The regex matches exactly one line-terminated unit: start of line,
/// horizontal whitespace only, the literal `attr={source.prop}` text and
/// the terminator. Anchoring at the line start is what keeps a commented
/// occurrence (`// credits={generator.credits}`) or a different source
/// object (`props.credits`) from being removed. The terminator is part
/// of the match so removal deletes the line rather than leaving a blank
/// one behind.
#[derive(Debug, Clone)]
pub struct PropPattern {
    regex: Regex,
}

impl PropPattern {
    /// Compiles the whole-line regex for a `PropSpec`.
    ///
    /// The three parts are regex-escaped, so the specification table can
    /// never accidentally smuggle in metacharacters. `\r?\n` tolerates
    /// CRLF files; the `\r` goes with the removed line.
    pub fn from_spec(spec: &PropSpec) -> Result<Self> {
        let pattern = format!(
            r"(?m)^[ \t]*{}=\{{{}\.{}\}}\r?\n",
            regex::escape(spec.attribute),
            regex::escape(spec.source),
            regex::escape(spec.property),
        );
        let regex = Regex::new(&pattern)
            .with_context(|| format!("invalid line pattern for {spec}"))?;

        Ok(Self { regex })
    }

    /// Removes every occurrence of the matched line from `content`.
    ///
    /// Returns `Some` with the stripped content if at least one line
    /// matched, `None` if the content is untouched by this pattern.
    pub fn strip_all(&self, content: &str) -> Option<String> {
        if self.regex.is_match(content) {
            Some(self.regex.replace_all(content, "").into_owned())
        } else {
            None
        }
    }
}

/// Applies every pattern to `content`, in order, cumulatively.
///
/// Each pattern operates on the content as already modified by the
/// patterns before it (sequential composition). Returns `Some` with the
/// final content if any pattern removed anything, `None` if no pattern
/// matched — the caller uses that to skip the write entirely.
pub fn strip_lines(content: &str, patterns: &[PropPattern]) -> Option<String> {
    let mut stripped = content.to_string();
    let mut modified = false;

    for pattern in patterns {
        if let Some(next) = pattern.strip_all(&stripped) {
            stripped = next;
            modified = true;
        }
    }

    modified.then_some(stripped)
}

#[cfg(test)]
mod tests {
    use super::*;

    const CREDITS: PropSpec = PropSpec {
        attribute: "credits",
        source: "generator",
        property: "credits",
    };

    #[test]
    fn test_full_line_is_removed_with_terminator() {
        let pattern = PropPattern::from_spec(&CREDITS).unwrap();
        let content = "<Foo\n  credits={generator.credits}\n  qux={1}\n/>\n";
        let stripped = pattern.strip_all(content).unwrap();
        assert_eq!(stripped, "<Foo\n  qux={1}\n/>\n");
    }

    #[test]
    fn test_every_occurrence_is_removed() {
        let pattern = PropPattern::from_spec(&CREDITS).unwrap();
        let content = "  credits={generator.credits}\nkeep\n  credits={generator.credits}\n";
        let stripped = pattern.strip_all(content).unwrap();
        assert_eq!(stripped, "keep\n");
    }

    #[test]
    fn test_commented_line_is_not_removed() {
        let pattern = PropPattern::from_spec(&CREDITS).unwrap();
        let content = "  // credits={generator.credits}\n";
        assert!(pattern.strip_all(content).is_none());
    }

    #[test]
    fn test_different_source_object_is_not_removed() {
        let pattern = PropPattern::from_spec(&CREDITS).unwrap();
        let content = "  credits={props.credits}\n";
        assert!(pattern.strip_all(content).is_none());
    }

    #[test]
    fn test_match_never_crosses_line_boundaries() {
        let pattern = PropPattern::from_spec(&CREDITS).unwrap();
        let content = "  bar=\"baz\"\n  credits={generator.credits}\n  qux={1}\n";
        let stripped = pattern.strip_all(content).unwrap();
        // The line before and the line after keep their own terminators.
        assert_eq!(stripped, "  bar=\"baz\"\n  qux={1}\n");
    }

    #[test]
    fn test_crlf_line_is_removed_entirely() {
        let pattern = PropPattern::from_spec(&CREDITS).unwrap();
        let content = "<Foo\r\n  credits={generator.credits}\r\n/>\r\n";
        let stripped = pattern.strip_all(content).unwrap();
        assert_eq!(stripped, "<Foo\r\n/>\r\n");
    }

    #[test]
    fn test_strip_lines_applies_patterns_cumulatively() {
        let specs = [
            CREDITS,
            PropSpec {
                attribute: "isCreditsLoading",
                source: "generator",
                property: "creditsLoading",
            },
        ];
        let patterns: Vec<PropPattern> = specs
            .iter()
            .map(|spec| PropPattern::from_spec(spec).unwrap())
            .collect();

        let content =
            "<Foo\n  credits={generator.credits}\n  isCreditsLoading={generator.creditsLoading}\n/>\n";
        let stripped = strip_lines(content, &patterns).unwrap();
        assert_eq!(stripped, "<Foo\n/>\n");
    }

    #[test]
    fn test_strip_lines_returns_none_when_nothing_matches() {
        let pattern = PropPattern::from_spec(&CREDITS).unwrap();
        let content = "<Foo\n  bar=\"baz\"\n/>\n";
        assert!(strip_lines(content, &[pattern]).is_none());
    }
}
