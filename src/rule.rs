use crate::section::SectionStack;

/// Structured content extracted from one diagram line.
///
/// Produced transiently per line and never persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedLine {
    /// Text of the first `"…"` span on the line. Empty quotes give an
    /// empty string, not a failed parse.
    pub content: String,
    /// Value of a `style="…"` attribute, if the line carried a non-empty
    /// one.
    pub style: Option<String>,
    /// Count of leading whitespace characters, the nesting discriminant.
    pub indent: usize,
}

impl ParsedLine {
    /// Render the optional style as an attribute with a leading space,
    /// escaped for a double-quoted context. Lines without a style produce
    /// nothing at all, never `style=""`.
    pub fn style_attr(&self) -> String {
        match self.style.as_deref() {
            Some(css) => format!(
                " style=\"{}\"",
                html_escape::encode_double_quoted_attribute(css)
            ),
            None => String::new(),
        }
    }
}

/// One pluggable line-level syntax: recognizer, parser, renderer and
/// stylesheet fragment.
///
/// Implementations are immutable after construction. All mutable parse
/// state lives in the [`SectionStack`](crate::section::SectionStack)
/// passed to `render`, so one registry can serve any number of sequential
/// parses.
pub trait Rule: Send + Sync {
    /// Identity, unique within a registry.
    fn name(&self) -> &'static str;

    /// Pure predicate: true only for lines exactly conforming to this
    /// rule's syntax.
    fn matches(&self, line: &str) -> bool;

    /// Extract structured content, or `None` when the line does not
    /// match.
    fn parse(&self, line: &str) -> Option<ParsedLine>;

    /// Emit the markup for a parsed line. Every recognized line settles
    /// the section stack against its own indent before emitting.
    fn render(&self, parsed: &ParsedLine, sections: &mut SectionStack, out: &mut String);

    /// Fixed CSS fragment for this rule's markup classes.
    fn styles(&self) -> &str;
}

/// Turn a captured `style="…"` value into the `ParsedLine` form: empty
/// attributes are treated as absent.
pub(crate) fn nonempty_style(value: Option<&str>) -> Option<String> {
    value.filter(|s| !s.is_empty()).map(str::to_owned)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn line(style: Option<&str>) -> ParsedLine {
        ParsedLine {
            content: "x".to_string(),
            style: style.map(str::to_owned),
            indent: 0,
        }
    }

    #[test]
    fn style_attr_absent() {
        assert_eq!(line(None).style_attr(), "");
    }

    #[test]
    fn style_attr_present() {
        assert_eq!(
            line(Some("color: red")).style_attr(),
            " style=\"color: red\""
        );
    }

    #[test]
    fn style_attr_is_escaped() {
        assert_eq!(
            line(Some("font-family: a & b")).style_attr(),
            " style=\"font-family: a &amp; b\""
        );
    }

    #[test]
    fn empty_style_is_absent() {
        assert_eq!(nonempty_style(Some("")), None);
        assert_eq!(nonempty_style(None), None);
        assert_eq!(nonempty_style(Some("color: red")), Some("color: red".to_string()));
    }
}
