use once_cell::sync::Lazy;
use regex::Regex;

use crate::rule::{ParsedLine, Rule, nonempty_style};
use crate::section::SectionStack;

static CONTENT_LINE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"^(\s*)section-content\s+"([^"]*)"(?:\s+style="([^"]*)")?\s*$"#)
        .expect("section-content line pattern")
});

const CONTENT_CSS: &str = r#".cd-section-content {
    margin: 4px 0 4px 12px;
}

"#;

/// `section-content "…" [style="…"]`: a leaf element inside the current
/// section. Settles the stack against its indent but never pushes.
#[derive(Debug, Default)]
pub struct SectionContentRule;

impl Rule for SectionContentRule {
    fn name(&self) -> &'static str {
        "section-content"
    }

    fn matches(&self, line: &str) -> bool {
        CONTENT_LINE.is_match(line)
    }

    fn parse(&self, line: &str) -> Option<ParsedLine> {
        let caps = CONTENT_LINE.captures(line)?;
        Some(ParsedLine {
            indent: caps[1].chars().count(),
            content: caps[2].to_string(),
            style: nonempty_style(caps.get(3).map(|m| m.as_str())),
        })
    }

    fn render(&self, parsed: &ParsedLine, sections: &mut SectionStack, out: &mut String) {
        sections.close_at_or_deeper(parsed.indent, out);
        let pad = " ".repeat(parsed.indent);
        out.push_str(&format!(
            "{pad}<div class=\"cd-section-content\"{}>{}</div>\n",
            parsed.style_attr(),
            html_escape::encode_text(&parsed.content)
        ));
    }

    fn styles(&self) -> &str {
        CONTENT_CSS
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn matches_content_lines() {
        let rule = SectionContentRule;
        assert!(rule.matches("section-content \"x\""));
        assert!(rule.matches("  section-content \"x\" style=\"color: red\""));
        assert!(!rule.matches("section \"x\""));
        assert!(!rule.matches("section-content no quotes"));
    }

    #[test]
    fn renders_leaf_without_touching_deeper_stack() {
        let rule = SectionContentRule;
        let mut sections = SectionStack::new();
        let mut out = String::new();
        sections.open(
            &ParsedLine {
                content: "A".to_string(),
                style: None,
                indent: 0,
            },
            &mut out,
        );
        out.clear();
        let parsed = rule.parse("  section-content \"x\"").unwrap();
        rule.render(&parsed, &mut sections, &mut out);
        assert_eq!(out, "  <div class=\"cd-section-content\">x</div>\n");
        assert_eq!(sections.depth(), 1);
    }

    #[test]
    fn dedented_content_closes_sections_first() {
        let rule = SectionContentRule;
        let mut sections = SectionStack::new();
        let mut out = String::new();
        sections.open(
            &ParsedLine {
                content: "A".to_string(),
                style: None,
                indent: 2,
            },
            &mut out,
        );
        out.clear();
        let parsed = rule.parse("section-content \"x\"").unwrap();
        rule.render(&parsed, &mut sections, &mut out);
        assert_eq!(
            out,
            "  </div>\n<div class=\"cd-section-content\">x</div>\n"
        );
        assert_eq!(sections.depth(), 0);
    }

    #[test]
    fn style_attribute_is_emitted_when_present() {
        let rule = SectionContentRule;
        let mut sections = SectionStack::new();
        let mut out = String::new();
        let parsed = rule
            .parse("section-content \"x\" style=\"color: red\"")
            .unwrap();
        rule.render(&parsed, &mut sections, &mut out);
        assert_eq!(
            out,
            "<div class=\"cd-section-content\" style=\"color: red\">x</div>\n"
        );
    }
}
