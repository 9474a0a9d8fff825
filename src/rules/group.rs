use once_cell::sync::Lazy;
use regex::Regex;

use crate::rule::{ParsedLine, Rule};
use crate::section::SectionStack;

static GROUP_LINE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"^group\s+"([^"]*)"\s*$"#).expect("group line pattern")
});

const GROUP_CSS: &str = r#".cd-group {
    border: 2px solid #4a9eff;
    padding: 8px;
    margin: 5px 0;
    border-radius: 4px;
}

.cd-group-content {
    font-weight: bold;
    color: #2c5ea5;
}

"#;

/// `group "…"`: a flat grouped container with no nesting of its own.
#[derive(Debug, Default)]
pub struct GroupRule;

impl Rule for GroupRule {
    fn name(&self) -> &'static str {
        "group"
    }

    fn matches(&self, line: &str) -> bool {
        GROUP_LINE.is_match(line)
    }

    fn parse(&self, line: &str) -> Option<ParsedLine> {
        let caps = GROUP_LINE.captures(line)?;
        Some(ParsedLine {
            content: caps[1].to_string(),
            style: None,
            indent: 0,
        })
    }

    fn render(&self, parsed: &ParsedLine, sections: &mut SectionStack, out: &mut String) {
        sections.close_at_or_deeper(parsed.indent, out);
        out.push_str(&format!(
            "<div class=\"cd-group\"><div class=\"cd-group-content\">{}</div></div>\n",
            html_escape::encode_text(&parsed.content)
        ));
    }

    fn styles(&self) -> &str {
        GROUP_CSS
    }
}
