use std::fs;
use std::path::PathBuf;

use once_cell::sync::{Lazy, OnceCell};
use regex::Regex;
use tracing::warn;

use crate::rule::{ParsedLine, Rule, nonempty_style};
use crate::section::SectionStack;

static SECTION_LINE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"^(\s*)section\s+"([^"]*)"(?:\s+style="([^"]*)")?\s*$"#)
        .expect("section line pattern")
});

const DEFAULT_SECTION_CSS: &str = r#".cd-section {
    border: 2px solid #4a9eff;
    padding: 8px;
    margin: 5px 0;
    border-radius: 4px;
}

.cd-section-title {
    font-weight: bold;
    color: #2c5ea5;
}

.cd-section-depth-1 {
    border-color: #7db4ff;
}

.cd-section-depth-2 {
    border-color: #b3d3ff;
}

"#;

/// `section "…" [style="…"]`: opens a nested, indentation-scoped
/// container.
///
/// The stylesheet can be overridden by an on-disk CSS file. The read is
/// lazy and cached for the rule's lifetime; a failed read is logged and
/// the compiled-in default substituted, so stylesheet loading never
/// aborts a render.
#[derive(Debug, Default)]
pub struct SectionRule {
    css_path: Option<PathBuf>,
    styles: OnceCell<String>,
}

impl SectionRule {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_css_path(path: PathBuf) -> Self {
        Self {
            css_path: Some(path),
            styles: OnceCell::new(),
        }
    }
}

impl Rule for SectionRule {
    fn name(&self) -> &'static str {
        "section"
    }

    fn matches(&self, line: &str) -> bool {
        SECTION_LINE.is_match(line)
    }

    fn parse(&self, line: &str) -> Option<ParsedLine> {
        let caps = SECTION_LINE.captures(line)?;
        Some(ParsedLine {
            indent: caps[1].chars().count(),
            content: caps[2].to_string(),
            style: nonempty_style(caps.get(3).map(|m| m.as_str())),
        })
    }

    fn render(&self, parsed: &ParsedLine, sections: &mut SectionStack, out: &mut String) {
        sections.open(parsed, out);
    }

    fn styles(&self) -> &str {
        self.styles.get_or_init(|| match &self.css_path {
            Some(path) => fs::read_to_string(path).unwrap_or_else(|err| {
                warn!("failed to load section styles from {}: {err}", path.display());
                DEFAULT_SECTION_CSS.to_string()
            }),
            None => DEFAULT_SECTION_CSS.to_string(),
        })
    }
}
