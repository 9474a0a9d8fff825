//! Rule registry and per-parse line dispatch, including the region
//! delimiter lifecycle.

use crate::config::Dialect;
use crate::rule::Rule;
use crate::section::SectionStack;

pub(crate) const REGION_OPEN: &str = "<div class=\"custom-diagram-block\">\n";
pub(crate) const REGION_CLOSE: &str = "</div>\n";

/// Base stylesheet for the region container itself.
const REGION_CSS: &str = r#".custom-diagram-block {
    border: 1px solid #ccc;
    padding: 10px;
    margin: 10px 0;
    background-color: #f9f9f9;
}

"#;

/// Insertion-ordered, name-keyed rule set.
///
/// Dispatch is first-match in registration order: two rules with
/// overlapping syntaxes shadow one another by position, and that
/// precedence is part of the contract. Registering a name that already
/// exists replaces the rule in place, so an override keeps the
/// original's dispatch position.
#[derive(Default)]
pub struct Registry {
    rules: Vec<Box<dyn Rule>>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, rule: Box<dyn Rule>) {
        match self.rules.iter_mut().find(|r| r.name() == rule.name()) {
            Some(slot) => *slot = rule,
            None => self.rules.push(rule),
        }
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Registered rules in dispatch order.
    pub fn rules(&self) -> impl Iterator<Item = &dyn Rule> {
        self.rules.iter().map(|r| r.as_ref())
    }

    /// Region CSS plus each rule's fragment, in registration order.
    /// Deterministic: repeated calls return identical text.
    pub fn all_styles(&self) -> String {
        let mut css = String::from(REGION_CSS);
        for rule in &self.rules {
            css.push_str(rule.styles());
        }
        css
    }
}

/// Per-parse line processor: owns the region flag and the section stack,
/// borrowing an immutable [`Registry`].
///
/// One processor serves exactly one document pass. Concurrent renders of
/// different documents each need their own processor.
pub struct BlockProcessor<'r> {
    registry: &'r Registry,
    dialect: Dialect,
    in_region: bool,
    sections: SectionStack,
}

impl<'r> BlockProcessor<'r> {
    pub fn new(registry: &'r Registry, dialect: Dialect) -> Self {
        Self {
            registry,
            dialect,
            in_region: false,
            sections: SectionStack::new(),
        }
    }

    pub fn in_region(&self) -> bool {
        self.in_region
    }

    /// Process one line.
    ///
    /// `None` means the line is ordinary document content and belongs to
    /// the host renderer. `Some` carries the markup the line produced,
    /// empty for blank and unrecognized in-region lines.
    pub fn process_line(&mut self, line: &str) -> Option<String> {
        let trimmed = line.trim();

        if trimmed == self.dialect.begin() {
            if self.in_region {
                // The region is not nestable; a second begin is ignored.
                return Some(String::new());
            }
            self.in_region = true;
            self.sections.reset();
            return Some(REGION_OPEN.to_string());
        }

        if !self.in_region {
            return None;
        }

        let mut out = String::new();

        if trimmed == self.dialect.end() {
            self.sections.drain(&mut out);
            out.push_str(REGION_CLOSE);
            self.in_region = false;
            return Some(out);
        }

        // Blank lines never open or close a section.
        if trimmed.is_empty() {
            return Some(out);
        }

        for rule in self.registry.rules() {
            if rule.matches(line) {
                if let Some(parsed) = rule.parse(line) {
                    rule.render(&parsed, &mut self.sections, &mut out);
                }
                return Some(out);
            }
        }

        // No rule matched: dropped silently.
        Some(out)
    }

    /// Forced close at end of input: drains any open sections and closes
    /// the region if the end delimiter never appeared.
    pub fn finish(&mut self) -> Option<String> {
        if !self.in_region {
            return None;
        }
        let mut out = String::new();
        self.sections.drain(&mut out);
        out.push_str(REGION_CLOSE);
        self.in_region = false;
        Some(out)
    }
}
