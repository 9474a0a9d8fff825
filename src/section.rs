//! Indentation-driven nesting state for `section` containers.
//!
//! A section opens when a `section` line appears and closes implicitly
//! when a later recognized line sits at the same indent or shallower, or
//! explicitly when the region or the input ends. The stack below is the
//! only mutable state of a parse besides the region flag; it is created
//! fresh per parse and is always empty again after `drain`.

use crate::rule::ParsedLine;

/// One open section: the indent level its opening line appeared at.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Frame {
    indent: usize,
}

/// Stack of currently open sections, outermost first.
///
/// Frame indents are non-decreasing bottom to top: `open` closes every
/// frame at or deeper than the new line's indent before pushing, so equal
/// indent means sibling, never nesting.
#[derive(Debug, Default)]
pub struct SectionStack {
    frames: Vec<Frame>,
}

impl SectionStack {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of currently open sections.
    pub fn depth(&self) -> usize {
        self.frames.len()
    }

    /// Close every open section whose recorded indent is `>= indent`,
    /// innermost first. Each closing tag is indented to match its opening
    /// tag.
    pub fn close_at_or_deeper(&mut self, indent: usize, out: &mut String) {
        while let Some(&Frame { indent: open }) = self.frames.last() {
            if open < indent {
                break;
            }
            self.frames.pop();
            out.push_str(&" ".repeat(open));
            out.push_str("</div>\n");
        }
    }

    /// Open a section at the line's indent, closing siblings and deeper
    /// sections first. The container class encodes the nesting depth at
    /// open time; the title element carries the parsed content.
    pub fn open(&mut self, parsed: &ParsedLine, out: &mut String) {
        self.close_at_or_deeper(parsed.indent, out);
        let pad = " ".repeat(parsed.indent);
        let depth = self.frames.len();
        out.push_str(&format!(
            "{pad}<div class=\"cd-section cd-section-depth-{depth}\"{}>\n",
            parsed.style_attr()
        ));
        out.push_str(&format!(
            "{pad}  <div class=\"cd-section-title\">{}</div>\n",
            html_escape::encode_text(&parsed.content)
        ));
        self.frames.push(Frame {
            indent: parsed.indent,
        });
    }

    /// Forced close of everything still open, treating end of input as
    /// indent level 0.
    pub fn drain(&mut self, out: &mut String) {
        self.close_at_or_deeper(0, out);
    }

    /// Discard all state without emitting markup. A new region is a fully
    /// self-contained parse context.
    pub fn reset(&mut self) {
        self.frames.clear();
    }
}
