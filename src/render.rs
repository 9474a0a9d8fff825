//! Parse drivers: walk a document's lines, feed them through the block
//! processor, and assemble the final output string.

use pulldown_cmark::{Options, Parser, html};

use crate::config::{Config, Dialect};
use crate::manager::{BlockProcessor, Registry};

const DOCUMENT_OPEN: &str = "<div class=\"cd-document\">\n";
const DOCUMENT_CLOSE: &str = "</div>\n";

/// Expand diagram regions, copying every other line through verbatim.
///
/// The output is wrapped in one outer `cd-document` container. Input that
/// ends inside a region is force-closed, so the markup is balanced even
/// for truncated documents.
pub fn expand_blocks(source: &str, registry: &Registry, dialect: Dialect) -> String {
    let mut processor = BlockProcessor::new(registry, dialect);
    let mut out = String::from(DOCUMENT_OPEN);

    for line in source.lines() {
        match processor.process_line(line) {
            Some(fragment) => out.push_str(&fragment),
            None => {
                out.push_str(line);
                out.push('\n');
            }
        }
    }

    if let Some(fragment) = processor.finish() {
        out.push_str(&fragment);
    }

    out.push_str(DOCUMENT_CLOSE);
    out
}

/// Render a whole document to HTML: ordinary markdown through
/// pulldown-cmark, diagram regions through the block engine.
pub fn render_html(source: &str, registry: &Registry, config: &Config) -> String {
    let mut processor = BlockProcessor::new(registry, config.dialect);
    let mut out = String::from(DOCUMENT_OPEN);
    let mut pending = String::new();

    for line in source.lines() {
        match processor.process_line(line) {
            Some(fragment) => {
                flush_markdown(&mut pending, &mut out);
                out.push_str(&fragment);
            }
            None => {
                pending.push_str(line);
                pending.push('\n');
            }
        }
    }

    flush_markdown(&mut pending, &mut out);
    if let Some(fragment) = processor.finish() {
        out.push_str(&fragment);
    }

    out.push_str(DOCUMENT_CLOSE);
    out
}

/// Standalone HTML document with the aggregated stylesheet injected into
/// `<head>`, ready to open in a browser.
pub fn render_page(source: &str, registry: &Registry, config: &Config) -> String {
    let body = render_html(source, registry, config);
    format!(
        "<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n\
         <title>{}</title>\n<style>\n{}</style>\n</head>\n<body>\n{}</body>\n</html>\n",
        html_escape::encode_text(&config.output.title),
        registry.all_styles(),
        body,
    )
}

fn flush_markdown(pending: &mut String, out: &mut String) {
    if pending.is_empty() {
        return;
    }
    let mut options = Options::empty();
    options.insert(Options::ENABLE_TABLES);
    options.insert(Options::ENABLE_TASKLISTS);
    let parser = Parser::new_ext(pending.as_str(), options);
    html::push_html(out, parser);
    pending.clear();
}
