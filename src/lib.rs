mod config;
mod manager;
mod render;
mod rule;
mod rules;
mod section;

pub use config::{Config, ConfigError, Dialect, OutputConfig, StylesConfig};
pub use manager::{BlockProcessor, Registry};
pub use render::{expand_blocks, render_html, render_page};
pub use rule::{ParsedLine, Rule};
pub use rules::{GroupRule, SectionContentRule, SectionRule};
pub use section::SectionStack;

/// Registry with the built-in rules (group, section, section-content)
/// registered in dispatch order.
pub fn default_registry() -> Registry {
    registry_with_config(&Config::default())
}

/// Registry with the built-in rules, honoring config overrides such as
/// an external section stylesheet.
pub fn registry_with_config(config: &Config) -> Registry {
    let mut registry = Registry::new();
    registry.register(Box::new(GroupRule));
    let section = match &config.styles.section_css {
        Some(path) => SectionRule::with_css_path(path.clone()),
        None => SectionRule::new(),
    };
    registry.register(Box::new(section));
    registry.register(Box::new(SectionContentRule));
    registry
}
