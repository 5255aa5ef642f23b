//! Page templates, parsed once at startup and shared read-only afterwards.

use std::path::Path;

use anyhow::{Context, Result};
use minijinja::{Environment, Value};
use tracing::info;

use crate::pages::{Page, PageData};

/// Parsed page templates plus the helpers they call.
pub struct TemplateSet {
    env: Environment<'static>,
}

impl TemplateSet {
    /// Loads one file per page from `dir`. Any missing or unparsable file fails the whole load.
    pub fn load(dir: &Path) -> Result<Self> {
        let mut env = Environment::new();
        env.add_function("safe_html", safe_html);
        env.add_function("active_class", active_class);

        for page in Page::ALL {
            let name = page.template_name();
            let path = dir.join(name);
            let source = std::fs::read_to_string(&path)
                .with_context(|| format!("reading template {}", path.display()))?;
            env.add_template_owned(name, source)
                .with_context(|| format!("parsing template {}", path.display()))?;
        }

        info!("Loaded {} templates from {}", Page::ALL.len(), dir.display());
        Ok(Self { env })
    }

    /// Renders `page` to a complete HTML document.
    pub fn render(&self, page: Page, data: &PageData) -> Result<String, minijinja::Error> {
        self.env.get_template(page.template_name())?.render(data)
    }
}

/// Embeds trusted HTML from the store without escaping.
fn safe_html(input: String) -> Value {
    Value::from_safe_string(input)
}

/// Navigation highlight: `"active"` for the current section, empty otherwise.
fn active_class(active: String, target: String) -> String {
    if active == target {
        "active".to_string()
    } else {
        String::new()
    }
}
