//! HTML page rendering via `minijinja`.
//!
//! Templates are compiled into the binary from the crate's `templates/`
//! directory, so the server has no runtime file dependencies. Names end in
//! `.html`, which turns on HTML auto-escaping for every interpolated value.

use minijinja::Environment;
use serde::Serialize;

use crate::error::AdminError;

/// Template names with their sources.
const TEMPLATES: [(&str, &str); 6] = [
    ("layout.html", include_str!("../templates/layout.html")),
    ("cities.html", include_str!("../templates/cities.html")),
    ("city.html", include_str!("../templates/city.html")),
    ("city_form.html", include_str!("../templates/city_form.html")),
    ("delete.html", include_str!("../templates/delete.html")),
    ("not_found.html", include_str!("../templates/not_found.html")),
];

/// Renders admin pages from the embedded templates.
#[derive(Debug)]
pub struct PageRenderer {
    env: Environment<'static>,
}

impl PageRenderer {
    /// Compile every embedded template.
    ///
    /// # Errors
    ///
    /// Returns [`AdminError::Template`] if a template has a syntax error.
    pub fn new() -> Result<Self, AdminError> {
        let mut env = Environment::new();
        for (name, source) in TEMPLATES {
            env.add_template(name, source)?;
        }
        Ok(Self { env })
    }

    /// Render the named template with `ctx`.
    ///
    /// # Errors
    ///
    /// Returns [`AdminError::Template`] if the template is unknown or
    /// rendering fails.
    pub fn render<S: Serialize>(&self, name: &str, ctx: S) -> Result<String, AdminError> {
        Ok(self.env.get_template(name)?.render(ctx)?)
    }
}
