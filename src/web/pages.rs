//! Page rendering with embedded `minijinja` templates.

use minijinja::Environment;
use serde::Serialize;

const TEMPLATES: [(&str, &str); 7] = [
    ("layout.html", include_str!("../../templates/layout.html")),
    ("posts.html", include_str!("../../templates/posts.html")),
    ("post.html", include_str!("../../templates/post.html")),
    ("login.html", include_str!("../../templates/login.html")),
    (
        "registration.html",
        include_str!("../../templates/registration.html"),
    ),
    ("user.html", include_str!("../../templates/user.html")),
    ("error.html", include_str!("../../templates/error.html")),
];

/// Template environment holding every page of the site.
#[derive(Debug)]
pub struct PageRenderer {
    env: Environment<'static>,
}

impl PageRenderer {
    /// Compiles the embedded templates.
    ///
    /// # Errors
    ///
    /// Returns a [`minijinja::Error`] when a template fails to parse.
    pub fn new() -> Result<Self, minijinja::Error> {
        let mut env = Environment::new();
        for (name, source) in TEMPLATES {
            env.add_template(name, source)?;
        }
        Ok(Self { env })
    }

    /// Renders template `name` with `context`.
    ///
    /// # Errors
    ///
    /// Returns a [`minijinja::Error`] when the template is unknown or fails
    /// to render.
    pub fn render(&self, name: &str, context: impl Serialize) -> Result<String, minijinja::Error> {
        self.env.get_template(name)?.render(context)
    }
}
