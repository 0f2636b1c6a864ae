//! HTML views. Templates are compiled into the binary and auto-escaped.

use std::sync::Arc;

use tera::{Context, Tera};

const TEMPLATES: &[(&str, &str)] = &[
    ("base.html", include_str!("../templates/base.html")),
    ("posts/list.html", include_str!("../templates/posts/list.html")),
    ("posts/new.html", include_str!("../templates/posts/new.html")),
    ("posts/view.html", include_str!("../templates/posts/view.html")),
    ("posts/edit.html", include_str!("../templates/posts/edit.html")),
    ("users/list.html", include_str!("../templates/users/list.html")),
    ("users/add.html", include_str!("../templates/users/add.html")),
    ("users/edit.html", include_str!("../templates/users/edit.html")),
    ("users/delete.html", include_str!("../templates/users/delete.html")),
];

/// Compiled template set, cheap to clone into every worker.
#[derive(Clone)]
pub struct Views {
    tera: Arc<Tera>,
}

impl Views {
    pub fn new() -> Result<Self, tera::Error> {
        let mut tera = Tera::default();
        tera.add_raw_templates(TEMPLATES.iter().copied())?;
        Ok(Self {
            tera: Arc::new(tera),
        })
    }

    pub fn render(&self, name: &str, ctx: &Context) -> Result<String, tera::Error> {
        self.tera.render(name, ctx)
    }
}
