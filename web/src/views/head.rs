use maud::{Markup, html};

use crate::utils::MetaTag;

/// `<link>` element of the document head.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkTag {
    pub rel: &'static str,
    pub href: &'static str,
    pub mime_type: Option<&'static str>,
    pub color: Option<&'static str>,
}

impl LinkTag {
    pub const fn new(rel: &'static str, href: &'static str) -> Self {
        Self { rel, href, mime_type: None, color: None }
    }
}

/// Everything rendered inside `<head>`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HeadContent {
    pub meta: Vec<MetaTag>,
    pub links: Vec<LinkTag>,
}

impl HeadContent {
    /// Charset and viewport, plus the shared stylesheet, manifest and icon.
    pub fn base() -> Self {
        Self {
            meta: vec![
                MetaTag::CharSet("utf-8".to_string()),
                MetaTag::name("viewport", Some("width=device-width, initial-scale=1")),
            ],
            links: vec![
                LinkTag::new("stylesheet", "/styles.css"),
                LinkTag { color: Some("#ffffff"), ..LinkTag::new("manifest", "/site.webmanifest") },
                LinkTag {
                    mime_type: Some("image/svg+xml"),
                    ..LinkTag::new("icon", "/logo/favicon.svg")
                },
            ],
        }
    }

    pub fn with_meta(mut self, tags: impl IntoIterator<Item = MetaTag>) -> Self {
        self.meta.extend(tags);
        self
    }
}

pub fn head_content(head: &HeadContent) -> Markup {
    html! {
        @for tag in &head.meta {
            @match tag {
                MetaTag::Title(title) => {
                    title { (title) }
                },
                MetaTag::CharSet(charset) => {
                    meta charset=(charset);
                },
                MetaTag::Name { name, content } => {
                    meta name=(name) content=[content.as_deref()];
                },
            }
        }
        @for link in &head.links {
            link rel=(link.rel) href=(link.href) type=[link.mime_type] color=[link.color];
        }
    }
}
