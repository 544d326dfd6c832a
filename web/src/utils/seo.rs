//! SEO meta tag builder

/// One entry of the document head.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MetaTag {
    Title(String),
    CharSet(String),
    /// `<meta name=.. content=..>`; `content` is omitted from the markup when `None`.
    Name { name: String, content: Option<String> },
}

impl MetaTag {
    pub fn name(name: impl Into<String>, content: Option<impl Into<String>>) -> Self {
        Self::Name { name: name.into(), content: content.map(Into::into) }
    }
}

/// Page metadata fed to [`seo`].
#[derive(Debug, Clone, Copy, Default)]
pub struct Seo<'a> {
    pub title: &'a str,
    pub description: Option<&'a str>,
    pub keywords: Option<&'a str>,
    pub image: Option<&'a str>,
    pub twitter_handle: Option<&'a str>,
}

/// Build the ordered meta tags for a page.
///
/// Twitter tags are only emitted with a handle, `og:image` only with an
/// image, and the large image card only when both are present.
pub fn seo(meta: &Seo<'_>) -> Vec<MetaTag> {
    let Seo { title, description, keywords, image, twitter_handle } = *meta;

    let mut tags = vec![
        MetaTag::Title(title.to_string()),
        MetaTag::name("description", description),
        MetaTag::name("keywords", keywords),
        MetaTag::name("og:type", Some("website")),
        MetaTag::name("og:title", Some(title)),
        MetaTag::name("og:description", description),
    ];

    if let Some(handle) = twitter_handle {
        tags.extend([
            MetaTag::name("twitter:creator", Some(handle)),
            MetaTag::name("twitter:site", Some(handle)),
            MetaTag::name("twitter:title", Some(title)),
            MetaTag::name("twitter:description", description),
        ]);
    }

    if let Some(image) = image {
        tags.push(MetaTag::name("og:image", Some(image)));

        if twitter_handle.is_some() {
            tags.push(MetaTag::name("twitter:image", Some(image)));
            tags.push(MetaTag::name("twitter:card", Some("summary_large_image")));
        }
    }

    tags
}
