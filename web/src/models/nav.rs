/// Top navigation menu entry. `title` is a message id.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavigationItem {
    pub title: &'static str,
    pub href: &'static str,
}

/// Sidebar menu entry. `title` is a message id.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MenuItem {
    pub title: &'static str,
    pub url: &'static str,
    pub icon: Icon,
}

/// Icons available to sidebar entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Icon {
    Home,
}

/// Breadcrumb trail entry. `title` is a message id; the last crumb renders
/// as the current page whether or not it has an `href`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Breadcrumb {
    pub title: String,
    pub href: Option<String>,
}

impl Breadcrumb {
    pub fn link(title: impl Into<String>, href: impl Into<String>) -> Self {
        Self { title: title.into(), href: Some(href.into()) }
    }

    pub fn page(title: impl Into<String>) -> Self {
        Self { title: title.into(), href: None }
    }
}

pub const NAVIGATION_ITEMS: &[NavigationItem] = &[
    NavigationItem { title: "Home", href: "/" },
    NavigationItem { title: "About", href: "/about" },
    NavigationItem { title: "Contact", href: "/contact" },
];

pub const MENU_ITEMS: &[MenuItem] = &[MenuItem { title: "Home", url: "/", icon: Icon::Home }];
