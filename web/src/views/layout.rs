use maud::{Markup, html};

use super::icons::panel_left;
use super::sidebar::app_sidebar;
use crate::i18n::I18n;
use crate::models::{Breadcrumb, MenuItem, NavigationItem};

#[derive(Debug, Clone, Copy, Default)]
pub struct AppLayoutProps<'a> {
    pub breadcrumbs: &'a [Breadcrumb],
    pub navigation_items: &'a [NavigationItem],
    pub menu_items: &'a [MenuItem],
}

/// Application shell: collapsible sidebar, header with navigation menu and
/// breadcrumbs, then the page content.
///
/// The sidebar starts closed; the header trigger toggles it through a
/// checkbox, so no script is needed.
pub fn app_layout(i18n: &I18n, props: &AppLayoutProps<'_>, children: Markup) -> Markup {
    html! {
        div.sidebar-provider {
            input #sidebar-toggle.sidebar-toggle type="checkbox" aria-hidden="true";
            (app_sidebar(i18n, props.menu_items))
            main.app-main {
                header.app-header {
                    div.app-header-inner {
                        label.sidebar-trigger for="sidebar-toggle" title=(i18n.t("Toggle Sidebar")) {
                            (panel_left())
                            span.sr-only { (i18n.t("Toggle Sidebar")) }
                        }

                        @if !props.navigation_items.is_empty() {
                            (navigation_menu(i18n, props.navigation_items))
                        }

                        @if !props.breadcrumbs.is_empty() {
                            (breadcrumbs(i18n, props.breadcrumbs))
                        }
                    }
                }
                div.app-content { (children) }
            }
        }
    }
}

fn navigation_menu(i18n: &I18n, items: &[NavigationItem]) -> Markup {
    html! {
        nav.navigation-menu aria-label="Main" {
            ul.navigation-menu-list {
                @for item in items {
                    li.navigation-menu-item {
                        a.navigation-menu-link href=(item.href) { (i18n.t(item.title)) }
                    }
                }
            }
        }
    }
}

fn breadcrumbs(i18n: &I18n, crumbs: &[Breadcrumb]) -> Markup {
    let last = crumbs.len().saturating_sub(1);

    html! {
        nav.breadcrumb aria-label="breadcrumb" {
            ol.breadcrumb-list {
                @for (index, crumb) in crumbs.iter().enumerate() {
                    @if index > 0 {
                        li.breadcrumb-separator.hide-mobile role="presentation" aria-hidden="true" { "›" }
                    }
                    li.breadcrumb-item.hide-mobile[index == 0] {
                        @if index == last {
                            span.breadcrumb-page role="link" aria-disabled="true" aria-current="page" {
                                (i18n.t(&crumb.title))
                            }
                        } @else {
                            a.breadcrumb-link href=[crumb.href.as_deref()] { (i18n.t(&crumb.title)) }
                        }
                    }
                }
            }
        }
    }
}
