use maud::{Markup, html};

use crate::models::Icon;

pub fn icon(icon: Icon) -> Markup {
    match icon {
        Icon::Home => house(),
    }
}

fn house() -> Markup {
    html! {
        svg.icon xmlns="http://www.w3.org/2000/svg" width="24" height="24" viewBox="0 0 24 24"
            fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round"
            stroke-linejoin="round" aria-hidden="true" {
            path d="M15 21v-8a1 1 0 0 0-1-1h-4a1 1 0 0 0-1 1v8" {}
            path d="M3 10a2 2 0 0 1 .709-1.528l7-5.999a2 2 0 0 1 2.582 0l7 5.999A2 2 0 0 1 21 10v9a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2z" {}
        }
    }
}

pub fn panel_left() -> Markup {
    html! {
        svg.icon xmlns="http://www.w3.org/2000/svg" width="24" height="24" viewBox="0 0 24 24"
            fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round"
            stroke-linejoin="round" aria-hidden="true" {
            rect width="18" height="18" x="3" y="3" rx="2" {}
            path d="M9 3v18" {}
        }
    }
}
