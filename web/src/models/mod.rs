pub mod nav;

pub use nav::{Breadcrumb, Icon, MENU_ITEMS, MenuItem, NAVIGATION_ITEMS, NavigationItem};
