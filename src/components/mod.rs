pub mod sidebar;

pub use sidebar::{NavItem, NavSidebar, NavSidebarProps};
