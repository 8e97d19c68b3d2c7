pub mod app_sidebar;
pub mod chips;
pub mod filter_select;
pub mod header;
pub mod theme_toggle;

pub use app_sidebar::{register_nav, AppSidebar, NavBuilder};
pub use chips::CategoryChips;
pub use filter_select::FilterSelect;
pub use header::AppHeader;
pub use theme_toggle::{Theme, ThemeToggle};
