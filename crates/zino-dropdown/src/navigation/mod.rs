//! Dropdown triggers and positioned dropdown menus.

mod dropdown;
mod dropdown_menu;
mod menu;

pub use dropdown::{Dropdown, DropdownProps};
pub use dropdown_menu::{
    DropdownConfigProvider, DropdownConfigProviderProps, DropdownMenu, DropdownMenuProps,
};
pub use menu::DropdownState;
