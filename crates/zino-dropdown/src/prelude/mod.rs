//! Re-exports of components and common types.

pub use crate::{
    SharedString,
    class::Class,
    config::DropdownConfig,
    error::Error,
    layout::{ArrowLayout, ArrowPosition, MenuLayout, MenuOptions},
    navigation::{Dropdown, DropdownConfigProvider, DropdownMenu, DropdownState},
};
