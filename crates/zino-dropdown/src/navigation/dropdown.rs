use crate::class::Class;
use dioxus::prelude::*;

/// A positioning anchor which wraps the trigger and the [`DropdownMenu`](super::DropdownMenu).
pub fn Dropdown(props: DropdownProps) -> Element {
    let class = Class::new("dropdown").merge(&props.class);
    rsx! {
        div {
            class: class,
            display: "inline-block",
            vertical_align: "top",
            { props.children }
        }
    }
}

/// The [`Dropdown`] properties struct for the configuration of the component.
#[derive(Clone, PartialEq, Props)]
pub struct DropdownProps {
    /// Extra classes merged with the base `dropdown` class.
    #[props(into, default)]
    pub class: Class,
    /// The trigger and the menu to render within the component.
    children: Element,
}
