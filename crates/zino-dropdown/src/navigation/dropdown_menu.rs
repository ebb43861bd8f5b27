use crate::{
    SharedString,
    class::Class,
    config::DropdownConfig,
    layout::{
        ARROW_TIP_Z_INDEX, ARROW_Z_INDEX, ArrowLayout, ArrowPosition, MENU_Z_INDEX, MenuOptions,
        OVERLAY_Z_INDEX, POSITION_Z_INDEX,
    },
};
use dioxus::prelude::*;

/// A popup menu positioned beneath the trigger of a [`Dropdown`](super::Dropdown).
///
/// The menu is stateless: it is shown while `open` is `true`. Clicking anywhere
/// outside the menu hits a full-viewport overlay which calls `on_dismiss`.
/// Closing the menu is up to the caller.
pub fn DropdownMenu(props: DropdownMenuProps) -> Element {
    let config = try_use_context::<Signal<DropdownConfig>>()
        .map(|config| (*config.read()).clone())
        .unwrap_or_default();
    let layout = props.options(&config).resolve();
    let background = or_config(props.background, config.background);
    let box_shadow = or_config(props.box_shadow, config.box_shadow);
    let class = if props.class.is_empty() {
        config.class.map(Class::from).unwrap_or_default()
    } else {
        props.class
    };
    let (arrow_up, arrow_down) = match layout.arrow {
        Some(arrow) if arrow.is_top() => (Some(arrow), None),
        Some(arrow) => (None, Some(arrow)),
        None => (None, None),
    };
    let open = props.open;
    let on_dismiss = props.on_dismiss;
    rsx! {
        div {
            "data-id": "dropdown-menu",
            display: if !open { "none" },
            position: "relative",
            top: "{layout.container_top}",
            if open {
                div {
                    "data-id": "dropdown-overlay",
                    position: "fixed",
                    z_index: "{OVERLAY_Z_INDEX}",
                    top: "0",
                    right: "0",
                    bottom: "0",
                    left: "0",
                    onclick: move |event| forward_dismiss(on_dismiss.as_ref(), event),
                }
                div {
                    position: "absolute",
                    width: "{layout.width}",
                    left: "{layout.left}",
                    transform: "{layout.transform}",
                    z_index: "{POSITION_Z_INDEX}",
                    if let Some(arrow) = arrow_up {
                        MenuArrowUp {
                            arrow: arrow,
                            background: background.clone(),
                            box_shadow: box_shadow.clone(),
                        }
                    }
                    div {
                        class: if !class.is_empty() { "{class}" },
                        position: "relative",
                        text_align: "left",
                        z_index: "{MENU_Z_INDEX}",
                        background: "{background}",
                        box_shadow: "{box_shadow}",
                        { props.children }
                    }
                    if let Some(arrow) = arrow_down {
                        MenuArrowDown {
                            arrow: arrow,
                            background: background.clone(),
                            box_shadow: box_shadow.clone(),
                        }
                    }
                }
            }
        }
    }
}

/// The [`DropdownMenu`] properties struct for the configuration of the component.
///
/// Empty strings leave a value unset.
#[derive(Clone, PartialEq, Props)]
pub struct DropdownMenuProps {
    /// A flag to determine whether the menu is shown or not.
    #[props(default)]
    pub open: bool,
    /// Width of the menu in pixels. It is required to position the menu.
    #[props(into)]
    pub width: f64,
    /// The CSS `left` offset from the trigger. The menu is centered by default,
    /// and `left: "0"` aligns it with the left edge of the trigger.
    #[props(into, default)]
    pub left: SharedString,
    /// Moves the menu and the arrow down, in pixels.
    #[props(into, default)]
    pub top: f64,
    /// Horizontal shift in pixels.
    #[props(into, default)]
    pub translate_x: f64,
    /// Vertical shift in pixels.
    #[props(into, default)]
    pub translate_y: f64,
    /// Height of the arrow tip in pixels. Defaults to 12.
    #[props(into)]
    pub arrow_height: Option<f64>,
    /// The edge of the arrow: `top` | `bottom`. Any other value hides the arrow.
    #[props(into, default)]
    pub arrow_position: SharedString,
    /// The `text-align` of the arrow: `left` | `center` | `right`.
    #[props(into, default)]
    pub arrow_align: SharedString,
    /// The CSS `left` of the arrow tip.
    #[props(into, default)]
    pub arrow_margin_left: SharedString,
    /// The CSS `right` of the arrow tip.
    #[props(into, default)]
    pub arrow_margin_right: SharedString,
    /// Background of the menu and the arrow.
    #[props(into, default)]
    pub background: SharedString,
    /// Box shadow of the menu and the arrow.
    #[props(into, default)]
    pub box_shadow: SharedString,
    /// A class to apply to the menu panel.
    #[props(into, default)]
    pub class: Class,
    /// Aligns the menu with the right edge of the trigger.
    #[props(default)]
    pub align_right: bool,
    /// An event handler to be called when the user clicks outside the menu.
    pub on_dismiss: Option<EventHandler<MouseEvent>>,
    /// The menu items to render while the menu is open.
    children: Element,
}

impl DropdownMenuProps {
    /// Collects the geometry options, falling back to the provided config.
    fn options(&self, config: &DropdownConfig) -> MenuOptions {
        let arrow_position = if self.arrow_position.is_empty() {
            config.arrow_position
        } else {
            ArrowPosition::parse_lenient(&self.arrow_position)
        };
        MenuOptions {
            width: self.width,
            left: non_empty(&self.left),
            top: self.top,
            translate_x: self.translate_x,
            translate_y: self.translate_y,
            arrow_height: self.arrow_height.unwrap_or(config.arrow_height),
            arrow_position,
            arrow_align: non_empty(&self.arrow_align),
            arrow_margin_left: non_empty(&self.arrow_margin_left),
            arrow_margin_right: non_empty(&self.arrow_margin_right),
            align_right: self.align_right,
            right_arrow_margin: config.right_arrow_margin.clone(),
        }
    }
}

/// Forwards a click on the overlay to the dismiss handler, if any.
pub(crate) fn forward_dismiss<T: 'static>(handler: Option<&EventHandler<T>>, event: T) {
    if let Some(handler) = handler {
        handler.call(event);
    }
}

#[inline]
fn non_empty(value: &SharedString) -> Option<SharedString> {
    (!value.is_empty()).then(|| value.clone())
}

#[inline]
fn or_config(value: SharedString, default: SharedString) -> SharedString {
    if value.is_empty() { default } else { value }
}

/// An arrow tip above the top edge of the menu.
fn MenuArrowUp(props: MenuArrowProps) -> Element {
    let arrow = props.arrow;
    let clip_top = arrow.clip_top.unwrap_or_default();
    rsx! {
        div {
            "data-id": "dropdown-arrow-up",
            z_index: "{ARROW_Z_INDEX}",
            position: "absolute",
            width: "100%",
            height: "{arrow.clip_height}",
            top: "{clip_top}",
            text_align: "{arrow.align}",
            overflow: "hidden",
            div {
                display: "inline-block",
                position: "relative",
                width: "{arrow.side}",
                height: "{arrow.side}",
                transform: "{arrow.transform}",
                border_radius: "2px 0 0 0",
                background: "{props.background}",
                left: "{arrow.margin_left}",
                right: "{arrow.margin_right}",
                box_shadow: "{props.box_shadow}",
            }
        }
    }
}

/// An arrow tip below the bottom edge of the menu.
fn MenuArrowDown(props: MenuArrowProps) -> Element {
    let arrow = props.arrow;
    let tip_top = arrow.tip_top.unwrap_or_default();
    rsx! {
        div {
            "data-id": "dropdown-arrow-down",
            z_index: "{ARROW_Z_INDEX}",
            width: "100%",
            height: "{arrow.clip_height}",
            text_align: "{arrow.align}",
            overflow: "hidden",
            div {
                display: "inline-block",
                position: "relative",
                width: "{arrow.side}",
                height: "{arrow.side}",
                transform: "{arrow.transform}",
                border_radius: "2px 0 0 0",
                background: "{props.background}",
                box_shadow: "{props.box_shadow}",
                top: "{tip_top}",
                left: "{arrow.margin_left}",
                right: "{arrow.margin_right}",
                z_index: "{ARROW_TIP_Z_INDEX}",
            }
        }
    }
}

/// The properties shared by [`MenuArrowUp`] and [`MenuArrowDown`].
#[derive(Clone, PartialEq, Props)]
struct MenuArrowProps {
    /// The computed arrow geometry.
    arrow: ArrowLayout,
    /// Background of the arrow tip.
    #[props(into)]
    background: SharedString,
    /// Box shadow of the arrow tip.
    #[props(into)]
    box_shadow: SharedString,
}

/// Provides a [`DropdownConfig`] to every [`DropdownMenu`] rendered within it.
///
/// The config is kept in a signal, so menus re-render when the prop changes.
pub fn DropdownConfigProvider(props: DropdownConfigProviderProps) -> Element {
    let mut config = use_signal(|| props.config.clone());
    if *config.peek() != props.config {
        config.set(props.config.clone());
    }
    use_context_provider(|| config);
    rsx! {
        { props.children }
    }
}

/// The [`DropdownConfigProvider`] properties struct for the configuration of the component.
#[derive(Clone, PartialEq, Props)]
pub struct DropdownConfigProviderProps {
    /// The defaults to provide.
    pub config: DropdownConfig,
    /// The children to render within the component.
    children: Element,
}
