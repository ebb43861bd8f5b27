//! Pure geometry for the dropdown menu.
//!
//! [`MenuOptions`] is the per-render configuration of a menu and
//! [`MenuOptions::resolve`] turns it into the CSS values of each layer.
//! Nothing here depends on the rendering backend.

mod arrow;

pub use arrow::{ArrowLayout, ArrowPosition, arrow_side, clip_height};

use crate::SharedString;

/// Default height of the arrow tip in pixels.
pub const DEFAULT_ARROW_HEIGHT: f64 = 12.0;

/// Default background of the panel and the arrow.
pub const DEFAULT_BACKGROUND: &str = "white";

/// Default box shadow of the panel and the arrow.
pub const DEFAULT_BOX_SHADOW: &str = "0px 1px 10px 0px rgba(0,0,0,0.20)";

/// Default right margin of the arrow in the right-aligned mode.
pub const DEFAULT_RIGHT_ARROW_MARGIN: &str = "13px";

/// Stacking order of the click-away overlay.
pub const OVERLAY_Z_INDEX: u32 = 999;

/// Stacking order of the positioned wrapper.
pub const POSITION_Z_INDEX: u32 = 9999;

/// Stacking order of the menu panel.
pub const MENU_Z_INDEX: u32 = 500;

/// Stacking order of the arrow clip box.
pub const ARROW_Z_INDEX: u32 = 600;

/// Stacking order of the bottom arrow tip.
pub const ARROW_TIP_Z_INDEX: u32 = 601;

/// Configuration of a dropdown menu for a single render.
#[derive(Debug, Clone, PartialEq)]
pub struct MenuOptions {
    /// Width of the panel in pixels.
    pub width: f64,
    /// CSS `left` offset from the trigger. Centered under the trigger if `None`.
    pub left: Option<SharedString>,
    /// Vertical offset from the trigger in pixels.
    pub top: f64,
    /// Horizontal shift applied after positioning.
    pub translate_x: f64,
    /// Vertical shift applied after positioning.
    pub translate_y: f64,
    /// Height of the arrow tip in pixels.
    pub arrow_height: f64,
    /// The edge which draws the arrow tip.
    pub arrow_position: ArrowPosition,
    /// CSS `text-align` of the arrow. Defaults to `center`.
    pub arrow_align: Option<SharedString>,
    /// CSS `left` of the arrow tip. Defaults to `auto`.
    pub arrow_margin_left: Option<SharedString>,
    /// CSS `right` of the arrow tip. Defaults to `auto`.
    pub arrow_margin_right: Option<SharedString>,
    /// Aligns the panel flush with the right edge of the trigger.
    pub align_right: bool,
    /// The arrow right margin used by `align_right` if none is supplied.
    pub right_arrow_margin: SharedString,
}

impl MenuOptions {
    /// Creates a new instance with the default values for everything but the width.
    pub fn new(width: f64) -> Self {
        Self {
            width,
            left: None,
            top: 0.0,
            translate_x: 0.0,
            translate_y: 0.0,
            arrow_height: DEFAULT_ARROW_HEIGHT,
            arrow_position: ArrowPosition::Top,
            arrow_align: None,
            arrow_margin_left: None,
            arrow_margin_right: None,
            align_right: false,
            right_arrow_margin: DEFAULT_RIGHT_ARROW_MARGIN.into(),
        }
    }

    /// Applies the right-aligned mode, if enabled.
    ///
    /// It overrides `left` and `arrow_align`, and fills in `arrow_margin_right`
    /// unless the caller has supplied one.
    #[must_use]
    pub fn aligned(mut self) -> Self {
        if self.align_right {
            self.left = Some(right_aligned_left(self.width).into());
            self.arrow_align = Some("right".into());
            if self.arrow_margin_right.is_none() {
                self.arrow_margin_right = Some(self.right_arrow_margin.clone());
            }
        }
        self
    }

    /// Computes the layout of each layer.
    pub fn resolve(&self) -> MenuLayout {
        let options = self.clone().aligned();
        let width = options.width;
        let left = options
            .left
            .unwrap_or_else(|| centered_left(width).into());
        let arrow = ArrowLayout::new(
            options.arrow_position,
            options.arrow_height,
            options.arrow_align.unwrap_or("center".into()),
            options.arrow_margin_left.unwrap_or("auto".into()),
            options.arrow_margin_right.unwrap_or("auto".into()),
        );
        MenuLayout {
            container_top: format_px(options.top + options.arrow_height),
            width: format_px(width),
            left,
            transform: format!(
                "translateX({}px) translateY({}px)",
                options.translate_x, options.translate_y
            ),
            arrow,
        }
    }
}

/// Computed CSS values of a dropdown menu.
#[derive(Debug, Clone, PartialEq)]
pub struct MenuLayout {
    /// The `top` of the outer container, which reserves room for the arrow.
    pub container_top: String,
    /// The `width` of the positioned wrapper.
    pub width: String,
    /// The `left` of the positioned wrapper.
    pub left: SharedString,
    /// The `transform` of the positioned wrapper.
    pub transform: String,
    /// The arrow tip, if any.
    pub arrow: Option<ArrowLayout>,
}

/// Returns the `left` offset which centers a panel under the trigger.
#[inline]
pub fn centered_left(width: f64) -> String {
    format!("calc(50% - {}px)", width / 2.0)
}

/// Returns the `left` offset which aligns a panel with the right edge of the trigger.
#[inline]
pub fn right_aligned_left(width: f64) -> String {
    format!("calc(100% - {width}px)")
}

/// Formats a pixel length.
#[inline]
pub(crate) fn format_px(value: f64) -> String {
    format!("{value}px")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn it_centers_the_panel() {
        let layout = MenuOptions::new(200.0).resolve();
        assert_eq!(layout.left, "calc(50% - 100px)");
        assert_eq!(layout.width, "200px");
        assert_eq!(layout.container_top, "12px");
        assert_eq!(layout.transform, "translateX(0px) translateY(0px)");

        let arrow = layout.arrow.unwrap();
        assert!(arrow.is_top());
        assert_eq!(arrow.align, "center");
        assert_eq!(arrow.margin_left, "auto");
        assert_eq!(arrow.margin_right, "auto");
    }

    #[test]
    fn it_reserves_room_for_the_arrow() {
        let options = MenuOptions {
            top: 8.0,
            arrow_height: 10.0,
            ..MenuOptions::new(120.0)
        };
        assert_eq!(options.resolve().container_top, "18px");

        let options = MenuOptions {
            top: 8.0,
            arrow_height: 10.0,
            arrow_position: ArrowPosition::Hidden,
            ..MenuOptions::new(120.0)
        };
        let layout = options.resolve();
        assert_eq!(layout.container_top, "18px");
        assert!(layout.arrow.is_none());
    }

    #[test]
    fn it_aligns_right() {
        let options = MenuOptions {
            left: Some("0".into()),
            arrow_align: Some("left".into()),
            align_right: true,
            ..MenuOptions::new(200.0)
        };
        let aligned = options.clone().aligned();
        assert_eq!(aligned.left.as_deref(), Some("calc(100% - 200px)"));
        assert_eq!(aligned.arrow_align.as_deref(), Some("right"));
        assert_eq!(aligned.arrow_margin_right.as_deref(), Some("13px"));

        let layout = options.resolve();
        assert_eq!(layout.left, "calc(100% - 200px)");
        let arrow = layout.arrow.unwrap();
        assert_eq!(arrow.align, "right");
        assert_eq!(arrow.margin_right, "13px");
        assert_eq!(arrow.margin_left, "auto");
    }

    #[test]
    fn it_keeps_the_supplied_arrow_margin() {
        let options = MenuOptions {
            arrow_margin_right: Some("20px".into()),
            align_right: true,
            ..MenuOptions::new(160.0)
        };
        let arrow = options.resolve().arrow.unwrap();
        assert_eq!(arrow.margin_right, "20px");
    }

    #[test]
    fn it_keeps_options_without_right_alignment() {
        let options = MenuOptions {
            left: Some("0".into()),
            translate_x: -4.0,
            translate_y: 2.5,
            ..MenuOptions::new(200.0)
        };
        assert_eq!(options.clone().aligned(), options);

        let layout = options.resolve();
        assert_eq!(layout.left, "0");
        assert_eq!(layout.transform, "translateX(-4px) translateY(2.5px)");
    }
}
