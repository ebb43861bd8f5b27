use super::format_px;
use crate::{SharedString, error::Error};
use serde::Deserialize;
use std::{f64::consts::SQRT_2, fmt, str::FromStr};

/// The edge of the menu panel which draws the arrow tip.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(try_from = "String")]
pub enum ArrowPosition {
    /// The arrow points up from the top edge.
    #[default]
    Top,
    /// The arrow points down from the bottom edge.
    Bottom,
    /// No arrow is drawn.
    Hidden,
}

impl ArrowPosition {
    /// Parses the position leniently.
    /// Any value other than `top` or `bottom` hides the arrow.
    ///
    /// It runs on every render of a menu, so the rejected value is only logged at
    /// the `debug` level.
    pub fn parse_lenient(position: &str) -> Self {
        position.parse().unwrap_or_else(|err| {
            tracing::debug!("{err}; the arrow will not be rendered");
            Self::Hidden
        })
    }

    /// Returns the position as `str`.
    #[inline]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Top => "top",
            Self::Bottom => "bottom",
            Self::Hidden => "hidden",
        }
    }
}

impl FromStr for ArrowPosition {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "top" => Ok(Self::Top),
            "bottom" => Ok(Self::Bottom),
            _ => Err(Error::InvalidArrowPosition(s.to_owned().into())),
        }
    }
}

impl TryFrom<String> for ArrowPosition {
    type Error = Error;

    #[inline]
    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<&str> for ArrowPosition {
    #[inline]
    fn from(position: &str) -> Self {
        Self::parse_lenient(position)
    }
}

impl From<ArrowPosition> for SharedString {
    #[inline]
    fn from(position: ArrowPosition) -> Self {
        SharedString::Borrowed(position.as_str())
    }
}

impl fmt::Display for ArrowPosition {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Computed styles for the arrow tip: a rotated square clipped to a triangle.
#[derive(Debug, Clone, PartialEq)]
pub struct ArrowLayout {
    /// The edge where the arrow is drawn. Never [`ArrowPosition::Hidden`].
    pub position: ArrowPosition,
    /// Height of the clip box.
    pub clip_height: String,
    /// Offset of the clip box above the panel. Only set for the top arrow.
    pub clip_top: Option<String>,
    /// Side length of the rotated square.
    pub side: String,
    /// Offset of the square inside the clip box. Only set for the bottom arrow.
    pub tip_top: Option<String>,
    /// The `transform` of the square.
    pub transform: String,
    /// The `text-align` of the clip box.
    pub align: SharedString,
    /// The `left` offset of the square.
    pub margin_left: SharedString,
    /// The `right` offset of the square.
    pub margin_right: SharedString,
}

impl ArrowLayout {
    /// Computes the arrow layout, or `None` when the arrow is hidden.
    pub fn new(
        position: ArrowPosition,
        height: f64,
        align: SharedString,
        margin_left: SharedString,
        margin_right: SharedString,
    ) -> Option<Self> {
        let (clip_top, tip_top) = match position {
            ArrowPosition::Top => (Some(format_px(-height)), None),
            ArrowPosition::Bottom => (None, Some(format_px(-(height + 2.0)))),
            ArrowPosition::Hidden => return None,
        };
        let offset_y = height / 2.0;
        Some(Self {
            position,
            clip_height: format_px(clip_height(position, height)),
            clip_top,
            side: format_px(arrow_side(height)),
            tip_top,
            transform: format!("translate(0, {offset_y}px) rotate(45deg)"),
            align,
            margin_left,
            margin_right,
        })
    }

    /// Returns `true` if the arrow points up from the top edge.
    #[inline]
    pub fn is_top(&self) -> bool {
        self.position == ArrowPosition::Top
    }
}

/// Side length of a square whose diagonal half spans the arrow height.
#[inline]
pub fn arrow_side(height: f64) -> f64 {
    (SQRT_2 * height).round()
}

/// Height of the overflow-hidden box which clips the square into a triangle.
#[inline]
pub fn clip_height(position: ArrowPosition, height: f64) -> f64 {
    match position {
        ArrowPosition::Bottom => height + 5.0,
        _ => height,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn it_sizes_the_rotated_square() {
        assert_eq!(arrow_side(12.0), 17.0);
        assert_eq!(arrow_side(10.0), 14.0);
        assert_eq!(arrow_side(0.0), 0.0);
        for height in 0..64 {
            let height = f64::from(height);
            assert_eq!(arrow_side(height), (SQRT_2 * height).round());
        }
    }

    #[test]
    fn it_clips_arrows() {
        let top = ArrowLayout::new(
            ArrowPosition::Top,
            12.0,
            "center".into(),
            "auto".into(),
            "auto".into(),
        )
        .unwrap();
        assert_eq!(top.clip_height, "12px");
        assert_eq!(top.clip_top.as_deref(), Some("-12px"));
        assert_eq!(top.side, "17px");
        assert_eq!(top.tip_top, None);
        assert_eq!(top.transform, "translate(0, 6px) rotate(45deg)");

        let bottom = ArrowLayout::new(
            ArrowPosition::Bottom,
            12.0,
            "center".into(),
            "auto".into(),
            "auto".into(),
        )
        .unwrap();
        assert_eq!(bottom.clip_height, "17px");
        assert_eq!(bottom.clip_top, None);
        assert_eq!(bottom.tip_top.as_deref(), Some("-14px"));

        let odd = ArrowLayout::new(
            ArrowPosition::Top,
            13.0,
            "center".into(),
            "auto".into(),
            "auto".into(),
        )
        .unwrap();
        assert_eq!(odd.transform, "translate(0, 6.5px) rotate(45deg)");
    }

    #[test]
    fn it_hides_unknown_positions() {
        assert_eq!(ArrowPosition::from("top"), ArrowPosition::Top);
        assert_eq!(ArrowPosition::from("bottom"), ArrowPosition::Bottom);
        assert_eq!(ArrowPosition::from("Bottom"), ArrowPosition::Hidden);
        assert_eq!(ArrowPosition::from("left"), ArrowPosition::Hidden);
        assert!("left".parse::<ArrowPosition>().is_err());
        assert_eq!(
            ArrowPosition::parse_lenient(&SharedString::from(ArrowPosition::Bottom)),
            ArrowPosition::Bottom
        );
        assert!(
            ArrowLayout::new(
                ArrowPosition::Hidden,
                12.0,
                "center".into(),
                "auto".into(),
                "auto".into(),
            )
            .is_none()
        );
    }
}
