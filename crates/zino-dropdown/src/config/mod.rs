//! Shared defaults for dropdown menus.

use crate::{
    SharedString,
    error::Error,
    layout::{
        ArrowPosition, DEFAULT_ARROW_HEIGHT, DEFAULT_BACKGROUND, DEFAULT_BOX_SHADOW,
        DEFAULT_RIGHT_ARROW_MARGIN,
    },
};
use serde::Deserialize;
use std::{fs, path::Path};
use toml::Table;

/// Defaults applied to every [`DropdownMenu`](crate::navigation::DropdownMenu)
/// which does not supply its own value.
///
/// The keys are kebab-cased when loaded from TOML:
///
/// ```toml
/// [dropdown]
/// background = "#fafafa"
/// box-shadow = "none"
/// arrow-height = 10
/// arrow-position = "bottom"
/// right-arrow-margin = "16px"
/// class = "dropdown-panel"
/// ```
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, rename_all = "kebab-case", deny_unknown_fields)]
pub struct DropdownConfig {
    /// Background of the panel and the arrow.
    pub background: SharedString,
    /// Box shadow of the panel and the arrow.
    pub box_shadow: SharedString,
    /// Height of the arrow tip in pixels.
    pub arrow_height: f64,
    /// The edge which draws the arrow tip.
    pub arrow_position: ArrowPosition,
    /// The arrow right margin in the right-aligned mode.
    pub right_arrow_margin: SharedString,
    /// A class to apply to the menu panel.
    pub class: Option<SharedString>,
}

impl DropdownConfig {
    /// Parses the config from a TOML document containing only the dropdown keys.
    pub fn from_toml_str(config: &str) -> Result<Self, Error> {
        let config = toml::from_str::<Self>(config)?;
        tracing::debug!(
            arrow_position = config.arrow_position.as_str(),
            arrow_height = config.arrow_height,
            "dropdown config loaded",
        );
        Ok(config)
    }

    /// Extracts the config from the `[dropdown]` table of an application config.
    /// The defaults are used if the table is absent.
    pub fn from_table(table: &Table) -> Result<Self, Error> {
        match table.get("dropdown") {
            Some(value) => {
                let config = value.clone().try_into::<Self>()?;
                tracing::debug!(
                    arrow_position = config.arrow_position.as_str(),
                    arrow_height = config.arrow_height,
                    "dropdown config loaded from the `[dropdown]` table",
                );
                Ok(config)
            }
            None => Ok(Self::default()),
        }
    }

    /// Reads an application config file and extracts its `[dropdown]` table.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, Error> {
        let path = path.as_ref();
        let table = fs::read_to_string(path)
            .map_err(Error::from)
            .and_then(|config| toml::from_str::<Table>(&config).map_err(Error::from))
            .inspect_err(|err| {
                let path = path.display();
                tracing::error!("fail to load the dropdown config from `{path}`: {err}");
            })?;
        Self::from_table(&table)
    }
}

impl Default for DropdownConfig {
    #[inline]
    fn default() -> Self {
        Self {
            background: DEFAULT_BACKGROUND.into(),
            box_shadow: DEFAULT_BOX_SHADOW.into(),
            arrow_height: DEFAULT_ARROW_HEIGHT,
            arrow_position: ArrowPosition::Top,
            right_arrow_margin: DEFAULT_RIGHT_ARROW_MARGIN.into(),
            class: None,
        }
    }
}
