use serde::{Deserialize, Serialize};

use super::{
    tooltip::TooltipLayout,
    value_objects::{DepthTheme, ThemeMode, ViewConfig},
};
use crate::domain::{errors::DepthResult, logging::LogLevel};

/// Chart configuration as passed by a host page. Every field is optional in JSON.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DepthChartConfig {
    pub view: ViewConfig,
    pub theme_mode: ThemeMode,
    pub tooltip: TooltipLayout,
    pub log_level: LogLevel,
}

impl DepthChartConfig {
    pub fn from_json(json: &str) -> DepthResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn theme(&self) -> DepthTheme {
        DepthTheme::for_mode(self.theme_mode)
    }
}
