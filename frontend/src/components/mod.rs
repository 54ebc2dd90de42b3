pub mod alerts;
pub mod campus_map;
pub mod cursor;
pub mod diagram;
pub mod energy_chart;
pub mod live_clock;
pub mod navbar;
pub mod process;
pub mod reveal;
pub mod roi_calculator;
pub mod scroll_link;
pub mod stats;
pub mod timeline;

use crate::config::PageConfig;
use yew::prelude::*;

#[hook]
pub fn use_page_config() -> PageConfig {
    use_context::<PageConfig>().unwrap_or_default()
}
