pub mod charting;
pub mod clock;
pub mod format;
pub mod observer;
pub mod scroll;
pub mod visibility;

use crate::error::{PageError, Result};
use web_sys::Document;

pub fn document() -> Result<Document> {
    web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| PageError::MissingElement("document".to_string()))
}
