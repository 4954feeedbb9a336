//! Effects - side effects declared by the reducer

use crate::{error::WidgetError, model::QuerySource};

#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    /// Ask the geolocator for the device coordinates
    Locate,
    /// Fetch current weather for the given source
    Fetch(QuerySource),
    /// Show a blocking alert
    Alert(WidgetError),
}
