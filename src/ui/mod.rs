pub mod cards;
pub mod charts;
pub mod format;
pub mod layout;
pub mod statusbar;
pub mod timerange;

pub use cards::CardSection;
pub use charts::ChartPanel;
pub use layout::LayoutManager;
pub use statusbar::StatusBar;
pub use timerange::{TimeRange, TimeRangeSelector};
