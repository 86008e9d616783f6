//! Daily productivity chart: scale, layout, highlight rule, hover tooltip and the view.

pub mod highlight;
pub mod layout;
pub mod scale;
pub mod tooltip;

mod view;
pub use view::ProductivityChart;
