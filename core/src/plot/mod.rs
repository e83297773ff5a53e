pub mod layout;

pub use layout::{FigureLayout, PanelLimits, Series};
