// Components module

pub mod error_display;
pub mod layout_panel;

pub use error_display::{
    error_description, retry_on, ErrorDisplay, ErrorDisplayProps, ERROR_TITLE, FALLBACK_DESCRIPTION,
};
pub use layout_panel::{
    load_outcome, reset_outcome, save_outcome, ActionOutcome, LayoutBody, LayoutBodyProps,
    LayoutPanel, LayoutPanelProps, PanelState, ReloadCounter,
};
