//! Widgets for the Railplan TUI

pub mod form;
pub mod header;
pub mod proposal;
pub mod status_bar;

pub use form::FormView;
pub use header::MainHeader;
pub use proposal::ProposalView;
pub use status_bar::StatusBar;
