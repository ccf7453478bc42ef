//! UI components

pub mod backdrop;
pub mod claim_form;
pub mod claim_toasts;
pub mod header;
pub mod live_counter;

pub use backdrop::Backdrop;
pub use claim_form::ClaimCard;
pub use claim_toasts::ClaimToasts;
pub use header::Header;
pub use live_counter::LiveCounterCard;
