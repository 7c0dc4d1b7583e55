//! Library page building blocks.

pub mod asset_modal;
pub mod coach_mark;
pub mod library_card;
pub mod library_section;
pub mod navigation;
pub mod onboarding_modal;
pub mod request_access_modal;
pub mod search_bar;
pub mod stats_cards;
