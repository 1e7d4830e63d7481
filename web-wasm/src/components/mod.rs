//! UIコンポーネント

pub mod action_buttons;
pub mod header;
pub mod metadata_panel;
pub mod progress_bar;
pub mod result_card;
pub mod triage_form;
