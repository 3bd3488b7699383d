// ui/widgets/mod.rs - UI widgets

pub mod editor_pane;
pub mod message_bar;
pub mod status_bar;
