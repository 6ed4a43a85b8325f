pub mod console_view_model;
pub mod status_bar_view_model;
