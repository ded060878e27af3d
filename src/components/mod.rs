pub mod about_dialog;
pub mod app;
pub mod game_over_toast;
pub mod menu_bar;
pub mod score_panel;
pub mod tap_button;
pub mod time_display;
