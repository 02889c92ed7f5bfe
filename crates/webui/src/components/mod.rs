pub mod add_writer_dialog;
pub mod dashboard_page;
pub mod export_panel;
pub mod not_found;
pub mod notification;
pub mod update_stats_dialog;
