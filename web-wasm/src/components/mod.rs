pub mod analyze_button;
pub mod files_list;
pub mod header;
pub mod results_panel;
pub mod score_bar;
pub mod upload_area;
pub mod welcome;
