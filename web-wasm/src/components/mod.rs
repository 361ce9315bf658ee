pub mod camera_panel;
pub mod capture_controls;
pub mod debug_panel;
pub mod header;
pub mod results_panel;
