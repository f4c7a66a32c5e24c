//! Launch records dashboard.
//!
//! [`data`] turns a launch table into the two chart series; [`state`] holds
//! the selected parameters and recomputes both series when they change. The
//! remaining modules are the egui shell that draws them.

pub mod app;
pub mod color;
pub mod data;
pub mod state;
pub mod ui;
