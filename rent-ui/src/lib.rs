pub mod app;
pub mod i18n;
pub mod logging;
pub mod models;
pub mod screens;
pub mod widgets;

pub use app::EstimatorApp;
