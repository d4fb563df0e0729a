//! CSV Results Viewer
//!
//! 画像分類の結果 (results.csv) を読み込み、2列のテーブルで表示する

pub mod app;
pub mod columns;
pub mod config;
pub mod error;
pub mod io;
pub mod logging;
pub mod model;

pub use app::{render_window, ResultsApp};
pub use config::ViewerConfig;
pub use error::{Result, ViewerError};
pub use io::load_results;
pub use model::{LoadResult, LoadWarning, ResultRow};
