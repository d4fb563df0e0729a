use std::path::PathBuf;

pub const DEFAULT_CSV_PATH: &str = "results.csv";
pub const WINDOW_TITLE: &str = "CSV Results Viewer";
pub const WINDOW_SIZE: [f32; 2] = [600.0, 400.0];

/// ビューアの固定設定
///
/// ファイルや引数からは読み込まない。入力パスは作業ディレクトリ相対で固定。
#[derive(Debug, Clone, PartialEq)]
pub struct ViewerConfig {
    pub csv_path: PathBuf,
    pub window_title: String,
    pub window_size: [f32; 2],
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            csv_path: PathBuf::from(DEFAULT_CSV_PATH),
            window_title: WINDOW_TITLE.into(),
            window_size: WINDOW_SIZE,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ViewerConfig::default();
        assert_eq!(config.csv_path, PathBuf::from("results.csv"));
        assert_eq!(config.window_title, "CSV Results Viewer");
        assert_eq!(config.window_size, [600.0, 400.0]);
    }

    #[test]
    fn test_csv_path_is_relative() {
        assert!(ViewerConfig::default().csv_path.is_relative());
    }
}
