use std::fmt;

/// results.csv の1行（ファイル名, 予測クラス）
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResultRow {
    filename: String,
    predicted_class: String,
}

impl ResultRow {
    pub fn new(filename: impl Into<String>, predicted_class: impl Into<String>) -> Self {
        Self {
            filename: filename.into(),
            predicted_class: predicted_class.into(),
        }
    }

    pub fn filename(&self) -> &str {
        &self.filename
    }

    pub fn predicted_class(&self) -> &str {
        &self.predicted_class
    }
}

/// 読み込み中に捨てた内容の記録。画面には表示しない。
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadWarning {
    /// ファイルを開けない、または読み込み途中で失敗した
    Unreadable { message: String },
    /// カンマ区切りのフィールド数が2でない行（行番号は1始まり）
    MalformedRow { line: usize, fields: usize },
}

impl fmt::Display for LoadWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoadWarning::Unreadable { message } => write!(f, "CSV read error: {message}"),
            LoadWarning::MalformedRow { line, fields } => {
                write!(f, "line {line}: expected 2 fields, found {fields}")
            }
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoadResult {
    pub rows: Vec<ResultRow>,
    pub warnings: Vec<LoadWarning>,
}

impl LoadResult {
    pub fn is_unreadable(&self) -> bool {
        self.warnings
            .iter()
            .any(|w| matches!(w, LoadWarning::Unreadable { .. }))
    }

    pub fn malformed_count(&self) -> usize {
        self.warnings
            .iter()
            .filter(|w| matches!(w, LoadWarning::MalformedRow { .. }))
            .count()
    }
}
