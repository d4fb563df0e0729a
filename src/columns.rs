//! テーブル列の定義
//!
//! 列見出しと、行から表示値を取り出すアクセサの組。

use crate::model::ResultRow;

#[derive(Clone, Copy)]
pub struct Column {
    pub header: &'static str,
    pub value: fn(&ResultRow) -> &str,
}

pub const COLUMNS: [Column; 2] = [
    Column {
        header: "Filename",
        value: ResultRow::filename,
    },
    Column {
        header: "Predicted Class",
        value: ResultRow::predicted_class,
    },
];

impl Column {
    pub fn cell<'a>(&self, row: &'a ResultRow) -> &'a str {
        (self.value)(row)
    }
}
