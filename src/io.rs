use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

use tracing::{debug, info, warn};

use crate::error::{Result, ViewerError};
use crate::model::{LoadResult, LoadWarning, ResultRow};

const FIELD_COUNT: usize = 2;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParsedLine {
    Blank,
    Row(ResultRow),
    Malformed { fields: usize },
}

/// results.csv を読み込む
///
/// 失敗してもエラーは返さない。ファイルを開けない・読めない場合は
/// `CSV read error: ...` を標準出力に1行出し、それまでに読めた行で続行する。
pub fn load_results(path: &Path) -> LoadResult {
    let mut result = LoadResult::default();

    if let Err(err) = read_file(path, &mut result) {
        let warning = LoadWarning::Unreadable {
            message: err.to_string(),
        };
        println!("{warning}");
        warn!(path = %path.display(), error = %err, "results file unreadable");
        result.warnings.push(warning);
    }

    info!(
        path = %path.display(),
        rows = result.rows.len(),
        dropped = result.malformed_count(),
        unreadable = result.is_unreadable(),
        "results loaded"
    );
    result
}

fn read_file(path: &Path, result: &mut LoadResult) -> Result<()> {
    let file = File::open(path).map_err(|e| ViewerError::read(path, e))?;
    // reader は関数を抜けた時点で閉じる（エラー時も同様）
    read_results(BufReader::new(file), result).map_err(|e| ViewerError::read(path, e))
}

/// ヘッダー行を捨て、残りの行を `result` に追加する
///
/// UTF-8 として不正なバイトは U+FFFD に置き換えて読み進める。
/// I/O エラーで中断した場合、それまでに追加した行は残る。
pub fn read_results<R: BufRead>(mut reader: R, result: &mut LoadResult) -> io::Result<()> {
    let mut buf = Vec::new();

    // ヘッダーは内容を検証しない
    if read_line_lossy(&mut reader, &mut buf)?.is_none() {
        return Ok(());
    }

    let mut line_number = 1;
    while let Some(line) = read_line_lossy(&mut reader, &mut buf)? {
        line_number += 1;
        match parse_line(&line) {
            ParsedLine::Blank => {}
            ParsedLine::Row(row) => result.rows.push(row),
            ParsedLine::Malformed { fields } => {
                debug!(line = line_number, fields, "dropping malformed row");
                result.warnings.push(LoadWarning::MalformedRow {
                    line: line_number,
                    fields,
                });
            }
        }
    }

    Ok(())
}

/// 改行 (`\n` / `\r\n`) を除いた1行。入力の終端では `None`。
fn read_line_lossy<R: BufRead>(reader: &mut R, buf: &mut Vec<u8>) -> io::Result<Option<String>> {
    buf.clear();
    if reader.read_until(b'\n', buf)? == 0 {
        return Ok(None);
    }
    if buf.last() == Some(&b'\n') {
        buf.pop();
        if buf.last() == Some(&b'\r') {
            buf.pop();
        }
    }
    Ok(Some(String::from_utf8_lossy(buf).into_owned()))
}

/// 1行を分類する
///
/// 引用符やエスケープは解釈せず、全てのカンマで分割する。
/// 末尾の空フィールドは数えない（`a.jpg,cat,` は2フィールド、`a.jpg,` は1フィールド）。
pub fn parse_line(line: &str) -> ParsedLine {
    if line.trim().is_empty() {
        return ParsedLine::Blank;
    }

    let mut fields: Vec<&str> = line.split(',').collect();
    while fields.last().is_some_and(|f| f.is_empty()) {
        fields.pop();
    }

    if fields.len() != FIELD_COUNT {
        return ParsedLine::Malformed {
            fields: fields.len(),
        };
    }

    ParsedLine::Row(ResultRow::new(fields[0].trim(), fields[1].trim()))
}
