//! 数值文本文件解析
//!
//! 文件格式：每行一组空白分隔的数值。空行跳过；含无效数值的行
//! 整行跳过并记录警告（带行号），不中断解析。文件不可读才是错误。

use crate::error::ShapeFileError;
use std::path::Path;

/// 解析单个数值：必须是有限的 f64
pub fn parse_number(token: &str) -> Result<f64, ShapeFileError> {
    let trimmed = token.trim();
    let value: f64 = trimmed
        .parse()
        .map_err(|_| ShapeFileError::Parse(format!("invalid number format: {trimmed}")))?;

    // from_str 接受 inf/NaN 字面量，这里一并拒绝
    if value.is_nan() || value.is_infinite() {
        return Err(ShapeFileError::Parse(format!(
            "invalid number value: {trimmed}"
        )));
    }
    Ok(value)
}

/// 解析整行为数值序列
fn parse_line(line: &str) -> Result<Vec<f64>, ShapeFileError> {
    line.split_whitespace().map(parse_number).collect()
}

/// 解析整个文件为数值元组列表
pub fn parse_file(path: impl AsRef<Path>) -> Result<Vec<Vec<f64>>, ShapeFileError> {
    let path = path.as_ref();
    tracing::info!(path = %path.display(), "reading shape data file");

    let content = std::fs::read_to_string(path)?;
    let mut parsed = Vec::new();

    for (index, line) in content.lines().enumerate() {
        let line_number = index + 1;
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }

        match parse_line(trimmed) {
            Ok(numbers) => {
                tracing::debug!(line = line_number, count = numbers.len(), "line parsed");
                parsed.push(numbers);
            }
            Err(err) => {
                tracing::warn!(line = line_number, error = %err, "line skipped");
            }
        }
    }

    tracing::info!(valid_lines = parsed.len(), "file parsing completed");
    Ok(parsed)
}
