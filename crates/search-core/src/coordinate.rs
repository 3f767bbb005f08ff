// search-core/src/coordinate.rs
//! 单元格坐标换算（0 基行列 <-> "B7" 形式）

use crate::error::CoordinateError;

/// 最大列数（XFD）
pub const MAX_COLUMNS: usize = 16_384;
/// 最大行数
pub const MAX_ROWS: usize = 1_048_576;

/// 列号（0 基）转列字母：0 -> "A"，25 -> "Z"，26 -> "AA"
pub fn column_name(col: usize) -> Result<String, CoordinateError> {
    if col >= MAX_COLUMNS {
        return Err(CoordinateError::ColumnOutOfRange(col + 1));
    }

    let mut name = Vec::new();
    let mut n = col + 1;
    while n > 0 {
        let rem = (n - 1) % 26;
        name.push(b'A' + rem as u8);
        n = (n - 1) / 26;
    }
    name.reverse();
    Ok(String::from_utf8_lossy(&name).into_owned())
}

/// 行列（0 基）转单元格名称：(0, 0) -> "A1"，(6, 1) -> "B7"
pub fn cell_name(row: usize, col: usize) -> Result<String, CoordinateError> {
    if row >= MAX_ROWS {
        return Err(CoordinateError::RowOutOfRange(row + 1));
    }
    Ok(format!("{}{}", column_name(col)?, row + 1))
}

/// 换算失败时退回 `R<行>C<列>`（1 基）
pub fn cell_name_or_fallback(row: usize, col: usize) -> String {
    cell_name(row, col).unwrap_or_else(|e| {
        tracing::debug!("坐标换算失败，使用 R/C 形式: {}", e);
        format!("R{}C{}", row + 1, col + 1)
    })
}

/// 单元格名称转行列（0 基），`cell_name` 的逆运算
pub fn parse_cell_name(name: &str) -> Result<(usize, usize), CoordinateError> {
    let invalid = || CoordinateError::Invalid(name.to_string());

    let split = name
        .find(|c: char| c.is_ascii_digit())
        .ok_or_else(invalid)?;
    let (letters, digits) = name.split_at(split);

    if letters.is_empty() || !letters.chars().all(|c| c.is_ascii_alphabetic()) {
        return Err(invalid());
    }
    if digits.starts_with('0') || !digits.chars().all(|c| c.is_ascii_digit()) {
        return Err(invalid());
    }

    let mut col: usize = 0;
    for c in letters.chars() {
        let value = (c.to_ascii_uppercase() as u8 - b'A') as usize + 1;
        col = col
            .checked_mul(26)
            .and_then(|v| v.checked_add(value))
            .ok_or_else(invalid)?;
        if col > MAX_COLUMNS {
            return Err(CoordinateError::ColumnOutOfRange(col));
        }
    }

    let row: usize = digits.parse().map_err(|_| invalid())?;
    if row > MAX_ROWS {
        return Err(CoordinateError::RowOutOfRange(row));
    }

    Ok((row - 1, col - 1))
}
