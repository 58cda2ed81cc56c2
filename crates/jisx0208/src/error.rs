//! 変換で発生するエラー。

use thiserror::Error;

use crate::row_cell::RowCell;

/// 符号や区点を変換できなかった理由。
///
/// 数値として解釈できない入力は、バイトであれば0として、
/// 区点であれば範囲外として扱われるため、専用のエラーは存在しない。
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum CodeError {
    /// 2バイト符号が符号化方式の範囲外である。
    ///
    /// 内包する値は正規化後のバイトである。
    #[error("invalid byte sequence: 0x{:02X} 0x{:02X}", .0[0], .0[1])]
    InvalidBytes([u8; 2]),

    /// JIS X 0201片仮名の範囲外の符号である。
    ///
    /// 内包する値は正規化後のバイトである。
    #[error("invalid halfwidth katakana: 0x{0:02X}")]
    InvalidHalfKana(u8),

    /// 区点が`1..=94`の範囲外である。
    ///
    /// 整数として解釈できなかった値は`None`となる。
    #[error("row-cell out of range: {row:?}-{cell:?}")]
    OutOfRange {
        /// 整数化された区。
        row: Option<i64>,
        /// 整数化された点。
        cell: Option<i64>,
    },

    /// 区点に文字が割り当てられていない。
    #[error("unassigned row-cell: {0}")]
    Unassigned(RowCell),
}
