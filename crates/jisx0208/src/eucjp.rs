//! EUC-JPの2バイト符号と区点の相互変換。

use crate::row_cell::RowCell;

/// `b`がEUC-JPにおけるJIS X 0208の符号のバイトであれば`true`を返す。
#[inline]
pub const fn is_byte(b: u8) -> bool {
    matches!(b, 0xA1..=0xFE)
}

/// EUC-JPの2バイト符号を区点に変換する。
///
/// 符号が範囲外の場合は`None`を返す。
#[inline]
pub const fn decode(b1: u8, b2: u8) -> Option<RowCell> {
    if is_byte(b1) && is_byte(b2) {
        Some(RowCell::new(b1 - 0xA0, b2 - 0xA0))
    } else {
        None
    }
}

/// 区点をEUC-JPの2バイト符号に変換する。
#[inline]
pub const fn encode(rc: RowCell) -> [u8; 2] {
    [rc.row() + 0xA0, rc.cell() + 0xA0]
}
