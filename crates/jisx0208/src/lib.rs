//! JIS X 0208の区点と、Shift_JIS・EUC-JPの2バイト符号を相互に変換するためのクレート。
//!
//! 変換は[`Jisx0208`]を通して行う。
//! クレート直下の関数はJIS X 0208:1997の表を使う[`Jisx0208::standard`]への委譲である。
//!
//! ```
//! use jisx0208::{Check, RowCell};
//!
//! assert_eq!(jisx0208::row_cell_to_sjis(1, 1, Check::Bypass), Some([0x81, 0x40]));
//! assert_eq!(jisx0208::sjis_to_row_cell(0x81, 0x40, Check::Bypass), Some(RowCell::new(1, 1)));
//! assert_eq!(jisx0208::row_cell_to_eucjp(1, 1, Check::Bypass), Some([0xA1, 0xA1]));
//! assert_eq!(jisx0208::get_char(16, 1), Some('亜'));
//! ```

#![deny(missing_docs)]

pub mod codec;
pub mod error;
pub mod eucjp;
pub mod halfkana;
pub mod integer;
pub mod row_cell;
pub mod sjis;
pub mod table;
mod utils;

pub use codec::Jisx0208;
pub use error::CodeError;
pub use halfkana::KanaTable;
pub use integer::{normalize_byte, IntegerLike};
pub use row_cell::{Check, RowCell};
pub use table::CharTable;

/// 区点に文字が割り当てられていれば`true`を返す。
///
/// [`Jisx0208::is_assigned`]を参照。
#[inline]
pub fn is_assigned(row: impl IntegerLike, cell: impl IntegerLike) -> bool {
    Jisx0208::standard().is_assigned(row, cell)
}

/// 区点に割り当てられた文字を返す。
///
/// [`Jisx0208::get_char`]を参照。
#[inline]
pub fn get_char(row: impl IntegerLike, cell: impl IntegerLike) -> Option<char> {
    Jisx0208::standard().get_char(row, cell)
}

/// Shift_JISの2バイト符号を区点に変換する。
///
/// [`Jisx0208::sjis_to_row_cell`]を参照。
#[inline]
pub fn sjis_to_row_cell(
    b1: impl IntegerLike,
    b2: impl IntegerLike,
    check: Check,
) -> Option<RowCell> {
    Jisx0208::standard().sjis_to_row_cell(b1, b2, check)
}

/// 区点をShift_JISの2バイト符号に変換する。
///
/// [`Jisx0208::row_cell_to_sjis`]を参照。
#[inline]
pub fn row_cell_to_sjis(
    row: impl IntegerLike,
    cell: impl IntegerLike,
    check: Check,
) -> Option<[u8; 2]> {
    Jisx0208::standard().row_cell_to_sjis(row, cell, check)
}

/// EUC-JPの2バイト符号を区点に変換する。
///
/// [`Jisx0208::eucjp_to_row_cell`]を参照。
#[inline]
pub fn eucjp_to_row_cell(
    b1: impl IntegerLike,
    b2: impl IntegerLike,
    check: Check,
) -> Option<RowCell> {
    Jisx0208::standard().eucjp_to_row_cell(b1, b2, check)
}

/// 区点をEUC-JPの2バイト符号に変換する。
///
/// [`Jisx0208::row_cell_to_eucjp`]を参照。
#[inline]
pub fn row_cell_to_eucjp(
    row: impl IntegerLike,
    cell: impl IntegerLike,
    check: Check,
) -> Option<[u8; 2]> {
    Jisx0208::standard().row_cell_to_eucjp(row, cell, check)
}

/// JIS X 0201片仮名の符号を、対応する全角文字の区点に変換する。
///
/// [`Jisx0208::halfkana_to_row_cell`]を参照。
#[inline]
pub fn halfkana_to_row_cell(code: impl IntegerLike) -> Option<RowCell> {
    Jisx0208::standard().halfkana_to_row_cell(code)
}
