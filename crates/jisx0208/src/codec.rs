//! 区点とShift_JIS・EUC-JPの相互変換を行う窓口。

use crate::error::CodeError;
use crate::halfkana::KanaTable;
use crate::integer::IntegerLike;
use crate::row_cell::{Check, RowCell};
use crate::table::CharTable;
use crate::{eucjp, sjis};

/// 文字の表とJIS X 0201片仮名の表を元に変換を行う型。
///
/// 各メソッドはバイトや区点を[`IntegerLike`]な値として受け取り、
/// バイトは下位8ビットに、区点は0方向に切り捨てた整数に正規化してから変換する。
/// 不正な入力に対してパニックすることはなく、`None`を返す。
///
/// `try_`で始まるメソッドは`None`の代わりに理由を示す[`CodeError`]を返す。
#[derive(Debug, Clone, Copy)]
pub struct Jisx0208<'a> {
    chars: &'a CharTable,
    kana: &'a KanaTable,
}

impl Jisx0208<'static> {
    /// JIS X 0208:1997の表を使う`Jisx0208`を返す。
    #[inline]
    pub fn standard() -> Jisx0208<'static> {
        Jisx0208::new(CharTable::standard(), KanaTable::standard())
    }
}

impl Default for Jisx0208<'static> {
    fn default() -> Self {
        Jisx0208::standard()
    }
}

impl<'a> Jisx0208<'a> {
    /// 与えられた表を使う`Jisx0208`を生成する。
    #[inline]
    pub const fn new(chars: &'a CharTable, kana: &'a KanaTable) -> Jisx0208<'a> {
        Jisx0208 { chars, kana }
    }

    /// 文字の表を返す。
    #[inline]
    pub fn chars(&self) -> &'a CharTable {
        self.chars
    }

    /// JIS X 0201片仮名の表を返す。
    #[inline]
    pub fn kana(&self) -> &'a KanaTable {
        self.kana
    }

    /// 区点に文字が割り当てられていれば`true`を返す。
    ///
    /// 区点が範囲外の場合や整数として解釈できない場合は`false`を返す。
    ///
    /// # サンプル
    ///
    /// ```
    /// use jisx0208::Jisx0208;
    ///
    /// let jis = Jisx0208::standard();
    /// assert!(jis.is_assigned(16, 1));
    /// assert!(jis.is_assigned("16", 1.5));
    /// assert!(!jis.is_assigned(2, 15));
    /// assert!(!jis.is_assigned(0, 1));
    /// ```
    #[inline]
    pub fn is_assigned(&self, row: impl IntegerLike, cell: impl IntegerLike) -> bool {
        self.get_char(row, cell).is_some()
    }

    /// 区点に割り当てられた文字を返す。
    ///
    /// 未割り当ての区点や範囲外の場合は`None`を返す。
    pub fn get_char(&self, row: impl IntegerLike, cell: impl IntegerLike) -> Option<char> {
        let rc = RowCell::from_integers(row.to_integer()?, cell.to_integer()?)?;
        self.chars.get(rc)
    }

    /// Shift_JISの2バイト符号を区点に変換する。
    ///
    /// # サンプル
    ///
    /// ```
    /// use jisx0208::{Check, Jisx0208, RowCell};
    ///
    /// let jis = Jisx0208::standard();
    /// assert_eq!(jis.sjis_to_row_cell(0x88, 0x9F, Check::Assigned), Some(RowCell::new(16, 1)));
    /// // 0x81AD（2区15点）は未割り当て
    /// assert_eq!(jis.sjis_to_row_cell(0x81, 0xAD, Check::Assigned), None);
    /// assert_eq!(jis.sjis_to_row_cell(0x81, 0xAD, Check::Bypass), Some(RowCell::new(2, 15)));
    /// assert_eq!(jis.sjis_to_row_cell(0x81, 0x7F, Check::Bypass), None);
    /// ```
    #[inline]
    pub fn sjis_to_row_cell(
        &self,
        b1: impl IntegerLike,
        b2: impl IntegerLike,
        check: Check,
    ) -> Option<RowCell> {
        ok_or_log(self.try_sjis_to_row_cell(b1, b2, check))
    }

    /// Shift_JISの2バイト符号を区点に変換する。
    pub fn try_sjis_to_row_cell(
        &self,
        b1: impl IntegerLike,
        b2: impl IntegerLike,
        check: Check,
    ) -> Result<RowCell, CodeError> {
        let bytes = [b1.to_byte(), b2.to_byte()];
        let rc = sjis::decode(bytes[0], bytes[1]).ok_or(CodeError::InvalidBytes(bytes))?;
        self.check(rc, check)
    }

    /// 区点をShift_JISの2バイト符号に変換する。
    ///
    /// # サンプル
    ///
    /// ```
    /// use jisx0208::{Check, Jisx0208};
    ///
    /// let jis = Jisx0208::standard();
    /// assert_eq!(jis.row_cell_to_sjis(1, 1, Check::Bypass), Some([0x81, 0x40]));
    /// assert_eq!(jis.row_cell_to_sjis(84, 6, Check::Assigned), Some([0xEA, 0xA4]));
    /// assert_eq!(jis.row_cell_to_sjis(84, 7, Check::Assigned), None);
    /// assert_eq!(jis.row_cell_to_sjis(84, 7, Check::Bypass), Some([0xEA, 0xA5]));
    /// ```
    #[inline]
    pub fn row_cell_to_sjis(
        &self,
        row: impl IntegerLike,
        cell: impl IntegerLike,
        check: Check,
    ) -> Option<[u8; 2]> {
        ok_or_log(self.try_row_cell_to_sjis(row, cell, check))
    }

    /// 区点をShift_JISの2バイト符号に変換する。
    pub fn try_row_cell_to_sjis(
        &self,
        row: impl IntegerLike,
        cell: impl IntegerLike,
        check: Check,
    ) -> Result<[u8; 2], CodeError> {
        let rc = self.check(to_row_cell(row, cell)?, check)?;
        Ok(sjis::encode(rc))
    }

    /// EUC-JPの2バイト符号を区点に変換する。
    ///
    /// # サンプル
    ///
    /// ```
    /// use jisx0208::{Check, Jisx0208, RowCell};
    ///
    /// let jis = Jisx0208::standard();
    /// assert_eq!(jis.eucjp_to_row_cell(0xB0, 0xA1, Check::Assigned), Some(RowCell::new(16, 1)));
    /// assert_eq!(jis.eucjp_to_row_cell(0xA9, 0xA1, Check::Assigned), None);
    /// assert_eq!(jis.eucjp_to_row_cell(0xA9, 0xA1, Check::Bypass), Some(RowCell::new(9, 1)));
    /// ```
    #[inline]
    pub fn eucjp_to_row_cell(
        &self,
        b1: impl IntegerLike,
        b2: impl IntegerLike,
        check: Check,
    ) -> Option<RowCell> {
        ok_or_log(self.try_eucjp_to_row_cell(b1, b2, check))
    }

    /// EUC-JPの2バイト符号を区点に変換する。
    pub fn try_eucjp_to_row_cell(
        &self,
        b1: impl IntegerLike,
        b2: impl IntegerLike,
        check: Check,
    ) -> Result<RowCell, CodeError> {
        let bytes = [b1.to_byte(), b2.to_byte()];
        let rc = eucjp::decode(bytes[0], bytes[1]).ok_or(CodeError::InvalidBytes(bytes))?;
        self.check(rc, check)
    }

    /// 区点をEUC-JPの2バイト符号に変換する。
    ///
    /// # サンプル
    ///
    /// ```
    /// use jisx0208::{Check, Jisx0208};
    ///
    /// let jis = Jisx0208::standard();
    /// assert_eq!(jis.row_cell_to_eucjp(1, 1, Check::Bypass), Some([0xA1, 0xA1]));
    /// assert_eq!(jis.row_cell_to_eucjp(95, 1, Check::Bypass), None);
    /// ```
    #[inline]
    pub fn row_cell_to_eucjp(
        &self,
        row: impl IntegerLike,
        cell: impl IntegerLike,
        check: Check,
    ) -> Option<[u8; 2]> {
        ok_or_log(self.try_row_cell_to_eucjp(row, cell, check))
    }

    /// 区点をEUC-JPの2バイト符号に変換する。
    pub fn try_row_cell_to_eucjp(
        &self,
        row: impl IntegerLike,
        cell: impl IntegerLike,
        check: Check,
    ) -> Result<[u8; 2], CodeError> {
        let rc = self.check(to_row_cell(row, cell)?, check)?;
        Ok(eucjp::encode(rc))
    }

    /// JIS X 0201片仮名の符号を、対応する全角文字の区点に変換する。
    ///
    /// # サンプル
    ///
    /// ```
    /// use jisx0208::{Jisx0208, RowCell};
    ///
    /// let jis = Jisx0208::standard();
    /// // ｱ → ア
    /// assert_eq!(jis.halfkana_to_row_cell(0xB1), Some(RowCell::new(5, 2)));
    /// assert_eq!(jis.halfkana_to_row_cell(-79), Some(RowCell::new(5, 2)));
    /// assert_eq!(jis.halfkana_to_row_cell(0xE0), None);
    /// ```
    #[inline]
    pub fn halfkana_to_row_cell(&self, code: impl IntegerLike) -> Option<RowCell> {
        ok_or_log(self.try_halfkana_to_row_cell(code))
    }

    /// JIS X 0201片仮名の符号を、対応する全角文字の区点に変換する。
    pub fn try_halfkana_to_row_cell(&self, code: impl IntegerLike) -> Result<RowCell, CodeError> {
        let code = code.to_byte();
        self.kana.get(code).ok_or(CodeError::InvalidHalfKana(code))
    }

    /// `check`に従い区点の割り当てを検証する。
    #[inline]
    fn check(&self, rc: RowCell, check: Check) -> Result<RowCell, CodeError> {
        match check {
            Check::Bypass => Ok(rc),
            Check::Assigned if self.chars.is_assigned(rc) => Ok(rc),
            Check::Assigned => Err(CodeError::Unassigned(rc)),
        }
    }
}

/// 区と点を整数化して`RowCell`にする。
fn to_row_cell(row: impl IntegerLike, cell: impl IntegerLike) -> Result<RowCell, CodeError> {
    let (row, cell) = (row.to_integer(), cell.to_integer());
    let rc = match (row, cell) {
        (Some(r), Some(c)) => RowCell::from_integers(r, c),
        _ => None,
    };
    rc.ok_or(CodeError::OutOfRange { row, cell })
}

#[inline]
fn ok_or_log<T>(result: Result<T, CodeError>) -> Option<T> {
    match result {
        Ok(v) => Some(v),
        Err(e) => {
            log::debug!("invalid code: {}", e);
            None
        }
    }
}
