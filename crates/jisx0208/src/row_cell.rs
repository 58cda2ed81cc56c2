//! JIS X 0208の区点。

use std::fmt;

/// JIS X 0208の区点（row-cell）。
///
/// 区・点ともに`1..=94`の範囲のみ保持する。
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RowCell {
    row: u8,
    cell: u8,
}

impl RowCell {
    /// 区・点の最小値。
    pub const MIN: u8 = 1;
    /// 区・点の最大値。
    pub const MAX: u8 = 94;
    /// 区点の総数。
    pub const COUNT: usize = 94 * 94;

    /// 区または点として有効な値であれば`true`を返す。
    #[inline]
    const fn in_range(n: u8) -> bool {
        RowCell::MIN <= n && n <= RowCell::MAX
    }

    /// `RowCell`を生成する。
    ///
    /// # パニック
    ///
    /// `row`か`cell`の値が`1..=94`の範囲にない場合、このメソッドはパニックする。
    #[inline]
    pub const fn new(row: u8, cell: u8) -> RowCell {
        assert!(RowCell::in_range(row));
        assert!(RowCell::in_range(cell));
        RowCell { row, cell }
    }

    /// `row`と`cell`が範囲内であれば`RowCell`を生成する。
    #[inline]
    pub const fn try_new(row: u8, cell: u8) -> Option<RowCell> {
        if RowCell::in_range(row) && RowCell::in_range(cell) {
            Some(RowCell { row, cell })
        } else {
            None
        }
    }

    /// 整数化された区と点から`RowCell`を生成する。
    ///
    /// いずれかが`1..=94`の範囲外であれば`None`を返す。
    #[inline]
    pub fn from_integers(row: i64, cell: i64) -> Option<RowCell> {
        RowCell::try_new(u8::try_from(row).ok()?, u8::try_from(cell).ok()?)
    }

    /// 0から始まる通し番号（`(区 - 1) * 94 + (点 - 1)`）から`RowCell`を生成する。
    #[inline]
    pub const fn from_index(index: usize) -> Option<RowCell> {
        if index >= RowCell::COUNT {
            return None;
        }
        Some(RowCell {
            row: (index / 94) as u8 + 1,
            cell: (index % 94) as u8 + 1,
        })
    }

    /// 区を返す。
    #[inline]
    pub const fn row(self) -> u8 {
        // Safety: `RowCell`を生成できている時点で値は範囲内
        unsafe { crate::utils::assume!(RowCell::in_range(self.row)) }
        self.row
    }

    /// 点を返す。
    #[inline]
    pub const fn cell(self) -> u8 {
        // Safety: `RowCell`を生成できている時点で値は範囲内
        unsafe { crate::utils::assume!(RowCell::in_range(self.cell)) }
        self.cell
    }

    /// 0から始まる通し番号を返す。
    ///
    /// 戻り値は`0..RowCell::COUNT`の範囲である。
    #[inline]
    pub const fn index(self) -> usize {
        (self.row() as usize - 1) * 94 + (self.cell() as usize - 1)
    }

    /// 全ての区点を1区1点から順に返すイテレーターを生成する。
    #[inline]
    pub fn all() -> impl Iterator<Item = RowCell> + Clone {
        (0..RowCell::COUNT).filter_map(RowCell::from_index)
    }
}

impl From<RowCell> for (u8, u8) {
    #[inline]
    fn from(value: RowCell) -> Self {
        (value.row(), value.cell())
    }
}

impl From<RowCell> for [u8; 2] {
    #[inline]
    fn from(value: RowCell) -> Self {
        [value.row(), value.cell()]
    }
}

impl PartialEq<(u8, u8)> for RowCell {
    #[inline]
    fn eq(&self, other: &(u8, u8)) -> bool {
        (self.row, self.cell) == *other
    }
}

impl fmt::Debug for RowCell {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "RowCell({}-{})", self.row, self.cell)
    }
}

impl fmt::Display for RowCell {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}-{}", self.row, self.cell)
    }
}

/// 変換時に区点の割り当てを検証するかどうか。
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Check {
    /// 文字が割り当てられていない区点を不正とする。
    #[default]
    Assigned,
    /// 範囲内であれば割り当ての有無を問わない。
    Bypass,
}

impl From<bool> for Check {
    /// `bypass`が`true`であれば[`Check::Bypass`]を返す。
    #[inline]
    fn from(bypass: bool) -> Check {
        if bypass {
            Check::Bypass
        } else {
            Check::Assigned
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_row_cell_new() {
        let rc = RowCell::new(1, 1);
        assert_eq!(rc.row(), 1);
        assert_eq!(rc.cell(), 1);
        assert_eq!(rc, (1, 1));
        assert_eq!(<(u8, u8)>::from(RowCell::new(16, 1)), (16, 1));
        assert_eq!(<[u8; 2]>::from(RowCell::new(94, 94)), [94, 94]);
    }

    #[test]
    #[should_panic]
    fn test_row_cell_new_zero() {
        RowCell::new(0, 1);
    }

    #[test]
    #[should_panic]
    fn test_row_cell_new_overflow() {
        RowCell::new(1, 95);
    }

    #[test]
    fn test_row_cell_try_new() {
        assert_eq!(RowCell::try_new(1, 94), Some(RowCell::new(1, 94)));
        assert_eq!(RowCell::try_new(0, 1), None);
        assert_eq!(RowCell::try_new(95, 1), None);
        assert_eq!(RowCell::try_new(1, 0), None);
        assert_eq!(RowCell::try_new(1, 95), None);

        let count = (0..=u8::MAX)
            .flat_map(|row| (0..=u8::MAX).map(move |cell| (row, cell)))
            .filter_map(|(row, cell)| RowCell::try_new(row, cell))
            .count();
        assert_eq!(count, RowCell::COUNT);
    }

    #[test]
    fn test_row_cell_from_integers() {
        assert_eq!(RowCell::from_integers(48, 1), Some(RowCell::new(48, 1)));
        assert_eq!(RowCell::from_integers(-1, -1), None);
        assert_eq!(RowCell::from_integers(256 + 1, 1), None);
        assert_eq!(RowCell::from_integers(1, i64::MAX), None);
    }

    #[test]
    fn test_row_cell_index() {
        assert_eq!(RowCell::new(1, 1).index(), 0);
        assert_eq!(RowCell::new(1, 94).index(), 93);
        assert_eq!(RowCell::new(2, 1).index(), 94);
        assert_eq!(RowCell::new(94, 94).index(), RowCell::COUNT - 1);

        assert_eq!(RowCell::from_index(95), Some(RowCell::new(2, 2)));
        assert_eq!(RowCell::from_index(RowCell::COUNT), None);

        for (i, rc) in RowCell::all().enumerate() {
            assert_eq!(rc.index(), i);
            assert_eq!(RowCell::from_index(i), Some(rc));
        }
        assert_eq!(RowCell::all().count(), RowCell::COUNT);
    }

    #[test]
    fn test_row_cell_fmt() {
        assert_eq!(format!("{:?}", RowCell::new(16, 1)), "RowCell(16-1)");
        assert_eq!(RowCell::new(16, 1).to_string(), "16-1");
    }

    #[test]
    fn test_check() {
        assert_eq!(Check::default(), Check::Assigned);
        assert_eq!(Check::from(false), Check::Assigned);
        assert_eq!(Check::from(true), Check::Bypass);
    }
}
