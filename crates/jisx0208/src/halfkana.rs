//! JIS X 0201片仮名とJIS X 0208の区点の対応。

use crate::row_cell::RowCell;

const LEN: usize = 0xDF - 0xA1 + 1;

/// JIS X 0201片仮名（`0xA1..=0xDF`）の各符号に対応する区点の表。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KanaTable([RowCell; LEN]);

/// `RowCell::new`の短縮。
const fn rc(row: u8, cell: u8) -> RowCell {
    RowCell::new(row, cell)
}

impl KanaTable {
    /// 表の最初の符号。
    pub const FIRST: u8 = 0xA1;
    /// 表の最後の符号。
    pub const LAST: u8 = 0xDF;
    /// 表の要素数。
    pub const LEN: usize = LEN;

    /// JIS X 0201片仮名に対応する全角文字の区点の表。
    pub const STANDARD: KanaTable = KanaTable([
        // ｡｢｣､･
        rc(1, 3),
        rc(1, 54),
        rc(1, 55),
        rc(1, 2),
        rc(1, 6),
        // ｦｧｨｩｪｫｬｭｮｯ
        rc(5, 82),
        rc(5, 1),
        rc(5, 3),
        rc(5, 5),
        rc(5, 7),
        rc(5, 9),
        rc(5, 67),
        rc(5, 69),
        rc(5, 71),
        rc(5, 35),
        // ｰ
        rc(1, 28),
        // ｱｲｳｴｵ
        rc(5, 2),
        rc(5, 4),
        rc(5, 6),
        rc(5, 8),
        rc(5, 10),
        // ｶｷｸｹｺ
        rc(5, 11),
        rc(5, 13),
        rc(5, 15),
        rc(5, 17),
        rc(5, 19),
        // ｻｼｽｾｿ
        rc(5, 21),
        rc(5, 23),
        rc(5, 25),
        rc(5, 27),
        rc(5, 29),
        // ﾀﾁﾂﾃﾄ
        rc(5, 31),
        rc(5, 33),
        rc(5, 36),
        rc(5, 38),
        rc(5, 40),
        // ﾅﾆﾇﾈﾉ
        rc(5, 42),
        rc(5, 43),
        rc(5, 44),
        rc(5, 45),
        rc(5, 46),
        // ﾊﾋﾌﾍﾎ
        rc(5, 47),
        rc(5, 50),
        rc(5, 53),
        rc(5, 56),
        rc(5, 59),
        // ﾏﾐﾑﾒﾓ
        rc(5, 62),
        rc(5, 63),
        rc(5, 64),
        rc(5, 65),
        rc(5, 66),
        // ﾔﾕﾖ
        rc(5, 68),
        rc(5, 70),
        rc(5, 72),
        // ﾗﾘﾙﾚﾛ
        rc(5, 73),
        rc(5, 74),
        rc(5, 75),
        rc(5, 76),
        rc(5, 77),
        // ﾜﾝ
        rc(5, 79),
        rc(5, 83),
        // ﾞﾟ
        rc(1, 11),
        rc(1, 12),
    ]);

    /// `0xA1`から順に対応する区点を並べた表を生成する。
    #[inline]
    pub const fn new(table: [RowCell; KanaTable::LEN]) -> KanaTable {
        KanaTable(table)
    }

    /// [`KanaTable::STANDARD`]への参照を返す。
    #[inline]
    pub fn standard() -> &'static KanaTable {
        static STANDARD: KanaTable = KanaTable::STANDARD;
        &STANDARD
    }

    /// `code`に対応する区点を返す。
    ///
    /// `code`が`0xA1..=0xDF`の範囲外であれば`None`を返す。
    #[inline]
    pub fn get(&self, code: u8) -> Option<RowCell> {
        let index = code.checked_sub(KanaTable::FIRST)?;
        self.0.get(index as usize).copied()
    }

    /// 符号と区点の組を`0xA1`から順に返すイテレーターを生成する。
    pub fn iter(&self) -> impl Iterator<Item = (u8, RowCell)> + '_ {
        (KanaTable::FIRST..=KanaTable::LAST).zip(self.0.iter().copied())
    }
}

impl Default for KanaTable {
    fn default() -> Self {
        KanaTable::STANDARD
    }
}
