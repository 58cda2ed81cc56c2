//! 区点に割り当てられた文字の表。

use std::fmt;
use std::ops::RangeInclusive;
use std::sync::OnceLock;

use encoding_rs::EUC_JP;

use crate::eucjp;
use crate::row_cell::RowCell;

/// JIS X 0208:1997で文字が割り当てられている区点の範囲。
///
/// 要素はそれぞれ区の範囲と、その区で割り当てられている点の範囲である。
const STANDARD_ASSIGNED: &[(RangeInclusive<u8>, RangeInclusive<u8>)] = &[
    // 記号
    (1..=1, 1..=94),
    (2..=2, 1..=14),
    (2..=2, 26..=33),
    (2..=2, 42..=48),
    (2..=2, 60..=74),
    (2..=2, 82..=89),
    (2..=2, 94..=94),
    // 数字・ラテン文字
    (3..=3, 16..=25),
    (3..=3, 33..=58),
    (3..=3, 65..=90),
    // 平仮名・片仮名
    (4..=4, 1..=83),
    (5..=5, 1..=86),
    // ギリシア文字
    (6..=6, 1..=24),
    (6..=6, 33..=56),
    // キリル文字
    (7..=7, 1..=33),
    (7..=7, 49..=81),
    // 罫線素片
    (8..=8, 1..=32),
    // 第1水準漢字
    (16..=46, 1..=94),
    (47..=47, 1..=51),
    // 第2水準漢字
    (48..=83, 1..=94),
    (84..=84, 1..=6),
];

/// `rc`にJIS X 0208:1997が文字を割り当てているかどうかを返す。
fn is_standard_assigned(rc: RowCell) -> bool {
    STANDARD_ASSIGNED
        .iter()
        .any(|(rows, cells)| rows.contains(&rc.row()) && cells.contains(&rc.cell()))
}

/// 94区×94点の各区点に割り当てられた文字の表。
///
/// 生成後に内容が変わることはなく、複数のスレッドから共有できる。
pub struct CharTable {
    chars: Box<[[Option<char>; 94]; 94]>,
}

impl CharTable {
    /// 各区点に対して`f`を呼び出し、その戻り値を割り当てた表を生成する。
    ///
    /// `f`が`None`を返した区点は未割り当てとなる。
    pub fn from_fn<F>(mut f: F) -> CharTable
    where
        F: FnMut(RowCell) -> Option<char>,
    {
        let chars = crate::utils::boxed_array(|row| {
            let mut cells = [None; 94];
            for (cell, c) in cells.iter_mut().enumerate() {
                *c = f(RowCell::new(row as u8 + 1, cell as u8 + 1));
            }
            cells
        });
        CharTable { chars }
    }

    /// JIS X 0208:1997の表を返す。
    ///
    /// 初回の呼び出しで表を構築し、以降は同じ表を返す。
    /// 文字はWHATWG Encoding Standardの`jis0208`索引に従う。
    /// 索引に含まれるNEC特殊文字（13区）やIBM拡張文字（89～92区）は割り当てられていないものとして扱う。
    pub fn standard() -> &'static CharTable {
        static STANDARD: OnceLock<CharTable> = OnceLock::new();
        STANDARD.get_or_init(|| {
            let table = CharTable::from_fn(|rc| {
                if !is_standard_assigned(rc) {
                    return None;
                }

                let bytes = eucjp::encode(rc);
                let decoded = EUC_JP.decode_without_bom_handling_and_without_replacement(&bytes)?;
                let mut chars = decoded.chars();
                match (chars.next(), chars.next()) {
                    (Some(c), None) => Some(c),
                    _ => None,
                }
            });
            log::debug!("built JIS X 0208 table with {} characters", table.len());
            table
        })
    }

    /// `rc`に割り当てられた文字を返す。
    ///
    /// 未割り当ての場合は`None`を返す。
    #[inline]
    pub fn get(&self, rc: RowCell) -> Option<char> {
        self.chars[rc.row() as usize - 1][rc.cell() as usize - 1]
    }

    /// `rc`に文字が割り当てられていれば`true`を返す。
    #[inline]
    pub fn is_assigned(&self, rc: RowCell) -> bool {
        self.get(rc).is_some()
    }

    /// 割り当てられている文字の数を返す。
    pub fn len(&self) -> usize {
        self.chars.iter().flatten().filter(|c| c.is_some()).count()
    }

    /// 文字が1つも割り当てられていなければ`true`を返す。
    pub fn is_empty(&self) -> bool {
        self.chars.iter().flatten().all(Option::is_none)
    }

    /// 割り当てられている区点と文字を1区1点から順に返すイテレーターを生成する。
    pub fn iter(&self) -> impl Iterator<Item = (RowCell, char)> + '_ {
        RowCell::all().filter_map(|rc| Some((rc, self.get(rc)?)))
    }
}

impl fmt::Debug for CharTable {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("CharTable")
            .field("len", &self.len())
            .finish_non_exhaustive()
    }
}
