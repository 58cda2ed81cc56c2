//! Shift_JISの2バイト符号と区点の相互変換。
//!
//! ここでの関数は割り当ての有無を考慮しない純粋な変換のみを行う。

use crate::row_cell::RowCell;

/// `b`がShift_JISの2バイト文字における第1バイトであれば`true`を返す。
#[inline]
pub const fn is_lead(b: u8) -> bool {
    matches!(b, 0x81..=0x9F | 0xE0..=0xEF)
}

/// `b`がShift_JISの2バイト文字における第2バイトであれば`true`を返す。
#[inline]
pub const fn is_trail(b: u8) -> bool {
    matches!(b, 0x40..=0x7E | 0x80..=0xFC)
}

/// Shift_JISの2バイト符号を区点に変換する。
///
/// 符号が範囲外の場合は`None`を返す。
pub const fn decode(b1: u8, b2: u8) -> Option<RowCell> {
    if !is_lead(b1) || !is_trail(b2) {
        return None;
    }

    // 0x9Fと0xE0の間の隙間を詰め、1バイト目を0始まりの連番にする
    let cd1 = if b1 >= 0xE0 {
        b1 - 0x81 - (0xE0 - 0xA0)
    } else {
        b1 - 0x81
    };
    // 0x7Fを飛ばして0..=187にする
    let cd2 = if b2 > 0x7F { b2 - 0x41 } else { b2 - 0x40 };

    // 1バイト目1つにつき2区
    let (row, cell) = if cd2 < 94 {
        (cd1 * 2 + 1, cd2 + 1)
    } else {
        (cd1 * 2 + 2, cd2 - 94 + 1)
    };
    Some(RowCell::new(row, cell))
}

/// 区点をShift_JISの2バイト符号に変換する。
pub const fn encode(rc: RowCell) -> [u8; 2] {
    let (row, cell) = (rc.row(), rc.cell());

    let b1 = if row <= 62 {
        (row - 1) / 2 + 0x81
    } else {
        (row - 63) / 2 + 0xE0
    };
    let b2 = if row % 2 == 1 {
        if cell <= 63 {
            cell + 0x3F
        } else {
            cell + 0x40
        }
    } else {
        cell + 0x9E
    };
    [b1, b2]
}

#[cfg(test)]
mod tests {
    use super::*;
    use hex_literal::hex;

    #[test]
    fn test_is_lead_trail() {
        assert!(!is_lead(0x80));
        assert!(is_lead(0x81));
        assert!(is_lead(0x9F));
        assert!(!is_lead(0xA0));
        assert!(!is_lead(0xDF));
        assert!(is_lead(0xE0));
        assert!(is_lead(0xEF));
        assert!(!is_lead(0xF0));

        assert!(!is_trail(0x3F));
        assert!(is_trail(0x40));
        assert!(is_trail(0x7E));
        assert!(!is_trail(0x7F));
        assert!(is_trail(0x80));
        assert!(is_trail(0xFC));
        assert!(!is_trail(0xFD));
    }

    #[test]
    fn test_decode() {
        assert_eq!(decode(0x81, 0x40), Some(RowCell::new(1, 1)));
        assert_eq!(decode(0x81, 0x7E), Some(RowCell::new(1, 63)));
        assert_eq!(decode(0x81, 0x80), Some(RowCell::new(1, 64)));
        assert_eq!(decode(0x81, 0x9E), Some(RowCell::new(1, 94)));
        assert_eq!(decode(0x81, 0x9F), Some(RowCell::new(2, 1)));
        assert_eq!(decode(0x81, 0xFC), Some(RowCell::new(2, 94)));
        // 亜
        assert_eq!(decode(0x88, 0x9F), Some(RowCell::new(16, 1)));
        assert_eq!(decode(0x9F, 0xFC), Some(RowCell::new(62, 94)));
        assert_eq!(decode(0xE0, 0x40), Some(RowCell::new(63, 1)));
        // 熙
        assert_eq!(decode(0xEA, 0xA4), Some(RowCell::new(84, 6)));
        assert_eq!(decode(0xEF, 0xFC), Some(RowCell::new(94, 94)));

        assert_eq!(decode(0x80, 0x40), None);
        assert_eq!(decode(0xA0, 0x40), None);
        assert_eq!(decode(0xF0, 0x40), None);
        assert_eq!(decode(0x81, 0x3F), None);
        assert_eq!(decode(0x81, 0x7F), None);
        assert_eq!(decode(0x81, 0xFD), None);
    }

    #[test]
    fn test_encode() {
        assert_eq!(encode(RowCell::new(1, 1)), hex!("81 40"));
        assert_eq!(encode(RowCell::new(1, 63)), hex!("81 7E"));
        assert_eq!(encode(RowCell::new(1, 64)), hex!("81 80"));
        assert_eq!(encode(RowCell::new(2, 1)), hex!("81 9F"));
        assert_eq!(encode(RowCell::new(16, 1)), hex!("88 9F"));
        assert_eq!(encode(RowCell::new(62, 94)), hex!("9F FC"));
        assert_eq!(encode(RowCell::new(63, 1)), hex!("E0 40"));
        assert_eq!(encode(RowCell::new(94, 94)), hex!("EF FC"));
    }

    #[test]
    fn test_round_trip() {
        for rc in RowCell::all() {
            let [b1, b2] = encode(rc);
            assert!(is_lead(b1), "{rc}");
            assert!(is_trail(b2), "{rc}");
            assert_eq!(decode(b1, b2), Some(rc));
        }

        let mut count = 0;
        for b1 in 0..=0xFF {
            for b2 in 0..=0xFF {
                if let Some(rc) = decode(b1, b2) {
                    assert_eq!(encode(rc), [b1, b2]);
                    count += 1;
                }
            }
        }
        assert_eq!(count, RowCell::COUNT);
    }
}
