//! 整数として扱える値の正規化。
//!
//! 各変換関数は区点やバイトを、整数型に限らず浮動小数点数や数値の文字列でも受け取る。
//! その際の変換規則は[`IntegerLike`]に集約されている。

/// 整数として解釈できる値。
///
/// 区点への変換には[`to_integer`][IntegerLike::to_integer]を、
/// バイトへの変換には[`to_byte`][IntegerLike::to_byte]を用いる。
///
/// | 型 | `to_integer` |
/// |---|---|
/// | 整数型 | 値そのもの（`i64`に収まらなければ`None`） |
/// | 浮動小数点数 | 0方向への切り捨て（NaN・無限大は`None`） |
/// | `bool` | `true`なら1、`false`なら0 |
/// | 文字列 | 前後の空白を除いた10進数、指数表記、`0x`・`0o`・`0b`接頭辞付きの整数 |
/// | `Option<T>` | `None`は`None` |
pub trait IntegerLike {
    /// 値を0方向に切り捨てた整数に変換する。
    ///
    /// 数値として解釈できない場合は`None`を返す。
    fn to_integer(&self) -> Option<i64>;

    /// 値を整数に変換し、2の補数表現における下位8ビットを返す。
    ///
    /// 数値として解釈できない場合は0を返す。
    #[inline]
    fn to_byte(&self) -> u8 {
        self.to_integer().map_or(0, |n| n as u8)
    }
}

/// `value`をバイトに正規化する。
///
/// 負の値や255を超える値は256を法として折り返され、数値でない値は0になる。
///
/// # サンプル
///
/// ```
/// use jisx0208::normalize_byte;
///
/// assert_eq!(normalize_byte(0x81), 0x81);
/// assert_eq!(normalize_byte(-127), 0x81);
/// assert_eq!(normalize_byte(0x81 + 256), 0x81);
/// assert_eq!(normalize_byte(129.3), 0x81);
/// assert_eq!(normalize_byte("0x81"), 0x81);
/// assert_eq!(normalize_byte("foo"), 0);
/// ```
#[inline]
pub fn normalize_byte<T: IntegerLike>(value: T) -> u8 {
    value.to_byte()
}

macro_rules! impl_integer {
    ($($ty:ty),*) => {$(
        impl IntegerLike for $ty {
            #[inline]
            fn to_integer(&self) -> Option<i64> {
                i64::try_from(*self).ok()
            }

            #[inline]
            fn to_byte(&self) -> u8 {
                *self as u8
            }
        }
    )*};
}

impl_integer!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

impl IntegerLike for f64 {
    fn to_integer(&self) -> Option<i64> {
        if !self.is_finite() {
            return None;
        }

        let n = self.trunc();
        // `i64::MAX as f64`は2^63に丸められるため上端は開区間で比較する
        if (-9_223_372_036_854_775_808.0..9_223_372_036_854_775_808.0).contains(&n) {
            Some(n as i64)
        } else {
            None
        }
    }

    fn to_byte(&self) -> u8 {
        if self.is_finite() {
            self.trunc().rem_euclid(256.) as u8
        } else {
            0
        }
    }
}

impl IntegerLike for f32 {
    #[inline]
    fn to_integer(&self) -> Option<i64> {
        f64::from(*self).to_integer()
    }

    #[inline]
    fn to_byte(&self) -> u8 {
        f64::from(*self).to_byte()
    }
}

impl IntegerLike for bool {
    #[inline]
    fn to_integer(&self) -> Option<i64> {
        Some(*self as i64)
    }
}

impl IntegerLike for str {
    #[inline]
    fn to_integer(&self) -> Option<i64> {
        parse_number(self)?.to_integer()
    }

    #[inline]
    fn to_byte(&self) -> u8 {
        parse_number(self).map_or(0, |n| n.to_byte())
    }
}

impl IntegerLike for String {
    #[inline]
    fn to_integer(&self) -> Option<i64> {
        self.as_str().to_integer()
    }

    #[inline]
    fn to_byte(&self) -> u8 {
        self.as_str().to_byte()
    }
}

impl<T: IntegerLike> IntegerLike for Option<T> {
    #[inline]
    fn to_integer(&self) -> Option<i64> {
        self.as_ref()?.to_integer()
    }

    #[inline]
    fn to_byte(&self) -> u8 {
        self.as_ref().map_or(0, T::to_byte)
    }
}

impl<T: IntegerLike + ?Sized> IntegerLike for &T {
    #[inline]
    fn to_integer(&self) -> Option<i64> {
        (**self).to_integer()
    }

    #[inline]
    fn to_byte(&self) -> u8 {
        (**self).to_byte()
    }
}

/// 文字列を数値として解釈する。
fn parse_number(s: &str) -> Option<f64> {
    // U+FEFFは`char::is_whitespace`に含まれないが空白として扱う
    let s = s.trim_matches(|c: char| c.is_whitespace() || c == '\u{FEFF}');

    for (prefixes, radix) in [(["0x", "0X"], 16), (["0o", "0O"], 8), (["0b", "0B"], 2)] {
        if let Some(digits) = prefixes.iter().find_map(|p| s.strip_prefix(p)) {
            // `from_str_radix`は符号を受け付けてしまう
            if !digits.bytes().all(|b| b.is_ascii_alphanumeric()) {
                return None;
            }
            return u64::from_str_radix(digits, radix).ok().map(|n| n as f64);
        }
    }

    match s {
        "Infinity" | "+Infinity" => return Some(f64::INFINITY),
        "-Infinity" => return Some(f64::NEG_INFINITY),
        _ => {}
    }
    // Rustのパーサーは"inf"や"NaN"も受け付けるため、数字と記号以外は弾く
    if !s
        .bytes()
        .all(|b| matches!(b, b'0'..=b'9' | b'+' | b'-' | b'.' | b'e' | b'E'))
    {
        return None;
    }

    s.parse().ok()
}
