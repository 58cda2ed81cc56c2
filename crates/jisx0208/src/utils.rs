/// 要素数`N`の配列をヒープ上に生成する。
///
/// 要素`i`は`f(i)`の戻り値となる。
/// 94区×94点の文字表はスタックに置くには大きいため、[`CharTable`][crate::CharTable]の構築に用いる。
pub fn boxed_array<T, const N: usize, F>(f: F) -> Box<[T; N]>
where
    F: FnMut(usize) -> T,
{
    let slice = (0..N).map(f).collect::<Vec<T>>().into_boxed_slice();

    // Safety: `slice`の要素数は`N`である
    unsafe { Box::from_raw(Box::into_raw(slice) as *mut [T; N]) }
}

/// 型が保証している値の範囲をコンパイラに伝える。
///
/// [`RowCell`][crate::RowCell]の区・点が`1..=94`にあることを示し、
/// 表の添え字計算で境界検査を省けるようにする。
/// デバッグビルドでは条件を`assert!`で検証する。
///
/// # Safety
///
/// 条件が満たされない場合の動作は未定義である。
macro_rules! assume {
    ($cond:expr) => {{
        if cfg!(debug_assertions) {
            assert!($cond);
        } else if !($cond) {
            std::hint::unreachable_unchecked();
        }
    }};
}

pub(crate) use assume;
