/// Integer-valued elements that counting sort can bucket.
///
/// `counting_key` must be order-preserving: `a <= b` implies
/// `a.counting_key() <= b.counting_key()`.
pub trait CountingKey: Ord + Clone {
    fn counting_key(&self) -> i128;
}

macro_rules! impl_counting_key {
    ($($t:ty),* $(,)?) => {
        $(
            impl CountingKey for $t {
                #[inline]
                fn counting_key(&self) -> i128 {
                    *self as i128
                }
            }
        )*
    };
}

impl_counting_key!(u8, u16, u32, u64, usize, i8, i16, i32, i64, isize);
