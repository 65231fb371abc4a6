/// Vertex coordinate type that can be compared by value
///
/// Floating point coordinates are compared by their bit pattern, with `-0.0`
/// folded onto `0.0` so that both zeros are the same position. A NaN
/// coordinate only equals a NaN with the identical bit pattern.
pub trait Coordinate: Copy + Send + Sync {
    /// Bit pattern shared by every value at the same position
    fn canonical_bits(self) -> u64;
}

impl Coordinate for f32 {
    #[inline]
    fn canonical_bits(self) -> u64 {
        match self == 0.0 {
            true => 0,
            false => u64::from(self.to_bits()),
        }
    }
}

impl Coordinate for f64 {
    #[inline]
    fn canonical_bits(self) -> u64 {
        match self == 0.0 {
            true => 0,
            false => self.to_bits(),
        }
    }
}

macro_rules! impl_integer_coordinate {
    ($($t:ty => $unsigned:ty),*) => {
        $(
            impl Coordinate for $t {
                #[inline]
                fn canonical_bits(self) -> u64 {
                    // reinterpret, then widen
                    u64::from(self as $unsigned)
                }
            }
        )*
    };
}

impl_integer_coordinate!(u32 => u32, i32 => u32, u64 => u64, i64 => u64);
