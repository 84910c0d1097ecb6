use std::fmt::Debug;

use num_traits::{Bounded, Num, NumCast, ToPrimitive};

/// A trait for types that can be used as point coordinates.
///
/// This trait is sealed and cannot be implemented for external types. Median values are kept as
/// `f64`, so every coordinate type must convert to `f64` without loss of ordering, and coordinates
/// must be plain data so a flat `[x0, y0, x1, y1, ..]` buffer can be viewed as points.
pub trait IndexableNum:
    private::Sealed
    + Num
    + NumCast
    + ToPrimitive
    + PartialOrd
    + Debug
    + Send
    + Sync
    + bytemuck::Pod
    + Bounded
{
    /// A short name for the coordinate type, used in log output.
    const TYPE_NAME: &'static str;

    /// Widen this coordinate to `f64`.
    #[inline]
    fn as_f64(self) -> f64 {
        // All sealed implementors convert to f64 infallibly.
        self.to_f64().unwrap_or(f64::NAN)
    }
}

impl IndexableNum for i8 {
    const TYPE_NAME: &'static str = "i8";
}

impl IndexableNum for u8 {
    const TYPE_NAME: &'static str = "u8";
}

impl IndexableNum for i16 {
    const TYPE_NAME: &'static str = "i16";
}

impl IndexableNum for u16 {
    const TYPE_NAME: &'static str = "u16";
}

impl IndexableNum for i32 {
    const TYPE_NAME: &'static str = "i32";
}

impl IndexableNum for u32 {
    const TYPE_NAME: &'static str = "u32";
}

impl IndexableNum for f32 {
    const TYPE_NAME: &'static str = "f32";
}

impl IndexableNum for f64 {
    const TYPE_NAME: &'static str = "f64";
}

// https://rust-lang.github.io/api-guidelines/future-proofing.html#sealed-traits-protect-against-downstream-implementations-c-sealed
mod private {
    pub trait Sealed {}

    impl Sealed for i8 {}
    impl Sealed for u8 {}
    impl Sealed for i16 {}
    impl Sealed for u16 {}
    impl Sealed for i32 {}
    impl Sealed for u32 {}
    impl Sealed for f32 {}
    impl Sealed for f64 {}
}
