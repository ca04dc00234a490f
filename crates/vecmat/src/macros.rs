//! Utility macros.

/// Invokes the given macro once for every primitive numeric type.
macro_rules! for_each_primitive {
    ($mac:ident) => {
        $mac!(i8);
        $mac!(i16);
        $mac!(i32);
        $mac!(i64);
        $mac!(i128);
        $mac!(isize);
        $mac!(u8);
        $mac!(u16);
        $mac!(u32);
        $mac!(u64);
        $mac!(u128);
        $mac!(usize);
        $mac!(f32);
        $mac!(f64);
    };
}
