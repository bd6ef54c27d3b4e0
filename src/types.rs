use std::fmt::{Debug, Display};
use std::mem::size_of;
use std::ops::{Add, AddAssign, Sub, SubAssign};

// Cheap unsigned integer cast.
pub trait As<T: Copy>: Copy {
    fn r#as(self) -> T;
}

macro_rules! impl_as {
    ($($t1:ty => $( $t2:ty ),* ; )*) => {
        $( $(
            impl As<$t2> for $t1 {
                #[inline(always)]
                fn r#as(self) -> $t2 {
                    self as $t2
                }
            }
        )* )*
    };
}

impl_as! {
    u8 => u8, u16, u32, u64, usize;
    u16 => u8, u16, u32, u64, usize;
    u32 => u8, u16, u32, u64, usize;
    u64 => u8, u16, u32, u64, usize;
    usize => u8, u16, u32, u64, usize;
}

/// Unsigned integers with basic arithmetic operations.
pub trait Uint:
    Copy
    + Eq
    + Ord
    + Default
    + Debug
    + Display
    + As<u8>
    + As<u16>
    + As<u32>
    + As<u64>
    + As<usize>
    + Add<Self, Output = Self>
    + Sub<Self, Output = Self>
    + AddAssign<Self>
    + SubAssign<Self>
{
    const ZERO: Self;
    const ONE: Self;
    const MAX: Self;
    const SIZE: usize;
}

macro_rules! impl_uint {
    ($($uint:ident),*) => {
        $(
            impl Uint for $uint {
                const ZERO: Self = 0;
                const ONE: Self = 1;
                const MAX: Self = std::$uint::MAX;
                const SIZE: usize = size_of::<$uint>();
            }
        )*
    };
}

impl_uint!(u8, u16, u32, u64, usize);

/// Types that could be casted into usize.
pub trait AsIndex: Copy {
    fn as_index(self) -> usize;
}

macro_rules! impl_as_index {
    ($($uint:ty),*) => {
        $(
            impl AsIndex for $uint {
                #[inline(always)]
                fn as_index(self) -> usize {
                    self as usize
                }
            }
        )*
    };
}

/// Text character type.
pub trait SacaChar: Uint + AsIndex {}

macro_rules! impl_saca_char {
    ($($uint:ty),*) => {
        $(
            impl SacaChar for $uint {}
        )*
    };
}

/// Suffix array index type.
pub trait SacaIndex: Uint + AsIndex {
    fn from_index(idx: usize) -> Self;
}

macro_rules! impl_saca_index {
    ($($uint:ty),*) => {
        $(
            impl SacaIndex for $uint {
                #[inline(always)]
                fn from_index(idx: usize) -> Self {
                    idx as $uint
                }
            }
        )*
    };
}

cfg_if! {
    if #[cfg(target_pointer_width = "64")] {
        impl_as_index!(u8, u16, u32, u64, usize);
        impl_saca_char!(u8, u16, u32, u64);
        impl_saca_index!(u32, u64);
    } else if #[cfg(target_pointer_width = "32")] {
        impl_as_index!(u8, u16, u32, usize);
        impl_saca_char!(u8, u16, u32);
        impl_saca_index!(u32);
    }
}
