use std::cmp::Ordering;

/// The in-place sort routine a composed comparator is fed to.
///
/// Stability is whatever the implementation provides. Nothing in this crate relies on it beyond
/// passing it through.
pub trait Primitive {
    fn name() -> String;

    fn sort_by<T, F>(arr: &mut [T], compare: F)
    where
        F: FnMut(&T, &T) -> Ordering;
}

macro_rules! primitive_impl {
    ($ty:ident, $name:expr, $method:ident) => {
        impl Primitive for $ty {
            fn name() -> String {
                $name.into()
            }

            #[inline]
            fn sort_by<T, F>(arr: &mut [T], compare: F)
            where
                F: FnMut(&T, &T) -> Ordering,
            {
                arr.$method(compare);
            }
        }
    };
}

/// `slice::sort_by`: stable, allocates a buffer of half the input.
#[derive(Debug, Clone, Copy, Default)]
pub struct Stable;

/// `slice::sort_unstable_by`: in-place, may reorder records that compare equal.
#[derive(Debug, Clone, Copy, Default)]
pub struct Unstable;

primitive_impl!(Stable, "rust_std_stable", sort_by);
primitive_impl!(Unstable, "rust_std_unstable", sort_unstable_by);
