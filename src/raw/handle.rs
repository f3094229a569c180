use core::num::NonZero;

#[cfg(test)]
type RawHandle = u16;
#[cfg(not(test))]
type RawHandle = u32;

/// Index of a slot in an [`Arena`](super::arena::Arena).
///
/// Stored off-by-one in a `NonZero` so `Option<Handle>` costs nothing extra,
/// which keeps the leaf chain links as small as the handles themselves.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[repr(transparent)]
pub(crate) struct Handle(NonZero<RawHandle>);

impl Handle {
    pub(crate) const MAX: usize = (RawHandle::MAX - 1) as usize;

    #[inline]
    pub(crate) const fn from_index(index: usize) -> Self {
        assert!(index <= Self::MAX, "`Handle::from_index()` - `index` > `Handle::MAX`!");
        #[allow(clippy::cast_possible_truncation)]
        match NonZero::new((index + 1) as RawHandle) {
            Some(raw) => Self(raw),
            None => unreachable!(),
        }
    }

    #[inline]
    pub(crate) const fn index(self) -> usize {
        (self.0.get() - 1) as usize
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use static_assertions::assert_eq_size;

    assert_eq_size!(Handle, Option<Handle>);
    assert_eq_size!(Handle, RawHandle);

    #[test]
    #[should_panic(expected = "`Handle::from_index()` - `index` > `Handle::MAX`!")]
    fn index_past_max_panics() {
        let _ = Handle::from_index(Handle::MAX + 1);
    }

    #[test]
    fn extremes() {
        assert_eq!(Handle::from_index(0).index(), 0);
        assert_eq!(Handle::from_index(Handle::MAX).index(), Handle::MAX);
    }

    proptest! {
        #[test]
        fn index_survives_encoding(index in 0..=Handle::MAX) {
            prop_assert_eq!(Handle::from_index(index).index(), index);
        }
    }
}
