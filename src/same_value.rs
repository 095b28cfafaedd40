//! "Same value" equality.
//!
//! Deduplication, segmentation and set algebra compare values with
//! [`SameValue`] rather than [`PartialEq`]. The two agree everywhere except
//! on floating point numbers:
//!
//! - every `NaN` is the same value as every other `NaN`
//! - `+0.0` and `-0.0` are different values
//!
//! This makes `NaN` projections group together and lets floats be used as
//! keys of the internal seen-sets, which is impossible with `f64: PartialEq`.
//!
//! # Examples
//!
//! ```rust
//! use seqpipe::same_value::SameValue;
//!
//! assert!(f64::NAN.same_value(&f64::NAN));
//! assert!(!0.0_f64.same_value(&-0.0));
//! assert!("abc".same_value(&"abc"));
//! ```

use std::collections::HashSet;
use std::hash::{Hash, Hasher};

/// Equality where `NaN` equals `NaN` and signed zeros are distinct.
///
/// Implementations must keep [`same_value_hash`](SameValue::same_value_hash)
/// consistent with [`same_value`](SameValue::same_value): values that are
/// the same value must hash identically.
pub trait SameValue {
    /// Returns `true` when `self` and `other` are the same value.
    fn same_value(&self, other: &Self) -> bool;

    /// Feeds a hash consistent with [`same_value`](SameValue::same_value).
    fn same_value_hash<H: Hasher>(&self, state: &mut H);
}

macro_rules! same_value_by_eq {
    ($($type:ty),* $(,)?) => {
        $(
            impl SameValue for $type {
                #[inline]
                fn same_value(&self, other: &Self) -> bool {
                    self == other
                }

                #[inline]
                fn same_value_hash<H: Hasher>(&self, state: &mut H) {
                    self.hash(state);
                }
            }
        )*
    };
}

same_value_by_eq!(
    (),
    bool,
    char,
    u8,
    u16,
    u32,
    u64,
    u128,
    usize,
    i8,
    i16,
    i32,
    i64,
    i128,
    isize,
    str,
    String,
);

macro_rules! same_value_by_bits {
    ($($type:ty),* $(,)?) => {
        $(
            impl SameValue for $type {
                #[inline]
                fn same_value(&self, other: &Self) -> bool {
                    if self.is_nan() {
                        other.is_nan()
                    } else {
                        self.to_bits() == other.to_bits()
                    }
                }

                #[inline]
                fn same_value_hash<H: Hasher>(&self, state: &mut H) {
                    if self.is_nan() {
                        <$type>::NAN.to_bits().hash(state);
                    } else {
                        self.to_bits().hash(state);
                    }
                }
            }
        )*
    };
}

same_value_by_bits!(f32, f64);

impl<T: SameValue + ?Sized> SameValue for &T {
    #[inline]
    fn same_value(&self, other: &Self) -> bool {
        (**self).same_value(*other)
    }

    #[inline]
    fn same_value_hash<H: Hasher>(&self, state: &mut H) {
        (**self).same_value_hash(state);
    }
}

impl<T: SameValue + ?Sized> SameValue for Box<T> {
    #[inline]
    fn same_value(&self, other: &Self) -> bool {
        (**self).same_value(other)
    }

    #[inline]
    fn same_value_hash<H: Hasher>(&self, state: &mut H) {
        (**self).same_value_hash(state);
    }
}

impl<T: SameValue> SameValue for Option<T> {
    fn same_value(&self, other: &Self) -> bool {
        match (self, other) {
            (Some(left), Some(right)) => left.same_value(right),
            (None, None) => true,
            _ => false,
        }
    }

    fn same_value_hash<H: Hasher>(&self, state: &mut H) {
        match self {
            Some(value) => {
                1_u8.hash(state);
                value.same_value_hash(state);
            }
            None => 0_u8.hash(state),
        }
    }
}

impl<T: SameValue> SameValue for [T] {
    fn same_value(&self, other: &Self) -> bool {
        self.len() == other.len()
            && self
                .iter()
                .zip(other)
                .all(|(left, right)| left.same_value(right))
    }

    fn same_value_hash<H: Hasher>(&self, state: &mut H) {
        self.len().hash(state);
        for element in self {
            element.same_value_hash(state);
        }
    }
}

impl<T: SameValue> SameValue for Vec<T> {
    #[inline]
    fn same_value(&self, other: &Self) -> bool {
        self.as_slice().same_value(other.as_slice())
    }

    #[inline]
    fn same_value_hash<H: Hasher>(&self, state: &mut H) {
        self.as_slice().same_value_hash(state);
    }
}

macro_rules! same_value_for_tuple {
    ($(($($name:ident : $index:tt),+)),* $(,)?) => {
        $(
            impl<$($name: SameValue),+> SameValue for ($($name,)+) {
                fn same_value(&self, other: &Self) -> bool {
                    $(self.$index.same_value(&other.$index))&&+
                }

                fn same_value_hash<H: Hasher>(&self, state: &mut H) {
                    $(self.$index.same_value_hash(state);)+
                }
            }
        )*
    };
}

same_value_for_tuple!(
    (A: 0),
    (A: 0, B: 1),
    (A: 0, B: 1, C: 2),
    (A: 0, B: 1, C: 2, D: 3),
);

/// Adapts a [`SameValue`] type to [`Hash`] + [`Eq`].
///
/// Used as the key type of every seen-set in this crate.
///
/// # Examples
///
/// ```rust
/// use std::collections::HashSet;
/// use seqpipe::same_value::SameValueKey;
///
/// let mut seen = HashSet::new();
/// assert!(seen.insert(SameValueKey(f64::NAN)));
/// assert!(!seen.insert(SameValueKey(f64::NAN)));
/// assert!(seen.insert(SameValueKey(-0.0)));
/// assert!(seen.insert(SameValueKey(0.0)));
/// ```
#[derive(Debug, Clone, Copy)]
pub struct SameValueKey<K>(pub K);

impl<K: SameValue> PartialEq for SameValueKey<K> {
    fn eq(&self, other: &Self) -> bool {
        self.0.same_value(&other.0)
    }
}

impl<K: SameValue> Eq for SameValueKey<K> {}

impl<K: SameValue> Hash for SameValueKey<K> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.0.same_value_hash(state);
    }
}

#[cfg(feature = "fxhash")]
pub(crate) type SeenHasher = rustc_hash::FxBuildHasher;

#[cfg(all(feature = "ahash", not(feature = "fxhash")))]
pub(crate) type SeenHasher = ahash::RandomState;

#[cfg(not(any(feature = "fxhash", feature = "ahash")))]
pub(crate) type SeenHasher = std::collections::hash_map::RandomState;

/// The set of projections already observed by a deduplicating adapter.
pub(crate) type SeenSet<K> = HashSet<SameValueKey<K>, SeenHasher>;

pub(crate) fn seen_set<K>() -> SeenSet<K> {
    HashSet::with_hasher(SeenHasher::default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::collections::hash_map::DefaultHasher;

    fn hash_of<T: SameValue + ?Sized>(value: &T) -> u64 {
        let mut hasher = DefaultHasher::new();
        value.same_value_hash(&mut hasher);
        hasher.finish()
    }

    #[rstest]
    #[case(f64::NAN, f64::NAN, true)]
    #[case(0.0, -0.0, false)]
    #[case(1.5, 1.5, true)]
    #[case(1.5, 2.5, false)]
    #[case(f64::INFINITY, f64::INFINITY, true)]
    fn test_f64_same_value(#[case] left: f64, #[case] right: f64, #[case] expected: bool) {
        assert_eq!(left.same_value(&right), expected);
    }

    #[rstest]
    fn test_nan_payloads_hash_alike() {
        let quiet = f64::NAN;
        let other = f64::from_bits(f64::NAN.to_bits() | 1);
        assert!(other.is_nan());
        assert!(quiet.same_value(&other));
        assert_eq!(hash_of(&quiet), hash_of(&other));
    }

    #[rstest]
    fn test_composite_values() {
        assert!((1, f32::NAN).same_value(&(1, f32::NAN)));
        assert!(Some(vec![f64::NAN]).same_value(&Some(vec![f64::NAN])));
        assert!(!vec![1, 2].same_value(&vec![1, 2, 3]));
        assert!("a".to_string().same_value(&"a".to_string()));
    }

    #[rstest]
    fn test_seen_set_deduplicates_by_same_value() {
        let mut seen = seen_set();
        assert!(seen.insert(SameValueKey(f64::NAN)));
        assert!(!seen.insert(SameValueKey(f64::NAN)));
        assert_eq!(seen.len(), 1);
    }
}
