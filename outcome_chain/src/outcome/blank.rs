//! Presence checks backing [`Outcome::has_value`](super::Outcome::has_value).

use std::borrow::Cow;

/// Reports whether a value counts as absent.
///
/// Text is blank when empty or whitespace-only. `Option` is blank when `None`
/// or when its content is blank. The unit type is always blank, which makes
/// `has_value` false for the valueless `Outcome`. Numbers, booleans,
/// characters and collections are never blank: a present collection counts as
/// a value even when empty.
///
/// Implement this for domain types that have a meaningful "empty" state.
///
/// ```
/// use outcome_chain::Blank;
///
/// struct Sku(String);
///
/// impl Blank for Sku {
///     fn is_blank(&self) -> bool {
///         self.0.is_blank()
///     }
/// }
///
/// assert!(Sku(String::from(" ")).is_blank());
/// assert!(!Sku(String::from("A-1")).is_blank());
/// ```
pub trait Blank {
    /// Returns `true` when the value should be treated as absent.
    fn is_blank(&self) -> bool;
}

impl Blank for str {
    fn is_blank(&self) -> bool {
        self.trim().is_empty()
    }
}

impl Blank for String {
    fn is_blank(&self) -> bool {
        self.as_str().is_blank()
    }
}

impl Blank for Cow<'_, str> {
    fn is_blank(&self) -> bool {
        self.as_ref().is_blank()
    }
}

impl<T: Blank + ?Sized> Blank for &T {
    fn is_blank(&self) -> bool {
        (**self).is_blank()
    }
}

impl<T: Blank + ?Sized> Blank for Box<T> {
    fn is_blank(&self) -> bool {
        (**self).is_blank()
    }
}

impl<T: Blank> Blank for Option<T> {
    fn is_blank(&self) -> bool {
        self.as_ref().is_none_or(Blank::is_blank)
    }
}

impl Blank for () {
    fn is_blank(&self) -> bool {
        true
    }
}

impl<T> Blank for Vec<T> {
    fn is_blank(&self) -> bool {
        false
    }
}

#[cfg(feature = "uuid")]
impl Blank for uuid::Uuid {
    fn is_blank(&self) -> bool {
        self.is_nil()
    }
}

macro_rules! never_blank {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Blank for $ty {
                fn is_blank(&self) -> bool {
                    false
                }
            }
        )*
    };
}

never_blank!(
    bool, char, u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize, f32, f64,
);
