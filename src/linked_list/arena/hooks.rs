use alloc::{boxed::Box, rc::Rc, sync::Arc};
use core::{fmt, ptr::NonNull};

/// Produces an independent copy of a value, or `None` if it cannot.
pub type DuplicateFn<T> = fn(&T) -> Option<T>;

/// Disposes of a value whose node is being destroyed.
pub type ReleaseFn<T> = fn(T);

/// Decides whether a stored value matches a search key.
pub type EqualsFn<T> = fn(&T, &T) -> bool;

/// The value behaviours a [`List`](super::list::List) is configured with.
///
/// Every capability is optional. When one is missing the list falls back to:
///
/// - duplicate: the copy shares the value through [`Clone`], which for
///   reference-like values (`&U`, `Rc<U>`, `NonNull<U>`) is a shallow copy;
/// - release: the value is dropped and nothing else happens;
/// - equals: identity through [`ValueRef`], a key matches a stored value only
///   when both refer to the same thing.
///
/// Hooks are plain function pointers, so a bundle is `Copy` and a duplicated
/// list carries the same functions as its source.
pub struct Hooks<T> {
    duplicate: Option<DuplicateFn<T>>,
    release: Option<ReleaseFn<T>>,
    equals: Option<EqualsFn<T>>,
}

impl<T> Hooks<T> {
    /// A bundle with no hooks set.
    pub const fn new() -> Self {
        Self {
            duplicate: None,
            release: None,
            equals: None,
        }
    }

    /// Sets the duplicate hook.
    pub const fn with_duplicate(self, duplicate: DuplicateFn<T>) -> Self {
        Self {
            duplicate: Some(duplicate),
            ..self
        }
    }

    /// Sets the release hook.
    pub const fn with_release(self, release: ReleaseFn<T>) -> Self {
        Self {
            release: Some(release),
            ..self
        }
    }

    /// Sets the equals hook.
    pub const fn with_equals(self, equals: EqualsFn<T>) -> Self {
        Self {
            equals: Some(equals),
            ..self
        }
    }

    /// The duplicate hook, if set.
    pub fn duplicate(&self) -> Option<DuplicateFn<T>> {
        self.duplicate
    }

    /// The release hook, if set.
    pub fn release(&self) -> Option<ReleaseFn<T>> {
        self.release
    }

    /// The equals hook, if set.
    pub fn equals(&self) -> Option<EqualsFn<T>> {
        self.equals
    }

    pub(crate) fn set_duplicate(&mut self, duplicate: Option<DuplicateFn<T>>) {
        self.duplicate = duplicate;
    }

    pub(crate) fn set_release(&mut self, release: Option<ReleaseFn<T>>) {
        self.release = release;
    }

    pub(crate) fn set_equals(&mut self, equals: Option<EqualsFn<T>>) {
        self.equals = equals;
    }

    pub(crate) fn duplicate_value(&self, value: &T) -> Option<T>
    where
        T: Clone,
    {
        match self.duplicate {
            Some(duplicate) => duplicate(value),
            None => Some(value.clone()),
        }
    }

    pub(crate) fn release_value(&self, value: T) {
        if let Some(release) = self.release {
            release(value);
        }
    }

    pub(crate) fn matches(&self, value: &T, key: &T) -> bool
    where
        T: ValueRef,
    {
        match self.equals {
            Some(equals) => equals(value, key),
            None => value.same_ref(key),
        }
    }
}

impl<T> Clone for Hooks<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Hooks<T> {}

impl<T> Default for Hooks<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> fmt::Debug for Hooks<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Hooks")
            .field("duplicate", &self.duplicate.is_some())
            .field("release", &self.release.is_some())
            .field("equals", &self.equals.is_some())
            .finish()
    }
}

/// Identity of a stored value, used by searches when no equals hook is set.
///
/// Pointer-like values are identical when they point at the same referent,
/// whatever the referent's contents. Scalars are their own identity and
/// compare by value.
pub trait ValueRef {
    /// Whether `self` and `other` refer to the same thing.
    fn same_ref(&self, other: &Self) -> bool;
}

impl<U: ?Sized> ValueRef for &U {
    fn same_ref(&self, other: &Self) -> bool {
        core::ptr::eq(*self, *other)
    }
}

impl<U: ?Sized> ValueRef for &mut U {
    fn same_ref(&self, other: &Self) -> bool {
        core::ptr::eq(&**self, &**other)
    }
}

impl<U: ?Sized> ValueRef for Box<U> {
    fn same_ref(&self, other: &Self) -> bool {
        core::ptr::eq(&**self, &**other)
    }
}

impl<U: ?Sized> ValueRef for Rc<U> {
    fn same_ref(&self, other: &Self) -> bool {
        Rc::ptr_eq(self, other)
    }
}

impl<U: ?Sized> ValueRef for Arc<U> {
    fn same_ref(&self, other: &Self) -> bool {
        Arc::ptr_eq(self, other)
    }
}

impl<U: ?Sized> ValueRef for NonNull<U> {
    fn same_ref(&self, other: &Self) -> bool {
        core::ptr::eq(self.as_ptr(), other.as_ptr())
    }
}

impl<U: ?Sized> ValueRef for *const U {
    fn same_ref(&self, other: &Self) -> bool {
        core::ptr::eq(*self, *other)
    }
}

impl<U: ?Sized> ValueRef for *mut U {
    fn same_ref(&self, other: &Self) -> bool {
        core::ptr::eq(*self, *other)
    }
}

macro_rules! scalar_value_ref {
    ($($ty:ty),* $(,)?) => {
        $(
            impl ValueRef for $ty {
                fn same_ref(&self, other: &Self) -> bool {
                    self == other
                }
            }
        )*
    };
}

scalar_value_ref!(
    u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize, char, bool,
);
