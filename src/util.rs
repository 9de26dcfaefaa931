use std::hint;

pub(crate) trait OptionExtension<T> {
    unsafe fn filled(self) -> T;
}

impl<T> OptionExtension<T> for Option<T> {
    /// Unwraps an [`Option`] whose [`None`] branch is statically impossible, with [`unreachable!`]
    /// in dev builds and [`unreachable_unchecked`](hint::unreachable_unchecked) in release builds.
    ///
    /// No panics annotation is used because invoking this method asserts that [`None`] cannot
    /// occur; the same goes for safety docs.
    unsafe fn filled(self) -> T {
        match self {
            Some(val) => val,
            None if cfg!(debug_assertions) => unreachable!(),
            // SAFETY: The caller asserts that None is impossible when invoking this method.
            None => unsafe { hint::unreachable_unchecked() },
        }
    }
}
