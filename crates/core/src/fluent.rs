//! Fluent side effects on any value
//!
//! `Fluent` is implemented for every sized type. `also` runs a side effect on
//! a borrow and hands the value back; `pipe` feeds the value into a function.
//! Both keep a chain of calls readable without temporaries:
//!
//! ```
//! use verdict_core::Fluent;
//!
//! let mut log = Vec::new();
//! let total = vec![1, 2, 3]
//!     .also(|v| log.push(v.len()))
//!     .pipe(|v| v.iter().sum::<i32>());
//!
//! assert_eq!(total, 6);
//! assert_eq!(log, vec![3]);
//! ```

/// Chaining helpers available on every value
pub trait Fluent: Sized {
    /// Run `f` on a borrow of `self`, then return `self` unchanged
    fn also<F>(self, f: F) -> Self
    where
        F: FnOnce(&Self),
    {
        f(&self);
        self
    }

    /// Pass `self` into `f` and return what it produces
    fn pipe<R, F>(self, f: F) -> R
    where
        F: FnOnce(Self) -> R,
    {
        f(self)
    }
}

impl<T> Fluent for T {}
