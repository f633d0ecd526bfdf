//! Closed N-way unions
//!
//! `OneOf2` through `OneOf7` hold exactly one value out of N possible types.
//! Each union is a plain Rust enum, so `match_with` is exhaustive by
//! construction: there is no "unknown slot" path to handle at runtime.
//!
//! ## Slots
//!
//! Slots are numbered from 1. The variant for slot `n` is `Tn` and each slot
//! has a matching family of accessors:
//!
//! | Accessor | On the active slot | On another slot |
//! |----------|--------------------|-----------------|
//! | `is_tn` | `true` | `false` |
//! | `as_tn` | `&value` | panics (fail-fast) |
//! | `try_as_tn` | `Ok(&value)` | `Err(ContractError::WrongVariant)` |
//! | `into_tn` | `Ok(value)` | `Err(self)` |
//!
//! ## Ordering
//!
//! Unions compare by slot first, then by the active value.

use crate::error::{ContractError, ContractResult};

macro_rules! one_of {
    (
        $(#[$meta:meta])*
        $name:ident, arity = $arity:literal {
            $(
                $variant:ident($ty:ident) = $index:literal
                    => $from:ident, $is:ident, $as:ident, $try_as:ident, $into:ident, $handler:ident;
            )+
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        pub enum $name<$($ty),+> {
            $(
                #[doc = concat!("Slot ", stringify!($index))]
                $variant($ty),
            )+
        }

        impl<$($ty),+> $name<$($ty),+> {
            /// Number of slots
            pub const ARITY: usize = $arity;

            /// Active slot (1-based)
            pub fn index(&self) -> usize {
                match self {
                    $($name::$variant(_) => $index,)+
                }
            }

            /// Project into `R` by running the handler of the active slot
            #[allow(clippy::too_many_arguments)]
            pub fn match_with<R>(self, $($handler: impl FnOnce($ty) -> R),+) -> R {
                match self {
                    $($name::$variant(value) => $handler(value),)+
                }
            }

            /// Like `match_with`, but borrows the active value
            #[allow(clippy::too_many_arguments)]
            pub fn match_ref<R>(&self, $($handler: impl FnOnce(&$ty) -> R),+) -> R {
                match self {
                    $($name::$variant(value) => $handler(value),)+
                }
            }

            $(
                #[doc = concat!("Create a union holding slot ", stringify!($index))]
                pub fn $from(value: $ty) -> Self {
                    $name::$variant(value)
                }

                #[doc = concat!("Check if slot ", stringify!($index), " is active")]
                pub fn $is(&self) -> bool {
                    matches!(self, $name::$variant(_))
                }

                #[doc = concat!("Borrow slot ", stringify!($index), ", failing fast on any other slot")]
                ///
                /// # Panics
                ///
                /// Panics with the `WrongVariant` message when another slot is active.
                #[track_caller]
                pub fn $as(&self) -> &$ty {
                    match self.$try_as() {
                        Ok(value) => value,
                        Err(err) => err.raise(),
                    }
                }

                #[doc = concat!("Borrow slot ", stringify!($index), ", or report which slot is active")]
                pub fn $try_as(&self) -> ContractResult<&$ty> {
                    match self {
                        $name::$variant(value) => Ok(value),
                        other => Err(ContractError::WrongVariant {
                            union: stringify!($name),
                            expected: $index,
                            actual: other.index(),
                        }),
                    }
                }

                #[doc = concat!("Take slot ", stringify!($index), ", or give the union back")]
                pub fn $into(self) -> Result<$ty, Self> {
                    match self {
                        $name::$variant(value) => Ok(value),
                        other => Err(other),
                    }
                }
            )+
        }
    };
}

one_of! {
    /// A value of exactly one of two types
    OneOf2, arity = 2 {
        T1(A) = 1 => from_t1, is_t1, as_t1, try_as_t1, into_t1, on_t1;
        T2(B) = 2 => from_t2, is_t2, as_t2, try_as_t2, into_t2, on_t2;
    }
}

one_of! {
    /// A value of exactly one of three types
    OneOf3, arity = 3 {
        T1(A) = 1 => from_t1, is_t1, as_t1, try_as_t1, into_t1, on_t1;
        T2(B) = 2 => from_t2, is_t2, as_t2, try_as_t2, into_t2, on_t2;
        T3(C) = 3 => from_t3, is_t3, as_t3, try_as_t3, into_t3, on_t3;
    }
}

one_of! {
    /// A value of exactly one of four types
    OneOf4, arity = 4 {
        T1(A) = 1 => from_t1, is_t1, as_t1, try_as_t1, into_t1, on_t1;
        T2(B) = 2 => from_t2, is_t2, as_t2, try_as_t2, into_t2, on_t2;
        T3(C) = 3 => from_t3, is_t3, as_t3, try_as_t3, into_t3, on_t3;
        T4(D) = 4 => from_t4, is_t4, as_t4, try_as_t4, into_t4, on_t4;
    }
}

one_of! {
    /// A value of exactly one of five types
    OneOf5, arity = 5 {
        T1(A) = 1 => from_t1, is_t1, as_t1, try_as_t1, into_t1, on_t1;
        T2(B) = 2 => from_t2, is_t2, as_t2, try_as_t2, into_t2, on_t2;
        T3(C) = 3 => from_t3, is_t3, as_t3, try_as_t3, into_t3, on_t3;
        T4(D) = 4 => from_t4, is_t4, as_t4, try_as_t4, into_t4, on_t4;
        T5(E) = 5 => from_t5, is_t5, as_t5, try_as_t5, into_t5, on_t5;
    }
}

one_of! {
    /// A value of exactly one of six types
    OneOf6, arity = 6 {
        T1(A) = 1 => from_t1, is_t1, as_t1, try_as_t1, into_t1, on_t1;
        T2(B) = 2 => from_t2, is_t2, as_t2, try_as_t2, into_t2, on_t2;
        T3(C) = 3 => from_t3, is_t3, as_t3, try_as_t3, into_t3, on_t3;
        T4(D) = 4 => from_t4, is_t4, as_t4, try_as_t4, into_t4, on_t4;
        T5(E) = 5 => from_t5, is_t5, as_t5, try_as_t5, into_t5, on_t5;
        T6(F) = 6 => from_t6, is_t6, as_t6, try_as_t6, into_t6, on_t6;
    }
}

one_of! {
    /// A value of exactly one of seven types
    OneOf7, arity = 7 {
        T1(A) = 1 => from_t1, is_t1, as_t1, try_as_t1, into_t1, on_t1;
        T2(B) = 2 => from_t2, is_t2, as_t2, try_as_t2, into_t2, on_t2;
        T3(C) = 3 => from_t3, is_t3, as_t3, try_as_t3, into_t3, on_t3;
        T4(D) = 4 => from_t4, is_t4, as_t4, try_as_t4, into_t4, on_t4;
        T5(E) = 5 => from_t5, is_t5, as_t5, try_as_t5, into_t5, on_t5;
        T6(F) = 6 => from_t6, is_t6, as_t6, try_as_t6, into_t6, on_t6;
        T7(G) = 7 => from_t7, is_t7, as_t7, try_as_t7, into_t7, on_t7;
    }
}

// ============================================================================
// Tests
// ============================================================================
