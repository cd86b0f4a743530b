//! What can be handed to the table builder.

use std::rc::Rc;
use std::sync::Arc;

use crate::capability::{TabBody, TabFooter, TabHeader};
use crate::record::Record;
use crate::schema::{Describe, Shape};

/// A table input: a record, a sequence of records, or something wrapping one.
///
/// Derived for records by `#[derive(Record)]` and for single-field wrappers
/// by `#[derive(Tabulate)]`. Scalars implement it too, so handing one to
/// [`build`](crate::build) fails at runtime with `NotARecord` rather than
/// at compile time.
pub trait Tabulate: Describe {
    /// The records that become body rows, in order.
    fn rows(&self) -> Vec<&dyn Record>;

    /// Whether the input is absent (`None`).
    fn is_absent(&self) -> bool {
        false
    }

    fn header_capability(&self) -> Option<&dyn TabHeader> {
        None
    }

    fn body_capability(&self) -> Option<&dyn TabBody> {
        None
    }

    fn footer_capability(&self) -> Option<&dyn TabFooter> {
        None
    }
}

macro_rules! impl_scalar_input {
    ($($ty:ty),*) => {
        $(
            impl Describe for $ty {
                fn describe() -> Shape {
                    Shape::Scalar(std::any::type_name::<$ty>())
                }
            }

            impl Tabulate for $ty {
                fn rows(&self) -> Vec<&dyn Record> {
                    Vec::new()
                }
            }
        )*
    };
}

impl_scalar_input!(
    i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64, bool, char, str,
    String
);

impl<T: Describe> Describe for [T] {
    fn describe() -> Shape {
        Shape::Sequence(Box::new(T::describe()))
    }
}

impl<T: Tabulate> Tabulate for [T] {
    fn rows(&self) -> Vec<&dyn Record> {
        self.iter().flat_map(|item| item.rows()).collect()
    }
}

impl<T: Describe, const N: usize> Describe for [T; N] {
    fn describe() -> Shape {
        <[T]>::describe()
    }
}

impl<T: Tabulate, const N: usize> Tabulate for [T; N] {
    fn rows(&self) -> Vec<&dyn Record> {
        self.as_slice().rows()
    }
}

impl<T: Describe> Describe for Vec<T> {
    fn describe() -> Shape {
        <[T]>::describe()
    }
}

impl<T: Tabulate> Tabulate for Vec<T> {
    fn rows(&self) -> Vec<&dyn Record> {
        self.as_slice().rows()
    }
}

impl<T: Describe> Describe for Option<T> {
    fn describe() -> Shape {
        T::describe()
    }
}

impl<T: Tabulate> Tabulate for Option<T> {
    fn rows(&self) -> Vec<&dyn Record> {
        match self {
            Some(inner) => inner.rows(),
            None => Vec::new(),
        }
    }

    fn is_absent(&self) -> bool {
        match self {
            Some(inner) => inner.is_absent(),
            None => true,
        }
    }

    fn header_capability(&self) -> Option<&dyn TabHeader> {
        self.as_ref().and_then(|inner| inner.header_capability())
    }

    fn body_capability(&self) -> Option<&dyn TabBody> {
        self.as_ref().and_then(|inner| inner.body_capability())
    }

    fn footer_capability(&self) -> Option<&dyn TabFooter> {
        self.as_ref().and_then(|inner| inner.footer_capability())
    }
}

macro_rules! impl_pointer_input {
    ($($ptr:ident),*) => {
        $(
            impl<T: Describe + ?Sized> Describe for $ptr<T> {
                fn describe() -> Shape {
                    T::describe()
                }
            }

            impl<T: Tabulate + ?Sized> Tabulate for $ptr<T> {
                fn rows(&self) -> Vec<&dyn Record> {
                    (**self).rows()
                }

                fn is_absent(&self) -> bool {
                    (**self).is_absent()
                }

                fn header_capability(&self) -> Option<&dyn TabHeader> {
                    (**self).header_capability()
                }

                fn body_capability(&self) -> Option<&dyn TabBody> {
                    (**self).body_capability()
                }

                fn footer_capability(&self) -> Option<&dyn TabFooter> {
                    (**self).footer_capability()
                }
            }
        )*
    };
}

impl_pointer_input!(Box, Rc, Arc);

impl<T: Describe + ?Sized> Describe for &T {
    fn describe() -> Shape {
        T::describe()
    }
}

impl<T: Tabulate + ?Sized> Tabulate for &T {
    fn rows(&self) -> Vec<&dyn Record> {
        (**self).rows()
    }

    fn is_absent(&self) -> bool {
        (**self).is_absent()
    }

    fn header_capability(&self) -> Option<&dyn TabHeader> {
        (**self).header_capability()
    }

    fn body_capability(&self) -> Option<&dyn TabBody> {
        (**self).body_capability()
    }

    fn footer_capability(&self) -> Option<&dyn TabFooter> {
        (**self).footer_capability()
    }
}
