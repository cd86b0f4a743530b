//! Records, field values and the per-value capabilities the stringifier uses.

use std::any::{type_name, Any, TypeId};
use std::borrow::Cow;
use std::fmt;
use std::net::{IpAddr, Ipv4Addr, Ipv6Addr, SocketAddr};
use std::path::PathBuf;
use std::rc::Rc;
use std::sync::Arc;

use crate::error::BoxError;
use crate::schema::Schema;

/// A composite value whose fields become table columns.
///
/// Usually derived with `#[derive(Record)]`. `values` must yield one entry
/// per schema field, in schema order.
pub trait Record: Any {
    /// The field table of this type.
    fn schema() -> Schema
    where
        Self: Sized;

    /// The runtime values of all fields, skipped ones included.
    fn values(&self) -> Vec<FieldValue<'_>>;
}

/// Formats a value as text on its own terms.
///
/// Implement this for types that have a canonical textual form, such as
/// dates or identifiers. An error makes the stringifier fall back to scalar
/// formatting and then to an empty cell.
pub trait TextMarshal {
    fn marshal_text(&self) -> Result<String, BoxError>;
}

/// A primitive view of a field value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Scalar<'a> {
    Int(i64),
    Float(f64),
    Str(&'a str),
}

impl fmt::Display for Scalar<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scalar::Int(n) => write!(f, "{}", n),
            Scalar::Float(x) => write!(f, "{:.2}", x),
            Scalar::Str(s) => f.write_str(s),
        }
    }
}

/// Types with a primitive kind the stringifier knows how to print.
///
/// Unsigned integers, booleans and chars deliberately have no impl and
/// render as empty cells.
pub trait AsScalar {
    fn as_scalar(&self) -> Scalar<'_>;
}

macro_rules! impl_as_scalar_int {
    ($($ty:ty),*) => {
        $(
            impl AsScalar for $ty {
                fn as_scalar(&self) -> Scalar<'_> {
                    Scalar::Int(i64::from(*self))
                }
            }
        )*
    };
}

impl_as_scalar_int!(i8, i16, i32, i64);

impl AsScalar for isize {
    fn as_scalar(&self) -> Scalar<'_> {
        Scalar::Int(*self as i64)
    }
}

impl AsScalar for f32 {
    fn as_scalar(&self) -> Scalar<'_> {
        Scalar::Float(f64::from(*self))
    }
}

impl AsScalar for f64 {
    fn as_scalar(&self) -> Scalar<'_> {
        Scalar::Float(*self)
    }
}

impl AsScalar for String {
    fn as_scalar(&self) -> Scalar<'_> {
        Scalar::Str(self)
    }
}

impl AsScalar for &str {
    fn as_scalar(&self) -> Scalar<'_> {
        Scalar::Str(self)
    }
}

impl AsScalar for Box<str> {
    fn as_scalar(&self) -> Scalar<'_> {
        Scalar::Str(self)
    }
}

impl AsScalar for Cow<'static, str> {
    fn as_scalar(&self) -> Scalar<'_> {
        Scalar::Str(self)
    }
}

/// Scalar view recovered from a value's runtime type.
///
/// Used when the static field type did not reveal a scalar kind, as with a
/// field typed by a generic parameter.
pub(crate) fn scalar_of(value: &dyn Any) -> Option<Scalar<'_>> {
    macro_rules! downcast_kinds {
        ($($ty:ty),*) => {
            $(
                if let Some(kind) = value.downcast_ref::<$ty>() {
                    return Some(kind.as_scalar());
                }
            )*
        };
    }

    downcast_kinds!(
        i64,
        i32,
        i16,
        i8,
        isize,
        f64,
        f32,
        String,
        &'static str,
        Box<str>,
        Cow<'static, str>
    );
    None
}

macro_rules! impl_text_marshal_display {
    ($($ty:ty),*) => {
        $(
            impl TextMarshal for $ty {
                fn marshal_text(&self) -> Result<String, BoxError> {
                    Ok(self.to_string())
                }
            }
        )*
    };
}

impl_text_marshal_display!(IpAddr, Ipv4Addr, Ipv6Addr, SocketAddr);

impl TextMarshal for PathBuf {
    fn marshal_text(&self) -> Result<String, BoxError> {
        match self.to_str() {
            Some(path) => Ok(path.to_owned()),
            None => Err(format!("path {:?} is not valid UTF-8", self).into()),
        }
    }
}

macro_rules! impl_text_marshal_pointer {
    ($($ptr:ident),*) => {
        $(
            impl<T: TextMarshal + ?Sized> TextMarshal for $ptr<T> {
                fn marshal_text(&self) -> Result<String, BoxError> {
                    (**self).marshal_text()
                }
            }
        )*
    };
}

impl_text_marshal_pointer!(Box, Rc, Arc);

impl<T: TextMarshal + ?Sized> TextMarshal for &T {
    fn marshal_text(&self) -> Result<String, BoxError> {
        (**self).marshal_text()
    }
}

/// `None` has no text, so the cell falls through to empty.
impl<T: TextMarshal> TextMarshal for Option<T> {
    fn marshal_text(&self) -> Result<String, BoxError> {
        match self {
            Some(inner) => inner.marshal_text(),
            None => Err("no value".into()),
        }
    }
}

/// One field of a record instance, with the capabilities its type offers.
#[derive(Clone, Copy)]
pub struct FieldValue<'a> {
    value: &'a dyn Any,
    type_name: &'static str,
    text: Option<&'a dyn TextMarshal>,
    scalar: Option<Scalar<'a>>,
    record: Option<&'a dyn Record>,
}

impl<'a> FieldValue<'a> {
    /// Wrap a value with no capabilities attached.
    ///
    /// Such a value stringifies through the specialization registry, or as a
    /// scalar when its runtime type is one. Chain the `with_*` methods to
    /// attach capabilities.
    pub fn new<T: Any>(value: &'a T) -> Self {
        FieldValue {
            value,
            type_name: type_name::<T>(),
            text: None,
            scalar: None,
            record: None,
        }
    }

    /// Wrap a value with capabilities detected by the derive macro.
    pub fn from_parts<T: Any>(
        value: &'a T,
        text: Option<&'a dyn TextMarshal>,
        scalar: Option<Scalar<'a>>,
        record: Option<&'a dyn Record>,
    ) -> Self {
        FieldValue {
            text,
            scalar,
            record,
            ..Self::new(value)
        }
    }

    pub fn with_text(mut self, text: &'a dyn TextMarshal) -> Self {
        self.text = Some(text);
        self
    }

    pub fn with_scalar(mut self, scalar: Scalar<'a>) -> Self {
        self.scalar = Some(scalar);
        self
    }

    pub fn with_record(mut self, record: &'a dyn Record) -> Self {
        self.record = Some(record);
        self
    }

    /// The value itself, for downcasting.
    pub fn value(&self) -> &'a dyn Any {
        self.value
    }

    /// Runtime type of the value.
    pub fn value_type_id(&self) -> TypeId {
        (*self.value).type_id()
    }

    pub fn type_name(&self) -> &'static str {
        self.type_name
    }

    pub fn text(&self) -> Option<&'a dyn TextMarshal> {
        self.text
    }

    pub fn scalar(&self) -> Option<Scalar<'a>> {
        self.scalar
    }

    /// The value as a record, when its type is one.
    pub fn record(&self) -> Option<&'a dyn Record> {
        self.record
    }
}

impl fmt::Debug for FieldValue<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FieldValue")
            .field("type_name", &self.type_name)
            .field("scalar", &self.scalar)
            .field("text", &self.text.is_some())
            .field("record", &self.record.is_some())
            .finish()
    }
}
