//! Compile-time capability detection for derived records.
//!
//! The derive macro knows field types only as tokens, so it cannot ask
//! whether a type implements `TextMarshal`, `AsScalar` or `Record`. Instead it
//! calls detection methods on `&&Detect(value)`. Each capability has two traits:
//! one implemented for `&Detect<T>` when `T` has the capability, and a fallback
//! implemented for `Detect<T>` unconditionally. Method resolution tries the
//! receiver `&&Detect` before auto-deref to `&Detect`, so the capable impl wins
//! whenever it applies.
//!
//! A field whose type is a bare generic parameter resolves against the
//! parameter's bounds, which usually selects the fallback.

use std::marker::PhantomData;

use crate::record::{AsScalar, Record, Scalar, TextMarshal};
use crate::schema::Schema;

/// Wraps a field value for capability detection.
pub struct Detect<'a, T: ?Sized>(pub &'a T);

/// Wraps a field type for type-level detection.
pub struct DetectType<T>(PhantomData<fn() -> T>);

impl<T> DetectType<T> {
    pub fn new() -> Self {
        DetectType(PhantomData)
    }
}

impl<T> Default for DetectType<T> {
    fn default() -> Self {
        Self::new()
    }
}

pub trait TextViaMarshal<'a> {
    fn text_capability(&self) -> Option<&'a dyn TextMarshal>;
}

impl<'a, T: TextMarshal + 'a> TextViaMarshal<'a> for &Detect<'a, T> {
    fn text_capability(&self) -> Option<&'a dyn TextMarshal> {
        Some(self.0)
    }
}

pub trait TextFallback<'a> {
    fn text_capability(&self) -> Option<&'a dyn TextMarshal> {
        None
    }
}

impl<'a, T: ?Sized> TextFallback<'a> for Detect<'a, T> {}

pub trait ScalarViaKind<'a> {
    fn scalar_capability(&self) -> Option<Scalar<'a>>;
}

impl<'a, T: AsScalar + 'a> ScalarViaKind<'a> for &Detect<'a, T> {
    fn scalar_capability(&self) -> Option<Scalar<'a>> {
        Some(AsScalar::as_scalar(self.0))
    }
}

pub trait ScalarFallback<'a> {
    fn scalar_capability(&self) -> Option<Scalar<'a>> {
        None
    }
}

impl<'a, T: ?Sized> ScalarFallback<'a> for Detect<'a, T> {}

pub trait RecordViaDerive<'a> {
    fn record_capability(&self) -> Option<&'a dyn Record>;
}

impl<'a, T: Record> RecordViaDerive<'a> for &Detect<'a, T> {
    fn record_capability(&self) -> Option<&'a dyn Record> {
        Some(self.0)
    }
}

pub trait RecordFallback<'a> {
    fn record_capability(&self) -> Option<&'a dyn Record> {
        None
    }
}

impl<'a, T: ?Sized> RecordFallback<'a> for Detect<'a, T> {}

pub trait NestedViaRecord {
    fn nested_schema(&self) -> Option<fn() -> Schema>;
}

impl<T: Record> NestedViaRecord for &DetectType<T> {
    fn nested_schema(&self) -> Option<fn() -> Schema> {
        Some(T::schema as fn() -> Schema)
    }
}

pub trait NestedFallback {
    fn nested_schema(&self) -> Option<fn() -> Schema> {
        None
    }
}

impl<T> NestedFallback for DetectType<T> {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::BoxError;
    use crate::record::FieldValue;
    use crate::schema::FieldDef;

    struct Stamp(u32);

    impl TextMarshal for Stamp {
        fn marshal_text(&self) -> Result<String, BoxError> {
            Ok(format!("t{}", self.0))
        }
    }

    struct Inner {
        name: String,
    }

    impl Record for Inner {
        fn schema() -> Schema {
            Schema::of::<Self>(vec![FieldDef::of::<String>("name")])
        }

        fn values(&self) -> Vec<FieldValue<'_>> {
            vec![FieldValue::new(&self.name)]
        }
    }

    #[test]
    fn test_text_detection() {
        let stamp = Stamp(3);
        let found = (&&Detect(&stamp)).text_capability();
        assert_eq!(found.unwrap().marshal_text().unwrap(), "t3");

        let n = 3i64;
        assert!((&&Detect(&n)).text_capability().is_none());
    }

    #[test]
    fn test_scalar_detection() {
        let n = -9i32;
        assert_eq!((&&Detect(&n)).scalar_capability(), Some(Scalar::Int(-9)));

        let unsigned = 9u32;
        assert_eq!((&&Detect(&unsigned)).scalar_capability(), None);

        let flag = true;
        assert_eq!((&&Detect(&flag)).scalar_capability(), None);
    }

    #[test]
    fn test_record_detection() {
        let inner = Inner {
            name: "x".to_string(),
        };
        let record = (&&Detect(&inner)).record_capability().unwrap();
        assert_eq!(record.values().len(), 1);

        let stamp = Stamp(1);
        assert!((&&Detect(&stamp)).record_capability().is_none());
    }

    #[test]
    fn test_nested_detection() {
        let nested = (&&DetectType::<Inner>::new()).nested_schema().unwrap();
        assert_eq!(nested().fields[0].name, "name");
        assert!((&&DetectType::<String>::new()).nested_schema().is_none());
    }
}
