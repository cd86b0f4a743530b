//! Field metadata and type shapes.
//!
//! A [`Schema`] is the compile-time description of a record type: its fields
//! in declaration order, each with the raw `tab` annotation and the identity
//! of the declared type. [`Shape`] describes what an input type looks like
//! from the outside (a record, a sequence of something, or a scalar).

use std::any::{type_name, TypeId};
use std::fmt;

use crate::error::{Result, TableError};
use crate::record::Record;

/// Annotation value that excludes a field.
pub const SKIP_TAG: &str = "-";

/// Static description of one record field.
#[derive(Clone, Copy)]
pub struct FieldDef {
    /// Declared field name.
    pub name: &'static str,
    /// Raw `tab` annotation, if any.
    pub tag: Option<&'static str>,
    /// Identity of the declared field type.
    pub type_id: TypeId,
    /// Name of the declared field type, for diagnostics.
    pub type_name: &'static str,
    /// Schema of the field type when that type is itself a record.
    pub nested: Option<fn() -> Schema>,
}

/// How a field shows up in the header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Column {
    pub display: &'static str,
    pub skip: bool,
}

impl FieldDef {
    /// Describe a field of type `T` with no annotation and no nested schema.
    pub fn of<T: ?Sized + 'static>(name: &'static str) -> Self {
        FieldDef {
            name,
            tag: None,
            type_id: TypeId::of::<T>(),
            type_name: type_name::<T>(),
            nested: None,
        }
    }

    /// Describe a field whose type is a record, so it can be inlined.
    pub fn record<T: Record>(name: &'static str) -> Self {
        Self::of::<T>(name).with_nested(Some(T::schema as fn() -> Schema))
    }

    /// Set the raw annotation.
    pub fn with_tag(mut self, tag: impl Into<Option<&'static str>>) -> Self {
        self.tag = tag.into();
        self
    }

    /// Set the nested schema.
    pub fn with_nested(mut self, nested: Option<fn() -> Schema>) -> Self {
        self.nested = nested;
        self
    }

    /// Resolve the annotation into a display name and skip flag.
    ///
    /// `"-"` skips the field; any other non-empty tag renames it; otherwise the
    /// declared name is used.
    pub fn resolve(&self) -> Column {
        match self.tag {
            Some(SKIP_TAG) => Column {
                display: self.name,
                skip: true,
            },
            Some(tag) if !tag.is_empty() => Column {
                display: tag,
                skip: false,
            },
            _ => Column {
                display: self.name,
                skip: false,
            },
        }
    }

    /// The nested schema, if the field type is a record.
    pub fn nested_schema(&self) -> Option<Schema> {
        self.nested.map(|schema| schema())
    }
}

impl fmt::Debug for FieldDef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FieldDef")
            .field("name", &self.name)
            .field("tag", &self.tag)
            .field("type_name", &self.type_name)
            .field("nested", &self.nested.is_some())
            .finish()
    }
}

/// Ordered field table of a record type.
#[derive(Debug, Clone)]
pub struct Schema {
    pub type_id: TypeId,
    pub type_name: &'static str,
    pub fields: Vec<FieldDef>,
}

impl Schema {
    /// Build the schema of record type `T`.
    pub fn of<T: ?Sized + 'static>(fields: Vec<FieldDef>) -> Self {
        Schema {
            type_id: TypeId::of::<T>(),
            type_name: type_name::<T>(),
            fields,
        }
    }

    /// Resolve the field at `index`, or `None` past the last field.
    pub fn resolve(&self, index: usize) -> Option<Column> {
        self.fields.get(index).map(FieldDef::resolve)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

/// What an input type looks like.
#[derive(Debug, Clone)]
pub enum Shape {
    /// A record with a field schema.
    Record(Schema),
    /// A sequence of elements of the inner shape.
    Sequence(Box<Shape>),
    /// Anything that is neither: integers, strings, maps and so on.
    Scalar(&'static str),
}

impl Shape {
    /// Human readable name of the shape, used in errors.
    pub fn type_name(&self) -> String {
        match self {
            Shape::Record(schema) => schema.type_name.to_string(),
            Shape::Sequence(inner) => format!("[{}]", inner.type_name()),
            Shape::Scalar(name) => (*name).to_string(),
        }
    }

    /// The record schema rows are built from.
    ///
    /// A sequence is looked through exactly once, so a sequence of sequences
    /// is not a record.
    pub fn record_schema(&self) -> Result<&Schema> {
        match self {
            Shape::Record(schema) => Ok(schema),
            Shape::Sequence(inner) => match inner.as_ref() {
                Shape::Record(schema) => Ok(schema),
                _ => Err(self.not_a_record()),
            },
            Shape::Scalar(_) => Err(self.not_a_record()),
        }
    }

    fn not_a_record(&self) -> TableError {
        TableError::NotARecord {
            type_name: self.type_name(),
        }
    }
}

/// Type-level shape of a table input.
pub trait Describe {
    fn describe() -> Shape;
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Point;

    fn point_schema() -> Schema {
        Schema::of::<Point>(vec![
            FieldDef::of::<i64>("x"),
            FieldDef::of::<i64>("y").with_tag("vertical"),
            FieldDef::of::<String>("label").with_tag("-"),
            FieldDef::of::<String>("note").with_tag(""),
        ])
    }

    #[test]
    fn test_resolve_untagged_uses_name() {
        let column = point_schema().resolve(0).unwrap();
        assert_eq!(
            column,
            Column {
                display: "x",
                skip: false
            }
        );
    }

    #[test]
    fn test_resolve_tag_renames() {
        assert_eq!(point_schema().resolve(1).unwrap().display, "vertical");
    }

    #[test]
    fn test_resolve_dash_skips() {
        assert!(point_schema().resolve(2).unwrap().skip);
    }

    #[test]
    fn test_resolve_empty_tag_uses_name() {
        let column = point_schema().resolve(3).unwrap();
        assert_eq!(column.display, "note");
        assert!(!column.skip);
    }

    #[test]
    fn test_resolve_out_of_range() {
        assert!(point_schema().resolve(4).is_none());
    }

    #[test]
    fn test_field_def_type_identity() {
        let field = FieldDef::of::<u8>("flags");
        assert_eq!(field.type_id, TypeId::of::<u8>());
        assert_eq!(field.type_name, "u8");
        assert!(field.nested_schema().is_none());
    }

    #[test]
    fn test_record_schema_of_record() {
        let shape = Shape::Record(point_schema());
        assert_eq!(shape.record_schema().unwrap().len(), 4);
    }

    #[test]
    fn test_record_schema_looks_through_one_sequence() {
        let shape = Shape::Sequence(Box::new(Shape::Record(point_schema())));
        assert_eq!(shape.record_schema().unwrap().type_id, TypeId::of::<Point>());
    }

    #[test]
    fn test_record_schema_rejects_nested_sequence() {
        let shape = Shape::Sequence(Box::new(Shape::Sequence(Box::new(Shape::Record(
            point_schema(),
        )))));
        match shape.record_schema() {
            Err(TableError::NotARecord { type_name }) => assert!(type_name.starts_with("[[")),
            other => panic!("expected NotARecord, got {:?}", other),
        }
    }

    #[test]
    fn test_record_schema_rejects_scalar() {
        let shape = Shape::Scalar("i64");
        assert!(matches!(
            shape.record_schema(),
            Err(TableError::NotARecord { .. })
        ));
    }
}
