//! Renderable value categories.

use crate::render::convert::ToValue;

/// A value captured for rendering in a VARS block.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// Absent or null value.
    Invalid,
    Bool(bool),
    /// Any signed integer width.
    Int(i128),
    /// Any unsigned integer width.
    Uint(u128),
    F32(f32),
    F64(f64),
    Str(String),
    /// Structured value with named fields.
    Record(Record),
    /// Category rendered by label only.
    Opaque(Opaque),
    /// Shape with no rendering rule.
    Unknown,
}

impl Value {
    /// Label-only value for a callable.
    pub fn function() -> Self {
        Value::Opaque(Opaque::Function)
    }

    /// Label-only value for a raw address held as an integer.
    pub fn address(_addr: usize) -> Self {
        Value::Opaque(Opaque::UintPointer)
    }

    /// Label-only value for a complex number with `f32` parts.
    pub fn complex64(_re: f32, _im: f32) -> Self {
        Value::Opaque(Opaque::Complex64)
    }

    /// Label-only value for a complex number with `f64` parts.
    pub fn complex128(_re: f64, _im: f64) -> Self {
        Value::Opaque(Opaque::Complex128)
    }

    pub fn is_invalid(&self) -> bool {
        matches!(self, Value::Invalid)
    }
}

impl From<Record> for Value {
    fn from(record: Record) -> Self {
        Value::Record(record)
    }
}

impl From<Opaque> for Value {
    fn from(opaque: Opaque) -> Self {
        Value::Opaque(opaque)
    }
}

/// Categories whose contents are never introspected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Opaque {
    Pointer,
    Function,
    Channel,
    Array,
    Slice,
    Map,
    Interface,
    Complex64,
    Complex128,
    UintPointer,
    UnsafePointer,
}

impl Opaque {
    /// Fixed label rendered for this category.
    pub const fn label(self) -> &'static str {
        match self {
            Opaque::Pointer => "POINTER",
            Opaque::Function => "FUNCTION",
            Opaque::Channel => "CHANNEL",
            Opaque::Array => "ARRAY",
            Opaque::Slice => "SLICE",
            Opaque::Map => "MAP",
            Opaque::Interface => "INTERFACE",
            Opaque::Complex64 => "COMPLEX64",
            Opaque::Complex128 => "COMPLEX128",
            Opaque::UintPointer => "UINT POINTER",
            Opaque::UnsafePointer => "UNSAFE POINTER",
        }
    }
}

/// One named field of a [`Record`].
#[derive(Debug, Clone, PartialEq)]
pub struct Field {
    pub name: String,
    pub value: Value,
}

/// Structured value with named fields, kept in declaration order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Record {
    fields: Vec<Field>,
}

impl Record {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a field, builder style.
    pub fn field<V: ToValue>(mut self, name: impl Into<String>, value: V) -> Self {
        self.push(name, value);
        self
    }

    pub fn push<V: ToValue>(&mut self, name: impl Into<String>, value: V) {
        self.fields.push(Field {
            name: name.into(),
            value: value.into_value(),
        });
    }

    pub fn fields(&self) -> &[Field] {
        &self.fields
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

// Nested records are unlinked onto a work list so dropping a deep tree
// does not recurse once per level.
impl Drop for Record {
    fn drop(&mut self) {
        let mut pending = std::mem::take(&mut self.fields);
        while let Some(field) = pending.pop() {
            if let Value::Record(mut inner) = field.value {
                pending.append(&mut inner.fields);
            }
        }
    }
}
