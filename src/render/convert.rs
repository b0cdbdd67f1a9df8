//! Conversion of Rust values into renderable [`Value`]s.

use std::any::Any;
use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet, LinkedList, VecDeque};
use std::rc::Rc;
use std::sync::mpsc::{Receiver, Sender, SyncSender};
use std::sync::Arc;

use crate::render::value::{Opaque, Record, Value};

/// Conversion into the closed set of renderable categories.
///
/// References are transparent: `&T` converts like `T`. Owning pointers,
/// containers and callables convert to their [`Opaque`] label.
pub trait ToValue {
    fn to_value(&self) -> Value;

    /// Consuming conversion; owned values and records move instead of cloning.
    fn into_value(self) -> Value
    where
        Self: Sized,
    {
        self.to_value()
    }
}

impl<T: ToValue + ?Sized> ToValue for &T {
    fn to_value(&self) -> Value {
        (**self).to_value()
    }
}

impl<T: ToValue + ?Sized> ToValue for &mut T {
    fn to_value(&self) -> Value {
        (**self).to_value()
    }
}

impl ToValue for Value {
    fn to_value(&self) -> Value {
        self.clone()
    }

    fn into_value(self) -> Value {
        self
    }
}

impl ToValue for Record {
    fn to_value(&self) -> Value {
        Value::Record(self.clone())
    }

    fn into_value(self) -> Value {
        Value::Record(self)
    }
}

impl ToValue for Opaque {
    fn to_value(&self) -> Value {
        Value::Opaque(*self)
    }
}

impl<T: ToValue> ToValue for Option<T> {
    fn to_value(&self) -> Value {
        match self {
            Some(value) => value.to_value(),
            None => Value::Invalid,
        }
    }
}

impl ToValue for () {
    fn to_value(&self) -> Value {
        Value::Unknown
    }
}

impl ToValue for bool {
    fn to_value(&self) -> Value {
        Value::Bool(*self)
    }
}

macro_rules! signed_to_value {
    ($($ty:ty),*) => {
        $(impl ToValue for $ty {
            fn to_value(&self) -> Value {
                Value::Int(i128::from(*self))
            }
        })*
    };
}

macro_rules! unsigned_to_value {
    ($($ty:ty),*) => {
        $(impl ToValue for $ty {
            fn to_value(&self) -> Value {
                Value::Uint(u128::from(*self))
            }
        })*
    };
}

signed_to_value!(i8, i16, i32, i64, i128);
unsigned_to_value!(u8, u16, u32, u64, u128);

impl ToValue for isize {
    fn to_value(&self) -> Value {
        Value::Int(*self as i128)
    }
}

impl ToValue for usize {
    fn to_value(&self) -> Value {
        Value::Uint(*self as u128)
    }
}

impl ToValue for f32 {
    fn to_value(&self) -> Value {
        Value::F32(*self)
    }
}

impl ToValue for f64 {
    fn to_value(&self) -> Value {
        Value::F64(*self)
    }
}

impl ToValue for str {
    fn to_value(&self) -> Value {
        Value::Str(self.to_string())
    }
}

impl ToValue for String {
    fn to_value(&self) -> Value {
        Value::Str(self.clone())
    }

    fn into_value(self) -> Value {
        Value::Str(self)
    }
}

impl ToValue for char {
    fn to_value(&self) -> Value {
        Value::Str(self.to_string())
    }
}

macro_rules! opaque_to_value {
    ($opaque:expr => $(impl<$($gen:ident),*> for $ty:ty),* $(,)?) => {
        $(impl<$($gen: ?Sized),*> ToValue for $ty {
            fn to_value(&self) -> Value {
                Value::Opaque($opaque)
            }
        })*
    };
}

opaque_to_value!(Opaque::Pointer =>
    impl<T> for Box<T>,
    impl<T> for Rc<T>,
    impl<T> for Arc<T>,
);

opaque_to_value!(Opaque::UnsafePointer =>
    impl<T> for *const T,
    impl<T> for *mut T,
);

impl<T> ToValue for [T] {
    fn to_value(&self) -> Value {
        Value::Opaque(Opaque::Slice)
    }
}

impl<T> ToValue for Vec<T> {
    fn to_value(&self) -> Value {
        Value::Opaque(Opaque::Slice)
    }
}

impl<T> ToValue for VecDeque<T> {
    fn to_value(&self) -> Value {
        Value::Opaque(Opaque::Slice)
    }
}

impl<T> ToValue for LinkedList<T> {
    fn to_value(&self) -> Value {
        Value::Opaque(Opaque::Slice)
    }
}

impl<T, const N: usize> ToValue for [T; N] {
    fn to_value(&self) -> Value {
        Value::Opaque(Opaque::Array)
    }
}

impl<K, V, S> ToValue for HashMap<K, V, S> {
    fn to_value(&self) -> Value {
        Value::Opaque(Opaque::Map)
    }
}

impl<K, V> ToValue for BTreeMap<K, V> {
    fn to_value(&self) -> Value {
        Value::Opaque(Opaque::Map)
    }
}

impl<T, S> ToValue for HashSet<T, S> {
    fn to_value(&self) -> Value {
        Value::Opaque(Opaque::Map)
    }
}

impl<T> ToValue for BTreeSet<T> {
    fn to_value(&self) -> Value {
        Value::Opaque(Opaque::Map)
    }
}

impl<T> ToValue for Sender<T> {
    fn to_value(&self) -> Value {
        Value::Opaque(Opaque::Channel)
    }
}

impl<T> ToValue for SyncSender<T> {
    fn to_value(&self) -> Value {
        Value::Opaque(Opaque::Channel)
    }
}

impl<T> ToValue for Receiver<T> {
    fn to_value(&self) -> Value {
        Value::Opaque(Opaque::Channel)
    }
}

impl ToValue for dyn Any {
    fn to_value(&self) -> Value {
        Value::Opaque(Opaque::Interface)
    }
}

impl ToValue for dyn Any + Send + Sync {
    fn to_value(&self) -> Value {
        Value::Opaque(Opaque::Interface)
    }
}

macro_rules! fn_to_value {
    ($(($($arg:ident),*)),*) => {
        $(impl<R, $($arg),*> ToValue for fn($($arg),*) -> R {
            fn to_value(&self) -> Value {
                Value::Opaque(Opaque::Function)
            }
        })*
    };
}

fn_to_value!((), (A), (A, B), (A, B, C), (A, B, C, D));

/// Implement [`ToValue`] for a struct by listing the fields to render.
///
/// Each listed field must itself implement [`ToValue`]. Field names are
/// rendered as written, and the renderer's exclusion list still applies.
///
/// ```
/// struct User {
///     name: String,
///     age: u32,
/// }
///
/// varlog::impl_record!(User { name, age });
///
/// let user = User { name: "Alice".into(), age: 30 };
/// assert_eq!(varlog::render(&user), "\n\tname: Alice\n\tage: 30\n");
/// ```
#[macro_export]
macro_rules! impl_record {
    ($ty:ty { $($field:ident),* $(,)? }) => {
        impl $crate::render::ToValue for $ty {
            fn to_value(&self) -> $crate::render::Value {
                #[allow(unused_mut)]
                let mut record = $crate::render::Record::new();
                $(record.push(::std::stringify!($field), &self.$field);)*
                $crate::render::Value::Record(record)
            }
        }
    };
}
