use std::io::Read;

use crate::value::{CompositeRef, Key, Record, RecordRef, Value};
use crate::Result;

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Bool(value)
    }
}

macro_rules! int_into_value {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for Value {
                fn from(value: $ty) -> Self {
                    Value::Int(value as i64)
                }
            }
        )*
    };
}

int_into_value!(i8, i16, i32, i64, u8, u16, u32, usize, isize);

impl From<f32> for Value {
    fn from(value: f32) -> Self {
        Value::Float(value as f64)
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Value::Float(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::Text(value.to_string())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::Text(value)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(value: Option<T>) -> Self {
        value.map(Into::into).unwrap_or(Value::Null)
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(values: Vec<T>) -> Self {
        let composite = CompositeRef::new();
        for value in values {
            composite.push(value);
        }
        Value::Composite(composite)
    }
}

impl From<CompositeRef> for Value {
    fn from(composite: CompositeRef) -> Self {
        Value::Composite(composite)
    }
}

impl From<RecordRef> for Value {
    fn from(record: RecordRef) -> Self {
        Value::Structured(record)
    }
}

impl From<Record> for Value {
    fn from(record: Record) -> Self {
        Value::Structured(RecordRef::from(record))
    }
}

/// JSON objects become name-keyed composites, arrays index-keyed ones.
impl From<serde_json::Value> for Value {
    fn from(json: serde_json::Value) -> Self {
        match json {
            serde_json::Value::Null => Value::Null,
            serde_json::Value::Bool(b) => Value::Bool(b),
            serde_json::Value::Number(n) => match n.as_i64() {
                Some(i) => Value::Int(i),
                None => Value::Float(n.as_f64().unwrap_or(f64::NAN)),
            },
            serde_json::Value::String(s) => Value::Text(s),
            serde_json::Value::Array(items) => Value::from(items),
            serde_json::Value::Object(map) => {
                let composite = CompositeRef::new();
                for (key, value) in map {
                    composite.insert(Key::Name(key), value);
                }
                Value::Composite(composite)
            }
        }
    }
}

impl Value {
    pub fn from_json_str(input: &str) -> Result<Self> {
        let json: serde_json::Value = serde_json::from_str(input)?;
        Ok(json.into())
    }

    pub fn from_json_reader(reader: impl Read) -> Result<Self> {
        let json: serde_json::Value = serde_json::from_reader(reader)?;
        Ok(json.into())
    }
}
