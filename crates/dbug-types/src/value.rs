use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use crate::kind::ValueKind;

/// A value that can be dumped.
///
/// Composites and structured values are shared handles, so a graph built from
/// them may contain cycles (a collection that holds itself, an object whose
/// field points back at its parent). The renderer detects those by identity.
#[derive(Debug, Clone)]
pub enum Value {
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    Text(String),
    Resource(Resource),
    Composite(CompositeRef),
    Structured(RecordRef),
}

impl Value {
    pub fn text(text: impl Into<String>) -> Self {
        Value::Text(text.into())
    }

    pub fn resource(kind: impl Into<String>) -> Self {
        Value::Resource(Resource { kind: kind.into() })
    }

    /// Classify the value once; everything downstream matches on the result.
    pub fn kind(&self) -> ValueKind {
        match self {
            Value::Null => ValueKind::Null,
            Value::Bool(_) => ValueKind::Bool,
            Value::Int(_) => ValueKind::Int,
            Value::Float(_) => ValueKind::Float,
            Value::Text(_) => ValueKind::Text,
            Value::Resource(_) => ValueKind::Resource,
            Value::Composite(_) => ValueKind::Composite,
            Value::Structured(_) => ValueKind::Structured,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Value::Text(text) => Some(text),
            _ => None,
        }
    }

    /// View the value as a composite.
    ///
    /// Composites are returned as-is, structured values become their field
    /// mapping, anything else becomes a single entry under key `0`.
    pub fn to_composite(&self) -> CompositeRef {
        match self {
            Value::Composite(composite) => composite.clone(),
            Value::Structured(record) => {
                let composite = CompositeRef::new();
                for (name, value) in record.fields() {
                    composite.insert(Key::Name(name), value);
                }
                composite
            }
            other => {
                let composite = CompositeRef::new();
                composite.push(other.clone());
                composite
            }
        }
    }

    /// View the value as a structured record.
    ///
    /// Non-structured values are wrapped as `stdClass { value: <self> }`.
    pub fn to_record(&self) -> RecordRef {
        match self {
            Value::Structured(record) => record.clone(),
            other => RecordRef::from(Record::new("stdClass").field("value", other.clone())),
        }
    }
}

/// Opaque handle (file, socket, stream) shown only by its kind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resource {
    pub kind: String,
}

/// Key of a composite entry.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Key {
    Index(i64),
    Name(String),
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Key::Index(index) => write!(f, "{}", index),
            Key::Name(name) => f.write_str(name),
        }
    }
}

impl From<&str> for Key {
    fn from(name: &str) -> Self {
        Key::Name(name.to_string())
    }
}

impl From<String> for Key {
    fn from(name: String) -> Self {
        Key::Name(name)
    }
}

impl From<i64> for Key {
    fn from(index: i64) -> Self {
        Key::Index(index)
    }
}

impl From<usize> for Key {
    fn from(index: usize) -> Self {
        Key::Index(index as i64)
    }
}

/// Allocation identity of a shared node, used for cycle detection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeId {
    Composite(usize),
    Record(usize),
}

/// Ordered key/value collection. Keys are unique; inserting an existing key
/// replaces its value in place.
#[derive(Debug, Default)]
pub struct Composite {
    entries: Vec<(Key, Value)>,
    next_index: i64,
    /// `i64::MAX` is taken, so no free index remains.
    indexes_exhausted: bool,
}

impl Composite {
    pub fn entries(&self) -> &[(Key, Value)] {
        &self.entries
    }

    fn insert(&mut self, key: Key, value: Value) {
        if let Key::Index(index) = key
            && index >= self.next_index
        {
            match index.checked_add(1) {
                Some(next) => self.next_index = next,
                None => {
                    self.next_index = index;
                    self.indexes_exhausted = true;
                }
            }
        }

        match self.entries.iter_mut().find(|(existing, _)| *existing == key) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((key, value)),
        }
    }

    fn push(&mut self, value: Value) {
        if self.indexes_exhausted {
            return;
        }
        let key = Key::Index(self.next_index);
        self.insert(key, value);
    }
}

/// Shared, mutable handle to a [`Composite`].
#[derive(Clone, Default)]
pub struct CompositeRef(Rc<RefCell<Composite>>);

impl CompositeRef {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append under the next free integer index. Nothing is appended once
    /// `i64::MAX` is in use.
    pub fn push(&self, value: impl Into<Value>) {
        self.0.borrow_mut().push(value.into());
    }

    pub fn insert(&self, key: impl Into<Key>, value: impl Into<Value>) {
        self.0.borrow_mut().insert(key.into(), value.into());
    }

    pub fn len(&self) -> usize {
        self.0.borrow().entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.borrow().entries.is_empty()
    }

    /// Snapshot of the entries. Nested handles are shared, not deep-copied.
    pub fn entries(&self) -> Vec<(Key, Value)> {
        self.0.borrow().entries.clone()
    }

    pub fn get(&self, key: &Key) -> Option<Value> {
        self.0
            .borrow()
            .entries
            .iter()
            .find(|(existing, _)| existing == key)
            .map(|(_, value)| value.clone())
    }

    pub fn id(&self) -> NodeId {
        NodeId::Composite(Rc::as_ptr(&self.0) as *const () as usize)
    }

    pub fn ptr_eq(&self, other: &CompositeRef) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

// Entries are not printed: a cyclic composite would recurse forever.
impl fmt::Debug for CompositeRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CompositeRef")
            .field("id", &self.id())
            .field("len", &self.len())
            .finish()
    }
}

impl<K: Into<Key>, V: Into<Value>> FromIterator<(K, V)> for CompositeRef {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let composite = CompositeRef::new();
        for (key, value) in iter {
            composite.insert(key, value);
        }
        composite
    }
}

/// Record-like value: a class name, ordered own fields and callable member
/// names. Members are only listed, never invoked.
#[derive(Debug, Clone, Default)]
pub struct Record {
    pub class: String,
    pub fields: Vec<(String, Value)>,
    pub methods: Vec<String>,
}

impl Record {
    pub fn new(class: impl Into<String>) -> Self {
        Self {
            class: class.into(),
            fields: Vec::new(),
            methods: Vec::new(),
        }
    }

    pub fn field(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.set(name.into(), value.into());
        self
    }

    pub fn method(mut self, name: impl Into<String>) -> Self {
        self.methods.push(name.into());
        self
    }

    fn set(&mut self, name: String, value: Value) {
        match self.fields.iter_mut().find(|(existing, _)| *existing == name) {
            Some(field) => field.1 = value,
            None => self.fields.push((name, value)),
        }
    }
}

/// Shared, mutable handle to a [`Record`].
#[derive(Clone)]
pub struct RecordRef(Rc<RefCell<Record>>);

impl RecordRef {
    pub fn class(&self) -> String {
        self.0.borrow().class.clone()
    }

    /// Set (or replace) a field after construction, e.g. to close a cycle.
    pub fn set_field(&self, name: impl Into<String>, value: impl Into<Value>) {
        self.0.borrow_mut().set(name.into(), value.into());
    }

    pub fn fields(&self) -> Vec<(String, Value)> {
        self.0.borrow().fields.clone()
    }

    /// Method names in lexicographic order.
    pub fn sorted_methods(&self) -> Vec<String> {
        let mut methods = self.0.borrow().methods.clone();
        methods.sort();
        methods
    }

    pub fn id(&self) -> NodeId {
        NodeId::Record(Rc::as_ptr(&self.0) as *const () as usize)
    }

    pub fn ptr_eq(&self, other: &RecordRef) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl From<Record> for RecordRef {
    fn from(record: Record) -> Self {
        RecordRef(Rc::new(RefCell::new(record)))
    }
}

impl fmt::Debug for RecordRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RecordRef")
            .field("id", &self.id())
            .field("class", &self.class())
            .finish()
    }
}
