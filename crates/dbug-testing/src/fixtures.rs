//! Value fixtures.
//!
//! Cyclic graphs are built through the shared handles, the same way a host
//! application would end up with them.

use dbug_types::{CompositeRef, Record, RecordRef, Value};

/// `[ "a", <self> ]`
pub fn self_referential_composite() -> CompositeRef {
    let composite = CompositeRef::new();
    composite.push("a");
    composite.push(Value::Composite(composite.clone()));
    composite
}

/// `{ name: "root", child: { name: "leaf", back: <root> }, sibling: [1, 2] }`
pub fn indirect_cycle() -> CompositeRef {
    let root = CompositeRef::new();
    let child = CompositeRef::new();
    child.insert("name", "leaf");
    child.insert("back", Value::Composite(root.clone()));

    root.insert("name", "root");
    root.insert("child", Value::Composite(child));
    root.insert("sibling", vec![1i64, 2]);
    root
}

/// `Node { parent: Node { child: <inner> } }` where the inner node points
/// back at itself through its parent.
pub fn cyclic_record() -> RecordRef {
    let parent = RecordRef::from(Record::new("Node").method("parent").method("children"));
    let child = RecordRef::from(Record::new("Node").field("label", "child"));
    child.set_field("parent", Value::Structured(parent.clone()));
    parent.set_field("child", Value::Structured(child));
    parent
}

/// A composite that holds the same (acyclic) composite twice.
pub fn shared_sibling() -> CompositeRef {
    let shared: CompositeRef = [("x", 1i64)].into_iter().collect();
    let root = CompositeRef::new();
    root.insert("left", Value::Composite(shared.clone()));
    root.insert("right", Value::Composite(shared));
    root
}

/// Two distinct composites with equal content, side by side.
pub fn equal_siblings() -> CompositeRef {
    let root = CompositeRef::new();
    root.push(vec![1i64, 2]);
    root.push(vec![1i64, 2]);
    root
}

/// Linear chain of `levels` composites, each holding the next under `next`.
pub fn nested_chain(levels: usize) -> Value {
    let mut value = Value::text("bottom");
    for _ in 0..levels {
        let composite = CompositeRef::new();
        composite.insert("next", value);
        value = Value::Composite(composite);
    }
    value
}

/// A record with mixed fields and unsorted method names.
pub fn sample_user() -> RecordRef {
    RecordRef::from(
        Record::new("App\\User")
            .field("id", 42i64)
            .field("name", "Ann <admin>")
            .field("active", true)
            .field("manager", Value::Null)
            .field("roles", vec!["editor", "author"])
            .method("save")
            .method("delete")
            .method("getName"),
    )
}
