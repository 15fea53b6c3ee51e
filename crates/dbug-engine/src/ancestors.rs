use dbug_types::NodeId;

/// Identities of the nodes currently being rendered, innermost first.
///
/// Each recursive call borrows its parent's chain and extends it on its own
/// stack frame, so nothing has to be unmarked when the call returns.
#[derive(Debug, Clone, Copy)]
pub(crate) enum Ancestors<'a> {
    Root,
    Node { id: NodeId, parent: &'a Ancestors<'a> },
}

impl<'a> Ancestors<'a> {
    pub(crate) fn contains(&self, id: NodeId) -> bool {
        let mut current = self;
        while let Ancestors::Node { id: node, parent } = current {
            if *node == id {
                return true;
            }
            current = parent;
        }
        false
    }

    pub(crate) fn with(&'a self, id: NodeId) -> Ancestors<'a> {
        Ancestors::Node { id, parent: self }
    }
}
