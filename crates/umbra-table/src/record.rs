//! Storage primitives for the hash index.

/// A stable index into the record arena.
///
/// Valid for as long as the record it names is live. Slots are recycled
/// through a free list after removal, so an id must not be retained past the
/// exit of the scope that owns the record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) struct RecordId(pub(crate) usize);

/// Where the incoming pointer to a record lives: the head slot of its bucket,
/// or the `next` field of the record chained immediately before it.
///
/// Keeping this on every record lets a scope exit unlink it in O(1) without
/// rescanning the chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Link {
    /// First record of bucket `n`.
    Head(usize),
    /// Chained directly after another record.
    After(RecordId),
}

/// One identifier binding within one scope.
#[derive(Debug)]
pub(crate) struct Record {
    pub ident: Box<str>,
    /// Caller-supplied payload, usually the source line of the declaration.
    pub line: u32,
    /// Nesting depth of the scope that created this record.
    pub depth: usize,
    /// Next record in the same collision chain.
    pub next: Option<RecordId>,
    /// Back-reference to the slot holding the pointer to this record.
    pub link: Link,
}
