//! The global hash index: a fixed-size array of collision chains over a slot
//! arena of declaration records.

use std::hash::{Hash, Hasher};

use fxhash::FxHasher;

use crate::record::{Link, Record, RecordId};

/// Number of collision-chain heads. Prime, so reduced hashes spread evenly.
const BUCKET_COUNT: usize = 4099;

/// Owns every declaration record, findable by identifier text.
///
/// Chains append at the tail, so records of one chain appear in declaration
/// order. Removal is driven externally by the scope stack; cleanup is eager,
/// which keeps every chain free of records from already-closed scopes.
pub(crate) struct HashIndex {
    buckets: Box<[Option<RecordId>]>,
    slots: Vec<Option<Record>>,
    free: Vec<RecordId>,
    live: usize,
}

impl HashIndex {
    pub fn new() -> Self {
        HashIndex {
            buckets: vec![None; BUCKET_COUNT].into_boxed_slice(),
            slots: Vec::new(),
            free: Vec::new(),
            live: 0,
        }
    }

    /// Number of live records across all chains.
    pub fn live(&self) -> usize {
        self.live
    }

    /// Insert a record for `ident` at `depth`, unless the chain already holds
    /// one with the same identifier at the same depth.
    ///
    /// The duplicate scan and the tail append share a single chain walk.
    pub fn insert_unique(&mut self, ident: &str, line: u32, depth: usize) -> Option<RecordId> {
        let bucket = self.bucket_of(ident);
        let mut tail: Option<RecordId> = None;
        let mut cursor = self.buckets[bucket];
        while let Some(id) = cursor {
            let record = self.record(id);
            if record.depth == depth && record.ident.as_ref() == ident {
                return None;
            }
            tail = Some(id);
            cursor = record.next;
        }

        let link = match tail {
            Some(prev) => Link::After(prev),
            None => Link::Head(bucket),
        };
        let id = self.alloc(Record {
            ident: ident.into(),
            line,
            depth,
            next: None,
            link,
        });
        match link {
            Link::Head(bucket) => self.buckets[bucket] = Some(id),
            Link::After(prev) => self.record_mut(prev).next = Some(id),
        }
        self.live += 1;
        Some(id)
    }

    /// Unlink `id` from its chain and vacate its slot.
    pub fn remove(&mut self, id: RecordId) {
        let record = self.slots[id.0].take().expect("record removed twice");
        match record.link {
            Link::Head(bucket) => self.buckets[bucket] = record.next,
            Link::After(prev) => self.record_mut(prev).next = record.next,
        }
        // The successor, if any, is now pointed at from where this record was.
        if let Some(next) = record.next {
            self.record_mut(next).link = record.link;
        }
        self.free.push(id);
        self.live -= 1;
    }

    /// The deepest-scope live record for `ident`, if any.
    pub fn innermost(&self, ident: &str) -> Option<&Record> {
        let mut best: Option<&Record> = None;
        let mut cursor = self.buckets[self.bucket_of(ident)];
        while let Some(id) = cursor {
            let record = self.record(id);
            if record.ident.as_ref() == ident && best.map_or(true, |b| record.depth > b.depth) {
                best = Some(record);
            }
            cursor = record.next;
        }
        best
    }

    fn bucket_of(&self, ident: &str) -> usize {
        let mut hasher = FxHasher::default();
        ident.hash(&mut hasher);
        (hasher.finish() as usize) % BUCKET_COUNT
    }

    fn alloc(&mut self, record: Record) -> RecordId {
        match self.free.pop() {
            Some(id) => {
                self.slots[id.0] = Some(record);
                id
            }
            None => {
                let id = RecordId(self.slots.len());
                self.slots.push(Some(record));
                id
            }
        }
    }

    fn record(&self, id: RecordId) -> &Record {
        self.slots[id.0].as_ref().expect("record slot vacated while referenced")
    }

    fn record_mut(&mut self, id: RecordId) -> &mut Record {
        self.slots[id.0].as_mut().expect("record slot vacated while referenced")
    }
}
