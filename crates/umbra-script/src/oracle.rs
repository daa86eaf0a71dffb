//! A deliberately simple scoped table used to cross-check the real one.

use fxhash::FxHashMap;
use umbra_table::ScopedTable;

/// Reference implementation of the scoped-table contract.
///
/// One hash map per frame, innermost last; `find` walks the frames from the
/// inside out. Slower than `umbra_table::NameTable` on deep nesting, but easy
/// to see is correct, which is all the differential harness needs from it.
///
/// The frame at index 0 is the implicit base level: it always exists, and
/// closing it discards its contents instead of popping it.
#[derive(Debug)]
pub struct Oracle {
    frames: Vec<FxHashMap<String, u32>>,
}

impl Oracle {
    pub fn new() -> Self {
        Oracle {
            frames: vec![FxHashMap::default()],
        }
    }
}

impl Default for Oracle {
    fn default() -> Self {
        Self::new()
    }
}

impl ScopedTable for Oracle {
    fn enter_scope(&mut self) {
        self.frames.push(FxHashMap::default());
    }

    fn exit_scope(&mut self) -> bool {
        if self.frames.len() > 1 {
            self.frames.pop();
            return true;
        }
        // Base frame: closeable once per batch of base-level declarations.
        let base = &mut self.frames[0];
        if base.is_empty() {
            false
        } else {
            base.clear();
            true
        }
    }

    fn declare(&mut self, ident: &str, line: u32) -> bool {
        if ident.is_empty() {
            return false;
        }
        let current = self.frames.last_mut().expect("base frame always present");
        if current.contains_key(ident) {
            return false;
        }
        current.insert(ident.to_string(), line);
        true
    }

    fn find(&self, ident: &str) -> Option<u32> {
        if ident.is_empty() {
            return None;
        }
        self.frames
            .iter()
            .rev()
            .find_map(|frame| frame.get(ident).copied())
    }
}
