//! Name-interned index over the static builtin table.

use rustc_hash::FxHashMap;

use rill_ir::{Name, StringInterner};
use rill_object::{BuiltinDef, BUILTINS};

/// Resolves interned names to builtin definitions.
///
/// The table itself is process-wide and read-only; this index interns
/// every entry's name once at construction so identifier resolution is a
/// single hash lookup on `Name`, not a string comparison.
#[derive(Clone)]
pub struct BuiltinRegistry {
    by_name: FxHashMap<Name, &'static BuiltinDef>,
}

impl BuiltinRegistry {
    /// Build the index against an interner.
    pub fn new(interner: &StringInterner) -> Self {
        let by_name = BUILTINS
            .iter()
            .map(|def| (interner.intern(def.name), def))
            .collect();
        BuiltinRegistry { by_name }
    }

    /// Resolve a name to its builtin, if any.
    #[inline]
    pub fn resolve(&self, name: Name) -> Option<&'static BuiltinDef> {
        self.by_name.get(&name).copied()
    }

    /// Number of registered builtins.
    pub fn len(&self) -> usize {
        self.by_name.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_name.is_empty()
    }
}
