//! Running record of symbols observed across analyzed sources.

use serde::{Deserialize, Serialize};

// ── Ordered Set ────────────────────────────────────────────────────────

/// Insertion-ordered set of strings.
///
/// Uniqueness is exact string equality. Entries are never removed.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OrderedSet(Vec<String>);

impl OrderedSet {
    /// Empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert `value` if not already present. Returns `true` when added.
    pub fn insert(&mut self, value: &str) -> bool {
        if self.contains(value) {
            return false;
        }
        self.0.push(value.to_string());
        true
    }

    /// Whether `value` has been seen.
    pub fn contains(&self, value: &str) -> bool {
        self.0.iter().any(|v| v == value)
    }

    /// Entries in first-seen order.
    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    /// Iterate entries in first-seen order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

// ── Code Context ───────────────────────────────────────────────────────

/// Symbols collected from every source folded in so far.
///
/// Append-only: the three sets never shrink and never hold duplicates.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CodeContext {
    modules: OrderedSet,
    structs: OrderedSet,
    functions: OrderedSet,
}

impl CodeContext {
    /// Empty context.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a qualified module name such as `0x1::Coin`.
    pub fn insert_module(&mut self, name: &str) -> bool {
        self.modules.insert(name)
    }

    /// Record a struct or resource name.
    pub fn insert_struct(&mut self, name: &str) -> bool {
        self.structs.insert(name)
    }

    /// Record a function name.
    pub fn insert_function(&mut self, name: &str) -> bool {
        self.functions.insert(name)
    }

    pub fn modules(&self) -> &OrderedSet {
        &self.modules
    }

    pub fn structs(&self) -> &OrderedSet {
        &self.structs
    }

    pub fn functions(&self) -> &OrderedSet {
        &self.functions
    }

    /// Whether nothing has been recorded yet.
    pub fn is_empty(&self) -> bool {
        self.modules.is_empty() && self.structs.is_empty() && self.functions.is_empty()
    }

    /// Detached copy for readers. Later mutations do not show through.
    pub fn snapshot(&self) -> ContextSnapshot {
        ContextSnapshot {
            modules: self.modules.as_slice().to_vec(),
            structs: self.structs.as_slice().to_vec(),
            functions: self.functions.as_slice().to_vec(),
        }
    }
}

// ── Snapshot ───────────────────────────────────────────────────────────

/// Read-only copy of a [`CodeContext`].
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContextSnapshot {
    pub modules: Vec<String>,
    pub structs: Vec<String>,
    pub functions: Vec<String>,
}

impl ContextSnapshot {
    /// Total number of recorded symbols.
    pub fn total(&self) -> usize {
        self.modules.len() + self.structs.len() + self.functions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.total() == 0
    }
}

// ── Extraction Summary ─────────────────────────────────────────────────

/// How many new entries one extraction pass added.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractionSummary {
    pub modules_added: usize,
    pub structs_added: usize,
    pub functions_added: usize,
}

impl ExtractionSummary {
    pub fn total(&self) -> usize {
        self.modules_added + self.structs_added + self.functions_added
    }

    /// Whether the pass found nothing new.
    pub fn is_empty(&self) -> bool {
        self.total() == 0
    }
}

impl std::ops::AddAssign for ExtractionSummary {
    fn add_assign(&mut self, other: Self) {
        self.modules_added += other.modules_added;
        self.structs_added += other.structs_added;
        self.functions_added += other.functions_added;
    }
}

impl std::fmt::Display for ExtractionSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "+{} modules, +{} structs, +{} functions",
            self.modules_added, self.structs_added, self.functions_added
        )
    }
}
