// src/context.rs
// Resolved collation options. Tiny, Copy, passed by reference to the scanner
// and the key assembler.

/// What punctuation and symbols contribute to the alphabet level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum KeyVariant {
    /// Punctuation only weighs in at the punctuation level.
    #[default]
    Simple,
    /// Punctuation also leaves a class marker in the alphabet level, ranked
    /// after numbers.
    Extended,
}

/// Fate of standalone marks (`'`, `°`, stray combining marks) that are still
/// waiting for a letter when the input ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StrayMarks {
    /// Keep them as a trailing diacritic-level entry.
    #[default]
    Keep,
    /// Discard them.
    Drop,
}

/// Runtime context passed to every collation step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Context {
    pub variant: KeyVariant,
    pub stray_marks: StrayMarks,
}

impl Context {
    /// Czech product defaults.
    pub const CZECH: Context = Context {
        variant: KeyVariant::Simple,
        stray_marks: StrayMarks::Keep,
    };

    #[inline(always)]
    pub const fn new(variant: KeyVariant, stray_marks: StrayMarks) -> Self {
        Self {
            variant,
            stray_marks,
        }
    }

    /// Create a context and allow the caller to mutate any field before use.
    #[inline(always)]
    pub fn with_modified(f: impl FnOnce(&mut Context)) -> Self {
        let mut ctx = Self::CZECH;
        f(&mut ctx);
        ctx
    }
}
