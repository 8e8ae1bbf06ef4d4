//! Declaration modifiers

use serde::Serialize;
use std::fmt;

/// A tag prefixing a declaration or parameter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Modifier {
    Pub,
    Priv,
    Internal,
    Open,
    Const,
    Mut,
    Pure,
    Impure,
    Meta,
    Bus,
    On,
}

/// Broad grouping of modifiers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModifierCategory {
    Access,
    Mutability,
    Purity,
    Special,
}

impl Modifier {
    pub fn category(self) -> ModifierCategory {
        match self {
            Modifier::Pub | Modifier::Priv | Modifier::Internal | Modifier::Open => {
                ModifierCategory::Access
            }
            Modifier::Const | Modifier::Mut => ModifierCategory::Mutability,
            Modifier::Pure | Modifier::Impure => ModifierCategory::Purity,
            Modifier::Meta | Modifier::Bus | Modifier::On => ModifierCategory::Special,
        }
    }

    /// `pub`, `priv` and `internal` are mutually exclusive; `open` is not.
    pub fn is_visibility(self) -> bool {
        matches!(self, Modifier::Pub | Modifier::Priv | Modifier::Internal)
    }

    pub fn keyword(self) -> &'static str {
        match self {
            Modifier::Pub => "pub",
            Modifier::Priv => "priv",
            Modifier::Internal => "internal",
            Modifier::Open => "open",
            Modifier::Const => "const",
            Modifier::Mut => "mut",
            Modifier::Pure => "pure",
            Modifier::Impure => "impure",
            Modifier::Meta => "meta",
            Modifier::Bus => "bus",
            Modifier::On => "on",
        }
    }
}

impl fmt::Display for Modifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.keyword())
    }
}

/// Accumulates a run of written modifiers.
///
/// Visibility is last-wins and keeps the slot of the first visibility
/// written; other modifiers keep their first occurrence. `finish` appends
/// the implicit `priv` when no visibility was written, so the result always
/// holds exactly one of `pub`, `priv` and `internal`.
#[derive(Debug, Default, Clone)]
pub struct ModifierList {
    items: Vec<Modifier>,
    visibility_slot: Option<usize>,
}

impl ModifierList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, modifier: Modifier) {
        if modifier.is_visibility() {
            match self.visibility_slot {
                Some(slot) => self.items[slot] = modifier,
                None => {
                    self.visibility_slot = Some(self.items.len());
                    self.items.push(modifier);
                }
            }
        } else if !self.items.contains(&modifier) {
            self.items.push(modifier);
        }
    }

    /// Whether no modifier was written
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn finish(mut self) -> Vec<Modifier> {
        if self.visibility_slot.is_none() {
            self.items.push(Modifier::Priv);
        }
        self.items
    }
}

/// The visibility held by a finished modifier list
pub fn visibility(modifiers: &[Modifier]) -> Option<Modifier> {
    modifiers.iter().copied().find(|m| m.is_visibility())
}
