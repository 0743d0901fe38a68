//! Spell entity - the six categories of magic taught (or banned) at Castle Kilmere.
//!
//! A spell is an immutable value once built. Its identity is the `SpellId`
//! assigned at construction: clones share it, two separately constructed
//! spells with the same fields do not.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::DomainError;
use crate::ids::SpellId;

/// A spell a pupil may learn and cast.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Spell {
    id: SpellId,
    name: String,
    incantation: String,
    effect: String,
    /// Lowest academic year allowed to study it (None = no year gate)
    min_year: Option<i32>,
    kind: SpellKind,
}

/// Category-specific payload of a spell.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "category", rename_all = "camelCase")]
pub enum SpellKind {
    Charm { difficulty: Option<String> },
    Hex { difficulty: Option<String> },
    Jinx,
    Curse,
    CounterSpell,
    HealingSpell,
}

/// Spell category without payload, for lookups by name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SpellCategory {
    Charm,
    Hex,
    Jinx,
    Curse,
    CounterSpell,
    HealingSpell,
}

impl SpellCategory {
    pub fn all() -> &'static [SpellCategory] {
        &[
            SpellCategory::Charm,
            SpellCategory::Hex,
            SpellCategory::Jinx,
            SpellCategory::Curse,
            SpellCategory::CounterSpell,
            SpellCategory::HealingSpell,
        ]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SpellCategory::Charm => "Charm",
            SpellCategory::Hex => "Hex",
            SpellCategory::Jinx => "Jinx",
            SpellCategory::Curse => "Curse",
            SpellCategory::CounterSpell => "CounterSpell",
            SpellCategory::HealingSpell => "HealingSpell",
        }
    }

    /// Hexes and curses: only Slytherins study or cast these.
    #[inline]
    pub fn is_dark(self) -> bool {
        matches!(self, SpellCategory::Hex | SpellCategory::Curse)
    }

    /// The read-only classification text of the category.
    pub fn defining_feature(self) -> &'static str {
        match self {
            SpellCategory::Charm => {
                "Alteration of the object's inherent qualities, \
                 that is, its behaviour and capabilities"
            }
            SpellCategory::Hex => {
                "They are affiliated with Dark Magic, darker than a jinx but not as dark \
                 as a curse, and generally causes moderate suffering to the victim"
            }
            SpellCategory::Jinx => {
                "Minor dark magic - a spell whose effects are irritating but amusing, \
                 almost playful and of minor inconvenience to the target"
            }
            SpellCategory::Curse => {
                "Worst kind of dark magic - \
                 Intended to affect an object in a strongly negative manner."
            }
            SpellCategory::CounterSpell => "Inhibits the effects of another spell",
            SpellCategory::HealingSpell => "Improves the condition of a living object",
        }
    }
}

impl fmt::Display for SpellCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Accepts "CounterSpell", "counter spell", "counter-spell" and the like.
impl FromStr for SpellCategory {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .chars()
            .filter(|c| !c.is_whitespace() && *c != '-' && *c != '_')
            .collect::<String>()
            .to_lowercase();
        match normalized.as_str() {
            "charm" => Ok(SpellCategory::Charm),
            "hex" => Ok(SpellCategory::Hex),
            "jinx" => Ok(SpellCategory::Jinx),
            "curse" => Ok(SpellCategory::Curse),
            "counterspell" => Ok(SpellCategory::CounterSpell),
            "healingspell" => Ok(SpellCategory::HealingSpell),
            _ => Err(DomainError::unsupported_spell_category(s)),
        }
    }
}

impl SpellKind {
    pub fn category(&self) -> SpellCategory {
        match self {
            SpellKind::Charm { .. } => SpellCategory::Charm,
            SpellKind::Hex { .. } => SpellCategory::Hex,
            SpellKind::Jinx => SpellCategory::Jinx,
            SpellKind::Curse => SpellCategory::Curse,
            SpellKind::CounterSpell => SpellCategory::CounterSpell,
            SpellKind::HealingSpell => SpellCategory::HealingSpell,
        }
    }

    fn empty(category: SpellCategory) -> Self {
        match category {
            SpellCategory::Charm => SpellKind::Charm { difficulty: None },
            SpellCategory::Hex => SpellKind::Hex { difficulty: None },
            SpellCategory::Jinx => SpellKind::Jinx,
            SpellCategory::Curse => SpellKind::Curse,
            SpellCategory::CounterSpell => SpellKind::CounterSpell,
            SpellCategory::HealingSpell => SpellKind::HealingSpell,
        }
    }
}

impl Spell {
    // =========================================================================
    // Constructors
    // =========================================================================

    pub fn new(
        kind: SpellKind,
        name: impl Into<String>,
        incantation: impl Into<String>,
        effect: impl Into<String>,
    ) -> Self {
        Self {
            id: SpellId::new(),
            name: name.into(),
            incantation: incantation.into(),
            effect: effect.into(),
            min_year: None,
            kind,
        }
    }

    /// Build a spell from a category name, e.g. from a catalog file.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::UnsupportedSpellCategory` for names outside the
    /// six known categories.
    pub fn from_category(
        category: &str,
        name: impl Into<String>,
        incantation: impl Into<String>,
        effect: impl Into<String>,
    ) -> Result<Self, DomainError> {
        let category: SpellCategory = category.parse()?;
        Ok(Self::new(SpellKind::empty(category), name, incantation, effect))
    }

    pub fn charm(
        name: impl Into<String>,
        incantation: impl Into<String>,
        effect: impl Into<String>,
    ) -> Self {
        Self::new(SpellKind::Charm { difficulty: None }, name, incantation, effect)
    }

    pub fn hex(
        name: impl Into<String>,
        incantation: impl Into<String>,
        effect: impl Into<String>,
    ) -> Self {
        Self::new(SpellKind::Hex { difficulty: None }, name, incantation, effect)
    }

    pub fn jinx(
        name: impl Into<String>,
        incantation: impl Into<String>,
        effect: impl Into<String>,
    ) -> Self {
        Self::new(SpellKind::Jinx, name, incantation, effect)
    }

    pub fn curse(
        name: impl Into<String>,
        incantation: impl Into<String>,
        effect: impl Into<String>,
    ) -> Self {
        Self::new(SpellKind::Curse, name, incantation, effect)
    }

    pub fn counter_spell(
        name: impl Into<String>,
        incantation: impl Into<String>,
        effect: impl Into<String>,
    ) -> Self {
        Self::new(SpellKind::CounterSpell, name, incantation, effect)
    }

    pub fn healing_spell(
        name: impl Into<String>,
        incantation: impl Into<String>,
        effect: impl Into<String>,
    ) -> Self {
        Self::new(SpellKind::HealingSpell, name, incantation, effect)
    }

    // =========================================================================
    // Builder Methods
    // =========================================================================

    pub fn with_min_year(mut self, year: i32) -> Self {
        self.min_year = Some(year);
        self
    }

    /// Set the difficulty label. Only charms and hexes carry one; for the
    /// other categories this is a no-op.
    pub fn with_difficulty(mut self, label: impl Into<String>) -> Self {
        match &mut self.kind {
            SpellKind::Charm { difficulty } | SpellKind::Hex { difficulty } => {
                *difficulty = Some(label.into());
            }
            _ => {}
        }
        self
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    #[inline]
    pub fn id(&self) -> SpellId {
        self.id
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    pub fn incantation(&self) -> &str {
        &self.incantation
    }

    #[inline]
    pub fn effect(&self) -> &str {
        &self.effect
    }

    #[inline]
    pub fn min_year(&self) -> Option<i32> {
        self.min_year
    }

    #[inline]
    pub fn kind(&self) -> &SpellKind {
        &self.kind
    }

    #[inline]
    pub fn category(&self) -> SpellCategory {
        self.kind.category()
    }

    pub fn difficulty(&self) -> Option<&str> {
        match &self.kind {
            SpellKind::Charm { difficulty } | SpellKind::Hex { difficulty } => {
                difficulty.as_deref()
            }
            _ => None,
        }
    }

    #[inline]
    pub fn is_dark(&self) -> bool {
        self.category().is_dark()
    }

    pub fn defining_feature(&self) -> &'static str {
        self.category().defining_feature()
    }

    /// Speak the spell. Surfaces the incantation and nothing else; charms
    /// are exclaimed.
    pub fn cast(&self) -> String {
        match self.kind {
            SpellKind::Charm { .. } => format!("{}!", self.incantation),
            _ => self.incantation.clone(),
        }
    }
}

impl fmt::Display for Spell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            SpellKind::Charm { difficulty } => write!(
                f,
                "Charm: {}, Difficulty: {}, Effect: {}",
                self.incantation,
                difficulty.as_deref().unwrap_or("unknown"),
                self.effect
            ),
            kind => write!(
                f,
                "{}({}, incantation: '{}', effect: {})",
                kind.category(),
                self.name,
                self.incantation,
                self.effect
            ),
        }
    }
}
