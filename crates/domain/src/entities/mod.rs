//! Domain entities - Core business objects with identity

pub mod catalog;
mod spell;

pub use spell::{Spell, SpellCategory, SpellKind};
