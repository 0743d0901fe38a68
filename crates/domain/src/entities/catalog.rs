//! Standard spells of the Castle Kilmere curriculum.

use super::Spell;

/// The levitation charm. No year gate, no difficulty.
pub fn stuporus_ratiato() -> Spell {
    Spell::charm("Stuporus Ratatio", "Stuporus Ratatio", "Levitates objects")
}

pub fn lumos() -> Spell {
    Spell::charm("Lumos", "Lumos", "Illuminates the wand tip")
        .with_difficulty("simple")
        .with_min_year(5)
}

pub fn tickling_charm() -> Spell {
    Spell::charm(
        "Tickling Charm",
        "Rictumsempra",
        "Causes victim to laugh nonstop",
    )
    .with_min_year(5)
}

pub fn stickfast_hex() -> Spell {
    Spell::hex(
        "Stickfast Hex",
        "Colloshoo",
        "Makes target's shoes stick to ground",
    )
}

pub fn cruciatus_curse() -> Spell {
    Spell::curse(
        "Cruciatus Curse",
        "Crucio",
        "Causes intense, excruciating pain for victim",
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::SpellCategory;

    #[test]
    fn catalog_spells_have_expected_gates() {
        assert_eq!(stuporus_ratiato().min_year(), None);
        assert_eq!(lumos().min_year(), Some(5));
        assert_eq!(lumos().difficulty(), Some("simple"));
        assert_eq!(tickling_charm().min_year(), Some(5));
        assert_eq!(stickfast_hex().category(), SpellCategory::Hex);
        assert_eq!(cruciatus_curse().category(), SpellCategory::Curse);
    }

    #[test]
    fn each_call_mints_a_new_spell() {
        assert_ne!(lumos().id(), lumos().id());
    }
}
