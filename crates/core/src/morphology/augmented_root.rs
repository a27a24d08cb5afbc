//! The working representation of a verb while rules run over it.
//!
//! A skeleton (radical slots plus the fixed affix letters of a stem) is laid
//! out once into an arena of symbols. Rules then address symbols by name:
//! radicals through a slot table, affixes by their role. Dropping a symbol
//! only marks it; positions never shift, so earlier lookups stay valid.

use serde::{Deserialize, Serialize};

use super::root::VerbRoot;
use crate::script::{Tashkil, VocalizedLetter};

/// Role of a non-radical letter inside a stem.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AffixSlot {
    /// Connective alef of stems 7 to 10 and the imperative.
    Wasl,
    /// Causative hamza of stem 4.
    PrefixHamza,
    /// Reflexive ta of stems 5, 6, 10 and quadriliteral 2.
    PrefixTa,
    /// Nun of stem 7.
    PrefixNun,
    /// Sin of stem 10.
    PrefixSin,
    /// Participle mim.
    PrefixMim,
    /// Ta of stem 8 (assimilates to ط or د).
    InfixTa,
    /// Long vowel of stems 3 and 6, and of the passive participle.
    InfixLong,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SymbolName {
    /// 1-based radical number.
    Radical(usize),
    /// Second copy of the last radical (stem 9).
    Repeat,
    Affix(AffixSlot),
}

/// One slot of a stem skeleton.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkeletonSlot {
    Radical(usize),
    Repeat,
    Affix(AffixSlot, char),
}

pub type Skeleton = Vec<SkeletonSlot>;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AugmentedRootSymbol {
    pub name: SymbolName,
    pub letter: char,
    pub tashkil: Option<Tashkil>,
    pub shadda: bool,
    pub emphasis: bool,
    pub dropped: bool,
}

impl AugmentedRootSymbol {
    fn to_letter(&self) -> VocalizedLetter {
        VocalizedLetter {
            letter: self.letter,
            tashkil: self.tashkil,
            shadda: self.shadda,
            emphasis: self.emphasis,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AugmentedRoot {
    symbols: Vec<AugmentedRootSymbol>,
    /// radical number - 1 -> arena position
    radical_slots: Vec<Option<usize>>,
}

impl AugmentedRoot {
    /// Lay out `skeleton` for `root`. Panics if the skeleton names a radical
    /// the root does not have.
    pub fn new(skeleton: &[SkeletonSlot], root: &VerbRoot) -> Self {
        let mut symbols = Vec::with_capacity(skeleton.len());
        let mut radical_slots = vec![None; root.count()];
        for (pos, slot) in skeleton.iter().enumerate() {
            let (name, letter) = match *slot {
                SkeletonSlot::Radical(n) => {
                    radical_slots[n - 1] = Some(pos);
                    (SymbolName::Radical(n), root.radical(n))
                }
                SkeletonSlot::Repeat => (SymbolName::Repeat, root.last()),
                SkeletonSlot::Affix(affix, letter) => (SymbolName::Affix(affix), letter),
            };
            symbols.push(AugmentedRootSymbol {
                name,
                letter,
                tashkil: None,
                shadda: false,
                emphasis: false,
                dropped: false,
            });
        }
        Self {
            symbols,
            radical_slots,
        }
    }

    pub fn radical_count(&self) -> usize {
        self.radical_slots.len()
    }

    /// Name of the word-final symbol of the stem.
    pub fn final_name(&self) -> SymbolName {
        match self.symbols.last() {
            Some(s) => s.name,
            None => panic!("empty augmented root"),
        }
    }

    /// Name of the last radical.
    pub fn last_radical(&self) -> SymbolName {
        SymbolName::Radical(self.radical_count())
    }

    pub fn contains(&self, name: SymbolName) -> bool {
        self.position(name).is_some()
    }

    fn position(&self, name: SymbolName) -> Option<usize> {
        match name {
            SymbolName::Radical(n) => self.radical_slots.get(n.checked_sub(1)?).copied().flatten(),
            _ => self.symbols.iter().position(|s| s.name == name),
        }
    }

    fn index(&self, name: SymbolName) -> usize {
        match self.position(name) {
            Some(i) => i,
            None => panic!("{name:?} is not part of this stem"),
        }
    }

    pub fn symbol(&self, name: SymbolName) -> &AugmentedRootSymbol {
        &self.symbols[self.index(name)]
    }

    fn symbol_mut(&mut self, name: SymbolName) -> &mut AugmentedRootSymbol {
        let i = self.index(name);
        &mut self.symbols[i]
    }

    pub fn tashkil(&self, name: SymbolName) -> Option<Tashkil> {
        self.symbol(name).tashkil
    }

    pub fn letter(&self, name: SymbolName) -> char {
        self.symbol(name).letter
    }

    pub fn is_dropped(&self, name: SymbolName) -> bool {
        self.symbol(name).dropped
    }

    pub fn apply_tashkil(&mut self, name: SymbolName, tashkil: Option<Tashkil>) {
        self.symbol_mut(name).tashkil = tashkil;
    }

    pub fn apply_radical_tashkil(&mut self, n: usize, tashkil: Tashkil) {
        self.apply_tashkil(SymbolName::Radical(n), Some(tashkil));
    }

    pub fn set_shadda(&mut self, name: SymbolName, shadda: bool) {
        self.symbol_mut(name).shadda = shadda;
    }

    pub fn set_letter(&mut self, name: SymbolName, letter: char) {
        self.symbol_mut(name).letter = letter;
    }

    pub fn set_emphasis(&mut self, name: SymbolName) {
        self.symbol_mut(name).emphasis = true;
    }

    /// Substitute the letter and vowel of radical `n`.
    pub fn replace_radical(&mut self, n: usize, letter: char, tashkil: Option<Tashkil>) {
        let symbol = self.symbol_mut(SymbolName::Radical(n));
        symbol.letter = letter;
        symbol.tashkil = tashkil;
    }

    pub fn drop_radical(&mut self, n: usize) {
        self.drop_symbol(SymbolName::Radical(n));
    }

    pub fn drop_symbol(&mut self, name: SymbolName) {
        self.symbol_mut(name).dropped = true;
    }

    /// Closest surviving symbol before `name`.
    pub fn previous_live(&self, name: SymbolName) -> Option<SymbolName> {
        let i = self.index(name);
        self.symbols[..i]
            .iter()
            .rev()
            .find(|s| !s.dropped)
            .map(|s| s.name)
    }

    pub fn live_symbols(&self) -> impl Iterator<Item = &AugmentedRootSymbol> {
        self.symbols.iter().filter(|s| !s.dropped)
    }

    pub fn first_live(&self) -> Option<&AugmentedRootSymbol> {
        self.live_symbols().next()
    }

    /// Surviving radical numbers, in order.
    pub fn live_radicals(&self) -> Vec<usize> {
        (1..=self.radical_count())
            .filter(|&n| {
                self.position(SymbolName::Radical(n))
                    .is_some_and(|i| !self.symbols[i].dropped)
            })
            .collect()
    }

    pub fn to_letters(&self) -> Vec<VocalizedLetter> {
        self.live_symbols().map(AugmentedRootSymbol::to_letter).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stem10(root: &VerbRoot) -> AugmentedRoot {
        let skeleton = vec![
            SkeletonSlot::Affix(AffixSlot::Wasl, 'ا'),
            SkeletonSlot::Affix(AffixSlot::PrefixSin, 'س'),
            SkeletonSlot::Affix(AffixSlot::PrefixTa, 'ت'),
            SkeletonSlot::Radical(1),
            SkeletonSlot::Radical(2),
            SkeletonSlot::Radical(3),
        ];
        AugmentedRoot::new(&skeleton, root)
    }

    #[test]
    fn test_layout_and_lookup() {
        let root: VerbRoot = "كتب".parse().unwrap();
        let aug = stem10(&root);
        assert_eq!(aug.radical_count(), 3);
        assert_eq!(aug.letter(SymbolName::Radical(1)), 'ك');
        assert_eq!(aug.letter(SymbolName::Affix(AffixSlot::PrefixSin)), 'س');
        assert_eq!(aug.final_name(), SymbolName::Radical(3));
        assert!(!aug.contains(SymbolName::Affix(AffixSlot::PrefixNun)));
    }

    #[test]
    fn test_drop_keeps_positions() {
        let root: VerbRoot = "قول".parse().unwrap();
        let mut aug = stem10(&root);
        aug.apply_radical_tashkil(1, Tashkil::Fatha);
        aug.drop_radical(2);
        assert_eq!(aug.live_radicals(), vec![1, 3]);
        assert_eq!(aug.previous_live(SymbolName::Radical(3)), Some(SymbolName::Radical(1)));
        assert_eq!(aug.tashkil(SymbolName::Radical(1)), Some(Tashkil::Fatha));
        assert_eq!(aug.to_letters().len(), 5);
    }

    #[test]
    fn test_replace_radical() {
        let root: VerbRoot = "قول".parse().unwrap();
        let mut aug = stem10(&root);
        aug.replace_radical(2, 'ا', None);
        assert_eq!(aug.letter(SymbolName::Radical(2)), 'ا');
        assert_eq!(aug.tashkil(SymbolName::Radical(2)), None);
    }

    #[test]
    fn test_repeat_copies_last_radical() {
        let root: VerbRoot = "حمر".parse().unwrap();
        let skeleton = vec![
            SkeletonSlot::Radical(1),
            SkeletonSlot::Radical(2),
            SkeletonSlot::Radical(3),
            SkeletonSlot::Repeat,
        ];
        let aug = AugmentedRoot::new(&skeleton, &root);
        assert_eq!(aug.final_name(), SymbolName::Repeat);
        assert_eq!(aug.letter(SymbolName::Repeat), 'ر');
    }

    #[test]
    #[should_panic]
    fn test_out_of_range_radical_panics() {
        let root: VerbRoot = "كتب".parse().unwrap();
        let mut aug = stem10(&root);
        aug.apply_radical_tashkil(4, Tashkil::Fatha);
    }

    #[test]
    #[should_panic]
    fn test_skeleton_beyond_root_panics() {
        let root: VerbRoot = "كتب".parse().unwrap();
        AugmentedRoot::new(&[SkeletonSlot::Radical(4)], &root);
    }
}
