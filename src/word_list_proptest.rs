#![cfg(test)]

// Property tests for WordList kept inside the crate so they can check arena
// occupancy without feature gates.

use crate::error::WordListError;
use crate::word_list::{NodeHandle, Slot, WordList};
use proptest::prelude::*;
use std::collections::BTreeMap;

// Pool-indexed operations to improve shrinking: indices shrink to earlier
// words, positions shrink towards the head, op lists shrink in length.
#[derive(Clone, Debug)]
enum OpI {
    InsertSorted(usize),
    InsertUnordered(usize, usize),
    Delete(usize),
    DeleteStale,
    Clear,
    Iterate,
}

fn arb_scenario() -> impl Strategy<Value = (Vec<String>, Vec<OpI>)> {
    proptest::collection::vec("[a-d]{0,3}", 1..=6).prop_flat_map(|pool| {
        let idxs: Vec<usize> = (0..pool.len()).collect();
        let idx = proptest::sample::select(idxs);
        let op = prop_oneof![
            4 => idx.clone().prop_map(OpI::InsertSorted),
            3 => (idx.clone(), 0usize..16).prop_map(|(i, p)| OpI::InsertUnordered(i, p)),
            2 => (0usize..16).prop_map(OpI::Delete),
            1 => Just(OpI::DeleteStale),
            1 => Just(OpI::Clear),
            1 => Just(OpI::Iterate),
        ];
        proptest::collection::vec(op, 1..60).prop_map(move |ops| (pool.clone(), ops))
    })
}

// Mirrors the chain: (handle, text, occurrences) in link order.
type Model = Vec<(NodeHandle, String, usize)>;

// Position the sorted walk stops at, or the index of the node that merges.
fn model_sorted_position(model: &Model, word: &str) -> Result<usize, usize> {
    let mut i = 0;
    while i < model.len() && model[i].1.as_str() <= word {
        if model[i].1 == word {
            return Err(i);
        }
        i += 1;
    }
    Ok(i)
}

// Property: state-machine equivalence against a Vec model of the chain.
// Invariants exercised across random operation sequences:
// - Unordered insert lands exactly at the requested position, never merges.
// - Sorted insert merges into the first equal node found from the head, or
//   inserts at the first strictly greater position.
// - Deleting at position p removes exactly that node; the tail slot is a no-op.
// - Deleted handles are stale: they never resolve and slots built from them error.
// - Arena occupancy equals chain length after every operation.
proptest! {
    #![proptest_config(ProptestConfig { cases: 128, .. ProptestConfig::default() })]
    #[test]
    fn prop_state_machine((pool, ops) in arb_scenario()) {
        let mut sut = WordList::new();
        let mut model: Model = Vec::new();
        let mut stale: Vec<NodeHandle> = Vec::new();

        for op in ops {
            match op {
                OpI::InsertSorted(i) => {
                    let w = &pool[i];
                    let h = sut.insert_word_sorted(w);
                    match model_sorted_position(&model, w) {
                        Err(at) => {
                            prop_assert_eq!(h, model[at].0, "merge must hit the first equal node");
                            model[at].2 += 1;
                        }
                        Ok(at) => model.insert(at, (h, w.clone(), 1)),
                    }
                }
                OpI::InsertUnordered(i, p) => {
                    let w = &pool[i];
                    let pos = p % (model.len() + 1);
                    let slot = sut.slot_at(pos).expect("position within bounds");
                    let h = sut.insert_word_unordered(w, slot).expect("live slot");
                    model.insert(pos, (h, w.clone(), 1));
                }
                OpI::Delete(p) => {
                    let pos = p % (model.len() + 1);
                    let slot = sut.slot_at(pos).expect("position within bounds");
                    let removed = sut.delete_node(slot).expect("live slot");
                    if pos == model.len() {
                        prop_assert!(removed.is_none(), "tail slot holds no node");
                    } else {
                        let (h, text, n) = model.remove(pos);
                        let e = removed.expect("node present at position");
                        prop_assert_eq!(e.text(), text.as_str());
                        prop_assert_eq!(e.occurrences(), n);
                        stale.push(h);
                    }
                }
                OpI::DeleteStale => {
                    if let Some(&h) = stale.last() {
                        prop_assert_eq!(sut.delete_node(Slot::After(h)), Err(WordListError::StaleHandle));
                    }
                }
                OpI::Clear => {
                    sut.clear();
                    stale.extend(model.drain(..).map(|(h, _, _)| h));
                }
                OpI::Iterate => {
                    let a: Vec<_> = sut.iter().map(|(h, _)| h).collect();
                    let b: Vec<_> = sut.iter().map(|(h, _)| h).collect();
                    prop_assert_eq!(a, b, "traversal must be restartable");
                }
            }

            // Post-conditions after each op
            let got: Vec<_> = sut
                .iter()
                .map(|(h, e)| (h, e.text().to_string(), e.occurrences()))
                .collect();
            prop_assert_eq!(&got, &model);
            for &h in &stale {
                prop_assert!(sut.entry(h).is_none());
            }
            prop_assert_eq!(sut.len(), model.len());
            prop_assert_eq!(sut.arena_len(), model.len());
            prop_assert_eq!(sut.is_empty(), model.is_empty());
            prop_assert!(got.iter().all(|(_, _, n)| *n >= 1));
        }
    }
}

// Property: with sorted insert only, the chain equals the BTreeMap word count.
proptest! {
    #![proptest_config(ProptestConfig { cases: 128, .. ProptestConfig::default() })]
    #[test]
    fn prop_sorted_only_matches_btreemap(words in proptest::collection::vec("[a-e]{0,4}", 0..80)) {
        let mut sut = WordList::new();
        let mut model: BTreeMap<String, usize> = BTreeMap::new();
        for w in &words {
            sut.insert_word_sorted(w);
            *model.entry(w.clone()).or_insert(0) += 1;
        }
        let got: Vec<(String, usize)> = sut.entries().map(|(t, n)| (t.to_string(), n)).collect();
        let want: Vec<(String, usize)> = model.into_iter().collect();
        prop_assert_eq!(got, want);
        prop_assert_eq!(sut.arena_len(), sut.len());
    }
}
