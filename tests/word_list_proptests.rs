use proptest::prelude::*;
use std::collections::HashMap;
use word_freq_list::{Slot, WordList};

// Sorted insert keeps the chain ascending, unique, and counted.
proptest! {
    #[test]
    fn prop_sorted_insert_order_and_counts(words in proptest::collection::vec("[a-c]{1,3}", 0..100)) {
        let mut list = WordList::new();
        let mut expected: HashMap<&str, usize> = HashMap::new();
        for w in &words {
            list.insert_word_sorted(w);
            *expected.entry(w.as_str()).or_insert(0) += 1;
        }

        let texts: Vec<&str> = list.entries().map(|(t, _)| t).collect();
        prop_assert!(texts.windows(2).all(|p| p[0] < p[1]), "strictly ascending means unique");
        prop_assert_eq!(list.len(), expected.len());
        for (w, n) in &expected {
            prop_assert_eq!(list.occurrences(w), *n);
        }
        prop_assert_eq!(list.entries().map(|(_, n)| n).sum::<usize>(), words.len());
    }
}

// Deleting any node removes exactly it and shortens the chain by one.
proptest! {
    #[test]
    fn prop_delete_any_position(words in proptest::collection::vec("[a-z]{1,4}", 1..30), raw in 0usize..30) {
        let mut list = WordList::new();
        for w in &words {
            list.insert_word_unordered(w, Slot::Head).unwrap();
        }
        let pos = raw % list.len();
        let mut before: Vec<String> = list.entries().map(|(t, _)| t.to_string()).collect();

        let slot = list.slot_at(pos).unwrap();
        let removed = list.delete_node(slot).unwrap().unwrap();
        let gone = before.remove(pos);
        prop_assert_eq!(removed.into_text(), gone);

        let after: Vec<String> = list.entries().map(|(t, _)| t.to_string()).collect();
        prop_assert_eq!(after, before);
        prop_assert_eq!(list.len(), words.len() - 1);
    }
}

// Clearing leaves nothing reachable, whatever was inserted.
proptest! {
    #[test]
    fn prop_clear_releases_everything(words in proptest::collection::vec("[a-c]{0,2}", 0..40), sorted in any::<bool>()) {
        let mut list = WordList::new();
        for w in &words {
            if sorted {
                list.insert_word_sorted(w);
            } else {
                list.insert_word_unordered(w, Slot::Head).unwrap();
            }
        }
        list.clear();
        prop_assert!(list.is_empty());
        prop_assert_eq!(list.len(), 0);
        prop_assert_eq!(list.iter().count(), 0);
        prop_assert!(list.head().is_none());
    }
}
