// Property-based checks: the list is driven with random operation sequences
// and compared against a `Vec` model, with the structural invariants
// re-checked after every step.

use proptest::prelude::*;
use proptest::sample::Index;

use crate::{LinkedList, ListError};

#[derive(Debug, Clone)]
enum Op {
    Append(u8),
    Prepend(u8),
    Insert(Index, u8),
    Get(Index),
    Delete(u8),
    Replace(u8, u8),
    PopFront,
}

// Small value range so deletes and replaces hit duplicates often.
fn value() -> impl Strategy<Value = u8> {
    0u8..6
}

fn op() -> impl Strategy<Value = Op> {
    prop_oneof![
        value().prop_map(Op::Append),
        value().prop_map(Op::Prepend),
        (any::<Index>(), value()).prop_map(|(i, v)| Op::Insert(i, v)),
        any::<Index>().prop_map(Op::Get),
        value().prop_map(Op::Delete),
        (value(), value()).prop_map(|(old, new)| Op::Replace(old, new)),
        Just(Op::PopFront),
    ]
}

fn apply(list: &mut LinkedList<u8>, model: &mut Vec<u8>, op: Op) -> Result<(), TestCaseError> {
    match op {
        Op::Append(v) => {
            list.append(v);
            model.push(v);
            prop_assert_eq!(list.get_at_index(list.length() - 1), Ok(&v));
        }
        Op::Prepend(v) => {
            list.prepend(v);
            model.insert(0, v);
            prop_assert_eq!(list.get_at_index(0), Ok(&v));
        }
        Op::Insert(i, v) => {
            let index = i.index(model.len() + 1);
            list.insert_at_index(index, v).map_err(|e| TestCaseError::fail(e.to_string()))?;
            model.insert(index, v);
            prop_assert_eq!(list.get_at_index(index), Ok(&v));
        }
        Op::Get(i) => {
            let index = i.index(model.len() + 1);
            match model.get(index) {
                Some(expected) => prop_assert_eq!(list.get_at_index(index), Ok(expected)),
                None => prop_assert_eq!(
                    list.get_at_index(index),
                    Err(ListError::IndexOutOfRange { index, len: model.len() })
                ),
            }
        }
        Op::Delete(v) => match model.iter().position(|&x| x == v) {
            Some(pos) => {
                prop_assert_eq!(list.delete(&v), Ok(()));
                model.remove(pos);
            }
            None => prop_assert_eq!(list.delete(&v), Err(ListError::ItemNotFound)),
        },
        Op::Replace(old, new) => {
            let matches = model.iter().filter(|&&x| x == old).count();
            if matches == 0 {
                prop_assert_eq!(list.replace(&old, new), Err(ListError::ItemNotFound));
            } else {
                prop_assert_eq!(list.replace(&old, new), Ok(matches));
                for x in model.iter_mut().filter(|x| **x == old) {
                    *x = new;
                }
            }
        }
        Op::PopFront => {
            let expected = if model.is_empty() { None } else { Some(model.remove(0)) };
            prop_assert_eq!(list.pop_front(), expected);
        }
    }
    Ok(())
}

proptest! {
    #[test]
    fn test_matches_vec_model(ops in prop::collection::vec(op(), 0..64)) {
        let mut list = LinkedList::new();
        let mut model = Vec::new();

        for op in ops {
            apply(&mut list, &mut model, op)?;
            list.assert_invariants();
            prop_assert_eq!(list.items(), model.clone());
            prop_assert_eq!(list.items().len(), list.length());
            prop_assert_eq!(list.is_empty(), list.length() == 0);
            prop_assert_eq!(list.head(), model.first());
            prop_assert_eq!(list.tail(), model.last());
        }
    }

    #[test]
    fn test_insert_then_get(
        items in prop::collection::vec(any::<i32>(), 0..32),
        i in any::<Index>(),
        x in any::<i32>(),
    ) {
        let mut list: LinkedList<i32> = items.iter().copied().collect();
        let index = i.index(items.len() + 1);
        let before = list.length();

        list.insert_at_index(index, x).map_err(|e| TestCaseError::fail(e.to_string()))?;

        prop_assert_eq!(list.get_at_index(index), Ok(&x));
        prop_assert_eq!(list.length(), before + 1);
        list.assert_invariants();
    }

    #[test]
    fn test_construct_preserves_order(items in prop::collection::vec(any::<i16>(), 0..48)) {
        let list: LinkedList<i16> = items.clone().into();
        list.assert_invariants();
        prop_assert_eq!(list.items(), items);
    }

    #[test]
    fn test_delete_everything_in_any_order(
        (items, order) in prop::collection::vec(any::<u8>(), 0..32)
            .prop_flat_map(|items| (Just(items.clone()), Just(items).prop_shuffle()))
    ) {
        let mut list: LinkedList<u8> = items.into();
        for item in &order {
            prop_assert_eq!(list.delete(item), Ok(()));
            list.assert_invariants();
        }

        prop_assert!(list.is_empty());
        prop_assert_eq!(list.length(), 0);
        prop_assert_eq!(list.head(), None);
        prop_assert_eq!(list.tail(), None);
    }

    #[test]
    fn test_find_returns_first_match(
        items in prop::collection::vec(0u8..10, 0..32),
        target in 0u8..10,
    ) {
        let list: LinkedList<u8> = items.iter().copied().collect();
        let expected = items.iter().find(|&&x| x >= target);
        prop_assert_eq!(list.find(|&x| x >= target), expected);
    }
}
