//! Properties checked against a `Vec` model and across the
//! iterative/recursive pairs.

use proptest::prelude::*;

use crate::{LinkedList, ListError};

// Recursive variants run on every case; keep lists shallow.
const MAX_LEN: usize = 64;

#[derive(Clone, Debug)]
enum Op {
    PushFront(u8),
    PushBack(u8),
    PushBackRecursive(u8),
    PopFront,
    Delete(u8),
    DeleteRecursive(u8),
    Reverse,
    ReverseRecursive,
}

fn op_strategy() -> impl Strategy<Value = Op> {
    // Small values so deletes hit often.
    let value = 0u8..8;
    prop_oneof![
        2 => value.clone().prop_map(Op::PushFront),
        2 => value.clone().prop_map(Op::PushBack),
        1 => value.clone().prop_map(Op::PushBackRecursive),
        1 => Just(Op::PopFront),
        1 => value.clone().prop_map(Op::Delete),
        1 => value.prop_map(Op::DeleteRecursive),
        1 => Just(Op::Reverse),
        1 => Just(Op::ReverseRecursive),
    ]
}

fn values(list: &LinkedList<u8>) -> Vec<u8> {
    list.iter().copied().collect()
}

fn model_delete(model: &mut Vec<u8>, value: u8) -> bool {
    match model.iter().position(|v| *v == value) {
        Some(idx) => {
            model.remove(idx);
            true
        }
        None => false,
    }
}

proptest! {
    #[test]
    fn push_back_keeps_order(input in prop::collection::vec(any::<i32>(), 0..MAX_LEN)) {
        let mut list = LinkedList::new();
        let mut rec = LinkedList::new();
        for v in &input {
            list.push_back(*v);
            rec.push_back_recursive(*v);
        }
        prop_assert_eq!(list.iter().copied().collect::<Vec<_>>(), input.clone());
        prop_assert_eq!(rec.iter().copied().collect::<Vec<_>>(), input);
    }

    #[test]
    fn push_front_reverses_order(input in prop::collection::vec(any::<i32>(), 0..MAX_LEN)) {
        let mut list = LinkedList::new();
        for v in &input {
            list.push_front(*v);
        }
        let expected: Vec<i32> = input.iter().rev().copied().collect();
        prop_assert_eq!(list.iter().copied().collect::<Vec<_>>(), expected);
    }

    #[test]
    fn reverse_twice_is_identity(input in prop::collection::vec(any::<i32>(), 0..MAX_LEN)) {
        let mut list: LinkedList<i32> = input.iter().copied().collect();
        list.reverse();
        list.reverse();
        prop_assert_eq!(list.iter().copied().collect::<Vec<_>>(), input.clone());

        list.reverse_recursive();
        list.reverse_recursive();
        prop_assert_eq!(list.iter().copied().collect::<Vec<_>>(), input);
    }

    #[test]
    fn variants_agree(
        input in prop::collection::vec(0u8..8, 0..MAX_LEN),
        target in 0u8..10,
    ) {
        let list: LinkedList<u8> = input.iter().copied().collect();

        prop_assert_eq!(list.length(), input.len());
        prop_assert_eq!(list.length_recursive(), input.len());

        match (list.find(&target), list.find_recursive(&target)) {
            (Some(a), Some(b)) => prop_assert!(std::ptr::eq(a, b)),
            (None, None) => prop_assert!(!input.contains(&target)),
            _ => prop_assert!(false, "find variants disagree"),
        }

        let mut it = list.clone();
        let mut rec = list.clone();
        prop_assert_eq!(it.delete(&target), rec.delete_recursive(&target));
        prop_assert_eq!(&it, &rec);

        it.reverse();
        rec.reverse_recursive();
        prop_assert_eq!(&it, &rec);

        it.apply(|x| x.wrapping_mul(3));
        rec.apply_recursive(|x| x.wrapping_mul(3));
        prop_assert_eq!(&it, &rec);
    }

    #[test]
    fn apply_maps_every_position(input in prop::collection::vec(any::<i16>(), 0..MAX_LEN)) {
        let mut list: LinkedList<i16> = input.iter().copied().collect();
        list.apply(|x| x.wrapping_add(1));
        let expected: Vec<i16> = input.iter().map(|x| x.wrapping_add(1)).collect();
        prop_assert_eq!(list.length(), input.len());
        prop_assert_eq!(list.iter().copied().collect::<Vec<_>>(), expected);
    }

    #[test]
    fn operations_match_vec_model(ops in prop::collection::vec(op_strategy(), 0..MAX_LEN)) {
        let mut list = LinkedList::new();
        let mut model: Vec<u8> = Vec::new();
        let mut pushed = 0usize;
        let mut removed = 0usize;

        for op in ops {
            match op {
                Op::PushFront(v) => {
                    list.push_front(v);
                    model.insert(0, v);
                    pushed += 1;
                }
                Op::PushBack(v) => {
                    list.push_back(v);
                    model.push(v);
                    pushed += 1;
                }
                Op::PushBackRecursive(v) => {
                    list.push_back_recursive(v);
                    model.push(v);
                    pushed += 1;
                }
                Op::PopFront => {
                    let before = values(&list);
                    match list.pop_front() {
                        Ok(v) => {
                            prop_assert_eq!(v, model.remove(0));
                            removed += 1;
                        }
                        Err(err) => {
                            prop_assert_eq!(err, ListError::EmptyContainer);
                            prop_assert!(model.is_empty());
                            prop_assert_eq!(values(&list), before);
                        }
                    }
                }
                Op::Delete(v) => {
                    let hit = list.delete(&v);
                    prop_assert_eq!(hit, model_delete(&mut model, v));
                    removed += usize::from(hit);
                }
                Op::DeleteRecursive(v) => {
                    let hit = list.delete_recursive(&v);
                    prop_assert_eq!(hit, model_delete(&mut model, v));
                    removed += usize::from(hit);
                }
                Op::Reverse => {
                    list.reverse();
                    model.reverse();
                }
                Op::ReverseRecursive => {
                    list.reverse_recursive();
                    model.reverse();
                }
            }
            prop_assert_eq!(values(&list), model.clone());
            prop_assert_eq!(list.length(), pushed - removed);
        }
    }
}
