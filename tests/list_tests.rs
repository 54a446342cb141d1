//! Tests for the homogeneous, copy-on-edit list tag

use std::cell::RefCell;

use na_tagtree::{
    BinaryTag, CompoundTag, Error, FloatTag, IntTag, ListTag, LongTag, StringTag, TagType,
};

fn ints(values: &[i32]) -> ListTag {
    ListTag::from_tags(values.iter().map(|&v| IntTag::of(v))).unwrap()
}

#[test]
fn test_empty_list() {
    let empty = ListTag::empty();
    assert!(empty.is_empty());
    assert_eq!(empty.len(), 0);
    assert_eq!(empty.element_type(), TagType::End);
    assert!(empty.ptr_eq(&ListTag::empty()));
    assert!(empty.ptr_eq(&ListTag::default()));
}

#[test]
fn test_first_add_decides_element_type() {
    let list = ListTag::empty().add(IntTag::of(5)).unwrap();
    assert_eq!(list.element_type(), TagType::Int);
    assert_eq!(list.len(), 1);
    assert_eq!(list.get(0).unwrap(), &BinaryTag::from(5));
}

#[test]
fn test_add_scenario_rejects_third_string() {
    let list = ListTag::empty()
        .add(IntTag::of(1))
        .unwrap()
        .add(IntTag::of(2))
        .unwrap();

    let err = list.add(StringTag::of("x")).unwrap_err();
    assert_eq!(
        err,
        Error::TagMismatch {
            expected: TagType::Int,
            actual: TagType::String,
        }
    );
    assert!(err.is_invalid_argument());
    assert_eq!(list.len(), 2);
    assert_eq!(list.element_type(), TagType::Int);
}

#[test]
fn test_add_same_type_succeeds() {
    let list = ints(&[1, 2]);
    let longer = list.add(IntTag::of(3)).unwrap();
    assert_eq!(longer.element_type(), TagType::Int);
    assert_eq!(longer, ints(&[1, 2, 3]));
}

#[test]
fn test_end_never_allowed() {
    assert_eq!(ListTag::empty().add(BinaryTag::End), Err(Error::EndInList));
    assert_eq!(ints(&[1]).add(BinaryTag::End), Err(Error::EndInList));
    assert_eq!(ints(&[1]).set(0, BinaryTag::End), Err(Error::EndInList));
    assert!(Error::EndInList.is_invalid_argument());
}

#[test]
fn test_add_leaves_receiver_untouched() {
    let list = ints(&[1, 2]);
    let longer = list.add(IntTag::of(3)).unwrap();
    assert_eq!(list.len(), 2);
    assert_eq!(longer.len(), 3);
    assert!(!list.ptr_eq(&longer));
    assert!(ListTag::empty().is_empty());
}

#[test]
fn test_get_out_of_range() {
    let list = ints(&[1, 2]);
    assert_eq!(
        list.get(2),
        Err(Error::IndexOutOfRange { index: 2, len: 2 })
    );
    assert!(ListTag::empty().get(0).is_err());
}

#[test]
fn test_set_replaces_and_reports() {
    let list = ints(&[1, 2, 3]);
    let replaced = RefCell::new(None);
    let updated = list
        .set_with(1, IntTag::of(20), |old| *replaced.borrow_mut() = Some(old))
        .unwrap();

    assert_eq!(replaced.into_inner(), Some(BinaryTag::from(2)));
    assert_eq!(updated, ints(&[1, 20, 3]));
    assert_eq!(list, ints(&[1, 2, 3]));
}

#[test]
fn test_set_type_mismatch() {
    let list = ints(&[1, 2]);
    let called = RefCell::new(false);
    let err = list
        .set_with(0, LongTag::of(1), |_| *called.borrow_mut() = true)
        .unwrap_err();
    assert!(matches!(err, Error::TagMismatch { .. }));
    assert!(!called.into_inner());
    assert_eq!(list, ints(&[1, 2]));
}

#[test]
fn test_set_out_of_range() {
    assert_eq!(
        ints(&[1]).set(3, IntTag::of(0)),
        Err(Error::IndexOutOfRange { index: 3, len: 1 })
    );
}

#[test]
fn test_remove_reports_removed() {
    let list = ints(&[1, 2, 3]);
    let mut removed = Vec::new();
    let shorter = list.remove_with(0, |tag| removed.push(tag)).unwrap();

    assert_eq!(removed, vec![BinaryTag::from(1)]);
    assert_eq!(shorter, ints(&[2, 3]));
    assert_eq!(list.len(), 3);
}

#[test]
fn test_remove_out_of_range() {
    assert_eq!(
        ListTag::empty().remove(0),
        Err(Error::IndexOutOfRange { index: 0, len: 0 })
    );
}

#[test]
fn test_element_type_sticky_after_remove() {
    let list = ListTag::empty().add(IntTag::of(5)).unwrap();
    let emptied = list.remove(0).unwrap();

    assert!(emptied.is_empty());
    assert_eq!(emptied.element_type(), TagType::Int);
    assert!(matches!(
        emptied.add(StringTag::of("x")),
        Err(Error::TagMismatch {
            expected: TagType::Int,
            actual: TagType::String
        })
    ));
    assert!(emptied.add(IntTag::of(6)).is_ok());
}

#[test]
fn test_equality_ignores_element_type_of_empty_lists() {
    let emptied = ints(&[1]).remove(0).unwrap();
    assert_eq!(emptied, ListTag::empty());
}

#[test]
fn test_of_with_declared_type() {
    let list = ListTag::of(TagType::Float, [FloatTag::of(1.0), FloatTag::of(2.0)]).unwrap();
    assert_eq!(list.element_type(), TagType::Float);

    let typed_empty = ListTag::of::<BinaryTag>(TagType::String, []).unwrap();
    assert_eq!(typed_empty.element_type(), TagType::String);
    assert!(typed_empty.add(IntTag::of(1)).is_err());

    assert!(ListTag::of(TagType::Int, [BinaryTag::from(1), BinaryTag::from("a")]).is_err());
}

#[test]
fn test_from_tags_rejects_mixed() {
    let result = ListTag::from_tags([BinaryTag::from(1), BinaryTag::from(2i64)]);
    assert_eq!(
        result,
        Err(Error::TagMismatch {
            expected: TagType::Int,
            actual: TagType::Long
        })
    );
}

#[test]
fn test_nested_lists() {
    let inner = ints(&[1, 2]);
    let outer = ListTag::empty()
        .add(inner.clone())
        .unwrap()
        .add(ListTag::empty())
        .unwrap();
    assert_eq!(outer.element_type(), TagType::List);
    assert_eq!(outer.get(0).unwrap().as_list(), Some(&inner));
    assert!(outer.add(CompoundTag::empty()).is_err());
}

#[test]
fn test_iteration() {
    let list = ints(&[3, 4, 5]);
    let values: Vec<i32> = list.iter().filter_map(BinaryTag::as_int).collect();
    assert_eq!(values, vec![3, 4, 5]);

    let mut total = 0;
    for tag in &list {
        total += tag.as_int().unwrap();
    }
    assert_eq!(total, 12);
    assert_eq!(list.as_slice().len(), 3);
}

#[test]
fn test_builder_enforces_homogeneity() {
    let mut builder = ListTag::builder();
    builder.add(IntTag::of(1)).unwrap();
    assert_eq!(builder.element_type(), TagType::Int);
    assert_eq!(builder.len(), 1);

    let err = builder.add(StringTag::of("x")).unwrap_err();
    assert!(err.is_invalid_argument());
    assert_eq!(builder.len(), 1);

    let list = builder.add_all([IntTag::of(2), IntTag::of(3)]).unwrap().build();
    assert_eq!(list, ints(&[1, 2, 3]));
}

#[test]
fn test_builder_keeps_elements_after_rejection() {
    let mut builder = ListTag::builder();
    builder.add(1).unwrap().add(2).unwrap();

    assert_eq!(
        builder.add(StringTag::of("x")).unwrap_err(),
        Error::TagMismatch {
            expected: TagType::Int,
            actual: TagType::String,
        }
    );
    assert_eq!(builder.add(BinaryTag::End).unwrap_err(), Error::EndInList);

    let list = builder.build();
    assert_eq!(list.len(), 2);
    assert_eq!(list, ints(&[1, 2]));
}

#[test]
fn test_builder_add_all_is_all_or_nothing() {
    let mut builder = ListTag::builder();
    let tags: [BinaryTag; 3] = [IntTag::of(1).into(), IntTag::of(2).into(), "x".into()];
    assert!(builder.add_all(tags).is_err());
    assert!(builder.is_empty());
    assert_eq!(builder.element_type(), TagType::End);

    builder.add_all([4, 5]).unwrap();
    assert_eq!(builder.build(), ints(&[4, 5]));
}

#[test]
fn test_builder_stays_usable_after_build() {
    let mut builder = ListTag::builder();
    builder.add(1).unwrap();
    let first = builder.build();
    builder.add(2).unwrap();
    assert_eq!(first, ints(&[1]));
    assert_eq!(builder.build(), ints(&[1, 2]));
}

#[test]
fn test_builder_round_trip() {
    let list = ints(&[1, 2, 3]);
    let rebuilt = list.to_builder().build();
    assert_eq!(rebuilt, list);
    assert_eq!(rebuilt.element_type(), list.element_type());
    assert!(!rebuilt.ptr_eq(&list));

    let sticky = list.remove(0).unwrap().remove(0).unwrap().remove(0).unwrap();
    assert_eq!(sticky.to_builder().build().element_type(), TagType::Int);
}

#[test]
fn test_builder_snapshot_is_independent() {
    let list = ints(&[1]);
    let extended = list.to_builder().add(IntTag::of(2)).unwrap().build();
    assert_eq!(list.len(), 1);
    assert_eq!(extended.len(), 2);
}

#[test]
fn test_empty_builder_yields_shared_empty() {
    assert!(ListTag::builder().build().ptr_eq(&ListTag::empty()));
}

#[test]
fn test_hash_follows_elements() {
    use std::collections::HashSet;

    let mut set = HashSet::new();
    set.insert(ints(&[1, 2]));
    set.insert(ints(&[1]).add(IntTag::of(2)).unwrap());
    assert_eq!(set.len(), 1);
}

#[test]
fn test_shared_across_threads() {
    let list = ints(&[1, 2, 3]);
    let handles: Vec<_> = (0..4)
        .map(|i| {
            let list = list.clone();
            std::thread::spawn(move || list.add(IntTag::of(i)).unwrap().len())
        })
        .collect();
    for handle in handles {
        assert_eq!(handle.join().unwrap(), 4);
    }
    assert_eq!(list.len(), 3);
}
