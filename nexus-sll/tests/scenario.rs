//! End-to-end walk through every list operation.

use nexus_sll::{List, ListError, SinglyLinkedList, SlabListStorage, Value};

#[test]
fn owned_scenario() {
    let mut list: SinglyLinkedList<&str> = SinglyLinkedList::new();
    assert_eq!(list.to_string(), "none");

    list.add_first("1");
    assert_eq!(list.to_string(), "1");

    list.add_last("2");
    assert_eq!(list.to_string(), "1->2");

    list.add_at_position(2, "3").unwrap();
    assert_eq!(list.to_string(), "1->3->2");

    assert_eq!(list.remove_at_position(2), Ok("3"));
    assert_eq!(list.to_string(), "1->2");

    assert_eq!(list.remove_first(), Ok("1"));
    assert_eq!(list.to_string(), "2");

    assert_eq!(list.remove_last(), Ok("2"));
    assert_eq!(list.to_string(), "none");
    assert!(list.is_consistent());
}

#[test]
fn external_storage_scenario() {
    let mut storage: SlabListStorage<String> = SlabListStorage::with_capacity(4);
    let mut list: List<String, SlabListStorage<String>> = List::new();
    assert_eq!(list.render(&storage), "none");

    list.add_first(&mut storage, "1".into());
    list.add_last(&mut storage, "2".into());
    list.add_at_position(&mut storage, 2, "3".into()).unwrap();
    assert_eq!(list.render(&storage), "1->3->2");

    assert_eq!(list.remove_at_position(&mut storage, 2).as_deref(), Ok("3"));
    assert_eq!(list.remove_first(&mut storage).as_deref(), Ok("1"));
    assert_eq!(list.remove_last(&mut storage).as_deref(), Ok("2"));
    assert_eq!(list.render(&storage), "none");
    assert!(storage.is_empty());
}

#[test]
fn add_last_on_empty_list() {
    let mut list = SinglyLinkedList::new();
    list.add_last(42u64);

    assert_eq!(list.front(), Some(&42));
    assert_eq!(list.back(), Some(&42));
    assert_eq!(list.to_string(), "42");
    assert!(list.is_consistent());
}

#[test]
fn errors_leave_list_unchanged() {
    let mut list = SinglyLinkedList::new();
    list.add_last(1u64);
    list.add_last(2);

    assert_eq!(
        list.add_at_position(0, 9),
        Err(ListError::InvalidPosition { position: 0, len: 2 })
    );
    assert_eq!(
        list.add_at_position(4, 9),
        Err(ListError::InvalidPosition { position: 4, len: 2 })
    );
    assert_eq!(
        list.remove_at_position(3),
        Err(ListError::InvalidPosition { position: 3, len: 2 })
    );
    assert_eq!(list.to_string(), "1->2");

    let mut empty: SinglyLinkedList<u64> = SinglyLinkedList::new();
    assert_eq!(empty.remove_first(), Err(ListError::EmptyList));
    assert_eq!(empty.remove_last(), Err(ListError::EmptyList));
    assert_eq!(empty.to_string(), "none");
    assert!(empty.is_consistent());
}

#[test]
fn errors_propagate_with_question_mark() {
    fn take_two(list: &mut SinglyLinkedList<u64>) -> Result<(u64, u64), ListError> {
        Ok((list.remove_first()?, list.remove_first()?))
    }

    let mut list = SinglyLinkedList::new();
    list.add_last(1);
    assert_eq!(take_two(&mut list), Err(ListError::EmptyList));
    assert!(list.is_empty());
}

#[test]
fn heterogeneous_values() {
    let mut list: SinglyLinkedList<Value> = SinglyLinkedList::new();
    list.add_last("one".into());
    list.add_last(2.into());
    list.add_at_position(2, 1.5.into()).unwrap();
    list.add_first(true.into());

    assert_eq!(list.to_string(), "true->one->1.5->2");
    assert_eq!(list.remove_last(), Ok(Value::Int(2)));
    assert_eq!(list.get(2).and_then(Value::as_str), Some("one"));
}
