//! Walks the list through each operation, printing the rendering after
//! every step.
//!
//! Run with `RUST_LOG=trace cargo run --example demo` to see the
//! operation trace alongside the output.

use nexus_sll::{ListError, SinglyLinkedList};

fn main() -> Result<(), ListError> {
    env_logger::init();

    let mut list = SinglyLinkedList::new();
    println!("{list}");

    list.add_first("1");
    println!("{list}");
    list.add_last("2");
    println!("{list}");
    list.add_at_position(2, "3")?;
    println!("{list}");

    list.remove_at_position(2)?;
    println!("{list}");
    list.remove_first()?;
    println!("{list}");
    list.remove_last()?;
    println!("{list}");

    // none
    // 1
    // 1->2
    // 1->3->2
    // 1->2
    // 2
    // none

    Ok(())
}
