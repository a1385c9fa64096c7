//! The original call site: a binary `add`, curried, handed to a component
//! constructor together with one field the component never reads, return
//! value discarded.

use curried::component::{mount, Component, Config};
use curried::curry;

fn add(a: i32, b: i32) -> i32 {
    a + b
}

fn main() {
    mount(Config {
        stage: curry(add),
        note: Some(String::from("ignored")),
    });

    // Keeping the component around instead of discarding it.
    let component = Component::new(Config {
        stage: curry(add),
        note: None,
    });
    println!("add(2, 3) = {}", component.call(2, 3));
}
