use curried::curry;

#[curry]
fn add(a: i32, b: i32) -> i32 {
    a + b
}

fn main() {
    // Same function, curried once at compile time and once at runtime.
    assert_eq!(add(1)(2), 3);
    assert_eq!(curried::curry(|a: i32, b: i32| a + b)(1)(2), 3);

    println!("add(1)(2) = {}", add(1)(2));
}
