//! Evaluates the bundled recurrences and prints their values.
//!
//! # Usage
//!
//! ```text
//! cargo run --example recurrences
//! ```

use std::error::Error;

use reprise_components::{Factorial, Fibonacci, SerialNumbers};

fn main() -> Result<(), Box<dyn Error>> {
    let mut labels = SerialNumbers::with_prefix("n=");

    let mut fibonacci = Fibonacci::memoized();
    println!("Fibonacci:");
    for n in 0..=10 {
        println!("  {} -> {}", labels.generate(), fibonacci.eval(n)?);
    }

    let mut factorial = Factorial::memoized();
    println!("Factorial:");
    for n in 0..=10 {
        println!("  {n}! = {}", factorial.eval(n)?);
    }

    Ok(())
}
