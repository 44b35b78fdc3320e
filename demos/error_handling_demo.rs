//! Error Handling Demonstration
//!
//! Every densevec operation returns a `Result`. This walks through the
//! failures a caller can see and how to react to each one.

use densevec::config::scoped_operation_check;
use densevec::vector::{factory, IntVector, Selector, Vector};
use densevec::VectorError;

fn report<T: std::fmt::Debug>(label: &str, result: densevec::Result<T>) {
    match result {
        Ok(value) => println!("   {label}: {value:?}"),
        Err(VectorError::DimensionMismatch { op, expected, found }) => {
            println!("   {label}: {op} wanted {expected} elements, got {found}");
        }
        Err(VectorError::IndexOutOfBounds { index, size }) => {
            println!("   {label}: index {index} is outside a vector of {size}");
        }
        Err(VectorError::DivisionByZero) => {
            println!("   {label}: integer division by zero, nothing was written");
        }
        Err(e) => println!("   {label}: {e}"),
    }
}

fn main() {
    println!("densevec Error Handling Demonstration\n");

    println!("Example 1: Successful addition");
    let a = Vector::from_vec(vec![1.0, 2.0, 3.0, 4.0]);
    let b = Vector::from_vec(vec![10.0, 20.0, 30.0, 40.0]);
    report("a + b", a.plus(&b).map(|v| v.to_vec()));
    println!();

    println!("Example 2: Mismatched lengths");
    let short = Vector::from_vec(vec![1.0, 2.0, 3.0]);
    report("short + b", short.plus(&b).map(|v| v.to_vec()));
    {
        let _unchecked = scoped_operation_check(false);
        report(
            "short + b (check disabled)",
            short.plus(&b).map(|v| v.to_vec()),
        );
    }
    println!();

    println!("Example 3: Bad indices");
    report("a[7]", a.get(7));
    report("a[1..9]", a.sub_vec(1, 9).map(|v| v.to_vec()));
    report(
        "select [0, 5]",
        a.slice(&Selector::Indices(vec![0, 5])).map(|v| v.to_vec()),
    );
    println!();

    println!("Example 4: Integer division");
    let mut counts = IntVector::from_vec(vec![10, 20, 30]);
    let divisors = IntVector::from_vec(vec![2, 0, 5]);
    report("counts / divisors", counts.div(&divisors).map(|v| v.to_vec()));
    report("counts /= divisors", counts.div_in_place(&divisors));
    println!("   counts unchanged: {:?}", counts.to_vec());
    println!();

    println!("Example 5: Invalid arguments");
    report("range_step(0, 5, 0)", factory::range_step(0, 5, 0).map(|v| v.to_vec()));
    report("logspace(-1, 10, 3)", factory::logspace(-1.0, 10.0, 3).map(|v| v.to_vec()));

    println!("\nAll errors were handled without panicking.");
}
