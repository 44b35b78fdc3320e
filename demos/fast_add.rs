use densevec::vector::{factory, Selector, Vector};

fn main() {
    // Example 1: Basic vector addition
    let a = Vector::from_vec(vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0]);
    let b = Vector::from_vec(vec![8.0, 7.0, 6.0, 5.0, 4.0, 3.0, 2.0, 1.0]);

    println!("Vector A: {:?}", a.to_vec());
    println!("Vector B: {:?}", b.to_vec());

    match a.plus(&b) {
        Ok(result) => println!("A + B = {:?}", result.to_vec()),
        Err(e) => println!("Error: {e}"),
    }

    // Example 2: Reversed views stay on the raw-array engine
    let reversed = a.ref_reverse();
    match reversed.plus(&b.ref_reverse()) {
        Ok(result) => println!("rev(A) + rev(B) = {:?}", result.to_vec()),
        Err(e) => println!("Error: {e}"),
    }

    // Example 3: A selection view forces the cursor engine, same answer
    let size = 1_000_000;
    let large_a = factory::linsequence(0.0, 1.0, size);
    let large_b = factory::linsequence(size as f64, -1.0, size);

    println!("\nLarge vector addition (size: {size})");
    let start = std::time::Instant::now();
    let fast = large_a.plus(&large_b);
    println!("Raw-array engine: {:?}", start.elapsed());

    let generic = large_b
        .ref_slice(&Selector::All)
        .and_then(|selected| {
            let start = std::time::Instant::now();
            let out = large_a.plus(&selected);
            println!("Cursor engine:    {:?}", start.elapsed());
            out
        });

    match (fast, generic) {
        (Ok(f), Ok(g)) => println!("Engines agree: {}", f == g),
        (Err(e), _) | (_, Err(e)) => println!("Error: {e}"),
    }
}
