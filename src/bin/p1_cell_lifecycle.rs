//! Pattern 1: Cell Lifecycle
//! Create, copy, move, and drop a heap-owning value type.
//!
//! Run with: cargo run --bin p1_cell_lifecycle

use owned_cell::{live_cells, CellError, OwnedCell};

fn create_cell() -> Result<OwnedCell, CellError> {
    let mut cell = OwnedCell::new();
    cell.set(666)?;
    Ok(cell)
}

fn main() -> Result<(), CellError> {
    println!("=== Create and mutate ===\n");
    let mut v1 = create_cell()?;
    println!("v1 holds {}", v1.value()?);
    v1.set(888)?;
    println!("v1 now holds {}", v1.value()?);

    println!("\n=== Deep copy: clones never alias ===\n");
    let v2 = v1.clone();
    v1.set(123)?;
    println!("v1 holds {}, its clone v2 still holds {}", v1.value()?, v2.value()?);

    println!("\n=== Move: the source becomes empty ===\n");
    let v3 = v1.take();
    println!("v3 holds {}, v1 empty: {}", v3.value()?, v1.is_empty());
    match v1.value() {
        Err(CellError::MovedFrom) => println!("reading v1 is rejected: {}", CellError::MovedFrom),
        other => println!("unexpected: {:?}", other),
    }

    println!("\n=== Move assignment releases the overwritten cell ===\n");
    let mut v4 = OwnedCell::with_value(1);
    let mut v5 = OwnedCell::with_value(2);
    println!("v4 holds {}, v5 holds {}", v4.value()?, v5.value()?);
    println!("live cells before: {}", live_cells());
    v4 = v5.take();
    println!("live cells after:  {} (v4's old cell was released)", live_cells());
    println!("v4 holds {}, v5 empty: {}", v4.value()?, v5.is_empty());

    println!("\n=== Drop releases exactly once ===\n");
    println!("live cells before scope: {}", live_cells());
    {
        let _scoped = OwnedCell::with_value(7);
        println!("live cells inside scope: {}", live_cells());
    }
    println!("live cells after scope:  {}", live_cells());

    Ok(())
}
