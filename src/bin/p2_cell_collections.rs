//! Pattern 2: Cells in Collections
//! Comparator-driven uniqueness: the cell type itself carries no equality
//! or ordering, so every collection is told how to compare at the call
//! site.
//!
//! Run with: cargo run --bin p2_cell_collections

use owned_cell::{
    live_cells, ByValue, CellError, CmpFn, HashedSet, OrderedSet, OwnedCell, OwnedCellArray,
};

fn main() -> Result<(), CellError> {
    println!("=== Vectors: push by clone or by move ===\n");
    let v1 = OwnedCell::with_value(5);
    let mut v2 = OwnedCell::with_value(3);

    let mut cells: Vec<OwnedCell> = Vec::with_capacity(2);
    cells.push(v1.clone()); // duplicates the cell
    cells.push(v2.take()); // transfers it, v2 is now empty
    println!("vector holds {} cells", cells.len());
    println!("v1 still holds {}, v2 empty: {}", v1.value()?, v2.is_empty());

    let copied = cells.clone(); // element-wise deep copy
    println!("copied vector holds {} independent cells", copied.len());

    println!("\n=== Ordered set with an explicit comparator ===\n");
    let mut ordered: OrderedSet<OwnedCell, ByValue> = OrderedSet::new();
    for v in [5, 3, 5] {
        let grew = ordered.insert(OwnedCell::with_value(v));
        println!(
            "insert {}: {}",
            v,
            if grew { "added" } else { "duplicate, dropped" }
        );
    }
    let ascending: Vec<i64> = ordered.iter().filter_map(|c| c.peek()).collect();
    println!("contents ascending: {:?}", ascending);

    println!("\n=== Same cells, a closure comparator, descending ===\n");
    let mut descending =
        OrderedSet::with_comparator(CmpFn(|a: &OwnedCell, b: &OwnedCell| b.peek().cmp(&a.peek())));
    for v in [5, 3, 5] {
        descending.insert(OwnedCell::with_value(v));
    }
    let values: Vec<i64> = descending.iter().filter_map(|c| c.peek()).collect();
    println!("contents descending: {:?}", values);

    println!("\n=== Hashed set with an explicit hash+equality pair ===\n");
    let mut hashed: HashedSet<OwnedCell, ByValue> = HashedSet::new();
    for v in [5, 3, 5] {
        hashed.insert(OwnedCell::with_value(v));
    }
    let mut members: Vec<i64> = hashed.iter().filter_map(|c| c.peek()).collect();
    members.sort_unstable();
    println!("{} unique values: {:?}", hashed.len(), members);

    println!("\n=== Bulk ownership: one array, one release ===\n");
    println!("live cells before array: {}", live_cells());
    {
        let mut arr = OwnedCellArray::with_len(4);
        for i in 0..arr.len() {
            arr.set(i, (i as i64 + 1) * 11)?;
        }
        println!("array of {} cells holds {:?}", arr.len(), arr.values());
        println!("live cells with array alive: {}", live_cells());
    }
    println!("live cells after bulk release: {}", live_cells());

    Ok(())
}
