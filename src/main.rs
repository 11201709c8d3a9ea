use std::error::Error;

use rle_bool_vec::{BitVec, RleBoolVec};

fn main() -> Result<(), Box<dyn Error>> {
    let mut v = RleBoolVec::from_elem(false, 1_000_000);
    v.set(10, true)?;
    v.insert_elem(500_000, true, 250_000)?;
    v.erase_range(100..200)?;
    v.push_back(true);

    println!("len: {}, runs: {}", v.len(), v.num_runs());
    for run in v.runs() {
        println!("  [{}, {}) = {}", run.start, run.end(), run.value);
    }
    println!("ones: {}, first one at {:?}", v.num_ones(), v.select1(0));

    let small: RleBoolVec = [true, true, false, true].into_iter().collect();
    println!("{} ({} runs)", small, small.num_runs());

    Ok(())
}
