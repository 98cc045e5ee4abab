use std::env;
use std::path::Path;

use colored::Colorize;
use dsa_basics::{ArrayList, GrowthConfig, Result};

fn main() -> Result<()> {
    env_logger::init();

    let config = match env::args().nth(1) {
        Some(path) => GrowthConfig::from_file(Path::new(&path))?,
        None => GrowthConfig::default(),
    };

    println!("{}", "=== ArrayList ===".bold());
    let mut list: ArrayList<i32> = ArrayList::with_config(&config);

    for value in [10, 20, 30] {
        let before = list.capacity();
        list.insert(value);
        if list.capacity() != before {
            println!("  grew {} -> {}", before, list.capacity());
        }
    }

    println!("{list}");
    println!("element 1: {}", list.try_get(1)?);

    match list.try_get(7) {
        Ok(value) => println!("element 7: {value}"),
        Err(err) => println!("{}", err.to_string().yellow()),
    }

    Ok(())
}
