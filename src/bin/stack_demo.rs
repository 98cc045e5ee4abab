use std::env;
use std::path::Path;

use colored::Colorize;
use dsa_basics::{GrowthConfig, Result, Stack};

fn main() -> Result<()> {
    env_logger::init();

    let config = match env::args().nth(1) {
        Some(path) => GrowthConfig::from_file(Path::new(&path))?,
        None => GrowthConfig::default(),
    };

    println!("{}", "=== Growable Stack ===".bold());
    let mut stack: Stack<i32> = Stack::with_config(&config);
    println!("initial slots: {:?}", stack.slots());

    for value in [10, 20, 30, 40, 50] {
        stack.push(value);
    }
    println!(
        "after pushes:  {:?} (capacity {}, {} resizes)",
        stack.slots(),
        stack.capacity(),
        stack.resize_count()
    );

    for _ in 0..2 {
        println!("popped: {}", stack.pop()?);
    }

    stack.push(60);
    // popped slots are reset to the default value rather than keeping the
    // old element, so slot 4 reads 0 here and not 50
    println!("after push 60: {:?}", stack.slots());
    println!("contents:      {stack}");

    println!("\n{}", "=== Draining ===".bold());
    loop {
        match stack.pop() {
            Ok(value) => println!("popped: {value}"),
            Err(err) => {
                println!("{}", format!("stop: {err}").yellow());
                break;
            }
        }
    }

    Ok(())
}
