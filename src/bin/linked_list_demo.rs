use colored::Colorize;
use dsa_basics::LinkedList;

fn main() {
    env_logger::init();

    println!("{}", "=== Singly Linked List ===".bold());
    let mut list = LinkedList::new();

    list.push_front(20);
    println!("insert 20 at beginning: {list}");
    list.push_front(10);
    println!("insert 10 at beginning: {list}");
    list.push_back(30);
    println!("insert 30 at end:       {list}");
    println!("length: {}", list.len());

    if let Ok(value) = list.pop_front() {
        println!("deleted {value} at beginning: {list}");
    }
    if let Ok(value) = list.pop_back() {
        println!("deleted {value} at end:       {list}");
    }
    if let Ok(value) = list.pop_back() {
        println!("deleted {value} at end:       {list}");
    }

    if let Err(err) = list.pop_front() {
        println!("{}", err.to_string().yellow());
    }
    println!("length: {}", list.len());
}
