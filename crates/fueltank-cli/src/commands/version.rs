//! Version command implementation.

const VERSION: &str = env!("CARGO_PKG_VERSION");

pub fn run() {
    println!("fueltank {VERSION}");
    println!();
    println!("A validated car fuel tank, with a console demonstration.");
}
