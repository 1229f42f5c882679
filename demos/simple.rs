//! Parse, edit, and write back an INI document.
//!
//! Run with: cargo run --example simple

use inifile::{from_str, to_string};
use std::error::Error;

fn main() -> Result<(), Box<dyn Error>> {
    let text = "\
[server]
host = localhost
port = 8080

[logging]
level = info
";

    let mut doc = from_str(text)?;

    for (section, param, value) in doc.iter() {
        println!("{section}.{param} = {value}");
    }

    doc.section_mut("server")?.insert("port", "9090")?;
    doc.section_mut("features")?.insert("beta", "true")?;
    doc.remove_section("logging")?;

    println!("\nINI output:\n{}", to_string(&doc));

    let back = from_str(&to_string(&doc))?;
    assert_eq!(doc, back);
    println!("✓ Round-trip successful");

    Ok(())
}
