//! Reading leading and trailing comments.
//!
//! Run with: RUST_LOG=inifile=trace cargo run --example comments

use inifile::{from_str_with_options, IniOptions};
use std::error::Error;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into()))
        .init();

    let text = "\
# Build settings
# shared by all targets
[build]
jobs = 8 # leave one core free
target = release

# this note belongs to nothing
[test]
# dropped: a parameter follows
threads = 2
";

    let doc = from_str_with_options(text, &IniOptions::hash_comments())?;

    for section in doc.sections() {
        for comment in doc.leading_comments(section) {
            println!("# {comment}");
        }
        println!("[{section}]");
        if let Some(params) = doc.section(section) {
            for (param, value) in params.iter() {
                match doc.parameter_comment(section, param) {
                    Some(comment) => println!("{param} = {value}    <- {comment}"),
                    None => println!("{param} = {value}"),
                }
            }
        }
        println!();
    }

    Ok(())
}
