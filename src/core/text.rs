use std::io::{self, Write};

pub fn greeting(name: &str) -> String {
    format!("你好, {}!", name)
}

pub fn print_greeting<W: Write>(out: &mut W, name: &str, indent: usize) -> io::Result<()> {
    writeln!(out, "{:indent$}{}", "", greeting(name), indent = indent)
}

/// Length in Unicode scalar values, not bytes.
pub fn string_length(s: &str) -> usize {
    s.chars().count()
}
