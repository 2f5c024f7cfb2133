//! Raw console prompting.
//!
//! Prompts print to stdout and read one line from stdin. Numeric prompts
//! re-ask until the line parses; end of input surfaces as an
//! `UnexpectedEof` error so the menu loop can wind down instead of
//! spinning.

use crate::validation::{
    capitalize_first_letter, is_valid_email, is_valid_name, is_valid_password,
};
use std::io::{self, Write};
use std::str::FromStr;

/// Prints `prompt` and reads one line, without the trailing newline.
pub fn read_line(prompt: &str) -> io::Result<String> {
    print!("{prompt}");
    io::stdout().flush()?;
    let mut buf = String::new();
    let n = io::stdin().read_line(&mut buf)?;
    if n == 0 {
        return Err(io::Error::new(io::ErrorKind::UnexpectedEof, "stdin closed"));
    }
    Ok(buf.trim_end_matches(['\r', '\n']).to_string())
}

/// Prints `prompt` and reads lines until one parses as a number.
pub fn read_number<T: FromStr>(prompt: &str) -> io::Result<T> {
    loop {
        let line = read_line(prompt)?;
        match line.trim().parse::<T>() {
            Ok(value) => return Ok(value),
            Err(_) => println!("Invalid number, please try again"),
        }
    }
}

/// Prompts until the entered name passes validation; the result has its
/// first letter capitalized.
pub fn prompt_valid_name() -> io::Result<String> {
    loop {
        let name =
            capitalize_first_letter(&read_line("Enter your full name (minimum 2 characters): ")?);
        if is_valid_name(&name) {
            return Ok(name);
        }
        println!("Invalid name");
    }
}

/// Prompts until the entered email passes validation.
pub fn prompt_valid_email() -> io::Result<String> {
    loop {
        let email = read_line("Enter your email (e.g. user@example.com): ")?;
        if is_valid_email(&email) {
            return Ok(email);
        }
        println!("Invalid email");
    }
}

/// Prompts until the entered password passes validation.
pub fn prompt_valid_password() -> io::Result<String> {
    loop {
        let password = read_line("Enter your password (minimum 8 characters): ")?;
        if is_valid_password(&password) {
            return Ok(password);
        }
        println!("Invalid password");
    }
}
