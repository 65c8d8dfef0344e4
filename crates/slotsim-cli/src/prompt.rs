//! Line-oriented prompts with validation and retry

use std::io::{self, BufRead, Write};

/// Print a prompt and read one trimmed line.
///
/// Returns `None` on end of input (ctrl-D or a piped stdin running dry),
/// which callers treat as a quit request.
pub fn read_line(prompt: &str) -> io::Result<Option<String>> {
    print!("{prompt}");
    io::stdout().flush()?;
    let mut line = String::new();
    if io::stdin().lock().read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

/// Prompt until the user enters a number accepted by `accept`.
///
/// Non-numeric input and rejected values print `retry_msg` and re-prompt;
/// the core engine never sees them.
pub fn read_number(
    prompt: &str,
    retry_msg: &str,
    accept: impl Fn(u64) -> bool,
) -> io::Result<Option<u64>> {
    loop {
        let Some(input) = read_line(prompt)? else {
            return Ok(None);
        };
        match input.parse::<u64>() {
            Ok(value) if accept(value) => return Ok(Some(value)),
            Ok(_) => println!("{retry_msg}"),
            Err(_) => println!("Please enter a valid number."),
        }
    }
}
