use std::io::{self, Write};

pub fn get_input_with_default(prompt: &str, default_value: &str) -> String {
    print!("{} [default: {}]: ", prompt, default_value);
    io::stdout().flush().expect("Failed to flush stdout");

    let mut input = String::new();
    io::stdin()
        .read_line(&mut input)
        .expect("Failed to read input line");

    let trimmed_input = input.trim();
    if trimmed_input.is_empty() {
        default_value.to_string()
    } else {
        trimmed_input.to_string()
    }
}

pub fn get_required_input(prompt: &str) -> String {
    loop {
        print!("{}: ", prompt);
        io::stdout().flush().expect("Failed to flush stdout");

        let mut input = String::new();
        io::stdin()
            .read_line(&mut input)
            .expect("Failed to read input line");

        let trimmed_input = input.trim();
        if !trimmed_input.is_empty() {
            return trimmed_input.to_string();
        }
    }
}
