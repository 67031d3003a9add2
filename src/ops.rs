//! The reference target program: the utility operations submissions are
//! graded against, plus the demonstration routine with its fixed output.

/// Integer arithmetic operations.
#[derive(Debug, Default)]
pub struct MathOperations;

impl MathOperations {
    pub fn add(&self, a: i64, b: i64) -> i64 {
        a + b
    }

    pub fn multiply(&self, a: i64, b: i64) -> i64 {
        a * b
    }
}

/// Text operations.
#[derive(Debug, Default)]
pub struct StringOperations;

impl StringOperations {
    pub fn concatenate(&self, a: &str, b: &str) -> String {
        format!("{}{}", a, b)
    }

    /// Length in characters, so concatenation length stays additive for
    /// non-ASCII input.
    pub fn get_length(&self, s: &str) -> usize {
        s.chars().count()
    }
}

/// The demonstration output, one entry per line, in fixed order.
pub fn demo_lines() -> Vec<String> {
    let math = MathOperations;
    let strings = StringOperations;

    vec![
        format!("Addition of 5 and 3: {}", math.add(5, 3)),
        format!("Multiplication of 5 and 3: {}", math.multiply(5, 3)),
        format!(
            "Concatenation of 'Hello' and 'World': {}",
            strings.concatenate("Hello", "World")
        ),
        format!("Length of 'Hello': {}", strings.get_length("Hello")),
    ]
}

/// Print the demonstration output.
pub fn run_demo() {
    for line in demo_lines() {
        println!("{}", line);
    }
}
