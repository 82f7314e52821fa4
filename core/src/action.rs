//! Free-text action codes. Acknowledgment only: nothing here touches state.

pub const INVALID_ACTION: &str = "Invalid action. Try again.";

/// Map a single-character action code (case-insensitive) to its
/// acknowledgment. Anything else, including longer input, is invalid.
pub fn respond(input: &str) -> &'static str {
    match input.to_lowercase().as_str() {
        "p" => "You placed a new tile.",
        "z" => "You zoned a new area.",
        "s" => "You specialized your city.",
        "r" => "You conducted research.",
        "c" => "You customized your city.",
        "q" => "Quitting the game. Goodbye!",
        _   => INVALID_ACTION,
    }
}
