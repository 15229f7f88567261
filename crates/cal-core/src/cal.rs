//! CAL (Comprehensive Aramaic Lexicon) ASCII transcription.

/// CAL consonants in Aramaic alphabet order.
pub const CONSONANTS: [&str; 22] = [
    ")", "b", "g", "d", "h", "w", "z", "x", "T", "y", "k", "l", "m", "n", "s", "(", "p", "c",
    "q", "r", "$", "t",
];
