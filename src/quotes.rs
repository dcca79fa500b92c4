//! Random Quote Selection
//!
//! Fixed three-quote list; one is picked uniformly on each roll.

/// The quotes shown on the page, in a fixed order.
pub const QUOTES: [&str; 3] = [
    "I still don't know what it really means to grow up. However, if I happen \
     to meet you, one day in the future, by then, I want to become someone you \
     can be proud to know.",
    "I probably just want to leave a trace of myself behind in this world.",
    "It must really be a lonelier journey than anyone could imagine. Cutting \
     through absolute darkness, encountering nothing but the occasional \
     hydrogen atom. Flying blindly into the abyss, believing therein lie the \
     answers to the mysteries of the universe.",
];

/// Pick a quote uniformly at random.
pub fn random_quote() -> &'static str {
    quote_at(js_sys::Math::random())
}

/// Map a roll in `[0, 1)` onto the quote list via `floor(roll * len)`.
fn quote_at(roll: f64) -> &'static str {
    QUOTES[(roll * QUOTES.len() as f64).floor() as usize]
}
