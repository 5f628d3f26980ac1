//! Free-text question engine.
//!
//! A question goes through three steps:
//!
//! 1. **Intent** (`intent`): ordered keyword rules decide what is asked.
//! 2. **Extraction** (`extract`): the first catalogue name found as whole
//!    tokens in the text, or else the last alphabetic word as a candidate for
//!    fuzzy suggestions.
//! 3. **Dispatch** (`engine`): the catalogue and formatter build the answer,
//!    with "Did you mean" and help fallbacks when nothing resolves.

mod engine;
mod extract;
mod intent;


pub use engine::{
    QueryEngine, EMPTY_QUESTION_MESSAGE, MISSING_NAME_MESSAGE, UNKNOWN_QUESTION_MESSAGE,
};
pub use extract::{candidate_token, extract_planet_name};
pub use intent::{detect_intent, Intent, IntentRule, INTENT_RULES};
