//! Resolves the syntactic unit around an offset: bracket pairs, quoted
//! strings, identifiers and the enclosing call's argument list.

mod bracket;
mod call_context;
mod partition;
mod quote;
mod selector;
mod session;
mod tokenizer;
mod word;

pub use bracket::{match_pair, select_bracket_content, BRACKET_PAIRS};
pub use call_context::{find_enclosing_call_paren, CallContextLocator, CALL_CONTEXT_LOOKBACK};
pub use partition::{Partition, PartitionKind, Partitions};
pub use quote::{match_quoted, QUOTE_CHARS};
pub use selector::{DoubleClickSelector, Matcher};
pub use session::ScanSession;
pub use tokenizer::{HeuristicScanner, Keyword, TokenKind, Tokenizer};
pub use word::select_word;

use unicode_xid::UnicodeXID;

/// Chars that may continue an identifier. `$` counts, as in languages that
/// allow it in names.
pub fn is_identifier_char(c: char) -> bool {
    c == '_' || c == '$' || c.is_xid_continue()
}

pub fn is_identifier_start(c: char) -> bool {
    c == '_' || c == '$' || c.is_xid_start()
}
