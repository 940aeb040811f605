use std::{collections::HashSet, sync::LazyLock};

///
/// RESERVED_ACCESSORS
/// method names the derive already emits on the host type
///

static RESERVED_ACCESSORS: LazyLock<HashSet<&'static str>> =
    LazyLock::new(|| ["bindings", "binding_keys"].into_iter().collect());

///
/// RESERVED_WORDS
/// rust keywords that cannot be used as generated accessor names
///

static RESERVED_WORDS: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    // https://doc.rust-lang.org/reference/keywords.html
    [
        "as", "break", "const", "continue", "crate", "else", "enum", "extern", "false", "fn",
        "for", "gen", "if", "impl", "in", "let", "loop", "match", "mod", "move", "mut", "pub",
        "ref", "return", "self", "static", "struct", "super", "trait", "true", "type", "unsafe",
        "use", "where", "while", "async", "await", "dyn", "abstract", "become", "box", "do",
        "final", "macro", "override", "priv", "typeof", "unsized", "virtual", "yield", "try",
    ]
    .into_iter()
    .collect()
});

/// Check if a generated accessor name would clash with derive output.
pub fn is_reserved_accessor(name: &str) -> bool {
    RESERVED_ACCESSORS.contains(name)
}

/// Check if an identifier is a reserved word.
pub fn is_reserved_word(word: &str) -> bool {
    RESERVED_WORDS.contains(word)
}
