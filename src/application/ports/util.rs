// src/application/ports/util.rs

/// Turns a headline into URL text. Uniqueness is not this port's job; the
/// slug service probes and suffixes on top of whatever comes back.
pub trait SlugGenerator: Send + Sync {
    fn slugify(&self, input: &str) -> String;
}
