// src/infrastructure/util.rs
use crate::application::ports::util::SlugGenerator;

// Leaves headroom under a 250-char column-width convention for the
// collision suffixes the slug service appends.
const MAX_SLUG_LEN: usize = 240;

#[derive(Default, Clone)]
pub struct DefaultSlugGenerator;

impl SlugGenerator for DefaultSlugGenerator {
    fn slugify(&self, input: &str) -> String {
        let mut out = slug::slugify(input);
        if out.len() > MAX_SLUG_LEN {
            out.truncate(MAX_SLUG_LEN);
            while out.ends_with('-') {
                out.pop();
            }
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slugs_are_lowercased_and_hyphenated() {
        let generator = DefaultSlugGenerator;
        assert_eq!(
            generator.slugify("Harbour Expansion Wins Approval!"),
            "harbour-expansion-wins-approval"
        );
    }

    #[test]
    fn overlong_headlines_are_cut_without_a_trailing_hyphen() {
        let generator = DefaultSlugGenerator;
        let slug = generator.slugify(&"word ".repeat(100));
        assert!(slug.len() <= MAX_SLUG_LEN);
        assert!(!slug.ends_with('-'));
    }
}
