//! Helper class for testing.

use crate::{CodeLocation, CodeLocationStack, Result};
use pretty_assertions::assert_eq;
use std::collections::HashMap;

// Test is up here to avoid the line number moving around.
#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn tag_location() {
        let mut fix = Fixture::default();
        fix.tag_location("tag", CodeLocation::here());
        assert_eq!(
            *fix.get_location("tag"),
            CodeLocation::new("src/test.rs", 16)
        );
    }
}

#[allow(dead_code)]
#[derive(Default)]
pub struct Fixture {
    code_locations: HashMap<&'static str, CodeLocation>,
}

#[allow(dead_code)]
impl Fixture {
    pub fn tag_location(&mut self, tag: &'static str, loc: CodeLocation) {
        self.code_locations.insert(tag, loc);
    }

    pub fn get_location(&self, tag: &'static str) -> &CodeLocation {
        self.code_locations.get(tag).unwrap()
    }

    pub fn stack_for_tags(&self, tags: &[&'static str]) -> CodeLocationStack {
        CodeLocationStack(tags.iter().map(|t| *self.get_location(t)).collect())
    }

    pub fn assert_stack_matches_tags(&self, stack: &CodeLocationStack, tags: &[&'static str]) {
        assert_eq!(stack, &self.stack_for_tags(tags));
    }

    /// Asserts that `message` is `raw` followed by one trailer line per tag.
    pub fn assert_message_has_trail(&self, message: &str, raw: &str, tags: &[&'static str]) {
        let expected = format!("{}{}", raw, self.stack_for_tags(tags));
        assert_eq!(message, expected);
    }

    pub fn assert_result_has_trail<T>(
        &self,
        result: Result<T, String>,
        raw: &str,
        tags: &[&'static str],
    ) {
        let message = result.into_error().unwrap();
        self.assert_message_has_trail(&message, raw, tags);
    }
}
