/// Prefix used for generated container identifiers.
pub const CONTAINER_PREFIX: &str = "weblayout";

/// Produces identifiers of the form `<prefix>-<n>`, with `n` starting at 1.
///
/// A factory is owned by whoever builds containers and is passed into
/// construction explicitly, so two factories never share a sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IdFactory {
    /// Identifier prefix.
    prefix: String,
    /// Number used for the next identifier.
    next: u64,
}

impl Default for IdFactory {
    fn default() -> Self {
        Self::new(CONTAINER_PREFIX)
    }
}

impl IdFactory {
    /// Construct a factory producing identifiers with the given prefix.
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            next: 1,
        }
    }

    /// Return the identifier prefix.
    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// Return the number the next identifier will carry.
    pub fn peek(&self) -> u64 {
        self.next
    }

    /// Produce the next identifier and advance the counter.
    pub fn next_id(&mut self) -> String {
        let id = format!("{}-{}", self.prefix, self.next);
        self.next += 1;
        id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sequence_starts_at_one() {
        let mut ids = IdFactory::default();
        assert_eq!(ids.peek(), 1);
        assert_eq!(ids.next_id(), "weblayout-1");
        assert_eq!(ids.next_id(), "weblayout-2");
        assert_eq!(ids.peek(), 3);
    }

    #[test]
    fn factories_are_independent() {
        let mut a = IdFactory::new("textbox");
        let mut b = IdFactory::new("textbox");
        assert_eq!(a.next_id(), "textbox-1");
        assert_eq!(a.next_id(), "textbox-2");
        assert_eq!(b.next_id(), "textbox-1");
        assert_eq!(b.prefix(), "textbox");
    }
}
