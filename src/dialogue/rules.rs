//! The server's reply rules.
//!
//! Evaluated in order: exact phrases first, then any-keyword substring
//! rules, then the question-mark rule, then the generic echo. Matching is
//! case-insensitive on the trimmed message; the echo and question replies
//! carry the message's sequence number on the connection.

/// Ordered reply rule table.
pub struct ReplyRules {
    exact: Vec<(&'static str, &'static str)>,
    contains: Vec<(&'static [&'static str], &'static str)>,
}

impl Default for ReplyRules {
    fn default() -> Self {
        Self {
            exact: vec![("i am client", "I am Server")],
            contains: vec![
                (&["hello", "hi"][..], "Hello! Nice to hear from you."),
                (&["nice to meet you"][..], "Nice to meet you too!"),
                (
                    &["how are you"][..],
                    "I am functioning optimally. Thank you for asking!",
                ),
                (&["bye", "goodbye"][..], "Goodbye! Thanks for connecting."),
                (
                    &["help"][..],
                    "I am a simple SOA server. I respond to your messages!",
                ),
            ],
        }
    }
}

impl ReplyRules {
    pub fn new() -> Self {
        Self::default()
    }

    /// Decide the reply to `message`, the `count`-th message on this
    /// connection (1-based).
    pub fn reply(&self, message: &str, count: u64) -> String {
        let normalized = message.trim().to_lowercase();

        for (phrase, reply) in &self.exact {
            if normalized == *phrase {
                return (*reply).to_string();
            }
        }

        for (keywords, reply) in &self.contains {
            if keywords.iter().any(|keyword| normalized.contains(keyword)) {
                return (*reply).to_string();
            }
        }

        if message.contains('?') {
            return format!("That is an interesting question! (Message #{})", count);
        }

        format!("Server received: \"{}\" (Message #{})", message, count)
    }
}
