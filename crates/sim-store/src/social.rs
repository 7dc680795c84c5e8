use serde::Serialize;

/// Social feed, oldest post first.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct SocialDomain {
    handle: String,
    feed: Vec<String>,
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct UserProfile {
    pub handle: String,
    pub post_count: usize,
}

impl SocialDomain {
    pub fn new(handle: impl Into<String>) -> Self {
        Self {
            handle: handle.into(),
            feed: Vec::new(),
        }
    }

    pub fn post(&mut self, text: impl Into<String>) {
        self.feed.push(text.into());
    }

    pub fn feed(&self) -> &[String] {
        &self.feed
    }

    pub fn profile(&self) -> UserProfile {
        UserProfile {
            handle: self.handle.clone(),
            post_count: self.feed.len(),
        }
    }
}
