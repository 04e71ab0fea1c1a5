//! Session configuration

use crate::types::RenderOptions;

/// Options fixed for the lifetime of one session.
#[derive(Debug, Clone)]
pub struct SessionConfig {
    /// Options for every type rendering done by the session
    pub render: RenderOptions,
    /// Cache the declared-member list on class adapters (recomputed per call otherwise)
    pub memoize_members: bool,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            render: RenderOptions::default(),
            memoize_members: true,
        }
    }
}

impl SessionConfig {
    pub fn with_render(mut self, render: RenderOptions) -> Self {
        self.render = render;
        self
    }

    pub fn with_memoize_members(mut self, memoize: bool) -> Self {
        self.memoize_members = memoize;
        self
    }
}
