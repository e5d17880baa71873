use super::{FlatBlockMatcher, Patched, TextPatch};
use crate::config::CorsConfig;
use crate::error::PatchResult;
use regex::NoExpand;
use tracing::{debug, warn};

/// Replaces the whole CORS constant with the canonical block.
///
/// The old declaration is overwritten, not merged: custom entries are lost.
#[derive(Debug, Clone)]
pub struct CorsPatch {
    block: String,
    matcher: FlatBlockMatcher,
}

impl CorsPatch {
    pub fn new(config: &CorsConfig) -> PatchResult<Self> {
        let matcher = FlatBlockMatcher::new(&format!(
            r"const {} = \{{[^}}]+\}};",
            regex::escape(&config.const_name)
        ))?;

        Ok(Self {
            block: config.block.clone(),
            matcher,
        })
    }
}

impl TextPatch for CorsPatch {
    fn name(&self) -> &str {
        "cors"
    }

    fn patch(&self, content: &str) -> Patched {
        if !self.matcher.is_match(content) {
            return Patched::Unchanged { matched: false };
        }
        let found = self.matcher.count(content);
        if found > 1 {
            warn!("cors: {} declarations found, replacing all of them", found);
        }

        let replaced = self.matcher.replace_all(content, NoExpand(self.block.as_str()));
        debug!("cors: replaced {} declaration(s)", found);
        Patched::from_replacement(content, replaced, true)
    }
}
