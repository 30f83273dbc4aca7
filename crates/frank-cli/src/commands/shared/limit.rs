use crate::cli::GlobalFlags;
use crate::context::AppContext;

/// Compute effective limit with precedence: global flag -> configured default.
#[must_use]
pub fn effective_limit(global: Option<u32>, configured: u32) -> usize {
    usize::try_from(global.unwrap_or(configured)).unwrap_or(usize::MAX)
}

/// Truncate a fetched list to the effective limit.
pub fn apply_limit<T>(mut items: Vec<T>, ctx: &AppContext, flags: &GlobalFlags) -> Vec<T> {
    items.truncate(effective_limit(flags.limit, ctx.config.general.default_limit));
    items
}
