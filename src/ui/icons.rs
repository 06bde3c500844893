pub struct Icons;

impl Icons {
    pub const ROCKET: &str = "🚀";
    pub const CHECK: &str = "✅";
    pub const CROSS: &str = "❌";
    pub const THINK: &str = "🤔";
    pub const EMPTY: &str = "😕";
    pub const STATS: &str = "📊";
    pub const LOCK: &str = "🔒";
    pub const WAVE: &str = "👋";
}
