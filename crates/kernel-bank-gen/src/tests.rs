use crate::logging::env_filter;
use tracing::level_filters::LevelFilter;

#[test]
fn unset_log_env_falls_back_to_warn() {
    assert_eq!(env_filter(None).max_level_hint(), Some(LevelFilter::WARN));
    assert_eq!(env_filter(Some("  ")).max_level_hint(), Some(LevelFilter::WARN));
}

#[test]
fn log_env_directives_override_default() {
    assert_eq!(env_filter(Some("debug")).max_level_hint(), Some(LevelFilter::DEBUG));
    assert_eq!(
        env_filter(Some("kernel_bank=trace")).max_level_hint(),
        Some(LevelFilter::TRACE)
    );
}
