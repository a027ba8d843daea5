//! Environment override tests
//!
//! These tests modify environment variables and must run sequentially:
//!
//! ```bash
//! cargo test -p cpk-infrastructure --test unit config_env -- --test-threads=1 --ignored
//! ```

use cpk_infrastructure::ConfigLoader;
use std::env;

fn set_env(key: &str, value: &str) {
    // SAFETY: Tests must run with --test-threads=1
    unsafe {
        env::set_var(key, value);
    }
}

fn remove_env(key: &str) {
    // SAFETY: Tests must run with --test-threads=1
    unsafe {
        env::remove_var(key);
    }
}

#[test]
#[ignore = "requires --test-threads=1 due to env var mutations"]
fn test_double_underscore_prefix_loaded() {
    set_env("CPKTEST__DISPATCH__MAX_CONCURRENT_RULES", "7");
    set_env("CPKTEST__LOGGING__LEVEL", "trace");

    let config = ConfigLoader::new()
        .with_env_prefix("CPKTEST")
        .with_config_path("/nonexistent/cpk.toml")
        .load()
        .expect("Should load config");

    assert_eq!(config.dispatch.max_concurrent_rules, 7);
    assert_eq!(config.logging.level, "trace");

    remove_env("CPKTEST__DISPATCH__MAX_CONCURRENT_RULES");
    remove_env("CPKTEST__LOGGING__LEVEL");
}

#[test]
#[ignore = "requires --test-threads=1 due to env var mutations"]
fn test_single_underscore_prefix_ignored() {
    set_env("CPKTEST_DISPATCH_MAX_CONCURRENT_RULES", "9");

    let config = ConfigLoader::new()
        .with_env_prefix("CPKTEST")
        .with_config_path("/nonexistent/cpk.toml")
        .load()
        .expect("Should load config");

    assert_ne!(config.dispatch.max_concurrent_rules, 9);

    remove_env("CPKTEST_DISPATCH_MAX_CONCURRENT_RULES");
}
