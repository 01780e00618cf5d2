use broadside::{env_level, init_logging, LOG_ENV};
use log::LevelFilter;

#[test]
fn test_level_selection() {
    std::env::set_var(LOG_ENV, "debug");
    assert_eq!(env_level(), LevelFilter::Debug);

    std::env::set_var(LOG_ENV, "loud");
    assert_eq!(env_level(), LevelFilter::Warn);

    std::env::remove_var(LOG_ENV);
    assert_eq!(env_level(), LevelFilter::Warn);

    init_logging(Some(LevelFilter::Info));
    assert_eq!(log::max_level(), LevelFilter::Info);
    init_logging(Some(LevelFilter::Error));
    assert_eq!(log::max_level(), LevelFilter::Error);
}
