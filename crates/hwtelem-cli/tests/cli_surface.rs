//! Parser and rendering behavior visible to users of the binary.

use chrono::{TimeZone, Utc};
use clap::Parser;
use hwtelem_cli::presentation::{envelope, render_section};
use hwtelem_cli::{Cli, CliConfig, Commands};
use hwtelem_core::{NOT_AVAILABLE, Reading, Section, SectionReading, Settings};

#[test]
fn test_every_subcommand_parses() {
    for args in [
        vec!["hwtelem", "get", "cpu"],
        vec!["hwtelem", "get", "Storage", "--json"],
        vec!["hwtelem", "all"],
        vec!["hwtelem", "all", "--json"],
        vec!["hwtelem", "sections"],
        vec!["hwtelem", "config"],
    ] {
        assert!(Cli::try_parse_from(args.iter().copied()).is_ok(), "{args:?}");
    }
}

#[test]
fn test_get_requires_a_section() {
    assert!(Cli::try_parse_from(["hwtelem", "get"]).is_err());
}

#[test]
fn test_global_flags_after_subcommand() {
    let cli = Cli::parse_from(["hwtelem", "get", "gpu", "-v", "--timeout-secs", "2"]);
    assert!(cli.verbose);
    assert_eq!(cli.timeout_secs, Some(2));
    assert!(matches!(cli.command, Some(Commands::Get { .. })));
}

#[test]
fn test_gpu_sentinels_render_both_ways() {
    let reading = SectionReading::Metrics(
        Reading::new()
            .with("Temperature", NOT_AVAILABLE)
            .with("Utilisation", NOT_AVAILABLE),
    );

    let text = render_section(Section::Gpu, &reading);
    assert_eq!(text.matches(NOT_AVAILABLE).count(), 2);

    let sampled_at = Utc.with_ymd_and_hms(2026, 1, 2, 3, 4, 5).unwrap();
    let json = envelope(Section::Gpu, sampled_at, &reading);
    assert_eq!(json["section"], "gpu");
    assert_eq!(json["data"]["Utilisation"], NOT_AVAILABLE);
}

#[test]
fn test_config_rejects_bad_window() {
    let settings = Settings {
        cpu_sample_ms: Some(60_000),
        ..Settings::default()
    };
    let err = CliConfig::new(settings, None).unwrap_err();
    assert_eq!(err.exit_code(), 78);
}
