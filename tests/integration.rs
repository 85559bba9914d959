use std::path::PathBuf;
use std::process::Command;

use themer::cli::ThemeMode;
use themer::color::Color;
use themer::error::ThemeError;
use themer::pipeline::contrast::{ensure_contrast, DEFAULT_MIN_CONTRAST};
use themer::pipeline::entropy::SystemEntropy;
use themer::pipeline::mapping::{ColorMapping, Role};
use themer::pipeline::scheme::Scheme;
use themer::pipeline::{generate, generate_color_scheme, generate_color_scheme_with_variant};
use themer::theme::AlacrittyTheme;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn run_pipeline(scheme: Scheme, mode: Option<ThemeMode>, seed: u64) -> String {
    let colors = generate(scheme, mode, &mut SystemEntropy::seeded(seed));
    AlacrittyTheme::new("test", scheme, colors)
        .serialize()
        .unwrap()
}

/// Validate the structural correctness of a serialized theme.
fn validate_theme_structure(output: &str) {
    let lines: Vec<&str> = output.lines().collect();
    assert_eq!(
        lines.len(),
        36,
        "theme should have exactly 36 lines, got {}",
        lines.len()
    );

    // Header comments
    for line in &lines[..4] {
        assert!(line.starts_with("# "), "expected comment, got '{line}'");
    }

    let sections: Vec<&str> = lines
        .iter()
        .copied()
        .filter(|l| l.starts_with('['))
        .collect();
    assert_eq!(
        sections,
        [
            "[colors.primary]",
            "[colors.cursor]",
            "[colors.selection]",
            "[colors.normal]",
            "[colors.bright]",
        ]
    );

    // Every assignment is a quoted lowercase hex color
    let entry = regex::Regex::new(r##"^[a-z]+ = "#[0-9a-f]{6}"$"##).unwrap();
    let entries = lines
        .iter()
        .filter(|l| !l.is_empty() && !l.starts_with('#') && !l.starts_with('['));
    let mut count = 0;
    for line in entries {
        assert!(entry.is_match(line), "malformed entry: '{line}'");
        count += 1;
    }
    assert_eq!(count, 22);
}

fn lightness(c: Color) -> f64 {
    c.to_hsl().l
}

// ---------------------------------------------------------------------------
// Generation
// ---------------------------------------------------------------------------

#[test]
fn every_scheme_fills_all_roles() {
    for scheme in Scheme::ALL {
        for seed in 0..8 {
            let colors = generate(scheme, None, &mut SystemEntropy::seeded(seed));
            assert_eq!(colors.len(), 19, "{scheme} seed {seed}");
            assert_eq!(colors.missing(), None, "{scheme} seed {seed}");
        }
    }
}

#[test]
fn every_scheme_serializes_to_valid_theme() {
    for scheme in Scheme::ALL {
        validate_theme_structure(&run_pipeline(scheme, None, 42));
        validate_theme_structure(&run_pipeline(scheme, Some(ThemeMode::Dark), 42));
        validate_theme_structure(&run_pipeline(scheme, Some(ThemeMode::Light), 42));
    }
}

#[test]
fn repeated_calls_share_key_set() {
    for scheme in ["random", "pastel", "nord", "gruvbox"] {
        let a = generate_color_scheme(scheme).unwrap();
        let b = generate_color_scheme(scheme).unwrap();
        let keys_a: Vec<&str> = a.to_hex_map().into_keys().collect();
        let keys_b: Vec<&str> = b.to_hex_map().into_keys().collect();
        assert_eq!(keys_a, keys_b);
    }
}

#[test]
fn neon_backdrop_is_fixed() {
    for _ in 0..5 {
        let colors = generate_color_scheme("neon").unwrap();
        assert_eq!(colors.hex(Role::Background).as_deref(), Some("#0a0a0a"));
        assert_eq!(colors.hex(Role::Foreground).as_deref(), Some("#00ff00"));
        assert_eq!(colors.hex(Role::SelectionBackground).as_deref(), Some("#333333"));
    }
}

#[test]
fn dracula_stays_near_reference_background() {
    let reference = Color::from_hex("#282a36").unwrap();
    for seed in 0..20 {
        let colors = generate(Scheme::Dracula, None, &mut SystemEntropy::seeded(seed));
        let bg = colors.get(Role::Background).unwrap();
        for (got, want) in [(bg.r, reference.r), (bg.g, reference.g), (bg.b, reference.b)] {
            assert!(
                (i32::from(got) - i32::from(want)).abs() <= 40,
                "seed {seed}: {bg} drifted from {reference}"
            );
        }
    }
}

#[test]
fn bright_colors_are_not_darker() {
    for scheme in Scheme::ALL {
        for seed in 0..10 {
            let colors = generate(scheme, None, &mut SystemEntropy::seeded(seed));
            for (normal, bright) in Role::NORMAL.into_iter().zip(Role::BRIGHT) {
                // Pastel's literal black and white pairs step down on purpose.
                if scheme == Scheme::Pastel && matches!(normal, Role::Black | Role::White) {
                    continue;
                }
                let n = lightness(colors.get(normal).unwrap());
                let b = lightness(colors.get(bright).unwrap());
                assert!(
                    b + 0.01 >= n,
                    "{scheme} seed {seed}: {bright} ({b:.3}) darker than {normal} ({n:.3})"
                );
            }
        }
    }
}

#[test]
fn unknown_scheme_is_an_error() {
    let err = generate_color_scheme("invalid").unwrap_err();
    assert!(matches!(err, ThemeError::UnknownScheme(ref s) if s == "invalid"));
}

#[test]
fn monochrome_alias_is_accepted() {
    let colors = generate_color_scheme("monochrome").unwrap();
    assert!(colors.is_complete());
}

#[test]
fn no_variant_leaves_scheme_untouched() {
    let plain = generate(Scheme::Nord, None, &mut SystemEntropy::seeded(3));
    let again = generate(Scheme::Nord, None, &mut SystemEntropy::seeded(3));
    assert_eq!(plain, again);

    let unflagged = generate_color_scheme_with_variant("nord", false, false).unwrap();
    assert!(unflagged.is_complete());
    assert_ne!(unflagged.hex(Role::Foreground).as_deref(), Some("#e5e5e5"));
}

#[test]
fn dark_variant_sets_light_foreground_and_darker_background() {
    for scheme in Scheme::ALL {
        let base = generate(scheme, None, &mut SystemEntropy::seeded(11));
        let dark = generate(scheme, Some(ThemeMode::Dark), &mut SystemEntropy::seeded(11));

        assert_eq!(dark.hex(Role::Foreground).as_deref(), Some("#e5e5e5"));
        let before = base.get(Role::Background).unwrap();
        let after = dark.get(Role::Background).unwrap();
        assert!(after.relative_luminance() <= before.relative_luminance());
        assert_eq!(dark.get(Role::Red), base.get(Role::Red));
    }
}

#[test]
fn light_variant_sets_dark_foreground() {
    let colors = generate_color_scheme_with_variant("cool", false, true).unwrap();
    assert_eq!(colors.hex(Role::Foreground).as_deref(), Some("#2a2a2a"));
}

#[test]
fn both_variant_flags_prefer_dark() {
    let colors = generate_color_scheme_with_variant("warm", true, true).unwrap();
    assert_eq!(colors.hex(Role::Foreground).as_deref(), Some("#e5e5e5"));
}

#[test]
fn contrast_fix_converges_on_black() {
    let bg = Color::new(0, 0, 0);
    let fixed = ensure_contrast(Color::new(0x22, 0x11, 0x11), bg, DEFAULT_MIN_CONTRAST);
    assert!(Color::contrast_ratio(&fixed, &bg) >= DEFAULT_MIN_CONTRAST);
}

#[test]
fn incomplete_mapping_cannot_be_serialized() {
    let colors: ColorMapping = Role::ALL
        .into_iter()
        .filter(|r| *r != Role::BrightBlue)
        .map(|r| (r, Color::new(1, 2, 3)))
        .collect();

    let err = AlacrittyTheme::new("t", Scheme::Nord, colors)
        .serialize()
        .unwrap_err();
    assert!(matches!(err, ThemeError::MissingRole(Role::BrightBlue)));
}

// ---------------------------------------------------------------------------
// Property tests
// ---------------------------------------------------------------------------

mod property_tests {
    use super::*;
    use proptest::prelude::*;

    fn arb_color() -> impl Strategy<Value = Color> {
        proptest::array::uniform3(0u8..=255u8).prop_map(|[r, g, b]| Color::new(r, g, b))
    }

    proptest! {
        #[test]
        fn hsl_round_trip_within_one_step(c in arb_color()) {
            let back = c.to_hsl().to_color();
            for (a, b) in [(c.r, back.r), (c.g, back.g), (c.b, back.b)] {
                prop_assert!((i32::from(a) - i32::from(b)).abs() <= 1, "{} -> {}", c, back);
            }
        }

        #[test]
        fn hex_parse_accepts_formatted_output(r in 0u8..=255, g in 0u8..=255, b in 0u8..=255) {
            let lower = format!("#{:02x}{:02x}{:02x}", r, g, b);
            let upper = lower.to_uppercase();
            prop_assert_eq!(Color::from_hex(&lower).unwrap(), Color::new(r, g, b));
            prop_assert_eq!(Color::from_hex(&upper).unwrap(), Color::new(r, g, b));
            prop_assert_eq!(Color::new(r, g, b).to_hex(), lower);
        }

        #[test]
        fn malformed_hex_is_rejected(s in "[0-9a-fA-F]{0,5}|#[0-9a-f]{1,5}|#[g-z]{6}|[0-9a-f]{7}") {
            let err = Color::from_hex(&s).unwrap_err();
            prop_assert!(matches!(err, ThemeError::InvalidHexFormat(_)));
        }

        #[test]
        fn hsl_matches_palette(c in arb_color()) {
            use palette::{FromColor, Srgb};

            let ours = c.to_hsl();
            let srgb = Srgb::new(c.r, c.g, c.b).into_format::<f64>();
            let theirs: palette::Hsl<palette::encoding::Srgb, f64> = palette::Hsl::from_color(srgb);

            prop_assert!((ours.l - theirs.lightness).abs() < 1e-6);
            prop_assert!((ours.s - theirs.saturation).abs() < 1e-6);
            if ours.s > 0.0 {
                let delta = (ours.h * 360.0 - theirs.hue.into_positive_degrees()).rem_euclid(360.0);
                prop_assert!(delta < 1e-6 || delta > 360.0 - 1e-6, "hue delta {}", delta);
            }
        }

        #[test]
        fn contrast_ratio_is_bounded(a in arb_color(), b in arb_color()) {
            let ratio = Color::contrast_ratio(&a, &b);
            prop_assert!((1.0..=21.0 + 1e-9).contains(&ratio));
            prop_assert!((ratio - Color::contrast_ratio(&b, &a)).abs() < 1e-12);
        }

        #[test]
        fn contrast_always_reached_on_black(fg in arb_color()) {
            let bg = Color::new(0, 0, 0);
            let fixed = ensure_contrast(fg, bg, DEFAULT_MIN_CONTRAST);
            prop_assert!(Color::contrast_ratio(&fixed, &bg) >= DEFAULT_MIN_CONTRAST);
        }

        #[test]
        fn contrast_result_passes_or_is_original(fg in arb_color(), bg in arb_color()) {
            let fixed = ensure_contrast(fg, bg, DEFAULT_MIN_CONTRAST);
            prop_assert!(
                fixed == fg || Color::contrast_ratio(&fixed, &bg) >= DEFAULT_MIN_CONTRAST
            );
        }

        #[test]
        fn seeded_themes_are_well_formed(seed in any::<u64>(), idx in 0usize..12) {
            let scheme = Scheme::ALL[idx];
            let output = run_pipeline(scheme, None, seed);
            let hex_re = regex::Regex::new(r##""#[0-9a-f]{6}""##).unwrap();
            prop_assert_eq!(hex_re.find_iter(&output).count(), 22);
        }
    }
}

// ---------------------------------------------------------------------------
// CLI integration tests (run the actual binary)
// ---------------------------------------------------------------------------

fn cli() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_alacritty-themer"));
    cmd.env_remove("RUST_LOG").env_remove("ALACRITTY_THEMES_DIR");
    cmd
}

fn scratch_dir(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("alacritty-themer-cli-{name}"));
    let _ = std::fs::remove_dir_all(&dir);
    std::fs::create_dir_all(&dir).unwrap();
    dir
}

#[test]
fn cli_stdout_produces_valid_theme() {
    let output = cli()
        .args(["--scheme", "neon", "--seed", "1"])
        .output()
        .expect("failed to run binary");

    assert!(output.status.success(), "binary exited with error");
    let stdout = String::from_utf8_lossy(&output.stdout);
    validate_theme_structure(&stdout);
    assert!(stdout.contains("background = \"#0a0a0a\""));
    assert!(stdout.contains("# Scheme: neon"));
}

#[test]
fn cli_random_name_carries_scheme_and_variant() {
    let output = cli()
        .args(["-s", "nord", "--dark", "--seed", "9"])
        .output()
        .expect("failed to run binary");
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    let first = stdout.lines().next().unwrap();
    let re = regex::Regex::new(r"^# nord_dark_[a-z]+_[a-z]+$").unwrap();
    assert!(re.is_match(first), "unexpected name line: '{first}'");
    assert!(stdout.contains("foreground = \"#e5e5e5\""));
}

#[test]
fn cli_seed_is_reproducible() {
    let run = || {
        let output = cli()
            .args(["-s", "random", "--seed", "1234"])
            .output()
            .expect("failed to run binary");
        String::from_utf8_lossy(&output.stdout)
            .lines()
            .filter(|l| !l.starts_with("# Generated at:"))
            .map(str::to_string)
            .collect::<Vec<_>>()
    };
    assert_eq!(run(), run());
}

#[test]
fn cli_explicit_name_is_used() {
    let output = cli()
        .args(["-s", "gruvbox", "-n", "my_theme"])
        .output()
        .expect("failed to run binary");
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.starts_with("# my_theme\n# Generated theme: my_theme\n"));
}

#[test]
fn cli_output_flag_writes_file() {
    let dir = scratch_dir("output");
    let path = dir.join("out.toml");

    let output = cli()
        .args(["-s", "solarized", "-o", path.to_str().unwrap()])
        .output()
        .expect("failed to run binary");

    assert!(output.status.success());
    assert!(output.stdout.is_empty(), "stdout should be empty with -o");
    let content = std::fs::read_to_string(&path).unwrap();
    validate_theme_structure(&content);

    std::fs::remove_dir_all(&dir).unwrap();
}

#[test]
fn cli_install_writes_named_file() {
    let dir = scratch_dir("install");
    let themes = dir.join("themes");

    let output = cli()
        .args(["-s", "cool", "-n", "arctic", "--install", "--themes-dir"])
        .arg(&themes)
        .output()
        .expect("failed to run binary");

    assert!(output.status.success());
    let path = themes.join("arctic.toml");
    assert!(path.exists(), "theme not installed at {}", path.display());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("arctic.toml"));

    std::fs::remove_dir_all(&dir).unwrap();
}

#[test]
fn cli_list_schemes() {
    let output = cli()
        .arg("--list-schemes")
        .output()
        .expect("failed to run binary");
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    let names: Vec<&str> = stdout.lines().collect();
    assert_eq!(names.len(), 12);
    assert_eq!(names[0], "random");
    assert!(names.contains(&"cyberpunk"));
}

#[test]
fn cli_preview_goes_to_stderr() {
    let output = cli()
        .args(["-s", "pastel", "--preview"])
        .output()
        .expect("failed to run binary");
    assert!(output.status.success());

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Normal"));
    assert!(stderr.contains("Bright"));
    validate_theme_structure(&String::from_utf8_lossy(&output.stdout));
}

#[test]
fn cli_min_contrast_raises_foreground() {
    let output = cli()
        .args(["-s", "mono", "--seed", "5", "--min-contrast", "7"])
        .output()
        .expect("failed to run binary");
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    let value = |key: &str| {
        let primary = stdout.split("[colors.primary]\n").nth(1).unwrap();
        let line = primary
            .lines()
            .find(|l| l.starts_with(key))
            .unwrap()
            .to_string();
        let hex = line.split('"').nth(1).unwrap().to_string();
        Color::from_hex(&hex).unwrap()
    };
    let ratio = Color::contrast_ratio(&value("foreground"), &value("background"));
    assert!(ratio >= 7.0, "ratio {ratio:.2}");
}

#[test]
fn cli_unknown_scheme_error() {
    let output = cli()
        .args(["--scheme", "plaid"])
        .output()
        .expect("failed to run binary");

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("unknown color scheme: plaid"), "stderr: {stderr}");
}

#[test]
fn cli_conflicting_variants_error() {
    let output = cli()
        .args(["--dark", "--light"])
        .output()
        .expect("failed to run binary");
    assert!(!output.status.success());
}

#[test]
fn cli_help_output() {
    let output = cli().arg("--help").output().expect("failed to run binary");
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    for flag in ["--scheme", "--dark", "--light", "--install", "--preview", "--seed"] {
        assert!(stdout.contains(flag), "help missing {flag}");
    }
}
