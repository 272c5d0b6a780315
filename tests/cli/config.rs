use anyhow::Result;
use insta_cmd::assert_cmd_snapshot;

use crate::CliTest;

#[test]
fn test_config_lang_dir() -> Result<()> {
    let test = CliTest::with_file(".keyauditrc.json", r#"{ "langDir": "locales" }"#)?;
    test.write_file("locales/en.json", r#"{ "a": "A" }"#)?;
    test.write_file("locales/helper.js", "Lang.get('only.in.locales')")?;
    test.write_file("app.js", "Lang.get('a')")?;

    assert_cmd_snapshot!(test.command(), @r#"
    success: true
    exit_code: 0
    ----- stdout -----
    Checking i18n keys...

    Loading dictionaries from locales
    ✓ Loaded en.json (1 key)

    Scanning source files...
    ✓ Found 1 used key in 1 file

    ============================================================
    en.json
    ============================================================
    Total keys: 1
    Used keys: 1
    Missing keys: 0
    Extra keys (unused): 0

    ✓ All used keys are present in every dictionary

    ----- stderr -----
    "#);

    Ok(())
}

#[test]
fn test_config_ignores() -> Result<()> {
    let test = CliTest::with_file(
        ".keyauditrc.json",
        r#"{ "ignores": ["dist/**", "**/*.min.js"] }"#,
    )?;
    test.write_file("lang/en.json", r#"{ "a": "A" }"#)?;
    test.write_file("src/app.js", "Lang.get('a')")?;
    test.write_file("src/app.min.js", "Lang.get('minified')")?;
    test.write_file("dist/bundle.js", "Lang.get('bundled')")?;

    assert_cmd_snapshot!(test.command(), @r#"
    success: true
    exit_code: 0
    ----- stdout -----
    Checking i18n keys...

    Loading dictionaries from lang
    ✓ Loaded en.json (1 key)

    Scanning source files...
    ✓ Found 1 used key in 1 file

    ============================================================
    en.json
    ============================================================
    Total keys: 1
    Used keys: 1
    Missing keys: 0
    Extra keys (unused): 0

    ✓ All used keys are present in every dictionary

    ----- stderr -----
    "#);

    Ok(())
}

#[test]
fn test_config_found_from_subdirectory() -> Result<()> {
    let test = CliTest::with_file(".keyauditrc.json", "{}")?;
    test.write_file("lang/en.json", r#"{ "a": "A", "b": "B" }"#)?;
    test.write_file("src/app.js", "Lang.get('a')")?;

    let mut cmd = test.command();
    cmd.current_dir(test.root().join("src"));

    assert_cmd_snapshot!(cmd, @r#"
    success: true
    exit_code: 0
    ----- stdout -----
    Checking i18n keys...

    Loading dictionaries from lang
    ✓ Loaded en.json (2 keys)

    Scanning source files...
    ✓ Found 1 used key in 1 file

    ============================================================
    en.json
    ============================================================
    Total keys: 2
    Used keys: 1
    Missing keys: 0
    Extra keys (unused): 1

    ! Extra keys (1, possibly unused):
       - "b"

    ✓ All used keys are present in every dictionary

    ----- stderr -----
    "#);

    Ok(())
}

#[test]
fn test_lang_dir_flag_overrides_config() -> Result<()> {
    let test = CliTest::with_file(".keyauditrc.json", r#"{ "langDir": "locales" }"#)?;
    test.write_file("i18n/en.json", r#"{ "a": "A" }"#)?;
    test.write_file("app.js", "Lang.get('a')")?;

    let mut cmd = test.command();
    cmd.args(["--lang-dir", "i18n"]);

    assert_cmd_snapshot!(cmd, @r#"
    success: true
    exit_code: 0
    ----- stdout -----
    Checking i18n keys...

    Loading dictionaries from i18n
    ✓ Loaded en.json (1 key)

    Scanning source files...
    ✓ Found 1 used key in 1 file

    ============================================================
    en.json
    ============================================================
    Total keys: 1
    Used keys: 1
    Missing keys: 0
    Extra keys (unused): 0

    ✓ All used keys are present in every dictionary

    ----- stderr -----
    "#);

    Ok(())
}

#[test]
fn test_invalid_config_is_an_error() -> Result<()> {
    let test = CliTest::with_file(".keyauditrc.json", r#"{ "ignores": ["[invalid"] }"#)?;

    assert_cmd_snapshot!(test.command(), @r#"
    success: false
    exit_code: 2
    ----- stdout -----

    ----- stderr -----
    Error: Invalid glob pattern in 'ignores': "[invalid": Pattern syntax error near position 0: invalid range pattern
    "#);

    Ok(())
}

#[test]
fn test_small_preview_limit() -> Result<()> {
    let test = CliTest::with_file(".keyauditrc.json", r#"{ "extraPreviewLimit": 1 }"#)?;
    test.write_file("lang/en.json", r#"{ "a": "A", "b": "B", "c": "C" }"#)?;

    assert_cmd_snapshot!(test.command(), @r#"
    success: true
    exit_code: 0
    ----- stdout -----
    Checking i18n keys...

    Loading dictionaries from lang
    ✓ Loaded en.json (3 keys)

    Scanning source files...
    ✓ Found 0 used keys in 0 files

    ============================================================
    en.json
    ============================================================
    Total keys: 3
    Used keys: 0
    Missing keys: 0
    Extra keys (unused): 3

    ! Extra keys (3, possibly unused):
       - "a"
       ... and 2 more

    ✓ All used keys are present in every dictionary

    ----- stderr -----
    "#);

    Ok(())
}
