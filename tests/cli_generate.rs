mod common;

use assert_fs::fixture::ChildPath;
use assert_fs::prelude::*;
use common::{PAPER_FIELDS_JSON, PAPER_PROMPT_EN, TestContext};
use predicates::prelude::*;

fn with_newline(doc: &str) -> String {
    format!("{}\n", doc)
}

#[test]
fn generate_from_json_file_prints_prompt() {
    let ctx = TestContext::new();
    ctx.write_file("form.json", PAPER_FIELDS_JSON);

    ctx.cli()
        .args(["generate", "-f", "form.json"])
        .assert()
        .success()
        .stdout(with_newline(PAPER_PROMPT_EN));
}

#[test]
fn generate_alias_with_set_and_action_flags() {
    let ctx = TestContext::new();

    ctx.cli()
        .args([
            "g",
            "--set",
            "domain=machine learning",
            "--set",
            "specific_goal=summarize a paper",
            "--set",
            "format=markdown",
            "--set",
            "unwantedResult=jargon",
            "--action",
            "transformer architectures",
        ])
        .assert()
        .success()
        .stdout(with_newline(PAPER_PROMPT_EN));
}

#[test]
fn generate_empty_chinese_prompt_uses_placeholders() {
    let ctx = TestContext::new();

    ctx.cli()
        .args(["generate", "--locale", "zh"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("# <角色>"))
        .stdout(predicate::str::contains("{領域}"))
        .stdout(predicate::str::contains("- [搜尋(\"{行動}\")]"))
        .stdout(predicate::str::contains("結構不限"));
}

#[test]
fn generate_reads_yaml_with_legacy_action_text() {
    let ctx = TestContext::new();
    ctx.write_file(
        "form.yaml",
        "domain: rust\nstructure: \"{title, body}\"\naction: |\n  ownership rules\n  lifetimes\n",
    );

    ctx.cli()
        .args(["generate", "-f", "form.yaml"])
        .assert()
        .success()
        .stdout(predicate::str::contains("You are an expert in rust"))
        .stdout(predicate::str::contains(
            "- [Search(\"ownership rules\")]\n- [Search(\"lifetimes\")]",
        ))
        .stdout(predicate::str::contains("with the following structure: {title, body}"));
}

#[test]
fn generate_reads_toml_and_appends_cli_actions() {
    let ctx = TestContext::new();
    ctx.write_file(
        "form.toml",
        "domain = \"databases\"\n\n[[action]]\ntype = \"Lookup\"\nvalue = \"B-trees\"\n",
    );

    ctx.cli()
        .args(["generate", "-f", "form.toml", "--action", "browse=https://sqlite.org"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "- [Lookup(\"B-trees\")]\n- [Browse(\"https://sqlite.org\")]",
        ));
}

#[test]
fn generate_reads_json_from_stdin() {
    let ctx = TestContext::new();

    ctx.cli()
        .args(["generate", "-f", "-"])
        .write_stdin(PAPER_FIELDS_JSON)
        .assert()
        .success()
        .stdout(with_newline(PAPER_PROMPT_EN));
}

#[test]
fn generate_output_writes_file_and_keeps_stdout_clean() {
    let ctx = TestContext::new();
    ctx.write_file("form.json", PAPER_FIELDS_JSON);

    ctx.cli()
        .args(["generate", "-f", "form.json", "-o", "prompt.md"])
        .assert()
        .success()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("Wrote prompt to prompt.md"));

    ChildPath::new(ctx.work_dir().join("prompt.md")).assert(PAPER_PROMPT_EN);
}

#[test]
fn export_uses_configured_directory_and_locale_file_name() {
    let ctx = TestContext::new();
    ctx.write_file("promptgen.toml", "[defaults]\nlocale = \"zh\"\n\n[output]\ndirectory = \"out\"\n");

    ctx.cli()
        .args(["generate", "--export"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("# <角色>"))
        .stderr(predicate::str::contains("generated_prompt_zh.txt"));

    let exported = ctx.read_file("out/generated_prompt_zh.txt");
    assert!(exported.starts_with("# <角色>"));
    assert!(!exported.ends_with('\n'));
}

#[test]
fn locale_flag_overrides_configured_default() {
    let ctx = TestContext::new();
    ctx.write_file("promptgen.toml", "[defaults]\nlocale = \"zh\"\n");

    ctx.cli()
        .args(["generate", "-l", "en"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("# <Role>"));
}

#[test]
fn explicit_config_flag_is_used() {
    let ctx = TestContext::new();
    let config = ctx.write_file("conf/custom.toml", "[defaults]\nlocale = \"zh-TW\"\n");

    ctx.cli()
        .arg("generate")
        .arg("--config")
        .arg(&config)
        .assert()
        .success()
        .stdout(predicate::str::starts_with("# <角色>"));
}

#[test]
fn missing_explicit_config_fails() {
    let ctx = TestContext::new();

    ctx.cli()
        .args(["generate", "--config", "nope.toml"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error:"))
        .stderr(predicate::str::contains("nope.toml"));
}

#[test]
fn unknown_config_key_fails() {
    let ctx = TestContext::new();
    ctx.write_file("promptgen.toml", "[defaults]\nlanguage = \"zh\"\n");

    ctx.cli()
        .arg("generate")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid config"));
}

#[test]
fn unsupported_locale_fails() {
    let ctx = TestContext::new();

    ctx.cli()
        .args(["generate", "--locale", "fr"])
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("Error: Unsupported locale 'fr'"));
}

#[test]
fn invalid_assignment_fails() {
    let ctx = TestContext::new();

    ctx.cli()
        .args(["generate", "--set", "domain"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid assignment 'domain'"));
}

#[test]
fn unknown_action_kind_in_fields_file_is_named() {
    let ctx = TestContext::new();
    ctx.write_file("form.json", r#"{"action": [{"type": "Teleport", "value": "x"}]}"#);

    ctx.cli()
        .args(["generate", "-f", "form.json"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid action kind 'Teleport'"));
}

#[test]
fn bare_action_with_equals_is_a_search() {
    let ctx = TestContext::new();

    ctx.cli()
        .args(["generate", "--action", "https://example.com/?q=1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("- [Search(\"https://example.com/?q=1\")]"));
}

#[test]
fn null_scalar_in_json_renders_placeholder() {
    let ctx = TestContext::new();
    ctx.write_file("form.json", r#"{"domain": "rust", "structure": null, "details": null}"#);

    ctx.cli()
        .args(["generate", "-f", "form.json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("You are an expert in rust"))
        .stdout(predicate::str::contains("  - {details}\n"))
        .stdout(predicate::str::contains("the structure is free"));
}

#[test]
fn missing_fields_file_fails() {
    let ctx = TestContext::new();

    ctx.cli()
        .args(["generate", "-f", "absent.json"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error:"));
}

#[test]
fn unsupported_fields_extension_fails() {
    let ctx = TestContext::new();
    ctx.write_file("form.txt", "domain=rust");

    ctx.cli()
        .args(["generate", "-f", "form.txt"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unsupported fields file"));
}

#[test]
fn unknown_set_key_is_ignored() {
    let ctx = TestContext::new();

    ctx.cli()
        .args(["generate", "--set", "mood=happy", "--set", "domain=rust"])
        .assert()
        .success()
        .stdout(predicate::str::contains("You are an expert in rust"))
        .stdout(predicate::str::contains("happy").not());
}
