use std::path::PathBuf;

use argparse2typer::error::GenerateError;
use argparse2typer::ir::{ArgumentDescriptor, Literal, WarningKind};
use argparse2typer::load::load_spec;
use argparse2typer::{GenerateOptions, convert};

fn fixtures_root() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/specs")
}

fn render(arguments: &[ArgumentDescriptor], options: &GenerateOptions) -> String {
    convert(arguments, options).unwrap().document.render()
}

fn positional(dest: &str) -> ArgumentDescriptor {
    ArgumentDescriptor {
        dest: dest.to_string(),
        required: true,
        ..Default::default()
    }
}

fn option(dest: &str, flags: &[&str]) -> ArgumentDescriptor {
    ArgumentDescriptor {
        dest: dest.to_string(),
        option_strings: flags.iter().map(|flag| flag.to_string()).collect(),
        ..Default::default()
    }
}

#[test]
fn converts_train_parser() {
    let spec = load_spec(&fixtures_root().join("train.json")).unwrap();
    assert_eq!(spec.prog(), Some("train.py"));

    let conversion = convert(spec.arguments(), &GenerateOptions::default()).unwrap();
    let expected = r#"from enum import Enum
from pathlib import Path

class RetriesEnum(str, Enum):
  one = 1
  two = 2
  three = 3

class ModeEnum(str, Enum):
  fast = "fast"
  slow = "slow"

@app.command()
def main(
  input_file: str = typer.Argument(..., help="Training data"),
  output_dir: Path = typer.Option("out", "-o", help="Where 'checkpoints' go"),
  retries: RetriesEnum = typer.Option(RetriesEnum.three),
  lr: float = typer.Option(0.001, "--learning-rate"),
  verbose: bool = typer.Option(False, "-v", help="Chatty logs"),
  mode: ModeEnum = typer.Option(ModeEnum.fast),
):
  args = dict(locals())
"#;

    assert_eq!(conversion.document.render(), expected);
    assert_eq!(conversion.converted, 6);
    assert_eq!(conversion.skipped, vec!["help"]);
    assert_eq!(conversion.enums, vec!["RetriesEnum", "ModeEnum"]);
    assert!(conversion.warnings.is_empty());
}

#[test]
fn converts_yaml_argument_list() {
    let spec = load_spec(&fixtures_root().join("serve.yaml")).unwrap();
    assert_eq!(spec.prog(), None);

    let document = render(spec.arguments(), &GenerateOptions::default());
    assert!(document.starts_with("from pathlib import Path\n\n@app.command()\n"));
    assert!(document.contains("  config_path: Path = typer.Argument(..., \"-c\"),\n"));
    assert!(document.contains("  port: int = typer.Option(8080, help=\"Port to listen on\"),\n"));
}

#[test]
fn required_string_positional_is_not_a_path() {
    let mut input = positional("input-file");
    input.arg_type = Some("str".to_string());

    let conversion = convert(&[input], &GenerateOptions::default()).unwrap();
    let lines = &conversion.document.lines;

    assert!(conversion.enums.is_empty());
    assert!(!lines.iter().any(|line| line.contains("import")));
    assert!(lines.contains(&"  input_file: str = typer.Argument(...),".to_string()));
}

#[test]
fn integer_choices_become_spelled_members() {
    let mut retries = option("retries", &["--retries"]);
    retries.default = Some(Literal::Int(3));
    retries.choices = Some(vec![Literal::Int(1), Literal::Int(2), Literal::Int(3)]);

    let document = render(&[retries], &GenerateOptions::default());
    assert!(document.starts_with("from enum import Enum\n\nclass RetriesEnum(str, Enum):\n"));
    assert!(document.contains("  one = 1\n  two = 2\n  three = 3\n"));
    assert!(document.contains("  retries: RetriesEnum = typer.Option(RetriesEnum.three),"));
}

#[test]
fn string_dir_option_becomes_path() {
    let mut output = option("output-dir", &["--output-dir"]);
    output.arg_type = Some("str".to_string());
    output.default = Some(Literal::Str("out".to_string()));

    let document = render(&[output], &GenerateOptions::default());
    assert!(document.starts_with("from pathlib import Path\n"));
    assert!(document.contains("  output_dir: Path = typer.Option(\"out\"),"));
}

#[test]
fn emits_unknown_type_placeholder_with_warning() {
    let conversion = convert(&[positional("payload")], &GenerateOptions::default()).unwrap();

    assert!(
        conversion
            .document
            .lines
            .contains(&"  payload: <UNKNOWN> = typer.Argument(...),".to_string())
    );
    assert_eq!(conversion.warnings.len(), 1);
    assert_eq!(conversion.warnings[0].kind, WarningKind::UnknownType);
}

#[test]
fn optional_without_default_uses_none() {
    let mut name = option("name", &["--name"]);
    name.arg_type = Some("str".to_string());

    let document = render(&[name], &GenerateOptions::default());
    assert!(document.contains("  name: str = typer.Option(None),"));
}

#[test]
fn string_defaults_are_quoted_and_escaped() {
    let mut sep = option("sep", &["--sep"]);
    sep.default = Some(Literal::Str("a\"b".to_string()));

    let document = render(&[sep], &GenerateOptions::default());
    assert!(document.contains(r#"  sep: str = typer.Option("a\"b"),"#));
}

#[test]
fn choice_default_outside_choices_warns() {
    let mut mode = option("mode", &["--mode", "-m"]);
    mode.default = Some(Literal::Str("turbo".to_string()));
    mode.choices = Some(vec![
        Literal::Str("fast".to_string()),
        Literal::Str("slow".to_string()),
    ]);

    let conversion = convert(&[mode], &GenerateOptions::default()).unwrap();
    assert!(
        conversion
            .document
            .lines
            .contains(&"  mode: ModeEnum = typer.Option(ModeEnum.turbo, \"-m\"),".to_string())
    );
    assert_eq!(conversion.warnings[0].kind, WarningKind::DefaultNotInChoices);
}

#[test]
fn rejects_choices_with_colliding_members() {
    let spec = load_spec(&fixtures_root().join("duplicate_choices.json")).unwrap();

    let err = convert(spec.arguments(), &GenerateOptions::default()).unwrap_err();
    assert_eq!(
        err,
        GenerateError::DuplicateEnumMember {
            enum_name: "LevelEnum".to_string(),
            member: "one".to_string(),
        }
    );
}

#[test]
fn scaffold_import_and_noop_body() {
    let options = GenerateOptions {
        import_typer: true,
        create_app: true,
        get_args: false,
        tab_width: 4,
        ..Default::default()
    };
    let mut count = option("count", &["--count", "-n"]);
    count.default = Some(Literal::Int(1));

    let document = render(&[count], &options);
    let expected = "import typer\n\napp = typer.Typer()\n\n@app.command()\ndef main(\n    count: int = typer.Option(1, \"-n\"),\n):\n    pass\n";
    assert_eq!(document, expected);
}

#[test]
fn ignore_list_skips_destinations() {
    let options = GenerateOptions {
        ignore: vec!["help".to_string(), "version".to_string()],
        ..Default::default()
    };
    let arguments = [
        option("help", &["-h", "--help"]),
        option("version", &["--version"]),
        positional("target"),
    ];

    let conversion = convert(&arguments, &options).unwrap();
    assert_eq!(conversion.converted, 1);
    assert_eq!(conversion.skipped, vec!["help", "version"]);
}

#[test]
fn conversion_is_deterministic() {
    let spec = load_spec(&fixtures_root().join("train.json")).unwrap();
    let options = GenerateOptions {
        import_typer: true,
        ..Default::default()
    };

    let first = render(spec.arguments(), &options);
    let second = render(spec.arguments(), &options);
    assert_eq!(first, second);
}
