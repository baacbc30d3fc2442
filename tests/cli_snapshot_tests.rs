//! Snapshot tests for rendered CLI output.
//!
//! Commands are executed through `cli::execute` so the tests never reach the process exit path.

use clap::Parser;
use primcol::cli::{Cli, execute};

fn run(args: &[&str]) -> String {
    let cli = Cli::try_parse_from(std::iter::once("primcol").chain(args.iter().copied())).expect("arguments parse");
    execute(cli).expect("command succeeds")
}

#[test]
fn emit_int_indexed() {
    insta::assert_snapshot!(run(&["emit", "1", "2", "3"]).trim_end(), @"[1,2,3]");
}

#[test]
fn emit_long_bulk_matches_indexed() {
    let bulk = run(&["emit", "--kind", "long", "--family", "bulk", "1", "2", "3"]);
    insta::assert_snapshot!(bulk.trim_end(), @"[1,2,3]");
}

#[test]
fn emit_chars() {
    insta::assert_snapshot!(run(&["emit", "-k", "char", "a", "b"]).trim_end(), @r#"["a","b"]"#);
}

#[test]
fn emit_negative_and_fractional_doubles() {
    insta::assert_snapshot!(run(&["emit", "-k", "f64", "-1.5", "0.1", "3"]).trim_end(), @"[-1.5,0.1,3.0]");
}

#[test]
fn emit_empty() {
    insta::assert_snapshot!(run(&["emit", "-k", "short"]).trim_end(), @"[]");
}

#[test]
fn schema_for_char() {
    insta::assert_snapshot!(run(&["schema", "--kind", "char"]).trim_end(), @r#"
    {
      "items": {
        "type": "string"
      },
      "type": "array"
    }
    "#);
}

#[test]
fn schema_for_byte() {
    insta::assert_snapshot!(run(&["schema", "--kind", "byte"]).trim_end(), @r#"
    {
      "items": {
        "type": "integer"
      },
      "type": "array"
    }
    "#);
}

#[test]
fn kinds_table() {
    insta::assert_snapshot!(run(&["kinds"]).trim_end(), @r#"
    | Kind | Aliases | Rust type | Schema | Description |
    |---|---|---|---|---|
    | `byte` | `i8` | `i8` | `integer` | Signed 8-bit integer. |
    | `short` | `i16` | `i16` | `integer` | Signed 16-bit integer. |
    | `int` | `i32` | `i32` | `integer` | Signed 32-bit integer. |
    | `long` | `i64` | `i64` | `integer` | Signed 64-bit integer. |
    | `char` | - | `char` | `string` | Unicode scalar value, emitted as a one-character string. |
    | `float` | `f32` | `f32` | `number` | Single-precision floating-point number. |
    | `double` | `f64` | `f64` | `number` | Double-precision floating-point number. |

    | Family | Aliases | Description |
    |---|---|---|
    | `bulk` | `visitor` | Traversal through a visitor that may stop early; order is whatever the container yields. |
    | `indexed` | `random-access` | Random access by contiguous position `0..size`, traversed in ascending position order. |
    "#);
}

#[test]
fn bad_value_names_value_and_position() {
    let cli = Cli::try_parse_from(["primcol", "emit", "-k", "int", "7", "seven"]).expect("arguments parse");
    let err = execute(cli).expect_err("`seven` is not an int");
    assert_eq!(err.exit_code, primcol::cli::ExitCode::USAGE);
    assert!(err.message.contains("seven"), "{}", err.message);
    assert!(err.message.contains("value #2"), "{}", err.message);
}
