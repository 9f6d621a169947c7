#![allow(missing_docs)]

use std::path::{Path, PathBuf};
use std::process::{Command, Output};

use pack::codec::{Value, decode_value, encode_value};
use serde_json::json;

fn run_pack(args: &[&str]) -> Output {
	Command::new(env!("CARGO_BIN_EXE_pack")).args(args).output().expect("pack command executes")
}

fn run_ok(args: &[&str]) -> String {
	let output = run_pack(args);
	assert!(
		output.status.success(),
		"pack command failed with status={}: {}",
		output.status,
		String::from_utf8_lossy(&output.stderr)
	);
	String::from_utf8(output.stdout).expect("stdout is utf-8")
}

fn scratch(name: &str, contents: &[u8]) -> PathBuf {
	let path = Path::new(env!("CARGO_TARGET_TMPDIR")).join(name);
	std::fs::write(&path, contents).expect("scratch file writes");
	path
}

fn arg(path: &Path) -> String {
	path.display().to_string()
}

#[test]
fn encode_then_inspect_round_trips_typed_json() {
	let typed = json!({"struct": [
		{"name": "x", "value": {"u8": 1}},
		{"name": "big", "value": {"u128": "340282366920938463463374607431768211455"}},
		{"name": "raw", "value": {"bytes": "0xcafe"}},
		{"name": "items", "value": {"list": [{"bool": true}, {"string": "hi"}]}}
	]});
	let input = scratch("round_trip.json", typed.to_string().as_bytes());

	let hex = run_ok(&["encode", &arg(&input)]);
	assert!(hex.trim().starts_with("0x0c"), "struct tag first: {hex}");
	let payload = scratch("round_trip.hex", hex.as_bytes());

	let stdout = run_ok(&["inspect", &arg(&payload), "--hex", "--json"]);
	let out: serde_json::Value = serde_json::from_str(&stdout).expect("stdout should be valid json");
	assert_eq!(out["value"], typed);
	assert_eq!(out["canonical"].as_str(), Some(hex.trim()));
	assert_eq!(out["consumed"], out["len"]);
}

#[test]
fn encode_writes_raw_bytes_with_out() {
	let input = scratch("raw_out.json", br#"{"list": [{"u16": 258}]}"#);
	let out = Path::new(env!("CARGO_TARGET_TMPDIR")).join("raw_out.bin");
	run_ok(&["encode", &arg(&input), "--out", &arg(&out)]);

	let bytes = std::fs::read(&out).expect("payload written");
	assert_eq!(decode_value(&bytes).expect("decodes"), Value::List(vec![Value::U16(258)]));
}

#[test]
fn encode_rejects_empty_sequences() {
	let input = scratch("empty_list.json", br#"{"struct": [{"name": "l", "value": {"list": []}}]}"#);
	let output = run_pack(&["encode", &arg(&input)]);
	assert_eq!(output.status.code(), Some(1));
	let stderr = String::from_utf8_lossy(&output.stderr);
	assert!(stderr.starts_with("error: field l: empty list"), "{stderr}");
}

#[test]
fn inspect_prints_generated_values() {
	let value = pack_testkit::generate(42, 4, false, true);
	let payload = scratch("generated.bin", &encode_value(&value));
	let stdout = run_ok(&["inspect", &arg(&payload)]);
	assert!(stdout.contains(&format!("kind: {}", value.kind())), "{stdout}");
	assert!(stdout.contains("value:"), "{stdout}");
}

#[test]
fn inspect_reports_and_rejects_trailing_bytes() {
	let mut bytes = encode_value(&Value::U8(7));
	bytes.extend_from_slice(&[0, 0]);
	let payload = scratch("trailing.bin", &bytes);

	let stdout = run_ok(&["inspect", &arg(&payload)]);
	assert!(stdout.contains("trailing: 2"), "{stdout}");

	let output = run_pack(&["inspect", &arg(&payload), "--exact"]);
	assert_eq!(output.status.code(), Some(1));
	assert!(String::from_utf8_lossy(&output.stderr).contains("trailing bytes"));
}

#[test]
fn inspect_enforces_limits() {
	let value = Value::List(vec![Value::List(vec![Value::U8(1)])]);
	let payload = scratch("nested.bin", &encode_value(&value));
	let output = run_pack(&["inspect", &arg(&payload), "--max-depth", "2"]);
	assert_eq!(output.status.code(), Some(1));
	assert!(String::from_utf8_lossy(&output.stderr).contains("depth exceeded"));

	let payload = scratch("long.bin", &encode_value(&Value::from("abcdef")));
	let output = run_pack(&["inspect", &arg(&payload), "--max-len", "3"]);
	assert_eq!(output.status.code(), Some(1));
	assert!(String::from_utf8_lossy(&output.stderr).contains("exceeds limit 3"));
}

#[test]
fn inspect_rejects_truncated_payloads() {
	let bytes = encode_value(&Value::from("truncated"));
	let payload = scratch("truncated.bin", &bytes[..bytes.len() - 1]);
	let output = run_pack(&["inspect", &arg(&payload)]);
	assert_eq!(output.status.code(), Some(1));
	assert!(String::from_utf8_lossy(&output.stderr).contains("unexpected eof"));
}
