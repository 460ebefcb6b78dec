use predicates::str;
use rstest::rstest;
use test_utilities::*;

#[test]
fn command() {
	geodoc_cmd()
		.assert()
		.failure()
		.code(2)
		.stdout(str::is_empty())
		.stderr(str::contains(format!("Usage: {BINARY_NAME} [OPTIONS] <COMMAND>")));
}

#[rstest]
#[case("convert", "[OPTIONS] <INPUT_FILE> [OUTPUT_FILE]")]
#[case("probe", "[OPTIONS] <INPUT_FILE>")]
fn subcommand(#[case] sub_command: &str, #[case] usage: &str) {
	geodoc_cmd()
		.arg(sub_command)
		.assert()
		.failure()
		.code(2)
		.stdout(str::is_empty())
		.stderr(str::contains(format!("Usage: {BINARY_NAME} {sub_command} {usage}")));
}

#[test]
fn version() {
	geodoc_cmd()
		.arg("--version")
		.assert()
		.success()
		.stdout(str::starts_with("geodoc "));
}

#[test]
fn help() {
	geodoc_cmd()
		.arg("--help")
		.assert()
		.success()
		.stdout(str::starts_with("Convert and inspect GeoJSON geometries\n"));
}
