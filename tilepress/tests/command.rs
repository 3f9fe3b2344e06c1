
use predicates::str;
use rstest::rstest;
use tempfile::tempdir;
use test_utilities::*;

#[test]
fn command() {
	let dir = tempdir().unwrap();
	tilepress_cmd(dir.path())
		.assert()
		.failure()
		.code(2)
		.stdout(str::is_empty())
		.stderr(str::contains(format!("Usage: {BINARY_NAME} [OPTIONS] <COMMAND>")));
}

#[rstest]
#[case("export", "[OPTIONS] <OUTPUT>")]
fn subcommand_usage(#[case] sub_command: &str, #[case] usage: &str) {
	let dir = tempdir().unwrap();
	tilepress_cmd(dir.path())
		.args(sub_command.split(' '))
		.assert()
		.failure()
		.code(2)
		.stdout(str::is_empty())
		.stderr(str::contains(format!("Usage: {BINARY_NAME} {sub_command} {usage}")));
}

#[rstest]
#[case::publish(&["publish"])]
#[case::run_alias(&["run"])]
#[case::export(&["export", "out.geojson"])]
fn missing_credentials_exit_with_error(#[case] args: &[&str]) {
	let dir = tempdir().unwrap();
	tilepress_cmd(dir.path())
		.args(args)
		.assert()
		.failure()
		.code(1)
		.stdout(str::is_empty())
		.stderr(str::contains(
			"SUPABASE_URL and SUPABASE_SECRET_KEY environment variables must be set",
		));

	assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0, "no file may be created");
}

#[test]
fn env_file_supplies_credentials() {
	let dir = tempdir().unwrap();
	std::fs::write(dir.path().join(".env"), "SUPABASE_URL=ftp://example.org\nSUPABASE_SECRET_KEY=k\n").unwrap();

	// the URL is read from ./.env, and rejected afterwards because of its scheme
	tilepress_cmd(dir.path())
		.arg("publish")
		.assert()
		.failure()
		.code(1)
		.stderr(str::contains("unsupported URL scheme 'ftp'"));
}

#[test]
fn print_args() {
	let dir = tempdir().unwrap();
	tilepress_cmd(dir.path())
		.args(["print-args", "--workdir", "work"])
		.assert()
		.success()
		.stdout(
			"tippecanoe\n-o\nwork/articles.pmtiles\n-l\narticles\n--minimum-zoom\n0\n--maximum-zoom\n19\n--force\n\
			 --preserve-input-order\n--drop-rate=0\n--cluster-distance=0\n--drop-densest-as-needed\n--gamma=1\n\
			 --extend-zooms-if-still-dropping\nwork/articles.geojson\n",
		);
}

#[test]
fn print_args_uses_tippecanoe_override() {
	let dir = tempdir().unwrap();
	std::fs::write(dir.path().join("tilepress.yml"), "tiler:\n  binary: /from/config/tippecanoe\n").unwrap();

	tilepress_cmd(dir.path())
		.args(["print-args", "--config", "tilepress.yml"])
		.assert()
		.success()
		.stdout(str::starts_with("/from/config/tippecanoe\n-o\n"));

	tilepress_cmd(dir.path())
		.args(["print-args", "--config", "tilepress.yml", "--tippecanoe", "/opt/bin/tippecanoe"])
		.assert()
		.success()
		.stdout(str::starts_with("/opt/bin/tippecanoe\n-o\n./articles.pmtiles\n"));
}
