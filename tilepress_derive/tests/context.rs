use anyhow::{Result, bail};
use tilepress_derive::context;

#[context("reading row {}", index)]
fn read_row(index: usize) -> Result<usize> {
	if index > 2 {
		bail!("row out of range");
	}
	Ok(index * 10)
}

#[context("uploading {:?}", name)]
async fn upload(name: &str, fail: bool) -> Result<()> {
	if fail {
		bail!("connection refused");
	}
	Ok(())
}

#[context(move, "taking value")]
fn take(value: String) -> Result<String> {
	Ok(value)
}

#[context("joining rows")]
fn join_rows(rows: Vec<String>) -> Result<String> {
	if rows.is_empty() {
		bail!("nothing to join");
	}
	Ok(rows.into_iter().collect::<Vec<_>>().join(","))
}

#[test]
fn sync_body_may_consume_arguments() {
	assert_eq!(join_rows(vec!["a".into(), "b".into()]).unwrap(), "a,b");
	assert_eq!(join_rows(vec![]).unwrap_err().to_string(), "joining rows");
}

#[test]
fn sync_success_passes_through() {
	assert_eq!(read_row(1).unwrap(), 10);
}

#[test]
fn sync_error_gets_context() {
	let err = read_row(5).unwrap_err();
	assert_eq!(err.to_string(), "reading row 5");
	assert_eq!(err.root_cause().to_string(), "row out of range");
}

#[test]
fn move_closure() {
	assert_eq!(take("abc".to_string()).unwrap(), "abc");
}

#[tokio::test]
async fn async_error_gets_context() {
	upload("articles.pmtiles", false).await.unwrap();

	let err = upload("articles.pmtiles", true).await.unwrap_err();
	assert_eq!(format!("{err:#}"), "uploading \"articles.pmtiles\": connection refused");
}
