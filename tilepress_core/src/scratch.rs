use std::{
	io::ErrorKind,
	path::{Path, PathBuf},
};

/// Owns the transient files of one run and removes them when dropped.
///
/// Removal happens on every exit path of the scope holding the guard. A file that
/// does not exist is skipped; any other failure is logged as a warning and ignored.
#[derive(Debug)]
pub struct ScratchFiles {
	paths: Vec<PathBuf>,
}

impl ScratchFiles {
	pub fn new<I, P>(paths: I) -> Self
	where
		I: IntoIterator<Item = P>,
		P: Into<PathBuf>,
	{
		Self {
			paths: paths.into_iter().map(Into::into).collect(),
		}
	}

	/// Removes all files now. Returns the paths that were actually deleted.
	pub fn remove_all(&self) -> Vec<PathBuf> {
		log::info!("cleaning up generated files");
		self.paths.iter().filter(|path| remove_file(path)).cloned().collect()
	}
}

impl Drop for ScratchFiles {
	fn drop(&mut self) {
		self.remove_all();
	}
}

fn remove_file(path: &Path) -> bool {
	match std::fs::remove_file(path) {
		Ok(()) => {
			log::info!("removed {path:?}");
			true
		}
		Err(err) if err.kind() == ErrorKind::NotFound => {
			log::info!("{path:?} not found, skipping");
			false
		}
		Err(err) => {
			log::warn!("could not remove {path:?}: {err}");
			false
		}
	}
}
