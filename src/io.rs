use std::fs;
use std::path::Path;

use log::{debug, error};

use crate::DigitList;
use crate::error::Error;

/// Reads a decimal number from a text file and expands it into a list in
/// `base`. Lines are trimmed and concatenated, so the number may be split
/// across lines and surrounded by whitespace. An empty file (after
/// trimming) yields an empty list.
pub fn load(path: &Path, base: usize) -> Result<DigitList, Error> {
	let text = fs::read_to_string(path).map_err(|e| {
		error!("cannot read {}: {}", path.display(), e);
		Error::new_io_failed("io::load: cannot read input file")
	})?;

	let mut number = String::new();
	for line in text.lines() {
		number.push_str(line.trim());
	}
	if number.is_empty() {
		return DigitList::new_in_base(base);
	}

	let list = DigitList::from_decimal_str(&number, base)?;
	debug!("loaded {}: {} digits in base {}", path.display(), list.len(), base);
	Ok(list)
}

/// Writes the represented value to a text file in decimal.
pub fn save(list: &DigitList, path: &Path) -> Result<(), Error> {
	let text = list.to_decimal_string();
	fs::write(path, &text).map_err(|e| {
		error!("cannot write {}: {}", path.display(), e);
		Error::new_io_failed("io::save: cannot write output file")
	})?;
	debug!("saved {}: {} bytes", path.display(), text.len());
	Ok(())
}

//--------------------------------------------------------------------------------------------------

#[cfg(test)]
mod tests {
	use super::*;
	use crate::error::ErrorKind;
	use std::path::PathBuf;

	fn init_logging() {
		static INIT: std::sync::Once = std::sync::Once::new();
		INIT.call_once(|| {
			let _ = stderrlog::new().verbosity(3).init();
		});
	}

	fn temp_path(name: &str) -> PathBuf {
		std::env::temp_dir().join(format!("radixlist_{}_{}", std::process::id(), name))
	}

	#[test]
	fn test_load_save_round_trip() {
		init_logging();
		let path = temp_path("round_trip.txt");

		fs::write(&path, "13").unwrap();
		let list = load(&path, 2).unwrap();
		assert_eq!(list.to_vec(), vec![1, 1, 0, 1]);

		save(&list, &path).unwrap();
		assert_eq!(fs::read_to_string(&path).unwrap(), "13");

		fs::remove_file(&path).unwrap();
	}

	#[test]
	fn test_load_multiline_and_whitespace() {
		init_logging();
		let path = temp_path("multiline.txt");

		fs::write(&path, "  1 \n3\t\n").unwrap();
		let list = load(&path, 2).unwrap();
		assert_eq!(list.to_decimal_string(), "13");

		fs::remove_file(&path).unwrap();
	}

	#[test]
	fn test_load_empty_file() {
		init_logging();
		let path = temp_path("empty.txt");

		fs::write(&path, " \n \n").unwrap();
		let list = load(&path, 2).unwrap();
		assert!(list.is_empty());
		assert_eq!(list.base(), 2);

		fs::remove_file(&path).unwrap();
	}

	#[test]
	fn test_load_errors() {
		init_logging();
		let path = temp_path("malformed.txt");

		fs::write(&path, "12x3").unwrap();
		assert_eq!(load(&path, 2).unwrap_err().kind, ErrorKind::ParseError);
		fs::remove_file(&path).unwrap();

		let missing = temp_path("does_not_exist.txt");
		assert_eq!(load(&missing, 2).unwrap_err().kind, ErrorKind::IoFailed);
	}

	#[test]
	fn test_save_value_in_other_base() {
		init_logging();
		let path = temp_path("ternary.txt");

		let list = crate::testlist![3; 1, 1, 1];
		save(&list, &path).unwrap();
		assert_eq!(fs::read_to_string(&path).unwrap(), "13");

		fs::remove_file(&path).unwrap();
	}
}
