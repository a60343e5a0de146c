use std::fs::File;
use std::io::Read;
use std::path::Path;

use crate::error::Result;
use crate::model::settings::GenerationSettings;

/// Reads a corpus file holding one word per line.
///
/// - Reads the entire file into memory
/// - Splits on `\n` / `\r\n`, dropping the line endings only
/// - Skips empty lines
pub fn read_words<P: AsRef<Path>>(filename: P) -> Result<Vec<String>> {
	let mut contents = String::new();
	File::open(filename)?.read_to_string(&mut contents)?;
	Ok(contents
		.lines()
		.map(|line| line.trim_end_matches(['\r', '\n']))
		.filter(|line| !line.is_empty())
		.map(str::to_owned)
		.collect())
}

/// Loads and validates generation settings from a TOML file.
pub fn load_settings<P: AsRef<Path>>(filename: P) -> Result<GenerationSettings> {
	let contents = std::fs::read_to_string(filename)?;
	GenerationSettings::from_toml(&contents)
}
