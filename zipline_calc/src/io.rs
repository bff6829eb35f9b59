use std::fs::File;
use std::io::{self, Read};
use std::path::Path;

use crate::geo::DesignInput;

/// Reads an entire file into a string.
pub fn read_to_string(path: &Path) -> io::Result<String> {
    let mut file = File::open(path)?;
    let mut content = String::new();
    file.read_to_string(&mut content)?;
    Ok(content)
}

/// Writes a string to a file, replacing any existing content.
pub fn write_string(path: &Path, content: &str) -> io::Result<()> {
    std::fs::write(path, content)
}

/// Loads and validates a design from a JSON file.
pub fn read_design_json(path: &Path) -> io::Result<DesignInput> {
    let content = read_to_string(path)?;
    let input: DesignInput = serde_json::from_str(&content)
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
    input
        .validate()
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
    Ok(input)
}

/// Saves a design to a JSON file with pretty formatting.
pub fn write_design_json(path: &Path, input: &DesignInput) -> io::Result<()> {
    let json = serde_json::to_string_pretty(input).map_err(io::Error::other)?;
    write_string(path, &json)
}
