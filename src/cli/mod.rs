//! Command dispatch module
//!
//! Maps a command name and its positional arguments to a store operation:
//! - init: Create an empty data file
//! - create / update: Validate a record, then insert or replace it
//! - read: Print a record with metric conversions
//! - delete: Remove a record

pub mod create;
pub mod delete;
pub mod init;
pub mod read;
pub mod update;

use std::path::Path;

use crate::error::{BioError, Result};
use crate::models::Candidate;
use crate::store::Store;

/// A recognized command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Init,
    Create,
    Read,
    Update,
    Delete,
}

impl Command {
    /// Look up a command by name; the short flags of the original tool are accepted too
    pub fn parse(name: &str) -> Result<Self> {
        match name {
            "init" => Ok(Command::Init),
            "create" | "-c" => Ok(Command::Create),
            "read" | "-r" => Ok(Command::Read),
            "update" | "-u" => Ok(Command::Update),
            "delete" | "-d" => Ok(Command::Delete),
            _ => Err(BioError::UnknownCommand),
        }
    }

    /// Number of positional arguments the command takes
    pub fn arity(&self) -> usize {
        match self {
            Command::Init => 0,
            Command::Read | Command::Delete => 1,
            Command::Create | Command::Update => 5,
        }
    }
}

/// Run one command against the data file and return the text to print
pub fn dispatch(name: &str, args: &[String], data_file: &Path) -> Result<String> {
    let command = Command::parse(name)?;
    if args.len() != command.arity() {
        return Err(BioError::ArgumentCount);
    }

    match command {
        Command::Init => init::run(data_file),
        Command::Create => create::run(&mut Store::load(data_file)?, args),
        Command::Read => read::run(&Store::load(data_file)?, args),
        Command::Update => update::run(&mut Store::load(data_file)?, args),
        Command::Delete => delete::run(&mut Store::load(data_file)?, args),
    }
}

/// Build a candidate from the five record arguments
fn candidate(args: &[String]) -> Result<Candidate> {
    match args {
        [name, sex, age, height, weight] => Ok(Candidate::new(name, sex, age, height, weight)),
        _ => Err(BioError::ArgumentCount),
    }
}

/// The single name argument of read/delete
fn single_name(args: &[String]) -> Result<&str> {
    match args {
        [name] => Ok(name.as_str()),
        _ => Err(BioError::ArgumentCount),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn args(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    fn data_file(temp: &TempDir) -> std::path::PathBuf {
        let path = temp.path().join("biostats.csv");
        dispatch("init", &[], &path).unwrap();
        path
    }

    #[test]
    fn test_command_parse() {
        assert_eq!(Command::parse("create").unwrap(), Command::Create);
        assert_eq!(Command::parse("-r").unwrap(), Command::Read);
        assert_eq!(Command::parse("-u").unwrap(), Command::Update);
        assert_eq!(Command::parse("delete").unwrap(), Command::Delete);
        assert!(matches!(
            Command::parse("list"),
            Err(BioError::UnknownCommand)
        ));
    }

    #[test]
    fn test_unknown_command_needs_no_data_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("absent.csv");
        let err = dispatch("frobnicate", &[], &path).unwrap_err();
        assert_eq!(err.to_string(), "Command does not exist");
    }

    #[test]
    fn test_wrong_argument_count() {
        let temp = TempDir::new().unwrap();
        let path = data_file(&temp);

        for (name, values) in [
            ("create", args(&["alice", "f", "30"])),
            ("update", args(&["alice", "f", "30", "65", "130", "extra"])),
            ("read", args(&[])),
            ("delete", args(&["alice", "bob"])),
            ("init", args(&["x"])),
        ] {
            let result = dispatch(name, &values, &path);
            assert!(
                matches!(result, Err(BioError::ArgumentCount)),
                "{name} accepted {} args",
                values.len()
            );
        }
    }

    #[test]
    fn test_create_read_update_delete() {
        let temp = TempDir::new().unwrap();
        let path = data_file(&temp);

        let out = dispatch("create", &args(&["alice", "f", "30", "65", "130"]), &path).unwrap();
        assert_eq!(out, "Created Alice");

        let out = dispatch("read", &args(&["ALICE"]), &path).unwrap();
        assert!(out.contains("name: Alice"));
        assert!(out.contains("centimeters: 165.10"));
        assert!(out.contains("kilograms: 58.95"));

        let out = dispatch("update", &args(&["alice", "f", "31", "66", "128"]), &path).unwrap();
        assert_eq!(out, "Updated Alice");
        let out = dispatch("read", &args(&["alice"]), &path).unwrap();
        assert!(out.contains("age: 31"));

        let out = dispatch("delete", &args(&["Alice"]), &path).unwrap();
        assert_eq!(out, "Deleted Alice");
        let err = dispatch("read", &args(&["alice"]), &path).unwrap_err();
        assert_eq!(err.to_string(), "Name does not exist");
    }

    #[test]
    fn test_create_invalid_leaves_file_untouched() {
        let temp = TempDir::new().unwrap();
        let path = data_file(&temp);
        let before = fs::read_to_string(&path).unwrap();

        let err = dispatch("create", &args(&["alice", "x", "17", "65", "130"]), &path).unwrap_err();
        assert_eq!(err.to_string(), "Incorrect sex, Age is underaged");
        assert_eq!(fs::read_to_string(&path).unwrap(), before);
    }

    #[test]
    fn test_data_command_without_data_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("absent.csv");
        let result = dispatch("read", &args(&["alice"]), &path);
        assert!(matches!(result, Err(BioError::StoreLoad(_))));
    }
}
