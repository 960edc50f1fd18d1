//! Interactive prompt loops
//!
//! Each prompt is a retry-until-valid loop over generic `BufRead`/`Write`
//! handles: print the question, validate the answer, re-prompt on failure.
//! The generic handles keep the loops testable with in-memory buffers; the
//! binary passes stdin/stdout. A closed input stream surfaces as an
//! `UnexpectedEof` error so scripted misuse cannot spin forever.

use crate::config::{self, SystemEntry, SystemsConfig};
use crate::extract::paths;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;

fn ask<R: BufRead, W: Write>(input: &mut R, output: &mut W, prompt: &str) -> io::Result<String> {
    write!(output, "{}", prompt)?;
    output.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Err(io::Error::new(
            io::ErrorKind::UnexpectedEof,
            "input closed before a valid answer was given",
        ));
    }
    Ok(line.trim().to_string())
}

/// Prints a numbered list of systems and loops until a valid selection.
pub fn select_system<R: BufRead, W: Write>(
    systems: &[SystemEntry],
    input: &mut R,
    output: &mut W,
) -> io::Result<SystemEntry> {
    writeln!(output, "Available systems:")?;
    for (index, system) in systems.iter().enumerate() {
        writeln!(output, "{}. {} ({})", index + 1, system.key, system.name)?;
    }

    loop {
        let answer = ask(input, output, "Select system number: ")?;
        match answer.parse::<usize>() {
            Ok(number) if number >= 1 && number <= systems.len() => {
                return Ok(systems[number - 1].clone());
            }
            _ => {
                writeln!(
                    output,
                    "Invalid selection. Enter a number between 1 and {}.",
                    systems.len()
                )?;
            }
        }
    }
}

/// Loops until the entered path exists, is a directory, and contains at
/// least one file the scan would pick up. Returns the canonicalized path.
pub fn prompt_repo_path<R: BufRead, W: Write>(
    system_key: &str,
    input: &mut R,
    output: &mut W,
) -> io::Result<PathBuf> {
    loop {
        let answer = ask(
            input,
            output,
            &format!("Enter repo path for {}: ", system_key),
        )?;

        if answer.is_empty() {
            writeln!(output, "Path is required. Please try again.")?;
            continue;
        }

        let repo_path = PathBuf::from(&answer);
        if !repo_path.exists() {
            writeln!(output, "Path does not exist: {}", repo_path.display())?;
            continue;
        }
        if !repo_path.is_dir() {
            writeln!(output, "Path is not a directory: {}", repo_path.display())?;
            continue;
        }
        if !paths::has_source_files(&repo_path) {
            writeln!(
                output,
                "No expected process files found. Make sure the repo contains \
                 internal/process/{{tasking,document,operation,scoring}}."
            )?;
            continue;
        }

        return repo_path.canonicalize();
    }
}

/// Collects a new registry entry. `preset_key` and `preset_name` pre-answer
/// the corresponding prompts (flag-driven use); invalid presets fall through
/// to the interactive loop.
pub fn prompt_new_system<R: BufRead, W: Write>(
    existing: &SystemsConfig,
    preset_key: Option<&str>,
    preset_name: Option<&str>,
    input: &mut R,
    output: &mut W,
) -> io::Result<SystemEntry> {
    let mut pending = preset_key.map(|key| key.trim().to_string());

    let key = loop {
        let value = match pending.take() {
            Some(value) => value,
            None => ask(input, output, "System key (lowercase-kebab): ")?,
        };

        if value.is_empty() {
            writeln!(output, "System key is required.")?;
            continue;
        }
        if !config::is_valid_key(&value) {
            writeln!(
                output,
                "Invalid key format. Use lowercase-kebab-case, e.g. \"abc-core\"."
            )?;
            continue;
        }
        if existing.find(&value).is_some() {
            writeln!(output, "System key \"{}\" already exists.", value)?;
            continue;
        }

        break value;
    };

    let suggested = key.to_uppercase();
    let name = match preset_name {
        Some(name) if !name.trim().is_empty() => name.trim().to_string(),
        _ => {
            let entered = ask(input, output, &format!("Display name [{}]: ", suggested))?;
            if entered.is_empty() {
                suggested
            } else {
                entered
            }
        }
    };

    Ok(SystemEntry::with_default_output(&key, &name))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::io::Cursor;
    use tempfile::TempDir;

    fn systems() -> Vec<SystemEntry> {
        vec![
            SystemEntry::with_default_output("ndf", "NDF"),
            SystemEntry::with_default_output("ssf", "SSF"),
        ]
    }

    #[test]
    fn test_select_system_accepts_valid_number() {
        let mut input = Cursor::new("2\n");
        let mut output = Vec::new();

        let selected = select_system(&systems(), &mut input, &mut output).unwrap();
        assert_eq!(selected.key, "ssf");

        let text = String::from_utf8(output).unwrap();
        assert!(text.contains("1. ndf (NDF)"));
        assert!(text.contains("2. ssf (SSF)"));
    }

    #[test]
    fn test_select_system_retries_on_invalid_input() {
        let mut input = Cursor::new("0\nnope\n3\n1\n");
        let mut output = Vec::new();

        let selected = select_system(&systems(), &mut input, &mut output).unwrap();
        assert_eq!(selected.key, "ndf");

        let text = String::from_utf8(output).unwrap();
        assert_eq!(text.matches("Invalid selection").count(), 3);
    }

    #[test]
    fn test_select_system_errors_on_closed_input() {
        let mut input = Cursor::new("");
        let mut output = Vec::new();

        let result = select_system(&systems(), &mut input, &mut output);
        assert_eq!(result.unwrap_err().kind(), io::ErrorKind::UnexpectedEof);
    }

    #[test]
    fn test_prompt_repo_path_validates_until_accepted() {
        let dir = TempDir::new().unwrap();
        let empty = dir.path().join("empty");
        fs::create_dir_all(&empty).unwrap();
        let good = dir.path().join("good");
        let source = good.join("internal/process/tasking/alpha");
        fs::create_dir_all(&source).unwrap();
        fs::write(source.join("handler.go"), "package alpha").unwrap();

        let answers = format!(
            "\n{}\n{}\n{}\n",
            dir.path().join("missing").display(),
            empty.display(),
            good.display()
        );
        let mut input = Cursor::new(answers);
        let mut output = Vec::new();

        let path = prompt_repo_path("ndf", &mut input, &mut output).unwrap();
        assert_eq!(path, good.canonicalize().unwrap());

        let text = String::from_utf8(output).unwrap();
        assert!(text.contains("Path is required"));
        assert!(text.contains("Path does not exist"));
        assert!(text.contains("No expected process files found"));
    }

    #[test]
    fn test_prompt_new_system_with_presets_skips_prompts() {
        let config = SystemsConfig::default_config();
        let mut input = Cursor::new("");
        let mut output = Vec::new();

        let entry = prompt_new_system(
            &config,
            Some("abc-core"),
            Some("ABC Core"),
            &mut input,
            &mut output,
        )
        .unwrap();
        assert_eq!(entry.key, "abc-core");
        assert_eq!(entry.name, "ABC Core");
        assert_eq!(entry.output_public, "public/readset-output-abc-core.json");
    }

    #[test]
    fn test_prompt_new_system_rejects_duplicate_and_invalid_keys() {
        let config = SystemsConfig::default_config();
        let mut input = Cursor::new("ndf\nBad Key\nfresh\n\n");
        let mut output = Vec::new();

        let entry = prompt_new_system(&config, None, None, &mut input, &mut output).unwrap();
        assert_eq!(entry.key, "fresh");
        assert_eq!(entry.name, "FRESH");

        let text = String::from_utf8(output).unwrap();
        assert!(text.contains("already exists"));
        assert!(text.contains("Invalid key format"));
        assert!(text.contains("Display name [FRESH]"));
    }

    #[test]
    fn test_prompt_new_system_invalid_preset_falls_back_to_prompt() {
        let config = SystemsConfig::default_config();
        let mut input = Cursor::new("good-key\nName\n");
        let mut output = Vec::new();

        let entry =
            prompt_new_system(&config, Some("NOT VALID"), None, &mut input, &mut output).unwrap();
        assert_eq!(entry.key, "good-key");
        assert_eq!(entry.name, "Name");
    }
}
