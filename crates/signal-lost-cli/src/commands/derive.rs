//! Derive command implementation
//!
//! Derives normal, roughness, metallic and AO maps from an existing albedo
//! photograph.

use std::path::Path;
use std::process::ExitCode;

use anyhow::Result;
use colored::Colorize;

use signal_lost_textures::derive::{derive_from_albedo, DeriveError};

use super::json_output::{error_codes, DeriveOutput, JsonError};

/// Run the derive command
///
/// # Returns
/// Exit code: 0 success, 1 when the photograph cannot be decoded or, with
/// `--json`, when writing the maps fails.
pub fn run(input: &Path, out_dir: &Path, strength: f64, json_output: bool) -> Result<ExitCode> {
    if !json_output {
        println!(
            "{} {}",
            "Generating PBR maps from:".cyan().bold(),
            input.display()
        );
    }

    let result = derive_from_albedo(input, out_dir, strength);

    match result {
        Ok(files) => {
            if json_output {
                let output = DeriveOutput {
                    success: true,
                    input: input.display().to_string(),
                    files,
                    error: None,
                };
                println!("{}", serde_json::to_string_pretty(&output)?);
            } else {
                for file in &files {
                    println!("  {}", file.path.display().to_string().dimmed());
                }
                println!("{} Saved to {}", "SUCCESS".green().bold(), out_dir.display());
            }
            Ok(ExitCode::SUCCESS)
        }
        Err(e @ DeriveError::Decode { .. }) => {
            let message = format!("{:#}", anyhow::Error::new(e));
            if json_output {
                let output = DeriveOutput {
                    success: false,
                    input: input.display().to_string(),
                    files: Vec::new(),
                    error: Some(JsonError::new(error_codes::DECODE, message)),
                };
                println!("{}", serde_json::to_string_pretty(&output)?);
            } else {
                eprintln!("{}: {}", "error".red(), message);
            }
            Ok(ExitCode::from(1))
        }
        Err(e) if json_output => {
            let output = DeriveOutput {
                success: false,
                input: input.display().to_string(),
                files: Vec::new(),
                error: Some(JsonError::new(
                    error_codes::WRITE_ERROR,
                    format!("{:#}", anyhow::Error::new(e)),
                )),
            };
            println!("{}", serde_json::to_string_pretty(&output)?);
            Ok(ExitCode::from(1))
        }
        Err(e) => Err(e.into()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_undecodable_input_exits_one() {
        let tmp = tempfile::tempdir().unwrap();
        let out = tmp.path().join("out");
        let code = run(&tmp.path().join("missing.png"), &out, 1.0, false).unwrap();
        assert_eq!(code, ExitCode::from(1));
        assert!(!out.exists());
    }

    #[test]
    fn test_json_write_failure_exits_one() {
        let tmp = tempfile::tempdir().unwrap();
        let input = tmp.path().join("photo.png");
        write_checker_png(&input);
        let out = tmp.path().join("taken");
        std::fs::write(&out, b"a file, not a directory").unwrap();

        let code = run(&input, &out, 1.0, true).unwrap();
        assert_eq!(code, ExitCode::from(1));
        assert!(run(&input, &out, 1.0, false).is_err());
    }

    #[test]
    fn test_valid_input_exits_zero() {
        let tmp = tempfile::tempdir().unwrap();
        let input = tmp.path().join("photo.png");
        write_checker_png(&input);

        let out = tmp.path().join("out");
        let code = run(&input, &out, 1.0, true).unwrap();
        assert_eq!(code, ExitCode::SUCCESS);
        for name in ["normal", "roughness", "metallic", "ao"] {
            assert!(out.join(format!("{}.png", name)).is_file());
        }
    }

    fn write_checker_png(path: &Path) {
        use signal_lost_textures::png::{write_map, MapRef, PngConfig};
        use signal_lost_textures::RgbMap;

        let mut map = RgbMap::new(32, 32, [40, 40, 40]);
        for y in 0..32 {
            for x in 0..32 {
                if (x / 8 + y / 8) % 2 == 0 {
                    map.set(x, y, [200, 190, 180]);
                }
            }
        }
        write_map(MapRef::Rgb(&map), path, &PngConfig::default()).unwrap();
    }
}
