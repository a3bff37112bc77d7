//! Command-line front end for segment layouts, presets and settings.

#[cfg(not(target_arch = "wasm32"))]
mod cli;

/// Command-line entry point for native builds
#[cfg(not(target_arch = "wasm32"))]
fn main() -> std::process::ExitCode {
    use clap::Parser;
    use segment_designer::{AppSettings, LogLevel};

    let args = cli::CommandLineArguments::parse();

    // The saved settings pick the level unless one is given on the command line
    let level = args.log_level.map(LogLevel::from).unwrap_or_else(|| {
        AppSettings::load_from_default_path()
            .map(|settings| settings.log_level)
            .unwrap_or_default()
    });
    env_logger::Builder::new()
        .filter_level(level.to_level_filter())
        .format_timestamp(None)
        .init();

    match native::run(args.command) {
        Ok(()) => std::process::ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::ExitCode::FAILURE
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
mod native {
    use std::path::Path;

    use segment_designer::grouping::pattern_keys;
    use segment_designer::preset::{load_preset, load_settings, reformat_json};
    use segment_designer::{
        AppSettings, PresetError, SegmentGroup, assign_color, find_exact_groups, redundant_segments,
        segment_palette,
    };

    use crate::cli::{ColorFormat, Command};

    pub fn run(command: Command) -> Result<(), PresetError> {
        match command {
            Command::Palette { segments, format } => {
                print_palette(segments, format);
                Ok(())
            }
            Command::Groups { preset } => {
                let table = load_preset(&preset)?;
                let groups = find_exact_groups(&table);
                log::debug!("Pattern keys: {:?}", pattern_keys(&table));
                print_groups(&groups);
                Ok(())
            }
            Command::Check { settings } => {
                let path = match settings {
                    Some(path) => path,
                    None => AppSettings::default_path().ok_or_else(|| {
                        PresetError::invalid_preset("no settings path given and no config directory")
                    })?,
                };
                check(&path).map(|_| ())
            }
            Command::Init { preset, segments } => {
                initial_settings(preset.as_deref(), segments)?.save_to_default_path()
            }
            Command::Format { file, in_place } => {
                if let Some(formatted) = format_file(&file, in_place)? {
                    println!("{}", formatted);
                }
                Ok(())
            }
        }
    }

    fn print_palette(segments: i64, format: ColorFormat) {
        if segments <= 0 {
            log::warn!("No segments; fallback color is {:?}", assign_color(segments, 0));
        }
        for (i, color) in segment_palette(segments).into_iter().enumerate() {
            match format {
                ColorFormat::Hex => println!("{:>3} {}", i, color.to_hex()),
                ColorFormat::Rgba => {
                    println!("{:>3} {} {} {} {}", i, color.r, color.g, color.b, color.a)
                }
            }
        }
    }

    fn print_groups(groups: &[SegmentGroup]) {
        if groups.is_empty() {
            println!("All segments are distinguishable");
            return;
        }
        for group in groups {
            let members: Vec<String> = group.members().iter().map(usize::to_string).collect();
            println!(
                "segments {} are identical (keep {})",
                members.join(", "),
                group.representative()
            );
        }
    }

    /// Settings for `init`: the preset's rows and width, unless `segments`
    /// overrides the width.
    pub fn initial_settings(
        preset: Option<&Path>,
        segments: Option<i64>,
    ) -> Result<AppSettings, PresetError> {
        let mut settings = AppSettings::default();
        if let Some(preset) = preset {
            settings.truth_table = load_preset(preset)?;
            if !settings.truth_table.is_empty() {
                settings.num_segments = i64::try_from(settings.truth_table.segment_count())
                    .map_err(|_| PresetError::invalid_preset("preset rows are too long"))?;
            }
        }
        if let Some(segments) = segments {
            settings.num_segments = segments;
        }
        Ok(settings)
    }

    /// Reformat `file`. Returns the text when it should be printed rather than
    /// written back.
    pub fn format_file(file: &Path, in_place: bool) -> Result<Option<String>, PresetError> {
        let json = std::fs::read_to_string(file)?;
        let formatted = reformat_json(&json)?;
        if in_place {
            std::fs::write(file, formatted)?;
            log::info!("Formatted {:?}", file);
            Ok(None)
        } else {
            Ok(Some(formatted))
        }
    }

    /// Report on a settings file. Rows that don't match `numSegments` fail the
    /// check.
    pub fn check(path: &Path) -> Result<AppSettings, PresetError> {
        let settings = load_settings(path)?;

        println!(
            "{} segments, {} labels",
            settings.num_segments,
            settings.truth_table.len()
        );
        let mismatches = settings.row_length_mismatches();
        for (label, len) in &mismatches {
            println!(
                "row '{}' has {} entries, expected {}",
                label, len, settings.num_segments
            );
        }
        print_groups(&find_exact_groups(&settings.truth_table));
        let redundant = redundant_segments(&settings.truth_table);
        if !redundant.is_empty() {
            println!("{} redundant segment(s): {:?}", redundant.len(), redundant);
        }

        if !mismatches.is_empty() {
            return Err(PresetError::invalid_preset(format!(
                "{} row(s) do not match numSegments",
                mismatches.len()
            )));
        }
        Ok(settings)
    }

}

// WASM doesn't use main(), it uses wasm_bindgen's start function
#[cfg(target_arch = "wasm32")]
fn main() {}
