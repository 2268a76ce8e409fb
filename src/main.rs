//! Arsenal weapon viewer.
//!
//! ```text
//! arsenal                  # default options
//! arsenal night.toml       # options from a TOML file
//! arsenal night            # preset from presets/night.toml
//! arsenal --schema         # print the options JSON schema
//! ```

use std::io::Write;
use std::path::{Path, PathBuf};

use arsenal::{ArsenalError, Options, Viewer};

const PRESETS_DIR: &str = "presets";

fn resolve_options_path(input: &str) -> Result<PathBuf, String> {
    let path = Path::new(input);
    if path.is_file() {
        return Ok(path.to_path_buf());
    }

    let preset = Path::new(PRESETS_DIR).join(format!("{input}.toml"));
    if preset.is_file() {
        return Ok(preset);
    }

    let available = Options::list_presets(Path::new(PRESETS_DIR));
    if available.is_empty() {
        Err(format!("Options file or preset not found: {input}"))
    } else {
        Err(format!(
            "Options file or preset not found: {input} (presets: {})",
            available.join(", ")
        ))
    }
}

fn load_options(arg: Option<&str>) -> Result<Options, String> {
    let Some(input) = arg else {
        return Ok(Options::default());
    };
    let path = resolve_options_path(input)?;
    Options::load(&path).map_err(|e| e.to_string())
}

fn run(options: Options) -> Result<(), ArsenalError> {
    Viewer::builder()
        .with_title("Arsenal")
        .with_options(options)
        .build()
        .run()
}

fn main() {
    env_logger::init();

    let arg = std::env::args().nth(1);

    if arg.as_deref() == Some("--schema") {
        let written = serde_json::to_string_pretty(&Options::json_schema())
            .map_err(|e| e.to_string())
            .and_then(|schema| {
                writeln!(std::io::stdout(), "{schema}")
                    .map_err(|e| e.to_string())
            });
        if let Err(e) = written {
            log::error!("Failed to write schema: {e}");
            std::process::exit(1);
        }
        return;
    }

    let options = match load_options(arg.as_deref()) {
        Ok(options) => options,
        Err(e) => {
            log::error!("{e}");
            std::process::exit(1);
        }
    };

    if let Err(e) = run(options) {
        log::error!("{e}");
        std::process::exit(1);
    }
}
