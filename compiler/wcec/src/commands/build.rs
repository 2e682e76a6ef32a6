//! The `build` command: compile one or more files to C.

use std::io::Write;
use std::path::{Path, PathBuf};

use rayon::prelude::*;
use tracing::debug;
use wce_codegen::CodegenConfig;
use wce_diagnostic::ColorMode;

use super::{compile_path, report};
use crate::{CompileError, CompileOptions};

/// Output path that means "write to stdout".
const STDOUT: &str = "-";

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BuildOptions {
    pub inputs: Vec<PathBuf>,
    /// Explicit output for a single input; `-` is stdout.
    pub output: Option<PathBuf>,
    pub emit_on_error: bool,
    pub color: ColorMode,
    pub codegen: CodegenConfig,
}

impl BuildOptions {
    /// Where the code for `input` goes: `-o` if given, else `<input>.c`.
    pub fn output_for(&self, input: &Path) -> PathBuf {
        self.output
            .clone()
            .unwrap_or_else(|| input.with_extension("c"))
    }
}

/// Parse the arguments following `build`.
pub fn parse_build_args(args: &[String]) -> Result<BuildOptions, String> {
    let mut options = BuildOptions::default();
    let mut i = 0;
    while i < args.len() {
        let arg = args[i].as_str();
        if arg == "-o" {
            let Some(path) = args.get(i + 1) else {
                return Err("-o requires a path".to_owned());
            };
            options.output = Some(PathBuf::from(path));
            i += 2;
            continue;
        }

        if arg == "--emit-on-error" {
            options.emit_on_error = true;
        } else if let Some(value) = arg.strip_prefix("--color=") {
            options.color = ColorMode::from_flag(value)
                .ok_or_else(|| format!("invalid --color value '{value}' (auto, always, never)"))?;
        } else if let Some(value) = arg.strip_prefix("--indent=") {
            options.codegen.indent_width = value
                .parse()
                .map_err(|_| format!("invalid --indent value '{value}'"))?;
        } else if arg.starts_with('-') && arg != STDOUT {
            return Err(format!("unknown option '{arg}'"));
        } else {
            options.inputs.push(PathBuf::from(arg));
        }
        i += 1;
    }

    if options.inputs.is_empty() {
        return Err("no input files".to_owned());
    }
    if options.output.is_some() && options.inputs.len() > 1 {
        return Err("-o can only be used with a single input file".to_owned());
    }
    Ok(options)
}

/// Compile every input in parallel, then report and write in input order.
pub fn build_files(options: &BuildOptions) -> bool {
    let results: Vec<_> = options
        .inputs
        .par_iter()
        .map(|input| {
            let compile_options = CompileOptions {
                file_name: input.display().to_string(),
                codegen: options.codegen.clone(),
                emit_on_error: options.emit_on_error,
            };
            (input, compile_path(input, &compile_options))
        })
        .collect();

    let mut ok = true;
    for (input, result) in results {
        let output = match result {
            Ok(output) => output,
            Err(err) => {
                eprintln!("error: {err}");
                ok = false;
                continue;
            }
        };

        report(&output.diagnostics, options.color);
        if output.has_errors() {
            ok = false;
        }

        if let Some(code) = output.code {
            let target = options.output_for(input);
            debug!(input = %input.display(), target = %target.display(), "writing");
            if let Err(err) = write_output(&target, &code) {
                eprintln!("error: {err}");
                ok = false;
            }
        }
    }
    ok
}

fn write_output(target: &Path, code: &str) -> Result<(), CompileError> {
    let result = if target.as_os_str() == STDOUT {
        let mut stdout = std::io::stdout().lock();
        stdout.write_all(code.as_bytes()).and_then(|()| stdout.flush())
    } else {
        std::fs::write(target, code)
    };
    result.map_err(|source| CompileError::Write {
        target: target.display().to_string(),
        source,
    })
}

#[cfg(test)]
#[allow(clippy::unwrap_used, reason = "Tests can panic")]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| (*s).to_owned()).collect()
    }

    #[test]
    fn single_input_defaults() {
        let options = parse_build_args(&args(&["ui.wce"])).unwrap();
        assert_eq!(options.inputs, vec![PathBuf::from("ui.wce")]);
        assert_eq!(options.output_for(Path::new("ui.wce")), PathBuf::from("ui.c"));
        assert_eq!(options.codegen.indent_width, 4);
        assert!(!options.emit_on_error);
    }

    #[test]
    fn flags_in_any_order() {
        let options = parse_build_args(&args(&[
            "--color=never",
            "ui.wce",
            "-o",
            "-",
            "--emit-on-error",
            "--indent=2",
        ]))
        .unwrap();
        assert_eq!(options.output, Some(PathBuf::from("-")));
        assert_eq!(options.color, ColorMode::Never);
        assert_eq!(options.codegen.indent_width, 2);
        assert!(options.emit_on_error);
    }

    #[test]
    fn rejects_bad_arguments() {
        assert!(parse_build_args(&args(&[])).is_err());
        assert!(parse_build_args(&args(&["a.wce", "-o"])).is_err());
        assert!(parse_build_args(&args(&["a.wce", "b.wce", "-o", "x.c"])).is_err());
        assert!(parse_build_args(&args(&["a.wce", "--color=sometimes"])).is_err());
        assert!(parse_build_args(&args(&["a.wce", "--indent=wide"])).is_err());
        assert!(parse_build_args(&args(&["a.wce", "--release"])).is_err());
    }

    #[test]
    fn multiple_inputs_get_their_own_outputs() {
        let options = parse_build_args(&args(&["a.wce", "dir/b.wce"])).unwrap();
        assert_eq!(options.output_for(Path::new("dir/b.wce")), PathBuf::from("dir/b.c"));
    }
}
