//
//  Copyright (C) 2022-2024  Chase Ruskin
//
//  This program is free software: you can redistribute it and/or modify
//  it under the terms of the GNU General Public License as published by
//  the Free Software Foundation, either version 3 of the License, or
//  (at your option) any later version.
//
//  This program is distributed in the hope that it will be useful,
//  but WITHOUT ANY WARRANTY; without even the implied warranty of
//  MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
//  GNU General Public License for more details.
//
//  You should have received a copy of the GNU General Public License
//  along with this program.  If not, see <http://www.gnu.org/licenses/>.
//

//! Lexical renaming of a module declaration inside a single HDL file.
//!
//! Lines are classified purely by regular expressions:
//!
//! - a declaration line begins (after whitespace) with `module` or
//!   `macromodule`, whitespace, then the old identifier as a whole token
//! - a closing-marker line is `endmodule` followed only by a `//` comment whose
//!   text is exactly the old identifier
//!
//! No brackets are balanced and no scopes are tracked, so every line in either
//! class is rewritten independently. Files are handled as raw bytes and never
//! need to be valid UTF-8.

use crate::util::filesystem;
use colored::Colorize;
use regex::bytes::Regex;
use std::fmt::Display;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Keywords that open a module.
pub const DECLARATION_KEYWORDS: [&str; 2] = ["module", "macromodule"];

/// Keyword that closes a module.
pub const CLOSING_KEYWORD: &str = "endmodule";

#[derive(Debug, thiserror::Error)]
pub enum RenameError {
    #[error("path {0:?} is a directory, not a file")]
    NotAFile(PathBuf),
    #[error("{0:?} is not a valid module identifier")]
    InvalidIdentifier(String),
    #[error("failed to build module pattern: {0}")]
    Pattern(#[from] regex::Error),
    #[error("failed to access {0:?}: {1}")]
    Io(PathBuf, #[source] io::Error),
}

/// Attaches `path` to an i/o error.
fn access(path: &Path) -> impl FnOnce(io::Error) -> RenameError + '_ {
    move |e| RenameError::Io(path.to_path_buf(), e)
}

/// The lexical category of a single line.
#[derive(Debug, PartialEq)]
pub enum LineClass {
    /// Declares the old module; holds the byte span of its identifier.
    Declaration { start: usize, end: usize },
    /// Closes a module with a comment naming the old module.
    ClosingMarker,
    Other,
}

/// Classifies lines against a fixed old identifier.
#[derive(Debug)]
pub struct LineClassifier {
    declaration: Regex,
    closing: Regex,
}

impl LineClassifier {
    pub fn new(old_name: &str) -> Result<Self, regex::Error> {
        let name = regex::escape(old_name);
        // escaped identifiers run until whitespace
        let boundary = match old_name.starts_with('\\') {
            true => r"(?:\s|$)",
            false => r"(?:(?-u:[^A-Za-z0-9_$])|$)",
        };
        Ok(Self {
            declaration: Regex::new(&format!(
                r"^\s*(?:{})\s+(?P<name>{}){}",
                DECLARATION_KEYWORDS.join("|"),
                name,
                boundary
            ))?,
            closing: Regex::new(&format!(r"^\s*{}\s*//\s*{}\s*$", CLOSING_KEYWORD, name))?,
        })
    }

    /// Categorizes `line`, which must not include its line terminator.
    pub fn classify(&self, line: &[u8]) -> LineClass {
        if let Some(caps) = self.declaration.captures(line) {
            if let Some(m) = caps.name("name") {
                return LineClass::Declaration {
                    start: m.start(),
                    end: m.end(),
                };
            }
        }
        match self.closing.is_match(line) {
            true => LineClass::ClosingMarker,
            false => LineClass::Other,
        }
    }
}

/// Checks `s` is a simple Verilog identifier or an escaped identifier
/// (a backslash followed by printable, non-whitespace ASCII).
pub fn is_identifier(s: &str) -> bool {
    if let Some(escaped) = s.strip_prefix('\\') {
        return escaped.is_empty() == false && escaped.bytes().all(|b| b.is_ascii_graphic());
    }
    let mut chars = s.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => (),
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '$')
}

/// Splits a line from its terminator (`\n`, `\r\n`, or nothing).
fn split_ending(line: &[u8]) -> (&[u8], &[u8]) {
    let body = if let Some(body) = line.strip_suffix(b"\r\n") {
        body
    } else if let Some(body) = line.strip_suffix(b"\n") {
        body
    } else {
        line
    };
    (body, &line[body.len()..])
}

#[derive(Debug, PartialEq)]
pub enum RenameOutcome {
    Renamed {
        file: PathBuf,
        old_name: String,
        new_name: String,
        backup: PathBuf,
        declarations: usize,
        closing_markers: usize,
    },
    NoMatch {
        file: PathBuf,
        old_name: String,
    },
    FileNotFound {
        file: PathBuf,
    },
}

impl RenameOutcome {
    pub fn is_match(&self) -> bool {
        matches!(self, Self::Renamed { .. })
    }
}

impl Display for RenameOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Renamed {
                file,
                old_name,
                new_name,
                backup,
                ..
            } => write!(
                f,
                "info: renamed module {:?} to {:?} in {}\ninfo: original saved as {}",
                old_name,
                new_name,
                file.display(),
                backup.display()
            ),
            Self::NoMatch { file, old_name } => write!(
                f,
                "{} no module named {:?} found in {}",
                "warning:".yellow(),
                old_name,
                file.display()
            ),
            Self::FileNotFound { file } => write!(
                f,
                "{} file {} does not exist",
                "error:".red(),
                file.display()
            ),
        }
    }
}

/// A request to rename one module inside one file.
#[derive(Debug, PartialEq)]
pub struct RenameJob {
    file: PathBuf,
    old_name: String,
    new_name: String,
}

impl RenameJob {
    pub fn new(file: PathBuf, old_name: &str, new_name: &str) -> Self {
        Self {
            file,
            old_name: old_name.to_string(),
            new_name: new_name.to_string(),
        }
    }

    /// Rewrites `contents`, returning the new bytes and the number of
    /// declaration and closing-marker lines changed.
    pub fn rewrite(&self, contents: &[u8]) -> Result<(Vec<u8>, usize, usize), RenameError> {
        let classifier = LineClassifier::new(&self.old_name)?;
        let new_name = self.new_name.as_bytes();
        let mut result = Vec::with_capacity(contents.len() + new_name.len());
        let mut declarations = 0;
        let mut closing_markers = 0;

        for line in contents.split_inclusive(|b| *b == b'\n') {
            let (body, ending) = split_ending(line);
            match classifier.classify(body) {
                LineClass::Declaration { start, end } => {
                    let rest = &body[end..];
                    result.extend_from_slice(&body[..start]);
                    result.extend_from_slice(new_name);
                    // an escaped identifier needs whitespace to end it
                    if self.new_name.starts_with('\\')
                        && rest.first().map_or(false, |b| b.is_ascii_whitespace() == false)
                    {
                        result.push(b' ');
                    }
                    result.extend_from_slice(rest);
                    result.extend_from_slice(ending);
                    declarations += 1;
                }
                LineClass::ClosingMarker => {
                    result.extend_from_slice(
                        format!("{} // {}", CLOSING_KEYWORD, self.new_name).as_bytes(),
                    );
                    result.extend_from_slice(ending);
                    closing_markers += 1;
                }
                LineClass::Other => result.extend_from_slice(line),
            }
        }
        Ok((result, declarations, closing_markers))
    }

    /// Performs the rename on disk.
    ///
    /// When at least one line changes, the original file is moved to its backup
    /// path and the rewritten bytes are written in its place with the original
    /// permissions. Otherwise the file is left untouched.
    pub fn run(&self) -> Result<RenameOutcome, RenameError> {
        if self.old_name.is_empty() || self.old_name.contains(char::is_whitespace) {
            return Err(RenameError::InvalidIdentifier(self.old_name.clone()));
        }
        if is_identifier(&self.new_name) == false {
            return Err(RenameError::InvalidIdentifier(self.new_name.clone()));
        }
        if self.file.exists() == false {
            return Ok(RenameOutcome::FileNotFound {
                file: self.file.clone(),
            });
        }
        if self.file.is_file() == false {
            return Err(RenameError::NotAFile(self.file.clone()));
        }

        let contents = fs::read(&self.file).map_err(access(&self.file))?;
        let (rewritten, declarations, closing_markers) = self.rewrite(&contents)?;

        if declarations + closing_markers == 0 {
            return Ok(RenameOutcome::NoMatch {
                file: self.file.clone(),
                old_name: self.old_name.clone(),
            });
        }

        let backup = filesystem::backup_path(&self.file);
        if backup.exists() == true {
            println!(
                "{} replacing existing backup {}",
                "warning:".yellow(),
                backup.display()
            );
        }
        let permissions = fs::metadata(&self.file)
            .map_err(access(&self.file))?
            .permissions();
        fs::rename(&self.file, &backup).map_err(access(&backup))?;
        fs::write(&self.file, rewritten).map_err(access(&self.file))?;
        fs::set_permissions(&self.file, permissions).map_err(access(&self.file))?;

        Ok(RenameOutcome::Renamed {
            file: self.file.clone(),
            old_name: self.old_name.clone(),
            new_name: self.new_name.clone(),
            backup,
            declarations,
            closing_markers,
        })
    }
}

#[cfg(test)]
mod test {
    use super::*;

    const ADDER: &str = "\
// simple adder
module adder(a,b,sum);
    input a, b;
    output sum;
    assign sum = a + b;
endmodule // adder
";

    fn job(file: &Path, old: &str, new: &str) -> RenameJob {
        RenameJob::new(file.to_path_buf(), old, new)
    }

    #[test]
    fn classify_lines() {
        let c = LineClassifier::new("adder").unwrap();
        assert_eq!(
            c.classify(b"module adder(a,b,sum);"),
            LineClass::Declaration { start: 7, end: 12 }
        );
        assert_eq!(
            c.classify(b"  macromodule   adder #(parameter W = 8) ("),
            LineClass::Declaration { start: 16, end: 21 }
        );
        assert_eq!(c.classify(b"module adder"), LineClass::Declaration { start: 7, end: 12 });
        assert_eq!(c.classify(b"endmodule // adder"), LineClass::ClosingMarker);
        assert_eq!(c.classify(b"\tendmodule//adder  "), LineClass::ClosingMarker);
        // whole identifiers only
        assert_eq!(c.classify(b"module adder_tb;"), LineClass::Other);
        assert_eq!(c.classify(b"module adders;"), LineClass::Other);
        assert_eq!(c.classify(b"module adder$x;"), LineClass::Other);
        // the keyword must lead the line
        assert_eq!(c.classify(b"// module adder"), LineClass::Other);
        assert_eq!(c.classify(b"adder u0 (.a(a), .b(b));"), LineClass::Other);
        // the comment must be exactly the identifier
        assert_eq!(c.classify(b"endmodule // adder core"), LineClass::Other);
        assert_eq!(c.classify(b"endmodule"), LineClass::Other);
        assert_eq!(c.classify(b"endmodule // adder2"), LineClass::Other);
    }

    #[test]
    fn classify_escaped_identifier() {
        let c = LineClassifier::new(r"\bus+if").unwrap();
        assert_eq!(
            c.classify(br"module \bus+if (a);"),
            LineClass::Declaration { start: 7, end: 14 }
        );
        assert_eq!(c.classify(br"endmodule // \bus+if"), LineClass::ClosingMarker);
        // the escaped identifier only ends at whitespace
        assert_eq!(c.classify(br"module \bus+if(a);"), LineClass::Other);
        assert_eq!(c.classify(br"module bus+if (a);"), LineClass::Other);
    }

    #[test]
    fn identifiers() {
        assert!(is_identifier("adder2"));
        assert!(is_identifier("_fft$64"));
        assert!(is_identifier(r"\bus+if"));
        assert_eq!(is_identifier("2adder"), false);
        assert_eq!(is_identifier("add er"), false);
        assert_eq!(is_identifier(""), false);
        assert_eq!(is_identifier(r"\"), false);
        assert_eq!(is_identifier(r"\bus if"), false);
    }

    #[test]
    fn rename_adder_scenario() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("foo.v");
        fs::write(&file, ADDER).unwrap();

        let outcome = job(&file, "adder", "adder2").run().unwrap();
        assert_eq!(
            outcome,
            RenameOutcome::Renamed {
                file: file.clone(),
                old_name: "adder".to_string(),
                new_name: "adder2".to_string(),
                backup: dir.path().join("foo.v.bak"),
                declarations: 1,
                closing_markers: 1,
            }
        );
        assert_eq!(
            fs::read_to_string(dir.path().join("foo.v.bak")).unwrap(),
            ADDER
        );
        assert_eq!(
            fs::read_to_string(&file).unwrap(),
            ADDER
                .replace("module adder(", "module adder2(")
                .replace("endmodule // adder", "endmodule // adder2")
        );
    }

    #[test]
    fn other_lines_are_unchanged() {
        let job = RenameJob::new(PathBuf::from("unused.v"), "adder", "adder2");
        let src = b"module adder; // module adder\r\n  adder u0();\r\nendmodule   //   adder\r\nendmodule // adder";
        let (out, decls, closes) = job.rewrite(src).unwrap();
        assert_eq!(decls, 1);
        assert_eq!(closes, 2);
        // only the declared identifier is replaced and line endings are kept
        assert_eq!(
            out,
            b"module adder2; // module adder\r\n  adder u0();\r\nendmodule // adder2\r\nendmodule // adder2"
        );
    }

    #[test]
    fn non_utf8_bytes_pass_through() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("foo.v");
        // latin-1 comment
        fs::write(&file, b"module adder(a);\n// caf\xe9\nendmodule // adder\n").unwrap();

        let outcome = job(&file, "adder", "adder2").run().unwrap();
        assert!(outcome.is_match());
        assert_eq!(
            fs::read(&file).unwrap(),
            b"module adder2(a);\n// caf\xe9\nendmodule // adder2\n"
        );
        assert_eq!(
            fs::read(dir.path().join("foo.v.bak")).unwrap(),
            b"module adder(a);\n// caf\xe9\nendmodule // adder\n"
        );
    }

    #[test]
    fn every_matching_declaration_is_rewritten() {
        let job = RenameJob::new(PathBuf::from("unused.v"), "mux", "mux_2");
        let src = b"module mux;\nendmodule\n`ifdef ALT\nmodule mux;\nendmodule // mux\n`endif\n";
        let (out, decls, closes) = job.rewrite(src).unwrap();
        assert_eq!((decls, closes), (2, 1));
        assert_eq!(
            out,
            b"module mux_2;\nendmodule\n`ifdef ALT\nmodule mux_2;\nendmodule // mux_2\n`endif\n"
        );
    }

    #[test]
    fn escaped_names_are_renamed() {
        let job = RenameJob::new(PathBuf::from("unused.v"), r"\bus+if", "bus_if");
        let (out, decls, closes) = job
            .rewrite(b"module \\bus+if (a);\nendmodule // \\bus+if\n")
            .unwrap();
        assert_eq!((decls, closes), (1, 1));
        assert_eq!(out, b"module bus_if (a);\nendmodule // bus_if\n");

        // whitespace is inserted to end a new escaped identifier
        let job = RenameJob::new(PathBuf::from("unused.v"), "adder", r"\add.er");
        let (out, _, _) = job.rewrite(b"module adder(a);\n").unwrap();
        assert_eq!(out, b"module \\add.er (a);\n");
    }

    #[test]
    fn second_run_is_a_no_op() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("foo.v");
        fs::write(&file, ADDER).unwrap();

        job(&file, "adder", "adder2").run().unwrap();
        let renamed = fs::read(&file).unwrap();

        let outcome = job(&file, "adder", "adder2").run().unwrap();
        assert_eq!(outcome.is_match(), false);
        assert_eq!(fs::read(&file).unwrap(), renamed);
        assert_eq!(
            fs::read_to_string(dir.path().join("foo.v.bak")).unwrap(),
            ADDER
        );
        assert_eq!(dir.path().join("foo.v.bak.bak").exists(), false);
    }

    #[test]
    fn no_match_leaves_file_untouched() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("relu.v");
        fs::write(&file, "module relu(x, y);\nendmodule\n").unwrap();

        let outcome = job(&file, "adder", "adder2").run().unwrap();
        assert_eq!(
            outcome,
            RenameOutcome::NoMatch {
                file: file.clone(),
                old_name: "adder".to_string(),
            }
        );
        assert_eq!(
            fs::read_to_string(&file).unwrap(),
            "module relu(x, y);\nendmodule\n"
        );
        assert_eq!(dir.path().join("relu.v.bak").exists(), false);
    }

    #[test]
    fn missing_file_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("foo.v");
        let outcome = job(&file, "adder", "adder2").run().unwrap();
        assert_eq!(outcome, RenameOutcome::FileNotFound { file: file.clone() });
        assert_eq!(outcome.is_match(), false);
        assert_eq!(dir.path().join("foo.v.bak").exists(), false);
    }

    #[test]
    fn directory_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = job(dir.path(), "adder", "adder2").run().unwrap_err();
        assert!(matches!(err, RenameError::NotAFile(_)));
    }

    #[test]
    #[cfg(unix)]
    fn read_only_mode_survives() {
        use std::os::unix::fs::PermissionsExt;

        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("foo.v");
        fs::write(&file, ADDER).unwrap();
        fs::set_permissions(&file, fs::Permissions::from_mode(0o444)).unwrap();

        let outcome = job(&file, "adder", "adder2").run().unwrap();
        assert!(outcome.is_match());
        assert_eq!(fs::metadata(&file).unwrap().permissions().mode() & 0o777, 0o444);
        assert!(fs::read_to_string(&file).unwrap().contains("module adder2("));
    }

    #[test]
    fn invalid_name_is_rejected_before_writing() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("foo.v");
        fs::write(&file, ADDER).unwrap();

        let err = job(&file, "adder", "adder 2").run().unwrap_err();
        assert!(matches!(err, RenameError::InvalidIdentifier(_)));
        let err = job(&file, "", "adder2").run().unwrap_err();
        assert!(matches!(err, RenameError::InvalidIdentifier(_)));
        assert_eq!(fs::read_to_string(&file).unwrap(), ADDER);
        assert_eq!(dir.path().join("foo.v.bak").exists(), false);
    }

    #[test]
    fn display_outcomes() {
        colored::control::set_override(false);
        let outcome = RenameOutcome::NoMatch {
            file: PathBuf::from("foo.v"),
            old_name: "adder".to_string(),
        };
        assert_eq!(
            outcome.to_string(),
            "warning: no module named \"adder\" found in foo.v"
        );
        let outcome = RenameOutcome::FileNotFound {
            file: PathBuf::from("foo.v"),
        };
        assert_eq!(outcome.to_string(), "error: file foo.v does not exist");
    }
}
