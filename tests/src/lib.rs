// Copyright (c) 2026 OverTheFlow and Contributors
//
// This Source Code Form is subject to the terms of the Mozilla Public License, v. 2.0.
// If a copy of the MPL was not distributed with this file, You can obtain one at
// https://mozilla.org/MPL/2.0/.

#[cfg(unix)]
mod pipeline;

#[cfg(unix)]
pub mod utils {
    use std::fs;
    use std::io;
    use std::os::unix::fs::PermissionsExt;
    use std::path::PathBuf;

    use tempfile::TempDir;

    /// A stand-in for the external HTTP probe: a shell script that logs
    /// its invocations to a file inside its own tempdir and exits with a
    /// scripted status. Dropping it removes the tempdir.
    pub struct StubProbe {
        _dir: TempDir,
        pub path: PathBuf,
        pub log: PathBuf,
    }

    impl StubProbe {
        /// Appends one `run` line per invocation, then exits `code`.
        pub fn counting(code: i32) -> io::Result<Self> {
            Self::from_body(|log| format!("echo run >> \"{log}\"\nexit {code}\n"))
        }

        /// Appends every argument it receives, then exits 0.
        pub fn recording() -> io::Result<Self> {
            Self::from_body(|log| format!("printf '%s\\n' \"$@\" >> \"{log}\"\nexit 0\n"))
        }

        /// Succeeds `limit` times, then exits `code` on every later call.
        pub fn failing_after(limit: usize, code: i32) -> io::Result<Self> {
            Self::from_body(|log| {
                format!(
                    "echo run >> \"{log}\"\n\
                     if [ \"$(wc -l < \"{log}\")\" -gt {limit} ]; then\n\
                     \x20 exit {code}\n\
                     fi\n\
                     exit 0\n"
                )
            })
        }

        fn from_body(body: impl Fn(&str) -> String) -> io::Result<Self> {
            let dir = TempDir::new()?;
            let log = dir.path().join("invocations.log");
            let path = dir.path().join("curl");

            let script = format!("#!/bin/sh\n{}", body(&log.display().to_string()));
            fs::write(&path, script)?;
            fs::set_permissions(&path, fs::Permissions::from_mode(0o755))?;

            Ok(Self {
                _dir: dir,
                path,
                log,
            })
        }

        /// Lines logged so far; zero when the stub was never spawned.
        pub fn invocation_count(&self) -> usize {
            fs::read_to_string(&self.log)
                .map(|contents| contents.lines().count())
                .unwrap_or(0)
        }

        /// Everything the stub recorded, for argument assertions.
        pub fn recorded(&self) -> String {
            fs::read_to_string(&self.log).unwrap_or_default()
        }
    }
}
