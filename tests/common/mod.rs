//! Shared helpers for integration tests.

#![allow(dead_code)]

/// Write a fake Python interpreter that can stand in for the real one:
/// it answers `--version`, materializes a venv skeleton for `-m venv`, and
/// accepts/lists for `-m pip`.
#[cfg(unix)]
pub fn fake_python(dir: &std::path::Path) -> std::path::PathBuf {
    use std::fs;
    use std::os::unix::fs::PermissionsExt;

    let path = dir.join("python3");
    let script = concat!(
        "#!/bin/sh\n",
        "if [ \"$1\" = --version ]; then echo 'Python 3.12.1'; exit 0; fi\n",
        "if [ \"$1\" = -m ] && [ \"$2\" = venv ]; then\n",
        "  mkdir -p \"$3/bin\"\n",
        "  cp \"$0\" \"$3/bin/python\"\n",
        "  exit 0\n",
        "fi\n",
        "if [ \"$1\" = -m ] && [ \"$2\" = pip ]; then\n",
        "  if [ \"$3\" = list ]; then\n",
        "    echo 'Package    Version'\n",
        "    echo '---------- -------'\n",
        "    echo 'fastapi    0.111.0'\n",
        "    echo 'uvicorn    0.30.0'\n",
        "    echo 'pip        24.0'\n",
        "  fi\n",
        "  exit 0\n",
        "fi\n",
        "exit 0\n"
    );
    fs::write(&path, script).unwrap();
    fs::set_permissions(&path, fs::Permissions::from_mode(0o755)).unwrap();
    path
}
