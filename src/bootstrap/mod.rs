//! The environment-bootstrap procedure.
//!
//! Seven steps in a fixed sequence: runtime check, directory skeleton,
//! package markers, virtualenv, dependency install, env-file seed,
//! verification report. The runtime check is the only fatal gate; missing
//! manifests and templates are reported skips; subprocess failures in the
//! venv or install steps propagate and abort the remaining steps. Every
//! step is safe to repeat, so a re-run of the whole procedure is the
//! recovery path after a partial failure.

use crate::envfile::{self, SeedOutcome};
use crate::error::Result;
use crate::layout::{self, Materialized};
use crate::python::pip::{filter_installed, ManifestRole, Pip, EXPECTED_PACKAGES};
use crate::python::{PythonRuntime, Virtualenv, VENV_DIR};
use crate::ui::UserInterface;
use std::path::PathBuf;

/// Number of top-level bootstrap steps.
pub const TOTAL_STEPS: usize = 7;

/// Fixed instructions printed at the end of a successful run.
const NEXT_STEPS: &str = "\nNext steps:\n  1. Edit backend/.env with your credentials\n  2. Activate the environment: source backend/venv/bin/activate\n  3. Start the API: uvicorn app.main:app --reload";

/// Options controlling a bootstrap run.
#[derive(Debug, Clone, Default)]
pub struct BootstrapOptions {
    /// Explicit Python interpreter, bypassing PATH discovery.
    pub python: Option<PathBuf>,

    /// Provision the environment but leave pip untouched.
    pub skip_install: bool,
}

/// The bootstrap procedure for one project root.
pub struct Bootstrap {
    project_root: PathBuf,
    options: BootstrapOptions,
}

impl Bootstrap {
    /// Create a bootstrap for the given project root.
    pub fn new(project_root: PathBuf, options: BootstrapOptions) -> Self {
        Self {
            project_root,
            options,
        }
    }

    /// Execute all seven steps in order.
    pub fn run(&self, ui: &mut dyn UserInterface) -> Result<()> {
        // Step 1: the fatal gate. Nothing is created until the runtime
        // answers the version query.
        ui.show_step(1, TOTAL_STEPS, "Python runtime");
        let runtime = PythonRuntime::discover(self.options.python.as_deref())?;
        ui.success(&format!(
            "Python {} ({})",
            runtime.version(),
            runtime.path().display()
        ));

        ui.show_step(2, TOTAL_STEPS, "Directory skeleton");
        for (rel, outcome) in layout::materialize_dirs(&self.project_root)? {
            match outcome {
                Materialized::Created => ui.success(&format!("Created {}", rel)),
                Materialized::AlreadyPresent => ui.skipped(&format!("{} already present", rel)),
            }
        }

        ui.show_step(3, TOTAL_STEPS, "Package markers");
        for (rel, outcome) in layout::materialize_markers(&self.project_root)? {
            match outcome {
                Materialized::Created => ui.success(&format!("Created {}", rel)),
                Materialized::AlreadyPresent => ui.skipped(&format!("{} already present", rel)),
            }
        }

        ui.show_step(4, TOTAL_STEPS, "Virtual environment");
        let backend = layout::backend_root(&self.project_root);
        let mut spinner = ui.start_spinner("Creating virtualenv");
        let venv = match Virtualenv::provision(&runtime, &backend) {
            Ok(venv) => {
                spinner.finish_success(&format!("Virtualenv ready at backend/{}", VENV_DIR));
                venv
            }
            Err(e) => {
                spinner.finish_error("Virtualenv creation failed");
                return Err(e);
            }
        };

        ui.show_step(5, TOTAL_STEPS, "Dependencies");
        let quiet = !ui.output_mode().shows_command_output();
        let pip = Pip::new(&venv, &backend, quiet);
        if self.options.skip_install {
            ui.skipped("dependency install skipped (--skip-install)");
        } else {
            self.install_dependencies(&pip, ui)?;
        }

        ui.show_step(6, TOTAL_STEPS, "Environment file");
        match envfile::seed(&backend)? {
            SeedOutcome::Created => {
                ui.success("Created backend/.env from .env.example");
                ui.message("Reminder: edit backend/.env with your credentials");
            }
            SeedOutcome::LiveExists => ui.skipped(".env already exists — skipping"),
            SeedOutcome::TemplateMissing => ui.skipped(".env.example not found — skipping"),
        }

        ui.show_step(7, TOTAL_STEPS, "Verification");
        self.verification_report(&runtime, &pip, ui);

        ui.message(NEXT_STEPS);
        ui.success("Bootstrap complete!");
        Ok(())
    }

    /// Step 5 body: upgrade pip, then install each manifest that exists.
    fn install_dependencies(&self, pip: &Pip<'_>, ui: &mut dyn UserInterface) -> Result<()> {
        let mut spinner = ui.start_spinner("Upgrading pip");
        match pip.upgrade_self() {
            Ok(()) => spinner.finish_success("pip upgraded"),
            Err(e) => {
                spinner.finish_error("pip upgrade failed");
                return Err(e);
            }
        }

        let backend = layout::backend_root(&self.project_root);
        for role in ManifestRole::ALL {
            let manifest = backend.join(role.filename());
            if !manifest.is_file() {
                ui.skipped(&format!("{} not found — skipping", role.filename()));
                continue;
            }

            let mut spinner =
                ui.start_spinner(&format!("Installing {} dependencies", role.label()));
            match pip.install_manifest(role) {
                Ok(()) => spinner.finish_success(&format!("Installed {}", role.filename())),
                Err(e) => {
                    spinner.finish_error(&format!("Install failed for {}", role.filename()));
                    return Err(e);
                }
            }
        }

        Ok(())
    }

    /// Step 7 body: print the runtime version and the filtered package list.
    ///
    /// Purely observational. Zero matches is fine, and a listing failure is
    /// downgraded to a warning so a completed bootstrap is never failed by
    /// its own sanity check.
    fn verification_report(&self, runtime: &PythonRuntime, pip: &Pip<'_>, ui: &mut dyn UserInterface) {
        ui.message(&format!("Python {}", runtime.version()));

        match pip.list_installed() {
            Ok(lines) => {
                for line in filter_installed(&lines, &EXPECTED_PACKAGES) {
                    ui.message(&line);
                }
            }
            Err(e) => ui.warning(&format!("package listing unavailable: {}", e)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::GroundworkError;
    use crate::ui::MockUI;
    use std::fs;
    use std::path::Path;
    use tempfile::TempDir;

    /// Write a minimal fake interpreter good enough for the whole procedure.
    #[cfg(unix)]
    fn fake_python(dir: &Path) -> PathBuf {
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

    #[cfg(unix)]
    fn run_bootstrap(project: &Path, python: PathBuf) -> MockUI {
        let mut ui = MockUI::new();
        let bootstrap = Bootstrap::new(
            project.to_path_buf(),
            BootstrapOptions {
                python: Some(python),
                skip_install: false,
            },
        );
        bootstrap.run(&mut ui).unwrap();
        ui
    }

    #[cfg(unix)]
    #[test]
    fn fresh_checkout_scenario() {
        let temp = TempDir::new().unwrap();
        let python = fake_python(temp.path());
        let project = temp.path().join("project");
        fs::create_dir_all(&project).unwrap();

        let ui = run_bootstrap(&project, python);

        for rel in layout::PROJECT_DIRS {
            assert!(project.join(rel).is_dir(), "{} missing", rel);
        }
        for rel in layout::PACKAGE_MARKERS {
            assert!(project.join(rel).is_file(), "{} missing", rel);
        }
        assert!(project.join("backend/venv/bin/python").is_file());

        assert!(ui.has_skip("requirements.txt not found — skipping"));
        assert!(ui.has_skip("requirements-dev.txt not found — skipping"));
        assert!(ui.has_skip(".env.example not found — skipping"));
        assert!(ui.has_success("Bootstrap complete!"));
        assert!(ui.has_message("Python 3.12.1"));
        assert!(ui.has_message("fastapi"));
        assert_eq!(ui.steps().len(), TOTAL_STEPS);
    }

    #[cfg(unix)]
    #[test]
    fn second_run_reports_everything_present() {
        let temp = TempDir::new().unwrap();
        let python = fake_python(temp.path());
        let project = temp.path().join("project");
        fs::create_dir_all(&project).unwrap();

        run_bootstrap(&project, python.clone());
        let ui = run_bootstrap(&project, python);

        assert!(ui.has_skip("backend/app/core already present"));
        assert!(ui.has_skip("backend/app/__init__.py already present"));
        assert!(ui.has_success("Bootstrap complete!"));
    }

    #[cfg(unix)]
    #[test]
    fn live_env_file_survives_rerun() {
        let temp = TempDir::new().unwrap();
        let python = fake_python(temp.path());
        let project = temp.path().join("project");
        fs::create_dir_all(project.join("backend")).unwrap();
        fs::write(project.join("backend/.env.example"), "KEY=placeholder\n").unwrap();

        let ui = run_bootstrap(&project, python.clone());
        assert!(ui.has_success("Created backend/.env from .env.example"));
        assert!(ui.has_message("Reminder: edit backend/.env"));

        fs::write(project.join("backend/.env"), "KEY=real\n").unwrap();
        let ui = run_bootstrap(&project, python);

        assert!(ui.has_skip(".env already exists — skipping"));
        let live = fs::read_to_string(project.join("backend/.env")).unwrap();
        assert_eq!(live, "KEY=real\n");
    }

    #[cfg(unix)]
    #[test]
    fn present_manifest_is_installed() {
        let temp = TempDir::new().unwrap();
        let python = fake_python(temp.path());
        let project = temp.path().join("project");
        fs::create_dir_all(project.join("backend")).unwrap();
        fs::write(project.join("backend/requirements.txt"), "fastapi\n").unwrap();

        let ui = run_bootstrap(&project, python);

        assert!(ui
            .spinners()
            .iter()
            .any(|s| s.contains("production dependencies")));
        assert!(ui.has_skip("requirements-dev.txt not found — skipping"));
    }

    #[cfg(unix)]
    #[test]
    fn skip_install_leaves_pip_untouched() {
        let temp = TempDir::new().unwrap();
        let python = fake_python(temp.path());
        let project = temp.path().join("project");
        fs::create_dir_all(project.join("backend")).unwrap();
        fs::write(project.join("backend/requirements.txt"), "fastapi\n").unwrap();

        let mut ui = MockUI::new();
        let bootstrap = Bootstrap::new(
            project.clone(),
            BootstrapOptions {
                python: Some(python),
                skip_install: true,
            },
        );
        bootstrap.run(&mut ui).unwrap();

        assert!(ui.has_skip("dependency install skipped"));
        assert!(!ui.spinners().iter().any(|s| s.contains("Upgrading pip")));
    }

    #[test]
    fn fatal_gate_creates_nothing() {
        let temp = TempDir::new().unwrap();
        let project = temp.path().join("project");
        fs::create_dir_all(&project).unwrap();

        let mut ui = MockUI::new();
        let bootstrap = Bootstrap::new(
            project.clone(),
            BootstrapOptions {
                python: Some(PathBuf::from("/nonexistent/python3")),
                skip_install: false,
            },
        );
        let result = bootstrap.run(&mut ui);

        assert!(matches!(
            result,
            Err(GroundworkError::RuntimeCheckFailed { .. })
        ));
        assert!(!project.join("backend").exists());
        assert!(!project.join("docs").exists());
    }
}
