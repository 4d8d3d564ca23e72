//! Turning resource files into generated sources.
//!
//! [`generate`] is the plain function a build host calls with its candidate
//! files. [`Generator`] wraps it for `build.rs` use: it reads files from disk,
//! writes `{namespace}.{className}.rs` into `OUT_DIR`, and tells Cargo to
//! rerun when an input changes.
//!
//! ```rust,no_run
//! // build.rs
//! resxgen::Generator::new()
//!     .namespace("app")
//!     .file("resources/Strings.resx")
//!     .run()?;
//! # Ok::<(), resxgen::Error>(())
//! ```

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::{
    error::Error,
    model::ResourceModel,
    source::{AdditionalFile, DiskFile},
    types::GeneratedSource,
};

const RESX_EXTENSION: &[u8] = b".resx";

/// Renders every `.resx` file among `files`, in input order.
///
/// Files with other extensions are skipped. `namespace` defaults to
/// [`DEFAULT_NAMESPACE`](crate::model::DEFAULT_NAMESPACE). Stops at the first
/// failing file.
pub fn generate<F: AdditionalFile>(
    files: &[F],
    namespace: Option<&str>,
) -> Result<Vec<GeneratedSource>, Error> {
    render_all(files.iter().filter(|f| is_resx(f.path())), namespace)
}

/// Whether `path` ends with `.resx`, ignoring ASCII case.
pub fn is_resx(path: &str) -> bool {
    let bytes = path.as_bytes();
    bytes.len() >= RESX_EXTENSION.len()
        && bytes[bytes.len() - RESX_EXTENSION.len()..].eq_ignore_ascii_case(RESX_EXTENSION)
}

fn render_all<'a, F, I>(files: I, namespace: Option<&str>) -> Result<Vec<GeneratedSource>, Error>
where
    F: AdditionalFile + 'a,
    I: Iterator<Item = &'a F>,
{
    files
        .map(|file| {
            let mut model = ResourceModel::from_source(Some(file))?;
            if let Some(namespace) = namespace {
                model.set_namespace(namespace);
            }
            let source = model.to_source();
            debug!(path = file.path(), key = %source.key, "generated resource source");
            Ok(source)
        })
        .collect()
}

/// Builder for generating resource sources from a build script.
#[derive(Debug, Clone)]
pub struct Generator {
    namespace: Option<String>,
    files: Vec<PathBuf>,
    out_dir: Option<PathBuf>,
    rerun_directives: bool,
}

impl Default for Generator {
    fn default() -> Self {
        Self::new()
    }
}

impl Generator {
    /// Creates a generator with no files that writes to `OUT_DIR`.
    pub fn new() -> Self {
        Self {
            namespace: None,
            files: Vec::new(),
            out_dir: None,
            rerun_directives: true,
        }
    }

    pub fn namespace(mut self, namespace: impl Into<String>) -> Self {
        self.namespace = Some(namespace.into());
        self
    }

    /// Adds one resource file. Every added file is rendered, whatever its
    /// extension.
    pub fn file<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.files.push(path.as_ref().to_path_buf());
        self
    }

    pub fn files<I, P>(mut self, paths: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: AsRef<Path>,
    {
        self.files
            .extend(paths.into_iter().map(|p| p.as_ref().to_path_buf()));
        self
    }

    /// Overrides the output directory. Defaults to `OUT_DIR`.
    pub fn out_dir<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.out_dir = Some(path.as_ref().to_path_buf());
        self
    }

    /// Whether to print `cargo:rerun-if-changed` for each input.
    pub fn emit_rerun_directives(mut self, emit: bool) -> Self {
        self.rerun_directives = emit;
        self
    }

    /// Renders all files and writes them out, returning the written paths.
    pub fn run(self) -> Result<Vec<PathBuf>, Error> {
        let out_dir = match self.out_dir {
            Some(dir) => dir,
            None => std::env::var_os("OUT_DIR")
                .map(PathBuf::from)
                .ok_or(Error::MissingOutDir)?,
        };
        std::fs::create_dir_all(&out_dir)?;

        let files: Vec<DiskFile> = self.files.iter().map(DiskFile::new).collect();
        if self.rerun_directives {
            for file in &files {
                println!("cargo:rerun-if-changed={}", file.as_path().display());
            }
        }

        let sources = render_all(files.iter(), self.namespace.as_deref())?;
        let mut written = Vec::with_capacity(sources.len());
        for source in sources {
            let path = out_dir.join(source.file_name());
            std::fs::write(&path, &source.text)?;
            written.push(path);
        }
        Ok(written)
    }
}
