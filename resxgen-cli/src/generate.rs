use std::path::{Path, PathBuf};

use resxgen::{DiskFile, Error, Generator, ResourceModel};
use tracing::info;

/// Renders each input, writing files when `output_dir` is set and printing
/// to stdout otherwise.
pub fn run_generate(
    inputs: &[PathBuf],
    namespace: Option<&str>,
    output_dir: Option<&Path>,
) -> Result<(), Error> {
    match output_dir {
        Some(dir) => {
            let mut generator = Generator::new()
                .files(inputs)
                .out_dir(dir)
                .emit_rerun_directives(false);
            if let Some(namespace) = namespace {
                generator = generator.namespace(namespace);
            }
            for path in generator.run()? {
                info!(path = %path.display(), "wrote generated source");
                println!("{}", path.display());
            }
        }
        None => {
            for input in inputs {
                let file = DiskFile::new(input);
                let mut model = ResourceModel::from_source(Some(&file))?;
                if let Some(namespace) = namespace {
                    model.set_namespace(namespace);
                }
                print!("{}", model.render());
            }
        }
    }
    Ok(())
}
