#[cfg(test)]
mod fixture;
pub use fixture::Fixture;

#[cfg(test)]
mod plot_runner;
pub use plot_runner::PlotRunnerBuilder;

/// List every file of `dir` ending with `extension`.
#[macro_export]
macro_rules! files_with_extension {
    ($dir:expr, $extension:expr) => {
        std::fs::read_dir($dir)
            .unwrap_or_else(|_| panic!("Failed to read {:?}", $dir))
            .filter_map(|entry| entry.ok().map(|e| e.path()))
            .filter(|path| path.extension() == Some(std::ffi::OsStr::new($extension)))
            .collect::<Vec<std::path::PathBuf>>()
    };
}
