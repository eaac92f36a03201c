//! Tests for the batch driver


use std::fs;
use std::path::{Path, PathBuf};

use crate::config::Config;

/// Write a well-formed .cor file with `count` records into `dir`
pub fn write_cor_file(dir: &Path, name: &str, count: usize) -> PathBuf {
    let mut contents = String::new();
    for i in 0..count {
        contents.push_str(&format!(
            "P{}\t20230101\t1200{:02}\t60.{}\tN\t24.{}\tE\t10.0\tM\tX\n",
            i, i, i, i
        ));
    }
    let path = dir.join(name);
    fs::write(&path, contents).unwrap();
    path
}

/// Config pointing at fresh temp input/output/scratch directories
pub fn test_config(input_files: Vec<PathBuf>, output_dir: &Path, scratch_root: &Path) -> Config {
    let mut config = Config::new(
        input_files,
        PathBuf::from("unused_dem.tif"),
        output_dir.to_path_buf(),
    );
    config.scratch_root = Some(scratch_root.to_path_buf());
    config
}
