use crate::core::{Error, Result, SourceFile};
use ignore::WalkBuilder;
use std::path::{Path, PathBuf};

/// Extensions treated as Ruby source.
const RUBY_EXTENSIONS: [&str; 2] = ["rb", "rake"];

pub struct FileWalker {
    root: PathBuf,
    ignore_patterns: Vec<String>,
}

impl FileWalker {
    pub fn new(root: PathBuf) -> Self {
        Self {
            root,
            ignore_patterns: vec![],
        }
    }

    pub fn with_ignore_patterns(mut self, patterns: Vec<String>) -> Self {
        self.ignore_patterns = patterns;
        self
    }

    /// Enumerate the project's Ruby files, honoring .gitignore.
    pub fn walk(&self) -> Result<Vec<SourceFile>> {
        let mut files = Vec::new();
        let walker = WalkBuilder::new(&self.root)
            .hidden(false)
            .git_ignore(true)
            .build();

        for entry in walker {
            let entry = entry
                .map_err(|e| Error::file_system(e.to_string(), self.root.clone()))?;
            let path = entry.path();

            if path.is_file() && self.should_process(path) {
                files.push(SourceFile::from_path(path.to_path_buf()));
            }
        }

        // Walk order varies by platform; keep output deterministic.
        files.sort_by(|a, b| a.path.cmp(&b.path));
        Ok(files)
    }

    fn should_process(&self, path: &Path) -> bool {
        let Some(ext) = path.extension() else {
            return false;
        };
        let ext_str = ext.to_string_lossy();
        if !RUBY_EXTENSIONS.contains(&ext_str.as_ref()) {
            return false;
        }

        let path_str = path.to_string_lossy();
        for pattern in &self.ignore_patterns {
            if glob::Pattern::new(pattern)
                .map(|p| p.matches(&path_str))
                .unwrap_or(false)
            {
                return false;
            }
        }

        true
    }
}

/// Enumerate the Ruby source files under `root`.
pub fn find_ruby_files(root: &Path, ignore_patterns: Vec<String>) -> Result<Vec<SourceFile>> {
    FileWalker::new(root.to_path_buf())
        .with_ignore_patterns(ignore_patterns)
        .walk()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn touch(dir: &Path, rel: &str) {
        let path = dir.join(rel);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, "").unwrap();
    }

    #[test]
    fn finds_only_ruby_sources() {
        let dir = TempDir::new().unwrap();
        touch(dir.path(), "app/models/user.rb");
        touch(dir.path(), "lib/tasks/deploy.rake");
        touch(dir.path(), "README.md");
        touch(dir.path(), "config/database.yml");

        let files = find_ruby_files(dir.path(), vec![]).unwrap();
        let names: Vec<_> = files.iter().map(|f| f.name.as_str()).collect();
        assert_eq!(names, vec!["user.rb", "deploy.rake"]);
    }

    #[test]
    fn ignore_patterns_filter_matches() {
        let dir = TempDir::new().unwrap();
        touch(dir.path(), "app/models/user.rb");
        touch(dir.path(), "vendor/gems/rails.rb");

        let files = find_ruby_files(dir.path(), vec!["**/vendor/**".to_string()]).unwrap();
        assert_eq!(files.len(), 1);
        assert_eq!(files[0].name, "user.rb");
    }

    #[test]
    fn results_are_sorted_by_path() {
        let dir = TempDir::new().unwrap();
        touch(dir.path(), "b.rb");
        touch(dir.path(), "a.rb");

        let files = find_ruby_files(dir.path(), vec![]).unwrap();
        assert!(files[0].path < files[1].path);
    }
}
