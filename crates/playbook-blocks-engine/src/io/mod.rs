use std::fs;
use std::path::{Path, PathBuf};

/// File extensions treated as lessons.
pub const LESSON_EXTENSIONS: &[&str] = &["md", "mdx"];

#[derive(Debug, thiserror::Error)]
pub enum IoError {
    #[error("File not found: {0}")]
    NotFound(PathBuf),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Invalid lessons directory: {0}")]
    InvalidLessonsDir(String),
}

/// Read a lesson file and return its content
pub fn read_lesson(path: &Path) -> Result<String, IoError> {
    if !path.exists() {
        return Err(IoError::NotFound(path.to_path_buf()));
    }
    log::debug!("reading lesson {}", path.display());
    Ok(fs::read_to_string(path)?)
}

pub fn is_lesson(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| {
            LESSON_EXTENSIONS
                .iter()
                .any(|known| ext.eq_ignore_ascii_case(known))
        })
}

/// Scan for lesson files under `root`, sorted by path
pub fn scan_lessons(root: &Path) -> Result<Vec<PathBuf>, IoError> {
    validate_lessons_dir(root)?;

    let mut files = Vec::new();
    scan_directory_recursive(root, &mut files)?;
    files.sort();
    log::debug!("found {} lessons under {}", files.len(), root.display());
    Ok(files)
}

fn scan_directory_recursive(dir: &Path, files: &mut Vec<PathBuf>) -> Result<(), IoError> {
    for entry in fs::read_dir(dir)? {
        let path = entry?.path();

        if path.is_dir() {
            scan_directory_recursive(&path, files)?;
        } else if is_lesson(&path) {
            files.push(path);
        }
    }

    Ok(())
}

pub fn validate_lessons_dir(path: &Path) -> Result<(), IoError> {
    if !path.is_dir() {
        return Err(IoError::InvalidLessonsDir(format!(
            "{} is not a directory",
            path.display()
        )));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests::{create_test_file, create_test_lessons_dir};

    #[test]
    fn test_scan_lessons_finds_md_and_mdx() {
        let dir = create_test_lessons_dir();
        create_test_file(&dir, "b.mdx", "```terminal\n$ ls\n```");
        create_test_file(&dir, "a.md", "# Intro");
        create_test_file(&dir, "notes.txt", "not a lesson");
        create_test_file(&dir, "diagram.png", "fake image data");

        let files = scan_lessons(dir.path()).unwrap();

        let names: Vec<_> = files
            .iter()
            .map(|f| f.file_name().unwrap().to_string_lossy().into_owned())
            .collect();
        assert_eq!(names, vec!["a.md", "b.mdx"]);
    }

    #[test]
    fn test_scan_nested_directories() {
        let dir = create_test_lessons_dir();
        create_test_file(&dir, "root.md", "# Root");
        create_test_file(&dir, "module-1/incident.MD", "# Nested");

        let files = scan_lessons(dir.path()).unwrap();

        assert_eq!(files.len(), 2);
        assert!(files.iter().any(|f| f.ends_with("module-1/incident.MD")));
    }

    #[test]
    fn test_invalid_lessons_directory() {
        let result = scan_lessons(Path::new("/this/path/does/not/exist"));
        assert!(matches!(result, Err(IoError::InvalidLessonsDir(_))));

        let dir = create_test_lessons_dir();
        let file = create_test_file(&dir, "lesson.md", "");
        assert!(matches!(
            scan_lessons(&file),
            Err(IoError::InvalidLessonsDir(_))
        ));
    }

    #[test]
    fn test_read_lesson() {
        let dir = create_test_lessons_dir();
        let path = create_test_file(&dir, "lesson.md", "# Title\n\nBody");

        assert_eq!(read_lesson(&path).unwrap(), "# Title\n\nBody");
    }

    #[test]
    fn test_read_lesson_not_found() {
        let dir = create_test_lessons_dir();
        let result = read_lesson(&dir.path().join("missing.md"));
        assert!(matches!(result, Err(IoError::NotFound(_))));
    }
}
