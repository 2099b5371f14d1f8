//! 경로 분류 모듈
//!
//! 작업 목록의 경로가 파일인지 폴더인지 판별하고, 폴더라면 바로 아래
//! 항목 중 처리 대상 파일만 골라냅니다. 하위 폴더로 내려가지 않습니다.

use std::io;
use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::error::{DecafError, Result};
use crate::pattern::EligibilityFilter;

/// 경로 종류
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    File,
    Directory,
}

/// 파일 시스템 접근 포트
pub trait FileSystem {
    /// 경로 종류 조회 (심볼릭 링크는 따라감)
    fn stat(&self, path: &Path) -> io::Result<EntryKind>;

    /// 폴더 바로 아래 항목의 전체 경로를 이름 순으로 나열
    fn list_dir(&self, path: &Path) -> io::Result<Vec<PathBuf>>;

    fn read_to_string(&self, path: &Path) -> io::Result<String>;

    /// 파일 전체를 덮어쓰기
    fn write(&self, path: &Path, contents: &str) -> io::Result<()>;
}

/// 로컬 디스크 파일 시스템
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalFs;

impl FileSystem for LocalFs {
    fn stat(&self, path: &Path) -> io::Result<EntryKind> {
        let metadata = std::fs::metadata(path)?;
        Ok(if metadata.is_dir() {
            EntryKind::Directory
        } else {
            EntryKind::File
        })
    }

    fn list_dir(&self, path: &Path) -> io::Result<Vec<PathBuf>> {
        WalkDir::new(path)
            .min_depth(1)
            .max_depth(1)
            .sort_by_file_name()
            .into_iter()
            .map(|entry| entry.map(|e| e.into_path()).map_err(io::Error::from))
            .collect()
    }

    fn read_to_string(&self, path: &Path) -> io::Result<String> {
        std::fs::read_to_string(path)
    }

    fn write(&self, path: &Path, contents: &str) -> io::Result<()> {
        std::fs::write(path, contents)
    }
}

/// 분류 결과
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Classified {
    File,
    /// 처리 대상으로 인정된 바로 아래 항목 (나열 순서 유지)
    Directory(Vec<PathBuf>),
}

/// 경로 하나를 분류
///
/// # Arguments
/// * `fs` - 파일 시스템
/// * `filter` - 폴더 항목에 적용할 파일 이름 필터
/// * `path` - 분류할 경로
///
/// # Returns
/// 분류 결과 또는 `Stat` / `ListDirectory` 에러
pub fn classify<F: FileSystem + ?Sized>(
    fs: &F,
    filter: &EligibilityFilter,
    path: &Path,
) -> Result<Classified> {
    let kind = fs.stat(path).map_err(|source| DecafError::Stat {
        path: path.to_path_buf(),
        source,
    })?;

    if kind == EntryKind::File {
        return Ok(Classified::File);
    }

    let children = fs
        .list_dir(path)
        .map_err(|source| DecafError::ListDirectory {
            path: path.to_path_buf(),
            source,
        })?
        .into_iter()
        .filter(|child| {
            child
                .file_name()
                .and_then(|s| s.to_str())
                .map(|s| filter.matches(s))
                .unwrap_or(false)
        })
        .collect();

    Ok(Classified::Directory(children))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::InputKind;
    use std::fs;
    use tempfile::TempDir;

    fn touch(dir: &Path, name: &str) -> PathBuf {
        let path = dir.join(name);
        fs::write(&path, "").unwrap();
        path
    }

    #[test]
    fn test_classify_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = touch(temp_dir.path(), "a.coffee");
        let filter = EligibilityFilter::for_kind(InputKind::Convert);

        assert_eq!(classify(&LocalFs, &filter, &path).unwrap(), Classified::File);
    }

    #[test]
    fn test_classify_file_ignores_filter() {
        // 명시적으로 넘긴 파일은 확장자와 상관없이 처리 대상입니다.
        let temp_dir = TempDir::new().unwrap();
        let path = touch(temp_dir.path(), "notes.txt");
        let filter = EligibilityFilter::for_kind(InputKind::Convert);

        assert_eq!(classify(&LocalFs, &filter, &path).unwrap(), Classified::File);
    }

    #[test]
    fn test_classify_directory_filters_and_sorts() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();
        touch(root, "b.coffee");
        touch(root, "a.litcoffee");
        touch(root, "c.coffee.md");
        touch(root, "d.js");
        touch(root, "README.md");
        fs::create_dir(root.join("nested")).unwrap();
        touch(&root.join("nested"), "deep.coffee");

        let filter = EligibilityFilter::for_kind(InputKind::Convert);
        let classified = classify(&LocalFs, &filter, root).unwrap();

        assert_eq!(
            classified,
            Classified::Directory(vec![
                root.join("a.litcoffee"),
                root.join("b.coffee"),
                root.join("c.coffee.md"),
            ])
        );
    }

    #[test]
    fn test_classify_directory_modernize() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();
        touch(root, "a.coffee");
        touch(root, "b.js");

        let filter = EligibilityFilter::for_kind(InputKind::Modernize);
        let classified = classify(&LocalFs, &filter, root).unwrap();

        assert_eq!(classified, Classified::Directory(vec![root.join("b.js")]));
    }

    #[test]
    fn test_classify_missing_path() {
        let temp_dir = TempDir::new().unwrap();
        let filter = EligibilityFilter::for_kind(InputKind::Convert);

        let result = classify(&LocalFs, &filter, &temp_dir.path().join("missing"));
        assert!(matches!(result, Err(DecafError::Stat { .. })));
    }
}
