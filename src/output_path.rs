//! 출력 경로 계산 모듈

use std::path::{Path, PathBuf};

/// 하나의 확장자로 취급하는 literate markdown 접미사
pub const LITERATE_MARKDOWN_SUFFIX: &str = ".coffee.md";

/// 출력 파일 확장자 (점 제외)
pub const OUTPUT_EXTENSION: &str = "js";

/// 소스 경로로부터 결과 파일 경로를 계산
///
/// 같은 폴더에 확장자만 `.js`로 바꾼 경로를 돌려줍니다. 이름이
/// `.coffee.md`로 끝나면 접미사 전체를 확장자로 봅니다. 이미 존재하는
/// 파일과의 충돌은 검사하지 않습니다.
///
/// # Examples
/// ```
/// use std::path::Path;
/// use decaf::output_path::resolve_path;
///
/// assert_eq!(resolve_path(Path::new("a/b/Foo.coffee.md")), Path::new("a/b/Foo.js"));
/// assert_eq!(resolve_path(Path::new("a/b/Foo.coffee")), Path::new("a/b/Foo.js"));
/// ```
pub fn resolve_path(source: &Path) -> PathBuf {
    let literate_stem = source
        .file_name()
        .and_then(|name| name.to_str())
        .and_then(|name| name.strip_suffix(LITERATE_MARKDOWN_SUFFIX))
        .filter(|stem| !stem.is_empty());

    match literate_stem {
        Some(stem) => source.with_file_name(format!("{}.{}", stem, OUTPUT_EXTENSION)),
        None => source.with_extension(OUTPUT_EXTENSION),
    }
}

/// 파일 이름이 literate CoffeeScript 형식인지 확인
pub fn is_literate(path: &Path) -> bool {
    path.file_name()
        .and_then(|name| name.to_str())
        .map(|name| name.ends_with(".litcoffee") || name.ends_with(LITERATE_MARKDOWN_SUFFIX))
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn resolve(path: &str) -> PathBuf {
        resolve_path(Path::new(path))
    }

    #[test]
    fn test_single_extension_is_replaced() {
        assert_eq!(resolve("a/b/Foo.coffee"), PathBuf::from("a/b/Foo.js"));
        assert_eq!(resolve("a/b/Foo.litcoffee"), PathBuf::from("a/b/Foo.js"));
        assert_eq!(resolve("Foo.md"), PathBuf::from("Foo.js"));
    }

    #[test]
    fn test_literate_markdown_suffix_is_stripped_whole() {
        assert_eq!(resolve("a/b/Foo.coffee.md"), PathBuf::from("a/b/Foo.js"));
        assert_eq!(resolve("Foo.coffee.md"), PathBuf::from("Foo.js"));
    }

    #[test]
    fn test_only_last_extension_is_replaced() {
        assert_eq!(resolve("lib/app.min.coffee"), PathBuf::from("lib/app.min.js"));
        assert_eq!(resolve("x.coffee.txt"), PathBuf::from("x.coffee.js"));
    }

    #[test]
    fn test_modernize_targets_same_file() {
        assert_eq!(resolve("src/index.js"), PathBuf::from("src/index.js"));
    }

    #[test]
    fn test_without_extension() {
        assert_eq!(resolve("bin/cake"), PathBuf::from("bin/cake.js"));
    }

    #[test]
    fn test_directory_is_kept() {
        let resolved = resolve("/tmp/project/src/Foo.coffee");
        assert_eq!(resolved.parent(), Some(Path::new("/tmp/project/src")));
    }

    #[test]
    fn test_is_literate() {
        assert!(is_literate(Path::new("a/Foo.litcoffee")));
        assert!(is_literate(Path::new("a/Foo.coffee.md")));
        assert!(!is_literate(Path::new("a/Foo.coffee")));
        assert!(!is_literate(Path::new("a/Foo.md")));
    }
}
