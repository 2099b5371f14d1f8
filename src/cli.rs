//! CLI 인자 파싱 모듈
//!
//! clap을 사용한 명령줄 인자 정의 및 실행 설정 변환을 담당합니다.

use clap::Parser;
use std::path::PathBuf;

use crate::config::{EngineOptions, RunConfiguration};
use crate::engine::{CommandEngine, DEFAULT_ENGINE};
use crate::error::Result;
use crate::pattern::EligibilityFilter;

/// decaf CLI 인자 구조체
#[derive(Parser, Debug)]
#[command(
    name = "decaf",
    author = "YourName <your@email.com>",
    version,
    about = "CoffeeScript/JavaScript batch converter - 파일과 폴더 단위로 변환 엔진을 실행하는 CLI 도구",
    long_about = r#"
CoffeeScript/JavaScript BATCH CONVERTER
=======================================

지정된 파일과 폴더를 순서대로 변환하여 같은 위치에 .js 파일로 저장합니다.
경로를 지정하지 않으면 표준 입력을 변환하여 표준 출력으로 내보냅니다.

특징:
  • 폴더는 바로 아래의 대상 파일만 처리 (.coffee, .litcoffee, .coffee.md)
  • --modernize-js 모드에서는 .js 파일을 제자리에서 현대화
  • 읽기/쓰기 실패는 모아서 보고하고 나머지 파일은 계속 처리
  • 변환 실패(문법 오류 등)는 즉시 중단

예제:
  decaf src/
  decaf src/ lib/helpers.coffee --loose
  decaf --modernize-js dist/
  decaf < input.coffee > output.js
  decaf src/ --log errors.jsonl
  decaf src/ --pattern "*.cjsx"
"#
)]
pub struct Args {
    /// 변환할 파일 또는 폴더 (없으면 표준 입력 사용)
    pub paths: Vec<PathBuf>,

    /// JavaScript 파일을 현대화 (.js 파일 대상)
    #[arg(long)]
    pub modernize_js: bool,

    /// 입력을 literate CoffeeScript로 취급
    #[arg(long)]
    pub literate: bool,

    /// CoffeeScript 2 문법 사용
    #[arg(long)]
    pub use_cs2: bool,

    /// 모든 loose 옵션 활성화
    #[arg(long)]
    pub loose: bool,

    /// const 대신 let 선호
    #[arg(long)]
    pub prefer_let: bool,

    /// require/module.exports를 import/export로 변환
    #[arg(long)]
    pub use_js_modules: bool,

    /// import/export 변환 시 안전성 검사 생략
    #[arg(long)]
    pub loose_js_modules: bool,

    /// 부작용이 없다고 가정할 import 함수 이름 (쉼표로 구분)
    #[arg(long)]
    pub safe_import_function_identifiers: Option<String>,

    /// 결과 파일 상단의 안내 주석 생략
    #[arg(long)]
    pub disable_suggestion_comment: bool,

    /// Array.prototype.includes 사용 안 함
    #[arg(long)]
    pub no_array_includes: bool,

    /// 옵셔널 체이닝(?.) 사용
    #[arg(long)]
    pub use_optional_chaining: bool,

    /// 논리 할당 연산자(||=, &&=, ??=) 사용
    #[arg(long)]
    pub logical_assignment: bool,

    /// Babel 생성자 우회 코드 생략
    #[arg(long)]
    pub disable_babel_constructor_workaround: bool,

    /// 유효하지 않은 생성자를 에러로 처리
    #[arg(long)]
    pub disallow_invalid_constructors: bool,

    /// 기본 매개변수를 그대로 변환
    #[arg(long)]
    pub loose_default_params: bool,

    /// for 표현식을 단순하게 변환
    #[arg(long)]
    pub loose_for_expressions: bool,

    /// for-of를 단순하게 변환
    #[arg(long)]
    pub loose_for_of: bool,

    /// in 연산자를 includes로 단순 변환
    #[arg(long)]
    pub loose_includes: bool,

    /// 비교 연산 부정을 단순하게 변환
    #[arg(long)]
    pub loose_comparison_negation: bool,

    /// 폴더 항목 이름 패턴 (glob 형식, 여러 번 지정 가능). 지정하면 기본 확장자 필터를 대신합니다
    #[arg(short, long)]
    pub pattern: Vec<String>,

    /// 외부 변환 프로그램
    #[arg(long, default_value = DEFAULT_ENGINE)]
    pub engine: String,

    /// 변환 프로그램에 먼저 넘길 인자 (여러 번 지정 가능)
    #[arg(long = "engine-arg", allow_hyphen_values = true)]
    pub engine_args: Vec<String>,

    /// 누적된 에러를 JSON Lines로 기록할 파일 경로
    #[arg(long)]
    pub log: Option<PathBuf>,

    /// 상세 출력 모드
    #[arg(short, long)]
    pub verbose: bool,
}

impl Args {
    /// 쉼표로 구분된 import 함수 이름 목록
    pub fn get_safe_import_function_identifiers(&self) -> Vec<String> {
        self.safe_import_function_identifiers
            .as_ref()
            .map(|f| {
                f.split(',')
                    .map(|s| s.trim().to_string())
                    .filter(|s| !s.is_empty())
                    .collect()
            })
            .unwrap_or_default()
    }

    /// 변환 엔진 옵션
    pub fn engine_options(&self) -> EngineOptions {
        EngineOptions {
            modernize_js: self.modernize_js,
            literate: self.literate,
            use_cs2: self.use_cs2,
            loose: self.loose,
            prefer_let: self.prefer_let,
            use_js_modules: self.use_js_modules,
            loose_js_modules: self.loose_js_modules,
            safe_import_function_identifiers: self.get_safe_import_function_identifiers(),
            disable_suggestion_comment: self.disable_suggestion_comment,
            no_array_includes: self.no_array_includes,
            use_optional_chaining: self.use_optional_chaining,
            logical_assignment: self.logical_assignment,
            disable_babel_constructor_workaround: self.disable_babel_constructor_workaround,
            disallow_invalid_constructors: self.disallow_invalid_constructors,
            loose_default_params: self.loose_default_params,
            loose_for_expressions: self.loose_for_expressions,
            loose_for_of: self.loose_for_of,
            loose_includes: self.loose_includes,
            loose_comparison_negation: self.loose_comparison_negation,
        }
    }

    /// 실행 설정
    pub fn run_config(&self) -> RunConfiguration {
        RunConfiguration::new().with_engine_options(self.engine_options())
    }

    /// 폴더 항목 필터
    ///
    /// `--pattern`이 없으면 모드에 맞는 확장자 필터를 씁니다.
    pub fn eligibility_filter(&self) -> Result<EligibilityFilter> {
        if self.pattern.is_empty() {
            Ok(EligibilityFilter::for_kind(self.run_config().input_kind))
        } else {
            EligibilityFilter::from_patterns(&self.pattern)
        }
    }

    /// 외부 변환 엔진
    pub fn command_engine(&self) -> CommandEngine {
        CommandEngine::new(&self.engine).with_args(&self.engine_args)
    }

    /// 표준 입출력 모드 여부
    pub fn is_stream_mode(&self) -> bool {
        self.paths.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::InputKind;

    fn parse(args: &[&str]) -> Args {
        Args::try_parse_from(std::iter::once("decaf").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn test_no_paths_is_stream_mode() {
        let args = parse(&[]);
        assert!(args.is_stream_mode());
        assert_eq!(args.engine, DEFAULT_ENGINE);
    }

    #[test]
    fn test_paths_keep_order() {
        let args = parse(&["b", "a.coffee", "c"]);
        assert_eq!(
            args.paths,
            vec![PathBuf::from("b"), PathBuf::from("a.coffee"), PathBuf::from("c")]
        );
        assert!(!args.is_stream_mode());
    }

    #[test]
    fn test_modernize_switch() {
        let config = parse(&["--modernize-js", "dist"]).run_config();
        assert_eq!(config.input_kind, InputKind::Modernize);
        assert!(config.engine.modernize_js);

        let config = parse(&["src"]).run_config();
        assert_eq!(config.input_kind, InputKind::Convert);
    }

    #[test]
    fn test_safe_import_identifiers_parsing() {
        let args = parse(&["--safe-import-function-identifiers", "a, b,,c", "src"]);
        assert_eq!(args.get_safe_import_function_identifiers(), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_engine_args() {
        let args = parse(&["--engine", "node", "--engine-arg", "--stack-size=4096", "src"]);
        assert_eq!(args.engine, "node");
        assert_eq!(args.engine_args, vec!["--stack-size=4096"]);
    }

    #[test]
    fn test_default_filter_follows_mode() {
        let filter = parse(&["--modernize-js", "dist"]).eligibility_filter().unwrap();
        assert!(filter.matches("app.js"));
        assert!(!filter.matches("app.coffee"));
    }

    #[test]
    fn test_pattern_replaces_default_filter() {
        let filter = parse(&["--pattern", "*.cjsx", "-p", "*.iced", "src"])
            .eligibility_filter()
            .unwrap();
        assert!(filter.matches("view.cjsx"));
        assert!(filter.matches("task.iced"));
        assert!(!filter.matches("app.coffee"));
    }

    #[test]
    fn test_invalid_pattern() {
        let result = parse(&["--pattern", "[invalid", "src"]).eligibility_filter();
        assert!(matches!(
            result,
            Err(crate::error::DecafError::InvalidPattern { .. })
        ));
    }

    #[test]
    fn test_engine_options_forwarded() {
        let options = parse(&["--loose", "--use-js-modules", "src"]).engine_options();
        assert!(options.loose);
        assert!(options.use_js_modules);
        assert!(!options.prefer_let);
    }
}
