//! 실행 설정 모듈
//!
//! CLI 인자에서 만들어지는 불변 실행 설정과 변환 엔진 옵션을 정의합니다.

use serde::Serialize;

/// 입력으로 인정할 파일 종류
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum InputKind {
    /// CoffeeScript 소스 (`.coffee`, `.litcoffee`, `.coffee.md`)
    #[default]
    Convert,
    /// 기존 JavaScript 소스를 현대화 (`.js`)
    Modernize,
}

impl InputKind {
    /// 이 종류가 인정하는 파일 이름 접미사
    pub fn extensions(self) -> &'static [&'static str] {
        match self {
            InputKind::Convert => &[".coffee", ".litcoffee", ".coffee.md"],
            InputKind::Modernize => &[".js"],
        }
    }
}

impl std::fmt::Display for InputKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            InputKind::Convert => write!(f, "convert"),
            InputKind::Modernize => write!(f, "modernize-js"),
        }
    }
}

/// 변환 엔진에 그대로 전달되는 옵션
///
/// 코어는 이 값을 해석하지 않습니다.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct EngineOptions {
    pub modernize_js: bool,
    pub literate: bool,
    pub use_cs2: bool,
    pub loose: bool,
    pub prefer_let: bool,
    pub use_js_modules: bool,
    pub loose_js_modules: bool,
    pub safe_import_function_identifiers: Vec<String>,
    pub disable_suggestion_comment: bool,
    pub no_array_includes: bool,
    pub use_optional_chaining: bool,
    pub logical_assignment: bool,
    pub disable_babel_constructor_workaround: bool,
    pub disallow_invalid_constructors: bool,
    pub loose_default_params: bool,
    pub loose_for_expressions: bool,
    pub loose_for_of: bool,
    pub loose_includes: bool,
    pub loose_comparison_negation: bool,
}

impl EngineOptions {
    /// 활성화된 옵션을 엔진 명령줄 플래그로 변환
    pub fn to_flags(&self) -> Vec<String> {
        let switches = [
            (self.modernize_js, "--modernize-js"),
            (self.literate, "--literate"),
            (self.use_cs2, "--use-cs2"),
            (self.loose, "--loose"),
            (self.prefer_let, "--prefer-let"),
            (self.use_js_modules, "--use-js-modules"),
            (self.loose_js_modules, "--loose-js-modules"),
            (self.disable_suggestion_comment, "--disable-suggestion-comment"),
            (self.no_array_includes, "--no-array-includes"),
            (self.use_optional_chaining, "--use-optional-chaining"),
            (self.logical_assignment, "--logical-assignment"),
            (
                self.disable_babel_constructor_workaround,
                "--disable-babel-constructor-workaround",
            ),
            (
                self.disallow_invalid_constructors,
                "--disallow-invalid-constructors",
            ),
            (self.loose_default_params, "--loose-default-params"),
            (self.loose_for_expressions, "--loose-for-expressions"),
            (self.loose_for_of, "--loose-for-of"),
            (self.loose_includes, "--loose-includes"),
            (self.loose_comparison_negation, "--loose-comparison-negation"),
        ];

        let mut flags: Vec<String> = switches
            .iter()
            .filter(|(enabled, _)| *enabled)
            .map(|(_, flag)| flag.to_string())
            .collect();

        if !self.safe_import_function_identifiers.is_empty() {
            flags.push("--safe-import-function-identifiers".to_string());
            flags.push(self.safe_import_function_identifiers.join(","));
        }

        flags
    }
}

/// 한 번의 실행 동안 변하지 않는 설정
#[derive(Debug, Clone, Default)]
pub struct RunConfiguration {
    /// 폴더 안에서 처리 대상으로 인정할 파일 종류
    pub input_kind: InputKind,
    /// 변환 엔진 옵션
    pub engine: EngineOptions,
}

impl RunConfiguration {
    /// 기본 설정 생성 (CoffeeScript 변환)
    pub fn new() -> Self {
        Self::default()
    }

    /// 현대화 모드 설정. 입력 종류와 엔진 옵션을 함께 맞춥니다.
    pub fn with_modernize_js(mut self, modernize_js: bool) -> Self {
        self.input_kind = if modernize_js {
            InputKind::Modernize
        } else {
            InputKind::Convert
        };
        self.engine.modernize_js = modernize_js;
        self
    }

    /// 엔진 옵션 설정
    pub fn with_engine_options(mut self, engine: EngineOptions) -> Self {
        self.input_kind = if engine.modernize_js {
            InputKind::Modernize
        } else {
            InputKind::Convert
        };
        self.engine = engine;
        self
    }
}
