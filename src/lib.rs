//! decaf - CoffeeScript/JavaScript BATCH CONVERTER
//!
//! 파일과 폴더 목록을 받아 대상 파일마다 외부 변환 엔진을 실행하고, 결과를
//! 같은 위치의 `.js` 파일로 저장하는 CLI 도구입니다.
//!
//! # 주요 기능
//!
//! - 📂 **작업 목록 처리**: 폴더의 대상 파일을 목록 앞쪽에 끼워 넣어 순서대로 처리
//! - 🔍 **대상 파일 선택**: `.coffee`, `.litcoffee`, `.coffee.md` 또는 `--modernize-js` 모드의 `.js`
//! - 🧩 **교체 가능한 변환 엔진**: `Converter` 트레이트, 기본은 외부 프로그램 실행
//! - 📝 **에러 누적**: 읽기/쓰기 실패는 모아서 보고하고 실행은 계속
//! - 🛑 **즉시 중단**: 변환 엔진 실패는 진단을 출력하고 바로 종료
//! - 🔁 **스트림 모드**: 경로가 없으면 표준 입력을 변환하여 표준 출력으로
//!
//! # 예제
//!
//! ```bash
//! # 폴더 변환
//! decaf src/
//!
//! # JavaScript 현대화
//! decaf --modernize-js dist/
//!
//! # 표준 입출력
//! decaf < input.coffee > output.js
//! ```

pub mod classify;
pub mod cli;
pub mod config;
pub mod engine;
pub mod error;
pub mod output_path;
pub mod pattern;
pub mod processor;
pub mod report;
pub mod stats;
pub mod stream;

// Re-exports for convenient access
pub use classify::{classify, Classified, EntryKind, FileSystem, LocalFs};
pub use cli::Args;
pub use config::{EngineOptions, InputKind, RunConfiguration};
pub use engine::{CommandEngine, ConvertError, ConvertRequest, Converter, PatchError};
pub use error::{DecafError, FatalError, Result};
pub use output_path::resolve_path;
pub use pattern::EligibilityFilter;
pub use processor::{run_with_paths, ProgressSink, Processor, RunResult};
pub use stats::{format_bytes, Statistics};
pub use stream::run_with_stream;
