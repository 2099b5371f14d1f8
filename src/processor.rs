//! 작업 목록 처리 모듈
//!
//! 사용자가 넘긴 경로 목록을 하나의 작업 목록으로 만들고, 앞에서부터
//! 하나씩 분류하여 폴더는 펼치고 파일은 변환합니다.
//!
//! - 폴더의 처리 대상 항목은 작업 목록 **앞쪽**에 나열 순서대로 들어가므로
//!   먼저 대기 중이던 경로보다 먼저 처리됩니다.
//! - 경로 조회, 폴더 나열, 읽기, 쓰기 실패는 `RunResult`에 누적되고 실행은
//!   계속됩니다.
//! - 변환 엔진 실패는 누적되지 않고 즉시 실행 전체를 중단합니다.
//! - 한 번에 하나의 파일 시스템 작업만 수행합니다.

use std::collections::VecDeque;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::classify::{classify, Classified, FileSystem};
use crate::config::RunConfiguration;
use crate::engine::{ConvertError, ConvertRequest, Converter};
use crate::error::{DecafError, FatalError};
use crate::output_path::resolve_path;
use crate::pattern::EligibilityFilter;
use crate::stats::Statistics;

/// 처리 진행 상황을 받는 쪽
pub trait ProgressSink {
    /// 작업 목록의 맨 앞 항목을 분류하기 직전
    fn on_item(&self, _path: &Path) {}

    /// 파일 변환 직전 (`source → destination`)
    fn on_file(&self, source: &Path, destination: &Path);

    /// 비치명적 에러가 누적될 때
    fn on_error(&self, _error: &DecafError) {}
}

/// 아무것도 표시하지 않는 진행 상황 수신자
impl ProgressSink for () {
    fn on_file(&self, _source: &Path, _destination: &Path) {}
}

/// 한 번의 실행 결과
#[derive(Debug, Default)]
pub struct RunResult {
    /// 발생 순서대로 누적된 비치명적 에러
    pub errors: Vec<DecafError>,
    pub stats: Statistics,
}

impl RunResult {
    pub fn new() -> Self {
        Self {
            errors: Vec::new(),
            stats: Statistics::new(),
        }
    }

    /// 에러 없이 끝났는지 확인
    pub fn is_success(&self) -> bool {
        self.errors.is_empty()
    }
}

/// 작업 목록 처리기
pub struct Processor<'a, F: ?Sized, C: ?Sized> {
    config: &'a RunConfiguration,
    fs: &'a F,
    converter: &'a C,
    filter: EligibilityFilter,
    progress: &'a dyn ProgressSink,
}

impl<'a, F, C> Processor<'a, F, C>
where
    F: FileSystem + ?Sized,
    C: Converter + ?Sized,
{
    pub fn new(config: &'a RunConfiguration, fs: &'a F, converter: &'a C) -> Self {
        Self {
            config,
            fs,
            converter,
            filter: EligibilityFilter::for_kind(config.input_kind),
            progress: &(),
        }
    }

    /// 진행 상황 수신자 설정
    pub fn with_progress(mut self, progress: &'a dyn ProgressSink) -> Self {
        self.progress = progress;
        self
    }

    /// 폴더 항목 필터 교체
    pub fn with_filter(mut self, filter: EligibilityFilter) -> Self {
        self.filter = filter;
        self
    }

    /// 작업 목록이 빌 때까지 처리
    ///
    /// # Returns
    /// 누적된 비치명적 에러를 담은 `RunResult`, 또는 변환 엔진이 실패했을 때
    /// `FatalError`
    pub fn run<I, P>(&self, paths: I) -> Result<RunResult, FatalError>
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        let mut queue: VecDeque<PathBuf> = paths.into_iter().map(Into::into).collect();
        let mut result = RunResult::new();

        while let Some(path) = queue.pop_front() {
            self.progress.on_item(&path);

            match classify(self.fs, &self.filter, &path) {
                Ok(Classified::Directory(children)) => {
                    debug!(path = %path.display(), children = children.len(), "폴더 펼침");
                    result.stats.record_directory();
                    for child in children.into_iter().rev() {
                        queue.push_front(child);
                    }
                }
                Ok(Classified::File) => {
                    if let Err(fatal) = self.process_file(&path, &mut result) {
                        debug!(remaining = queue.len(), "변환 실패로 작업 목록 중단");
                        return Err(fatal);
                    }
                }
                Err(e) => self.record(&mut result, e),
            }
        }

        Ok(result)
    }

    fn process_file(&self, path: &Path, result: &mut RunResult) -> Result<(), FatalError> {
        let source = match self.fs.read_to_string(path) {
            Ok(source) => source,
            Err(source) => {
                self.record(
                    result,
                    DecafError::Read {
                        path: path.to_path_buf(),
                        source,
                    },
                );
                return Ok(());
            }
        };

        let destination = resolve_path(path);
        self.progress.on_file(path, &destination);

        let request = ConvertRequest {
            filename: Some(path),
            options: &self.config.engine,
        };

        let code = match self.converter.convert(&source, &request) {
            Ok(code) => code,
            Err(ConvertError::Patch(error)) => {
                return Err(FatalError::Diagnostic {
                    path: Some(path.to_path_buf()),
                    error,
                })
            }
            Err(ConvertError::Internal(source)) => {
                return Err(FatalError::Engine {
                    path: Some(path.to_path_buf()),
                    source,
                })
            }
        };

        match self.fs.write(&destination, &code) {
            Ok(()) => result
                .stats
                .record_converted(source.len() as u64, code.len() as u64),
            Err(source) => self.record(
                result,
                DecafError::Write {
                    path: destination,
                    source,
                },
            ),
        }

        Ok(())
    }

    fn record(&self, result: &mut RunResult, error: DecafError) {
        warn!("{}", error);
        self.progress.on_error(&error);
        result.stats.record_error();
        result.errors.push(error);
    }
}

/// 기본 설정으로 경로 목록을 처리하는 편의 함수
pub fn run_with_paths<F, C, I, P>(
    paths: I,
    config: &RunConfiguration,
    fs: &F,
    converter: &C,
) -> Result<RunResult, FatalError>
where
    F: FileSystem + ?Sized,
    C: Converter + ?Sized,
    I: IntoIterator<Item = P>,
    P: Into<PathBuf>,
{
    Processor::new(config, fs, converter).run(paths)
}
