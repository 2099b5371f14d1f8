//! 변환 엔진 모듈
//!
//! 소스 텍스트 하나를 변환하는 `Converter` 포트와, 외부 변환 프로그램을
//! 실행하는 기본 구현 `CommandEngine`을 제공합니다.

use std::ffi::OsString;
use std::fmt::Write as _;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};
use std::thread;

use thiserror::Error;
use tracing::debug;

use crate::config::EngineOptions;
use crate::output_path::is_literate;

/// 외부 엔진 프로세스에 소스 파일 이름을 전달하는 환경 변수
pub const FILENAME_ENV: &str = "DECAF_FILENAME";

/// 기본 외부 변환 프로그램
pub const DEFAULT_ENGINE: &str = "decaffeinate";

/// 변환 요청 한 건의 부가 정보
#[derive(Debug, Clone, Copy)]
pub struct ConvertRequest<'a> {
    /// 소스 파일 경로 (스트림 모드에서는 없음)
    pub filename: Option<&'a Path>,
    /// 엔진 옵션
    pub options: &'a EngineOptions,
}

/// 사용자에게 보여줄 수 있는 변환 진단
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{message}")]
pub struct PatchError {
    pub message: String,
    pub filename: Option<PathBuf>,
    /// 1부터 시작하는 줄 번호
    pub line: Option<usize>,
    /// 1부터 시작하는 열 번호
    pub column: Option<usize>,
    pub source_text: Option<String>,
}

impl PatchError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            filename: None,
            line: None,
            column: None,
            source_text: None,
        }
    }

    pub fn with_filename(mut self, filename: Option<&Path>) -> Self {
        self.filename = filename.map(Path::to_path_buf);
        self
    }

    pub fn with_location(mut self, line: usize, column: usize) -> Self {
        self.line = Some(line);
        self.column = Some(column);
        self
    }

    pub fn with_source_text(mut self, source_text: impl Into<String>) -> Self {
        self.source_text = Some(source_text.into());
        self
    }

    /// `파일:줄:열: 메시지` 형식과 해당 소스 줄, 위치 표시를 렌더링
    pub fn pretty_print(&self) -> String {
        let mut out = String::new();

        if let Some(filename) = &self.filename {
            let _ = write!(out, "{}:", filename.display());
        }
        if let Some(line) = self.line {
            let _ = write!(out, "{}:", line);
            if let Some(column) = self.column {
                let _ = write!(out, "{}:", column);
            }
        }
        if !out.is_empty() {
            out.push(' ');
        }
        out.push_str(&self.message);

        let excerpt = self.line.and_then(|line| {
            let text = self.source_text.as_ref()?;
            text.lines().nth(line.checked_sub(1)?).map(|src| (line, src))
        });

        if let Some((line, src)) = excerpt {
            let gutter = line.to_string();
            let _ = write!(out, "\n{} | {}", gutter, src);
            if let Some(column) = self.column {
                let _ = write!(
                    out,
                    "\n{} | {}^",
                    " ".repeat(gutter.len()),
                    " ".repeat(column.saturating_sub(1))
                );
            }
        }

        out
    }
}

/// 변환 실패
#[derive(Error, Debug)]
pub enum ConvertError {
    /// 입력에 대한 진단 (사용자 조치 필요)
    #[error(transparent)]
    Patch(#[from] PatchError),

    /// 엔진 또는 실행 환경의 내부 오류
    #[error(transparent)]
    Internal(Box<dyn std::error::Error + Send + Sync>),
}

impl ConvertError {
    pub fn internal(error: impl Into<Box<dyn std::error::Error + Send + Sync>>) -> Self {
        ConvertError::Internal(error.into())
    }
}

/// 소스 텍스트 하나를 변환하는 포트
pub trait Converter {
    fn convert(&self, source: &str, request: &ConvertRequest<'_>) -> Result<String, ConvertError>;
}

impl<F> Converter for F
where
    F: Fn(&str, &ConvertRequest<'_>) -> Result<String, ConvertError>,
{
    fn convert(&self, source: &str, request: &ConvertRequest<'_>) -> Result<String, ConvertError> {
        self(source, request)
    }
}

/// 외부 변환 프로그램을 실행하는 엔진
///
/// 소스는 표준 입력으로 보내고 변환 결과는 표준 출력에서 읽습니다.
/// 프로그램이 0이 아닌 코드로 끝나면 표준 에러 내용을 진단으로 돌려줍니다.
#[derive(Debug, Clone)]
pub struct CommandEngine {
    program: OsString,
    args: Vec<OsString>,
}

impl Default for CommandEngine {
    fn default() -> Self {
        Self::new(DEFAULT_ENGINE)
    }
}

impl CommandEngine {
    pub fn new(program: impl Into<OsString>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
        }
    }

    /// 엔진 옵션 플래그 앞에 붙는 인자 설정
    pub fn with_args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<OsString>,
    {
        self.args = args.into_iter().map(Into::into).collect();
        self
    }

    fn build_command(&self, request: &ConvertRequest<'_>) -> Command {
        let mut flags = request.options.to_flags();
        let literate_file = request.filename.map(is_literate).unwrap_or(false);
        if literate_file && !request.options.literate {
            flags.push("--literate".to_string());
        }

        let mut command = Command::new(&self.program);
        command
            .args(&self.args)
            .args(&flags)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped());

        if let Some(filename) = request.filename {
            command.env(FILENAME_ENV, filename);
        }

        command
    }
}

impl Converter for CommandEngine {
    fn convert(&self, source: &str, request: &ConvertRequest<'_>) -> Result<String, ConvertError> {
        let mut command = self.build_command(request);
        debug!(program = ?self.program, filename = ?request.filename, "변환 엔진 실행");

        let mut child = command.spawn().map_err(ConvertError::internal)?;
        let mut stdin = child.stdin.take().ok_or_else(|| {
            ConvertError::internal(io::Error::other("변환 엔진의 표준 입력을 열 수 없습니다"))
        })?;

        // 출력 파이프가 가득 차 멈추지 않도록 입력은 별도 스레드에서 씁니다.
        let (written, output) = thread::scope(|scope| {
            let writer = scope.spawn(move || stdin.write_all(source.as_bytes()));
            let output = child.wait_with_output();
            (writer.join(), output)
        });

        match written {
            Ok(Ok(())) => {}
            // 입력을 다 읽지 않고 끝난 엔진은 종료 상태로 판단합니다.
            Ok(Err(e)) if e.kind() == io::ErrorKind::BrokenPipe => {}
            Ok(Err(e)) => return Err(ConvertError::internal(e)),
            Err(_) => return Err(ConvertError::internal("변환 엔진 입력 스레드가 중단되었습니다")),
        }

        let output = output.map_err(ConvertError::internal)?;

        if output.status.success() {
            return String::from_utf8(output.stdout).map_err(ConvertError::internal);
        }

        let Some(code) = output.status.code() else {
            return Err(ConvertError::internal(format!(
                "변환 엔진이 비정상 종료되었습니다: {}",
                output.status
            )));
        };

        let stderr = String::from_utf8_lossy(&output.stderr);
        let stdout = String::from_utf8_lossy(&output.stdout);
        let message = [stderr.trim(), stdout.trim()]
            .into_iter()
            .find(|text| !text.is_empty())
            .map(str::to_string)
            .unwrap_or_else(|| format!("변환 엔진이 종료 코드 {}로 실패했습니다", code));

        Err(PatchError::new(message)
            .with_filename(request.filename)
            .with_source_text(source)
            .into())
    }
}
