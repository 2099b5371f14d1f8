//! 에러 타입 정의 모듈
//!
//! 실행 중 누적되는 비치명적 에러와 실행을 즉시 중단시키는 치명적 에러를 정의합니다.

use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::engine::PatchError;

/// decaf에서 발생할 수 있는 에러 타입
///
/// `Stat`, `ListDirectory`, `Read`, `Write`는 작업 목록을 처리하는 동안
/// 누적되며 실행을 멈추지 않습니다.
#[derive(Error, Debug)]
pub enum DecafError {
    /// 경로 정보 조회 실패
    #[error("경로 정보를 읽을 수 없습니다 ({path}): {source}")]
    Stat {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// 폴더 항목 나열 실패
    #[error("폴더를 나열할 수 없습니다 ({path}): {source}")]
    ListDirectory {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// 소스 파일 읽기 실패
    #[error("파일을 읽을 수 없습니다 ({path}): {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// 결과 파일 쓰기 실패
    #[error("파일 쓰기 실패 ({path}): {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// 표준 입출력 스트림 처리 실패
    #[error("스트림 처리 실패: {source}")]
    Stream {
        #[source]
        source: io::Error,
    },

    /// 에러 로그 파일 작성 실패
    #[error("에러 로그를 작성할 수 없습니다 ({path}): {reason}")]
    LogWrite { path: PathBuf, reason: String },

    /// 유효하지 않은 패턴
    #[error("유효하지 않은 패턴: {pattern}")]
    InvalidPattern { pattern: String },
}

impl DecafError {
    /// 에러와 연관된 경로 (있는 경우)
    pub fn path(&self) -> Option<&Path> {
        match self {
            DecafError::Stat { path, .. }
            | DecafError::ListDirectory { path, .. }
            | DecafError::Read { path, .. }
            | DecafError::Write { path, .. }
            | DecafError::LogWrite { path, .. } => Some(path),
            DecafError::Stream { .. } | DecafError::InvalidPattern { .. } => None,
        }
    }

    /// 에러 종류를 나타내는 짧은 이름 (로그 파일용)
    pub fn kind(&self) -> &'static str {
        match self {
            DecafError::Stat { .. } => "stat",
            DecafError::ListDirectory { .. } => "list",
            DecafError::Read { .. } => "read",
            DecafError::Write { .. } => "write",
            DecafError::Stream { .. } => "stream",
            DecafError::LogWrite { .. } => "log",
            DecafError::InvalidPattern { .. } => "pattern",
        }
    }
}

/// 실행 전체를 즉시 중단시키는 에러
///
/// 변환 엔진이 실패하면 남은 작업 목록은 처리하지 않습니다.
#[derive(Error, Debug)]
pub enum FatalError {
    /// 사용자에게 보여줄 수 있는 변환 진단
    #[error("{}", .error.pretty_print())]
    Diagnostic {
        path: Option<PathBuf>,
        error: PatchError,
    },

    /// 변환 엔진 내부 오류 (원본 에러를 그대로 전달)
    #[error("변환 엔진 오류{}", display_path(.path))]
    Engine {
        path: Option<PathBuf>,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// 스트림 모드의 입출력 실패
    #[error(transparent)]
    Stream(DecafError),
}

fn display_path(path: &Option<PathBuf>) -> String {
    match path {
        Some(path) => format!(" ({})", path.display()),
        None => String::new(),
    }
}

/// decaf 결과 타입 별칭
pub type Result<T> = std::result::Result<T, DecafError>;
